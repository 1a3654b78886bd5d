use exprwalk::*;
use pretty_assertions::assert_eq;

fn op(kind: TokenType, lexeme: &str) -> Token {
    Token::operator(kind, lexeme, 1)
}

fn print(expr: &Expr) -> String {
    RpnPrinter::new().print(expr)
}

/// `(2 + 3) * (5 - -1)` with the first group already elided.
fn sample() -> Expr {
    Expr::binary(
        Expr::binary(
            Expr::literal(2),
            op(TokenType::Plus, "+"),
            Expr::literal(3),
        ),
        op(TokenType::Star, "*"),
        Expr::grouping(Expr::binary(
            Expr::literal(5),
            op(TokenType::Minus, "-"),
            Expr::unary(op(TokenType::Minus, "-"), Expr::literal(1)),
        )),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Literals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_nil_literal() {
    assert_eq!(print(&Expr::nil()), "nil");
}

#[test]
fn test_number_literals() {
    assert_eq!(print(&Expr::literal(2)), "2");
    assert_eq!(print(&Expr::literal(2.5)), "2.5");
    assert_eq!(print(&Expr::literal(-7)), "-7");
    assert_eq!(print(&Expr::literal(0.1)), "0.1");
}

#[test]
fn test_string_literal_is_not_quoted() {
    assert_eq!(print(&Expr::literal("hello")), "hello");
    assert_eq!(print(&Expr::literal("")), "");
    assert_eq!(print(&Expr::literal("with \"quotes\"")), "with \"quotes\"");
}

#[test]
fn test_bool_literals() {
    assert_eq!(print(&Expr::literal(true)), "true");
    assert_eq!(print(&Expr::literal(false)), "false");
}

// ═══════════════════════════════════════════════════════════════════════
// Composite Nodes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_grouping_matches_inner() {
    let inners = [
        Expr::nil(),
        Expr::literal("s"),
        Expr::binary(Expr::literal(1), op(TokenType::Less, "<"), Expr::literal(2)),
        Expr::unary(op(TokenType::Bang, "!"), Expr::literal(true)),
        sample(),
    ];
    for inner in inners {
        let grouped = Expr::grouping(inner.clone());
        assert_eq!(print(&grouped), print(&inner));
    }
}

#[test]
fn test_binary_is_left_right_operator() {
    let left = Expr::binary(Expr::literal(1), op(TokenType::Plus, "+"), Expr::literal(2));
    let right = Expr::grouping(Expr::literal("x"));
    let expr = Expr::binary(left.clone(), op(TokenType::EqualEqual, "=="), right.clone());
    assert_eq!(
        print(&expr),
        format!("{} {} {}", print(&left), print(&right), "==")
    );
    assert_eq!(print(&expr), "1 2 + x ==");
}

#[test]
fn test_operator_lexeme_is_used_verbatim() {
    // Only the lexeme is read; kind and line are ignored.
    let odd = Token::new(TokenType::Plus, "plus", None, 99);
    let expr = Expr::binary(Expr::literal(1), odd, Expr::literal(2));
    assert_eq!(print(&expr), "1 2 plus");
}

#[test]
fn test_unary_is_always_empty() {
    let operands = [
        Expr::nil(),
        Expr::literal(1),
        Expr::grouping(Expr::literal(2)),
        sample(),
    ];
    for operand in operands {
        for token in [op(TokenType::Minus, "-"), op(TokenType::Bang, "!")] {
            assert_eq!(print(&Expr::unary(token, operand.clone())), "");
        }
    }
}

#[test]
fn test_nested_unary_is_empty() {
    let expr = Expr::unary(
        op(TokenType::Bang, "!"),
        Expr::unary(op(TokenType::Bang, "!"), Expr::literal(true)),
    );
    assert_eq!(print(&expr), "");
}

#[test]
fn test_unary_on_both_sides() {
    let neg = |n: i32| Expr::unary(op(TokenType::Minus, "-"), Expr::literal(n));
    let expr = Expr::binary(neg(1), op(TokenType::Plus, "+"), neg(2));
    assert_eq!(print(&expr), "  +");
}

// ═══════════════════════════════════════════════════════════════════════
// Whole Trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_scenario() {
    assert_eq!(print(&sample()), "2 3 + 5  - *");
}

#[test]
fn test_deep_left_chain() {
    // ((((0 + 1) + 2) + 3) + 4)
    let mut expr = Expr::literal(0);
    for n in 1..=4 {
        expr = Expr::binary(expr, op(TokenType::Plus, "+"), Expr::literal(n));
    }
    assert_eq!(print(&expr), "0 1 + 2 + 3 + 4 +");
}

#[test]
fn test_deep_right_chain() {
    // 1 - (2 - (3 - 4))
    let expr = Expr::binary(
        Expr::literal(1),
        op(TokenType::Minus, "-"),
        Expr::grouping(Expr::binary(
            Expr::literal(2),
            op(TokenType::Minus, "-"),
            Expr::grouping(Expr::binary(
                Expr::literal(3),
                op(TokenType::Minus, "-"),
                Expr::literal(4),
            )),
        )),
    );
    assert_eq!(print(&expr), "1 2 3 4 - - -");
}

#[test]
fn test_many_groupings_collapse() {
    let mut expr = Expr::literal("core");
    for _ in 0..50 {
        expr = Expr::grouping(expr);
    }
    assert_eq!(print(&expr), "core");
}

#[test]
fn test_rendering_is_idempotent() {
    let expr = sample();
    let mut printer = RpnPrinter::new();
    let first = printer.print(&expr);
    let second = printer.print(&expr);
    assert_eq!(first, second);
    assert_eq!(expr, sample());
}

#[test]
fn test_free_function_matches_printer() {
    assert_eq!(to_rpn(&sample()), print(&sample()));
    assert_eq!(render(&sample(), Format::Rpn), print(&sample()));
}

#[test]
fn test_concurrent_rendering_of_shared_tree() {
    let expr = sample();
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| to_rpn(&expr))).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("render thread panicked"))
            .collect()
    });
    for result in results {
        assert_eq!(result, "2 3 + 5  - *");
    }
}
