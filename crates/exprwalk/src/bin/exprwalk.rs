use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use exprwalk::{render_with, tree, Expr, Format, RenderContext, Token, TokenType};
use tracing_subscriber::EnvFilter;

/// Render a Lox expression tree as text.
#[derive(Parser, Debug)]
#[command(name = "exprwalk", version)]
struct Cli {
    /// Input tree JSON (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Rpn)]
    format: FormatChoice,

    /// Refuse trees deeper than this.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Render the built-in sample tree instead of reading one.
    #[arg(long, conflicts_with = "in_path")]
    demo: bool,

    /// Log tree statistics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Rpn,
    Ast,
}

impl From<FormatChoice> for Format {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Rpn => Format::Rpn,
            FormatChoice::Ast => Format::Ast,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let expr = if cli.demo {
        demo_tree()
    } else {
        read_tree(cli.in_path.as_ref())?
    };

    let mut ctx = RenderContext::new().with_trace(cli.verbose);
    ctx.max_depth = cli.max_depth;

    let out = render_with(&expr, cli.format.into(), &ctx).context("render expression tree")?;
    println!("{out}");
    Ok(())
}

fn read_tree(path: Option<&PathBuf>) -> anyhow::Result<Expr> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            tree::from_reader(BufReader::new(file))
                .with_context(|| format!("decode tree from {}", path.display()))
        }
        None => tree::from_reader(std::io::stdin().lock()).context("decode tree from stdin"),
    }
}

/// Sample tree: `2 + 3` times the group `(5 - -1)`.
fn demo_tree() -> Expr {
    Expr::binary(
        Expr::binary(
            Expr::literal(2),
            Token::operator(TokenType::Plus, "+", 1),
            Expr::literal(3),
        ),
        Token::operator(TokenType::Star, "*", 1),
        Expr::grouping(Expr::binary(
            Expr::literal(5),
            Token::operator(TokenType::Minus, "-", 1),
            Expr::unary(
                Token::operator(TokenType::Minus, "-", 1),
                Expr::literal(1),
            ),
        )),
    )
}
