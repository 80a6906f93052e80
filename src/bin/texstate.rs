//! texstate CLI - Evaluate, format and split the way LaTeX counters and etoolbox do

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use texstate::{
    format_numeral, numexpr::evaluate, numexpr::numexpr, separate_list, supported_commands,
    DivisionMode, StateResult,
};
#[cfg(feature = "cli")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texstate")]
#[command(version)]
#[command(about = "texstate - LaTeX counter, flag and list state", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Evaluate an integer expression such as `2*(3+4)`
    Eval {
        /// The expression
        expr: String,

        /// Print an integer instead of the exact value
        #[arg(short, long)]
        integer: bool,

        /// How a fractional result becomes an integer
        #[arg(short, long, value_enum, default_value_t = Division::Rounded)]
        division: Division,
    },

    /// Format a number as a counter would be printed
    Format {
        /// The number
        #[arg(allow_hyphen_values = true)]
        n: i64,

        /// Numeral style
        #[arg(short, long, value_enum, default_value_t = Style::Arabic)]
        style: Style,
    },

    /// Split separated text into items, one per line
    Split {
        /// The text to split
        text: String,

        /// Item separator
        #[arg(short, long, default_value = ",")]
        separator: String,
    },

    /// Show version and supported commands
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Division {
    /// Round half away from zero
    Rounded,
    /// Truncate toward zero
    Truncated,
    /// Fail unless the result is integral
    Real,
}

#[cfg(feature = "cli")]
impl From<Division> for DivisionMode {
    fn from(division: Division) -> Self {
        match division {
            Division::Rounded => DivisionMode::Rounded,
            Division::Truncated => DivisionMode::Truncated,
            Division::Real => DivisionMode::Real,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Style {
    #[value(name = "arabic")]
    Arabic,
    #[value(name = "roman")]
    Roman,
    #[value(name = "Roman")]
    UpperRoman,
    #[value(name = "alph")]
    Alph,
    #[value(name = "Alph")]
    UpperAlph,
    #[value(name = "fnsymbol")]
    FnSymbol,
}

#[cfg(feature = "cli")]
impl Style {
    /// Name of the formatting command
    fn command(self) -> &'static str {
        match self {
            Style::Arabic => "arabic",
            Style::Roman => "roman",
            Style::UpperRoman => "Roman",
            Style::Alph => "alph",
            Style::UpperAlph => "Alph",
            Style::FnSymbol => "fnsymbol",
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("texstate=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match handle_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn handle_command(cmd: Commands) -> StateResult<()> {
    match cmd {
        Commands::Eval {
            expr,
            integer,
            division,
        } => {
            if integer {
                println!("{}", numexpr(&expr, division.into())?);
            } else {
                println!("{}", evaluate(&expr)?);
            }
        }

        Commands::Format { n, style } => {
            println!("{}", format_numeral(n, style.command())?);
        }

        Commands::Split { text, separator } => {
            for item in separate_list(&text, &separator)? {
                println!("{}", item);
            }
        }

        Commands::Info => {
            println!("texstate - LaTeX counter, flag and list state");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Supported commands:");
            for name in supported_commands() {
                println!("  \\{}", name);
            }
            println!();
            println!("Dynamic commands:");
            println!("  \\the<counter>");
            println!("  list parsers declared with \\DeclareListParser");
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texstate --features cli");
    eprintln!("  texstate <COMMAND>");
}
