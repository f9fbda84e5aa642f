mod cmd;
mod output;
mod source;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "delay-predictor",
    about = "Will Mr. Marsh delay the test? Consult the factors and find out",
    version,
    propagate_version = true
)]
struct Cli {
    /// Date to predict for, YYYY-MM-DD (default: today, local time)
    #[arg(long, global = true, env = "DELAY_PREDICTOR_DATE")]
    date: Option<NaiveDate>,

    /// Seed the random source for a reproducible prediction
    #[arg(long, global = true, env = "DELAY_PREDICTOR_SEED")]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict from the factors of the day (the default)
    Predict,

    /// Predict for a named assignment; same name and weekday, same answer
    Assignment {
        /// Assignment name, e.g. "Macbeth Test"
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let today = source::resolve_date(cli.date);

    let result = match cli.command.unwrap_or(Commands::Predict) {
        Commands::Predict => cmd::predict::run(today, cli.seed, cli.json),
        Commands::Assignment { name } => cmd::assignment::run(&name, today, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
