use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use tracing::warn;
use triage_cli::config::{LogFormat, init_tracing};
use triage_cli::input::load_batch;
use triage_cli::report::{scored_rows, to_json, vitals_listing};
use triage_scoring::cohort::{build_submission, check_submission, process_patients, summarize};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Score patient vitals and build triage cohorts")]
struct Cli {
    /// Log output format
    #[arg(long, env = "TRIAGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every record and print it with its risk score
    Score {
        /// Records file, or "-" for stdin
        input: String,
    },
    /// Print the high-risk, fever, and data-quality cohorts
    Submission {
        /// Records file, or "-" for stdin
        input: String,
        /// Print the payload even if no patient falls in any cohort
        #[arg(long)]
        allow_empty: bool,
    },
    /// Print aggregate statistics
    Summary {
        /// Records file, or "-" for stdin
        input: String,
    },
    /// List the vital signs and their scoring bands
    Vitals,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let output = match cli.command {
        Commands::Score { input } => {
            let batch = load_batch(&input)?;
            to_json(&scored_rows(process_patients(batch.records)), cli.compact)?
        }
        Commands::Submission { input, allow_empty } => {
            let batch = load_batch(&input)?;
            let scored = process_patients(batch.records);
            let payload = build_submission(&scored);
            if let Err(e) = check_submission(&scored, &payload) {
                if !allow_empty {
                    return Err(e).wrap_err("submission is not ready");
                }
                warn!(error = %e, "printing submission anyway");
            }
            to_json(&payload, cli.compact)?
        }
        Commands::Summary { input } => {
            let batch = load_batch(&input)?;
            to_json(&summarize(&process_patients(batch.records)), cli.compact)?
        }
        Commands::Vitals => vitals_listing(),
    };

    println!("{output}");
    Ok(())
}
