use std::path::PathBuf;

use anyhow::{Context, Result};
use chart::ChartConfig;
use clap::{Parser, Subcommand, ValueEnum};
use relbench_tools::{
    format_pretty, init_logging, reference_comparisons, render_reference_text,
    write_reference_chart, Report, DEFAULT_CHART_PATH,
};

#[derive(Parser)]
#[command(
    name = "relbench",
    version,
    about = "Relative performance charts for serialization benchmarks"
)]
struct Cli {
    /// Log debug output to stderr unless RELBENCH_LOG or RUST_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the stacked load/save chart as SVG.
    Render {
        /// Output path for the SVG document.
        #[arg(long, default_value = DEFAULT_CHART_PATH)]
        out: PathBuf,
    },
    /// Print the normalized values.
    Show {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ShowFormat::Pretty)]
        format: ShowFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShowFormat {
    Pretty,
    Json,
    Bars,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_else(|| Command::Render {
        out: PathBuf::from(DEFAULT_CHART_PATH),
    });
    match command {
        Command::Render { out } => {
            write_reference_chart(&out, &ChartConfig::default())?;
            println!("{}", out.display());
        }
        Command::Show { format } => match format {
            ShowFormat::Pretty => {
                let comparisons = reference_comparisons()?;
                print!("{}", format_pretty(&comparisons));
            }
            ShowFormat::Json => {
                let report = Report::new(reference_comparisons()?);
                let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                println!("{json}");
            }
            ShowFormat::Bars => {
                print!("{}", render_reference_text(&ChartConfig::default())?);
            }
        },
    }
    Ok(())
}
