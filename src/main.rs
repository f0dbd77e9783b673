use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use datamap_cli::datamap::{self, Datamap};
use datamap_cli::extract;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Datamap CSV file path (key,sheet,datatype,cellref per record)
    #[arg(required = true)]
    datamap: PathBuf,

    /// Workbook to extract against; omit to only parse and print the datamap
    workbook: Option<PathBuf>,

    /// Name for the datamap
    #[arg(long, short = 'n', default_value = "")]
    name: String,

    /// Description for the datamap
    #[arg(long, short = 'd', default_value = "")]
    description: String,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();

    let cli = Cli::parse();

    let lines = datamap::parse_datamap_file(&cli.datamap)?;
    let dm = Datamap::new(cli.name, cli.description, lines);

    // With a workbook, print the extracted Return; without one, print the
    // parsed datamap itself.
    let json = match &cli.workbook {
        Some(path) => {
            let ret = extract::extract(path, &dm)?;
            serde_json::to_string_pretty(&ret)?
        }
        None => serde_json::to_string_pretty(&dm)?,
    };

    println!("{json}");

    Ok(())
}
