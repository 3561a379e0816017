//! oxbind developer tooling
//!
//! Build-time generators: the ARIA property type table and the
//! configuration JSON schema.

mod aria_table_generator;
mod config_schema;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use aria_table_generator::{AriaTableGenerator, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "oxbind-devtools")]
#[command(about = "Developer tooling for oxbind: generated tables and schemas")]
#[command(version = oxbind_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the ARIA property type table
    AriaTable {
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if the file at the output path is not up to date
        #[arg(long)]
        check: bool,
    },

    /// Generate the configuration JSON schema
    Schema {
        /// Write here; without it the schema is only validated
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if std::env::var_os("RUST_LOG").is_none() {
        let log_level = match cli.verbose {
            0 => "oxbind=warn",
            1 => "oxbind=info",
            2 => "oxbind=debug",
            _ => "oxbind=trace",
        };
        // Single-threaded at this point
        unsafe {
            std::env::set_var("RUST_LOG", log_level);
        }
    }
    oxbind_core::init_tracing();

    match cli.command {
        Commands::AriaTable { output, check } => {
            let generator = AriaTableGenerator::from_authored()?;
            if check {
                let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
                if !generator.is_up_to_date(&path)? {
                    bail!(
                        "{} is out of date; run `oxbind-devtools aria-table --output {}`",
                        path.display(),
                        path.display()
                    );
                }
                println!("✓ ARIA table is up to date");
            } else if let Some(path) = output {
                generator.write(&path)?;
            } else {
                print!("{}", generator.generate()?);
            }
        }
        Commands::Schema { output } => config_schema::run(output.as_deref())?,
    }

    Ok(())
}
