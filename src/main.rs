use clap::{Parser, Subcommand};
use tracing::{error, info};

use gva_transform::config::Config;
use gva_transform::logging;
use gva_transform::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "gva_transform")]
#[command(about = "Gun-violence incident data aggregation pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the cleaned incident data and write the five summary tables
    Transform {
        /// Input CSV files (comma-separated); defaults to the configured cleaned-data paths
        #[arg(long)]
        inputs: Option<String>,
        /// Directory the output tables are written to
        #[arg(long)]
        output_dir: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { inputs, output_dir } => {
            let mut config = Config::load()?;
            if let Some(input_list) = inputs {
                config.input_files = input_list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect();
            }
            if let Some(dir) = output_dir {
                config.output_directory = dir;
            }

            println!("🔄 Running incident data transform...");
            match Pipeline::run(&config) {
                Ok(summary) => {
                    info!("transform finished");
                    println!("\n📊 Transform Results:");
                    println!("   Records loaded: {}", summary.records_loaded);
                    println!("   Age distribution rows: {}", summary.age_rows);
                    println!("   Gun type rows: {}", summary.gun_type_rows);
                    println!("   Tables written:");
                    for path in &summary.tables_written {
                        println!("   - {}", path.display());
                    }
                    println!("\n✅ Transform completed successfully");
                }
                Err(e) => {
                    error!("Transform failed: {}", e);
                    println!("❌ Transform failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
