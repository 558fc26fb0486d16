use std::error::Error;
use std::io;
use std::time::Instant;

use clap::{Parser, Subcommand};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::info;

use tickdata::config::GeneratorConfig;
use tickdata::{generator, reader, tick, vwap};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a synthetic currency-pair tick dataset as CSV
    Generate {
        /// Destination file, overwritten if it already exists
        output_file: String,
        /// Number of data rows to generate
        #[clap(long, default_value_t = 1_000_000)]
        rows: u64,
        /// First timestamp of the sequence (ISO-8601 UTC instant)
        #[clap(long, default_value = "2024-10-20T10:00:00Z")]
        start: String,
        /// Currency pair to sample from; repeat for more, defaults to the
        /// built-in 25 pair set
        #[clap(long = "pair")]
        pairs: Vec<String>,
        /// Lower price bound, before scaling by 100
        #[clap(long, default_value_t = 0.5)]
        price_min: f64,
        /// Upper price bound, before scaling by 100
        #[clap(long, default_value_t = 1.5)]
        price_max: f64,
        /// Lower volume bound, inclusive
        #[clap(long, default_value_t = 500)]
        volume_min: u32,
        /// Upper volume bound, inclusive
        #[clap(long, default_value_t = 3000)]
        volume_max: u32,
        /// RNG seed for a reproducible dataset
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Compute hourly VWAPs per currency pair from tick CSV files
    Vwap {
        /// The input files of ticks
        #[clap(required = true)]
        input_files: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            output_file,
            rows,
            start,
            pairs,
            price_min,
            price_max,
            volume_min,
            volume_max,
            seed,
        } => {
            let mut config = GeneratorConfig::new(rows, tick::parse_instant(&start)?);
            if !pairs.is_empty() {
                config.currency_pairs = pairs;
            }
            config.price_bounds = (price_min, price_max);
            config.volume_bounds = (volume_min, volume_max);
            config.seed = seed;

            let started = Instant::now();
            let written = generator::write_csv_file(&config, &output_file)?;
            info!(
                "Wrote {written} rows to {output_file} in {:.2?}",
                started.elapsed()
            );
        }
        Command::Vwap { input_files } => {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(io::stdout());
            writer.write_record(["Currency-pair", "Hour", "VWAP"])?;

            for input_file in &input_files {
                let mut reader = ReaderBuilder::new()
                    .trim(Trim::All)
                    .flexible(true)
                    .from_path(input_file)?;
                let ticks = reader::collect_ticks(reader.deserialize());
                let series = vwap::hourly_vwaps(&ticks);

                let mut currency_pairs: Vec<&String> = series.keys().collect();
                currency_pairs.sort();
                for pair in currency_pairs {
                    for (hour, value) in &series[pair] {
                        let hour = tick::format_instant(*hour);
                        let value = value.round_dp(4).to_string();
                        writer.write_record([pair.as_str(), hour.as_str(), value.as_str()])?;
                    }
                }
            }
            writer.flush()?;
        }
    }

    Ok(())
}
