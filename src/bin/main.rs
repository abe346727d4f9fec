use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use ack_file_demo::ack::file_header_record::FileHeaderRecord;
use ack_file_demo::ack::scan::scan_ack_file;

/// A tool for inspecting and emitting fixed-width acknowledgement file header records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse an acknowledgement file and print its header record
    Inspect {
        /// Acknowledgement file to inspect
        input_file: String,
    },

    /// Validate the header record of one or more acknowledgement files
    Check {
        /// Acknowledgement files to check
        #[arg(required = true)]
        input_files: Vec<String>,
    },

    /// Build a header record from field values and emit the fixed-width line
    Render {
        /// Customer ID assigned by the bank
        #[arg(long)]
        customer_id: u32,

        /// Name of the acknowledged input file
        #[arg(long)]
        file_name: String,

        /// Creation date/time in yyyyMMddHHmm form
        #[arg(long)]
        created: String,

        /// Set the resend indicator
        #[arg(long)]
        resend: bool,

        /// File ID modifier character
        #[arg(long, default_value = "A")]
        modifier: char,

        /// File validation status
        #[arg(long, default_value = "ACCEPTED-NO ADJ")]
        status: String,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input_file } => inspect_file(&input_file),
        Commands::Check { input_files } => check_files(&input_files),
        Commands::Render {
            customer_id,
            file_name,
            created,
            resend,
            modifier,
            status,
            output,
        } => {
            let record = FileHeaderRecord {
                customer_id,
                file_name,
                file_creation_date_time: NaiveDateTime::parse_from_str(&created, "%Y%m%d%H%M")
                    .with_context(|| format!("Invalid --created value: {}", created))?,
                resend_indicator: resend,
                file_id_modifier: modifier,
                file_validation_status: status,
            };
            render_record(&record, output.as_deref())
        }
    }
}

/// Scans one file and prints the parsed header fields
fn inspect_file(input_file: &str) -> Result<()> {
    let start_time = Instant::now();
    let summary = scan_ack_file(input_file)?;
    let header = &summary.header;

    println!("File:              {}", input_file);
    println!("Customer ID:       {:06}", header.customer_id);
    println!("Input file name:   {}", header.file_name);
    println!(
        "Created:           {}",
        header.file_creation_date_time.format("%Y-%m-%d %H:%M")
    );
    println!(
        "Resend:            {}",
        if header.resend_indicator { "Y" } else { "N" }
    );
    println!("File ID modifier:  {}", header.file_id_modifier);
    println!("Validation status: {}", header.file_validation_status);
    println!("Total lines:       {}", summary.total_lines);

    info!("Inspect completed in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Scans each file and reports its header status; fails if any file cannot be parsed
fn check_files(input_files: &[String]) -> Result<()> {
    info!("Checking {} files", input_files.len());
    let start_time = Instant::now();

    let mut failures = 0usize;
    for input_file in input_files {
        match scan_ack_file(input_file) {
            Ok(summary) => {
                println!(
                    "{}: {} ({} lines)",
                    input_file, summary.header.file_validation_status, summary.total_lines
                );
            }
            Err(e) => {
                error!("{}: {:#}", input_file, e);
                println!("{}: PARSE FAILED", input_file);
                failures += 1;
            }
        }
    }

    info!("Check completed in {:.2?}", start_time.elapsed());
    if failures > 0 {
        bail!("{} of {} files failed to parse", failures, input_files.len());
    }
    Ok(())
}

/// Writes the record's fixed-width line to a file or stdout
fn render_record(record: &FileHeaderRecord, output: Option<&str>) -> Result<()> {
    let line = record.to_fixed_string();
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            writeln!(file, "{}", line)?;
            info!("Wrote header record to {}", path);
        }
        None => {
            writeln!(io::stdout(), "{}", line)?;
        }
    }
    Ok(())
}
