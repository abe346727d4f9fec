// --- Acknowledgement file scan ---

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};
use log::{info, warn};
use num_format::{Locale, ToFormattedString};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::ack::file_header_record::{self, FileHeaderRecord};

/// What a scan learned about one acknowledgement file.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub header: FileHeaderRecord,
    /// Total lines in the file, header included.
    pub total_lines: usize,
    pub file_size: u64,
}

fn get_scan_buf_size() -> usize {
    std::env::var("SCAN_BUF_MB")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .map(|mb| mb * 1024 * 1024)
        .unwrap_or(8 * 1024 * 1024)
}

/// Reads an acknowledgement file: the first line must be a File Header
/// Record; the remaining lines are other record types and are only counted,
/// not parsed.
pub fn scan_ack_file(path: impl AsRef<Path>) -> Result<ScanSummary> {
    let path = path.as_ref();
    let scan_timer = Instant::now();

    let file_size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat input file: {}", path.display()))?
        .len();
    info!(
        "Scanning {} ({})",
        path.display(),
        format_size(file_size, DECIMAL)
    );

    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::with_capacity(get_scan_buf_size(), file);
    let mut lines = reader.lines();

    let first = lines
        .next()
        .context("File is empty: no File Header Record")?
        .context("Failed to read first line")?;
    let header = FileHeaderRecord::parse_from_fixed(&first)
        .with_context(|| format!("Rejected File Header Record in {}", path.display()))?;

    if !file_header_record::is_known_status(&header.file_validation_status) {
        warn!(
            "Unknown file validation status {:?} in {}",
            header.file_validation_status,
            path.display()
        );
    }
    if header.file_validation_status == file_header_record::STATUS_FILE_REJECTED {
        warn!(
            "Bank rejected file {:?} (customer {})",
            header.file_name, header.customer_id
        );
    }

    let mut total_lines = 1usize;
    for line in lines {
        line.context("Failed to read line")?;
        total_lines += 1;
    }

    info!(
        "Scanned {} lines from {} in {:.2?}",
        total_lines.to_formatted_string(&Locale::en),
        path.display(),
        scan_timer.elapsed()
    );

    Ok(ScanSummary {
        header,
        total_lines,
        file_size,
    })
}
