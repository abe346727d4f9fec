use ack_file_demo::ack::file_header_record::{
    FileHeaderRecord, STATUS_ACCEPTED_ADJ_RPTD, STATUS_ACCEPTED_NO_ADJ, STATUS_FILE_REJECTED,
};
use chrono::{NaiveDate, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::Rng;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

fn random_creation_time<R: Rng>(rng: &mut R) -> NaiveDateTime {
    let year = rng.random_range(2000..=2025);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28); // safe for all months
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(rng.random_range(0..24), rng.random_range(0..60), 0)
        .expect("valid time")
}

fn random_header_record<R: Rng>(rng: &mut R) -> FileHeaderRecord {
    const STATUSES: &[&str] = &[
        STATUS_ACCEPTED_NO_ADJ,
        STATUS_ACCEPTED_ADJ_RPTD,
        STATUS_FILE_REJECTED,
    ];
    FileHeaderRecord {
        customer_id: rng.random_range(0..=999999),
        file_name: format!("INPUT{:08}.DAT", rng.random_range(0..=99999999u32)),
        file_creation_date_time: random_creation_time(rng),
        resend_indicator: rng.random_bool(0.1),
        file_id_modifier: rng.random_range(b'A'..=b'Z') as char,
        file_validation_status: STATUSES.choose(rng).expect("non-empty").to_string(),
    }
}

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <rows_per_file>", args[0]);
        std::process::exit(1);
    }
    let rows_per_file: usize = args[1].parse().expect("Please provide a valid number for rows_per_file");
    let output_dir = "large_files";
    std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
    let file1 = format!("{}/ack_headers01", output_dir);
    let file2 = format!("{}/ack_headers02", output_dir);
    let start = Instant::now();
    rayon::join(
        || generate_ack_file_parallel(&file1, rows_per_file),
        || generate_ack_file_parallel(&file2, rows_per_file),
    );
    let elapsed = start.elapsed();
    println!("\n✅ Successfully generated 2 acknowledgement header files in '{}' directory", output_dir);
    println!("   - {}", file1);
    println!("   - {}", file2);
    println!("   Total rows per file: {}", rows_per_file);
    println!("   Elapsed: {:.2?}", elapsed);
}

fn generate_ack_file_parallel(file_path: &str, rows: usize) {
    let batch_size = 100_000;
    let batches = (rows + batch_size - 1) / batch_size;
    println!("📝 Generating: {} ({} rows, {} batches)", file_path, rows, batches);
    let start = Instant::now();
    File::create(file_path).expect("Failed to create file");
    let counter = Arc::new(AtomicUsize::new(0));
    (0..batches).into_par_iter().for_each(|batch_idx| {
        let mut rng = rand::rng();
        let start_row = batch_idx * batch_size;
        let end_row = ((batch_idx + 1) * batch_size).min(rows);
        let mut buf = Vec::with_capacity((end_row - start_row) * 81);
        for _ in start_row..end_row {
            let record = random_header_record(&mut rng);
            buf.extend_from_slice(record.to_fixed_string().as_bytes());
            buf.push(b'\n');
        }
        // Each batch appends to file (sync)
        std::fs::OpenOptions::new()
            .append(true)
            .open(file_path)
            .expect("Open for append").write_all(&buf)
            .expect("Write error");
        let written = counter.fetch_add(end_row - start_row, Ordering::SeqCst) + (end_row - start_row);
        println!("Batch {} done: {} rows written so far", batch_idx + 1, written);
    });
    let elapsed = start.elapsed();
    println!("{}: done {} rows in {:.2?}", file_path, rows, elapsed);
}
