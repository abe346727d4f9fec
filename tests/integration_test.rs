use std::fs;

use chrono::NaiveDate;

use ack_file_demo::ack::file_header_record::{FileHeaderRecord, STATUS_FILE_REJECTED};
use ack_file_demo::ack::scan::scan_ack_file;

fn header_line() -> String {
    format!(
        "01001234{:<40}202401151230YA{:<18}",
        "ACME CORPORATION", "ACCEPTED-NO ADJ"
    )
}

#[test]
fn test_scan_ack_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("ack_input.txt");

    // Header record followed by two detail lines of other record types
    let content = format!("{}\n{:<80}\n{:<80}\n", header_line(), "02DETAIL", "99TRAILER");
    fs::write(&path, content).expect("Failed to write test file");

    let summary = scan_ack_file(&path).expect("Scan failed");

    assert_eq!(summary.total_lines, 3);
    assert_eq!(summary.header.customer_id, 1234);
    assert_eq!(summary.header.file_name, "ACME CORPORATION");
    assert_eq!(
        summary.header.file_creation_date_time,
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    );
    assert!(summary.header.resend_indicator);
    assert_eq!(summary.header.file_id_modifier, 'A');
    assert_eq!(summary.header.file_validation_status, "ACCEPTED-NO ADJ");
    assert_eq!(summary.file_size, 3 * 81);
}

#[test]
fn test_scan_rejects_wrong_leading_tag() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("ack_bad_tag.txt");

    let mut line = header_line();
    line.replace_range(0..2, "02");
    fs::write(&path, format!("{}\n", line)).expect("Failed to write test file");

    let err = scan_ack_file(&path).expect_err("Scan should fail on wrong tag");
    let message = format!("{:#}", err);
    assert!(
        message.contains("record type mismatch"),
        "unexpected error: {}",
        message
    );
}

#[test]
fn test_scan_rejects_empty_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("ack_empty.txt");
    fs::write(&path, "").expect("Failed to write test file");

    let err = scan_ack_file(&path).expect_err("Scan should fail on empty file");
    assert!(format!("{:#}", err).contains("empty"));
}

#[test]
fn test_render_then_scan_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("ack_rendered.txt");

    let record = FileHeaderRecord {
        customer_id: 7,
        file_name: "PAYROLL.DAT".to_string(),
        file_creation_date_time: NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap(),
        resend_indicator: false,
        file_id_modifier: 'B',
        file_validation_status: STATUS_FILE_REJECTED.to_string(),
    };
    fs::write(&path, format!("{}\n", record.to_fixed_string())).expect("Failed to write test file");

    let summary = scan_ack_file(&path).expect("Scan failed");
    assert_eq!(summary.header, record);
    assert_eq!(summary.total_lines, 1);
}
