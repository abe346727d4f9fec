use chrono::NaiveDateTime;

use crate::ack::error::RecordError;

/// Record-type tag at offset 0 identifying a File Header Record.
pub const RECORD_TYPE: &str = "01";

/// Length of a conformant serialized line, excluding the terminator.
pub const RECORD_LENGTH: usize = 80;

/// Statuses the bank emits in `file_validation_status`. Not enforced as an
/// enum: the field carries whatever the line carries.
pub const STATUS_ACCEPTED_NO_ADJ: &str = "ACCEPTED-NO ADJ";
pub const STATUS_ACCEPTED_ADJ_RPTD: &str = "ACCEPTED-ADJ RPTD";
pub const STATUS_FILE_REJECTED: &str = "FILE REJECTED";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

pub fn is_known_status(status: &str) -> bool {
    matches!(
        status,
        STATUS_ACCEPTED_NO_ADJ | STATUS_ACCEPTED_ADJ_RPTD | STATUS_FILE_REJECTED
    )
}

/// The File Header Record is the first record of the acknowledgement data
/// file. It echoes identifying fields from the input file and carries the
/// bank's final status for that file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHeaderRecord {
    /// File-level customer identifier assigned by the bank.
    pub customer_id: u32,
    /// Name of the input file being acknowledged.
    pub file_name: String,
    /// Creation date/time echoed from the input file header, wall-clock,
    /// minute precision.
    pub file_creation_date_time: NaiveDateTime,
    /// Resend indicator echoed from the input file header.
    pub resend_indicator: bool,
    /// File ID modifier echoed from the input file header.
    pub file_id_modifier: char,
    /// Final status of the file, normally one of the `STATUS_*` values.
    pub file_validation_status: String,
}

impl FileHeaderRecord {
    /// Parses one fixed-width line. The line must be at least
    /// [`RECORD_LENGTH`] ASCII characters and carry the `"01"` tag; trailing
    /// content past column 80 is ignored.
    pub fn parse_from_fixed(input: &str) -> Result<Self, RecordError> {
        if input.len() < RECORD_LENGTH {
            return Err(RecordError::LineTooShort {
                expected: RECORD_LENGTH,
                found: input.len(),
            });
        }
        if !input.is_ascii() {
            return Err(RecordError::FieldFormat {
                field: "line",
                value: input.to_string(),
            });
        }
        if &input[0..2] != RECORD_TYPE {
            return Err(RecordError::TypeMismatch {
                expected: RECORD_TYPE,
                found: input[0..2].to_string(),
            });
        }
        Ok(Self {
            customer_id: input[2..8].trim().parse::<u32>().map_err(|_| {
                RecordError::FieldFormat {
                    field: "customer_id",
                    value: input[2..8].to_string(),
                }
            })?,
            file_name: input[8..48].trim().to_string(),
            file_creation_date_time: NaiveDateTime::parse_from_str(
                &input[48..60],
                TIMESTAMP_FORMAT,
            )
            .map_err(|_| RecordError::FieldFormat {
                field: "file_creation_date_time",
                value: input[48..60].to_string(),
            })?,
            // Only 'Y' is truthy; every other character reads as false.
            resend_indicator: &input[60..61] == "Y",
            file_id_modifier: input.as_bytes()[61] as char,
            file_validation_status: input[62..80].trim().to_string(),
        })
    }

    /// Writes the record as a fixed-length line (80 chars, no terminator).
    /// Field values wider than their columns are passed through untruncated,
    /// so the result is only conformant for in-range records.
    pub fn to_fixed_string(&self) -> String {
        let mut s = String::with_capacity(RECORD_LENGTH);
        s.push_str(RECORD_TYPE);
        s.push_str(&format!("{:0>6}", self.customer_id));
        s.push_str(&format!("{:<40}", self.file_name));
        s.push_str(
            &self
                .file_creation_date_time
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        );
        s.push(if self.resend_indicator { 'Y' } else { 'N' });
        s.push(self.file_id_modifier);
        s.push_str(&format!("{:<18}", self.file_validation_status));
        s
    }
}
