//! Line-oriented label formats.
//!
//! Each format implements [`LabelFormat`](crate::LabelFormat) for a single
//! line; reading and writing whole files is shared.
//!
//! # Available Formats
//!
//! ## RTTM
//!
//! Rich Transcription Time-Marked, the format used by diarization scoring
//! tools:
//! - **Delimiter**: any whitespace
//! - **Fields read**: channel (2), onset (3), duration (4), speaker name (7)
//! - **Written as**: `SPEAKER <uri> 1 <start> <duration> <NA> <NA> <label> <NA>`
//!
//! ## Audacity
//!
//! Audacity label track export:
//! - **Delimiter**: tab
//! - **Fields**: start, end, label
//! - **Channel**: not stored, always read as `1`
//!
//! # Usage
//!
//! ```rust
//! use annotate_rs::{LabelFormat, formats::{audacity::Audacity, rttm::Rttm}};
//!
//! let records = Audacity.read("1.000\t2.000\tspkA\n".as_bytes())?;
//! let mut rttm = Vec::new();
//! Rttm::new(Some("file1")).write(&records, &mut rttm)?;
//! assert_eq!(
//!     String::from_utf8(rttm).unwrap(),
//!     "SPEAKER file1 1 1.000 1.000 <NA> <NA> spkA <NA>\n"
//! );
//! # Ok::<(), annotate_rs::AnnotationError>(())
//! ```

pub mod audacity;
pub mod rttm;

use std::str::FromStr;

use crate::AnnotationError;

/// Parse a numeric field, reporting the field by name on failure.
pub(crate) fn parse_field<T: FromStr>(
    format: &'static str,
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, AnnotationError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AnnotationError::NumericParse {
            format,
            line,
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_accepts_surrounding_whitespace() {
        let value: f64 = parse_field("test", 1, "start", " 1.5 ").unwrap();
        assert_eq!(value, 1.5);
    }

    #[test]
    fn parse_field_reports_field_and_line() {
        let err = parse_field::<i64>("rttm", 7, "channel", "one").unwrap_err();
        match err {
            AnnotationError::NumericParse {
                format,
                line,
                field,
                value,
            } => {
                assert_eq!(format, "rttm");
                assert_eq!(line, 7);
                assert_eq!(field, "channel");
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
