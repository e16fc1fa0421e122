use crate::formats::parse_field;
use crate::{AnnotationError, LabelFormat, Record, Segment};

const NAME: &str = "audacity";
const FIELDS: usize = 3;

/// Audacity has no notion of channels; every label lands on this track.
pub const DEFAULT_TRACK: i64 = 1;

/// Audacity label track reader and writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Audacity;

impl LabelFormat for Audacity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parse_line(&self, line: &str, line_number: usize) -> Result<Record, AnnotationError> {
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() != FIELDS {
            return Err(AnnotationError::MalformedLine {
                format: NAME,
                line: line_number,
                expected: "exactly 3",
                found: fields.len(),
            });
        }

        let start: f64 = parse_field(NAME, line_number, "start", fields[0])?;
        let end: f64 = parse_field(NAME, line_number, "end", fields[1])?;

        Ok(Record::new(Segment::new(start, end), DEFAULT_TRACK, fields[2]))
    }

    fn format_record(&self, record: &Record) -> String {
        format!(
            "{:.3}\t{:.3}\t{}\n",
            record.segment.start(),
            record.segment.end(),
            record.label
        )
    }
}
