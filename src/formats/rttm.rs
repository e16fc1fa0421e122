use crate::formats::parse_field;
use crate::{AnnotationError, LabelFormat, Record, Segment};

/// Placeholder written in the file field when the annotation has no uri.
pub const MISSING_URI: &str = "None";

const NAME: &str = "rttm";
const MIN_FIELDS: usize = 8;

const CHANNEL: usize = 2;
const ONSET: usize = 3;
const DURATION: usize = 4;
const SPEAKER_NAME: usize = 7;

/// RTTM reader and writer.
///
/// The uri only matters when writing. Output always uses channel `1`,
/// whatever the record's track.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rttm<'a> {
    uri: Option<&'a str>,
}

impl<'a> Rttm<'a> {
    pub fn new(uri: Option<&'a str>) -> Self {
        Self { uri }
    }
}

impl LabelFormat for Rttm<'_> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn parse_line(&self, line: &str, line_number: usize) -> Result<Record, AnnotationError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(AnnotationError::MalformedLine {
                format: NAME,
                line: line_number,
                expected: "at least 8",
                found: fields.len(),
            });
        }

        let track: i64 = parse_field(NAME, line_number, "channel", fields[CHANNEL])?;
        let onset: f64 = parse_field(NAME, line_number, "onset", fields[ONSET])?;
        let duration: f64 = parse_field(NAME, line_number, "duration", fields[DURATION])?;

        Ok(Record::new(
            Segment::from_start_duration(onset, duration),
            track,
            fields[SPEAKER_NAME],
        ))
    }

    fn format_record(&self, record: &Record) -> String {
        format!(
            "SPEAKER {} 1 {:.3} {:.3} <NA> <NA> {} <NA>\n",
            self.uri.unwrap_or(MISSING_URI),
            record.segment.start(),
            record.segment.duration(),
            record.label
        )
    }
}
