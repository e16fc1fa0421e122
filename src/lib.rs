pub mod error;
pub mod formats;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::AnnotationError;
use formats::{audacity::Audacity, rttm::Rttm};

/// A time interval in seconds. `end` is expected to be no smaller than `start`
/// but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: f64,
    end: f64,
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Build a segment from an onset and a length, as RTTM stores it.
    pub fn from_start_duration(start: f64, duration: f64) -> Self {
        Self::new(start, start + duration)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub segment: Segment,
    pub track: i64,
    pub label: String,
}

impl Record {
    pub fn new(segment: Segment, track: i64, label: impl Into<String>) -> Self {
        Self {
            segment,
            track,
            label: label.into(),
        }
    }
}

/// Metadata attached to an [`Annotation`] at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationParams {
    /// Name of the annotated resource, written into every RTTM line.
    pub uri: Option<String>,
    /// Name of the annotated modality. Not used by any serializer.
    pub modality: Option<String>,
}

/// A line-oriented label format.
///
/// Implementors only describe how a single line maps to a [`Record`] and back;
/// reading a whole source and writing to a sink come for free.
pub trait LabelFormat {
    /// Short name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Parse one line, with its terminator already removed.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Record, AnnotationError>;

    /// Render one record as a full line, terminator included.
    fn format_record(&self, record: &Record) -> String;

    /// Parse every line of `source` in order. The first bad line aborts the
    /// whole read.
    fn read<R: BufRead>(&self, source: R) -> Result<Vec<Record>, AnnotationError> {
        let mut records = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let line = line?;
            log::trace!("{} line {}: {:?}", self.name(), index + 1, line);
            records.push(self.parse_line(&line, index + 1)?);
        }

        log::debug!("Parsed {} {} records", records.len(), self.name());
        Ok(records)
    }

    /// Write `records` to `sink` one line at a time. The sink is not flushed
    /// or closed.
    fn write<'a, W, I>(&self, records: I, sink: &mut W) -> Result<(), AnnotationError>
    where
        W: Write + ?Sized,
        I: IntoIterator<Item = &'a Record>,
    {
        let mut count = 0usize;
        for record in records {
            sink.write_all(self.format_record(record).as_bytes())?;
            count += 1;
        }

        log::debug!("Wrote {} {} records", count, self.name());
        Ok(())
    }
}

/// An ordered list of labeled segments for a single resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    records: Vec<Record>,
    uri: Option<String>,
    modality: Option<String>,
}

impl Annotation {
    pub fn from_records(records: Vec<Record>, params: Option<AnnotationParams>) -> Self {
        let params = params.unwrap_or_default();
        Self {
            records,
            uri: params.uri,
            modality: params.modality,
        }
    }

    /// Parse RTTM text. Only the channel, onset, duration and speaker name
    /// fields are read.
    ///
    /// ```rust
    /// use annotate_rs::{Annotation, AnnotationParams};
    ///
    /// let rttm = "SPEAKER file1 1 10.000 2.500 <NA> <NA> spk1 <NA>\n";
    /// let annotation = Annotation::from_rttm(rttm.as_bytes(), None)?;
    /// assert_eq!(annotation.records()[0].segment.end(), 12.5);
    /// # Ok::<(), annotate_rs::AnnotationError>(())
    /// ```
    pub fn from_rttm<R: BufRead>(
        source: R,
        params: Option<AnnotationParams>,
    ) -> Result<Self, AnnotationError> {
        let records = Rttm::default().read(source)?;
        Ok(Self::from_records(records, params))
    }

    /// Parse an Audacity label file. The file is closed before returning.
    pub fn from_audacity<P: AsRef<Path>>(
        path: P,
        params: Option<AnnotationParams>,
    ) -> Result<Self, AnnotationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AnnotationError::Resource {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Reading Audacity labels from {}", path.display());
        Self::from_audacity_reader(BufReader::new(file), params)
    }

    pub fn from_audacity_reader<R: BufRead>(
        source: R,
        params: Option<AnnotationParams>,
    ) -> Result<Self, AnnotationError> {
        let records = Audacity.read(source)?;
        Ok(Self::from_records(records, params))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn modality(&self) -> Option<&str> {
        self.modality.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lazily render the RTTM lines for this annotation.
    pub fn iter_rttm(&self) -> impl Iterator<Item = String> + '_ {
        let format = Rttm::new(self.uri());
        self.records
            .iter()
            .map(move |record| format.format_record(record))
    }

    /// Lazily render the Audacity label lines for this annotation.
    pub fn iter_audacity(&self) -> impl Iterator<Item = String> + '_ {
        self.records
            .iter()
            .map(|record| Audacity.format_record(record))
    }

    /// Write the annotation to `sink` as RTTM. The sink stays open.
    ///
    /// Every line uses channel `1` regardless of the stored track id.
    pub fn to_rttm<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), AnnotationError> {
        if self.uri.is_none() {
            log::warn!(
                "Writing RTTM without a uri, using {:?}",
                formats::rttm::MISSING_URI
            );
        }
        Rttm::new(self.uri()).write(&self.records, sink)
    }

    pub fn to_audacity(&self) -> String {
        self.iter_audacity().collect()
    }

    /// Stream the same text as [`Annotation::to_audacity`] into `sink`.
    pub fn write_audacity<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), AnnotationError> {
        Audacity.write(&self.records, sink)
    }
}
