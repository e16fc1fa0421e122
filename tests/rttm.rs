use std::error::Error;

use annotate_rs::{Annotation, AnnotationError, AnnotationParams, Record, Segment};

fn params(uri: &str) -> Option<AnnotationParams> {
    Some(AnnotationParams {
        uri: Some(uri.to_string()),
        modality: None,
    })
}

#[test]
fn single_line_round_trips_verbatim() -> Result<(), Box<dyn Error>> {
    let line = "SPEAKER file1 1 10.000 2.500 <NA> <NA> spk1 <NA>\n";
    let annotation = Annotation::from_rttm(line.as_bytes(), params("file1"))?;

    let record = &annotation.records()[0];
    assert_eq!(record.segment.start(), 10.0);
    assert_eq!(record.segment.end(), 12.5);
    assert_eq!(record.track, 1);
    assert_eq!(record.label, "spk1");

    let mut out = Vec::new();
    annotation.to_rttm(&mut out)?;
    assert_eq!(String::from_utf8(out)?, line);

    Ok(())
}

#[test]
fn track_id_is_read_but_written_as_one() -> Result<(), Box<dyn Error>> {
    let input = "SPEAKER rec 3 0.5 1.5 <NA> <NA> carol <NA>\n";
    let annotation = Annotation::from_rttm(input.as_bytes(), params("rec"))?;
    assert_eq!(annotation.records()[0].track, 3);

    let mut out = Vec::new();
    annotation.to_rttm(&mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        "SPEAKER rec 1 0.500 1.500 <NA> <NA> carol <NA>\n"
    );

    Ok(())
}

#[test]
fn missing_uri_writes_placeholder() -> Result<(), Box<dyn Error>> {
    let annotation = Annotation::from_records(
        vec![Record::new(Segment::new(0.0, 1.0), 1, "a")],
        None,
    );

    let mut out = Vec::new();
    annotation.to_rttm(&mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        "SPEAKER None 1 0.000 1.000 <NA> <NA> a <NA>\n"
    );

    Ok(())
}

#[test]
fn durations_are_recomputed_from_segment() -> Result<(), Box<dyn Error>> {
    let input = "\
SPEAKER f 1 0.000 1.234 <NA> <NA> a <NA>
SPEAKER f 1 100.125 0.875 <NA> <NA> b <NA>
SPEAKER f 1 7.000 0.000 <NA> <NA> c <NA>
";
    let annotation = Annotation::from_rttm(input.as_bytes(), params("f"))?;

    let mut out = Vec::new();
    annotation.to_rttm(&mut out)?;
    let text = String::from_utf8(out)?;

    for (line, record) in text.lines().zip(annotation.records()) {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[4], format!("{:.3}", record.segment.duration()));
    }
    assert_eq!(text, input);

    Ok(())
}

#[test]
fn zero_duration_segment_serializes() -> Result<(), Box<dyn Error>> {
    let annotation = Annotation::from_records(
        vec![Record::new(Segment::new(5.0, 5.0), 1, "blip")],
        params("x"),
    );

    let mut out = Vec::new();
    annotation.to_rttm(&mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        "SPEAKER x 1 5.000 0.000 <NA> <NA> blip <NA>\n"
    );

    Ok(())
}

#[test]
fn crlf_terminators_are_stripped() -> Result<(), Box<dyn Error>> {
    let input = "SPEAKER f 1 1.0 1.0 <NA> <NA> dave <NA>\r\n";
    let annotation = Annotation::from_rttm(input.as_bytes(), None)?;
    assert_eq!(annotation.records()[0].label, "dave");
    Ok(())
}

#[test]
fn bad_line_aborts_whole_parse() {
    let input = "\
SPEAKER f 1 0.0 1.0 <NA> <NA> a <NA>
SPEAKER f 1 abc 1.0 <NA> <NA> b <NA>
SPEAKER f 1 2.0 1.0 <NA> <NA> c <NA>
";
    let err = Annotation::from_rttm(input.as_bytes(), None).unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::NumericParse {
            line: 2,
            field: "onset",
            ..
        }
    ));
}

#[test]
fn short_line_is_malformed() {
    let input = "SPEAKER f 1 0.0 1.0\n";
    let err = Annotation::from_rttm(input.as_bytes(), None).unwrap_err();
    assert!(matches!(
        err,
        AnnotationError::MalformedLine {
            line: 1,
            found: 5,
            ..
        }
    ));
}
