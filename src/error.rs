use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AnnotationError {
    #[error("{format} line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        format: &'static str,
        line: usize,
        expected: &'static str,
        found: usize,
    },
    #[error("{format} line {line}: invalid {field} {value:?}")]
    NumericParse {
        format: &'static str,
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("cannot open {}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
