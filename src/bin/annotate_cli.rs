use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use annotate_rs::{Annotation, AnnotationError, AnnotationParams};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    about = "Convert speaker annotations between RTTM and Audacity label tracks",
    version
)]
struct Args {
    /// Annotation file to read
    #[arg(long)]
    input: PathBuf,

    /// Input format, inferred from the file extension when omitted
    #[arg(long, value_enum)]
    from: Option<InputFormat>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Rttm)]
    to: OutputFormat,

    /// Where to write the result (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Resource name written into RTTM lines (defaults to the input file stem)
    #[arg(long)]
    uri: Option<String>,

    /// Modality carried alongside the annotation
    #[arg(long)]
    modality: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum InputFormat {
    Rttm,
    Audacity,
}

impl InputFormat {
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rttm") => InputFormat::Rttm,
            _ => InputFormat::Audacity,
        }
    }

    fn load(
        self,
        path: &Path,
        params: AnnotationParams,
    ) -> Result<Annotation, Box<dyn std::error::Error>> {
        let annotation = match self {
            InputFormat::Rttm => {
                let file = File::open(path).map_err(|source| AnnotationError::Resource {
                    path: path.to_path_buf(),
                    source,
                })?;
                Annotation::from_rttm(BufReader::new(file), Some(params))?
            }
            InputFormat::Audacity => Annotation::from_audacity(path, Some(params))?,
        };
        Ok(annotation)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Rttm,
    Audacity,
    Json,
}

impl OutputFormat {
    fn write(
        self,
        annotation: &Annotation,
        sink: &mut dyn Write,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            OutputFormat::Rttm => annotation.to_rttm(sink)?,
            OutputFormat::Audacity => annotation.write_audacity(sink)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *sink, annotation)?;
                sink.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let from = args.from.unwrap_or_else(|| InputFormat::infer(&args.input));
    let uri = args.uri.clone().or_else(|| {
        args.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    });
    let params = AnnotationParams {
        uri,
        modality: args.modality.clone(),
    };

    log::info!("Reading {:?} as {:?}", args.input, from);
    let annotation = from.load(&args.input, params)?;
    log::info!("Loaded {} segments", annotation.len());

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    args.to.write(&annotation, sink.as_mut())?;
    sink.flush()?;

    Ok(())
}
