use crate::bootstrap_config::BootstrapConfig;
use crate::BusnetError;
use log::info;
use requests::types::input::Document;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

/// Reads the request document from the configured input file, or stdin.
pub(super) fn read_document(bootstrap_config: &BootstrapConfig) -> Result<Document, BusnetError> {
    let reader: Box<dyn Read> = match &bootstrap_config.input {
        Some(path) => {
            info!(target: "main", "Reading requests from '{}'", path.display());
            Box::new(File::open(path)?)
        }
        None => {
            info!(target: "main", "Reading requests from stdin");
            Box::new(std::io::stdin().lock())
        }
    };

    let document = serde_json::from_reader(BufReader::new(reader))?;

    Ok(document)
}

/// Writes the answers as one JSON array to the configured output file, or stdout.
pub(super) fn write_answers<T: serde::Serialize>(
    bootstrap_config: &BootstrapConfig,
    answers: &T,
) -> Result<(), BusnetError> {
    let writer: Box<dyn Write> = match &bootstrap_config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if bootstrap_config.pretty {
        serde_json::to_writer_pretty(&mut writer, answers)?;
    } else {
        serde_json::to_writer(&mut writer, answers)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
