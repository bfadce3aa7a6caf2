mod bootstrap_config;
mod config;

use bootstrap_config::BootstrapConfig;
use common::util::logging;
use log::{error, info, SetLoggerError};
use requests::errors::RequestError;
use requests::handler::{build_router, RequestHandler};
use requests::load::load_catalogue;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "main", "{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), BusnetError> {
    let bootstrap_config = BootstrapConfig::read();

    logging::initialize_logging(bootstrap_config.log_level.into())?;

    let document = config::read_document(&bootstrap_config)?;
    info!(
        target: "main",
        "Read {} base requests and {} stat requests",
        document.base_requests.len(), document.stat_requests.len()
    );

    let catalogue = logging::run_with_spinner("main", "Loading catalogue", || {
        load_catalogue(&document.base_requests)
    }).map_err(RequestError::from)?;

    let router = logging::run_with_spinner("main", "Building route graph", || {
        build_router(&document, &catalogue)
    })?;

    let handler = RequestHandler::new(&catalogue, router);
    let total = document.stat_requests.len() as u64;
    let answers = logging::run_with_pb("main", "Answering requests", total, |pb| {
        document.stat_requests.iter()
            .map(|request| {
                let answer = handler.answer(request);
                pb.inc(1);
                answer
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    config::write_answers(&bootstrap_config, &answers)?;

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum BusnetError {
    Logging(#[from] SetLoggerError),
    Json(#[from] serde_json::Error),
    Request(#[from] RequestError),
    IO(#[from] std::io::Error),
}

impl Display for BusnetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            BusnetError::Logging(err) => err,
            BusnetError::Json(err) => err,
            BusnetError::Request(err) => err,
            BusnetError::IO(err) => err,
        };
        let prefix = match self {
            BusnetError::Logging(_) => "Initializing logging",
            BusnetError::Json(_) => "Reading or writing JSON",
            BusnetError::Request(_) => "Processing requests",
            BusnetError::IO(_) => "Error during IO",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
