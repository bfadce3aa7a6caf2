pub mod errors;
pub mod handler;
pub mod load;
pub mod types;

use crate::errors::RequestError;
use crate::handler::{build_router, RequestHandler};
use crate::load::load_catalogue;
use crate::types::input::Document;
use crate::types::output::StatResponse;

/// Loads the document's catalogue and answers all of its stat requests in order.
pub fn process(document: &Document) -> Result<Vec<StatResponse>, RequestError> {
    let catalogue = load_catalogue(&document.base_requests)?;
    let router = build_router(document, &catalogue)?;
    let handler = RequestHandler::new(&catalogue, router);

    document.stat_requests.iter()
        .map(|request| handler.answer(request))
        .collect()
}
