use crate::catalogue::Catalogue;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::Book;
use crate::store::DocumentStore;

pub fn run<B, C>(catalogue: &Catalogue<B, C>) -> Result<CmdResult>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let books = catalogue.list_all().to_vec();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("The catalogue is empty."));
    }
    Ok(result.with_listed_books(books))
}
