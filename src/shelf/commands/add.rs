use crate::catalogue::Catalogue;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::{Book, Value};
use crate::store::DocumentStore;

pub fn run<B, C>(
    catalogue: &mut Catalogue<B, C>,
    title: String,
    author: String,
    year: Value,
) -> Result<CmdResult>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let book = catalogue.add(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book added: {}", book)));
    Ok(result.with_affected_books(vec![book]))
}
