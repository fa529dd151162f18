use crate::catalogue::Catalogue;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::{Book, BookStatus};
use crate::store::DocumentStore;

pub fn run<B, C>(catalogue: &mut Catalogue<B, C>, id: u64, status: BookStatus) -> Result<CmdResult>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let mut result = CmdResult::default();
    match catalogue.change_status(id, status)? {
        Some(book) => {
            result.add_message(CmdMessage::success(format!(
                "Status changed to '{}'. Book: id: {}, title: {}, author: {}, year: {}",
                book.status, book.id, book.title, book.author, book.year
            )));
            result.affected_books.push(book);
        }
        None => result.add_message(not_found(id)),
    }
    Ok(result)
}
