use crate::catalogue::Catalogue;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::Book;
use crate::store::DocumentStore;

pub fn run<B, C>(catalogue: &mut Catalogue<B, C>, id: u64) -> Result<CmdResult>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let mut result = CmdResult::default();
    match catalogue.delete(id)? {
        Some(book) => {
            result.add_message(CmdMessage::success(format!("Book deleted: {}", book)));
            result.affected_books.push(book);
        }
        None => result.add_message(not_found(id)),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::store::memory::fixtures::CatalogueFixture;

    #[test]
    fn removes_book() {
        let mut fixture = CatalogueFixture::new().with_books(2);
        let result = run(&mut fixture.catalogue, 1).unwrap();

        assert_eq!(result.affected_books[0].id, 1);
        assert!(!result.has_errors());

        let remaining = list::run(&fixture.catalogue).unwrap().listed_books;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut fixture = CatalogueFixture::new().with_books(1);
        let result = run(&mut fixture.catalogue, 7).unwrap();

        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Book with id 7 not found.");
        assert_eq!(fixture.catalogue.list_all().len(), 1);
    }
}
