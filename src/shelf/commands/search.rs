use crate::catalogue::Catalogue;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::CounterDocument;
use crate::model::{Book, SearchField, Value};
use crate::store::DocumentStore;

pub fn run<B, C>(
    catalogue: &Catalogue<B, C>,
    field: SearchField,
    query: &Value,
) -> Result<CmdResult>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let found = catalogue.search(field, query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No books found for '{}'.",
            query
        )));
    }
    Ok(result.with_listed_books(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::CatalogueFixture;

    fn shelf() -> CatalogueFixture {
        CatalogueFixture::new()
            .with_book("search_book_title", "test", Value::Number(1999))
            .with_book("test", "search_book_author", Value::Number(1999))
            .with_book("test", "test_author", "2001")
    }

    #[test]
    fn finds_by_title() {
        let fixture = shelf();
        let result = run(&fixture.catalogue, SearchField::Title, &"SEARCH_book".into()).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].id, 1);
    }

    #[test]
    fn finds_by_author() {
        let fixture = shelf();
        let result = run(&fixture.catalogue, SearchField::Author, &"test".into()).unwrap();
        let ids: Vec<u64> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn finds_by_numeric_year() {
        let fixture = shelf();
        let result = run(&fixture.catalogue, SearchField::Year, &Value::Number(1999)).unwrap();
        assert_eq!(result.listed_books.len(), 2);
    }

    #[test]
    fn miss_is_a_warning_not_an_error() {
        let fixture = shelf();
        let result = run(&fixture.catalogue, SearchField::Year, &Value::Number(1812)).unwrap();

        assert!(result.listed_books.is_empty());
        assert!(!result.has_errors());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "No books found for '1812'.");
    }
}
