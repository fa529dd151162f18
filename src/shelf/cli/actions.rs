//! One object per menu entry. Each action asks for what its API call needs,
//! makes exactly one call and prints the result. A bad sub-choice or id is
//! reported and the action ends without calling the API.

use super::console::Console;
use super::print::{print_books, print_error, print_messages};
use shelf::api::ShelfApi;
use shelf::error::Result;
use shelf::ids::CounterDocument;
use shelf::model::{Book, BookStatus, SearchField, Value};
use shelf::store::DocumentStore;
use std::collections::BTreeMap;

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Input ran out mid-action.
    Closed,
}

pub trait Action<A> {
    /// Menu label.
    fn name(&self) -> &'static str;

    fn execute(&self, api: &mut A, console: &mut Console<'_>) -> Result<Outcome>;
}

pub type Registry<A> = BTreeMap<String, Box<dyn Action<A>>>;

/// The standard menu: keys `1`..`5`.
pub fn registry<B, C>() -> Registry<ShelfApi<B, C>>
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    let mut actions: Registry<ShelfApi<B, C>> = BTreeMap::new();
    actions.insert("1".into(), Box::new(DisplayBooks));
    actions.insert("2".into(), Box::new(AddBook));
    actions.insert("3".into(), Box::new(DeleteBook));
    actions.insert("4".into(), Box::new(SearchBooks));
    actions.insert("5".into(), Box::new(ChangeStatus));
    actions
}

fn parse_id(console: &mut Console<'_>, raw: &str) -> Result<Option<u64>> {
    match raw.trim().parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            print_error(console, format!("Invalid id: '{}'.", raw))?;
            Ok(None)
        }
    }
}

pub struct DisplayBooks;

impl<B, C> Action<ShelfApi<B, C>> for DisplayBooks
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    fn name(&self) -> &'static str {
        "Show all books"
    }

    fn execute(&self, api: &mut ShelfApi<B, C>, console: &mut Console<'_>) -> Result<Outcome> {
        console.say("All books:")?;
        let result = api.list_books()?;
        print_books(console, &result.listed_books)?;
        print_messages(console, &result.messages)?;
        Ok(Outcome::Completed)
    }
}

pub struct AddBook;

impl<B, C> Action<ShelfApi<B, C>> for AddBook
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    fn name(&self) -> &'static str {
        "Add a book"
    }

    fn execute(&self, api: &mut ShelfApi<B, C>, console: &mut Console<'_>) -> Result<Outcome> {
        console.say("Adding a book: enter its title, author and year.")?;
        let Some(title) = console.ask("Title: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(author) = console.ask("Author: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(year) = console.ask("Year: ")? else {
            return Ok(Outcome::Closed);
        };

        let result = api.add_book(title, author, Value::Text(year))?;
        print_messages(console, &result.messages)?;
        Ok(Outcome::Completed)
    }
}

pub struct DeleteBook;

impl<B, C> Action<ShelfApi<B, C>> for DeleteBook
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    fn name(&self) -> &'static str {
        "Delete a book"
    }

    fn execute(&self, api: &mut ShelfApi<B, C>, console: &mut Console<'_>) -> Result<Outcome> {
        console.say("Deleting a book: enter its id.")?;
        let Some(raw) = console.ask("Book id: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(id) = parse_id(console, &raw)? else {
            return Ok(Outcome::Completed);
        };

        let result = api.delete_book(id)?;
        print_messages(console, &result.messages)?;
        Ok(Outcome::Completed)
    }
}

pub struct SearchBooks;

impl<B, C> Action<ShelfApi<B, C>> for SearchBooks
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    fn name(&self) -> &'static str {
        "Search books"
    }

    fn execute(&self, api: &mut ShelfApi<B, C>, console: &mut Console<'_>) -> Result<Outcome> {
        console.say("Searching books. Search by:")?;
        console.say("[1] title")?;
        console.say("[2] author")?;
        console.say("[3] year")?;
        let Some(choice) = console.ask(">>> ")? else {
            return Ok(Outcome::Closed);
        };

        let (field, prompt) = match choice.trim() {
            "1" => (SearchField::Title, "Title: "),
            "2" => (SearchField::Author, "Author: "),
            "3" => (SearchField::Year, "Year: "),
            _ => {
                print_error(console, "Invalid choice.")?;
                return Ok(Outcome::Completed);
            }
        };
        let Some(raw) = console.ask(prompt)? else {
            return Ok(Outcome::Closed);
        };
        let query = match field {
            SearchField::Year => Value::parse_loose(&raw),
            _ => Value::Text(raw),
        };

        let result = api.search_books(field, &query)?;
        print_books(console, &result.listed_books)?;
        print_messages(console, &result.messages)?;
        Ok(Outcome::Completed)
    }
}

pub struct ChangeStatus;

impl<B, C> Action<ShelfApi<B, C>> for ChangeStatus
where
    B: DocumentStore<Vec<Book>>,
    C: DocumentStore<CounterDocument>,
{
    fn name(&self) -> &'static str {
        "Change book status"
    }

    fn execute(&self, api: &mut ShelfApi<B, C>, console: &mut Console<'_>) -> Result<Outcome> {
        console.say("Changing a book's status: enter its id.")?;
        let Some(raw) = console.ask("Book id: ")? else {
            return Ok(Outcome::Closed);
        };
        let Some(id) = parse_id(console, &raw)? else {
            return Ok(Outcome::Completed);
        };

        console.say("[1] mark as available")?;
        console.say("[2] mark as checked out")?;
        let Some(choice) = console.ask(">>> ")? else {
            return Ok(Outcome::Closed);
        };
        let status = match choice.trim() {
            "1" => BookStatus::Available,
            "2" => BookStatus::CheckedOut,
            _ => {
                print_error(console, "Invalid choice.")?;
                return Ok(Outcome::Completed);
            }
        };

        let result = api.change_status(id, status)?;
        print_messages(console, &result.messages)?;
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::catalogue::Catalogue;
    use shelf::store::memory::InMemoryDocument;
    use std::io::Cursor;

    type MemoryApi = ShelfApi<InMemoryDocument<Vec<Book>>, InMemoryDocument<CounterDocument>>;

    fn api() -> MemoryApi {
        ShelfApi::new(Catalogue::open(InMemoryDocument::new(), InMemoryDocument::new()).unwrap())
    }

    fn seeded() -> MemoryApi {
        let mut api = api();
        api.add_book("Dune".into(), "Herbert".into(), "1965".into())
            .unwrap();
        api.add_book("Foundation".into(), "Asimov".into(), Value::Number(1951))
            .unwrap();
        api
    }

    fn run_action(
        action: &dyn Action<MemoryApi>,
        api: &mut MemoryApi,
        script: &str,
    ) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);
        let outcome = action.execute(api, &mut console).unwrap();
        drop(console);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn display_lists_books() {
        let mut api = seeded();
        let (outcome, out) = run_action(&DisplayBooks, &mut api, "");

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("id: 1, title: Dune, author: Herbert, year: 1965, status: available"));
        assert!(out.contains("id: 2, title: Foundation"));
    }

    #[test]
    fn display_reports_empty_catalogue() {
        let mut api = api();
        let (_, out) = run_action(&DisplayBooks, &mut api, "");
        assert!(out.contains("The catalogue is empty."));
    }

    #[test]
    fn add_collects_three_fields() {
        let mut api = api();
        let (outcome, out) = run_action(&AddBook, &mut api, "Dune\nHerbert\n1965\n");

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Book added: id: 1"));
        let book = &api.catalogue().list_all()[0];
        assert_eq!(book.year, Value::Text("1965".into()));
    }

    #[test]
    fn add_stops_when_input_closes() {
        let mut api = api();
        let (outcome, _) = run_action(&AddBook, &mut api, "Dune\n");

        assert_eq!(outcome, Outcome::Closed);
        assert!(api.catalogue().list_all().is_empty());
    }

    #[test]
    fn delete_by_id() {
        let mut api = seeded();
        let (_, out) = run_action(&DeleteBook, &mut api, "2\n");

        assert!(out.contains("Book deleted: id: 2"));
        assert_eq!(api.catalogue().list_all().len(), 1);
    }

    #[test]
    fn delete_unknown_id() {
        let mut api = seeded();
        let (_, out) = run_action(&DeleteBook, &mut api, "9\n");

        assert!(out.contains("Book with id 9 not found."));
        assert_eq!(api.catalogue().list_all().len(), 2);
    }

    #[test]
    fn delete_rejects_non_numeric_id() {
        let mut api = seeded();
        let (outcome, out) = run_action(&DeleteBook, &mut api, "two\n");

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Invalid id: 'two'."));
        assert_eq!(api.catalogue().list_all().len(), 2);
    }

    #[test]
    fn search_by_year_matches_numbers_and_text() {
        let mut api = seeded();
        let (_, out) = run_action(&SearchBooks, &mut api, "3\n19\n");

        assert!(out.contains("title: Dune"));
        assert!(out.contains("title: Foundation"));
    }

    #[test]
    fn search_miss_is_reported() {
        let mut api = seeded();
        let (_, out) = run_action(&SearchBooks, &mut api, "2\ntolkien\n");
        assert!(out.contains("No books found for 'tolkien'."));
    }

    #[test]
    fn search_invalid_field_makes_no_query() {
        let mut api = seeded();
        let (outcome, out) = run_action(&SearchBooks, &mut api, "7\n");

        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Invalid choice."));
        assert!(!out.contains("Title: "));
    }

    #[test]
    fn change_status_to_checked_out() {
        let mut api = seeded();
        let (_, out) = run_action(&ChangeStatus, &mut api, "1\n2\n");

        assert!(out.contains("Status changed to 'checked out'"));
        assert_eq!(
            api.catalogue().get(1).unwrap().status,
            BookStatus::CheckedOut
        );
        assert_eq!(api.catalogue().get(2).unwrap().status, BookStatus::Available);
    }

    #[test]
    fn change_status_invalid_choice_leaves_book() {
        let mut api = seeded();
        let (_, out) = run_action(&ChangeStatus, &mut api, "1\n5\n");

        assert!(out.contains("Invalid choice."));
        assert_eq!(api.catalogue().get(1).unwrap().status, BookStatus::Available);
    }

    #[test]
    fn registry_has_five_entries() {
        let actions = registry::<InMemoryDocument<Vec<Book>>, InMemoryDocument<CounterDocument>>();
        let keys: Vec<&str> = actions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(actions["4"].name(), "Search books");
    }
}
