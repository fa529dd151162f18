use super::console::Console;
use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::error::Result;
use shelf::model::Book;

pub(super) fn print_messages(console: &mut Console<'_>, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => console.say(message.content.dimmed())?,
            MessageLevel::Success => console.say(message.content.green())?,
            MessageLevel::Warning => console.say(message.content.yellow())?,
            MessageLevel::Error => console.say(message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_books(console: &mut Console<'_>, books: &[Book]) -> Result<()> {
    for book in books {
        console.say(book)?;
    }
    Ok(())
}

pub(super) fn print_error(console: &mut Console<'_>, content: impl Into<String>) -> Result<()> {
    print_messages(console, &[CmdMessage::error(content)])
}
