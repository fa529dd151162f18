//! Console front end: argument parsing, the prompt channel, per-action
//! prompts, the menu loop and coloured printing. Not part of the lib API.

pub mod actions;
pub mod args;
pub mod console;
pub mod menu;
mod print;
