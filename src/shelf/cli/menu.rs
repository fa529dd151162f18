//! # Menu Loop
//!
//! ```text
//!                 ┌──────────── invalid ───────────┐
//!                 ▼                                │
//!   ──► AwaitingMainChoice ── key ──► ExecutingCommand ──► AwaitingPostActionChoice
//!          │      ▲                        ▲                    │   │   │
//!          │      └──────────── 1 ─────────┼────────────────────┘   │   │
//!          │                               └──────── 2 (repeat) ────┘   │
//!          └── 0 ──► Terminated ◄────────────────── 0 ──────────────────┘
//! ```
//!
//! Unrecognised input at either menu re-prompts in place. End of input at
//! any prompt terminates.

use super::actions::{Outcome, Registry};
use super::console::Console;
use super::print::print_error;
use shelf::error::Result;
use tracing::debug;

const EXIT_KEY: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    AwaitingMainChoice,
    ExecutingCommand(String),
    AwaitingPostActionChoice(String),
    Terminated,
}

pub struct Menu<A> {
    actions: Registry<A>,
}

impl<A> Menu<A> {
    pub fn new(actions: Registry<A>) -> Self {
        Self { actions }
    }

    pub fn run(&self, api: &mut A, console: &mut Console<'_>) -> Result<()> {
        let mut state = MenuState::AwaitingMainChoice;
        while state != MenuState::Terminated {
            debug!(?state, "menu");
            state = self.step(state, api, console)?;
        }
        Ok(())
    }

    pub fn step(
        &self,
        state: MenuState,
        api: &mut A,
        console: &mut Console<'_>,
    ) -> Result<MenuState> {
        match state {
            MenuState::AwaitingMainChoice => self.main_choice(console),
            MenuState::ExecutingCommand(key) => self.execute(key, api, console),
            MenuState::AwaitingPostActionChoice(key) => self.post_action_choice(key, console),
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    fn main_choice(&self, console: &mut Console<'_>) -> Result<MenuState> {
        console.say("")?;
        for (key, action) in &self.actions {
            console.say(format!("    [{}] {}", key, action.name()))?;
        }
        console.say(format!("    [{}] Exit", EXIT_KEY))?;

        let Some(choice) = console.ask(">>> ")? else {
            return Ok(MenuState::Terminated);
        };
        let choice = choice.trim();

        if choice == EXIT_KEY {
            console.say("Exiting.")?;
            return Ok(MenuState::Terminated);
        }
        if self.actions.contains_key(choice) {
            return Ok(MenuState::ExecutingCommand(choice.to_string()));
        }

        print_error(console, "Invalid choice.")?;
        Ok(MenuState::AwaitingMainChoice)
    }

    fn execute(&self, key: String, api: &mut A, console: &mut Console<'_>) -> Result<MenuState> {
        let Some(action) = self.actions.get(&key) else {
            return Ok(MenuState::AwaitingMainChoice);
        };

        match action.execute(api, console)? {
            Outcome::Completed => Ok(MenuState::AwaitingPostActionChoice(key)),
            Outcome::Closed => Ok(MenuState::Terminated),
        }
    }

    fn post_action_choice(&self, key: String, console: &mut Console<'_>) -> Result<MenuState> {
        console.say("")?;
        console.say("[1] Back to main menu | [2] Repeat last action | [0] Exit")?;

        let Some(choice) = console.ask(">>> ")? else {
            return Ok(MenuState::Terminated);
        };

        match choice.trim() {
            "1" => Ok(MenuState::AwaitingMainChoice),
            "2" => Ok(MenuState::ExecutingCommand(key)),
            EXIT_KEY => {
                console.say("Goodbye!")?;
                Ok(MenuState::Terminated)
            }
            _ => {
                print_error(console, "Invalid input.")?;
                Ok(MenuState::AwaitingPostActionChoice(key))
            }
        }
    }
}
