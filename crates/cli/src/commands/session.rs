//! Interactive ordering session on the terminal.
//!
//! Reads one command per line and drives a [`MenuSession`] the way a guest's
//! taps would, redrawing the screen after every accepted action.
//!
//! # Usage
//!
//! ```bash
//! qr-menu session --restaurant cafe-42 --lang th
//! ```
//!
//! # Environment Variables
//!
//! - `QR_MENU_STORAGE_PATH` - Storage document path
//! - `QR_MENU_STORAGE_KEY` - Key the menu is read from
//! - `QR_MENU_RESTAURANT_ID` - Default restaurant identifier
//! - `QR_MENU_LANGUAGE` - Default UI language

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use qr_menu_core::{
    CategoryFilter, Language, MenuItemId, OrderId, ParseCategoryError, ParseLanguageError,
};
use qr_menu_ordering::{Event, FileStore, MenuSession, SessionOptions};

use crate::config::MenuConfig;
use crate::error::CliError;
use crate::render::render;

const HELP: &str = "\
Commands:
  select <item-id>     open an item            +  / -          change quantity
  add                  add to cart             back            previous screen
  cart                 open the cart           history         order history
  category <name|all>  filter the menu         lang <en|ja|th> switch language
  inc|dec|remove <id>  edit a cart line        checkout        place the order
  continue             back to the menu        reorder <id>    repeat an order
  exit                 leave the menu          help | quit";

/// Errors parsing a typed command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Category(#[from] ParseCategoryError),

    #[error(transparent)]
    Language(#[from] ParseLanguageError),
}

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let mut arg = |name: &'static str| words.next().ok_or(CommandError::MissingArgument(name));

        let event = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => return Ok(Self::Help),
            "quit" | "q" => return Ok(Self::Quit),
            "select" | "s" => Event::SelectItem(MenuItemId::from(arg("select")?)),
            "+" => Event::IncrementQuantity,
            "-" => Event::DecrementQuantity,
            "add" => Event::ConfirmAdd,
            "back" | "b" => Event::Back,
            "cart" | "c" => Event::OpenCart,
            "history" | "h" => Event::OpenHistory,
            "checkout" => Event::Checkout,
            "continue" => Event::ContinueOrdering,
            "exit" => Event::Exit,
            "category" | "cat" => Event::SelectCategory(arg("category")?.parse::<CategoryFilter>()?),
            "lang" => Event::SetLanguage(arg("lang")?.parse::<Language>()?),
            "inc" => Event::IncrementLine(MenuItemId::from(arg("inc")?)),
            "dec" => Event::DecrementLine(MenuItemId::from(arg("dec")?)),
            "remove" | "rm" => Event::RemoveLine(MenuItemId::from(arg("remove")?)),
            "reorder" => Event::Reorder(OrderId::from(arg("reorder")?)),
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Self::Event(event))
    }
}

/// Open a session against the configured storage and run it on stdin.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run(
    config: &MenuConfig,
    restaurant: Option<String>,
    language: Option<Language>,
) -> Result<(), CliError> {
    let storage = FileStore::new(&config.storage_path);
    let options = SessionOptions {
        menu_key: config.menu_key.clone(),
        language: language.unwrap_or(config.language),
        ..SessionOptions::default()
    };
    let left = Rc::new(Cell::new(false));
    let on_back = {
        let left = Rc::clone(&left);
        move || left.set(true)
    };
    let restaurant = restaurant.unwrap_or_else(|| config.restaurant_id.clone());
    let mut session = MenuSession::open(restaurant, &storage, options, on_back);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    drive(&mut session, &left, stdin.lock(), &mut stdout.lock())
}

/// Feed `input` to `session` until it ends, the guest quits or leaves.
fn drive(
    session: &mut MenuSession,
    left: &Cell<bool>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    render(&session.view(), out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(out)?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Event(event)) => {
                if session.dispatch(event) {
                    if left.get() {
                        break;
                    }
                    render(&session.view(), out)?;
                } else {
                    writeln!(out, "Not available on the {} screen", session.screen().name())?;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        prompt(out)?;
    }

    out.flush()?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
