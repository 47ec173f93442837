//! Rawline is a small line editor for terminals, in the spirit of
//! linenoise: raw mode, history, Tab completion and inline hints.
//!
//! Here is how to use rawline as a library:
//!
//! **Add rawline into Cargo.toml**
//!
//! ```toml
//! [dependencies]
//! rawline = "0.3.0"
//! ```
//!
//! **Read some lines**
//!
//! ```no_run
//! use rawline::{Editor, Hint, Color, ReadResult};
//!
//! let mut editor = Editor::new();
//! editor.set_completer(|line: &str| {
//!     if line.starts_with('h') {
//!         vec!["hello".to_string(), "hello there".to_string()]
//!     } else {
//!         vec![]
//!     }
//! });
//! editor.set_hinter(|line: &str| {
//!     if line == "hello" {
//!         Some(Hint::new(" World").color(Color::Magenta))
//!     } else {
//!         None
//!     }
//! });
//!
//! loop {
//!     match editor.input("hello> ") {
//!         ReadResult::Input(line) => {
//!             println!("echo: '{}'", line);
//!             editor.add_history(&line);
//!         }
//!         ReadResult::Interrupted => continue,
//!         ReadResult::Eof => break,
//!     }
//! }
//! ```
//!
#![allow(unknown_lints)]
extern crate errno;
extern crate glob;
#[macro_use]
extern crate lazy_static;
extern crate libc;
extern crate nix;
extern crate regex;
extern crate time;

#[macro_use]
pub mod tlog;
pub mod ctime;

pub mod buffer;
pub mod completers;
pub mod editor;
pub mod hints;
pub mod history;
pub mod keycodes;
pub mod keys;
pub mod libs;
pub mod rcfile;
pub mod refresh;
mod session;
pub mod tools;
pub mod types;

pub use completers::path::PathCompleter;
pub use completers::Completer;
pub use editor::Editor;
pub use hints::{Hint, Hinter};
pub use history::History;
pub use libs::colored::Color;
pub use rcfile::Config;
pub use types::ReadResult;
