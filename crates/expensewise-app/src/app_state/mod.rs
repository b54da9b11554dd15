//! Top-level application state.
//!
//! A line-oriented presentation surface for the assistant panel: reads
//! commands and messages from an async reader, renders the transcript to a
//! writer, and applies settlements on the same task.

mod assistant;
mod core;
mod event_loop;
mod init;
mod types;


pub use core::ExpenseWiseApp;
