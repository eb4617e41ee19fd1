//! Error Log Pipeline
//!
//! Everything that reads `.agentlog/errors.jsonl` lives here.
//!
//! The file is append-only JSON Lines written by other processes. Each line is
//! decoded on its own, so one corrupt line is skipped and reported while every
//! valid line around it still comes through.
//!
//! There are three ways the log is consumed:
//! - **Query**: read the whole file once, filter by source, type and time, keep
//!   the most recent N
//! - **Tail**: replay what is already there, then poll for appended lines from
//!   the last byte offset
//! - **Summary**: count everything, bucket by trailing windows and rank the
//!   most frequent types and sources
//!
//! The overall data processing architecture is:
//!
//! errors.jsonl
//! read_entries / read_from_offset
//! parse_line
//! Entry
//! EntryFilter | TailWatcher | summarize
//! render_*
//!

mod error;
mod filter;
mod parse;
mod reader;
mod render;
mod shutdown;
mod since;
mod summary;
mod tail;
mod types;

#[cfg(test)]
mod tests;

pub use error::*;
pub use filter::*;
pub use parse::*;
pub use reader::*;
pub use render::*;
pub use shutdown::*;
pub use since::*;
pub use summary::*;
pub use tail::*;
pub use types::*;
