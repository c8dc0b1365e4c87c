//! # Tablemark - Markdown Table Rendering
//!
//! `tablemark` renders a matrix of strings (a header row plus data rows)
//! as a GitHub-Flavored-Markdown table. It is the rendering core for tools
//! that emit Markdown from CSV files, query results, or reports; loading
//! that data is the caller's job, turning it into a well-formed table is
//! this crate's.
//!
//! ## Core Concepts
//!
//! - [`Config`]: per-call rendering configuration (alignment, caption,
//!   compact mode, column exclusion, column sorting)
//! - [`Align`]: Center / Left / Right, reflected in the separator markers
//!   (`:-:`, `:-`, `-:`)
//! - [`SortMode`]: column reordering by header name, with a
//!   custom-comparator escape hatch
//! - [`convert`]: assembles the caption, header, separator, and data lines
//!   into the final string
//!
//! ## Quick Start
//!
//! ```rust
//! use tablemark::{convert, Config};
//!
//! let records = vec![
//!     vec!["Name", "Role"],
//!     vec!["Ada", "Engineer"],
//!     vec!["Grace", "Admiral"],
//! ];
//!
//! let table = convert(&records, &Config::default()).unwrap();
//! assert_eq!(table, "\
//! | Name  |   Role   |
//! | :---: | :------: |
//! |  Ada  | Engineer |
//! | Grace | Admiral  |");
//! ```
//!
//! ## Rendering Styles
//!
//! The default ("beautiful") style pads every cell to its column's width so
//! the Markdown source itself reads as a table. Compact mode drops the
//! padding for minimal output; both render identically in a browser:
//!
//! ```rust
//! use tablemark::{convert, Config};
//!
//! let records = vec![vec!["Name", "Role"], vec!["Ada", "Engineer"]];
//!
//! let compact = convert(&records, &Config::new().compact()).unwrap();
//! assert_eq!(compact, "\
//! |Name|Role|
//! |:-:|:-:|
//! |Ada|Engineer|");
//! ```
//!
//! ## Column Selection and Ordering
//!
//! Columns can be dropped by header name and reordered by sorting header
//! names; the two compose, and excluding every column yields an empty
//! string rather than an error:
//!
//! ```rust
//! use tablemark::{convert, Align, Config, SortMode};
//!
//! let records = vec![
//!     vec!["Phone", "Email", "Name"],
//!     vec!["555-1212", "ada@example.com", "Ada"],
//! ];
//!
//! let cfg = Config::new()
//!     .align(Align::Left)
//!     .sort(SortMode::Ascending)
//!     .exclude("Phone");
//!
//! let table = convert(&records, &cfg).unwrap();
//! assert_eq!(table, "\
//! | Email           | Name |
//! | :-------------- | :--- |
//! | ada@example.com | Ada  |");
//! ```
//!
//! ## Widths and Escaping
//!
//! Column widths are Unicode codepoint counts measured over every row,
//! with a floor that keeps room for the separator's alignment colons.
//! Literal `|` characters in cells are escaped as `\|` so they cannot break
//! the column structure; the caller's data is never mutated.
//!
//! Diagnostics (configuration warnings, verbose progress) are emitted
//! through [`tracing`]; installing a subscriber is the embedding
//! application's concern.

mod config;
mod convert;
mod error;
mod line;
mod resolve;
mod util;

pub use config::{Align, Config, SortFn, SortMode};
pub use convert::convert;
pub use error::{Result, TableError};
pub use resolve::ResolvedLayout;
pub use util::{codepoint_width, pad_center, pad_left, pad_right};
