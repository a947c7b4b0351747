//! Domain logic - parsing and ordering, independent of any I/O
//!
//! The tokenizer behind [`Version::parse`] is internal:
//!
//! ```compile_fail
//! let parts = semanver::domain::parser::split_version("1.0.0-rc+7");
//! ```

pub mod any_version;
pub(crate) mod parser;
pub mod precedence;
pub mod tag;
pub mod version;

pub use any_version::{AnyVersion, Shape};
pub use precedence::{latest, sort_by_precedence, Precedence};
pub use tag::TagPattern;
pub use version::{Version, VersionWithRevision};
