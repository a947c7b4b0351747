//! Parse version strings of the form `MAJOR.MINOR.PATCH[.REVISION][-PRE][+BUILD]`
//! and order them.
//!
//! ```
//! use semanver::{Precedence, Version};
//!
//! let pre = Version::parse("1.0.0-alpha1").unwrap();
//! let release = Version::parse("1.0.0").unwrap();
//! assert!(pre.is_older_than(&release));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{AnyVersion, Precedence, Shape, Version, VersionWithRevision};
pub use error::{Result, SemanVerError};
