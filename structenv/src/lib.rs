//! Bind environment variables to the leaves of arbitrarily nested structs.
//!
//! Every writable leaf of a `#[derive(Record)]` struct gets an environment
//! variable name derived from its position: the uppercased root type name,
//! then one segment per named container on the way down, then the leaf's
//! own name, all joined with `_`.
//!
//! ```
//! use structenv::Record;
//!
//! #[derive(Record, Default)]
//! pub struct App {
//!     pub port: u16,
//!     pub db: Database,
//! }
//!
//! #[derive(Record, Default)]
//! pub struct Database {
//!     pub url: String,
//! }
//!
//! let source = std::collections::HashMap::from([
//!     ("APP_PORT".to_owned(), "8080".to_owned()),
//!     ("APP_DB_URL".to_owned(), "postgres://localhost".to_owned()),
//! ]);
//!
//! let mut app = App::default();
//! structenv::parse_with(&mut app, None, &source).unwrap();
//!
//! assert_eq!(app.port, 8080);
//! assert_eq!(app.db.url, "postgres://localhost");
//! ```

extern crate self as structenv;

#[macro_use]
mod context;
mod dynamic;
mod error;
mod field;
mod fill;
mod node;
mod options;
mod parse;
mod source;
mod tree;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use dynamic::{Dynamic, Scalar};
pub use error::{Error, Result};
pub use field::{Field, Kind, Slot};
pub use node::{Node, Record};
pub use options::Options;
pub use parse::{
    DEBUG_ENV_VAR, compose, parse, parse_dynamic, parse_dynamic_with, parse_with, requirements,
};
pub use source::{Env, Source};
pub use structenv_derive::Record;
pub use tree::{Tree, join};
