//! # jot-core
//!
//! A self-contained JSON value model and parser: a six-variant [`Value`]
//! type, the owning containers that back it ([`Array`] and the Robin-Hood
//! hash [`Map`]), and a hand-rolled lexer + recursive-descent parser that
//! turns UTF-8 text into a value tree.
//!
//! Nothing here depends on an external serialization framework; the point
//! of the crate is the container and parser machinery itself. Fallible
//! lookups — container access and per-variant value accessors — report
//! absence through [`OptRef`]/[`OptMut`] instead of errors.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::{parse, Kind};
//!
//! let doc = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(doc.kind(), Kind::Object);
//!
//! let object = doc.object().get();
//! assert_eq!(*object.at("name").get(), "Alice");
//! assert_eq!(object.at("scores").get().array().get().len(), 3);
//!
//! // Mismatched accessors are absent, not errors.
//! assert!(!object.at("name").get().number().has_value());
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] sum type, accessors, typed extraction
//! - [`array`] — [`Array`], the growable sequence container
//! - [`map`] — [`Map`], the string-keyed Robin-Hood hash map
//! - [`opt_ref`] — [`OptRef`]/[`OptMut`] non-owning maybe-references
//! - [`parse`](mod@parse) — lexer + recursive-descent grammar
//! - [`error`] — [`ParseError`] and its [`ErrorKind`] taxonomy

pub mod array;
mod buf;
pub mod error;
pub mod map;
pub mod opt_ref;
pub mod parse;
pub mod value;

pub use array::Array;
pub use error::{ErrorKind, ParseError};
pub use map::Map;
pub use opt_ref::{OptMut, OptRef};
pub use parse::parse;
pub use value::{FromValue, Kind, Value};
