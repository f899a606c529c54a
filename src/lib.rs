//! Backtracking parser combinators whose composite result types are computed
//! at compile time, with the additional functionality that uses the Rust
//! standard library, layered on top of [`weft_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`weft_core`]: the streams, the [`Parser`] trait, the
//! primitive parsers, the combinators and their operators, [`Rule`] and
//! [`ParserBox`].
//!
//! * Provides the [driver functions](common/index.html) that parse a string,
//! bytes or an [`io::Read`] with a parser and report failure as an [`Error`].
//!
//! * Provides [parsers of dates, date-times and durations](datetime/index.html)
//! that produce the types of [`chrono`].
//!
//! * Provides [JSON](json/index.html) values and their grammar.
//!
//! * Provides the [`DefaultParser`] of many types, so that a value can be
//! [`parse`]d knowing only its type.
//!
//! ```
//! use weft::{Parser, common::inmem::parse_from, integral, symbol};
//!
//! let int = integral::<i32>();
//! let list = symbol('[') >> int.list(',') >> ']';
//! assert_eq!(parse_from(&list, "[1, 2,3]").unwrap(), [1, 2, 3]);
//! ```
//!
//! [`weft_core`]: ../weft_core/index.html
//! [`Parser`]: ../weft_core/trait.Parser.html
//! [`Rule`]: ../weft_core/struct.Rule.html
//! [`ParserBox`]: ../weft_core/struct.ParserBox.html
//! [`io::Read`]: http://doc.rust-lang.org/std/io/trait.Read.html
//! [`Error`]: enum.Error.html
//! [`chrono`]: https://docs.rs/chrono
//! [`DefaultParser`]: default/trait.DefaultParser.html
//! [`parse`]: default/fn.parse.html


#![forbid(unsafe_code)]

// Warn about desired lints that would otherwise be allowed by default.
#![warn(
    // Groups
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility, // unsure if needed with Cargo.toml having edition="2018"
    rust_2018_idioms,
    unused,
    clippy::all,
    clippy::pedantic,
    // Individual lints not included in above groups and desired.
    macro_use_extern_crate,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    // missing_doc_code_examples, // maybe someday
    private_doc_tests,
    // single_use_lifetimes, // annoying hits on invisible derived impls
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    variant_size_differences,
)]
// Exclude (re-allow) undesired lints included in above groups.
#![allow(
    explicit_outlives_requirements, // annoying hits on invisible derived impls
    clippy::non_ascii_literal,
    clippy::module_name_repetitions,
)]


// Re-export everything from the core crate.
#[doc(no_inline)]
pub use weft_core::*;

pub mod error;
pub use error::{Error, Result};

/// Functions that run a parser over a whole input and report whether it
/// matched as a `Result`.
pub mod common {
    pub mod inmem;
    pub mod stream;
}

pub mod datetime;
pub use datetime::{date, date_time, time_duration, unit_duration};

pub mod json;
pub use json::{JsonObject, JsonParser, JsonValue, parse_json};

pub mod default;
pub use default::{DefaultParser, parse};
