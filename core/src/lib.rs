//! The core of a library of backtracking parser combinators whose composite
//! result types are computed at compile time from the result types of their
//! parts.
//!
//! Grammars are built by composing small [`Parser`] values, from the
//! [primitives](#functions) that match characters, literals, numbers and quoted
//! strings, with the [combinators](combinator/index.html) for sequencing,
//! alternation, repetition, delimited lists and conversion, most of which also
//! have operators:
//!
//! ```
//! use weft_core::{Parser, StrParserStream, integral, skip_space, symbol};
//!
//! let point = symbol('(') >> integral::<i32>() >> ',' >> skip_space() >> integral::<i32>() >> ')';
//! let mut stream = StrParserStream::new("(1, -2)");
//! assert_eq!(point.read(&mut stream), Some((1, -2)));
//! ```
//!
//! The `Result` type of `point` above is `(i32, i32)`, not some nesting of the
//! results of its parts, because each parser also declares the
//! [`kind`](kind/index.html) of its result, which is what the combinators
//! unify.
//!
//! Parsers read from a [`ParserStream`], which can undo any number of the
//! characters read from it.  A parser that fails leaves its stream exactly as
//! it was, which is achieved by reading through a [`SubParserStream`]
//! checkpoint that rolls back when dropped unless it was accepted.  Failing to
//! match is therefore ordinary and cheap, and is what drives alternatives and
//! repetitions.
//!
//! Recursive grammars are made with [`Rule`], whose parser is set after the rule
//! has already been used, and any parser can have its type erased with
//! [`ParserBox`].
//!
//! This crate is `no_std` but needs the `alloc` library.
//!
//! [`Parser`]: trait.Parser.html
//! [`ParserStream`]: trait.ParserStream.html
//! [`SubParserStream`]: struct.SubParserStream.html
//! [`Rule`]: struct.Rule.html
//! [`ParserBox`]: struct.ParserBox.html

#![no_std]

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
    private_doc_tests,
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

extern crate alloc;


pub mod stream;
pub use stream::{ParserStream, SubParserStream, premade::*};

pub mod kind;
pub use kind::ResultKind;

pub mod parser;
pub use parser::{Parser, IntoParser, premade::*};

pub mod combinator;

mod boxed;
pub use boxed::ParserBox;

mod rule;
pub use rule::Rule;

pub mod rational;
pub use rational::{Rational, RationalIntegral};

mod ops;
