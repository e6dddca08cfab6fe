//! Domain model for comparing lemmatization with stemming
//!
//! This crate holds the pieces every other layer agrees on: the closed
//! [`Language`] set, word lists and the reduction results derived from them,
//! the [`Lemmatizer`] and [`Stemmer`] capability traits behind which the
//! external engines live, and the positional alignment that pairs each word
//! with its lemma and stem.
//!
//! # Example
//!
//! ```rust
//! use morphdiff_core::{align_rows, Language, ReductionResult, WordList};
//!
//! let words = WordList::new(Language::English, ["mice", "jumped"]);
//! let lemmas = ReductionResult::new("lexicon", vec!["mouse".into(), "jump".into()]);
//! let stems = ReductionResult::new("snowball", vec!["mice".into(), "jump".into()]);
//!
//! let rows = align_rows(&words, &lemmas, &stems).unwrap();
//! assert!(!rows[0].equal());
//! assert!(rows[1].equal());
//! ```

#![warn(missing_docs)]

pub mod align;
pub mod error;
pub mod language;
pub mod traits;
pub mod types;

pub use align::align_rows;
pub use error::{CoreError, Result};
pub use language::Language;
pub use traits::{Lemmatizer, Stemmer};
pub use types::{check_alignment, ComparisonRow, ReductionResult, WordList};
