//! Remove no longer referenced items from a nested JSON document.
//!
//! Values appearing under a set of *search keys* (e.g. `name`) identify
//! items. An identifier whose canonical JSON token occurs exactly once in
//! the serialized document is considered orphaned: nothing else references
//! it. [`clean`] repeatedly removes every object that holds an orphaned
//! value under one of the *clean keys*, until a pass no longer reduces the
//! total occurrence count.
//!
//! Reference counting is deliberately textual: candidates are counted as
//! substrings of the canonical serialization, not resolved structurally.
//! A numeric candidate like `42` therefore also matches inside `1427`.
//! This mirrors the observable behavior of the tool this crate replaces.

pub mod canon;
pub mod clean;
pub mod error;
pub mod freq;
pub mod ident;
pub mod prune;

pub use canon::canonical_text;
pub use clean::{clean, CleanOptions};
pub use error::{Error, Result};
pub use freq::{count_occurrences, substring_frequencies, total_occurrences};
pub use ident::{collect_identifiers, Identifier};
pub use prune::{is_truthy, prune};
