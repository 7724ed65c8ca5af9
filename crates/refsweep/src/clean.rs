use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::error::{value_kind, Error, Result};
use crate::freq::{count_occurrences, total_occurrences};
use crate::ident::{collect_identifiers, Identifier};
use crate::prune::prune;

/// Configuration for one [`clean`] run. There are no built-in defaults at
/// this level; callers (such as the CLI) supply every key explicitly.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Keys whose values are collected and counted as identifiers.
    pub search_keys: Vec<String>,
    /// Keys that trigger removal of their enclosing object when their value
    /// is orphaned.
    pub clean_keys: Vec<String>,
    /// Dot-joined paths below which nothing is inspected or removed.
    pub ignore_paths: Vec<String>,
}

/// Remove obsolete items from `tree`, returning a cleaned deep copy.
///
/// Identifier values are collected once from the unpruned input; the
/// candidate set is fixed for the whole run. Each pass recounts every
/// candidate against the current working copy, prunes objects holding an
/// orphaned value (occurrence count exactly 1) under a clean key, and stops
/// when no candidate is orphaned or when a pass fails to reduce the total
/// occurrence count — the latter happens when the only remaining matches
/// sit under ignored paths and is a silent stop, not an error.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `tree` is not an object or array, and
/// [`Error::NonScalarIdentifier`] if a search key holds a container value.
pub fn clean(tree: &Value, options: &CleanOptions) -> Result<Value> {
    if !matches!(tree, Value::Object(_) | Value::Array(_)) {
        return Err(Error::InvalidRoot {
            kind: value_kind(tree),
        });
    }

    let candidates = collect_identifiers(tree, &options.search_keys)?;
    debug!(candidates = candidates.len(), "collected identifier values");

    let ignore_paths: BTreeSet<String> = options.ignore_paths.iter().cloned().collect();
    let mut working = tree.clone();

    loop {
        let before = count_occurrences(&working, &candidates)?;
        let orphaned: BTreeSet<Identifier> = before
            .iter()
            .filter(|(_, &count)| count == 1)
            .map(|(id, _)| id.clone())
            .collect();
        if orphaned.is_empty() {
            break;
        }

        debug!(orphaned = orphaned.len(), "pruning pass");
        working = prune(&working, &options.clean_keys, &orphaned, &ignore_paths)
            .unwrap_or(Value::Null);

        let after = count_occurrences(&working, &candidates)?;
        if total_occurrences(&after) >= total_occurrences(&before) {
            break;
        }
    }

    Ok(working)
}
