use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::canon::canonical_text;
use crate::error::Result;
use crate::ident::Identifier;

/// Count how often each candidate's canonical token occurs in `tree`.
///
/// The tree is serialized once with [`canonical_text`] and each candidate is
/// counted as a plain substring of that text. Every candidate gets an entry,
/// zero when absent.
///
/// # Errors
///
/// Returns an error if the tree cannot be serialized.
pub fn count_occurrences(
    tree: &Value,
    candidates: &BTreeSet<Identifier>,
) -> Result<BTreeMap<Identifier, usize>> {
    let text = canonical_text(tree)?;
    Ok(substring_frequencies(&text, candidates))
}

/// Non-overlapping, left-to-right substring counts of each candidate token
/// in `text`.
pub fn substring_frequencies(
    text: &str,
    candidates: &BTreeSet<Identifier>,
) -> BTreeMap<Identifier, usize> {
    candidates
        .iter()
        .map(|id| (id.clone(), text.matches(id.token()).count()))
        .collect()
}

/// Total of all per-candidate counts.
pub fn total_occurrences(frequencies: &BTreeMap<Identifier, usize>) -> usize {
    frequencies.values().sum()
}

#[cfg(test)]
mod tests {
    use super::{count_occurrences, substring_frequencies, total_occurrences};
    use crate::ident::Identifier;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn candidates(values: &[serde_json::Value]) -> BTreeSet<Identifier> {
        values
            .iter()
            .map(|v| Identifier::from_scalar(v).unwrap())
            .collect()
    }

    #[test]
    fn string_candidates_are_counted_in_quoted_form() -> crate::Result<()> {
        // "a" must not match inside the key "name" or the value "ab".
        let doc = json!({"name": "a", "ref": "a", "tag": "ab"});
        let set = candidates(&[json!("a"), json!("ab")]);
        let freq = count_occurrences(&doc, &set)?;

        let a = Identifier::from_scalar(&json!("a")).unwrap();
        let ab = Identifier::from_scalar(&json!("ab")).unwrap();
        similar_asserts::assert_eq!(freq[&a], 2);
        similar_asserts::assert_eq!(freq[&ab], 1);
        Ok(())
    }

    #[test]
    fn numeric_candidates_match_inside_longer_numbers() -> crate::Result<()> {
        // Accepted textual-counting artifact: 42 also matches within 1427.
        let doc = json!({"id": 42, "big": 1427});
        let set = candidates(&[json!(42)]);
        let freq = count_occurrences(&doc, &set)?;

        let id = Identifier::from_scalar(&json!(42)).unwrap();
        similar_asserts::assert_eq!(freq[&id], 2);
        Ok(())
    }

    #[test]
    fn counting_is_non_overlapping() {
        let set = candidates(&[json!(11)]);
        let freq = substring_frequencies("1111", &set);
        let id = Identifier::from_scalar(&json!(11)).unwrap();
        similar_asserts::assert_eq!(freq[&id], 2);
    }

    #[test]
    fn absent_candidates_count_zero_and_totals_sum() -> crate::Result<()> {
        let doc = json!({"name": "a"});
        let set = candidates(&[json!("a"), json!("missing")]);
        let freq = count_occurrences(&doc, &set)?;

        let missing = Identifier::from_scalar(&json!("missing")).unwrap();
        similar_asserts::assert_eq!(freq[&missing], 0);
        similar_asserts::assert_eq!(total_occurrences(&freq), 1);
        Ok(())
    }
}
