use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::{value_kind, Error, Result};

/// A candidate identifier value, keyed by its canonical JSON token.
///
/// Scalars collected under search keys must be usable as set members; keying
/// them by their serialized token (`"a"`, `42`, `true`, `null`) gives them a
/// total order and is exactly the substring the occurrence counter looks
/// for. Two scalars compare equal iff their tokens are identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Build an identifier from a scalar value, or `None` for containers.
    pub fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) | Value::Array(_) => None,
            scalar => Some(Self(scalar.to_string())),
        }
    }

    /// The canonical JSON token this identifier is counted by.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect the distinct scalar values found under `search_keys` anywhere in
/// `tree`.
///
/// A matching key contributes its value and is not descended into further;
/// all other object entries and all array elements recurse. Empty
/// `search_keys` yields an empty set.
///
/// # Errors
///
/// Returns [`Error::NonScalarIdentifier`] if a search key holds an object or
/// an array.
pub fn collect_identifiers(tree: &Value, search_keys: &[String]) -> Result<BTreeSet<Identifier>> {
    let mut out = BTreeSet::new();
    collect_into(tree, search_keys, &mut out)?;
    Ok(out)
}

fn collect_into(
    node: &Value,
    search_keys: &[String],
    out: &mut BTreeSet<Identifier>,
) -> Result<()> {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if search_keys.iter().any(|k| k == key) {
                    let id = Identifier::from_scalar(value).ok_or_else(|| {
                        Error::NonScalarIdentifier {
                            key: key.clone(),
                            kind: value_kind(value),
                        }
                    })?;
                    out.insert(id);
                } else {
                    collect_into(value, search_keys, out)?;
                }
            }
        }
        Value::Array(items) => {
            for element in items {
                collect_into(element, search_keys, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{collect_identifiers, Identifier};
    use serde_json::json;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    fn tokens(set: &std::collections::BTreeSet<Identifier>) -> Vec<&str> {
        set.iter().map(Identifier::token).collect()
    }

    #[test]
    fn collects_at_any_depth() -> crate::Result<()> {
        let doc = json!({
            "name": "a",
            "nested": {
                "name": "b",
                "deeper": {"fromDict": "c"}
            },
            "items": [{"name": "d"}]
        });
        let found = collect_identifiers(&doc, &keys(&["name", "fromDict"]))?;
        similar_asserts::assert_eq!(
            tokens(&found),
            vec![r#""a""#, r#""b""#, r#""c""#, r#""d""#]
        );
        Ok(())
    }

    #[test]
    fn non_string_scalars_use_their_json_token() -> crate::Result<()> {
        let doc = json!({"name": 42, "inner": {"sourceName": true}});
        let found = collect_identifiers(&doc, &keys(&["name", "sourceName"]))?;
        similar_asserts::assert_eq!(tokens(&found), vec!["42", "true"]);
        Ok(())
    }

    #[test]
    fn empty_search_keys_yield_empty_set() -> crate::Result<()> {
        let doc = json!({"name": "a"});
        assert!(collect_identifiers(&doc, &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn container_under_search_key_is_rejected() {
        let doc = json!({"name": {"not": "a scalar"}});
        let err = collect_identifiers(&doc, &keys(&["name"])).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::NonScalarIdentifier { ref key, .. } if key == "name"
        ));
    }
}
