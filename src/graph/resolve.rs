//! Link target resolution
//!
//! emanote reports link targets as paths to the rendered HTML pages,
//! percent-encoded. Note identifiers in the export are source paths, so a
//! target such as `Topics/Rust%20Ownership.html` maps back to
//! `Topics/Rust Ownership.md`.

use serde_json::Value;
use thiserror::Error;

use crate::export::LinkRecord;

/// Suffix of rendered pages in resolved link targets
pub const RENDERED_EXTENSION: &str = ".html";

/// Suffix of note identifiers in the export
pub const SOURCE_EXTENSION: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The link has no resolved target (external URL, unresolved wikilink)
    #[error("link has no resolved target")]
    NoTarget,
    /// Resolution metadata is present but not shaped as expected
    #[error("malformed link target: {0}")]
    Malformed(String),
}

/// Compute the canonical note identifier a link points at.
pub fn resolve(link: &LinkRecord) -> Result<String, ResolveError> {
    let target = match link {
        LinkRecord::Malformed(entry) => {
            return Err(ResolveError::Malformed(format!(
                "expected a link object, found {entry}"
            )))
        }
        LinkRecord::Link {
            resolved_rel_target: None | Some(Value::Null),
        } => return Err(ResolveError::NoTarget),
        LinkRecord::Link {
            resolved_rel_target: Some(target),
        } => target,
    };

    let rendered = target
        .get("contents")
        .and_then(Value::as_str)
        .ok_or_else(|| ResolveError::Malformed(format!("expected a `contents` path in {target}")))?;

    let source = format!(
        "{}{SOURCE_EXTENSION}",
        rendered.strip_suffix(RENDERED_EXTENSION).unwrap_or(rendered)
    );

    urlencoding::decode(&source)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ResolveError::Malformed(format!("cannot decode '{source}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link(target: Option<Value>) -> LinkRecord {
        LinkRecord::Link {
            resolved_rel_target: target,
        }
    }

    #[test]
    fn test_resolve_rendered_path() {
        let result = resolve(&LinkRecord::to_rendered("Topics/Rust.html"));
        assert_eq!(result, Ok("Topics/Rust.md".to_string()));
    }

    #[test]
    fn test_resolve_without_rendered_extension() {
        let result = resolve(&LinkRecord::to_rendered("Topics/Rust"));
        assert_eq!(result, Ok("Topics/Rust.md".to_string()));
    }

    #[test]
    fn test_resolve_strips_only_trailing_extension() {
        let result = resolve(&LinkRecord::to_rendered("a.html/b.html"));
        assert_eq!(result, Ok("a.html/b.md".to_string()));
    }

    #[test]
    fn test_percent_decoding() {
        let result = resolve(&LinkRecord::to_rendered("Topics/Rust%20Ownership.html"));
        assert_eq!(result, Ok("Topics/Rust Ownership.md".to_string()));

        let result = resolve(&LinkRecord::to_rendered("B%C3%BCcher/%C3%9Cbersicht.html"));
        assert_eq!(result, Ok("Bücher/Übersicht.md".to_string()));
    }

    #[test]
    fn test_missing_target_is_no_target() {
        assert_eq!(resolve(&link(None)), Err(ResolveError::NoTarget));
        assert_eq!(resolve(&link(Some(Value::Null))), Err(ResolveError::NoTarget));
    }

    #[test]
    fn test_missing_contents_is_malformed() {
        let result = resolve(&link(Some(json!({"tag": "RRTMissing"}))));
        assert!(matches!(result, Err(ResolveError::Malformed(_))));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        for target in [json!("Rust.html"), json!({"contents": ["a.html", "b.html"]}), json!(42)] {
            let result = resolve(&link(Some(target)));
            assert!(matches!(result, Err(ResolveError::Malformed(_))));
        }
    }

    #[test]
    fn test_non_object_entry_is_malformed() {
        for entry in [json!("not-an-object"), json!(42), json!(null)] {
            let result = resolve(&LinkRecord::Malformed(entry));
            assert!(matches!(result, Err(ResolveError::Malformed(_))));
        }
    }

    #[test]
    fn test_invalid_utf8_escape_is_malformed() {
        let result = resolve(&LinkRecord::to_rendered("broken%FF.html"));
        assert!(matches!(result, Err(ResolveError::Malformed(_))));
    }
}
