//! Path normalization.
//!
//! # Responsibilities
//! - Split a raw path on `/`
//! - Drop empty tokens (leading, trailing and repeated slashes)
//!
//! # Design Decisions
//! - Segments are opaque: no case folding, no percent-decoding
//! - Total function: `""` and `"/"` both normalize to the root (no segments)
//! - Borrows from the input; no allocation per segment

/// Split `raw` into its non-empty `/`-delimited segments.
pub fn normalize(raw: &str) -> Vec<&str> {
    raw.split('/').filter(|s| !s.is_empty()).collect()
}

/// Remove empty strings from an already split sequence, keeping order.
pub fn remove_empty<S: AsRef<str>>(segments: &[S]) -> Vec<&str> {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_slashes() {
        assert_eq!(normalize("/about"), vec!["about"]);
        assert_eq!(normalize("/about/"), vec!["about"]);
        assert_eq!(normalize("//about///team/"), vec!["about", "team"]);
        assert_eq!(normalize("about"), vec!["about"]);
    }

    #[test]
    fn test_normalize_root() {
        assert!(normalize("/").is_empty());
        assert!(normalize("").is_empty());
        assert!(normalize("///").is_empty());
    }

    #[test]
    fn test_normalize_keeps_segment_text() {
        assert_eq!(
            normalize("/home/@1.b$/%20a+/Jpg"),
            vec!["home", "@1.b$", "%20a+", "Jpg"]
        );
    }

    #[test]
    fn test_remove_empty() {
        let cases: [(&[&str], &[&str]); 5] = [
            (&["a", "b", "c"], &["a", "b", "c"]),
            (&["a", "b", ""], &["a", "b"]),
            (&["a", "", "c"], &["a", "c"]),
            (&["", "b", "c"], &["b", "c"]),
            (&["", "", ""], &[]),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(remove_empty(*input), expected.to_vec(), "case {}", i);
        }
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent(raw in "[a-z/]{0,24}") {
            let once = normalize(&raw);
            let rejoined = once.join("/");
            prop_assert_eq!(normalize(&rejoined), once);
        }

        #[test]
        fn test_normalize_never_yields_empty(raw in "[a-z0-9@$/]{0,32}") {
            prop_assert!(normalize(&raw).iter().all(|s| !s.is_empty()));
        }

        #[test]
        fn test_trailing_slash_invariant(raw in "(/[a-z0-9]{1,4}){0,5}") {
            let with_slash = format!("{}/", raw);
            prop_assert_eq!(normalize(&with_slash), normalize(&raw));
        }
    }
}
