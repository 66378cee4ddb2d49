/// Merges class strings into one, keeping each token once in first-seen order.
///
/// Each part may hold several space-separated tokens or be empty. No
/// validation is performed on the tokens themselves.
///
/// # Examples
///
/// ```
/// use bootwire_core::merge_classes;
///
/// assert_eq!(merge_classes(["btn mb-3", "btn"]), "btn mb-3");
/// assert_eq!(merge_classes(["", "  card  shadow-sm"]), "card shadow-sm");
/// ```
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !seen.iter().any(|existing| existing == token) {
                seen.push(token.to_string());
            }
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_preserves_first_occurrence() {
        assert_eq!(merge_classes(["btn mb-3", "btn"]), "btn mb-3");
        assert_eq!(merge_classes(["a b", "c a", "b d"]), "a b c d");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_classes(["btn btn-primary", "mt-2 btn"]);
        let twice = merge_classes([once.as_str(), once.as_str()]);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_skips_empty_parts() {
        let parts: [Option<&str>; 3] = [None, Some("row"), Some("")];

        assert_eq!(merge_classes(parts.into_iter().flatten()), "row");
        assert_eq!(merge_classes(Vec::<String>::new()), "");
    }
}
