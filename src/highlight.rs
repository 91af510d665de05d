use crate::ir::Tag;

/// Whether a tag stays fully visible for the current search query. A blank
/// query highlights everything; otherwise the match is a case-insensitive
/// substring test.
pub fn is_tag_highlighted(name: &str, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Highlight flags, index-aligned with `tags`.
pub fn filter_tags_by_search(tags: &[Tag], query: &str) -> Vec<bool> {
    tags.iter()
        .map(|tag| is_tag_highlighted(&tag.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_highlights_everything() {
        for query in ["", " ", "\t", "\n", "   "] {
            assert!(is_tag_highlighted("Rust", query));
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_tag_highlighted("JavaScript", "script"));
        assert!(is_tag_highlighted("JavaScript", "JAVA"));
        assert!(!is_tag_highlighted("Go", "rust"));
        assert!(is_tag_highlighted("系统设计", "设计"));
    }

    #[test]
    fn flags_follow_input_order() {
        let tags = vec![Tag::new("React", 3), Tag::new("Go", 1), Tag::new("reactive", 2)];
        assert_eq!(filter_tags_by_search(&tags, "react"), vec![true, false, true]);
    }
}
