use crate::ir::{Tag, TagSet};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid tag document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tag at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate tag name '{name}' at index {index}")]
    DuplicateName { name: String, index: usize },
}

/// Either the pipeline's `tags.json` envelope or a bare array of tags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagDocument {
    Envelope { tags: Vec<Tag> },
    List(Vec<Tag>),
}

/// Parses a tag document and enforces what the layout engine expects from
/// its caller: every name non-empty, every name unique.
pub fn parse_tags(input: &str) -> Result<TagSet, ParseError> {
    let document: TagDocument = serde_json::from_str(input)?;
    let tags = match document {
        TagDocument::Envelope { tags } => tags,
        TagDocument::List(tags) => tags,
    };
    validate_tags(&tags)?;
    Ok(TagSet::new(tags))
}

pub fn validate_tags(tags: &[Tag]) -> Result<(), ParseError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tags.len());
    for (index, tag) in tags.iter().enumerate() {
        if tag.name.trim().is_empty() {
            return Err(ParseError::EmptyName { index });
        }
        if !seen.insert(tag.name.as_str()) {
            return Err(ParseError::DuplicateName {
                name: tag.name.clone(),
                index,
            });
        }
    }
    Ok(())
}
