use serde::{Deserialize, Serialize};

/// Where a tag came from in the publishing pipeline. Carried through for
/// presentation only; the layout engine never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    #[default]
    Category,
    Display,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: i64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: TagKind,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
            color: String::new(),
            description: String::new(),
            kind: TagKind::Category,
        }
    }
}

/// An ordered tag list, as handed over by the data pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    pub tags: Vec<Tag>,
}

impl TagSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Largest count in the set, floored at 1 so ratios stay finite.
    pub fn max_count(&self) -> i64 {
        max_count(&self.tags)
    }
}

pub(crate) fn max_count(tags: &[Tag]) -> i64 {
    tags.iter().map(|tag| tag.count).max().unwrap_or(0).max(1)
}
