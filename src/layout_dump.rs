use crate::ir::Tag;
use crate::label::format_label;
use crate::layout::CloudLayout;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub tag_count: usize,
    pub degraded: usize,
    pub tags: Vec<TagDump>,
}

#[derive(Debug, Serialize)]
pub struct TagDump {
    pub index: usize,
    pub name: String,
    pub label: String,
    pub count: i64,
    pub x: f64,
    pub y: f64,
    pub size_tier: String,
    pub font_class: String,
    pub layer: i32,
    pub width: f64,
    pub height: f64,
    pub degraded: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &CloudLayout, tags: &[Tag]) -> Self {
        let dumps = layout
            .tags
            .iter()
            .zip(tags)
            .enumerate()
            .map(|(index, (entry, tag))| TagDump {
                index,
                name: tag.name.clone(),
                label: format_label(&tag.name),
                count: tag.count,
                x: entry.position.x,
                y: entry.position.y,
                size_tier: format!("{:?}", entry.position.size_tier),
                font_class: entry.position.size_tier.css_class().to_string(),
                layer: entry.position.layer,
                width: entry.footprint.width,
                height: entry.footprint.height,
                degraded: entry.degraded,
            })
            .collect();

        LayoutDump {
            tag_count: tags.len(),
            degraded: layout.degraded(),
            tags: dumps,
        }
    }
}

pub fn layout_dump_json(layout: &CloudLayout, tags: &[Tag]) -> anyhow::Result<String> {
    let dump = LayoutDump::from_layout(layout, tags);
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Writes the dump to `path`, or stdout when `None`.
pub fn write_layout_dump(
    path: Option<&Path>,
    layout: &CloudLayout,
    tags: &[Tag],
) -> anyhow::Result<()> {
    let json = layout_dump_json(layout, tags)?;
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;

    #[test]
    fn dump_is_index_aligned() {
        let tags = vec![Tag::new("react", 10), Tag::new("css", 2), Tag::new("go", 0)];
        let layout = compute_layout(&tags, &LayoutConfig::default());
        let dump = LayoutDump::from_layout(&layout, &tags);
        assert_eq!(dump.tag_count, 3);
        let names: Vec<&str> = dump.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["react", "css", "go"]);
        assert_eq!(dump.tags[0].font_class, "text-4xl");
        assert_eq!(dump.tags[2].font_class, "text-sm");
        assert_eq!(dump.tags[1].label, "#css");
    }

    #[test]
    fn dump_serializes_to_json() {
        let tags = vec![Tag::new("rust", 4)];
        let layout = compute_layout(&tags, &LayoutConfig::default());
        let json = layout_dump_json(&layout, &tags).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tags"][0]["name"], "rust");
        assert_eq!(value["tags"][0]["layer"], 20);
        assert_eq!(value["tag_count"], 1);
    }
}
