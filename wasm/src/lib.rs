use serde::{Deserialize, Serialize};
use tagcloud_rs::{RenderOptions, compute_layout, parse_tags, render_with_options};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    query: Option<String>,
    show_counts: Option<bool>,
}

/// Shape the front-end positions its tag bubbles with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BubblePosition {
    x: f64,
    y: f64,
    font_size: &'static str,
    z_index: i32,
}

fn build_render_options(options: CloudRenderOptions) -> RenderOptions {
    let mut render_options = if options.theme.as_deref() == Some("light") {
        RenderOptions::light()
    } else {
        RenderOptions::dark()
    };

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(width) = options.width {
        render_options.render.width = width;
    }
    if let Some(height) = options.height {
        render_options.render.height = height;
    }
    if let Some(show_counts) = options.show_counts {
        render_options.render.show_counts = show_counts;
    }
    render_options.query = options.query;

    render_options
}

fn layout_json(tags_json: &str) -> Result<String, String> {
    let set = parse_tags(tags_json).map_err(|error| error.to_string())?;
    let layout = compute_layout(&set.tags, &RenderOptions::default().layout);
    let positions: Vec<BubblePosition> = layout
        .positions()
        .into_iter()
        .map(|pos| BubblePosition {
            x: pos.x,
            y: pos.y,
            font_size: pos.size_tier.css_class(),
            z_index: pos.layer,
        })
        .collect();
    serde_json::to_string(&positions).map_err(|error| error.to_string())
}

fn render_json(tags_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw_options) => serde_json::from_str::<CloudRenderOptions>(raw_options)
            .map_err(|error| error.to_string())?,
        None => CloudRenderOptions::default(),
    };
    render_with_options(tags_json, build_render_options(options))
        .map_err(|error| error.to_string())
}

/// Positions for a `tags.json` document, index-aligned with its tags.
#[wasm_bindgen]
pub fn layout_tag_cloud(tags_json: &str) -> Result<String, JsValue> {
    layout_json(tags_json).map_err(|error| JsValue::from_str(&error))
}

#[wasm_bindgen]
pub fn render_tag_cloud_svg(
    tags_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    render_json(tags_json, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{layout_json, render_json};

    const TAGS: &str = r#"{"tags":[
        {"name":"react","count":10},
        {"name":"css","count":2},
        {"name":"go","count":0}
    ]}"#;

    #[test]
    fn layout_returns_bubble_positions_in_order() {
        let json = layout_json(TAGS).expect("layout should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let positions = value.as_array().unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0]["fontSize"], "text-4xl");
        assert_eq!(positions[0]["zIndex"], 20);
        assert_eq!(positions[2]["fontSize"], "text-sm");
    }

    #[test]
    fn renders_with_light_theme_and_query() {
        let svg = render_json(TAGS, Some(r#"{"theme":"light","query":"re","width":600}"#))
            .expect("render should succeed");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"600\""));
        assert!(svg.contains("#react"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = layout_json(r#"[{"name":"a","count":1},{"name":"a","count":1}]"#).unwrap_err();
        assert!(err.contains("duplicate"));
    }
}
