use crate::config::{LayoutConfig, RenderConfig};
use crate::highlight::is_tag_highlighted;
use crate::ir::Tag;
use crate::label::format_label;
use crate::layout::{CloudLayout, ScreenClass, display_columns};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

// Monospace advance as a fraction of the font size.
const MONO_ADVANCE: f32 = 0.6;
const GRID_STEP: f32 = 40.0;

/// Per-screen chrome around each label, in px.
struct BubbleMetrics {
    pad_x: f32,
    pad_y: f32,
    border: f32,
    shadow: f32,
    badge_size: f32,
    badge_font: f32,
    badge_offset: f32,
}

impl BubbleMetrics {
    fn for_screen(screen: ScreenClass) -> Self {
        match screen {
            ScreenClass::Mobile => Self {
                pad_x: 4.0,
                pad_y: 2.0,
                border: 1.0,
                shadow: 1.0,
                badge_size: 14.0,
                badge_font: 8.0,
                badge_offset: 4.0,
            },
            ScreenClass::Tablet => Self {
                pad_x: 6.0,
                pad_y: 2.0,
                border: 1.0,
                shadow: 2.0,
                badge_size: 16.0,
                badge_font: 9.0,
                badge_offset: 6.0,
            },
            ScreenClass::Desktop => Self {
                pad_x: 16.0,
                pad_y: 8.0,
                border: 2.0,
                shadow: 4.0,
                badge_size: 20.0,
                badge_font: 10.0,
                badge_offset: 8.0,
            },
        }
    }
}

/// Renders a computed cloud. `tags` and `layout` must be index-aligned, as
/// produced by [`crate::layout::compute_layout`]. Tags that do not match
/// `query` are dimmed.
pub fn render_svg(
    tags: &[Tag],
    layout: &CloudLayout,
    theme: &Theme,
    layout_config: &LayoutConfig,
    render: &RenderConfig,
    query: Option<&str>,
) -> String {
    let width = render.width.max(200.0);
    let height = render.height.max(200.0);
    let screen = ScreenClass::from_viewport_width(width);
    let metrics = BubbleMetrics::for_screen(screen);
    let query = query.unwrap_or("");

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<pattern id=\"grid\" width=\"{GRID_STEP}\" height=\"{GRID_STEP}\" patternUnits=\"userSpaceOnUse\"><path d=\"M {GRID_STEP} 0 L 0 0 0 {GRID_STEP}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/></pattern>",
        theme.grid_color
    ));
    svg.push_str("</defs>");
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        render.background
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"url(#grid)\"/>");

    if render.show_search_box {
        let zone = layout_config.sanitized();
        svg.push_str(&search_box_svg(width, height, theme, &zone, query));
    }

    for idx in layout.paint_order() {
        let (Some(tag), Some(entry)) = (tags.get(idx), layout.tags.get(idx)) else {
            continue;
        };
        let pos = entry.position;
        let cx = pos.x as f32 / 100.0 * width;
        let cy = pos.y as f32 / 100.0 * height;
        let font_px = pos.size_tier.font_size_rem(screen) * theme.font_size;
        let text_w = display_columns(&tag.name) as f32 * font_px * MONO_ADVANCE;
        let box_w = text_w + metrics.pad_x * 2.0;
        let box_h = font_px * 1.25 + metrics.pad_y * 2.0;
        let x = cx - box_w / 2.0;
        let y = cy - box_h / 2.0;
        let opacity = if is_tag_highlighted(&tag.name, query) {
            1.0
        } else {
            theme.dimmed_opacity
        };

        svg.push_str(&format!(
            "<g class=\"tag {}\" data-layer=\"{}\" opacity=\"{}\">",
            pos.size_tier.css_class(),
            pos.layer,
            opacity
        ));
        svg.push_str(&format!(
            "<title>{}: {} articles</title>",
            escape_xml(&tag.name),
            tag.count
        ));
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"{}\"/>",
            x + metrics.shadow,
            y + metrics.shadow,
            theme.shadow_color
        ));
        svg.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            theme.label_background,
            theme.label_border_color,
            metrics.border
        ));
        svg.push_str(&format!(
            "<text x=\"{cx:.2}\" y=\"{cy:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{font_px:.2}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            escape_xml(&theme.font_family),
            theme.label_text_color,
            escape_xml(&format_label(&tag.name))
        ));
        if render.show_counts {
            let bx = x + box_w + metrics.badge_offset - metrics.badge_size / 2.0;
            let by = y - metrics.badge_offset + metrics.badge_size / 2.0;
            svg.push_str(&format!(
                "<circle cx=\"{bx:.2}\" cy=\"{by:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
                metrics.badge_size / 2.0,
                theme.badge_background,
                theme.label_background
            ));
            svg.push_str(&format!(
                "<text x=\"{bx:.2}\" y=\"{by:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
                escape_xml(&theme.font_family),
                metrics.badge_font,
                theme.badge_text_color,
                tag.count
            ));
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

/// Placeholder for the search affordance reserved at the viewport center.
fn search_box_svg(
    width: f32,
    height: f32,
    theme: &Theme,
    layout_config: &LayoutConfig,
    query: &str,
) -> String {
    let cx = layout_config.center_x as f32 / 100.0 * width;
    let cy = layout_config.center_y as f32 / 100.0 * height;
    let radius = layout_config.exclusion_radius as f32 / 100.0 * width.min(height);
    let box_w = radius * 1.6;
    let box_h = (theme.font_size * 2.5).min(radius);
    let prompt = if query.trim().is_empty() {
        "> search_tags_".to_string()
    } else {
        format!("> {query}_")
    };
    format!(
        "<g class=\"search\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/><text x=\"{:.2}\" y=\"{cy:.2}\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text></g>",
        cx - box_w / 2.0,
        cy - box_h / 2.0,
        theme.search_box_fill,
        theme.search_box_stroke,
        cx - box_w / 2.0 + theme.font_size * 0.75,
        escape_xml(&theme.font_family),
        theme.font_size,
        theme.accent_color,
        escape_xml(&prompt)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "JetBrains Mono".to_string();
    opt.fontdb_mut().load_system_fonts();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid output size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
