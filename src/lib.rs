#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod highlight;
pub mod ir;
pub mod label;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use highlight::{filter_tags_by_search, is_tag_highlighted};
pub use ir::{Tag, TagKind, TagSet};
pub use label::{LABEL_PREFIX, format_label, strip_label};
pub use layout::{
    CloudLayout, Position, SizeTier, compute_layout, compute_size_tier, layout_tags,
    layout_tags_with_config,
};
pub use parser::{ParseError, parse_tags};
pub use render::render_svg;
pub use theme::Theme;

/// Everything needed to go from a tag document to SVG in one call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub query: Option<String>,
}

impl RenderOptions {
    pub fn dark() -> Self {
        Self::from_config(Config::default())
    }

    pub fn light() -> Self {
        let theme = Theme::matrix_light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..RenderConfig::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
            query: None,
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            theme: config.theme,
            layout: config.layout,
            render: config.render,
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parses a tag document, lays it out and renders it.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let set = parse_tags(input)?;
    let layout = compute_layout(&set.tags, &options.layout);
    Ok(render_svg(
        &set.tags,
        &layout,
        &options.theme,
        &options.layout,
        &options.render,
        options.query.as_deref(),
    ))
}
