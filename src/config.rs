use crate::layout::{LAYER_BASE, LAYER_SPAN};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the placement pass. All lengths are percent of the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub margin: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub exclusion_radius: f64,
    pub exclusion_push: f64,
    pub max_attempts: u32,
    pub collision_padding: f64,
    pub layer_base: i32,
    pub layer_span: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            center_x: 50.0,
            center_y: 50.0,
            exclusion_radius: 18.0,
            exclusion_push: 5.0,
            max_attempts: 50,
            collision_padding: 2.0,
            layer_base: LAYER_BASE,
            layer_span: LAYER_SPAN,
        }
    }
}

impl LayoutConfig {
    /// Copy with every field forced into a range the placer can honour.
    pub fn sanitized(&self) -> Self {
        let finite = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let defaults = Self::default();
        let margin = finite(self.margin, defaults.margin).clamp(0.0, 49.0);
        let lo = margin;
        let hi = 100.0 - margin;
        let layer_span = self.layer_span.max(0);
        Self {
            margin,
            center_x: finite(self.center_x, defaults.center_x).clamp(lo, hi),
            center_y: finite(self.center_y, defaults.center_y).clamp(lo, hi),
            exclusion_radius: finite(self.exclusion_radius, defaults.exclusion_radius).max(0.0),
            exclusion_push: finite(self.exclusion_push, defaults.exclusion_push).max(0.0),
            max_attempts: self.max_attempts.max(1),
            collision_padding: finite(self.collision_padding, defaults.collision_padding).max(0.0),
            layer_base: self.layer_base.min(i32::MAX - layer_span),
            layer_span,
        }
    }

    pub fn safe_min(&self) -> f64 {
        self.margin
    }

    pub fn safe_max(&self) -> f64 {
        100.0 - self.margin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub show_counts: bool,
    pub show_search_box: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#0A0A0A".to_string(),
            show_counts: true,
            show_search_box: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::matrix_dark();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    grid_color: Option<String>,
    accent_color: Option<String>,
    label_background: Option<String>,
    label_text_color: Option<String>,
    label_border_color: Option<String>,
    shadow_color: Option<String>,
    badge_background: Option<String>,
    badge_text_color: Option<String>,
    search_box_fill: Option<String>,
    search_box_stroke: Option<String>,
    dimmed_opacity: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSection {
    margin: Option<f64>,
    center_x: Option<f64>,
    center_y: Option<f64>,
    exclusion_radius: Option<f64>,
    exclusion_push: Option<f64>,
    max_attempts: Option<u32>,
    collision_padding: Option<f64>,
    layer_base: Option<i32>,
    layer_span: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderSection {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
    show_counts: Option<bool>,
    show_search_box: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutSection>,
    render: Option<RenderSection>,
}

/// Loads a JSON / JSON5 config file over the defaults. `None` yields defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = json5::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => {
                config.render.background = theme.background.clone();
                config.theme = theme;
            }
            None => tracing::warn!(theme = theme_name, "unknown theme name, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        apply_theme_variables(&mut config, vars);
    }

    if let Some(layout) = parsed.layout {
        let target = &mut config.layout;
        if let Some(v) = layout.margin {
            target.margin = v;
        }
        if let Some(v) = layout.center_x {
            target.center_x = v;
        }
        if let Some(v) = layout.center_y {
            target.center_y = v;
        }
        if let Some(v) = layout.exclusion_radius {
            target.exclusion_radius = v;
        }
        if let Some(v) = layout.exclusion_push {
            target.exclusion_push = v;
        }
        if let Some(v) = layout.max_attempts {
            target.max_attempts = v;
        }
        if let Some(v) = layout.collision_padding {
            target.collision_padding = v;
        }
        if let Some(v) = layout.layer_base {
            target.layer_base = v;
        }
        if let Some(v) = layout.layer_span {
            target.layer_span = v;
        }
    }

    if let Some(render) = parsed.render {
        let target = &mut config.render;
        if let Some(v) = render.width {
            target.width = v;
        }
        if let Some(v) = render.height {
            target.height = v;
        }
        if let Some(v) = render.background {
            target.background = v;
        }
        if let Some(v) = render.show_counts {
            target.show_counts = v;
        }
        if let Some(v) = render.show_search_box {
            target.show_search_box = v;
        }
    }

    Ok(config)
}

fn apply_theme_variables(config: &mut Config, vars: ThemeVariables) {
    let theme = &mut config.theme;
    if let Some(v) = vars.font_family {
        theme.font_family = v;
    }
    if let Some(v) = vars.font_size {
        theme.font_size = v;
    }
    if let Some(v) = vars.background {
        config.render.background = v.clone();
        theme.background = v;
    }
    if let Some(v) = vars.grid_color {
        theme.grid_color = v;
    }
    if let Some(v) = vars.accent_color {
        theme.accent_color = v;
    }
    if let Some(v) = vars.label_background {
        theme.label_background = v;
    }
    if let Some(v) = vars.label_text_color {
        theme.label_text_color = v;
    }
    if let Some(v) = vars.label_border_color {
        theme.label_border_color = v;
    }
    if let Some(v) = vars.shadow_color {
        theme.shadow_color = v;
    }
    if let Some(v) = vars.badge_background {
        theme.badge_background = v;
    }
    if let Some(v) = vars.badge_text_color {
        theme.badge_text_color = v;
    }
    if let Some(v) = vars.search_box_fill {
        theme.search_box_fill = v;
    }
    if let Some(v) = vars.search_box_stroke {
        theme.search_box_stroke = v;
    }
    if let Some(v) = vars.dimmed_opacity {
        theme.dimmed_opacity = v.clamp(0.0, 1.0);
    }
}
