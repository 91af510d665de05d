use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Root font size in px; tier rem sizes are multiplied by this.
    pub font_size: f32,
    pub background: String,
    pub grid_color: String,
    pub accent_color: String,
    pub label_background: String,
    pub label_text_color: String,
    pub label_border_color: String,
    pub shadow_color: String,
    pub badge_background: String,
    pub badge_text_color: String,
    pub search_box_fill: String,
    pub search_box_stroke: String,
    pub dimmed_opacity: f32,
}

impl Theme {
    pub fn matrix_dark() -> Self {
        Self {
            font_family: "\"JetBrains Mono\", ui-monospace, monospace".to_string(),
            font_size: 16.0,
            background: "#0A0A0A".to_string(),
            grid_color: "rgba(0, 255, 65, 0.06)".to_string(),
            accent_color: "#00FF41".to_string(),
            label_background: "#000000".to_string(),
            label_text_color: "#00FF41".to_string(),
            label_border_color: "#00FF41".to_string(),
            shadow_color: "#00FF41".to_string(),
            badge_background: "#00FF41".to_string(),
            badge_text_color: "#000000".to_string(),
            search_box_fill: "#000000".to_string(),
            search_box_stroke: "#00FF41".to_string(),
            dimmed_opacity: 0.4,
        }
    }

    pub fn matrix_light() -> Self {
        Self {
            font_family: "\"JetBrains Mono\", ui-monospace, monospace".to_string(),
            font_size: 16.0,
            background: "#F5F5F0".to_string(),
            grid_color: "rgba(10, 95, 44, 0.08)".to_string(),
            accent_color: "#0A5F2C".to_string(),
            label_background: "#FFFFFF".to_string(),
            label_text_color: "#0A5F2C".to_string(),
            label_border_color: "#0A5F2C".to_string(),
            shadow_color: "#0A5F2C".to_string(),
            badge_background: "#0A5F2C".to_string(),
            badge_text_color: "#FFFFFF".to_string(),
            search_box_fill: "#FFFFFF".to_string(),
            search_box_stroke: "#0A5F2C".to_string(),
            dimmed_opacity: 0.4,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "matrix" | "default" => Some(Self::matrix_dark()),
            "light" => Some(Self::matrix_light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix_dark()
    }
}
