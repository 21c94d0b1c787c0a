//! Theme system - CSS custom property-based theming for graph frames.
//!
//! Architecture:
//!   - Two required variables: --bg (page background) and --fg (foreground)
//!   - Optional enrichment variables: --line, --node, --disk, --border
//!   - Unset optionals fall back to color-mix() derivations from bg + fg

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" | "default" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}

/// Frame color configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramColors {
    /// Page background → CSS variable --bg
    pub bg: String,
    /// Foreground → CSS variable --fg
    pub fg: String,
    /// Edge stroke → CSS variable --line (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Node fill → CSS variable --node (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Disk / plot area fill → CSS variable --disk (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
    /// Disk / plot area outline → CSS variable --border (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl Default for DiagramColors {
    fn default() -> Self {
        Self::from_theme(Theme::Light)
    }
}

impl DiagramColors {
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            // lightgrey disk with a black outline, teal-green nodes
            Theme::Light => Self {
                bg: "#FFFFFF".to_string(),
                fg: "#000000".to_string(),
                line: Some("#000000".to_string()),
                node: Some("#69B3A2".to_string()),
                disk: Some("#D3D3D3".to_string()),
                border: Some("#000000".to_string()),
            },
            Theme::Dark => Self {
                bg: "#1E1E1E".to_string(),
                fg: "#DDDDDD".to_string(),
                line: Some("#BBBBBB".to_string()),
                node: Some("#69B3A2".to_string()),
                disk: Some("#333333".to_string()),
                border: Some("#CCCCCC".to_string()),
            },
        }
    }

    /// Only the two required colors; everything else is derived.
    pub fn minimal(bg: &str, fg: &str) -> Self {
        Self {
            bg: bg.to_string(),
            fg: fg.to_string(),
            line: None,
            node: None,
            disk: None,
            border: None,
        }
    }
}

/// color-mix() weights for derived CSS variables
pub struct Mix;

impl Mix {
    pub const LINE: u8 = 80;
    pub const NODE: u8 = 45;
    pub const DISK: u8 = 15;
    pub const BORDER: u8 = 90;
    pub const MARKER: u8 = 100;
}

/// Build the <style> block with derived CSS variables and element classes.
pub fn build_style_block() -> String {
    let derived_vars = format!(
        r#"
    /* Derived from --bg and --fg (overridable via --line, --node, etc.) */
    --_line:      var(--line, color-mix(in srgb, var(--fg) {}%, var(--bg)));
    --_node-fill: var(--node, color-mix(in srgb, var(--fg) {}%, var(--bg)));
    --_disk-fill: var(--disk, color-mix(in srgb, var(--fg) {}%, var(--bg)));
    --_border:    var(--border, color-mix(in srgb, var(--fg) {}%, var(--bg)));
    --_marker:    color-mix(in srgb, var(--fg) {}%, var(--bg));"#,
        Mix::LINE,
        Mix::NODE,
        Mix::DISK,
        Mix::BORDER,
        Mix::MARKER,
    );

    format!(
        r#"<style>
  svg {{{}
  }}
  .background {{ fill: var(--_disk-fill); stroke: var(--_border); }}
  .link {{ fill: none; stroke: var(--_line); }}
  .node {{ fill: var(--_node-fill); }}
  .hover-marker {{ fill: var(--_marker); }}
</style>"#,
        derived_vars
    )
}

/// Build the SVG opening tag with CSS variables set as inline styles.
pub fn svg_open_tag(width: f64, height: f64, colors: &DiagramColors, transparent: bool) -> String {
    let mut vars = vec![format!("--bg:{}", colors.bg), format!("--fg:{}", colors.fg)];

    if let Some(ref line) = colors.line {
        vars.push(format!("--line:{}", line));
    }
    if let Some(ref node) = colors.node {
        vars.push(format!("--node:{}", node));
    }
    if let Some(ref disk) = colors.disk {
        vars.push(format!("--disk:{}", disk));
    }
    if let Some(ref border) = colors.border {
        vars.push(format!("--border:{}", border));
    }

    let vars_str = vars.join(";");
    let bg_style = if transparent {
        ""
    } else {
        ";background:var(--bg)"
    };

    let w_str = format_dim(width);
    let h_str = format_dim(height);

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="{}{}">"#,
        w_str, h_str, w_str, h_str, vars_str, bg_style
    )
}

/// Integer if whole, otherwise decimals without trailing zeros.
fn format_dim(d: f64) -> String {
    if d.fract() == 0.0 {
        format!("{}", d as i64)
    } else {
        let s = format!("{}", d);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
