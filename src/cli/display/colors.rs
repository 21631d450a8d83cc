//! Color theme for CLI output

use crate::domain::config::ValueSource;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for the layer a resolved value came from
    pub fn get_source_color(&self, source: ValueSource) -> TableColor {
        match source {
            ValueSource::Base => self.success,
            ValueSource::Default => self.muted,
            ValueSource::Environment => self.info,
            ValueSource::Override => self.warning,
        }
    }
}
