//! Table rendering for CLI output

use super::ColorTheme;
use crate::domain::config::ResolvedConfig;
use crate::domain::manifest::RenderedManifest;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the resolved configuration with the layer each value came from
    pub fn render_resolved_config(&self, config: &ResolvedConfig) -> String {
        if config.is_empty() {
            return "No configuration values resolved".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KEY").set_alignment(CellAlignment::Left),
                Cell::new("VALUE").set_alignment(CellAlignment::Left),
                Cell::new("SOURCE").set_alignment(CellAlignment::Center),
            ]);

        for (key, entry) in config.iter() {
            table.add_row(vec![
                Cell::new(key),
                Cell::new(entry.value.to_string()),
                Cell::new(entry.source.as_str())
                    .fg(self.theme.get_source_color(entry.source))
                    .set_alignment(CellAlignment::Center),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Resolved Configuration {} ─╮\n",
            format!("[{} keys]", config.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output
    }

    /// Render the list of manifests written to disk
    pub fn render_written(&self, manifests: &[RenderedManifest]) -> String {
        if manifests.is_empty() {
            return "No manifests written".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("FILE").set_alignment(CellAlignment::Left),
                Cell::new("BYTES").set_alignment(CellAlignment::Right),
            ]);

        for manifest in manifests {
            table.add_row(vec![
                Cell::new(manifest.kind.as_str()).fg(self.theme.info),
                Cell::new(manifest.path.display().to_string()),
                Cell::new(manifest.content.len()).set_alignment(CellAlignment::Right),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{} Generated {} manifests\n",
            "✓".green(),
            manifests.len()
        ));
        output.push_str(&table.to_string());
        output
    }
}
