//! Terminal rendering module for rich markdown output
//!
//! Plans are rendered section by section with termimad, each section's
//! headers tinted with its accent colour for the active theme. Plain mode
//! prints the markdown as text, with icon names in place of emoji.

use anyhow::Result;
use easyai_core::{display::Rgb, PlanSections, SectionType, Theme};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    theme: Theme,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let mut skin = match theme {
            Theme::Light => MadSkin::default_light(),
            Theme::Dark => MadSkin::default_dark(),
        };
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            theme,
            skin,
        }
    }

    /// Skin whose headers use the accent colour of `kind`.
    fn section_skin(&self, kind: SectionType) -> MadSkin {
        let Rgb(r, g, b) = kind.presentation().accent.for_theme(self.theme);
        let mut skin = self.skin.clone();
        skin.set_headers_fg(Color::Rgb { r, g, b });
        skin
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a parsed plan, or the empty-plan notice when it has no
    /// sections. Plain output names each section's icon instead of
    /// printing the glyph.
    pub fn render_sections(&self, sections: &PlanSections) -> Result<()> {
        if !self.rich_enabled {
            return self.render(&format!("{sections:#}"));
        }
        if sections.is_empty() {
            return self.render(&sections.to_string());
        }

        for section in sections {
            self.section_skin(section.kind)
                .print_text(&section.to_string());
            println!();
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, Theme::default())
    }
}
