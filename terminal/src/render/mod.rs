pub mod arena;
pub mod standard_renderer;
pub mod traits;
pub mod types;

/// Terminal colour for a core RGBA colour. Alpha is ignored.
pub fn tui_color(color: common::render::Color) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(color.r, color.g, color.b)
}
