//! Badge tokens and text styling.

use owo_colors::{OwoColorize, Style};

use super::context::UiContext;

/// Style palette used across the shell.
pub mod styles {
    use owo_colors::Style;

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn ok() -> Style {
        Style::new().green().bold()
    }

    pub fn err() -> Style {
        Style::new().red().bold()
    }
}

/// Apply a style when color is enabled, pass through otherwise.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Status badge preceding a result line.
#[derive(Debug, Clone, Copy)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    fn symbol(&self) -> &'static str {
        match self {
            Badge::Ok => "\u{2713}",
            Badge::Err => "\u{2717}",
            Badge::Info => "\u{00B7}",
        }
    }

    fn plain_prefix(&self) -> &'static str {
        match self {
            Badge::Ok => "ok:",
            Badge::Err => "error:",
            Badge::Info => "info:",
        }
    }

    fn style(&self) -> Style {
        match self {
            Badge::Ok => styles::ok(),
            Badge::Err => styles::err(),
            Badge::Info => styles::dim(),
        }
    }
}

/// Render a badge line. Pretty mode gets a styled symbol; plain mode gets a
/// stable text prefix suitable for scripts.
pub fn badge(ctx: &UiContext, badge: Badge, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled(badge.symbol(), badge.style(), ctx.color), text)
    } else {
        format!("{} {}", badge.plain_prefix(), text)
    }
}
