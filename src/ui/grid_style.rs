//! Cosmetic mapping of variant, style and size onto ratatui styles.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::Theme;
use crate::grid::{TableSize, TableStyle, Variant};

pub fn border_color(variant: Variant, theme: &Theme) -> Color {
    match variant {
        Variant::Default => theme.border(),
        Variant::Primary => theme.primary(),
        Variant::Secondary => theme.overlay1(),
        Variant::Success => theme.success(),
        Variant::Danger => theme.error(),
        Variant::Warning => theme.warning(),
        Variant::Info => theme.info(),
        Variant::Dark => theme.dark(),
    }
}

pub const fn border_type(style: TableStyle) -> BorderType {
    match style {
        TableStyle::Bordered => BorderType::Thick,
        TableStyle::Default | TableStyle::Striped | TableStyle::Hover => BorderType::Rounded,
    }
}

pub const fn column_spacing(size: TableSize) -> u16 {
    match size {
        TableSize::Sm => 1,
        TableSize::Md => 2,
        TableSize::Lg => 3,
    }
}

pub const fn row_height(size: TableSize) -> u16 {
    match size {
        TableSize::Sm | TableSize::Md => 1,
        TableSize::Lg => 2,
    }
}

/// Base style of the body row at `position` on the page.
pub fn row_style(style: TableStyle, position: usize, theme: &Theme) -> Style {
    let base = Style::default().fg(theme.text());
    match style {
        TableStyle::Striped if position % 2 == 1 => base.bg(theme.stripe_bg()),
        _ => base,
    }
}

pub fn highlight_style(style: TableStyle, theme: &Theme) -> Style {
    let base = Style::default()
        .fg(theme.lavender())
        .add_modifier(Modifier::BOLD);
    match style {
        TableStyle::Hover => base.bg(theme.hover_bg()),
        _ => base.bg(theme.selection_bg()),
    }
}

pub fn header_style(style: TableStyle, theme: &Theme) -> Style {
    let base = Style::default()
        .fg(theme.header())
        .bg(theme.surface0())
        .add_modifier(Modifier::BOLD);
    match style {
        TableStyle::Bordered => base.add_modifier(Modifier::UNDERLINED),
        _ => base,
    }
}
