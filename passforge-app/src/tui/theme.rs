use passforge_core::{Palette, Rgb, StatusKind};
use ratatui::style::{Color, Style, Stylize};

pub fn color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

pub fn base_style(p: &Palette) -> Style {
    Style::default().bg(color(p.background)).fg(color(p.normal_text))
}

pub fn label_style(p: &Palette) -> Style {
    base_style(p).fg(color(p.label))
}

pub fn border_style(p: &Palette) -> Style {
    base_style(p).fg(color(p.border))
}

pub fn button_style(p: &Palette) -> Style {
    Style::default().bg(color(p.button)).fg(color(p.button_text)).bold()
}

pub fn divider_style(p: &Palette) -> Style {
    base_style(p).fg(color(p.foreground))
}

pub fn status_style(p: &Palette, kind: StatusKind) -> Style {
    let fg = match kind {
        StatusKind::Info => p.normal_text,
        StatusKind::Success => p.success,
        StatusKind::Error => p.error,
    };
    base_style(p).fg(color(fg)).bold()
}
