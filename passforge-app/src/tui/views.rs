use crate::tui::theme::*;
use passforge_core::{CharClass, GenerationRequest, Palette, Status};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct MainView<'a> {
    pub status: &'a Status,
    pub request: &'a GenerationRequest,
    pub name: &'a str,
    pub editing_name: bool,
}

pub struct SettingsView<'a> {
    pub save_path: &'a str,
    pub path_exists: bool,
    pub dark_mode: bool,
}

pub fn draw_ui(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    main: MainView,
    settings: Option<SettingsView>,
) {
    f.render_widget(Block::default().style(base_style(palette)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(14), Constraint::Length(1)])
        .split(area);
    draw_main(f, chunks[0], palette, &main);
    draw_footer(f, chunks[1], palette, settings.is_some());

    if let Some(s) = settings {
        draw_settings(f, centered(area, 70, 9), palette, &s);
    }
}

fn draw_main(f: &mut Frame, area: Rect, p: &Palette, v: &MainView) {
    let block = Block::default()
        .title(" Password Generator ")
        .borders(Borders::ALL)
        .style(border_style(p));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = vec![
        Line::from(Span::styled(" GENERATE (g) ", button_style(p))),
        Line::from(Span::styled(v.status.text.clone(), status_style(p, v.status.kind))),
        Line::from(vec![
            Span::styled(" Save (s) ", button_style(p)),
            Span::raw(" "),
            Span::styled(" Copy (c) ", button_style(p)),
        ]),
        Line::from(Span::styled("─".repeat(width), divider_style(p))),
    ];

    let cursor = if v.editing_name { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("Password Name:   ", label_style(p)),
        Span::styled(format!("{}{}", v.name, cursor), base_style(p)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Password Length: ", label_style(p)),
        Span::styled(v.request.length.to_string(), base_style(p)),
    ]));
    lines.push(Line::from(""));
    for (i, class) in CharClass::ALL.iter().enumerate() {
        let mark = if v.request.includes(*class) { "[x]" } else { "[ ]" };
        lines.push(Line::from(Span::styled(
            format!("{} {} {}", i + 1, mark, class.label()),
            label_style(p),
        )));
    }

    let body = Paragraph::new(lines)
        .style(base_style(p))
        .wrap(Wrap { trim: false });
    f.render_widget(body, inner);
}

fn draw_footer(f: &mut Frame, area: Rect, p: &Palette, in_settings: bool) {
    let keys = if in_settings {
        " type path  Ctrl+B browse  Tab dark mode  Enter apply  Ctrl+O view  Esc close "
    } else {
        " g generate  s save  c copy  n name  +/- length  1-4 classes  o settings  q quit "
    };
    f.render_widget(Paragraph::new(keys).style(base_style(p)), area);
}

fn draw_settings(f: &mut Frame, area: Rect, p: &Palette, s: &SettingsView) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .style(border_style(p));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mark = if s.dark_mode { "[x]" } else { "[ ]" };
    let exists = if s.path_exists { "" } else { "  (does not exist)" };
    let lines = vec![
        Line::from(Span::styled(format!("{mark} Dark Mode"), label_style(p))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Path: ", label_style(p)),
            Span::styled(format!("{}▏", s.save_path), base_style(p)),
        ]),
        Line::from(Span::styled(exists, status_style(p, passforge_core::StatusKind::Error))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Browse (Ctrl+B) ", button_style(p)),
            Span::raw(" "),
            Span::styled(" View (Ctrl+O) ", button_style(p)),
            Span::raw(" "),
            Span::styled(" Apply (Enter) ", button_style(p)),
        ]),
    ];
    let body = Paragraph::new(lines)
        .style(base_style(p))
        .wrap(Wrap { trim: false });
    f.render_widget(body, inner);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
