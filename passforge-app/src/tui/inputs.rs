use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use passforge_core::CharClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Main,
    EditName,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Generate,
    Copy,
    Save,
    LengthUp,
    LengthDown,
    Toggle(CharClass),
    EditName,
    OpenSettings,
    // text editing (name field, settings path)
    Input(char),
    Backspace,
    Done,
    // settings screen
    ToggleDark,
    Browse,
    Apply,
    Reveal,
    Close,
    None,
}

pub fn map_event(ev: Event, mode: Mode) -> Action {
    let Event::Key(KeyEvent { code, modifiers, kind, .. }) = ev else {
        return Action::None;
    };
    if kind == KeyEventKind::Release {
        return Action::None;
    }
    match mode {
        Mode::Main => map_main(code),
        Mode::EditName => match code {
            KeyCode::Enter | KeyCode::Esc => Action::Done,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        Mode::Settings => match (code, modifiers) {
            (KeyCode::Esc, _) => Action::Close,
            (KeyCode::Enter, _) => Action::Apply,
            (KeyCode::Tab, _) => Action::ToggleDark,
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::Reveal,
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::Browse,
            (KeyCode::Backspace, _) => Action::Backspace,
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::Input(c),
            _ => Action::None,
        },
    }
}

fn map_main(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('g') | KeyCode::Enter => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('+') | KeyCode::Up | KeyCode::Char('k') => Action::LengthUp,
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Char('j') => Action::LengthDown,
        KeyCode::Char('1') => Action::Toggle(CharClass::Upper),
        KeyCode::Char('2') => Action::Toggle(CharClass::Lower),
        KeyCode::Char('3') => Action::Toggle(CharClass::Digits),
        KeyCode::Char('4') => Action::Toggle(CharClass::Symbols),
        KeyCode::Char('n') => Action::EditName,
        KeyCode::Char('o') => Action::OpenSettings,
        _ => Action::None,
    }
}
