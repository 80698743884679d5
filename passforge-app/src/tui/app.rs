use crate::clipboard::SystemClipboard;
use crate::reveal;
use crate::tui::{
    inputs::{map_event, Action, Mode},
    views::{self, MainView, SettingsView},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use passforge_core::{
    Clipboard, GenerationRequest, Session, Settings, SettingsRepository, Status, MAX_LENGTH,
    MIN_LENGTH,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};

/// Unapplied edits in the settings screen.
struct SettingsDraft {
    save_path: String,
    dark_mode: bool,
}

impl SettingsDraft {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            save_path: settings.save_path.display().to_string(),
            dark_mode: settings.dark_mode,
        }
    }

    fn to_settings(&self) -> Settings {
        Settings::new(PathBuf::from(self.save_path.trim()), self.dark_mode)
    }
}

pub struct TuiApp<S: SettingsRepository, C: Clipboard = SystemClipboard> {
    store: S,
    clipboard: C,
    session: Session,
    request: GenerationRequest,
    name: String,
    status: Status,
    mode: Mode,
    draft: Option<SettingsDraft>,
}

impl<S: SettingsRepository, C: Clipboard> TuiApp<S, C> {
    pub fn new(store: S, clipboard: C) -> Self {
        let session = Session::open(&store);
        Self {
            store,
            clipboard,
            session,
            request: GenerationRequest::default(),
            name: String::new(),
            status: Status::info("Press g to generate"),
            mode: Mode::Main,
            draft: None,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let palette = self.session.palette();
                let main = MainView {
                    status: &self.status,
                    request: &self.request,
                    name: &self.name,
                    editing_name: self.mode == Mode::EditName,
                };
                let settings = self.draft.as_ref().map(|d| SettingsView {
                    save_path: &d.save_path,
                    path_exists: Path::new(d.save_path.trim()).is_dir(),
                    dark_mode: d.dark_mode,
                });
                views::draw_ui(f, f.size(), &palette, main, settings);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?, self.mode);
                if !self.handle(action) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Applies one action; returns false when the app should exit.
    pub fn handle(&mut self, action: Action) -> bool {
        match (self.mode, action) {
            (_, Action::Quit) => return false,
            (Mode::Main, Action::Generate) => {
                self.status = self.session.generate_status(&self.request);
            }
            (Mode::Main, Action::Copy) => {
                self.status = self.session.copy_status(&self.clipboard);
            }
            (Mode::Main, Action::Save) => {
                self.status = self.session.save_status(&self.name);
            }
            (Mode::Main, Action::LengthUp) => {
                self.request.length = (self.request.length + 1).min(MAX_LENGTH);
            }
            (Mode::Main, Action::LengthDown) => {
                self.request.length = self.request.length.saturating_sub(1).max(MIN_LENGTH);
            }
            (Mode::Main, Action::Toggle(class)) => self.request.toggle(class),
            (Mode::Main, Action::EditName) => self.mode = Mode::EditName,
            (Mode::Main, Action::OpenSettings) => {
                self.draft = Some(SettingsDraft::from_settings(self.session.settings()));
                self.mode = Mode::Settings;
            }
            (Mode::EditName, Action::Input(c)) => self.name.push(c),
            (Mode::EditName, Action::Backspace) => {
                self.name.pop();
            }
            (Mode::EditName, Action::Done) => self.mode = Mode::Main,
            (Mode::Settings, action) => self.handle_settings(action),
            _ => {}
        }
        true
    }

    fn handle_settings(&mut self, action: Action) {
        let Some(draft) = self.draft.as_mut() else {
            self.mode = Mode::Main;
            return;
        };
        match action {
            Action::Input(c) => draft.save_path.push(c),
            Action::Backspace => {
                draft.save_path.pop();
            }
            Action::ToggleDark => draft.dark_mode = !draft.dark_mode,
            Action::Browse => {
                let mut dialog = rfd::FileDialog::new().set_title("Choose password folder");
                let start = Path::new(draft.save_path.trim());
                if start.is_dir() {
                    dialog = dialog.set_directory(start);
                }
                if let Some(dir) = dialog.pick_folder() {
                    draft.save_path = dir.display().to_string();
                }
            }
            Action::Apply => {
                let next = draft.to_settings();
                self.status = self.session.apply_status(next, &self.store);
            }
            Action::Reveal => {
                // Reveals the applied directory, not the draft.
                if let Err(e) = reveal::open_dir(&self.session.settings().save_path) {
                    self.status = Status::error(e);
                }
            }
            Action::Close => {
                self.draft = None;
                self.mode = Mode::Main;
            }
            _ => {}
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
