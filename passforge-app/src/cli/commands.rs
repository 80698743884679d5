use crate::cli::opts::*;
use crate::clipboard::SystemClipboard;
use crate::reveal;
use crate::tui::app::TuiApp;

use anyhow::Result;
use passforge_core::{Session, Settings};
use passforge_json::SettingsStore;

pub fn run_cli(args: Cli, store: SettingsStore) -> Result<()> {
    match args.cmd {
        None | Some(Command::Tui) => {
            let mut app = TuiApp::new(store, SystemClipboard::new());
            app.run()
        }
        Some(Command::Generate(cmd)) => generate_cmd(&store, cmd),
        Some(Command::Settings(cmd)) => settings_cmd(&store, cmd),
        Some(Command::OpenDir) => {
            let settings = store.load();
            reveal::open_dir(&settings.save_path)
        }
    }
}

fn generate_cmd(store: &SettingsStore, cmd: GenerateCmd) -> Result<()> {
    let mut session = Session::open(store);
    let pw = session.generate(&cmd.request())?;
    println!("{}", pw.as_str());

    if let Some(name) = &cmd.save {
        let path = session.save_current(name)?;
        eprintln!("saved {}", path.display());
    }
    if cmd.copy {
        let clipboard = SystemClipboard::until_replaced();
        let linux = cfg!(target_os = "linux");
        if linux {
            eprintln!("copied to clipboard; held until something else is copied (Ctrl+C releases)");
        }
        session.copy_current(&clipboard)?;
        if !linux {
            eprintln!("copied to clipboard");
        }
    }
    Ok(())
}

fn settings_cmd(store: &SettingsStore, cmd: SettingsCmd) -> Result<()> {
    let mut session = Session::open(store);
    match cmd {
        SettingsCmd::Show => print_settings(store, session.settings()),
        SettingsCmd::Set { save_path, dark_mode } => {
            let current = session.settings().clone();
            let next = Settings {
                save_path: save_path.unwrap_or(current.save_path),
                dark_mode: dark_mode.unwrap_or(current.dark_mode),
            };
            session.apply_settings(next, store)?;
            print_settings(store, session.settings());
        }
    }
    Ok(())
}

fn print_settings(store: &SettingsStore, s: &Settings) {
    let exists = if s.save_path.is_dir() { "" } else { " (missing)" };
    println!("file\t{}", store.path().display());
    println!("save_path\t{}{}", s.save_path.display(), exists);
    println!("dark_mode\t{}", s.dark_mode);
}
