use clap::{ArgAction, Args, Parser, Subcommand};
use passforge_core::{CharClass, GenerationRequest};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "passforge", version, about = "PassForge password generator (CLI/TUI)")]
pub struct Cli {
    /// Defaults to the terminal UI when omitted
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a password, optionally saving and copying it
    Generate(GenerateCmd),
    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCmd),
    /// Open the output directory in the system file browser
    OpenDir,
    /// Launch Terminal UI
    Tui,
}

#[derive(Debug, Args, Clone)]
pub struct GenerateCmd {
    #[arg(
        short,
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    pub length: u16,
    #[arg(long)]
    pub no_upper: bool,
    #[arg(long)]
    pub no_lower: bool,
    #[arg(long)]
    pub no_digits: bool,
    #[arg(long)]
    pub no_symbols: bool,
    /// Copy the password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
    /// Save as <output dir>/<NAME>.txt
    #[arg(short, long, value_name = "NAME")]
    pub save: Option<String>,
}

impl GenerateCmd {
    pub fn request(&self) -> GenerationRequest {
        let mut req = GenerationRequest::new(self.length as usize);
        req.set(CharClass::Upper, !self.no_upper);
        req.set(CharClass::Lower, !self.no_lower);
        req.set(CharClass::Digits, !self.no_digits);
        req.set(CharClass::Symbols, !self.no_symbols);
        req
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum SettingsCmd {
    Show,
    Set {
        #[arg(long)]
        save_path: Option<PathBuf>,
        #[arg(long, action = ArgAction::Set)]
        dark_mode: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_flags_build_request() {
        let cli = Cli::parse_from([
            "passforge",
            "generate",
            "-l",
            "12",
            "--no-symbols",
            "--save",
            "email",
        ]);
        let Some(Command::Generate(g)) = cli.cmd else { panic!("expected generate") };
        let req = g.request();
        assert_eq!(req.length, 12);
        assert!(req.include_upper && req.include_lower && req.include_digits);
        assert!(!req.include_symbols);
        assert_eq!(g.save.as_deref(), Some("email"));
    }

    #[test]
    fn length_is_bounded() {
        assert!(Cli::try_parse_from(["passforge", "generate", "-l", "0"]).is_err());
        assert!(Cli::try_parse_from(["passforge", "generate", "-l", "101"]).is_err());
        assert!(Cli::try_parse_from(["passforge", "generate", "-l", "100"]).is_ok());
    }

    #[test]
    fn settings_set_takes_bool_value() {
        let cli = Cli::parse_from(["passforge", "settings", "set", "--dark-mode", "true"]);
        let Some(Command::Settings(SettingsCmd::Set { dark_mode, save_path })) = cli.cmd else {
            panic!("expected settings set")
        };
        assert_eq!(dark_mode, Some(true));
        assert!(save_path.is_none());
    }

    #[test]
    fn no_subcommand_is_tui() {
        assert!(Cli::parse_from(["passforge"]).cmd.is_none());
    }
}
