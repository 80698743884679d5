use passforge_core::{
    theme::{DARK, LIGHT},
    ExportError, GenerationError, GenerationRequest, MemoryClipboard, MemorySettings, Palette,
    PersistenceError, Session, Settings, StatusKind,
};
use std::fs;

fn session_in(dir: &std::path::Path) -> Session {
    Session::new(Settings::new(dir, false))
}

#[test]
fn save_and_copy_before_generating_fail() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(dir.path());
    let clipboard = MemoryClipboard::new();

    assert!(matches!(
        session.save_current("email"),
        Err(PersistenceError::NoPasswordAvailable)
    ));
    assert_eq!(
        session.copy_current(&clipboard),
        Err(ExportError::NoPasswordAvailable)
    );
    assert_eq!(clipboard.contents(), None);

    let st = session.copy_status(&clipboard);
    assert_eq!(st.kind, StatusKind::Error);
    assert_eq!(st.text, "Generate a password first");
}

#[test]
fn end_to_end_generate_save_copy() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let clipboard = MemoryClipboard::new();

    let mut req = GenerationRequest::new(12);
    req.include_symbols = false;
    let pw = session.generate(&req).unwrap().as_str().to_string();
    assert_eq!(pw.len(), 12);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));

    let path = session.save_current("email").unwrap();
    assert_eq!(path, dir.path().join("email.txt"));
    assert_eq!(fs::read_to_string(path).unwrap(), pw);

    session.copy_current(&clipboard).unwrap();
    assert_eq!(clipboard.contents().as_deref(), Some(pw.as_str()));
}

#[test]
fn generating_again_replaces_current() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());

    let first = session.generate(&GenerationRequest::new(40)).unwrap().clone();
    let second = session.generate(&GenerationRequest::new(41)).unwrap().clone();

    assert_ne!(first, second);
    assert_eq!(session.current(), Some(&second));
    assert_eq!(session.current().unwrap().request().length, 41);
}

#[test]
fn failed_generation_keeps_previous_password() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let kept = session.generate(&GenerationRequest::new(8)).unwrap().clone();

    let mut empty = GenerationRequest::new(8);
    empty.include_upper = false;
    empty.include_lower = false;
    empty.include_digits = false;
    empty.include_symbols = false;
    assert_eq!(
        session.generate(&empty).unwrap_err(),
        GenerationError::NoCharacterClassSelected
    );
    assert_eq!(session.current(), Some(&kept));

    let st = session.generate_status(&empty);
    assert!(st.is_error());
    assert_eq!(st.text, "Select at least one option");
}

#[test]
fn status_messages() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.generate(&GenerationRequest::default()).unwrap();

    assert_eq!(session.save_status("  ").text, "Enter a password name");
    let ok = session.save_status("site");
    assert_eq!(ok.kind, StatusKind::Success);

    let broken = MemoryClipboard::unavailable();
    let st = session.copy_status(&broken);
    assert!(st.is_error());
    assert!(st.text.starts_with("Clipboard unavailable"));
}

#[test]
fn apply_settings_persists_and_rethemes() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemorySettings::new(Settings::new(dir.path(), false));
    let mut session = Session::open(&store);
    assert_eq!(session.palette(), LIGHT);

    let other = tempfile::tempdir().unwrap();
    let next = Settings::new(other.path(), true);
    session.apply_settings(next.clone(), &store).unwrap();

    assert_eq!(session.settings(), &next);
    assert_eq!(session.palette(), DARK);
    assert_eq!(store.save_count(), 1);

    session.generate(&GenerationRequest::default()).unwrap();
    let path = session.save_current("moved").unwrap();
    assert!(path.starts_with(other.path()));
}

#[test]
fn palette_is_pure_mapping() {
    assert_eq!(Palette::for_mode(true), Palette::for_mode(true));
    assert_eq!(Palette::for_mode(false).background.to_hex(), "#FFFFFF");
    assert_eq!(Palette::for_mode(true).background.to_hex(), "#000000");
    assert_eq!(Palette::for_mode(true).button.to_hex(), "#333333");
    assert_eq!(DARK.error, LIGHT.error);
}
