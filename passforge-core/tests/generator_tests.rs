use passforge_core::{
    generate, generate_with, CharClass, GenerationError, GenerationRequest, DIGITS, LOWERCASE,
    SYMBOLS, UPPERCASE,
};
use rand::{rngs::StdRng, SeedableRng};

fn only(classes: &[CharClass], length: usize) -> GenerationRequest {
    let mut req = GenerationRequest::new(length);
    for c in CharClass::ALL {
        req.set(c, classes.contains(&c));
    }
    req
}

#[test]
fn length_and_alphabet_hold_for_every_class_combination() {
    let mut rng = StdRng::seed_from_u64(42);
    for mask in 1u8..16 {
        let classes: Vec<CharClass> = CharClass::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();
        for length in [1, 12, 100] {
            let req = only(&classes, length);
            let pw = generate_with(&req, &mut rng).unwrap();
            assert_eq!(pw.chars().count(), length);
            assert!(
                pw.chars().all(|ch| classes.iter().any(|c| c.contains(ch))),
                "{pw:?} has a char outside {classes:?}"
            );
        }
    }
}

#[test]
fn no_class_selected_fails_for_any_length() {
    for length in [1, 10, 100, 1000] {
        let req = only(&[], length);
        assert_eq!(generate(&req), Err(GenerationError::NoCharacterClassSelected));
    }
}

#[test]
fn zero_length_is_invalid() {
    let req = GenerationRequest::new(0);
    assert_eq!(generate(&req), Err(GenerationError::InvalidLength));
}

#[test]
fn pool_follows_fixed_class_order() {
    let req = GenerationRequest::default();
    let pool: String = req.pool().into_iter().collect();
    assert_eq!(pool, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"));

    let digits_first = only(&[CharClass::Symbols, CharClass::Digits], 5);
    let pool: String = digits_first.pool().into_iter().collect();
    assert_eq!(pool, format!("{DIGITS}{SYMBOLS}"));
}

#[test]
fn symbols_are_ascii_punctuation() {
    assert_eq!(SYMBOLS.len(), 32);
    assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
}

#[test]
fn alphanumeric_twelve() {
    let req = only(&[CharClass::Upper, CharClass::Lower, CharClass::Digits], 12);
    let pw = generate(&req).unwrap();
    assert_eq!(pw.len(), 12);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn single_class_draws_cover_alphabet() {
    // 2000 draws from 10 digits: every digit shows up.
    let req = only(&[CharClass::Digits], 2000);
    let pw = generate_with(&req, &mut StdRng::seed_from_u64(1)).unwrap();
    for d in DIGITS.chars() {
        assert!(pw.contains(d), "digit {d} never drawn");
    }
}
