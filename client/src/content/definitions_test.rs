use super::*;

#[test]
fn define_finds_known_terms() {
    assert!(define("guardrails").is_some_and(|d| d.starts_with("Safety mechanisms")));
    assert!(define("hedging").is_some_and(|d| d.contains("uncertainty")));
}

#[test]
fn define_is_case_sensitive_and_exact() {
    assert_eq!(define("Guardrails"), None);
    assert_eq!(define("guard"), None);
    assert_eq!(define(""), None);
}

#[test]
fn no_duplicate_terms() {
    for (i, (term, _)) in DEFINITIONS.iter().enumerate() {
        let later = DEFINITIONS[i + 1..].iter().any(|(t, _)| t == term);
        assert!(!later, "duplicate glossary term {term:?}");
    }
}

#[test]
fn every_definition_has_text() {
    for (term, definition) in DEFINITIONS {
        assert!(!definition.trim().is_empty(), "empty definition for {term:?}");
    }
}
