use super::*;
use crate::content::definitions;
use crate::util::color::parse_hex_rgb;

// =============================================================
// Card completeness
// =============================================================

#[test]
fn lookup_aligns_with_category_ids() {
    for cat in CategoryId::ALL {
        assert_eq!(framework(cat).category, cat);
    }
}

#[test]
fn every_card_has_four_comparisons_and_four_machine_questions() {
    for cat in CategoryId::ALL {
        let fw = framework(cat);
        assert_eq!(fw.comparisons.len(), 4, "{cat:?}");
        assert_eq!(fw.machine_questions.len(), 4, "{cat:?}");
    }
}

#[test]
fn machine_questions_mirror_comparison_processes() {
    // Each "Ask the Machine" entry revisits one of the card's four
    // processes. Computation renames one ("Centring and the Normative"
    // becomes "Centring the Normative"), so compare by prefix word.
    for cat in CategoryId::ALL {
        let fw = framework(cat);
        for q in fw.machine_questions {
            let matched = fw
                .comparisons
                .iter()
                .any(|c| c.process == q.question || c.process.contains(q.question.split(' ').next().unwrap_or("")));
            assert!(matched, "{cat:?}: unmatched question {:?}", q.question);
        }
    }
}

#[test]
fn card_colors_are_valid_hex() {
    for cat in CategoryId::ALL {
        assert!(parse_hex_rgb(framework(cat).color).is_some(), "{cat:?}");
    }
}

#[test]
fn every_card_has_an_example_prompt() {
    for cat in CategoryId::ALL {
        let fw = framework(cat);
        assert!(!fw.example.prompt.is_empty(), "{cat:?}");
        // Either a canned response or narrative context accompanies it.
        assert!(fw.example.response.is_some() || fw.example.context.is_some(), "{cat:?}");
    }
}

#[test]
fn only_constraints_cites_a_source() {
    for cat in CategoryId::ALL {
        let cited = framework(cat).example.citation.is_some();
        assert_eq!(cited, cat == CategoryId::Constraints, "{cat:?}");
    }
}

// =============================================================
// Key-term notes
// =============================================================

#[test]
fn key_term_notes_only_reference_defined_terms() {
    for cat in CategoryId::ALL {
        for segment in key_terms_note(cat) {
            if let Segment::Term(term, display) = segment {
                assert!(definitions::define(term).is_some(), "{cat:?}: undefined term {term:?}");
                assert!(!display.is_empty());
            }
        }
    }
}

#[test]
fn computation_has_no_key_term_note() {
    assert!(key_terms_note(CategoryId::Computation).is_empty());
    assert!(!key_terms_note(CategoryId::Constraints).is_empty());
}

// =============================================================
// Page prose
// =============================================================

#[test]
fn rationale_lists_are_complete() {
    assert_eq!(RATIONALE.len(), 2);
    assert_eq!(MISAPPREHENSIONS.len(), 8);
    assert_eq!(RECOGNITIONS.len(), 3);
}

#[test]
fn misapprehension_terms_end_with_punctuation() {
    for m in MISAPPREHENSIONS {
        assert!(m.term.ends_with('.'), "{:?}", m.term);
        assert!(!m.text.is_empty());
    }
}
