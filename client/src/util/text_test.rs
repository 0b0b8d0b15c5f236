use super::*;

#[test]
fn single_paragraph_passes_through() {
    assert_eq!(paragraphs("one block of text"), vec!["one block of text"]);
}

#[test]
fn splits_on_blank_lines() {
    let text = "first paragraph.\n\nsecond paragraph.";
    assert_eq!(paragraphs(text), vec!["first paragraph.", "second paragraph."]);
}

#[test]
fn trims_and_drops_empty_segments() {
    let text = "  leading space\n\n\n\ntrailing newline\n\n";
    assert_eq!(paragraphs(text), vec!["leading space", "trailing newline"]);
}

#[test]
fn single_newlines_stay_inside_a_paragraph() {
    assert_eq!(paragraphs("line one\nline two"), vec!["line one\nline two"]);
}
