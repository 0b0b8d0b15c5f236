use super::*;

#[test]
fn questions_title_walks_through_the_example() {
    for cat in CategoryId::ALL {
        let fw = frameworks::framework(cat);
        assert_eq!(questions_title(fw), "Making Sense of The Output", "{cat:?}");
    }
}

#[test]
fn recalibrate_label_differs_for_constraints() {
    assert_eq!(recalibrate_label(CategoryId::Constraints), "Recalibration:");
    assert_eq!(recalibrate_label(CategoryId::Computation), "Recalibrate:");
    assert_eq!(recalibrate_label(CategoryId::Composition), "Recalibrate:");
    assert_eq!(recalibrate_label(CategoryId::Calibration), "Recalibrate:");
}

#[test]
fn comparison_reflections_split_into_paragraphs() {
    // Computation reflections are two-paragraph (machinic then human);
    // constraints reflections are single-block.
    for cmp in frameworks::framework(CategoryId::Computation).comparisons {
        assert_eq!(paragraphs(cmp.reflection).len(), 2, "{}", cmp.process);
    }
    for cmp in frameworks::framework(CategoryId::Constraints).comparisons {
        assert_eq!(paragraphs(cmp.reflection).len(), 1, "{}", cmp.process);
    }
}
