use super::*;

#[test]
fn anchor_style_emits_only_authored_axes() {
    let anchor = PositionAnchor::top_left(1.0, 35.0);
    assert_eq!(anchor_style(&anchor), "top:1%;left:35%;");

    let anchor = PositionAnchor::bottom_right(1.0, 32.5);
    assert_eq!(anchor_style(&anchor), "bottom:1%;right:32.5%;");
}

#[test]
fn anchor_style_for_center_is_empty() {
    assert_eq!(anchor_style(&PositionAnchor::CENTER), "");
}

#[test]
fn catalog_anchors_produce_two_axis_styles() {
    for dim in DimensionId::ALL {
        let style = anchor_style(&catalog::dimension(dim).anchor);
        assert_eq!(style.matches('%').count(), 2, "{dim:?}: {style}");
    }
}
