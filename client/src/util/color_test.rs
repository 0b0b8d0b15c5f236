use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn with_alpha_formats_rgba() {
    assert_eq!(with_alpha("#FFB84D", 0.4), "rgba(255, 184, 77, 0.4)");
    assert_eq!(with_alpha("#000", 1.0), "rgba(0, 0, 0, 1)");
}

#[test]
fn with_alpha_falls_back_to_black_for_bad_input() {
    assert_eq!(with_alpha("teal", 0.25), "rgba(0, 0, 0, 0.25)");
}
