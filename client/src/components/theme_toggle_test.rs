use super::*;

#[test]
fn glyph_points_at_the_other_theme() {
    assert_eq!(toggle_glyph(Theme::Light), "☾");
    assert_eq!(toggle_glyph(Theme::Dark), "☀");
}
