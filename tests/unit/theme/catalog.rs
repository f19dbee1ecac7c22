use super::*;

#[test]
fn catalog_order_is_pinned() {
    assert_eq!(THEMES.len(), 18);
    assert_eq!(THEMES[0].name, "Paper White");
    assert_eq!(THEMES[3].name, "OLED Midnight");
    assert_eq!(THEMES[5].accent, Rgba8::rgb(0x00, 0xff, 0x41));
    assert_eq!(THEMES[17].name, "Matcha");
}

#[test]
fn out_of_range_indices_resolve_to_first_theme() {
    for id in [-1, 18, 999, i64::MIN, i64::MAX] {
        assert_eq!(resolve(id), &THEMES[0], "id {id}");
    }
    assert_eq!(resolve(4).name, "Deep Space");
}

#[test]
fn names_are_unique() {
    for (i, t) in THEMES.iter().enumerate() {
        assert!(
            THEMES[i + 1..].iter().all(|other| other.name != t.name),
            "duplicate {}",
            t.name
        );
    }
}
