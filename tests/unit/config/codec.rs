use super::*;

fn sample() -> Configuration {
    Configuration {
        birth_date: "1994-11-03".into(),
        mode: Mode::Life,
        theme_id: 13,
        shape: DotShape::Fire,
        quote_type: QuoteKind::Quote,
        quote_tag: "focus".into(),
        quote_text: "Ship it & sleep = 100% \"done\"".into(),
        phone_model: "iPhone 15 Pro".into(),
    }
}

#[test]
fn encodes_stable_key_order() {
    let keys: Vec<&str> = encode_pairs(&sample()).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, KEYS.to_vec());
    let q = encode_query(&sample());
    assert!(q.starts_with("birthDate=1994-11-03&mode=LIFE&themeId=13&shape=fire&quoteType=quote"));
    assert!(q.contains("phoneModel=iPhone+15+Pro"));
}

#[test]
fn decode_inverts_encode_with_special_characters() {
    let c = sample();
    assert_eq!(decode_query(&encode_query(&c)), c);
    assert_eq!(decode_query(&format!("?{}", encode_query(&c))), c);
}

#[test]
fn empty_query_yields_defaults() {
    let c = decode_query("");
    assert_eq!(c, Configuration::default());
    assert_eq!(c.birth_date, "2000-01-01");
    assert_eq!(c.mode, Mode::Year);
    assert_eq!(c.shape, DotShape::Square);
    assert_eq!(c.quote_type, QuoteKind::None);
}

#[test]
fn malformed_fields_fall_back_individually() {
    let c = decode_query("mode=WEEKS&themeId=seven&shape=hexagon&quoteType=poem&quoteTag=grit");
    assert_eq!(c.mode, Mode::Year);
    assert_eq!(c.theme_id, 0);
    assert_eq!(c.shape, DotShape::Square);
    assert_eq!(c.quote_type, QuoteKind::None);
    assert_eq!(c.quote_tag, "grit");
}

#[test]
fn out_of_range_theme_index_survives_decoding() {
    assert_eq!(decode_query("themeId=999").theme_id, 999);
    assert_eq!(decode_query("themeId=-1").theme_id, -1);
}

#[test]
fn first_duplicate_key_wins_and_unknown_keys_are_ignored() {
    let c = decode_query("mode=LIFE&mode=HARD75&utm_source=x&render=true");
    assert_eq!(c.mode, Mode::Life);
}

#[test]
fn render_flag_detection() {
    assert!(has_render_flag("render=true&mode=LIFE"));
    assert!(has_render_flag("?mode=LIFE&render=true"));
    assert!(!has_render_flag("render=1"));
    assert!(!has_render_flag("mode=LIFE"));
}

#[test]
fn query_is_extracted_from_urls() {
    assert_eq!(query_of("https://x.test/app?render=true&mode=LIFE#top"), "render=true&mode=LIFE");
    assert_eq!(query_of("/?a=b"), "a=b");
    assert_eq!(query_of("mode=LIFE"), "mode=LIFE");
    assert_eq!(query_of("https://x.test/"), "");
}

#[test]
fn render_link_clears_quote_in_daily_mode() {
    let c = sample();
    let link = render_link("https://dots.test/", &c, false);
    assert!(link.starts_with("https://dots.test/?render=true&birthDate="));
    assert_eq!(decode_query(query_of(&link)), c);

    let daily = render_link("https://dots.test/?lang=en", &c, true);
    assert!(daily.starts_with("https://dots.test/?lang=en&render=true&"));
    let decoded = decode_query(query_of(&daily));
    assert_eq!(decoded.quote_text, "");
    assert!(decoded.wants_quote_fetch());
    assert_eq!(decoded.quote_tag, "focus");
}
