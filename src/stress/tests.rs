use super::*;

macro_rules! restress {
    ($word:expr, $index:expr, $expected:expr) => {
        assert_eq!(restress($word, $index), $expected, "restress {}", $word);
    };
}

#[test]
fn count_syllables() {
    assert_eq!(syllables("ten"), 1);
    assert_eq!(syllables("vio"), 1);
    assert_eq!(syllables("huí"), 1);
    assert_eq!(syllables("guie"), 1);
    assert_eq!(syllables("veo"), 2);
    assert_eq!(syllables("río"), 2);
    assert_eq!(syllables("reír"), 2);
    assert_eq!(syllables("construir"), 2);
    assert_eq!(syllables("oído"), 3);
    assert_eq!(syllables("hablábamos"), 4);
}

#[test]
fn find_stress() {
    assert_eq!(stress_index("ten"), Some(1));
    assert_eq!(stress_index("vio"), Some(2));
    assert_eq!(stress_index("hui"), Some(2));
    assert_eq!(stress_index("sal"), Some(1));
    assert_eq!(stress_index("rió"), Some(2));
    assert_eq!(stress_index("previo"), Some(2));
    assert_eq!(stress_index("limpia"), Some(1));
    assert_eq!(stress_index("crr"), None);
}

#[test]
fn written_accent_rules() {
    assert!(needs_accent("manten", 4));
    assert!(needs_accent("previo", 5));
    assert!(needs_accent("rio", 1));
    assert!(needs_accent("arbol", 0));
    assert!(!needs_accent("sobresal", 6));
    assert!(!needs_accent("ten", 1));
    assert!(!needs_accent("tenemos", 3));
    assert!(needs_accent("hablabamos", 4));
}

#[test]
fn restress_prefixed_monosyllables() {
    restress!("manten", 4, "mantén");
    restress!("compon", 4, "compón");
    restress!("previo", 5, "previó");
    restress!("previ", 4, "preví");
    restress!("sonrió", 5, "sonrió");
    restress!("sobresal", 6, "sobresal");
    restress!("deshaz", 4, "deshaz");
}

#[test]
fn glide_accent() {
    assert_eq!(suppress_glide_accent("fié"), "fie");
    assert_eq!(suppress_glide_accent("guió"), "guio");
    assert_eq!(suppress_glide_accent("huí"), "hui");
    assert_eq!(suppress_glide_accent("vió"), "vio");
    assert_eq!(suppress_glide_accent("envió"), "envió");
    assert_eq!(suppress_glide_accent("construí"), "construí");
    assert_eq!(suppress_glide_accent("reí"), "reí");
}

#[test]
fn accent_pairs() {
    let pair = AccentPair::parse("hi:hí").unwrap();
    assert_eq!(pair.apply("prohibo").as_deref(), Some("prohíbo"));
    assert_eq!(pair.apply("prohibimos").as_deref(), Some("prohíbimos"));
    assert_eq!(pair.apply("prohbo"), None);

    assert!(AccentPair::parse("hi").is_err());
    assert!(AccentPair::parse(":hí").is_err());
}

#[test]
fn move_and_strip() {
    assert_eq!(move_accent("hablo", None, Some(1)), "háblo");
    assert_eq!(move_accent("háblo", Some(1), Some(4)), "habló");
    assert_eq!(strip_accents("reír"), "reir");
    assert_eq!(strip_accents("argüir"), "argüir");
}
