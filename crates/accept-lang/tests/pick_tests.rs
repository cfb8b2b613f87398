use accept_lang::{AliasMap, Identity, PickError, PickOptions, pick, pick_bytes, try_pick};
use rstest::rstest;

const COMPLEX: &str = "fr-CA,fr;q=0.2,en-US;q=0.6,en;q=0.4,*;q=0.5";

fn strict() -> PickOptions {
    PickOptions::new()
}

fn loose() -> PickOptions {
    PickOptions::new().loose(true)
}

#[test]
fn no_candidates_is_invalid_input() {
    let empty: [&str; 0] = [];

    assert_eq!(pick(&empty, COMPLEX, &strict()), None);
    assert_eq!(
        try_pick(&empty, COMPLEX, &strict()),
        Err(PickError::InvalidInput)
    );
}

#[test]
fn only_empty_candidates_is_invalid_input() {
    let candidates = ["", ""];

    assert_eq!(
        try_pick(&candidates, COMPLEX, &strict()),
        Err(PickError::InvalidInput)
    );
}

#[test]
fn empty_candidates_are_skipped() {
    let candidates = ["", "fr-CA"];

    assert_eq!(pick(&candidates, COMPLEX, &strict()), Some("fr-CA"));
}

#[test]
fn non_utf8_header_is_invalid_input() {
    let candidates = ["en"];

    assert_eq!(pick_bytes(&candidates, b"en;q=0.5", &strict()), Some("en"));
    assert_eq!(
        accept_lang::try_pick_bytes(&candidates, &[0xff, 0xfe], &strict()),
        Err(PickError::InvalidInput)
    );
}

#[test]
fn empty_header_is_no_match() {
    let candidates = ["en"];

    assert_eq!(pick(&candidates, "", &strict()), None);
    assert_eq!(
        try_pick(&candidates, "", &strict()),
        Err(PickError::NoMatch)
    );
}

#[rstest]
#[case::regional(&["en-US", "fr-CA"], COMPLEX, Some("fr-CA"))]
#[case::script(&["zh-Hant-cn", "zh-cn"], "zh-Hant-cn,zh-cn;q=0.6,zh;q=0.4", Some("zh-Hant-cn"))]
#[case::casing(&["eN-Us", "Fr-cA"], "fR-Ca,fr;q=0.2,en-US;q=0.6,en;q=0.4,*;q=0.5", Some("Fr-cA"))]
#[case::language(&["en", "fr-CA"], "ja-JP,ja;1=0.5,en;q=0.2", Some("en"))]
#[case::unspecified_culture(&["en-us", "it-IT"], "pl-PL,en", Some("en-us"))]
#[case::no_match(&["ko-KR"], "fr-CA,fr;q=0.8,en-US;q=0.6,en;q=0.4,*;q=0.1", None)]
#[case::strict_by_default(&["en", "pl"], "en-US;q=0.6", None)]
#[case::readme_strict(&["fr-CA", "fr-FR", "fr"], "en-GB,en-US;q=0.9,fr-CA;q=0.7,en;q=0.8", Some("fr-CA"))]
fn strict_pick(
    #[case] candidates: &[&str],
    #[case] header: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(pick(candidates, header, &strict()), expected);
}

#[rstest]
#[case::region_ignored(&["en", "pl"], "en-US;q=0.6", Some("en"))]
#[case::restrictive_candidate(&["en-US", "en", "pl"], "en;q=0.6", Some("en-US"))]
#[case::restrictive_preference(&["en", "en-US", "pl"], "en-US;q=0.6", Some("en"))]
#[case::readme_loose(&["fr", "en"], "en-GB,en-US;q=0.9,fr-CA;q=0.7,en;q=0.8", Some("en"))]
fn loose_pick(
    #[case] candidates: &[&str],
    #[case] header: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(pick(candidates, header, &loose()), expected);
}

#[rstest]
#[case("fr-CA,fr;q=0.8,en-US;q=0.6,en;q=0.4,*;q=0.1", "fr")]
#[case("fr-CA,en-US;q=0.7,fr;q=0.6,en;q=0.4,*;q=0.1", "fr")]
#[case("en-US;q=0.7,fr;q=0.6,en;q=0.4,*;q=0.1", "en")]
fn loose_quality_beats_candidate_order(#[case] header: &str, #[case] winner: &str) {
    let first = pick(&["en", "fr"], header, &loose());
    let second = pick(&["fr", "en"], header, &loose());

    assert_eq!(first, second);
    assert_eq!(first, Some(winner));
}

#[test]
fn header_order_then_candidate_order_break_ties() {
    assert_eq!(pick(&["fr", "de"], "de,fr", &strict()), Some("de"));
    assert_eq!(pick(&["fr", "de"], "de;q=0.5,fr;q=0.5", &strict()), Some("de"));
    assert_eq!(pick(&["fr-CA", "fr-FR"], "fr", &strict()), Some("fr-CA"));
}

#[rstest]
#[case::cht(&["zh-Hans", "zh-Hant-CN", "zh-Hant"], "zh-CHT,zh-cn;q=0.6,zh;q=0.4", "zh-Hant")]
#[case::tw(&["zh-Hans-CN", "zh-Hans-SG", "zh-Hans", "zh-Hant-TW"], "zh-TW;q=0.6,zh;q=0.4", "zh-Hant-TW")]
#[case::hk(&["zh-Hans-CN", "zh-Hans-SG", "zh-Hans", "zh-Hant-HK", "zh-Hant-TW"], "zh-HK;q=0.6,zh;q=0.4", "zh-Hant-HK")]
#[case::mo(&["zh-Hans-CN", "zh-Hans-SG", "zh-Hans", "zh-Hant-TW", "zh-Hant-MO"], "zh-MO;q=0.8,zh-TW;q=0.6,zh;q=0.4", "zh-Hant-MO")]
#[case::chs(&["zh-Hans-CN", "zh-Hans", "zh-Hans"], "zh-CHS,zh-cn;q=0.6,zh;q=0.4", "zh-Hans")]
#[case::cn(&["zh-Hans-CN", "zh-Hans-SG", "zh-Hans", "zh-Hant"], "zh-cn;q=0.6,zh;q=0.4", "zh-Hans-CN")]
#[case::sg(&["zh-Hans-CN", "zh-Hans-SG", "zh-Hans", "zh-Hant"], "zh-sg;q=0.6,zh;q=0.4", "zh-Hans-SG")]
#[case::lower_tw(&["zh-Hans-CN", "zh-Hant-TW"], "zh-tw;q=0.6,zh;q=0.4", "zh-Hant-TW")]
fn legacy_chinese_aliases(
    #[case] candidates: &[&str],
    #[case] header: &str,
    #[case] expected: &str,
) {
    assert_eq!(pick(candidates, header, &strict()), Some(expected));
}

#[test]
fn identity_mapping_disables_aliases() {
    let candidates = ["zh-Hans", "zh-Hant"];
    let options = PickOptions::new().map_locales(Identity);

    assert_eq!(pick(&candidates, "zh-CHT", &options), None);
    assert_eq!(pick(&candidates, "zh-CHT", &strict()), Some("zh-Hant"));
}

#[test]
fn custom_aliases_take_priority() {
    let candidates = ["en-US", "en-GB"];
    let aliases: AliasMap = [("en-uk", "en-GB")].into_iter().collect();
    let options = PickOptions::new().map_locales(aliases);

    assert_eq!(pick(&candidates, "en-UK,en;q=0.5", &options), Some("en-GB"));
    assert_eq!(pick(&candidates, "en-UK,en;q=0.5", &strict()), Some("en-US"));
}

#[test]
fn closure_mapping() {
    let candidates = ["pt-BR", "pt-PT"];
    let options = PickOptions::new().map_locales(|locale: &str| {
        if locale.eq_ignore_ascii_case("pt") {
            "pt-PT".to_string()
        } else {
            locale.to_string()
        }
    });

    assert_eq!(pick(&candidates, "pt", &options), Some("pt-PT"));
}

#[test]
fn candidates_are_not_aliased() {
    // `zh-TW` in the header becomes `zh-Hant-TW`, which requires a script the
    // candidate does not carry.
    assert_eq!(pick(&["zh-TW"], "zh-TW", &strict()), None);
    assert_eq!(pick(&["zh-TW"], "zh-TW", &loose()), Some("zh-TW"));
}

#[test]
fn owned_candidates_are_returned_as_supplied() {
    let candidates = vec![String::from("eN-Us"), String::from("Fr-cA")];

    assert_eq!(pick(&candidates, COMPLEX, &strict()), Some("Fr-cA"));
}

#[test]
fn close_qualities_pick_the_heavier_range() {
    let header = "a;q=0.100000001,b;q=0.100000002";

    assert_eq!(pick(&["a", "b"], header, &strict()), Some("b"));
}
