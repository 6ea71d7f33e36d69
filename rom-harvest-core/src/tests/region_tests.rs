use super::*;

#[test]
fn all_has_22_regions() {
    assert_eq!(Region::all().len(), 22);
}

#[test]
fn names_round_trip() {
    for &region in Region::all() {
        let parsed: Region = region.name().parse().unwrap();
        assert_eq!(parsed, region, "round-trip failed for {:?}", region);
    }
}

#[test]
fn padded_token_yields_single_region() {
    for &region in Region::all() {
        let raw = format!("  {}  ", region.name());
        assert_eq!(extract_regions(&raw), vec![region], "raw: '{}'", raw);
    }
}

#[test]
fn unknown_tokens_are_dropped_in_order() {
    let regions = extract_regions("France,  World,Germany   ,Asia,Prout, USA");
    assert_eq!(
        regions,
        vec![
            Region::France,
            Region::World,
            Region::Germany,
            Region::Asia,
            Region::Usa,
        ]
    );
}

#[test]
fn duplicates_are_kept() {
    assert_eq!(extract_regions("USA,USA"), vec![Region::Usa, Region::Usa]);
}

#[test]
fn malformed_input_is_empty() {
    assert!(extract_regions("").is_empty());
    assert!(extract_regions(",,,").is_empty());
    assert!(extract_regions("En,Fr,Es").is_empty());
    assert!(extract_regions("Rev 1").is_empty());
}

#[test]
fn matching_is_case_sensitive() {
    assert!("usa".parse::<Region>().is_err());
    assert!("EUROPE".parse::<Region>().is_err());
    assert_eq!("Hong Kong".parse::<Region>().unwrap(), Region::HongKong);
}

#[test]
fn join_uses_filename_tokens() {
    assert_eq!(join_regions(&[Region::Usa, Region::HongKong]), "USA, Hong Kong");
    assert_eq!(join_regions(&[]), "");
}

#[test]
fn display_returns_token() {
    assert_eq!(Region::Usa.to_string(), "USA");
    assert_eq!(Region::Europe.to_string(), "Europe");
}
