use super::*;

#[test]
fn record_selection_counts_games_per_region() {
    let mut stats = HarvestStats::new();
    stats.record_selection(Region::Europe);
    stats.record_selection(Region::Europe);
    stats.record_selection(Region::Unknown);

    assert_eq!(stats.games, 3);
    assert_eq!(stats.regions.get(&Region::Europe), Some(&2));
    assert_eq!(stats.regions.get(&Region::Unknown), Some(&1));
    assert_eq!(stats.regions.get(&Region::Usa), None);
}

#[test]
fn merge_adds_every_counter() {
    let mut total = HarvestStats {
        processed: 10,
        skipped: 2,
        unzipped: 1,
        ..HarvestStats::default()
    };
    total.record_selection(Region::Usa);

    let mut other = HarvestStats {
        processed: 5,
        skipped: 1,
        ..HarvestStats::default()
    };
    other.record_selection(Region::Usa);
    other.record_selection(Region::Japan);

    total.merge(&other);
    assert_eq!(total.processed, 15);
    assert_eq!(total.skipped, 3);
    assert_eq!(total.games, 3);
    assert_eq!(total.unzipped, 1);
    assert_eq!(total.regions.get(&Region::Usa), Some(&2));
    assert_eq!(total.regions.get(&Region::Japan), Some(&1));
}

#[test]
fn empty_stats() {
    assert!(HarvestStats::new().is_empty());
    let mut stats = HarvestStats::new();
    stats.processed = 1;
    assert!(!stats.is_empty());
}
