use super::*;
use rom_harvest_core::Region;

use crate::options::KeepFlags;

fn rom(name: &str) -> Rom {
    Rom::from_file_name(name)
}

#[test]
fn clean_dump_is_kept() {
    let options = HarvestOptions::default();
    assert_eq!(skip_reason(&rom("Tetris (World).zip"), &options), None);
}

#[test]
fn alternative_versions_are_skipped_by_default() {
    let options = HarvestOptions::default();
    assert_eq!(
        skip_reason(&rom("Game (USA) (Proto).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Proto))
    );
    assert_eq!(
        skip_reason(&rom("Game (USA) (Beta 2).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Beta))
    );
    assert_eq!(
        skip_reason(&rom("Game (USA) (Sample).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Sample))
    );
    assert_eq!(
        skip_reason(&rom("Game (USA) (Kiosk Demo).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Demo))
    );
    assert_eq!(
        skip_reason(&rom("Game (Asia) (Pirate).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Pirate))
    );
    assert_eq!(
        skip_reason(&rom("Game (USA) (Promo).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Promo))
    );
}

#[test]
fn keep_flags_let_variants_through() {
    let options = HarvestOptions::default().keep(KeepFlags {
        beta: true,
        demo: true,
        ..KeepFlags::default()
    });
    assert_eq!(skip_reason(&rom("Game (USA) (Beta).zip"), &options), None);
    assert_eq!(skip_reason(&rom("Game (USA) (Demo).zip"), &options), None);
    assert_eq!(
        skip_reason(&rom("Game (USA) (Demo) (Proto).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Proto))
    );
}

#[test]
fn bios_is_always_skipped() {
    let options = HarvestOptions::default().keep(KeepFlags::all());
    assert_eq!(
        skip_reason(&rom("[BIOS] CX4 (World).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Bios))
    );
}

#[test]
fn first_matching_reason_wins() {
    let options = HarvestOptions::default();
    // Proto is checked before beta, bios before sample
    assert_eq!(
        skip_reason(&rom("Game (USA) (Beta) (Proto).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Proto))
    );
    assert_eq!(
        skip_reason(&rom("[BIOS] Game (USA) (Sample).zip"), &options),
        Some(SkipReason::Variant(VariantFlag::Bios))
    );
}

#[test]
fn strict_mode_checks_regions_first() {
    let options = HarvestOptions::default()
        .with_regions(vec![Region::Europe])
        .strict(true);
    assert_eq!(
        skip_reason(&rom("Game (Japan) (Proto).zip"), &options),
        Some(SkipReason::RegionMismatch)
    );
    assert_eq!(
        skip_reason(&rom("Homebrew.zip"), &options),
        Some(SkipReason::RegionMismatch)
    );
    assert_eq!(skip_reason(&rom("Game (USA, Europe).zip"), &options), None);
}

#[test]
fn lenient_mode_keeps_unmatched_regions() {
    let options = HarvestOptions::default().with_regions(vec![Region::Europe]);
    assert_eq!(skip_reason(&rom("Game (Japan).zip"), &options), None);
}

#[test]
fn reasons_display() {
    assert_eq!(SkipReason::RegionMismatch.to_string(), "no preferred region");
    assert_eq!(
        SkipReason::Variant(VariantFlag::Beta).to_string(),
        "Beta version"
    );
    assert_eq!(SkipReason::Variant(VariantFlag::Bios).to_string(), "BIOS file");
}
