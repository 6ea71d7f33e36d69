use super::*;

#[test]
fn bios_file() {
    let rom = Rom::from_file_name("[BIOS] CX4 (World).zip");
    assert_eq!(rom.name(), "[BIOS] CX4");
    assert_eq!(rom.regions(), &[Region::World]);
    assert_eq!(rom.version(), "");
    assert!(rom.is_bios());
    assert_eq!(rom.flags(), &[VariantFlag::Bios]);
    assert!(!rom.has_alt_tag());
}

#[test]
fn numbered_beta() {
    let rom = Rom::from_file_name("Bubsy in Claws Encounters of the Furred Kind (USA) (Beta 1).zip");
    assert_eq!(rom.name(), "Bubsy in Claws Encounters of the Furred Kind");
    assert_eq!(rom.regions(), &[Region::Usa]);
    assert!(rom.has_flag(VariantFlag::Beta));
    assert_eq!(rom.version(), "Beta 1");
    assert!(rom.has_alt_tag());
}

#[test]
fn bare_beta() {
    let rom = Rom::from_file_name("Capcom's Soccer Shootout (USA) (Beta)");
    assert_eq!(rom.name(), "Capcom's Soccer Shootout");
    assert!(rom.has_flag(VariantFlag::Beta));
    assert_eq!(rom.version(), "Beta");
}

#[test]
fn dotted_version() {
    let rom = Rom::from_file_name("Mortal Kombat (World) (v1.1).zip");
    assert_eq!(rom.name(), "Mortal Kombat");
    assert_eq!(rom.version(), "v1.1");
    assert!(rom.flags().is_empty());
}

#[test]
fn revision_without_extension() {
    let rom = Rom::from_file_name(
        "BS-X - Sore wa Namae o Nusumareta Machi no Monogatari (Japan) (Rev 1)",
    );
    assert_eq!(
        rom.name(),
        "BS-X - Sore wa Namae o Nusumareta Machi no Monogatari"
    );
    assert_eq!(rom.regions(), &[Region::Japan]);
    assert_eq!(rom.version(), "Rev 1");
}

#[test]
fn revision_wins_over_beta() {
    let rom = Rom::from_file_name("Game (USA) (Beta 3) (Rev 2).zip");
    assert_eq!(rom.version(), "Rev 2");
    assert!(rom.has_flag(VariantFlag::Beta));
}

#[test]
fn language_tag_is_not_a_region() {
    let rom = Rom::from_file_name("Captain Novolin (USA) (En,Fr,Es).zip");
    assert_eq!(rom.name(), "Captain Novolin");
    assert_eq!(rom.regions(), &[Region::Usa]);
}

#[test]
fn multiple_regions_keep_order() {
    let rom = Rom::from_file_name("Tetris (Japan, USA, Europe).zip");
    assert_eq!(rom.regions(), &[Region::Japan, Region::Usa, Region::Europe]);
}

#[test]
fn region_group_need_not_be_first() {
    let rom = Rom::from_file_name("Puzzle (Disc 1) (Europe).zip");
    assert_eq!(rom.name(), "Puzzle (Disc 1)");
    assert_eq!(rom.regions(), &[Region::Europe]);
}

#[test]
fn no_region_tag_falls_back_to_whole_name() {
    let rom = Rom::from_file_name("Homebrew Thing (En,Fr).zip");
    assert_eq!(rom.name(), "Homebrew Thing (En,Fr).zip");
    assert!(rom.regions().is_empty());
    assert!(!rom.has_region_tag());

    let rom = Rom::from_file_name("plain.zip");
    assert_eq!(rom.name(), "plain.zip");
    assert!(rom.regions().is_empty());
}

#[test]
fn flags_are_independent() {
    let rom = Rom::from_file_name("Game (USA) (Demo) (Promo) (Proto).zip");
    assert_eq!(
        rom.flags(),
        &[VariantFlag::Proto, VariantFlag::Demo, VariantFlag::Promo]
    );
}

#[test]
fn substring_flags() {
    let rom = Rom::from_file_name("Game (Europe) (Kiosk Demo).zip");
    assert!(rom.has_flag(VariantFlag::Demo));

    let rom = Rom::from_file_name("Game (Asia) (Pirate).zip");
    assert!(rom.has_flag(VariantFlag::Pirate));

    let rom = Rom::from_file_name("Game (USA) (Not for Resale, Promo).zip");
    assert!(rom.has_flag(VariantFlag::Promo));
}

#[test]
fn literal_flags_need_exact_group() {
    let rom = Rom::from_file_name("Game (USA) (Proto 2).zip");
    assert!(!rom.has_flag(VariantFlag::Proto));

    let rom = Rom::from_file_name("Game (USA) (Sample).zip");
    assert!(rom.has_flag(VariantFlag::Sample));

    // Flags are only read from parenthetical groups
    let rom = Rom::from_file_name("Demo Disc (USA).zip");
    assert!(!rom.has_flag(VariantFlag::Demo));
}

#[test]
fn bios_is_a_prefix_check() {
    let rom = Rom::from_file_name("Game [BIOS] (USA).zip");
    assert!(!rom.is_bios());
}

#[test]
fn classify_uses_file_name_of_path() {
    let rom = Rom::classify("/roms/gb/Tetris (World) (Rev 1).zip").unwrap();
    assert_eq!(rom.file_name(), "Tetris (World) (Rev 1).zip");
    assert_eq!(rom.path(), Path::new("/roms/gb/Tetris (World) (Rev 1).zip"));
    assert_eq!(rom.name(), "Tetris");
}

#[test]
fn classify_rejects_path_without_file_name() {
    assert!(Rom::classify("/").is_err());
    assert!(Rom::classify("..").is_err());
}

#[test]
fn best_region_index_uses_lowest_match() {
    let preferred = [Region::Europe, Region::Usa, Region::Japan];
    let rom = Rom::from_file_name("Game (Japan, USA).zip");
    assert_eq!(rom.best_region_index(&preferred), 1);
    assert_eq!(rom.best_region(&preferred), Some(Region::Usa));
    assert!(rom.has_region(&preferred));
}

#[test]
fn unmatched_region_ranks_last() {
    let preferred = [Region::Europe, Region::Usa];
    let rom = Rom::from_file_name("Game (Korea).zip");
    assert_eq!(rom.best_region_index(&preferred), 2);
    assert_eq!(rom.best_region(&preferred), Some(Region::Korea));
    assert!(!rom.has_region(&preferred));

    let rom = Rom::from_file_name("Game.zip");
    assert_eq!(rom.best_region_index(&preferred), 2);
    assert_eq!(rom.best_region(&preferred), None);
}

#[test]
fn display_normalizes_tags() {
    let rom = Rom::from_file_name("Game (USA, Europe) (Demo) (Rev 1).zip");
    assert_eq!(rom.to_string(), "Game (USA, Europe) (Demo) (Rev 1)");

    let rom = Rom::from_file_name("Game (Japan) (Beta 2).zip");
    assert_eq!(rom.to_string(), "Game (Japan) (Beta 2)");
}
