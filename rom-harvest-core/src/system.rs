//! Gaming systems distributed as No-Intro archives.
//!
//! Archives are named `"<Manufacturer> - <Name> (<date>).7z"`. The part
//! before `" ("` identifies the system, which maps to the output directory
//! slug used for that system's ROMs.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// One entry of the system catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct System {
    pub manufacturer: &'static str,
    pub name: &'static str,
    /// Output directory name (e.g., "gb", "megadrive").
    pub slug: &'static str,
}

const fn sys(manufacturer: &'static str, name: &'static str, slug: &'static str) -> System {
    System {
        manufacturer,
        name,
        slug,
    }
}

/// All supported systems, grouped by manufacturer.
static ALL_SYSTEMS: &[System] = &[
    sys("Atari", "5200", "atari5200"),
    sys("Atari", "7800", "atari7800"),
    sys("Atari", "Jaguar", "atarijaguar"),
    sys("Atari", "Lynx", "lynx"),
    sys("Atari", "ST", "atarist"),
    sys("Bandai", "WonderSwan", "wswan"),
    sys("Bandai", "WonderSwan Color", "wswan"),
    sys("Casio", "Loopy", "loopy"),
    sys("Casio", "PV-1000", "pv1000"),
    sys("Coleco", "ColecoVision", "colecovision"),
    sys("Commodore", "64", "c64"),
    sys("Commodore", "64 (PP)", "c64"),
    sys("Commodore", "64 (Tapes)", "c64"),
    sys("Commodore", "Amiga", "amiga"),
    sys("Commodore", "Plus-4", "plus4"),
    sys("Commodore", "VIC-20", "vic20"),
    sys("Emerson", "Arcadia 2001", "arcadia2001"),
    sys("Entex", "Adventure Vision", "adventurevision"),
    sys("Epoch", "Super Cassette Vision", "supercassettevision"),
    sys("Fairchild", "Channel F", "channelf"),
    sys("Funtech", "Super Acan", "superacan"),
    sys("GamePark", "GP32", "gp32"),
    sys("GCE", "Vectrex", "vectrex"),
    sys("Hartung", "Game Master", "gamemaster"),
    sys("LeapFrog", "Leapster Learning Game System", "llgs"),
    sys("Magnavox", "Odyssey2", "odyssey2"),
    sys("Microsoft", "MSX", "msx"),
    sys("Microsoft", "MSX 2", "msx"),
    sys("NEC", "PC Engine - TurboGrafx 16", "pcengine"),
    sys("NEC", "Super Grafx", "pcengine"),
    sys("Nintendo", "Famicom Disk System", "fds"),
    sys("Nintendo", "Game Boy", "gb"),
    sys("Nintendo", "Game Boy Advance", "gba"),
    sys("Nintendo", "Game Boy Color", "gbc"),
    sys("Nintendo", "Nintendo 64", "n64"),
    sys("Nintendo", "Nintendo Entertainment System", "nes"),
    sys("Nintendo", "Pokemon Mini", "pm"),
    sys("Nintendo", "Satellaview", "satellaview"),
    sys("Nintendo", "Sufami Turbo", "sufamiturbo"),
    sys("Nintendo", "Super Nintendo Entertainment System", "snes"),
    sys("Nintendo", "Virtual Boy", "virtualboy"),
    sys("Nokia", "N-Gage", "ngage"),
    sys("Philips", "Videopac+", "videopac"),
    sys("RCA", "Studio II", "studio2"),
    sys("Sega", "32X", "sega32x"),
    sys("Sega", "Game Gear", "gamegear"),
    sys("Sega", "Master System - Mark III", "mastersystem"),
    sys("Sega", "Mega Drive - Genesis", "megadrive"),
    sys("Sega", "PICO", "pico"),
    sys("Sega", "SG-1000", "sg1000"),
    sys("Sinclair", "ZX Spectrum +3", "zxspectrum"),
    sys("SNK", "Neo Geo Pocket", "ngp"),
    sys("SNK", "Neo Geo Pocket Color", "ngp"),
    sys("Tiger", "Game.com", "gamecom"),
    sys("Tiger", "Gizmondo", "gizmondo"),
    sys("VTech", "CreatiVision", "creativision"),
    sys("VTech", "V.Smile", "vsmile"),
    sys("Watara", "Supervision", "supervision"),
];

/// Catalog indexed by `"<Manufacturer> - <Name>"`.
static SYSTEMS_BY_KEY: LazyLock<HashMap<String, &'static System>> =
    LazyLock::new(|| ALL_SYSTEMS.iter().map(|s| (s.key(), s)).collect());

/// Separator between the system key and the rest of an archive name.
const ARCHIVE_NAME_SEPARATOR: &str = " (";

impl System {
    /// Lookup key as it appears at the start of archive names.
    pub fn key(&self) -> String {
        format!("{} - {}", self.manufacturer, self.name)
    }

    /// Every catalog entry.
    pub fn all() -> &'static [System] {
        ALL_SYSTEMS
    }

    /// Find a system by its `"<Manufacturer> - <Name>"` key.
    pub fn lookup(key: &str) -> Option<&'static System> {
        SYSTEMS_BY_KEY.get(key).copied()
    }

    /// Resolve the system an archive belongs to from its file name.
    ///
    /// The base name must split on `" ("` into exactly two parts, the first
    /// being a catalog key. Returns `None` otherwise.
    pub fn for_archive(path: &Path) -> Option<&'static System> {
        let file_name = path.file_name()?.to_str()?;
        let parts: Vec<&str> = file_name.split(ARCHIVE_NAME_SEPARATOR).collect();
        match parts.as_slice() {
            [key, _] => Self::lookup(key),
            _ => None,
        }
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.manufacturer, self.name)
    }
}

#[cfg(test)]
#[path = "tests/system_tests.rs"]
mod tests;
