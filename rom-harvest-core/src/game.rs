//! Grouping of ROM variants into games and selection of the best variant.

use std::cmp::Ordering;

use crate::region::Region;
use crate::rom::Rom;

/// Every variant of one game found in an archive, keyed by game name.
#[derive(Debug, Clone, Default)]
pub struct Game {
    name: String,
    roms: Vec<Rom>,
    moved: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game name, taken from the first ROM added. Empty until then.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ROMs in insertion order.
    pub fn roms(&self) -> &[Rom] {
        &self.roms
    }

    pub fn len(&self) -> usize {
        self.roms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roms.is_empty()
    }

    pub fn add_rom(&mut self, rom: Rom) {
        if self.name.is_empty() {
            self.name = rom.name().to_string();
        }
        self.roms.push(rom);
    }

    /// ROMs ordered from best to worst for the given region preference.
    ///
    /// The order is recomputed on every call; ties keep insertion order.
    pub fn ranked(&self, preferred: &[Region]) -> Vec<&Rom> {
        self.ranked_indices(preferred)
            .into_iter()
            .map(|i| &self.roms[i])
            .collect()
    }

    fn ranked_indices(&self, preferred: &[Region]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.roms.len()).collect();
        indices.sort_by(|&a, &b| compare_roms(&self.roms[a], &self.roms[b], preferred));
        indices
    }

    /// The ROM to keep for this game.
    ///
    /// # Panics
    ///
    /// Panics if the game has no ROMs. Callers only build games from at
    /// least one ROM, so an empty game is an orchestration bug.
    pub fn best_rom(&self, preferred: &[Region]) -> &Rom {
        assert!(
            !self.roms.is_empty(),
            "best_rom called on empty game '{}'",
            self.name
        );
        &self.roms[self.ranked_indices(preferred)[0]]
    }

    /// Every ROM except the best one, in insertion order.
    pub fn garbage_roms(&self, preferred: &[Region]) -> Vec<&Rom> {
        if self.roms.is_empty() {
            return Vec::new();
        }
        let best = self.ranked_indices(preferred)[0];
        self.roms
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != best)
            .map(|(_, rom)| rom)
            .collect()
    }

    /// True once the best ROM has been relocated.
    pub fn is_moved(&self) -> bool {
        self.moved
    }

    pub fn mark_moved(&mut self) {
        self.moved = true;
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ranking of two variants of the same game; `Less` means `a` is better.
///
/// 1. Closer to the front of `preferred` wins.
/// 2. A clean dump beats one with an alternative-version tag.
/// 3. The higher version string wins. This is a plain string comparison:
///    "Rev 2" > "Rev 1", but "Rev 10" < "Rev 2".
pub fn compare_roms(a: &Rom, b: &Rom, preferred: &[Region]) -> Ordering {
    a.best_region_index(preferred)
        .cmp(&b.best_region_index(preferred))
        .then_with(|| a.has_alt_tag().cmp(&b.has_alt_tag()))
        .then_with(|| b.version().cmp(a.version()))
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
