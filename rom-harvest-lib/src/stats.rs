use std::collections::BTreeMap;

use rom_harvest_core::Region;

/// Counters gathered while processing archives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// Files visited in scratch directories.
    pub processed: usize,
    /// ROMs rejected by the skip policy.
    pub skipped: usize,
    /// Games whose winner was relocated.
    pub games: usize,
    /// Zip winners unpacked into the output directory.
    pub unzipped: usize,
    /// Relocated games per region.
    pub regions: BTreeMap<Region, usize>,
}

impl HarvestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one relocated game under `region`.
    pub fn record_selection(&mut self, region: Region) {
        self.games += 1;
        *self.regions.entry(region).or_insert(0) += 1;
    }

    pub fn merge(&mut self, other: &HarvestStats) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.games += other.games;
        self.unzipped += other.unzipped;
        for (region, count) in &other.regions {
            *self.regions.entry(*region).or_insert(0) += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
