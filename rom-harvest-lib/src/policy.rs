//! Skip policy: decides which classified ROMs take part in selection.

use rom_harvest_core::{Rom, VariantFlag};

use crate::options::HarvestOptions;

/// Variant checks in the order they are applied.
const SKIP_ORDER: [VariantFlag; 7] = [
    VariantFlag::Proto,
    VariantFlag::Beta,
    VariantFlag::Bios,
    VariantFlag::Sample,
    VariantFlag::Demo,
    VariantFlag::Pirate,
    VariantFlag::Promo,
];

/// Why a ROM was left out of selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Strict mode and none of the ROM's regions is preferred.
    RegionMismatch,
    /// The ROM carries a variant flag that is not kept.
    Variant(VariantFlag),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegionMismatch => write!(f, "no preferred region"),
            Self::Variant(VariantFlag::Bios) => write!(f, "BIOS file"),
            Self::Variant(flag) => write!(f, "{flag} version"),
        }
    }
}

/// Return the first reason to skip `rom`, or `None` if it should be kept.
pub fn skip_reason(rom: &Rom, options: &HarvestOptions) -> Option<SkipReason> {
    if options.strict && !rom.has_region(&options.regions) {
        return Some(SkipReason::RegionMismatch);
    }
    SKIP_ORDER
        .into_iter()
        .find(|&flag| rom.has_flag(flag) && !options.keep.keeps(flag))
        .map(SkipReason::Variant)
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
