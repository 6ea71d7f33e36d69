use rom_harvest_core::{DEFAULT_REGIONS, Region, VariantFlag, extract_regions};

/// Which alternative versions survive the skip policy.
///
/// BIOS files are never kept, so there is no flag for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepFlags {
    pub proto: bool,
    pub beta: bool,
    pub sample: bool,
    pub demo: bool,
    pub pirate: bool,
    pub promo: bool,
}

impl KeepFlags {
    /// Keep every alternative version.
    pub fn all() -> Self {
        Self {
            proto: true,
            beta: true,
            sample: true,
            demo: true,
            pirate: true,
            promo: true,
        }
    }

    pub fn keeps(&self, flag: VariantFlag) -> bool {
        match flag {
            VariantFlag::Proto => self.proto,
            VariantFlag::Beta => self.beta,
            VariantFlag::Bios => false,
            VariantFlag::Sample => self.sample,
            VariantFlag::Demo => self.demo,
            VariantFlag::Pirate => self.pirate,
            VariantFlag::Promo => self.promo,
        }
    }
}

/// Options controlling one harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Preferred regions, best first.
    pub regions: Vec<Region>,
    /// Skip ROMs matching none of the preferred regions.
    pub strict: bool,
    pub keep: KeepFlags,
    /// Plan relocations without touching the output tree.
    pub dry_run: bool,
    /// Unpack `.zip` winners into the output directory.
    pub unzip: bool,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            regions: extract_regions(DEFAULT_REGIONS),
            strict: false,
            keep: KeepFlags::default(),
            dry_run: false,
            unzip: false,
        }
    }
}

impl HarvestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn keep(mut self, keep: KeepFlags) -> Self {
        self.keep = keep;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn unzip(mut self, unzip: bool) -> Self {
        self.unzip = unzip;
        self
    }
}
