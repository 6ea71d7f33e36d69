/// Release regions recognized in No-Intro filenames.
///
/// This is a closed vocabulary: any token in a region tag that does not
/// match one of these names exactly is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Asia,
    Australia,
    Brazil,
    Canada,
    China,
    Denmark,
    Europe,
    Finland,
    France,
    Germany,
    HongKong,
    Italy,
    Japan,
    Korea,
    Netherlands,
    Russia,
    Spain,
    Sweden,
    Taiwan,
    Unknown,
    Usa,
    World,
}

/// All region variants in alphabetical order of their names.
const ALL_REGIONS: &[Region] = &[
    Region::Asia,
    Region::Australia,
    Region::Brazil,
    Region::Canada,
    Region::China,
    Region::Denmark,
    Region::Europe,
    Region::Finland,
    Region::France,
    Region::Germany,
    Region::HongKong,
    Region::Italy,
    Region::Japan,
    Region::Korea,
    Region::Netherlands,
    Region::Russia,
    Region::Spain,
    Region::Sweden,
    Region::Taiwan,
    Region::Unknown,
    Region::Usa,
    Region::World,
];

impl Region {
    /// The token as it appears in No-Intro filenames (e.g., "USA", "Hong Kong").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::Canada => "Canada",
            Self::China => "China",
            Self::Denmark => "Denmark",
            Self::Europe => "Europe",
            Self::Finland => "Finland",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::HongKong => "Hong Kong",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Netherlands => "Netherlands",
            Self::Russia => "Russia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Taiwan => "Taiwan",
            Self::Unknown => "Unknown",
            Self::Usa => "USA",
            Self::World => "World",
        }
    }

    /// Every recognized region.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a token is not part of the region vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: '{0}'")]
pub struct RegionParseError(pub String);

impl std::str::FromStr for Region {
    type Err = RegionParseError;

    /// Parse a single region token. Surrounding whitespace is ignored but the
    /// match itself is exact ("usa" is not "USA").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ALL_REGIONS
            .iter()
            .copied()
            .find(|region| region.name() == token)
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}

/// Parse a comma-separated region tag (e.g., `"USA, Europe"`).
///
/// Unknown tokens are dropped silently. Order is preserved and duplicates
/// are kept, so `"USA,USA"` yields two entries.
pub fn extract_regions(raw: &str) -> Vec<Region> {
    raw.split(',')
        .filter_map(|token| token.parse::<Region>().ok())
        .collect()
}

/// Render a region list the way it appears inside a filename tag.
pub fn join_regions(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
