//! Classifier for No-Intro ROM filenames.
//!
//! No-Intro sets follow a structured naming convention:
//! ```text
//! [BIOS] Game Name (Region1, Region2) (Rev X) (Beta 2) (Demo).zip
//! ```
//!
//! A [`Rom`] is built once from a filename and carries everything the
//! selection engine needs: the game name, the region list, a version string
//! and the variant flags.

use std::path::{Path, PathBuf};

use crate::error::ClassifyError;
use crate::region::{Region, extract_regions, join_regions};

/// Filename prefix used by No-Intro for BIOS dumps.
const BIOS_PREFIX: &str = "[BIOS]";

/// Tags marking a ROM as something other than a regular retail dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFlag {
    Proto,
    Beta,
    Bios,
    Sample,
    Demo,
    Pirate,
    Promo,
}

impl VariantFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proto => "Proto",
            Self::Beta => "Beta",
            Self::Bios => "BIOS",
            Self::Sample => "Sample",
            Self::Demo => "Demo",
            Self::Pirate => "Pirate",
            Self::Promo => "Promo",
        }
    }

    /// Whether this flag marks an alternative version of a game.
    ///
    /// BIOS files are not alternative versions, they are always skipped.
    pub fn is_alternative(&self) -> bool {
        !matches!(self, Self::Bios)
    }
}

impl std::fmt::Display for VariantFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A `(...)` group found in a filename.
#[derive(Debug, Clone, Copy)]
struct ParenGroup<'a> {
    /// Byte offset of the opening parenthesis.
    start: usize,
    /// Text between the parentheses.
    inner: &'a str,
}

type FlagPredicate = fn(&str, &[ParenGroup<'_>]) -> bool;

/// Flag detection rules, evaluated independently against the whole filename.
const FLAG_RULES: &[(VariantFlag, FlagPredicate)] = &[
    (VariantFlag::Proto, is_proto),
    (VariantFlag::Beta, is_beta),
    (VariantFlag::Bios, is_bios),
    (VariantFlag::Sample, is_sample),
    (VariantFlag::Demo, is_demo),
    (VariantFlag::Pirate, is_pirate),
    (VariantFlag::Promo, is_promo),
];

fn is_proto(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| g.inner == "Proto")
}

fn is_beta(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| is_beta_tag(g.inner))
}

fn is_bios(file_name: &str, _: &[ParenGroup<'_>]) -> bool {
    file_name.starts_with(BIOS_PREFIX)
}

fn is_sample(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| g.inner == "Sample")
}

fn is_demo(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| g.inner.contains("Demo"))
}

fn is_pirate(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| g.inner.contains("Pirate"))
}

fn is_promo(_: &str, groups: &[ParenGroup<'_>]) -> bool {
    groups.iter().any(|g| g.inner.contains("Promo"))
}

fn is_beta_tag(inner: &str) -> bool {
    inner.starts_with("Beta")
}

/// `Rev 1`, `Rev A`, `v1.1`, ...
fn is_revision_tag(inner: &str) -> bool {
    inner.starts_with("Rev")
        || inner
            .strip_prefix('v')
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

/// One classified ROM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    path: PathBuf,
    file_name: String,
    name: String,
    regions: Vec<Region>,
    version: String,
    flags: Vec<VariantFlag>,
}

impl Rom {
    /// Classify the file at `path` from its file name.
    ///
    /// A file name without any recognizable region tag is not an error: the
    /// whole file name becomes the game name and the region list is empty.
    /// Only a path without a usable UTF-8 file name fails.
    pub fn classify(path: impl Into<PathBuf>) -> Result<Self, ClassifyError> {
        let path = path.into();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => return Err(ClassifyError::invalid_file_name(path)),
        };
        Ok(Self::build(path, file_name))
    }

    /// Classify a bare file name (the path is the file name itself).
    pub fn from_file_name(file_name: &str) -> Self {
        Self::build(PathBuf::from(file_name), file_name.to_string())
    }

    fn build(path: PathBuf, file_name: String) -> Self {
        let groups = paren_groups(&file_name);

        let region_group = groups.iter().find_map(|g| {
            let regions = extract_regions(g.inner);
            if regions.is_empty() {
                None
            } else {
                Some((g.start, regions))
            }
        });

        let (name, regions) = match region_group {
            Some((start, regions)) => (file_name[..start].trim().to_string(), regions),
            None => {
                log::warn!(
                    "No region tag found in '{}', using the whole file name as game name",
                    file_name
                );
                (file_name.trim().to_string(), Vec::new())
            }
        };

        let version = groups
            .iter()
            .find(|g| is_revision_tag(g.inner))
            .or_else(|| groups.iter().find(|g| is_beta_tag(g.inner)))
            .map(|g| g.inner.to_string())
            .unwrap_or_default();

        let flags = FLAG_RULES
            .iter()
            .filter(|(_, rule)| rule(&file_name, &groups))
            .map(|(flag, _)| *flag)
            .collect();

        Self {
            path,
            file_name,
            name,
            regions,
            version,
            flags,
        }
    }

    /// Location of the file before relocation.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name, including the extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Game name shared by every variant of the same game.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Revision, version or beta tag without parentheses; empty if none.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Variant flags set on this ROM, in rule order.
    pub fn flags(&self) -> &[VariantFlag] {
        &self.flags
    }

    pub fn has_flag(&self, flag: VariantFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_bios(&self) -> bool {
        self.has_flag(VariantFlag::Bios)
    }

    /// True if any alternative-version flag is set (everything but BIOS).
    pub fn has_alt_tag(&self) -> bool {
        self.flags.iter().any(VariantFlag::is_alternative)
    }

    /// True if the filename had a recognizable region tag.
    pub fn has_region_tag(&self) -> bool {
        !self.regions.is_empty()
    }

    /// True if at least one of this ROM's regions is in `preferred`.
    pub fn has_region(&self, preferred: &[Region]) -> bool {
        preferred.iter().any(|r| self.regions.contains(r))
    }

    /// Lowest index in `preferred` matched by one of this ROM's regions.
    ///
    /// Returns `preferred.len()` when nothing matches, so unmatched ROMs rank
    /// after every matched one.
    pub fn best_region_index(&self, preferred: &[Region]) -> usize {
        self.regions
            .iter()
            .filter_map(|r| preferred.iter().position(|p| p == r))
            .min()
            .unwrap_or(preferred.len())
    }

    /// The preferred region this ROM was ranked by, or its first own region
    /// if it matches none of the preferred ones.
    pub fn best_region(&self, preferred: &[Region]) -> Option<Region> {
        preferred
            .get(self.best_region_index(preferred))
            .copied()
            .or_else(|| self.regions.first().copied())
    }
}

impl std::fmt::Display for Rom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, join_regions(&self.regions))?;

        let tags: Vec<&str> = self
            .flags
            .iter()
            .filter(|flag| flag.is_alternative() && **flag != VariantFlag::Beta)
            .map(VariantFlag::label)
            .collect();
        if !tags.is_empty() {
            write!(f, " ({})", tags.join(", "))?;
        }

        if !self.version.is_empty() {
            write!(f, " ({})", self.version)?;
        }
        Ok(())
    }
}

/// Find every closed `(...)` group, left to right.
///
/// Nested parentheses stay inside their outer group.
fn paren_groups(name: &str) -> Vec<ParenGroup<'_>> {
    let mut groups = Vec::new();
    let mut chars = name.char_indices();

    while let Some((i, ch)) = chars.next() {
        if ch != '(' {
            continue;
        }

        let start = i + ch.len_utf8();
        let mut depth = 1u32;
        let mut end = None;

        for (j, c) in chars.by_ref() {
            if c == '(' {
                depth += 1;
            } else if c == ')' {
                depth -= 1;
                if depth == 0 {
                    end = Some(j);
                    break;
                }
            }
        }

        // An unclosed group ends the scan
        if let Some(end) = end {
            groups.push(ParenGroup {
                start: i,
                inner: &name[start..end],
            });
        }
    }

    groups
}

#[cfg(test)]
#[path = "tests/rom_tests.rs"]
mod tests;
