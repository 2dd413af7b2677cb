//! Output formats

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Output file shapes that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
    DirEnv,
    DotEnv,
    Kubernetes,
    Terraform,
}

const NAMES: [&str; 4] = ["direnv", "dotenv", "kubernetes", "terraform"];

impl Format {
    pub const ALL: [Format; 4] = [
        Format::DirEnv,
        Format::DotEnv,
        Format::Kubernetes,
        Format::Terraform,
    ];

    /// Match a format name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| Error::unsupported_format(value.trim()))
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Name for a raw ordinal. Values outside the enumeration yield `""`.
    pub fn name_from_ordinal(ordinal: i64) -> &'static str {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| NAMES.get(i).copied())
            .unwrap_or("")
    }

    /// Extension used when writing this format into a directory.
    pub fn file_extension(self) -> &'static str {
        match self {
            Format::DirEnv => "envrc",
            Format::DotEnv => "env",
            Format::Kubernetes => "yaml",
            Format::Terraform => "tf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Set of selected formats, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formats(BTreeSet<Format>);

impl Formats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every format in a comma-separated list.
    ///
    /// All names are validated first; on error the set is left unchanged.
    pub fn add(&mut self, value: &str) -> Result<()> {
        let parsed = value
            .split(',')
            .map(Format::parse)
            .collect::<Result<Vec<_>>>()?;
        self.0.extend(parsed);
        Ok(())
    }

    pub fn insert(&mut self, format: Format) -> bool {
        self.0.insert(format)
    }

    pub fn contains(&self, format: Format) -> bool {
        self.0.contains(&format)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Format> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Format> for Formats {
    fn from_iter<I: IntoIterator<Item = Format>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sorted, comma-space joined names. Display only.
impl fmt::Display for Formats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.iter().map(Format::as_str).collect();
        names.sort_unstable();
        f.write_str(&names.join(", "))
    }
}
