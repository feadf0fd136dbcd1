//! Dotted numeric versions (`1.2.10`), ordered component by component.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A release version. Missing components compare as zero, so `1.2 == 1.2.0`.
/// Pre-release or build suffixes (`1.3.0-rc1`, `2.0+abc`) are dropped when parsing.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    #[must_use]
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    fn component(&self, i: usize) -> u64 {
        self.parts.get(i).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches(['v', 'V']);
        let core = trimmed.split(['-', '+']).next().unwrap_or_default();
        if core.is_empty() {
            return Err(crate::Error::InvalidVersion(s.to_string()));
        }
        let parts = core
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
            .map_err(|_| crate::Error::InvalidVersion(s.to_string()))?;
        Ok(Self { parts })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.parts.iter().map(ToString::to_string).collect();
        f.write_str(&text.join("."))
    }
}
