//! Release Version Value Object
//!
//! A parsed release label (`MAJOR.MINOR[.PATCH][suffix]`). Deprecation windows
//! are counted in minor releases, so the suffix only matters for ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WardenError;

/// Release version value object
///
/// Accepts an optional leading `v` and a pre-release suffix such as `rc1`,
/// `-rc.1` or `.dev0`. A version with a suffix sorts before the same version
/// without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<String>,
}

impl ReleaseVersion {
    /// Create a final release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Parse a release label
    pub fn parse(value: &str) -> Result<Self, WardenError> {
        let invalid = || WardenError::InvalidVersion {
            value: value.to_string(),
        };

        let trimmed = value.trim();
        let body = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let mut numbers = Vec::with_capacity(3);
        let mut rest = body;
        while numbers.len() < 3 {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                break;
            }
            let number = rest[..digits].parse::<u64>().map_err(|_| invalid())?;
            numbers.push(number);
            rest = &rest[digits..];

            // Only consume the dot when another number follows it.
            match rest.strip_prefix('.') {
                Some(after) if after.starts_with(|c: char| c.is_ascii_digit()) => rest = after,
                _ => break,
            }
        }

        if numbers.len() < 2 {
            return Err(invalid());
        }

        let pre = if rest.is_empty() {
            None
        } else if rest.chars().all(|c| c.is_ascii_alphanumeric() || "-.+".contains(c))
            && rest.chars().any(|c| c.is_ascii_alphanumeric())
        {
            Some(rest.to_string())
        } else {
            return Err(invalid());
        };

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers.get(2).copied().unwrap_or(0),
            pre,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release suffix, if any
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// First release of the minor line `count` minors after this one
    pub fn bump_minor(&self, count: u64) -> Self {
        Self::new(self.major, self.minor.saturating_add(count), 0)
    }

    /// Compare only the `MAJOR.MINOR` release line
    pub fn cmp_minor_line(&self, other: &Self) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for ReleaseVersion {
    type Err = WardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReleaseVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ReleaseVersion::parse(&raw).map_err(serde::de::Error::custom)
    }
}
