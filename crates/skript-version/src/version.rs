//! Version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::VersionError;

lazy_static! {
    // major.minor, optional .patch, then everything else is the postfix.
    // Digits and separator whitespace are ASCII only.
    static ref VERSION_RE: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?[ \t\n\x0B\x0C\r]*(.*)$").unwrap();
}

/// Strip control characters and spaces, leaving non-ASCII whitespace alone
fn trim_ascii_control(version: &str) -> &str {
    version.trim_matches(|c: char| c <= ' ')
}

/// A `major.minor[.patch]` version with an optional free-text postfix.
///
/// Versions are immutable. Equality follows [`Ord`]: two versions are equal
/// exactly when neither sorts before the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    numbers: [u32; 3],
    /// Everything after the numbers, e.g. "alpha", "rc 1" or "build 2314".
    postfix: Option<String>,
}

impl Version {
    /// Create a version from all three numbers.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            numbers: [major, minor, patch],
            postfix: None,
        }
    }

    /// Create a version from one to three numbers; missing ones are 0.
    pub fn from_numbers(numbers: &[u32]) -> Result<Self, VersionError> {
        if numbers.is_empty() || numbers.len() > 3 {
            return Err(VersionError::ComponentCount(numbers.len()));
        }

        let mut padded = [0; 3];
        padded[..numbers.len()].copy_from_slice(numbers);

        Ok(Version {
            numbers: padded,
            postfix: None,
        })
    }

    /// Parse a version string like `1.2`, `1.2.3` or `1.2.3 rc 1`.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let caps = match VERSION_RE.captures(trim_ascii_control(version)) {
            Some(caps) => caps,
            None => {
                debug!("Rejected version string {:?}", version);
                return Err(VersionError::InvalidVersion(version.to_string()));
            }
        };

        let mut numbers = [0; 3];
        for (i, slot) in numbers.iter_mut().enumerate() {
            if let Some(group) = caps.get(i + 1) {
                *slot = group.as_str().parse().map_err(|_| {
                    debug!("Version component {:?} of {:?} does not fit", group.as_str(), version);
                    VersionError::InvalidNumber {
                        version: version.to_string(),
                        component: group.as_str().to_string(),
                    }
                })?;
            }
        }

        let postfix = caps
            .get(4)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Version { numbers, postfix })
    }

    pub fn major(&self) -> u32 {
        self.numbers[0]
    }

    pub fn minor(&self) -> u32 {
        self.numbers[1]
    }

    pub fn patch(&self) -> u32 {
        self.numbers[2]
    }

    /// The `[major, minor, patch]` triple
    pub fn numbers(&self) -> [u32; 3] {
        self.numbers
    }

    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// A version without postfix is a final release.
    pub fn is_release(&self) -> bool {
        self.postfix.is_none()
    }

    /// Three-way comparison as -1, 0 or 1
    pub fn compare_to(&self, other: &Version) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn is_smaller_than(&self, other: &Version) -> bool {
        self < other
    }

    pub fn is_larger_than(&self, other: &Version) -> bool {
        self > other
    }

    /// Integer hash over the raw fields.
    ///
    /// The numbers are folded as `31 * h + n` starting from 1, the postfix as
    /// `31 * h + unit` over its UTF-16 code units, and the two are combined
    /// as `numbers * 31 + postfix`. An absent postfix contributes 0.
    pub fn hash_code(&self) -> i32 {
        let numbers = self
            .numbers
            .iter()
            // Numbers above i32::MAX wrap into negative values
            .fold(1i32, |h, &n| h.wrapping_mul(31).wrapping_add(n as i32));

        let postfix = self.postfix.as_deref().map_or(0i32, |p| {
            p.encode_utf16()
                .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
        });

        numbers.wrapping_mul(31).wrapping_add(postfix)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.numbers.cmp(&other.numbers) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // No postfix means a final release, which outranks any qualifier
        match (&self.postfix, &other.postfix) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numbers.hash(state);
        self.postfix.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.numbers[0], self.numbers[1])?;
        if self.numbers[2] != 0 {
            write!(f, ".{}", self.numbers[2])?;
        }
        if let Some(postfix) = &self.postfix {
            write!(f, " {}", postfix)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl TryFrom<&[u32]> for Version {
    type Error = VersionError;

    fn try_from(value: &[u32]) -> Result<Self, Self::Error> {
        Version::from_numbers(value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
