//! Comparison helpers working directly on version strings

use log::trace;

use crate::{Operator, Version, VersionError};

/// Comparator for version strings
///
/// Every helper parses both sides with [`Version::parse`] and hands back the
/// first parse error unchanged.
pub struct Comparator;

impl Comparator {
    /// Compare two version strings, returning -1, 0 or 1
    pub fn compare(version1: &str, version2: &str) -> Result<i32, VersionError> {
        let result = Version::parse(version1)?.compare_to(&Version::parse(version2)?);
        trace!("compare({:?}, {:?}) = {}", version1, version2, result);
        Ok(result)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with(version1: &str, operator: Operator, version2: &str) -> Result<bool, VersionError> {
        let ordering = Version::parse(version1)?.cmp(&Version::parse(version2)?);
        Ok(operator.accepts(ordering))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>, VersionError> {
        let mut parsed = versions
            .iter()
            .map(|v| Version::parse(v).map(|parsed| (parsed, *v)))
            .collect::<Result<Vec<_>, VersionError>>()?;

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        Ok(parsed.into_iter().map(|(_, v)| v.to_string()).collect())
    }
}

/// Parse both strings and compare them, returning -1, 0 or 1
pub fn compare(version1: &str, version2: &str) -> Result<i32, VersionError> {
    Comparator::compare(version1, version2)
}
