//! Version ordering.
//!
//! Ordering compares the numeric core field by field, then ranks a value
//! carrying a pre-release tag before the release with the same core. Two
//! different pre-release tags on the same core are ordered-equal, and build
//! metadata is never consulted. Equality (`PartialEq`) is stricter: it also
//! compares both strings byte for byte, which is why the version types do
//! not implement `PartialOrd`.

use std::cmp::Ordering;

/// Ordering over values of a single version shape.
///
/// `other` is always `&Self`, so a 3-component version cannot be compared
/// with a 4-component one.
pub trait Precedence {
    /// Numeric components in positional order.
    fn numeric_core(&self) -> &[u64];

    /// Pre-release text, empty for a release.
    fn pre_release(&self) -> &str;

    /// Compare by numeric core, then by pre-release presence.
    fn compare_order(&self, other: &Self) -> Ordering {
        self.numeric_core()
            .cmp(other.numeric_core())
            .then_with(|| {
                // A release outranks any pre-release of the same core.
                let ours = self.pre_release().is_empty();
                let theirs = other.pre_release().is_empty();
                ours.cmp(&theirs)
            })
    }

    fn is_older_than(&self, other: &Self) -> bool {
        self.compare_order(other) == Ordering::Less
    }

    fn is_older_or_equal(&self, other: &Self) -> bool {
        self.compare_order(other) != Ordering::Greater
    }

    fn is_newer_than(&self, other: &Self) -> bool {
        self.compare_order(other) == Ordering::Greater
    }

    fn is_newer_or_equal(&self, other: &Self) -> bool {
        self.compare_order(other) != Ordering::Less
    }

    /// Neither older nor newer. May hold for values that are not `==`.
    fn is_ordered_equal(&self, other: &Self) -> bool {
        self.compare_order(other) == Ordering::Equal
    }
}

/// Sort oldest first. The sort is stable, so ordered-equal values keep their
/// relative input order.
pub fn sort_by_precedence<T: Precedence>(versions: &mut [T]) {
    versions.sort_by(|a, b| a.compare_order(b));
}

/// The newest version, or `None` for an empty input. Among ordered-equal
/// candidates the first one seen is returned.
pub fn latest<'a, T, I>(versions: I) -> Option<&'a T>
where
    T: Precedence + 'a,
    I: IntoIterator<Item = &'a T>,
{
    versions.into_iter().fold(None, |best, candidate| match best {
        Some(current) if !candidate.is_newer_than(current) => Some(current),
        _ => Some(candidate),
    })
}
