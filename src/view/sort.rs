//! Sort Policy
//!
//! Deterministic, stable ordering applied once per successful fetch.

use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Key extractor for a sortable row
pub type KeyFn<T> = fn(&T) -> &str;

/// Comparator over extracted keys
pub type Comparator = fn(&str, &str) -> Ordering;

/// How a resource's rows are ordered before pagination
pub struct SortPolicy<T> {
    order: Order<T>,
}

enum Order<T> {
    /// Keep the order the server sent
    Preserve,
    /// Stable sort by an extracted string key
    ByKey { key: KeyFn<T>, compare: Comparator },
}

impl<T> SortPolicy<T> {
    /// Keep rows in server order
    pub fn preserve() -> Self {
        Self {
            order: Order::Preserve,
        }
    }

    /// Ascending by `key` using [`locale_cmp`]
    pub fn by_key(key: KeyFn<T>) -> Self {
        Self::by_key_with(key, locale_cmp)
    }

    /// Ascending by `key` using a custom comparator
    pub fn by_key_with(key: KeyFn<T>, compare: Comparator) -> Self {
        Self {
            order: Order::ByKey { key, compare },
        }
    }

    /// True when the policy leaves rows untouched
    pub fn is_preserve(&self) -> bool {
        matches!(self.order, Order::Preserve)
    }

    /// Compare two rows under this policy
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.order {
            Order::Preserve => Ordering::Equal,
            Order::ByKey { key, compare } => compare(key(a), key(b)),
        }
    }

    /// Order `rows`; ties keep their original relative order
    pub fn apply(&self, mut rows: Vec<T>) -> Vec<T> {
        if let Order::ByKey { .. } = self.order {
            rows.sort_by(|a, b| self.compare(a, b));
        }
        rows
    }

    /// Check whether `rows` is already in policy order
    pub fn is_sorted(&self, rows: &[T]) -> bool {
        rows.windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl<T> Clone for SortPolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortPolicy<T> {}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Order<T> {}

impl<T> fmt::Debug for SortPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            Order::Preserve => write!(f, "SortPolicy::Preserve"),
            Order::ByKey { .. } => write!(f, "SortPolicy::ByKey"),
        }
    }
}

/// Case- and locale-aware lexicographic comparison
///
/// Letters decide first with case and diacritics ignored, so
/// `"apple" < "Banana" < "Émile" < "zeta"`. Strings that tie there are
/// ordered unaccented before accented, then lowercase before uppercase at the
/// first position where case differs, then by raw code points, which keeps
/// the order total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with combining marks stripped
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}
