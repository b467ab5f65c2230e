//! Display-time first/last name derivation.

#[cfg(test)]
#[path = "names_test.rs"]
mod names_test;

/// First and second whitespace-separated words of a full name.
///
/// Any further words are not shown; a single-word name yields an empty
/// last part.
#[must_use]
pub fn split_name(full: &str) -> (&str, &str) {
    let mut words = full.split_whitespace();
    let first = words.next().unwrap_or_default();
    let last = words.next().unwrap_or_default();
    (first, last)
}
