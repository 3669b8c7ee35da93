//! Shared fixtures for unit tests.

/// Month names with their day counts, in calendar order. February appears
/// twice, once for common years and once for leap years.
pub(crate) const MONTHS: &[(&str, u64)] = &[
    ("January", 31),
    ("February", 28),
    ("February", 29),
    ("March", 31),
    ("April", 30),
    ("May", 31),
    ("June", 30),
    ("July", 31),
    ("August", 31),
    ("September", 30),
    ("October", 31),
    ("November", 30),
    ("December", 31),
];

/// [`MONTHS`] sorted by name. The sort is stable, so 28 stays before 29.
pub(crate) fn sorted_months() -> Vec<(&'static str, u64)> {
    let mut months = MONTHS.to_vec();
    months.sort_by_key(|&(month, _)| month);
    months
}
