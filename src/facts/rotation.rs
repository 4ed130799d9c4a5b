use chrono::{Datelike, NaiveDate};

use super::catalog::COMPARISON_PROFILES;
use super::{Category, ComparisonProfile};

/// Today's focus category. The same day of the year always maps to the same
/// category, so no cursor has to survive between runs.
pub fn select_focus(date: NaiveDate) -> Category {
    Category::ALL[date.ordinal() as usize % Category::ALL.len()]
}

/// Contrast emphasis for the day. Advances once per full focus cycle, so a
/// category meets a different profile each time it comes around.
pub fn select_comparison(date: NaiveDate) -> &'static ComparisonProfile {
    let cycle = date.ordinal() as usize / Category::ALL.len();
    &COMPARISON_PROFILES[cycle % COMPARISON_PROFILES.len()]
}

/// Rotates `items` left by `seed` positions.
pub(crate) fn rotate<T: Clone>(items: &[T], seed: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let idx = seed % items.len();
    items[idx..].iter().chain(&items[..idx]).cloned().collect()
}
