//! Filter/sort helpers shared by the list views. Search is a
//! case-insensitive substring match over a fixed field set; the category
//! filter is an exact match; both must pass (AND semantics).

use std::cmp::Ordering;

/// True when `term` appears (case-insensitively) in any of `fields`.
/// An empty term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Total order over floats for sort keys (NaN sorts last).
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Apply the ascending/descending toggle to a comparison.
pub fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}
