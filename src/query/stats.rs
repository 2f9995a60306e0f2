//! Per-board counts and category shares.

use super::view::BoardView;
use crate::core::Category;

/// Share of a board's vehicles held in one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusSegment {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    /// Rounded percentage of the board total
    pub pct: u32,
}

/// Number of vehicles on the view, across every category.
pub fn vehicles_assigned<V: BoardView + ?Sized>(view: &V) -> usize {
    view.total()
}

pub fn count<V: BoardView + ?Sized>(view: &V, category: Category) -> usize {
    view.count(category)
}

/// Breakdown of a board by category, skipping empty categories.
///
/// Percentages are rounded individually and may not sum to exactly 100.
pub fn status_breakdown<V: BoardView + ?Sized>(view: &V) -> Vec<StatusSegment> {
    let total = view.total();
    if total == 0 {
        return Vec::new();
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let count = view.count(category);
            (count > 0).then(|| StatusSegment {
                category,
                label: category.label(),
                count,
                pct: percent(count, total),
            })
        })
        .collect()
}

fn percent(count: usize, total: usize) -> u32 {
    ((count as f64 / total as f64) * 100.0).round() as u32
}
