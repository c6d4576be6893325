// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::cmp::Ordering;

use crate::broad::collidable::Collidable;

/// Sorting algorithm used by [`sort_by_left_with`].
///
/// Both produce an ordering that is non-decreasing by left edge; neither
/// promises a particular order among equal left edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortStrategy {
    /// Pattern-defeating quicksort, `O(n log n)`.
    #[default]
    Unstable,
    /// In-place exchange (bubble) sort, `O(n^2)` worst case but `O(n)` on
    /// input that is already nearly sorted, which is the usual frame-to-frame
    /// case when objects move a little.
    Exchange,
}

fn by_left<T: Collidable>(a: &T, b: &T) -> Ordering {
    a.left().total_cmp(&b.left())
}

/// Sorts `items` in place, ascending by left edge.
///
/// Empty and single-element slices are left untouched.
pub fn sort_by_left<T: Collidable>(items: &mut [T]) {
    sort_by_left_with(items, SortStrategy::default());
}

/// Sorts `items` in place, ascending by left edge, with the given algorithm.
///
/// Left edges compare with [`f32::total_cmp`], so a NaN edge (a caller bug)
/// sorts to one end instead of panicking.
pub fn sort_by_left_with<T: Collidable>(items: &mut [T], strategy: SortStrategy) {
    if items.len() < 2 {
        return;
    }
    match strategy {
        SortStrategy::Unstable => items.sort_unstable_by(by_left),
        SortStrategy::Exchange => exchange_sort(items),
    }
}

fn exchange_sort<T: Collidable>(items: &mut [T]) {
    // Everything at or past `end` is already in its final place.
    let mut end = items.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if by_left(&items[i - 1], &items[i]) == Ordering::Greater {
                items.swap(i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;
    }
}

/// Returns `true` if every adjacent pair satisfies `left[i] <= left[i + 1]`.
pub fn is_sorted_by_left<T: Collidable>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0].left() <= w[1].left())
}
