use std::cmp::Ordering;

use crate::consts::LINE_TOLERANCE;
use crate::layout::fragment::TextFragment;

/// Orders two fragments by reading position: top-to-bottom, left-to-right.
///
/// PDF user space puts the origin at the bottom-left corner with y growing
/// upward, so the fragment with the *larger* y coordinate reads first.
/// Fragments whose vertical positions differ by no more than
/// [`LINE_TOLERANCE`] sit on the same printed line; within that band only
/// the horizontal position decides, ascending.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use glam::Vec2;
/// use syllex_core::analysis::reading_order::compare_reading_order;
/// use syllex_core::layout::fragment::TextFragment;
///
/// let upper = TextFragment::new("title", Vec2::new(40.0, 700.0));
/// let lower = TextFragment::new("body", Vec2::new(40.0, 650.0));
/// assert_eq!(compare_reading_order(&upper, &lower), Ordering::Less);
///
/// // Same line (within tolerance): left fragment first.
/// let left = TextFragment::new("Periodo:", Vec2::new(40.0, 700.0));
/// let right = TextFragment::new("2025-1", Vec2::new(120.0, 702.0));
/// assert_eq!(compare_reading_order(&left, &right), Ordering::Less);
/// ```
pub fn compare_reading_order(a: &TextFragment, b: &TextFragment) -> Ordering {
    if (a.pos.y - b.pos.y).abs() > LINE_TOLERANCE {
        // Different lines: larger y (closer to the top of the page) first.
        b.pos.y.partial_cmp(&a.pos.y).unwrap_or(Ordering::Equal)
    } else {
        a.pos.x.partial_cmp(&b.pos.x).unwrap_or(Ordering::Equal)
    }
}

/// Reconstructs one reading-order string from an unordered fragment list.
///
/// Fragments are stable-sorted with [`compare_reading_order`] and joined
/// with a single space, irrespective of the original horizontal gaps. No
/// line-break character is inserted between lines: the whole page collapses
/// into one token stream, so a label and its value are separated by at most
/// the join space even when they were printed on different lines.
///
/// # Example
/// ```
/// use glam::Vec2;
/// use syllex_core::analysis::reading_order::reconstruct;
/// use syllex_core::layout::fragment::TextFragment;
///
/// let fragments = vec![
///     TextFragment::new("2025-1", Vec2::new(150.0, 700.0)),
///     TextFragment::new("Silabo", Vec2::new(40.0, 760.0)),
///     TextFragment::new("Periodo:", Vec2::new(40.0, 700.0)),
/// ];
/// assert_eq!(reconstruct(fragments), "Silabo Periodo: 2025-1");
/// ```
pub fn reconstruct(mut fragments: Vec<TextFragment>) -> String {
    fragments.sort_by(compare_reading_order);

    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
