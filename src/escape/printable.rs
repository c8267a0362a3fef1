//! Printability of decoded code points.
//!
//! A code point is printable unless its general category is control (Cc),
//! format (Cf), surrogate (Cs) or unassigned (Cn). Noncharacters are Cn.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Returns `true` if `c` can be written to a diagnostic string as-is.
pub(super) fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}
