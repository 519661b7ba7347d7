//! Indian-numbering-system (lakh/crore) currency formatting.
//!
//! Prices are displayed with the 3-2-2-2... comma convention: the rightmost
//! three digits form one group, everything to the left is grouped in pairs.
//! This is distinct from the Western 3-3-3 grouping.

// ---------------------------------------------------------------------------
// Grouping constants
// ---------------------------------------------------------------------------

/// Digits in the rightmost group.
const LOW_GROUP_DIGITS: usize = 3;
/// Digits in every group left of the rightmost one.
const HIGH_GROUP_DIGITS: usize = 2;

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format an amount in rupees with Indian digit grouping.
///
/// The amount is rounded to the nearest whole rupee before grouping, so
/// `format_inr(999.6)` is `"1,000"`. Values with three or fewer digits are
/// returned without separators.
///
/// Total for any finite non-negative input; negative or non-finite amounts
/// are outside the contract (the form never produces them).
pub fn format_inr(amount: f64) -> String {
    let digits = (amount.round() as u64).to_string();
    if digits.len() <= LOW_GROUP_DIGITS {
        return digits;
    }

    let (rest, last3) = digits.split_at(digits.len() - LOW_GROUP_DIGITS);

    // Collect pair groups right-to-left; a leftover single digit forms the
    // leftmost group on its own.
    let mut groups: Vec<&str> = Vec::new();
    let mut end = rest.len();
    while end > 0 {
        let start = end.saturating_sub(HIGH_GROUP_DIGITS);
        groups.push(&rest[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last3)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
