//! Wall-clock reading to epoch-second resolution.

use tracing::debug;

use crate::rules::TzRules;

/// Resolves a wall-clock reading to the epoch second it denotes.
///
/// `guess` is the reading's local seconds interpreted as if it were UTC.
/// The table is probed at the guess, then re-probed with the found offset
/// applied; the second probe normally wins. When the re-probed instant
/// lands inside the window of the transition that separates the two
/// answers, the pre-transition offset wins instead. The net effect:
/// readings inside a spring-forward gap resolve to the instant past the
/// gap, and ambiguous fall-back readings resolve to their first
/// occurrence.
///
/// Returns `None` when the table has no usable data for the probed range;
/// callers fall back to whatever offset they already hold.
pub fn resolve_wall(guess: i64, rules: &TzRules) -> Option<i64> {
    let current = rules.offset_info(guess)?;
    let after = rules.offset_info(guess - i64::from(current.offset))?;

    let actual = match after.since {
        Some(since) if current.offset != after.offset => {
            let candidate = guess - i64::from(after.offset);
            let window_start = since + i64::from(current.offset) - i64::from(after.offset);
            if candidate >= window_start && candidate < since {
                debug!(
                    zone = rules.name(),
                    guess, "wall reading inside a transition window; keeping previous offset"
                );
                current.offset
            } else {
                after.offset
            }
        }
        _ => after.offset,
    };

    Some(guess - i64::from(actual))
}
