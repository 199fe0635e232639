use chrono::TimeDelta;

use crate::models::Window;

/// Smallest step between two stored timestamps (Postgres stores microseconds).
pub fn resolution() -> TimeDelta {
    TimeDelta::microseconds(1)
}

/// Derive the comparison window that immediately precedes `current`.
///
/// The previous window has the same length and ends one [`resolution`] step
/// before `current` starts, so the two never overlap and leave no gap. Returns
/// `None` when either bound is missing, when the window is reversed, or when
/// the result would fall outside the representable time range.
pub fn previous_window(current: &Window) -> Option<Window> {
    let (from, to) = (current.from?, current.to?);
    if to < from {
        return None;
    }

    let length = to - from;
    let prev_to = from.checked_sub_signed(resolution())?;
    let prev_from = prev_to.checked_sub_signed(length)?;

    Some(Window::between(prev_from, prev_to))
}
