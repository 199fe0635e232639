use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

/// A reporting window over recruit attribution dates.
///
/// A missing bound leaves that side unbounded. Present bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl Window {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Rejects windows whose end precedes their start.
    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && to < from
        {
            return Err(StorageError::InvalidWindow(format!(
                "window end {} is before its start {}",
                to.to_rfc3339(),
                from.to_rfc3339()
            )));
        }

        Ok(())
    }

    pub fn is_bounded(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Length of a fully bounded window.
    pub fn length(&self) -> Option<TimeDelta> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(to - from),
            _ => None,
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| instant >= from) && self.to.is_none_or(|to| instant <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let window = Window::unbounded();
        assert!(window.contains(at(1)));
        assert!(window.contains(DateTime::<Utc>::UNIX_EPOCH));
        assert!(!window.is_bounded());
        assert_eq!(window.length(), None);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = Window::between(at(3), at(9));
        assert!(window.contains(at(3)));
        assert!(window.contains(at(9)));
        assert!(!window.contains(at(2)));
        assert!(!window.contains(at(10)));
    }

    #[test]
    fn test_half_open_window() {
        let window = Window::new(Some(at(5)), None);
        assert!(window.contains(at(28)));
        assert!(!window.contains(at(4)));
    }

    #[test]
    fn test_validate_rejects_reversed_window() {
        let window = Window::between(at(9), at(3));
        assert!(matches!(
            window.validate(),
            Err(StorageError::InvalidWindow(_))
        ));
        assert!(Window::between(at(3), at(3)).validate().is_ok());
        assert!(Window::new(None, Some(at(3))).validate().is_ok());
    }
}
