//! Rate-change direction for colorizing deltas

use crate::number::BigNumber;
use serde::{Deserialize, Serialize};

/// Sign of a change relative to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeDirection {
    Down = -1,
    Flat = 0,
    Up = 1,
}

impl ChangeDirection {
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Classify `value` against zero; absent or empty input counts as `"0"`
///
/// NaN has no direction and is reported as [`ChangeDirection::Flat`].
pub fn get_changes_direction(value: Option<&str>) -> ChangeDirection {
    let value = value.filter(|value| !value.is_empty()).unwrap_or("0");
    match BigNumber::parse(value).signum() {
        Some(1) => ChangeDirection::Up,
        Some(-1) => ChangeDirection::Down,
        _ => ChangeDirection::Flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(get_changes_direction(Some("1.5")), ChangeDirection::Up);
        assert_eq!(get_changes_direction(Some("-0.01")), ChangeDirection::Down);
        assert_eq!(get_changes_direction(Some("0")), ChangeDirection::Flat);
        assert_eq!(get_changes_direction(Some("")), ChangeDirection::Flat);
        assert_eq!(get_changes_direction(None), ChangeDirection::Flat);
        assert_eq!(get_changes_direction(Some("NaN")), ChangeDirection::Flat);
        assert_eq!(get_changes_direction(Some("-Infinity")), ChangeDirection::Down);
    }

    #[test]
    fn test_as_i8() {
        assert_eq!(ChangeDirection::Down.as_i8(), -1);
        assert_eq!(ChangeDirection::Flat.as_i8(), 0);
        assert_eq!(ChangeDirection::Up.as_i8(), 1);
    }
}
