//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored record.
///
/// Assigned by the backing store on insert. `0` means "not yet assigned";
/// every record read back from a store carries a non-zero id.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Placeholder id of a record the store has not seen yet.
    pub const UNASSIGNED: RecordId = RecordId(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// Parses a raw path segment.
///
/// Only plain ASCII digits are accepted (no sign, no whitespace), and the
/// value must fit in an `i64`.
impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "expected a non-negative integer, got {s:?}"
            )));
        }
        let value = s
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("{s:?}: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("1".parse::<RecordId>().unwrap(), RecordId::new(1));
        assert_eq!("0".parse::<RecordId>().unwrap(), RecordId::UNASSIGNED);
        assert_eq!("007".parse::<RecordId>().unwrap(), RecordId::new(7));
    }

    #[test]
    fn rejects_non_numeric_segments() {
        for raw in ["", "testabc", "abc", "1a", " 1", "1.5", "-1", "+1"] {
            let err = raw.parse::<RecordId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "{raw:?} -> {err:?}");
        }
    }

    #[test]
    fn rejects_values_outside_i64() {
        let err = "9223372036854775808".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn unassigned_is_zero() {
        assert!(!RecordId::default().is_assigned());
        assert!(RecordId::new(3).is_assigned());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    proptest! {
        /// Property: every non-negative i64 survives Display -> FromStr.
        #[test]
        fn display_then_parse_is_identity(v in 0i64..=i64::MAX) {
            let id = RecordId::new(v);
            prop_assert_eq!(id.to_string().parse::<RecordId>().unwrap(), id);
        }

        /// Property: anything containing a non-digit is rejected.
        #[test]
        fn non_digit_strings_are_rejected(s in "[0-9]{0,4}[^0-9][0-9a-z]{0,4}") {
            prop_assert!(s.parse::<RecordId>().is_err());
        }
    }
}
