//! Leave-duration derivation from a calendar date range.

use crate::error::PermisoError;
use chrono::NaiveDate;

/// Hours counted per calendar day of leave when config does not override it.
pub const DEFAULT_HOURS_PER_WORKDAY: u32 = 8;

/// Derived duration fields for a leave period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDuration {
    pub days: u32,
    pub hours: u32,
    pub label: String,
}

/// Compute the leave duration for an inclusive date range.
///
/// Both endpoints count: a leave from Monday to Monday is one day. Weekends
/// and holidays are not excluded; the count is raw calendar days. Returns
/// [`PermisoError::InvalidRange`] when `start` is after `end`, leaving the
/// caller to reset its derived fields and surface the warning.
///
/// Pure: same inputs always produce the same output.
pub fn derive_duration(
    start: NaiveDate,
    end: NaiveDate,
    hours_per_workday: u32,
) -> Result<LeaveDuration, PermisoError> {
    if start > end {
        return Err(PermisoError::InvalidRange { start, end });
    }

    let days = (end - start).num_days() as u32 + 1;
    let hours = days * hours_per_workday;
    let label = format!("{} días", days);

    Ok(LeaveDuration { days, hours, label })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_range() {
        let duration = derive_duration(date(2024, 3, 1), date(2024, 3, 5), 8).unwrap();
        assert_eq!(duration.days, 5);
        assert_eq!(duration.hours, 40);
        assert_eq!(duration.label, "5 días");
    }

    #[test]
    fn test_single_day() {
        let duration = derive_duration(date(2024, 3, 1), date(2024, 3, 1), 8).unwrap();
        assert_eq!(duration.days, 1);
        assert_eq!(duration.hours, 8);
        assert_eq!(duration.label, "1 días");
    }

    #[test]
    fn test_range_spanning_month_boundary() {
        let duration = derive_duration(date(2024, 2, 28), date(2024, 3, 2), 8).unwrap();
        // 2024 is a leap year: 28, 29 Feb + 1, 2 Mar
        assert_eq!(duration.days, 4);
        assert_eq!(duration.hours, 32);
    }

    #[test]
    fn test_custom_hours_per_workday() {
        let duration = derive_duration(date(2024, 3, 1), date(2024, 3, 2), 6).unwrap();
        assert_eq!(duration.days, 2);
        assert_eq!(duration.hours, 12);
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let result = derive_duration(date(2024, 3, 5), date(2024, 3, 1), 8);
        match result {
            Err(PermisoError::InvalidRange { start, end }) => {
                assert_eq!(start, date(2024, 3, 5));
                assert_eq!(end, date(2024, 3, 1));
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let a = derive_duration(date(2024, 3, 1), date(2024, 3, 5), 8).unwrap();
        let b = derive_duration(date(2024, 3, 1), date(2024, 3, 5), 8).unwrap();
        assert_eq!(a, b);
    }
}
