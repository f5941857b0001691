use chrono::{DateTime, Months, TimeDelta, Utc};
use styloprint_types::{Document, Timeframe};

/// Earliest instant inside the window ending at `now`.
///
/// Calendar months are subtracted with end-of-month clamping. If the
/// subtraction leaves chrono's range the window is unbounded.
pub fn cutoff(timeframe: Timeframe, now: DateTime<Utc>) -> DateTime<Utc> {
    let cut = match timeframe {
        Timeframe::SevenDays => now.checked_sub_signed(TimeDelta::days(7)),
        Timeframe::ThirtyDays => now.checked_sub_signed(TimeDelta::days(30)),
        Timeframe::ThreeMonths => now.checked_sub_months(Months::new(3)),
        Timeframe::SixMonths => now.checked_sub_months(Months::new(6)),
    };
    cut.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Documents dated at or after the cutoff, in input order.
pub fn filter_by_timeframe(
    docs: &[Document],
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> Vec<&Document> {
    let cut = cutoff(timeframe, now);
    docs.iter().filter(|d| d.date >= cut).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn day_windows_subtract_days() {
        let now = at(2024, 3, 10);
        assert_eq!(cutoff(Timeframe::SevenDays, now), at(2024, 3, 3));
        assert_eq!(cutoff(Timeframe::ThirtyDays, now), at(2024, 2, 9));
    }

    #[test]
    fn month_windows_clamp_to_month_end() {
        let now = at(2024, 5, 31);
        assert_eq!(cutoff(Timeframe::ThreeMonths, now), at(2024, 2, 29));
        assert_eq!(cutoff(Timeframe::SixMonths, now), at(2023, 11, 30));
    }

    #[test]
    fn boundary_is_inclusive() {
        let now = at(2024, 3, 10);
        let docs = vec![
            Document::new("edge", "x", at(2024, 3, 3)),
            Document::new("old", "x", at(2024, 3, 2)),
            Document::new("new", "x", now),
        ];
        let kept: Vec<&str> = filter_by_timeframe(&docs, Timeframe::SevenDays, now)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(kept, vec!["edge", "new"]);
    }
}
