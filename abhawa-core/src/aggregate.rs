use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};

use crate::model::ForecastPeriod;

/// Most forecast days the panel shows beyond today.
const MAX_DAILY: usize = 6;

/// Inclusive local-hour window treated as "near noon".
const NOON_WINDOW: std::ops::RangeInclusive<u32> = 11..=14;

/// Pick at most six representative periods, one per local calendar day,
/// preserving input order.
///
/// The first period whose local hour falls inside the noon window claims
/// its day; later periods for the same day are skipped even if they sit
/// closer to noon. A day whose periods all miss the window gets no
/// representative at all.
pub fn select_daily(periods: &[ForecastPeriod], offset: FixedOffset) -> Vec<&ForecastPeriod> {
    let mut picked: Vec<&ForecastPeriod> = Vec::with_capacity(MAX_DAILY);
    let mut consumed: Vec<NaiveDate> = Vec::with_capacity(MAX_DAILY);

    for period in periods {
        if picked.len() == MAX_DAILY {
            break;
        }

        let Some(utc) = DateTime::from_timestamp(period.timestamp, 0) else {
            continue;
        };
        let local = utc.with_timezone(&offset);

        let day = local.date_naive();
        if consumed.contains(&day) || !NOON_WINDOW.contains(&local.hour()) {
            continue;
        }

        consumed.push(day);
        picked.push(period);
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};

    const DAY: i64 = 86_400;
    const HOUR: i64 = 3_600;

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn period(timestamp: i64) -> ForecastPeriod {
        ForecastPeriod {
            timestamp,
            temperature_c: 25.0,
            humidity_pct: 60,
            condition: "Clouds".to_string(),
        }
    }

    fn at(day: i64, hour: i64) -> i64 {
        day * DAY + hour * HOUR
    }

    #[test]
    fn accepts_window_edges_and_skips_outside() {
        let periods = [
            period(at(1, 10)), // before the window
            period(at(1, 11)), // first qualifying for day 1
            period(at(2, 14)), // last qualifying hour
            period(at(3, 15)), // after the window
        ];

        let picked = select_daily(&periods, utc());

        let timestamps: Vec<i64> = picked.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![at(1, 11), at(2, 14)]);
    }

    #[test]
    fn first_qualifying_period_wins_the_day() {
        // Hour 14 arrives first; the hour-12 reading must not replace it.
        let periods = [period(at(1, 14)), period(at(1, 12))];

        let picked = select_daily(&periods, utc());

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].timestamp, at(1, 14));
    }

    #[test]
    fn caps_at_six_earliest_days() {
        let periods: Vec<ForecastPeriod> = (1..=10).map(|d| period(at(d, 12))).collect();

        let picked = select_daily(&periods, utc());

        assert_eq!(picked.len(), 6);
        let timestamps: Vec<i64> = picked.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, (1..=6).map(|d| at(d, 12)).collect::<Vec<i64>>());
    }

    #[test]
    fn day_without_qualifying_period_is_omitted() {
        let periods = [
            period(at(1, 12)),
            period(at(2, 3)), // day 2 never enters the window
            period(at(2, 18)),
            period(at(3, 12)),
        ];

        let picked = select_daily(&periods, utc());

        let timestamps: Vec<i64> = picked.iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, vec![at(1, 12), at(3, 12)]);
    }

    #[test]
    fn day_key_and_hour_use_the_location_offset() {
        // 06:00 UTC is noon at UTC+6, so the period qualifies there
        // but not in UTC.
        let dhaka = FixedOffset::east_opt(6 * 3600).expect("valid offset");
        let periods = [period(at(1, 6))];

        assert_eq!(select_daily(&periods, utc()).len(), 0);
        assert_eq!(select_daily(&periods, dhaka).len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_selection() {
        assert!(select_daily(&[], utc()).is_empty());
    }
}
