use chrono::NaiveDate;
use survival_advisor::domain::zodiac::{self, ZodiacSign, SIGNS};

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Same membership rule as the resolver, restated independently so either
// side drifting breaks the partition test.
fn in_range(sign: &ZodiacSign, month: u32, day: u32) -> bool {
    let (start_month, start_day) = sign.start;
    let (end_month, end_day) = sign.end;

    if start_month > end_month {
        (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
    } else {
        (month == start_month && day >= start_day)
            || (month == end_month && day <= end_day)
            || (month > start_month && month < end_month)
    }
}

#[test]
fn test_twelve_ranges_partition_the_calendar() {
    for month in 1..=12u32 {
        for day in 1..=DAYS_IN_MONTH[(month - 1) as usize] {
            let matching = SIGNS
                .iter()
                .filter(|sign| in_range(sign, month, day))
                .count();
            assert_eq!(
                matching, 1,
                "{}-{} must belong to exactly one sign",
                month, day
            );

            let resolved = zodiac::resolve_month_day(month, day);
            assert!(
                in_range(resolved, month, day),
                "{}-{} resolved to {} but is outside its range",
                month,
                day,
                resolved.name
            );
        }
    }
}

#[test]
fn test_boundaries_hand_off_to_adjacent_signs() {
    // 2000 is a leap year, so Feb 29 boundaries are exercised too.
    for sign in &SIGNS {
        let (start_month, start_day) = sign.start;
        let (end_month, end_day) = sign.end;

        let start = NaiveDate::from_ymd_opt(2000, start_month, start_day).unwrap();
        let end = NaiveDate::from_ymd_opt(2000, end_month, end_day).unwrap();

        assert_eq!(zodiac::resolve(start).key, sign.key);
        assert_eq!(zodiac::resolve(end).key, sign.key);

        let day_before = start.pred_opt().unwrap();
        let day_after = end.succ_opt().unwrap();

        assert_ne!(
            zodiac::resolve(day_before).key,
            sign.key,
            "{} must not claim the day before its range",
            sign.name
        );
        assert_ne!(
            zodiac::resolve(day_after).key,
            sign.key,
            "{} must not claim the day after its range",
            sign.name
        );
    }
}

#[test]
fn test_known_dates() {
    assert_eq!(zodiac::resolve_month_day(3, 21).name, "Aries");
    assert_eq!(zodiac::resolve_month_day(3, 20).name, "Pisces");
    assert_eq!(zodiac::resolve_month_day(12, 31).name, "Capricorn");
    assert_eq!(zodiac::resolve_month_day(1, 1).name, "Capricorn");
    assert_eq!(zodiac::resolve_month_day(1, 20).name, "Aquarius");
    assert_eq!(zodiac::resolve_month_day(2, 29).name, "Pisces");
    assert_eq!(zodiac::resolve_month_day(7, 15).name, "Cancer");
}
