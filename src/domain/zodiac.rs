use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignKey {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacSign {
    pub key: SignKey,
    pub name: &'static str,
    /// Inclusive (month, day) range start.
    pub start: (u32, u32),
    /// Inclusive (month, day) range end.
    pub end: (u32, u32),
    pub traits: [&'static str; 5],
}

/// The twelve signs in table order. Ranges are non-overlapping and cover
/// every calendar day; Capricorn is the only range crossing the year end.
pub static SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        key: SignKey::Aries,
        name: "Aries",
        start: (3, 21),
        end: (4, 19),
        traits: ["brave", "energetic", "impulsive", "leader", "competitive"],
    },
    ZodiacSign {
        key: SignKey::Taurus,
        name: "Taurus",
        start: (4, 20),
        end: (5, 20),
        traits: ["stubborn", "reliable", "practical", "patient", "loyal"],
    },
    ZodiacSign {
        key: SignKey::Gemini,
        name: "Gemini",
        start: (5, 21),
        end: (6, 20),
        traits: ["adaptable", "communicative", "curious", "versatile", "witty"],
    },
    ZodiacSign {
        key: SignKey::Cancer,
        name: "Cancer",
        start: (6, 21),
        end: (7, 22),
        traits: ["protective", "emotional", "nurturing", "intuitive", "loyal"],
    },
    ZodiacSign {
        key: SignKey::Leo,
        name: "Leo",
        start: (7, 23),
        end: (8, 22),
        traits: ["dramatic", "charismatic", "confident", "generous", "creative"],
    },
    ZodiacSign {
        key: SignKey::Virgo,
        name: "Virgo",
        start: (8, 23),
        end: (9, 22),
        traits: ["perfectionist", "analytical", "practical", "organized", "helpful"],
    },
    ZodiacSign {
        key: SignKey::Libra,
        name: "Libra",
        start: (9, 23),
        end: (10, 22),
        traits: ["balanced", "diplomatic", "charming", "social", "fair"],
    },
    ZodiacSign {
        key: SignKey::Scorpio,
        name: "Scorpio",
        start: (10, 23),
        end: (11, 21),
        traits: ["intense", "mysterious", "passionate", "determined", "loyal"],
    },
    ZodiacSign {
        key: SignKey::Sagittarius,
        name: "Sagittarius",
        start: (11, 22),
        end: (12, 21),
        traits: [
            "adventurous",
            "optimistic",
            "philosophical",
            "honest",
            "freedom-loving",
        ],
    },
    ZodiacSign {
        key: SignKey::Capricorn,
        name: "Capricorn",
        start: (12, 22),
        end: (1, 19),
        traits: ["ambitious", "disciplined", "practical", "responsible", "patient"],
    },
    ZodiacSign {
        key: SignKey::Aquarius,
        name: "Aquarius",
        start: (1, 20),
        end: (2, 18),
        traits: [
            "innovative",
            "rebellious",
            "independent",
            "humanitarian",
            "eccentric",
        ],
    },
    ZodiacSign {
        key: SignKey::Pisces,
        name: "Pisces",
        start: (2, 19),
        end: (3, 20),
        traits: ["intuitive", "empathetic", "artistic", "dreamy", "compassionate"],
    },
];

/// Maps a birth date to its sign. Only month and day matter, so Feb 29
/// resolves the same in leap and non-leap years.
pub fn resolve(date: NaiveDate) -> &'static ZodiacSign {
    resolve_month_day(date.month(), date.day())
}

pub fn resolve_month_day(month: u32, day: u32) -> &'static ZodiacSign {
    for sign in &SIGNS {
        let (start_month, start_day) = sign.start;
        let (end_month, end_day) = sign.end;

        let matched = if start_month > end_month {
            // Year-crossing range: no month lies strictly between December
            // and January, so the two boundary-month checks suffice.
            (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
        } else {
            (month == start_month && day >= start_day)
                || (month == end_month && day <= end_day)
                || (month > start_month && month < end_month)
        };

        if matched {
            return sign;
        }
    }

    // The table covers every (month, day) pair; falling through means the
    // table itself is broken.
    &SIGNS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_days_are_inclusive() {
        assert_eq!(resolve_month_day(3, 21).key, SignKey::Aries);
        assert_eq!(resolve_month_day(4, 19).key, SignKey::Aries);
        assert_eq!(resolve_month_day(3, 20).key, SignKey::Pisces);
        assert_eq!(resolve_month_day(4, 20).key, SignKey::Taurus);
        assert_eq!(resolve_month_day(1, 20).key, SignKey::Aquarius);
    }

    #[test]
    fn test_capricorn_spans_the_year_end() {
        assert_eq!(resolve_month_day(12, 22).key, SignKey::Capricorn);
        assert_eq!(resolve_month_day(12, 31).key, SignKey::Capricorn);
        assert_eq!(resolve_month_day(1, 1).key, SignKey::Capricorn);
        assert_eq!(resolve_month_day(1, 19).key, SignKey::Capricorn);
    }

    #[test]
    fn test_leap_day_resolves_to_pisces() {
        assert_eq!(resolve_month_day(2, 29).key, SignKey::Pisces);

        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(resolve(leap_day).key, SignKey::Pisces);
    }

    #[test]
    fn test_resolve_uses_month_and_day_only() {
        let a = NaiveDate::from_ymd_opt(1990, 7, 15).unwrap();
        let b = NaiveDate::from_ymd_opt(2023, 7, 15).unwrap();
        assert_eq!(resolve(a).key, SignKey::Cancer);
        assert_eq!(resolve(a).key, resolve(b).key);
    }
}
