//! German public holidays, nationwide plus a few federal states.
//!
//! Movable feasts are derived from the Gregorian Easter computus. Region codes
//! follow ISO 3166-2 ("DE", "DE-BW", "DE-BY", "DE-NW", "DE-HE"); an unknown
//! code falls back to the nationwide set.

use super::HolidayCalendar;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Nationwide,
    BadenWuerttemberg,
    Bavaria,
    NorthRhineWestphalia,
    Hesse,
}

impl Region {
    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "DE-BW" => Region::BadenWuerttemberg,
            "DE-BY" => Region::Bavaria,
            "DE-NW" => Region::NorthRhineWestphalia,
            "DE-HE" => Region::Hesse,
            _ => Region::Nationwide,
        }
    }
}

pub struct GermanCalendar {
    region: Region,
}

impl GermanCalendar {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn from_code(code: &str) -> Self {
        Self::new(Region::from_code(code))
    }

    fn lookup(&self, date: NaiveDate) -> Option<&'static str> {
        let easter = easter_sunday(date.year());
        let from_easter = (date - easter).num_days();

        match (date.month(), date.day()) {
            (1, 1) => return Some("Neujahr"),
            (5, 1) => return Some("Tag der Arbeit"),
            (10, 3) => return Some("Tag der Deutschen Einheit"),
            (12, 25) => return Some("1. Weihnachtstag"),
            (12, 26) => return Some("2. Weihnachtstag"),
            _ => {}
        }

        match from_easter {
            -2 => return Some("Karfreitag"),
            1 => return Some("Ostermontag"),
            39 => return Some("Christi Himmelfahrt"),
            50 => return Some("Pfingstmontag"),
            _ => {}
        }

        match self.region {
            Region::Nationwide => None,
            Region::BadenWuerttemberg => match (date.month(), date.day(), from_easter) {
                (1, 6, _) => Some("Heilige Drei Könige"),
                (11, 1, _) => Some("Allerheiligen"),
                (_, _, 60) => Some("Fronleichnam"),
                _ => None,
            },
            Region::Bavaria => match (date.month(), date.day(), from_easter) {
                (1, 6, _) => Some("Heilige Drei Könige"),
                (8, 15, _) => Some("Mariä Himmelfahrt"),
                (11, 1, _) => Some("Allerheiligen"),
                (_, _, 60) => Some("Fronleichnam"),
                _ => None,
            },
            Region::NorthRhineWestphalia => match (date.month(), date.day(), from_easter) {
                (11, 1, _) => Some("Allerheiligen"),
                (_, _, 60) => Some("Fronleichnam"),
                _ => None,
            },
            Region::Hesse => match from_easter {
                60 => Some("Fronleichnam"),
                _ => None,
            },
        }
    }
}

impl HolidayCalendar for GermanCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.lookup(date).is_some()
    }

    fn holiday_label(&self, date: NaiveDate) -> Option<String> {
        self.lookup(date).map(str::to_string)
    }
}

/// Gregorian Easter Sunday (anonymous computus).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// Fixed-schedule calendar for deterministic tests: every Mon-Fri is a
/// working day, no holidays at all.
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }

    fn holiday_label(&self, _date: NaiveDate) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easter_known_dates() {
        assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
        assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
    }

    #[test]
    fn nationwide_holidays() {
        let cal = GermanCalendar::new(Region::Nationwide);
        // Whit Monday 2025: June 9
        assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()));
        assert_eq!(
            cal.holiday_label(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()),
            Some("1. Weihnachtstag".to_string())
        );
        // Corpus Christi is not nationwide
        assert!(!cal.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 19).unwrap()));
    }

    #[test]
    fn regional_holidays() {
        let bw = GermanCalendar::from_code("DE-BW");
        assert!(bw.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 19).unwrap()));
        assert!(bw.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()));

        let by = GermanCalendar::from_code("DE-BY");
        assert!(by.is_holiday(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()));
    }

    #[test]
    fn weekend_is_not_working_day() {
        let cal = GermanCalendar::new(Region::Nationwide);
        // Saturday
        assert!(!cal.is_working_day(NaiveDate::from_ymd_opt(2025, 9, 6).unwrap()));
        assert!(cal.is_working_day(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()));
    }

    #[test]
    fn working_days_between_counts_inclusive() {
        let cal = GermanCalendar::new(Region::Nationwide);
        // September 2025: 22 working days, no nationwide holidays
        let first = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert_eq!(cal.working_days_between(first, last), 22);
    }

    #[test]
    fn next_working_day_skips_weekend_and_holiday() {
        let cal = GermanCalendar::new(Region::Nationwide);
        // 2026-01-01 (Thursday) is a holiday; next working day is Friday the 2nd
        let jan1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(
            cal.next_working_day_on_or_after(jan1),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
        );
    }
}
