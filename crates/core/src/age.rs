//! Dog age display.
//!
//! Ages are shown in abbreviated Russian: `"2 г. 3 м."`, `"5 л."`, `"12 д."`.
//! The year/month split uses calendar arithmetic, not day division: a month
//! is counted once the day-of-month has been reached again, with a birth day
//! past the end of a shorter month clipped to that month's last day.

use chrono::{Datelike, NaiveDate};

/// Whole calendar years and months elapsed from `from` to `to`.
///
/// Returns `(0, 0)` when `to` is before `from`.
pub fn calendar_diff(from: NaiveDate, to: NaiveDate) -> (u32, u32) {
    if to < from {
        return (0, 0);
    }

    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    // Jan 31 -> Feb 29 is one month; Feb 29 -> Feb 28 of a common year is one year.
    let anniversary_day = from.day().min(days_in_month(to.year(), to.month()));
    if to.day() < anniversary_day {
        months -= 1;
    }
    let months = months.max(0) as u32;

    (months / 12, months % 12)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Abbreviated year form: `г.` for 1-4 (except 11-14), `л.` otherwise.
pub fn format_years(years: u32) -> String {
    let last_digit = years % 10;
    let last_two = years % 100;
    if (1..=4).contains(&last_digit) && !(11..=14).contains(&last_two) {
        format!("{years} г.")
    } else {
        format!("{years} л.")
    }
}

/// Abbreviated month form.
pub fn format_months(months: u32) -> String {
    format!("{months} м.")
}

/// Human-readable age for a dog born on `birth_date`, as of `today`.
///
/// - no birth date: `None`
/// - under one month: day count, e.g. `"17 д."`
/// - otherwise the non-zero year and month parts, e.g. `"1 г. 2 м."`
pub fn dog_age(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    let birth_date = birth_date?;
    let (years, months) = calendar_diff(birth_date, today);

    if years == 0 && months == 0 {
        let days = (today - birth_date).num_days().max(0);
        return Some(format!("{days} д."));
    }

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format_years(years));
    }
    if months > 0 {
        parts.push(format_months(months));
    }
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_birth_date_is_none() {
        assert_eq!(dog_age(None, date(2024, 5, 1)), None);
    }

    #[test]
    fn born_today_is_zero_days() {
        let today = date(2024, 5, 1);
        assert_eq!(dog_age(Some(today), today).as_deref(), Some("0 д."));
    }

    #[test]
    fn under_a_month_counts_days() {
        assert_eq!(
            dog_age(Some(date(2024, 1, 31)), date(2024, 2, 28)).as_deref(),
            Some("28 д.")
        );
        assert_eq!(
            dog_age(Some(date(2024, 4, 10)), date(2024, 5, 9)).as_deref(),
            Some("29 д.")
        );
    }

    #[test]
    fn month_end_birthday_is_clipped_to_shorter_month() {
        assert_eq!(
            dog_age(Some(date(2024, 1, 31)), date(2024, 2, 29)).as_deref(),
            Some("1 м.")
        );
        assert_eq!(calendar_diff(date(2023, 1, 31), date(2023, 2, 28)), (0, 1));
        assert_eq!(calendar_diff(date(2024, 3, 31), date(2024, 4, 30)), (0, 1));
        assert_eq!(calendar_diff(date(2024, 3, 31), date(2024, 4, 29)), (0, 0));
    }

    #[test]
    fn exactly_one_year() {
        assert_eq!(
            dog_age(Some(date(2023, 5, 1)), date(2024, 5, 1)).as_deref(),
            Some("1 г.")
        );
    }

    #[test]
    fn years_and_months() {
        assert_eq!(
            dog_age(Some(date(2021, 2, 10)), date(2024, 5, 12)).as_deref(),
            Some("3 г. 3 м.")
        );
    }

    #[test]
    fn months_only() {
        assert_eq!(
            dog_age(Some(date(2024, 1, 15)), date(2024, 5, 14)).as_deref(),
            Some("3 м.")
        );
    }

    #[test]
    fn year_forms() {
        assert_eq!(format_years(1), "1 г.");
        assert_eq!(format_years(4), "4 г.");
        assert_eq!(format_years(5), "5 л.");
        assert_eq!(format_years(11), "11 л.");
        assert_eq!(format_years(14), "14 л.");
        assert_eq!(format_years(21), "21 г.");
        assert_eq!(format_years(22), "22 г.");
        assert_eq!(format_years(25), "25 л.");
        assert_eq!(format_years(111), "111 л.");
    }

    #[test]
    fn twenty_one_years() {
        assert_eq!(
            dog_age(Some(date(2003, 5, 1)), date(2024, 5, 1)).as_deref(),
            Some("21 г.")
        );
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(calendar_diff(date(2020, 2, 29), date(2021, 2, 28)), (1, 0));
        assert_eq!(calendar_diff(date(2020, 2, 29), date(2021, 2, 27)), (0, 11));
        assert_eq!(
            dog_age(Some(date(2020, 2, 29)), date(2021, 2, 28)).as_deref(),
            Some("1 г.")
        );
        assert_eq!(calendar_diff(date(2020, 2, 29), date(2021, 3, 1)), (1, 0));
    }

    #[test]
    fn future_birth_date_is_zero_days() {
        assert_eq!(
            dog_age(Some(date(2024, 6, 1)), date(2024, 5, 1)).as_deref(),
            Some("0 д.")
        );
    }
}
