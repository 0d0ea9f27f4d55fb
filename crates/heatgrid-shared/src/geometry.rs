use chrono::{
  Datelike,
  Duration,
  NaiveDate
};

use crate::types::WeekStart;

pub const DAYS_PER_WEEK: u32 = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

fn first_day_of_month(
  year: i32,
  month_index: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year,
    month_index.min(11) + 1,
    1
  )
  .unwrap_or(NaiveDate::MIN)
}

fn first_day_of_next_month(
  year: i32,
  month_index: u32
) -> NaiveDate {
  if month_index >= 11 {
    first_day_of_month(
      year.saturating_add(1),
      0
    )
  } else {
    first_day_of_month(
      year,
      month_index + 1
    )
  }
}

fn days_between(
  start: NaiveDate,
  end: NaiveDate
) -> u32 {
  u32::try_from(
    end
      .signed_duration_since(start)
      .num_days()
  )
  .unwrap_or(0)
}

#[must_use]
pub fn jan_first(year: i32) -> NaiveDate {
  first_day_of_month(year, 0)
}

/// Number of days in `year`, measured
/// as the span from Jan 1 to the next
/// Jan 1.
#[must_use]
pub fn days_in_year(year: i32) -> u32 {
  days_between(
    jan_first(year),
    jan_first(year.saturating_add(1))
  )
}

/// Number of days in the 0-indexed
/// `month_index` of `year`.
#[must_use]
pub fn days_in_month(
  year: i32,
  month_index: u32
) -> u32 {
  days_between(
    first_day_of_month(
      year,
      month_index
    ),
    first_day_of_next_month(
      year,
      month_index
    )
  )
}

/// Days of `year` that fall before the
/// first of `month_index`.
#[must_use]
pub fn days_before_month(
  year: i32,
  month_index: u32
) -> u32 {
  first_day_of_month(year, month_index)
    .ordinal0()
}

/// Maps a 1-indexed day-of-year to its
/// date. `None` outside
/// `1..=days_in_year(year)`.
#[must_use]
pub fn date_from_day_of_year(
  year: i32,
  day_of_year: u32
) -> Option<NaiveDate> {
  if day_of_year == 0
    || day_of_year > days_in_year(year)
  {
    return None;
  }

  jan_first(year).checked_add_signed(
    Duration::days(
      i64::from(day_of_year) - 1
    )
  )
}

#[must_use]
pub fn day_of_year(
  date: NaiveDate
) -> u32 {
  date.ordinal()
}

/// Position of `date` within its week
/// row, 0..=6. Monday start follows the
/// ISO numbering shifted down by one,
/// so Monday is 0 and Sunday is 6.
#[must_use]
pub fn weekday_offset(
  date: NaiveDate,
  week_start: WeekStart
) -> u32 {
  let weekday = date.weekday();
  match week_start {
    | WeekStart::Sunday => {
      weekday.num_days_from_sunday()
    }
    | WeekStart::Monday => {
      weekday.number_from_monday() - 1
    }
  }
}

/// 1-indexed week column holding
/// `day_of_year` when Jan 1 sits at
/// `first_day_offset` in the first week.
#[must_use]
pub fn start_column_for_day(
  day_of_year: u32,
  first_day_offset: u32
) -> u32 {
  (day_of_year.saturating_sub(1)
    + first_day_offset)
    / DAYS_PER_WEEK
    + 1
}

#[must_use]
pub fn first_day_offset(
  year: i32,
  week_start: WeekStart
) -> u32 {
  weekday_offset(
    jan_first(year),
    week_start
  )
}

#[must_use]
pub fn total_columns(
  year: i32,
  week_start: WeekStart
) -> u32 {
  (days_in_year(year)
    + first_day_offset(year, week_start))
  .div_ceil(DAYS_PER_WEEK)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0)
      || year % 400 == 0
  }

  #[test]
  fn days_in_year_matches_gregorian_rule(
  ) {
    for year in 1583..=2400 {
      let expected =
        if gregorian_leap(year) {
          366
        } else {
          365
        };
      assert_eq!(
        days_in_year(year),
        expected,
        "year {year}"
      );
    }
    assert_eq!(days_in_year(1900), 365);
    assert_eq!(days_in_year(2000), 366);
  }

  #[test]
  fn days_in_month_handles_february() {
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2025, 1), 28);
    assert_eq!(days_in_month(2025, 0), 31);
    assert_eq!(days_in_month(2025, 3), 30);
    assert_eq!(days_in_month(2025, 11), 31);

    let total: u32 = (0..MONTHS_PER_YEAR)
      .map(|month| {
        days_in_month(2024, month)
      })
      .sum();
    assert_eq!(total, 366);
  }

  #[test]
  fn days_before_month_accumulates() {
    assert_eq!(days_before_month(2025, 0), 0);
    assert_eq!(days_before_month(2025, 1), 31);
    assert_eq!(days_before_month(2025, 2), 59);
    assert_eq!(days_before_month(2024, 2), 60);
    assert_eq!(
      days_before_month(2024, 11),
      335
    );
  }

  #[test]
  fn day_of_year_round_trips() {
    for year in [1999, 2000, 2023, 2024, 2100]
    {
      for day in 1..=days_in_year(year) {
        let date =
          date_from_day_of_year(year, day)
            .expect("day within year");
        assert_eq!(date.year(), year);
        assert_eq!(day_of_year(date), day);
      }
    }
  }

  #[test]
  fn date_from_day_of_year_rejects_out_of_range(
  ) {
    assert_eq!(
      date_from_day_of_year(2025, 0),
      None
    );
    assert_eq!(
      date_from_day_of_year(2025, 366),
      None
    );
    assert_eq!(
      date_from_day_of_year(2024, 366),
      NaiveDate::from_ymd_opt(2024, 12, 31)
    );
  }

  #[test]
  fn weekday_offset_follows_week_start() {
    // 2024-01-01 is a Monday.
    let monday =
      NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid date");
    assert_eq!(
      weekday_offset(
        monday,
        WeekStart::Sunday
      ),
      1
    );
    assert_eq!(
      weekday_offset(
        monday,
        WeekStart::Monday
      ),
      0
    );

    let sunday =
      NaiveDate::from_ymd_opt(2024, 1, 7)
        .expect("valid date");
    assert_eq!(
      weekday_offset(
        sunday,
        WeekStart::Sunday
      ),
      0
    );
    assert_eq!(
      weekday_offset(
        sunday,
        WeekStart::Monday
      ),
      6
    );
  }

  #[test]
  fn start_column_examples() {
    assert_eq!(start_column_for_day(1, 0), 1);
    assert_eq!(start_column_for_day(7, 0), 1);
    assert_eq!(start_column_for_day(8, 0), 2);
    assert_eq!(start_column_for_day(1, 6), 1);
    assert_eq!(start_column_for_day(2, 6), 2);
  }

  #[test]
  fn start_column_steps_once_per_week() {
    for offset in 0..DAYS_PER_WEEK {
      let mut previous =
        start_column_for_day(1, offset);
      for day in 2..=366 {
        let column =
          start_column_for_day(day, offset);
        assert!(column >= previous);
        assert_eq!(
          start_column_for_day(
            day + 7,
            offset
          ),
          column + 1
        );
        previous = column;
      }
    }
  }

  #[test]
  fn leap_year_sunday_start() {
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(
      first_day_offset(
        2024,
        WeekStart::Sunday
      ),
      1
    );
    assert_eq!(
      total_columns(
        2024,
        WeekStart::Sunday
      ),
      53
    );
  }

  #[test]
  fn common_year_monday_start() {
    // 2025-01-01 is a Wednesday.
    assert_eq!(days_in_year(2025), 365);
    assert_eq!(
      first_day_offset(
        2025,
        WeekStart::Monday
      ),
      2
    );
    assert_eq!(
      total_columns(
        2025,
        WeekStart::Monday
      ),
      53
    );
  }

  #[test]
  fn offset_stays_within_week() {
    for year in 1990..=2060 {
      for week_start in [
        WeekStart::Sunday,
        WeekStart::Monday
      ] {
        let offset =
          first_day_offset(year, week_start);
        assert!(offset <= 6);
        let columns =
          total_columns(year, week_start);
        assert!((53..=54).contains(&columns));
      }
    }
  }
}
