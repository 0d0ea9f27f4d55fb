use chrono::{
  Datelike,
  NaiveDate
};
use serde::{
  Deserialize,
  Serialize
};

use crate::geometry::{
  DAYS_PER_WEEK,
  MONTHS_PER_YEAR,
  date_from_day_of_year,
  day_of_year,
  days_before_month,
  days_in_year,
  first_day_offset,
  start_column_for_day
};
use crate::types::{
  DayCell,
  LabelAlign,
  MONTH_LABELS,
  MonthLabel,
  WeekStart,
  WeekdayLabel
};

/// Geometry of one calendar year laid
/// out as week columns of seven rows.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct YearGrid {
  pub year:             i32,
  pub week_start:       WeekStart,
  pub first_day_offset: u32,
  pub days_in_year:     u32,
  pub total_columns:    u32
}

/// Everything a renderer needs for one
/// pass, in render order.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct GridSnapshot {
  pub grid:           YearGrid,
  pub month_labels:   Vec<MonthLabel>,
  pub weekday_labels: Vec<WeekdayLabel>,
  pub cells:          Vec<DayCell>
}

impl YearGrid {
  pub fn new(
    year: i32,
    week_start: WeekStart
  ) -> Self {
    let first_day_offset =
      first_day_offset(year, week_start);
    let days_in_year = days_in_year(year);
    let total_columns = (days_in_year
      + first_day_offset)
      .div_ceil(DAYS_PER_WEEK);

    tracing::trace!(
      year,
      %week_start,
      first_day_offset,
      days_in_year,
      total_columns,
      "computed year grid"
    );

    Self {
      year,
      week_start,
      first_day_offset,
      days_in_year,
      total_columns
    }
  }

  pub fn month_labels(
    &self
  ) -> Vec<MonthLabel> {
    let starts = (0..MONTHS_PER_YEAR)
      .map(|month| {
        start_column_for_day(
          days_before_month(
            self.year, month
          ) + 1,
          self.first_day_offset
        )
      })
      .collect::<Vec<_>>();

    starts
      .iter()
      .enumerate()
      .map(|(index, &start_column)| {
        let next_start = starts
          .get(index + 1)
          .copied()
          .unwrap_or(
            self.total_columns + 1
          );
        MonthLabel {
          index: index as u32,
          label: MONTH_LABELS[index]
            .to_string(),
          start_column,
          span: next_start
            .saturating_sub(start_column)
        }
      })
      .collect()
  }

  pub fn weekday_labels(
    &self,
    align: LabelAlign
  ) -> Vec<WeekdayLabel> {
    self
      .week_start
      .weekday_labels()
      .iter()
      .enumerate()
      .map(|(index, label)| {
        WeekdayLabel {
          index: index as u32,
          label: (*label).to_string(),
          align
        }
      })
      .collect()
  }

  /// Descriptor for the 0-indexed
  /// `(column, row)` slot.
  pub fn cell(
    &self,
    column: u32,
    row: u32
  ) -> DayCell {
    let day = i64::from(column)
      * i64::from(DAYS_PER_WEEK)
      + i64::from(row)
      + 1
      - i64::from(self.first_day_offset);

    if day <= 0
      || day > i64::from(self.days_in_year)
    {
      return DayCell::placeholder(
        column, row
      );
    }

    let day = u32::try_from(day).ok();
    match day.and_then(|day| {
      date_from_day_of_year(self.year, day)
        .map(|date| (day, date))
    }) {
      | Some((day, date)) => {
        DayCell {
          date: Some(date),
          day_of_year: Some(day),
          column,
          row,
          is_empty: false
        }
      }
      | None => {
        DayCell::placeholder(column, row)
      }
    }
  }

  /// All slots, column by column.
  pub fn cells(
    &self
  ) -> impl Iterator<Item = DayCell> {
    let grid = *self;
    (0..grid.total_columns).flat_map(
      move |column| {
        (0..DAYS_PER_WEEK).map(move |row| {
          grid.cell(column, row)
        })
      }
    )
  }

  pub fn columns(
    &self
  ) -> Vec<Vec<DayCell>> {
    (0..self.total_columns)
      .map(|column| {
        (0..DAYS_PER_WEEK)
          .map(|row| self.cell(column, row))
          .collect()
      })
      .collect()
  }

  /// 0-indexed `(column, row)` of
  /// `date`, or `None` when it belongs to
  /// another year.
  pub fn position_of(
    &self,
    date: NaiveDate
  ) -> Option<(u32, u32)> {
    if date.year() != self.year {
      return None;
    }

    let index = day_of_year(date) - 1
      + self.first_day_offset;
    Some((
      index / DAYS_PER_WEEK,
      index % DAYS_PER_WEEK
    ))
  }

  pub fn snapshot(
    &self,
    align: LabelAlign
  ) -> GridSnapshot {
    GridSnapshot {
      grid:           *self,
      month_labels:   self.month_labels(),
      weekday_labels: self
        .weekday_labels(align),
      cells:          self.cells().collect()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_grids() -> Vec<YearGrid> {
    (2019..=2030)
      .flat_map(|year| {
        [
          YearGrid::new(
            year,
            WeekStart::Sunday
          ),
          YearGrid::new(
            year,
            WeekStart::Monday
          )
        ]
      })
      .collect()
  }

  #[test]
  fn month_spans_cover_every_column() {
    for grid in sample_grids() {
      let labels = grid.month_labels();
      assert_eq!(labels.len(), 12);
      assert_eq!(labels[0].start_column, 1);

      let mut expected_start = 1;
      for label in &labels {
        assert_eq!(
          label.start_column,
          expected_start,
          "{} {:?}",
          grid.year,
          grid.week_start
        );
        expected_start += label.span;
      }

      let total: u32 = labels
        .iter()
        .map(|label| label.span)
        .sum();
      assert_eq!(total, grid.total_columns);
    }
  }

  #[test]
  fn leap_year_month_starts() {
    let grid =
      YearGrid::new(2024, WeekStart::Sunday);
    let labels = grid.month_labels();

    assert_eq!(grid.total_columns, 53);
    assert_eq!(labels[0].label, "Jan");
    assert_eq!(labels[0].span, 4);
    // Feb 1 2024 is day 32: (31 + 1) / 7 + 1.
    assert_eq!(labels[1].start_column, 5);
    assert_eq!(labels[11].label, "Dec");
    assert_eq!(
      labels[11].start_column
        + labels[11].span,
      grid.total_columns + 1
    );
  }

  #[test]
  fn every_day_lands_in_one_cell() {
    for grid in sample_grids() {
      let days = grid
        .cells()
        .filter_map(|cell| cell.day_of_year)
        .collect::<Vec<_>>();
      let expected = (1..=grid.days_in_year)
        .collect::<Vec<_>>();
      assert_eq!(days, expected);
    }
  }

  #[test]
  fn placeholders_carry_no_date() {
    let grid =
      YearGrid::new(2025, WeekStart::Monday);
    let cells =
      grid.cells().collect::<Vec<_>>();
    assert_eq!(
      cells.len() as u32,
      grid.total_columns * 7
    );

    for cell in &cells {
      if cell.is_empty {
        assert_eq!(cell.date, None);
        assert_eq!(cell.day_of_year, None);
      } else {
        assert!(cell.date.is_some());
      }
    }

    let leading = cells
      .iter()
      .take_while(|cell| cell.is_empty)
      .count();
    assert_eq!(
      leading as u32,
      grid.first_day_offset
    );
    assert_eq!(
      cells[2].date,
      NaiveDate::from_ymd_opt(2025, 1, 1)
    );
  }

  #[test]
  fn cells_are_column_major() {
    let grid =
      YearGrid::new(2024, WeekStart::Sunday);
    let cells =
      grid.cells().collect::<Vec<_>>();

    assert_eq!(cells[0].column, 0);
    assert_eq!(cells[6].row, 6);
    assert_eq!(cells[7].column, 1);
    assert_eq!(cells[7].row, 0);

    let columns = grid.columns();
    assert_eq!(columns.len(), 53);
    assert_eq!(columns[1][0], cells[7]);
  }

  #[test]
  fn position_of_inverts_cell() {
    for grid in sample_grids() {
      for cell in grid.cells() {
        if let Some(date) = cell.date {
          assert_eq!(
            grid.position_of(date),
            Some((cell.column, cell.row))
          );
        }
      }
    }

    let grid =
      YearGrid::new(2024, WeekStart::Sunday);
    let other = NaiveDate::from_ymd_opt(
      2023, 12, 31
    )
    .expect("valid date");
    assert_eq!(grid.position_of(other), None);
  }

  #[test]
  fn weekday_labels_follow_week_start() {
    let grid =
      YearGrid::new(2025, WeekStart::Monday);
    let labels =
      grid.weekday_labels(LabelAlign::End);

    assert_eq!(labels.len(), 7);
    assert_eq!(labels[0].label, "Mon");
    assert_eq!(labels[6].label, "Sun");
    assert!(labels.iter().all(|label| {
      label.align == LabelAlign::End
    }));
  }

  #[test]
  fn snapshot_is_deterministic() {
    let first =
      YearGrid::new(2024, WeekStart::Monday)
        .snapshot(LabelAlign::Center);
    let second =
      YearGrid::new(2024, WeekStart::Monday)
        .snapshot(LabelAlign::Center);
    assert_eq!(first, second);
    assert_eq!(first.cells.len(), 53 * 7);
  }
}
