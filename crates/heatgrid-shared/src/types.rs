use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

pub const MONTH_LABELS: [&str; 12] = [
  "Jan", "Feb", "Mar", "Apr", "May",
  "Jun", "Jul", "Aug", "Sep", "Oct",
  "Nov", "Dec",
];

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
  #[default]
  Sunday,
  Monday
}

impl WeekStart {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Sunday => "sunday",
      | Self::Monday => "monday"
    }
  }

  /// Weekday abbreviations in row order.
  pub fn weekday_labels(
    self
  ) -> [&'static str; 7] {
    match self {
      | Self::Sunday => {
        [
          "Sun", "Mon", "Tue", "Wed",
          "Thu", "Fri", "Sat",
        ]
      }
      | Self::Monday => {
        [
          "Mon", "Tue", "Wed", "Thu",
          "Fri", "Sat", "Sun",
        ]
      }
    }
  }
}

impl fmt::Display for WeekStart {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for WeekStart {
  type Err = String;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "sunday" | "sun" => {
        Ok(Self::Sunday)
      }
      | "monday" | "mon" => {
        Ok(Self::Monday)
      }
      | other => {
        Err(format!(
          "unknown week start \
           '{other}' (expected sunday \
           or monday)"
        ))
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
  #[default]
  Start,
  Center,
  End
}

impl LabelAlign {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Start => "start",
      | Self::Center => "center",
      | Self::End => "end"
    }
  }

  /// Value for a flexbox
  /// `justify-content`.
  pub fn as_css(self) -> &'static str {
    match self {
      | Self::Start => "flex-start",
      | Self::Center => "center",
      | Self::End => "flex-end"
    }
  }
}

impl FromStr for LabelAlign {
  type Err = String;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "start" => Ok(Self::Start),
      | "center" => Ok(Self::Center),
      | "end" => Ok(Self::End),
      | other => {
        Err(format!(
          "unknown label layout \
           '{other}' (expected start, \
           center or end)"
        ))
      }
    }
  }
}

/// One slot of the day grid. Slots
/// before Jan 1 or after Dec 31 are
/// placeholders with no date.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DayCell {
  pub date:        Option<NaiveDate>,
  pub day_of_year: Option<u32>,
  pub column:      u32,
  pub row:         u32,
  pub is_empty:    bool
}

impl DayCell {
  pub fn placeholder(
    column: u32,
    row: u32
  ) -> Self {
    Self {
      date: None,
      day_of_year: None,
      column,
      row,
      is_empty: true
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MonthLabel {
  pub index:        u32,
  pub label:        String,
  /// 1-indexed, as used by CSS grid
  /// lines.
  pub start_column: u32,
  pub span:         u32
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct WeekdayLabel {
  pub index: u32,
  pub label: String,
  pub align: LabelAlign
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn week_start_parses_names() {
    assert_eq!(
      "Sunday".parse::<WeekStart>(),
      Ok(WeekStart::Sunday)
    );
    assert_eq!(
      " mon ".parse::<WeekStart>(),
      Ok(WeekStart::Monday)
    );
    assert!(
      "tuesday"
        .parse::<WeekStart>()
        .is_err()
    );
  }

  #[test]
  fn week_start_serializes_lowercase() {
    let json =
      serde_json::to_string(
        &WeekStart::Monday
      )
      .expect("serialize");
    assert_eq!(json, "\"monday\"");

    let parsed: WeekStart =
      serde_json::from_str("\"sunday\"")
        .expect("deserialize");
    assert_eq!(parsed, WeekStart::Sunday);
  }

  #[test]
  fn weekday_labels_rotate_with_week_start(
  ) {
    assert_eq!(
      WeekStart::Sunday.weekday_labels()
        [0],
      "Sun"
    );
    assert_eq!(
      WeekStart::Monday.weekday_labels()
        [6],
      "Sun"
    );
  }

  #[test]
  fn label_align_maps_to_flex() {
    assert_eq!(
      "CENTER".parse::<LabelAlign>(),
      Ok(LabelAlign::Center)
    );
    assert_eq!(
      LabelAlign::End.as_css(),
      "flex-end"
    );
    assert!(
      "middle"
        .parse::<LabelAlign>()
        .is_err()
    );
  }

  #[test]
  fn placeholder_has_no_date() {
    let cell = DayCell::placeholder(0, 3);
    assert!(cell.is_empty);
    assert_eq!(cell.date, None);
    assert_eq!(cell.day_of_year, None);
  }
}
