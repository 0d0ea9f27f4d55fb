use serde::{
  Deserialize,
  Serialize
};

use crate::grid::YearGrid;
use crate::types::{
  LabelAlign,
  WeekStart
};

pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_CELL_SIZE: u32 = 16;
pub const DEFAULT_GAP: u32 = 4;
pub const DEFAULT_CONTAINER_GAP: u32 = 18;
pub const DEFAULT_MONTH_LABEL_MARGIN_BOTTOM:
  u32 = 4;

fn default_year() -> i32 {
  DEFAULT_YEAR
}

fn default_cell_size() -> u32 {
  DEFAULT_CELL_SIZE
}

fn default_gap() -> u32 {
  DEFAULT_GAP
}

fn default_container_gap() -> u32 {
  DEFAULT_CONTAINER_GAP
}

fn default_month_label_margin_bottom()
-> u32 {
  DEFAULT_MONTH_LABEL_MARGIN_BOTTOM
}

/// Layout knobs shared by every
/// renderer. Sizes are in pixels.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct HeatmapOptions {
  #[serde(default = "default_year")]
  pub year: i32,
  pub week_start: WeekStart,
  #[serde(default = "default_cell_size")]
  pub cell_size: u32,
  #[serde(default = "default_gap")]
  pub gap: u32,
  #[serde(
    default = "default_container_gap"
  )]
  pub container_gap: u32,
  pub weekday_label_layout: LabelAlign,
  pub weekday_label_style:
    Option<String>,
  #[serde(
    default = "default_month_label_margin_bottom"
  )]
  pub month_label_margin_bottom: u32
}

impl Default for HeatmapOptions {
  fn default() -> Self {
    Self {
      year: default_year(),
      week_start: WeekStart::default(),
      cell_size: default_cell_size(),
      gap: default_gap(),
      container_gap:
        default_container_gap(),
      weekday_label_layout:
        LabelAlign::default(),
      weekday_label_style: None,
      month_label_margin_bottom:
        default_month_label_margin_bottom(
        )
    }
  }
}

impl HeatmapOptions {
  pub fn grid(&self) -> YearGrid {
    YearGrid::new(
      self.year,
      self.week_start
    )
  }

  /// Applies one `key=value` override.
  /// Dashes and underscores are
  /// interchangeable in `key`.
  pub fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), String> {
    let value = value.trim();
    match key
      .trim()
      .replace('-', "_")
      .as_str()
    {
      | "year" => {
        self.year =
          parse_number(key, value)?;
      }
      | "week_start" => {
        self.week_start = value.parse()?;
      }
      | "cell_size" => {
        self.cell_size =
          parse_number(key, value)?;
      }
      | "gap" => {
        self.gap =
          parse_number(key, value)?;
      }
      | "container_gap" => {
        self.container_gap =
          parse_number(key, value)?;
      }
      | "weekday_label_layout" => {
        self.weekday_label_layout =
          value.parse()?;
      }
      | "weekday_label_style" => {
        self.weekday_label_style =
          if value.is_empty() {
            None
          } else {
            Some(value.to_string())
          };
      }
      | "month_label_margin_bottom" => {
        self.month_label_margin_bottom =
          parse_number(key, value)?;
      }
      | other => {
        return Err(format!(
          "unknown option '{other}'"
        ));
      }
    }
    Ok(())
  }

  /// Restores values a renderer cannot
  /// draw with.
  pub fn sanitize(&mut self) {
    if self.cell_size == 0 {
      tracing::warn!(
        "cell_size must be positive; \
         using default"
      );
      self.cell_size = default_cell_size();
    }

    if self
      .weekday_label_style
      .as_deref()
      .is_some_and(|style| {
        style.trim().is_empty()
      })
    {
      self.weekday_label_style = None;
    }
  }
}

fn parse_number<T>(
  key: &str,
  value: &str
) -> Result<T, String>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display
{
  value.parse::<T>().map_err(|error| {
    format!(
      "invalid value '{value}' for \
       {key}: {error}"
    )
  })
}
