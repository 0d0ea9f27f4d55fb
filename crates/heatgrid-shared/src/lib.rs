pub mod geometry;
pub mod grid;
pub mod options;
pub mod style;
pub mod types;

pub use grid::{
  GridSnapshot,
  YearGrid
};
pub use options::HeatmapOptions;
pub use types::{
  DayCell,
  LabelAlign,
  MonthLabel,
  WeekStart,
  WeekdayLabel
};
