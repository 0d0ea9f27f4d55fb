mod defaults;
mod heatmap;

pub use defaults::{
  DefaultDayCell,
  DefaultDayCellProps,
  DefaultMonthLabel,
  DefaultMonthLabelProps,
  DefaultWeekdayLabel,
  DefaultWeekdayLabelProps
};
pub use heatgrid_shared as shared;
pub use heatmap::{
  YearHeatmap,
  YearHeatmapProps
};
