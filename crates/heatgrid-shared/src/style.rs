//! Inline CSS for the grid skeleton,
//! shared by the static HTML renderer
//! and the Yew component.

use crate::options::HeatmapOptions;
use crate::types::{
  DayCell,
  MonthLabel,
  WeekdayLabel
};

pub fn container(
  options: &HeatmapOptions
) -> String {
  format!(
    "display:flex;gap:{}px;",
    options.container_gap
  )
}

pub fn weekday_column(
  options: &HeatmapOptions
) -> String {
  format!(
    "display:flex;flex-direction:column;\
     gap:{}px;",
    options.gap
  )
}

/// Keeps weekday labels level with the
/// day rows under the month row.
pub fn weekday_spacer(
  options: &HeatmapOptions
) -> String {
  format!(
    "height:{}px;",
    options.cell_size
      + options.month_label_margin_bottom
  )
}

pub fn month_row(
  options: &HeatmapOptions,
  columns: u32
) -> String {
  format!(
    "display:grid;grid-template-columns:\
     repeat({columns},{size}px);\
     column-gap:{gap}px;\
     margin-bottom:{margin}px;",
    size = options.cell_size,
    gap = options.gap,
    margin =
      options.month_label_margin_bottom
  )
}

pub fn month_slot(
  label: &MonthLabel
) -> String {
  format!(
    "grid-column:{} / span {};",
    label.start_column, label.span
  )
}

pub fn day_grid(
  options: &HeatmapOptions,
  columns: u32
) -> String {
  format!(
    "display:grid;grid-template-rows:\
     repeat(7,{size}px);\
     grid-template-columns:repeat(\
     {columns},{size}px);\
     grid-auto-flow:column;gap:{gap}px;",
    size = options.cell_size,
    gap = options.gap
  )
}

pub fn day_cell(
  cell: &DayCell,
  options: &HeatmapOptions
) -> String {
  let size = options.cell_size;
  if cell.is_empty {
    format!(
      "width:{size}px;height:{size}px;\
       visibility:hidden;"
    )
  } else {
    format!(
      "width:{size}px;height:{size}px;\
       border-radius:2px;\
       background:#ebedf0;"
    )
  }
}

pub fn month_label(
  _label: &MonthLabel,
  options: &HeatmapOptions
) -> String {
  format!(
    "display:block;height:{size}px;\
     line-height:{size}px;\
     font-size:12px;",
    size = options.cell_size
  )
}

/// Caller overlay goes last so it wins.
pub fn weekday_label(
  label: &WeekdayLabel,
  options: &HeatmapOptions
) -> String {
  format!(
    "height:{}px;display:flex;\
     align-items:center;\
     justify-content:{};\
     font-size:12px;{}",
    options.cell_size,
    label.align.as_css(),
    options
      .weekday_label_style
      .as_deref()
      .unwrap_or_default()
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::LabelAlign;

  #[test]
  fn spacer_adds_month_margin() {
    let options = HeatmapOptions {
      cell_size: 10,
      month_label_margin_bottom: 6,
      ..HeatmapOptions::default()
    };
    assert_eq!(
      weekday_spacer(&options),
      "height:16px;"
    );
  }

  #[test]
  fn grids_size_columns_from_options() {
    let options =
      HeatmapOptions::default();
    assert_eq!(
      day_grid(&options, 53),
      "display:grid;grid-template-rows:\
       repeat(7,16px);\
       grid-template-columns:repeat(53,\
       16px);grid-auto-flow:column;\
       gap:4px;"
    );
    assert!(
      month_row(&options, 53)
        .contains("margin-bottom:4px;")
    );
  }

  #[test]
  fn placeholders_are_hidden() {
    let options =
      HeatmapOptions::default();
    let cell = DayCell::placeholder(0, 0);
    assert!(
      day_cell(&cell, &options)
        .contains("visibility:hidden;")
    );
  }

  #[test]
  fn weekday_overlay_is_appended() {
    let options = HeatmapOptions {
      weekday_label_style: Some(
        "color:red;".to_string()
      ),
      ..HeatmapOptions::default()
    };
    let label = WeekdayLabel {
      index: 0,
      label: "Sun".to_string(),
      align: LabelAlign::Center
    };
    let style =
      weekday_label(&label, &options);
    assert!(
      style.contains(
        "justify-content:center;"
      )
    );
    assert!(style.ends_with("color:red;"));
  }
}
