use heatgrid_shared::options::{
  DEFAULT_CELL_SIZE,
  DEFAULT_CONTAINER_GAP,
  DEFAULT_GAP,
  DEFAULT_MONTH_LABEL_MARGIN_BOTTOM,
  DEFAULT_YEAR
};
use heatgrid_shared::{
  DayCell,
  HeatmapOptions,
  LabelAlign,
  MonthLabel,
  WeekStart,
  WeekdayLabel,
  style
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::defaults::{
  DefaultDayCell,
  DefaultMonthLabel,
  DefaultWeekdayLabel
};

#[derive(Properties, PartialEq)]
pub struct YearHeatmapProps {
  #[prop_or(DEFAULT_YEAR)]
  pub year: i32,
  #[prop_or_default]
  pub week_start: WeekStart,
  #[prop_or(DEFAULT_CELL_SIZE)]
  pub cell_size: u32,
  #[prop_or(DEFAULT_GAP)]
  pub gap: u32,
  #[prop_or(DEFAULT_CONTAINER_GAP)]
  pub container_gap: u32,
  #[prop_or_default]
  pub weekday_label_layout: LabelAlign,
  #[prop_or_default]
  pub weekday_label_style: Option<String>,
  #[prop_or(
    DEFAULT_MONTH_LABEL_MARGIN_BOTTOM
  )]
  pub month_label_margin_bottom: u32,
  #[prop_or_default]
  pub render_day:
    Option<Callback<DayCell, Html>>,
  #[prop_or_default]
  pub render_month:
    Option<Callback<MonthLabel, Html>>,
  #[prop_or_default]
  pub render_weekday:
    Option<Callback<WeekdayLabel, Html>>
}

impl YearHeatmapProps {
  pub fn options(&self) -> HeatmapOptions {
    let mut options = HeatmapOptions {
      year: self.year,
      week_start: self.week_start,
      cell_size: self.cell_size,
      gap: self.gap,
      container_gap: self.container_gap,
      weekday_label_layout: self
        .weekday_label_layout,
      weekday_label_style: self
        .weekday_label_style
        .clone(),
      month_label_margin_bottom: self
        .month_label_margin_bottom
    };
    options.sanitize();
    options
  }
}

fn render_day(
  props: &YearHeatmapProps,
  options: &HeatmapOptions,
  cell: DayCell
) -> Html {
  match &props.render_day {
    | Some(render) => render.emit(cell),
    | None => {
      html! {
          <DefaultDayCell cell={cell} options={options.clone()} />
      }
    }
  }
}

fn render_month(
  props: &YearHeatmapProps,
  options: &HeatmapOptions,
  label: MonthLabel
) -> Html {
  match &props.render_month {
    | Some(render) => render.emit(label),
    | None => {
      html! {
          <DefaultMonthLabel label={label} options={options.clone()} />
      }
    }
  }
}

fn render_weekday(
  props: &YearHeatmapProps,
  options: &HeatmapOptions,
  label: WeekdayLabel
) -> Html {
  match &props.render_weekday {
    | Some(render) => render.emit(label),
    | None => {
      html! {
          <DefaultWeekdayLabel label={label} options={options.clone()} />
      }
    }
  }
}

/// Year of days laid out in week
/// columns, with month labels above and
/// weekday labels on the left.
#[function_component(YearHeatmap)]
pub fn year_heatmap(
  props: &YearHeatmapProps
) -> Html {
  let options = props.options();
  let grid = options.grid();
  let columns = grid.total_columns;

  tracing::debug!(
    year = grid.year,
    week_start = %grid.week_start,
    first_day_offset = grid.first_day_offset,
    total_columns = columns,
    "rendering year heatmap"
  );

  html! {
      <div class="heatgrid" style={style::container(&options)}>
          <div class="heatgrid-weekdays" style={style::weekday_column(&options)}>
              <div class="heatgrid-spacer" style={style::weekday_spacer(&options)}></div>
              {
                  for grid
                      .weekday_labels(options.weekday_label_layout)
                      .into_iter()
                      .map(|label| render_weekday(props, &options, label))
              }
          </div>
          <div class="heatgrid-main">
              <div class="heatgrid-months" style={style::month_row(&options, columns)}>
                  {
                      for grid.month_labels().into_iter().map(|label| {
                          let key = label.index;
                          let slot = style::month_slot(&label);
                          html! {
                              <div key={key} style={slot}>
                                  { render_month(props, &options, label) }
                              </div>
                          }
                      })
                  }
              </div>
              <div class="heatgrid-days" style={style::day_grid(&options, columns)}>
                  { for grid.cells().map(|cell| render_day(props, &options, cell)) }
              </div>
          </div>
      </div>
  }
}
