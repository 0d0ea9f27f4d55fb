use heatgrid_shared::{
  DayCell,
  HeatmapOptions,
  MonthLabel,
  WeekdayLabel,
  style
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DefaultDayCellProps {
  pub cell:    DayCell,
  pub options: HeatmapOptions
}

/// Placeholders keep their slot in the
/// grid but are not painted.
#[function_component(DefaultDayCell)]
pub fn default_day_cell(
  props: &DefaultDayCellProps
) -> Html {
  let cell = &props.cell;
  let style =
    style::day_cell(cell, &props.options);

  match cell.date {
    | Some(date) if !cell.is_empty => {
      let day = cell
        .day_of_year
        .unwrap_or_default()
        .to_string();
      html! {
          <div
              class="heatgrid-day"
              data-date={date.to_string()}
              data-day={day}
              title={date.format("%Y-%m-%d").to_string()}
              style={style}
          ></div>
      }
    }
    | _ => {
      html! {
          <div class={classes!("heatgrid-day", "empty")} style={style}></div>
      }
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct DefaultMonthLabelProps {
  pub label:   MonthLabel,
  pub options: HeatmapOptions
}

#[function_component(DefaultMonthLabel)]
pub fn default_month_label(
  props: &DefaultMonthLabelProps
) -> Html {
  html! {
      <span class="heatgrid-month" style={style::month_label(&props.label, &props.options)}>
          { props.label.label.clone() }
      </span>
  }
}

#[derive(Properties, PartialEq)]
pub struct DefaultWeekdayLabelProps {
  pub label:   WeekdayLabel,
  pub options: HeatmapOptions
}

#[function_component(DefaultWeekdayLabel)]
pub fn default_weekday_label(
  props: &DefaultWeekdayLabelProps
) -> Html {
  html! {
      <div class="heatgrid-weekday" style={style::weekday_label(&props.label, &props.options)}>
          { props.label.label.clone() }
      </div>
  }
}
