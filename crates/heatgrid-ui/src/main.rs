use chrono::{
  Datelike,
  Weekday
};
use heatgrid_shared::{
  DayCell,
  HeatmapOptions,
  style
};
use heatgrid_ui::YearHeatmap;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};

const HEATGRID_CONFIG_TOML: &str =
  include_str!("../heatgrid.toml");

fn load_options() -> HeatmapOptions {
  match toml::from_str::<HeatmapOptions>(
    HEATGRID_CONFIG_TOML
  ) {
    | Ok(mut options) => {
      options.sanitize();
      tracing::info!(
        year = options.year,
        week_start = %options.week_start,
        "loaded heatgrid config"
      );
      options
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing heatgrid config; using defaults");
      HeatmapOptions::default()
    }
  }
}

#[function_component(DemoApp)]
fn demo_app() -> Html {
  let options = use_state(load_options);

  let render_day = {
    let options = (*options).clone();
    Callback::from(
      move |cell: DayCell| -> Html {
        let base =
          style::day_cell(&cell, &options);
        let Some(date) = cell.date else {
          return html! {
              <div class="heatgrid-day empty" style={base}></div>
          };
        };

        let weekend = matches!(
          date.weekday(),
          Weekday::Sat | Weekday::Sun
        );
        let style = if weekend {
          format!("{base}background:#9be9a8;")
        } else {
          base
        };
        html! {
            <div class="heatgrid-day" title={date.to_string()} style={style}></div>
        }
      }
    )
  };

  html! {
      <YearHeatmap
          year={options.year}
          week_start={options.week_start}
          cell_size={options.cell_size}
          gap={options.gap}
          container_gap={options.container_gap}
          weekday_label_layout={options.weekday_label_layout}
          weekday_label_style={options.weekday_label_style.clone()}
          month_label_margin_bottom={options.month_label_margin_bottom}
          render_day={render_day}
      />
  }
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!("starting heatgrid demo");

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<DemoApp>::with_root(
    mount
  )
  .render();
}
