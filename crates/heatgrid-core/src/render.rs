use anyhow::Context;
use clap::ValueEnum;
use heatgrid_shared::{DayCell, HeatmapOptions, LabelAlign, MonthLabel, WeekdayLabel, YearGrid, style};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns per week: one glyph plus a space.
const TEXT_CELL_WIDTH: usize = 2;
const TEXT_GUTTER: &str = "  ";
const TEXT_DAY_GLYPH: &str = "■";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
    Json,
}

pub type DayHook<'a> = Box<dyn Fn(&DayCell, &HeatmapOptions) -> String + 'a>;
pub type MonthHook<'a> = Box<dyn Fn(&MonthLabel, &HeatmapOptions) -> String + 'a>;
pub type WeekdayHook<'a> = Box<dyn Fn(&WeekdayLabel, &HeatmapOptions) -> String + 'a>;

/// Optional per-element renderers. A missing hook falls back to the
/// built-in renderer for the output format. Hook output is inserted as-is,
/// so it must already be in the target format.
#[derive(Default)]
pub struct RenderHooks<'a> {
    day: Option<DayHook<'a>>,
    month: Option<MonthHook<'a>>,
    weekday: Option<WeekdayHook<'a>>,
}

impl<'a> RenderHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, hook: impl Fn(&DayCell, &HeatmapOptions) -> String + 'a) -> Self {
        self.day = Some(Box::new(hook));
        self
    }

    pub fn with_month(
        mut self,
        hook: impl Fn(&MonthLabel, &HeatmapOptions) -> String + 'a,
    ) -> Self {
        self.month = Some(Box::new(hook));
        self
    }

    pub fn with_weekday(
        mut self,
        hook: impl Fn(&WeekdayLabel, &HeatmapOptions) -> String + 'a,
    ) -> Self {
        self.weekday = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for RenderHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderHooks")
            .field("day", &self.day.is_some())
            .field("month", &self.month.is_some())
            .field("weekday", &self.weekday.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct Renderer<'a> {
    options: HeatmapOptions,
    hooks: RenderHooks<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(options: HeatmapOptions) -> Self {
        Self {
            options,
            hooks: RenderHooks::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: RenderHooks<'a>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }

    #[tracing::instrument(skip(self), fields(year = self.options.year))]
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        let grid = self.options.grid();
        debug!(
            week_start = %grid.week_start,
            first_day_offset = grid.first_day_offset,
            total_columns = grid.total_columns,
            "rendering year grid"
        );

        match format {
            OutputFormat::Html => Ok(self.render_html(&grid)),
            OutputFormat::Text => Ok(self.render_text(&grid)),
            OutputFormat::Json => self.render_json(&grid),
        }
    }

    fn day(&self, cell: &DayCell, default: fn(&DayCell, &HeatmapOptions) -> String) -> String {
        match &self.hooks.day {
            Some(hook) => hook(cell, &self.options),
            None => default(cell, &self.options),
        }
    }

    fn month(
        &self,
        label: &MonthLabel,
        default: fn(&MonthLabel, &HeatmapOptions) -> String,
    ) -> String {
        match &self.hooks.month {
            Some(hook) => hook(label, &self.options),
            None => default(label, &self.options),
        }
    }

    fn weekday(
        &self,
        label: &WeekdayLabel,
        default: fn(&WeekdayLabel, &HeatmapOptions) -> String,
    ) -> String {
        match &self.hooks.weekday {
            Some(hook) => hook(label, &self.options),
            None => default(label, &self.options),
        }
    }

    fn render_html(&self, grid: &YearGrid) -> String {
        let opts = &self.options;
        let columns = grid.total_columns;
        let mut out = String::new();

        out.push_str(&open_div("heatgrid", &style::container(opts)));
        out.push_str(&open_div("heatgrid-weekdays", &style::weekday_column(opts)));
        out.push_str(&open_div("heatgrid-spacer", &style::weekday_spacer(opts)));
        out.push_str("</div>\n");
        for label in grid.weekday_labels(opts.weekday_label_layout) {
            out.push_str(&self.weekday(&label, default_html_weekday));
            out.push('\n');
        }
        out.push_str("</div>\n");

        out.push_str("<div class=\"heatgrid-main\">\n");
        out.push_str(&open_div("heatgrid-months", &style::month_row(opts, columns)));
        for label in grid.month_labels() {
            out.push_str(&format!(
                "<div style=\"{}\">{}</div>\n",
                style::month_slot(&label),
                self.month(&label, default_html_month)
            ));
        }
        out.push_str("</div>\n");

        out.push_str(&open_div("heatgrid-days", &style::day_grid(opts, columns)));
        for cell in grid.cells() {
            out.push_str(&self.day(&cell, default_html_day));
            out.push('\n');
        }
        out.push_str("</div>\n</div>\n</div>\n");

        out
    }

    fn render_text(&self, grid: &YearGrid) -> String {
        let weekdays = grid
            .weekday_labels(self.options.weekday_label_layout)
            .iter()
            .map(|label| self.weekday(label, default_text_weekday))
            .collect::<Vec<_>>();
        let label_width = weekdays
            .iter()
            .map(|label| UnicodeWidthStr::width(label.as_str()))
            .max()
            .unwrap_or(0);

        let mut month_line = " ".repeat(label_width);
        month_line.push_str(TEXT_GUTTER);
        let mut used = 0_usize;
        for label in grid.month_labels() {
            let target = (label.start_column.saturating_sub(1) as usize) * TEXT_CELL_WIDTH;
            if used < target {
                month_line.push_str(&" ".repeat(target - used));
                used = target;
            }
            let room = (label.span as usize * TEXT_CELL_WIDTH).saturating_sub(1);
            let text = truncate_to_width(&self.month(&label, default_text_month), room);
            used += UnicodeWidthStr::width(text.as_str());
            month_line.push_str(&text);
        }

        let columns = grid
            .columns()
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|cell| self.day(cell, default_text_day))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut lines = vec![month_line.trim_end().to_string()];
        for (row, weekday) in weekdays.iter().enumerate() {
            let mut line = pad_to_width(weekday, label_width, self.options.weekday_label_layout);
            line.push_str(TEXT_GUTTER);
            for column in &columns {
                if let Some(cell) = column.get(row) {
                    line.push_str(&pad_to_width(cell, TEXT_CELL_WIDTH - 1, LabelAlign::Start));
                    line.push(' ');
                }
            }
            lines.push(line.trim_end().to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn render_json(&self, grid: &YearGrid) -> anyhow::Result<String> {
        let snapshot = grid.snapshot(self.options.weekday_label_layout);
        serde_json::to_string_pretty(&snapshot).context("failed to serialize grid snapshot")
    }
}

pub fn default_html_day(cell: &DayCell, options: &HeatmapOptions) -> String {
    let style = escape_html(&style::day_cell(cell, options));
    match (cell.date, cell.day_of_year) {
        (Some(date), Some(day)) if !cell.is_empty => format!(
            "<div class=\"heatgrid-day\" data-date=\"{date}\" data-day=\"{day}\" title=\"{date}\" style=\"{style}\"></div>"
        ),
        _ => format!("<div class=\"heatgrid-day empty\" style=\"{style}\"></div>"),
    }
}

pub fn default_html_month(label: &MonthLabel, options: &HeatmapOptions) -> String {
    format!(
        "<span class=\"heatgrid-month\" style=\"{}\">{}</span>",
        escape_html(&style::month_label(label, options)),
        escape_html(&label.label),
    )
}

pub fn default_html_weekday(label: &WeekdayLabel, options: &HeatmapOptions) -> String {
    format!(
        "<div class=\"heatgrid-weekday\" style=\"{}\">{}</div>",
        escape_html(&style::weekday_label(label, options)),
        escape_html(&label.label),
    )
}

pub fn default_text_day(cell: &DayCell, _options: &HeatmapOptions) -> String {
    if cell.is_empty {
        " ".to_string()
    } else {
        TEXT_DAY_GLYPH.to_string()
    }
}

pub fn default_text_month(label: &MonthLabel, _options: &HeatmapOptions) -> String {
    label.label.clone()
}

pub fn default_text_weekday(label: &WeekdayLabel, _options: &HeatmapOptions) -> String {
    label.label.clone()
}

fn open_div(class: &str, style: &str) -> String {
    format!("<div class=\"{class}\" style=\"{}\">\n", escape_html(style))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

fn pad_to_width(text: &str, width: usize, align: LabelAlign) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    let (left, right) = match align {
        LabelAlign::Start => (0, fill),
        LabelAlign::Center => (fill / 2, fill - fill / 2),
        LabelAlign::End => (fill, 0),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::{LabelAlign, escape_html, pad_to_width, truncate_to_width};

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("Mo", 4, LabelAlign::Start), "Mo  ");
        assert_eq!(pad_to_width("Mo", 4, LabelAlign::End), "  Mo");
        assert_eq!(pad_to_width("Mo", 5, LabelAlign::Center), " Mo  ");
        assert_eq!(pad_to_width("月", 3, LabelAlign::Start), "月 ");
    }

    #[test]
    fn truncates_wide_characters_whole() {
        assert_eq!(truncate_to_width("January", 3), "Jan");
        assert_eq!(truncate_to_width("一月", 3), "一");
        assert_eq!(truncate_to_width("Dec", 0), "");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }
}
