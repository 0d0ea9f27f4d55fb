pub mod cli;
pub mod config;
pub mod render;

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};

pub use heatgrid_shared as shared;

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    format = ?cli.format,
    "starting heatgrid"
  );

  let mut cfg = config::Config::load(
    cli.config.as_deref()
  )?;
  cfg.apply_overrides(
    cli
      .overrides
      .into_iter()
      .map(|kv| (kv.key, kv.value))
  )?;
  if let Some(year) = cli.year {
    cfg.options.year = year;
  }
  if let Some(week_start) =
    cli.week_start
  {
    cfg.options.week_start = week_start;
  }
  cfg.options.sanitize();
  debug!(options = ?cfg.options, "resolved options");

  let rendered =
    render::Renderer::new(cfg.options)
      .render(cli.format)?;

  write_output(
    cli.output.as_deref(),
    &rendered
  )?;

  info!("done");
  Ok(())
}

fn write_output(
  path: Option<&Path>,
  rendered: &str
) -> anyhow::Result<()> {
  match path {
    | Some(path) => {
      fs::write(path, rendered)
        .with_context(|| {
          format!(
            "failed to write {}",
            path.display()
          )
        })?;
      info!(output = %path.display(), "wrote heatmap");
    }
    | None => {
      let mut out =
        std::io::stdout().lock();
      out
        .write_all(rendered.as_bytes())
        .context(
          "failed to write heatmap to \
           stdout"
        )?;
      out.flush()?;
    }
  }
  Ok(())
}
