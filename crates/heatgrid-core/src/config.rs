use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use heatgrid_shared::HeatmapOptions;
use tracing::{
  debug,
  info,
  trace,
  warn
};

pub const CONFIG_FILE_NAME: &str =
  "heatgrid.toml";
pub const CONFIG_ENV_VAR: &str =
  "HEATGRID_CONFIG";

#[derive(Debug, Clone)]
pub struct Config {
  pub options:      HeatmapOptions,
  pub loaded_files: Vec<PathBuf>
}

impl Config {
  #[tracing::instrument(skip(
    config_override
  ))]
  pub fn load(
    config_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config {
      options:      HeatmapOptions::default(
      ),
      loaded_files: vec![]
    };

    match resolve_config_path(
      config_override
    ) {
      | Some(path) => {
        info!(config = %path.display(), "loading heatgrid config");
        cfg.load_file(&path)?;
      }
      | None => {
        warn!(
          "no heatgrid config found; \
           using defaults"
        );
      }
    }

    Ok(cfg)
  }

  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let options =
      toml::from_str::<HeatmapOptions>(
        text
      )
      .context(
        "failed to parse heatgrid \
         config"
      )?;
    Ok(Config {
      options,
      loaded_files: vec![]
    })
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      debug!(key = %k, value = %v, "applying override");
      self
        .options
        .set(&k, &v)
        .map_err(|err| anyhow!(err))
        .with_context(|| {
          format!(
            "invalid override {k}={v}"
          )
        })?;
    }
    Ok(())
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    self.options =
      toml::from_str::<HeatmapOptions>(
        &text
      )
      .with_context(|| {
        format!(
          "failed to parse {}",
          path.display()
        )
      })?;
    trace!(options = ?self.options, "loaded config options");

    self.loaded_files.push(path);
    Ok(())
  }
}

#[tracing::instrument(skip(
  override_path
))]
fn resolve_config_path(
  override_path: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) =
    std::env::var(CONFIG_ENV_VAR)
  {
    if env_path.trim().is_empty()
      || env_path == "/dev/null"
    {
      return None;
    }
    return Some(PathBuf::from(
      env_path
    ));
  }

  let candidate = dirs::config_dir()?
    .join("heatgrid")
    .join(CONFIG_FILE_NAME);
  if candidate.exists() {
    return Some(candidate);
  }

  None
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}
