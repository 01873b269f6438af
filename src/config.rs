use super::*;

/// Settings read from `--config`. Every key is optional; flags given on the
/// command line win over the file.
#[derive(Deserialize, Default, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) chain: Option<Chain>,
  pub(crate) log_level: Option<String>,
  pub(crate) log_dir: Option<PathBuf>,
  pub(crate) cache_capacity: Option<usize>,
}

impl Config {
  pub(crate) fn load(path: &std::path::Path) -> Result<Self> {
    let file = fs::File::open(path)
      .with_context(|| format!("failed to open config file `{}`", path.display()))?;

    serde_yaml::from_reader(file)
      .with_context(|| format!("failed to deserialize config file `{}`", path.display()))
  }
}
