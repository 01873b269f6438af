use {super::*, crate::cache, log::LevelFilter};

#[derive(Clone, Default, Debug, Parser)]
pub(crate) struct Options {
  #[arg(long, value_enum, help = "Decode addresses for <CHAIN>. [default: mainnet]")]
  pub(crate) chain: Option<Chain>,
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Log at <LOG_LEVEL> and above. [default: info]")]
  pub(crate) log_level: Option<LevelFilter>,
  #[arg(long, help = "Also write rolling log files to <LOG_DIR>.")]
  pub(crate) log_dir: Option<PathBuf>,
  #[arg(long, help = "Keep parsed artifacts for up to <CACHE_CAPACITY> transactions.")]
  pub(crate) cache_capacity: Option<usize>,
}

/// Options merged with the config file and defaults.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
  pub(crate) chain: Chain,
  pub(crate) log_level: LevelFilter,
  pub(crate) log_dir: Option<PathBuf>,
  pub(crate) cache_capacity: usize,
}

impl Options {
  pub(crate) fn settings(&self) -> Result<Settings> {
    let config = match &self.config {
      Some(path) => Config::load(path)?,
      None => Config::default(),
    };

    self.merge(config)
  }

  fn merge(&self, config: Config) -> Result<Settings> {
    let log_level = match (self.log_level, config.log_level) {
      (Some(level), _) => level,
      (None, Some(level)) => level
        .parse()
        .map_err(|_| anyhow!("invalid log level in config file: {level}"))?,
      (None, None) => LevelFilter::Info,
    };

    Ok(Settings {
      chain: self.chain.or(config.chain).unwrap_or_default(),
      log_level,
      log_dir: self.log_dir.clone().or(config.log_dir),
      cache_capacity: self
        .cache_capacity
        .or(config.cache_capacity)
        .unwrap_or(cache::DEFAULT_CAPACITY),
    })
  }
}
