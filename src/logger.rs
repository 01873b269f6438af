use {
  super::*,
  log::LevelFilter,
  log4rs::{
    append::{
      console::{ConsoleAppender, Target},
      rolling_file::{
        policy::compound::{
          roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
        },
        RollingFileAppender,
      },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
  },
  std::path::Path,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";
const LOG_FILE: &str = "ordpool.log";
const ARCHIVE_PATTERN: &str = "ordpool.{}.log.gz";
const ROLL_SIZE: u64 = 64 * 1024 * 1024;
const ROLL_COUNT: u32 = 8;

/// Logs to stderr, and to a size-rolled file in `log_dir` when one is given.
/// Stdout is left to command output.
pub(crate) fn init(level: LevelFilter, log_dir: Option<&Path>) -> Result<log4rs::Handle> {
  let stderr = ConsoleAppender::builder()
    .target(Target::Stderr)
    .encoder(Box::new(PatternEncoder::new(PATTERN)))
    .build();

  let mut config =
    log4rs::Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
  let mut root = Root::builder().appender("stderr");

  if let Some(log_dir) = log_dir {
    fs::create_dir_all(log_dir)
      .with_context(|| format!("failed to create log dir `{}`", log_dir.display()))?;

    let roller = FixedWindowRoller::builder()
      .build(&log_dir.join(ARCHIVE_PATTERN).to_string_lossy(), ROLL_COUNT)
      .map_err(|err| anyhow!("invalid log archive pattern: {err}"))?;

    let file = RollingFileAppender::builder()
      .encoder(Box::new(PatternEncoder::new(PATTERN)))
      .build(
        log_dir.join(LOG_FILE),
        Box::new(CompoundPolicy::new(
          Box::new(SizeTrigger::new(ROLL_SIZE)),
          Box::new(roller),
        )),
      )
      .with_context(|| format!("failed to open log file in `{}`", log_dir.display()))?;

    config = config.appender(Appender::builder().build("file", Box::new(file)));
    root = root.appender("file");
  }

  let config = config
    .build(root.build(level))
    .map_err(|err| anyhow!("invalid logger configuration: {err}"))?;

  Ok(log4rs::init_config(config)?)
}
