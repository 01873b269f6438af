use {super::*, std::path::Path};

mod data_uri;
mod decode;
mod flags;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode the digital artifacts in transactions")]
  Decode(decode::Decode),
  #[command(about = "Classify transactions by the metaprotocols they carry")]
  Flags(flags::Flags),
  #[command(about = "Decode a data URI")]
  DataUri(data_uri::DataUriCommand),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Decode(decode) => decode.run(settings),
      Self::Flags(flags) => flags.run(settings),
      Self::DataUri(data_uri) => data_uri.run(),
    }
  }
}

pub trait Output: Send {
  fn print_json(&self);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self) {
    serde_json::to_writer_pretty(io::stdout(), self).ok();
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Box<dyn Output>>;

/// Reads transactions from `path`, or stdin when absent. The input is either
/// JSON (one transaction object or an array of them) or whitespace-separated
/// consensus hex.
fn load_transactions(path: Option<&Path>) -> Result<Vec<Transaction>> {
  let input = match path {
    Some(path) => fs::read_to_string(path)
      .with_context(|| format!("failed to read transaction file `{}`", path.display()))?,
    None => {
      let mut input = String::new();
      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read transaction from stdin")?;
      input
    }
  };

  parse_transactions(&input)
}

fn parse_transactions(input: &str) -> Result<Vec<Transaction>> {
  let input = input.trim();

  let transactions = match input.chars().next() {
    None => bail!("no transaction given"),
    Some('[') => serde_json::from_str(input).context("failed to deserialize transactions")?,
    Some('{') => vec![serde_json::from_str(input).context("failed to deserialize transaction")?],
    Some(_) => input
      .split_whitespace()
      .map(Transaction::from_hex)
      .collect::<Result<Vec<Transaction>>>()?,
  };

  log::info!("loaded {} transactions", transactions.len());

  Ok(transactions)
}
