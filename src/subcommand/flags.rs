use super::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub txid: Txid,
  pub flags: TransactionFlags,
  pub flag_names: Vec<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Flags {
  #[arg(help = "Read transactions from <TRANSACTIONS> instead of stdin.")]
  transactions: Option<PathBuf>,
}

impl Flags {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let parser = ArtifactParser::new(settings.chain);

    let outputs = load_transactions(self.transactions.as_deref())?
      .iter()
      .map(|tx| {
        let flags = parser.flags(tx);
        Output {
          txid: tx.txid,
          flags,
          flag_names: flags.names().into_iter().map(str::to_string).collect(),
        }
      })
      .collect::<Vec<Output>>();

    Ok(Box::new(outputs))
  }
}
