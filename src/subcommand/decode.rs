use super::*;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub txid: Txid,
  pub artifacts: Vec<DigitalArtifact>,
  pub flags: TransactionFlags,
  pub flag_names: Vec<&'static str>,
}

#[derive(Debug, Parser)]
pub(crate) struct Decode {
  #[arg(help = "Read transactions from <TRANSACTIONS> instead of stdin.")]
  transactions: Option<PathBuf>,
}

impl Decode {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let transactions = load_transactions(self.transactions.as_deref())?;

    let mut cache = ArtifactCache::new(ArtifactParser::new(settings.chain), settings.cache_capacity);

    let outputs = transactions
      .iter()
      .map(|tx| {
        let artifacts = cache.artifacts(tx).to_vec();
        let flags = TransactionFlags::from_artifacts(&artifacts);
        Output {
          txid: tx.txid,
          flag_names: flags.names(),
          flags,
          artifacts,
        }
      })
      .collect::<Vec<Output>>();

    Ok(Box::new(outputs))
  }
}
