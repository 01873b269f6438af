use super::*;

/// A transaction as served by esplora-style REST APIs, reduced to the fields the
/// decoders look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
  pub txid: Txid,
  #[serde(default)]
  pub locktime: u32,
  #[serde(default)]
  pub vin: Vec<TxIn>,
  #[serde(default)]
  pub vout: Vec<TxOut>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fee: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxIn {
  #[serde(default, skip_serializing_if = "Option::is_none", with = "WitnessSerde")]
  pub witness: Option<Vec<Vec<u8>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
  #[serde(with = "HexSerde")]
  pub scriptpubkey: Vec<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scriptpubkey_address: Option<String>,
  pub value: u64,
}

impl Transaction {
  /// Parses a consensus-encoded transaction from hex.
  pub fn from_hex(hex: &str) -> Result<Self> {
    let bytes = hex::decode(hex.trim()).context("transaction is not valid hex")?;
    let transaction: bitcoin::Transaction =
      bitcoin::consensus::deserialize(&bytes).context("failed to decode transaction")?;
    Ok(Self::from(&transaction))
  }

  /// All witness items of input `index` joined into one buffer, or `None` when
  /// the input is missing or carries no witness.
  pub fn witness_bytes(&self, index: usize) -> Option<Vec<u8>> {
    let witness = self.vin.get(index)?.witness.as_ref()?;

    if witness.is_empty() {
      return None;
    }

    let mut bytes = Vec::with_capacity(witness.iter().map(Vec::len).sum());
    for item in witness {
      bytes.extend_from_slice(item);
    }

    Some(bytes)
  }
}

impl From<&bitcoin::Transaction> for Transaction {
  fn from(tx: &bitcoin::Transaction) -> Self {
    Self {
      txid: tx.txid(),
      locktime: tx.lock_time.to_consensus_u32(),
      vin: tx
        .input
        .iter()
        .map(|input| TxIn {
          witness: (!input.witness.is_empty())
            .then(|| input.witness.iter().map(<[u8]>::to_vec).collect()),
        })
        .collect(),
      vout: tx
        .output
        .iter()
        .map(|output| TxOut {
          scriptpubkey: output.script_pubkey.to_bytes(),
          scriptpubkey_address: None,
          value: output.value,
        })
        .collect(),
      fee: None,
      weight: Some(tx.weight().to_wu()),
    }
  }
}
