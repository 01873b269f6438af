//! CAT-21: a cat is minted by any transaction with `nLockTime` 21. It is
//! bound to the first sat of the first output.

use {super::*, crate::script::opcode::OP_RETURN};

pub const CAT21_LOCKTIME: u32 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat21 {
  pub txid: Txid,
  /// Address of the first output, when its script has a standard form.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner: Option<String>,
  /// Value of the first output in sats.
  pub postage: u64,
  pub satpoint: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fee: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<u64>,
}

impl Cat21 {
  pub fn is_cat21(tx: &Transaction) -> bool {
    tx.locktime == CAT21_LOCKTIME
      && !tx.vin.is_empty()
      && tx
        .vout
        .first()
        .map(|output| output.scriptpubkey.first() != Some(&OP_RETURN))
        .unwrap_or_default()
  }

  pub fn from_transaction(tx: &Transaction, chain: Chain) -> Option<Self> {
    if !Self::is_cat21(tx) {
      return None;
    }

    let output = tx.vout.first()?;

    Some(Self {
      txid: tx.txid,
      owner: output
        .scriptpubkey_address
        .clone()
        .or_else(|| chain.address_from_script(&output.scriptpubkey)),
      postage: output.value,
      satpoint: format!("{}:0:0", tx.txid),
      fee: tx.fee,
      weight: tx.weight,
    })
  }
}
