use super::*;

/// A runestone that violated the protocol. Every rune input to the
/// transaction is burned; an etched rune name and a mint are still honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cenotaph {
  pub etching: Option<Rune>,
  pub flaw: Option<Flaw>,
  pub mint: Option<RuneId>,
}
