use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mint {
  #[serde(rename = "tick")]
  pub tick: Tick,
  #[serde(rename = "amt")]
  pub amount: Num,
}

impl Mint {
  pub(super) fn check(&self, protocol: Protocol) -> Result<(), JSONError> {
    self.tick.check(protocol)
  }
}
