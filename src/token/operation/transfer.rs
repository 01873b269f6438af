use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transfer {
  #[serde(rename = "tick")]
  pub tick: Tick,
  #[serde(rename = "amt")]
  pub amount: Num,
}

impl Transfer {
  pub(super) fn check(&self, protocol: Protocol) -> Result<(), JSONError> {
    self.tick.check(protocol)
  }
}
