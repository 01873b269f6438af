use super::*;

mod deploy;
mod mint;
mod transfer;

pub use self::{deploy::Deploy, mint::Mint, transfer::Transfer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "op")]
pub enum Operation {
  #[serde(rename = "deploy")]
  Deploy(Deploy),
  #[serde(rename = "mint")]
  Mint(Mint),
  #[serde(rename = "transfer")]
  Transfer(Transfer),
}

impl Operation {
  pub fn tick(&self) -> &Tick {
    match self {
      Self::Deploy(deploy) => &deploy.tick,
      Self::Mint(mint) => &mint.tick,
      Self::Transfer(transfer) => &transfer.tick,
    }
  }

  pub(super) fn check(&self, protocol: Protocol) -> Result<(), JSONError> {
    match self {
      Self::Deploy(deploy) => deploy.check(protocol),
      Self::Mint(mint) => mint.check(protocol),
      Self::Transfer(transfer) => transfer.check(protocol),
    }
  }
}
