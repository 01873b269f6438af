use {
  super::*,
  derive_more::{BitAnd, BitOr, BitOrAssign},
};

/// Metaprotocol classification of a transaction, one bit per rule.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, BitAnd, BitOr, BitOrAssign, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionFlags(pub u64);

impl TransactionFlags {
  pub const INSCRIPTION: Self = Self(1 << 0);
  pub const BATCH_INSCRIPTION: Self = Self(1 << 1);
  pub const RUNE_ETCH: Self = Self(1 << 2);
  pub const RUNE_MINT: Self = Self(1 << 3);
  pub const RUNE_TRANSFER: Self = Self(1 << 4);
  pub const CENOTAPH: Self = Self(1 << 5);
  pub const BRC20_DEPLOY: Self = Self(1 << 6);
  pub const BRC20_MINT: Self = Self(1 << 7);
  pub const BRC20_TRANSFER: Self = Self(1 << 8);
  pub const SRC20_DEPLOY: Self = Self(1 << 9);
  pub const SRC20_MINT: Self = Self(1 << 10);
  pub const SRC20_TRANSFER: Self = Self(1 << 11);
  pub const CAT21: Self = Self(1 << 12);

  const NAMES: [(Self, &'static str); 13] = [
    (Self::INSCRIPTION, "inscription"),
    (Self::BATCH_INSCRIPTION, "batch_inscription"),
    (Self::RUNE_ETCH, "rune_etch"),
    (Self::RUNE_MINT, "rune_mint"),
    (Self::RUNE_TRANSFER, "rune_transfer"),
    (Self::CENOTAPH, "cenotaph"),
    (Self::BRC20_DEPLOY, "brc20_deploy"),
    (Self::BRC20_MINT, "brc20_mint"),
    (Self::BRC20_TRANSFER, "brc20_transfer"),
    (Self::SRC20_DEPLOY, "src20_deploy"),
    (Self::SRC20_MINT, "src20_mint"),
    (Self::SRC20_TRANSFER, "src20_transfer"),
    (Self::CAT21, "cat21"),
  ];

  pub fn bits(self) -> u64 {
    self.0
  }

  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  pub fn contains(self, other: Self) -> bool {
    self & other == other
  }

  pub fn insert(&mut self, other: Self) {
    *self |= other;
  }

  pub fn names(self) -> Vec<&'static str> {
    Self::NAMES
      .iter()
      .filter(|(flag, _)| self.contains(*flag))
      .map(|(_, name)| *name)
      .collect()
  }

  pub(crate) fn for_token(token: &TokenOperation) -> Self {
    match (token.protocol, &token.operation) {
      (Protocol::Brc20, Operation::Deploy(_)) => Self::BRC20_DEPLOY,
      (Protocol::Brc20, Operation::Mint(_)) => Self::BRC20_MINT,
      (Protocol::Brc20, Operation::Transfer(_)) => Self::BRC20_TRANSFER,
      (Protocol::Src20, Operation::Deploy(_)) => Self::SRC20_DEPLOY,
      (Protocol::Src20, Operation::Mint(_)) => Self::SRC20_MINT,
      (Protocol::Src20, Operation::Transfer(_)) => Self::SRC20_TRANSFER,
    }
  }

  pub(crate) fn for_runestone(message: &RunestoneMessage) -> Self {
    let mut flags = Self::default();

    let (etching, mint, edicts) = match message {
      RunestoneMessage::Runestone(runestone) => (
        runestone.etching.is_some(),
        runestone.mint.is_some(),
        !runestone.edicts.is_empty(),
      ),
      RunestoneMessage::Cenotaph(cenotaph) => {
        flags.insert(Self::CENOTAPH);
        (cenotaph.etching.is_some(), cenotaph.mint.is_some(), false)
      }
    };

    if etching {
      flags.insert(Self::RUNE_ETCH);
    }
    if mint {
      flags.insert(Self::RUNE_MINT);
    }
    if edicts {
      flags.insert(Self::RUNE_TRANSFER);
    }

    flags
  }

  pub fn from_artifacts(artifacts: &[DigitalArtifact]) -> Self {
    let mut flags = Self::default();

    let inscriptions = artifacts
      .iter()
      .filter(|artifact| artifact.inscription().is_some())
      .count();

    if inscriptions > 0 {
      flags.insert(Self::INSCRIPTION);
    }

    if inscriptions > 1 {
      flags.insert(Self::BATCH_INSCRIPTION);
    }

    for artifact in artifacts {
      match artifact {
        DigitalArtifact::Inscription(_) => {}
        DigitalArtifact::Brc20(token) | DigitalArtifact::Src20(token) => {
          flags.insert(Self::for_token(&token.operation));
        }
        DigitalArtifact::Rune(rune) => flags.insert(Self::for_runestone(&rune.message)),
        DigitalArtifact::Cat21(_) => flags.insert(Self::CAT21),
      }
    }

    flags
  }
}
