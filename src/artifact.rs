//! Runs every metaprotocol decoder over a transaction and collects the results.

use {super::*, crate::token::deserialize_token_operation};

/// Envelopes are only read from this input.
const INSCRIPTION_INPUT: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionArtifact {
  pub unique_id: String,
  pub index: u32,
  pub inscription: ParsedInscription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenArtifact {
  pub unique_id: String,
  pub index: u32,
  pub operation: TokenOperation,
  pub inscription: ParsedInscription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneArtifact {
  pub unique_id: String,
  pub message: RunestoneMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat21Artifact {
  pub unique_id: String,
  #[serde(flatten)]
  pub cat: Cat21,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DigitalArtifact {
  Inscription(InscriptionArtifact),
  Rune(RuneArtifact),
  Brc20(TokenArtifact),
  Src20(TokenArtifact),
  Cat21(Cat21Artifact),
}

impl DigitalArtifact {
  pub fn unique_id(&self) -> &str {
    match self {
      Self::Inscription(artifact) => &artifact.unique_id,
      Self::Rune(artifact) => &artifact.unique_id,
      Self::Brc20(artifact) | Self::Src20(artifact) => &artifact.unique_id,
      Self::Cat21(artifact) => &artifact.unique_id,
    }
  }

  /// The envelope behind this artifact, for inscriptions and token operations.
  pub fn inscription(&self) -> Option<&ParsedInscription> {
    match self {
      Self::Inscription(artifact) => Some(&artifact.inscription),
      Self::Brc20(artifact) | Self::Src20(artifact) => Some(&artifact.inscription),
      Self::Rune(_) | Self::Cat21(_) => None,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactParser {
  pub chain: Chain,
}

impl ArtifactParser {
  pub fn new(chain: Chain) -> Self {
    Self { chain }
  }

  /// Every artifact in `tx`: inscriptions and token operations in envelope
  /// order, then the runestone, then the CAT-21 mint.
  pub fn parse(&self, tx: &Transaction) -> Vec<DigitalArtifact> {
    let mut artifacts = Vec::new();

    for (index, inscription) in (0u32..).zip(Self::inscriptions(tx)) {
      let unique_id = InscriptionId {
        txid: tx.txid,
        index,
      }
      .to_string();

      artifacts.push(match Self::token_operation(&inscription) {
        Some(operation) => {
          let protocol = operation.protocol;
          let token = TokenArtifact {
            unique_id,
            index,
            operation,
            inscription,
          };
          match protocol {
            Protocol::Brc20 => DigitalArtifact::Brc20(token),
            Protocol::Src20 => DigitalArtifact::Src20(token),
          }
        }
        None => DigitalArtifact::Inscription(InscriptionArtifact {
          unique_id,
          index,
          inscription,
        }),
      });
    }

    if let Some(message) = Runestone::decipher(tx) {
      artifacts.push(DigitalArtifact::Rune(RuneArtifact {
        unique_id: format!("rune-{}", tx.txid),
        message,
      }));
    }

    if let Some(cat) = Cat21::from_transaction(tx, self.chain) {
      artifacts.push(DigitalArtifact::Cat21(Cat21Artifact {
        unique_id: format!("cat21-{}", tx.txid),
        cat,
      }));
    }

    log::trace!("{}: {} digital artifacts", tx.txid, artifacts.len());

    artifacts
  }

  /// Classifies `tx` without keeping the decoded artifacts around.
  pub fn flags(&self, tx: &Transaction) -> TransactionFlags {
    let mut flags = TransactionFlags::default();

    let inscriptions = Self::inscriptions(tx);

    if !inscriptions.is_empty() {
      flags.insert(TransactionFlags::INSCRIPTION);
    }

    if inscriptions.len() > 1 {
      flags.insert(TransactionFlags::BATCH_INSCRIPTION);
    }

    for operation in inscriptions.iter().filter_map(Self::token_operation) {
      flags.insert(TransactionFlags::for_token(&operation));
    }

    if let Some(message) = Runestone::decipher(tx) {
      flags.insert(TransactionFlags::for_runestone(&message));
    }

    if Cat21::is_cat21(tx) {
      flags.insert(TransactionFlags::CAT21);
    }

    log::trace!("{}: flags {:?}", tx.txid, flags.names());

    flags
  }

  /// Looks for an envelope with a content type without assembling bodies.
  pub fn has_inscription(&self, tx: &Transaction) -> bool {
    let Some(witness) = tx.witness_bytes(INSCRIPTION_INPUT) else {
      return false;
    };

    Envelope::from_witness(&witness)
      .map(|envelopes| envelopes.iter().any(Envelope::has_content_type))
      .unwrap_or_default()
  }

  pub fn has_runestone(&self, tx: &Transaction) -> bool {
    tx.vout
      .iter()
      .any(|output| Runestone::is_runestone_script(&output.scriptpubkey))
  }

  pub fn has_brc20(&self, tx: &Transaction) -> bool {
    self.has_token(tx, Protocol::Brc20)
  }

  pub fn has_src20(&self, tx: &Transaction) -> bool {
    self.has_token(tx, Protocol::Src20)
  }

  pub fn has_cat21(&self, tx: &Transaction) -> bool {
    Cat21::is_cat21(tx)
  }

  fn has_token(&self, tx: &Transaction, protocol: Protocol) -> bool {
    Self::inscriptions(tx)
      .iter()
      .filter_map(Self::token_operation)
      .any(|operation| operation.protocol == protocol)
  }

  fn inscriptions(tx: &Transaction) -> Vec<ParsedInscription> {
    tx.witness_bytes(INSCRIPTION_INPUT)
      .map(|witness| ParsedInscription::from_witness(&witness))
      .unwrap_or_default()
  }

  fn token_operation(inscription: &ParsedInscription) -> Option<TokenOperation> {
    match deserialize_token_operation(&inscription.content_type, &inscription.body) {
      Ok(operation) => Some(operation),
      Err(token::JSONError::UnSupportContentType(_) | token::JSONError::InvalidJson) => None,
      Err(err) => {
        log::debug!("ignoring token inscription: {err}");
        None
      }
    }
  }
}

pub fn parse_digital_artifacts(tx: &Transaction) -> Vec<DigitalArtifact> {
  ArtifactParser::default().parse(tx)
}

pub fn get_transaction_flags(tx: &Transaction) -> TransactionFlags {
  ArtifactParser::default().flags(tx)
}

pub fn has_inscription(tx: &Transaction) -> bool {
  ArtifactParser::default().has_inscription(tx)
}

pub fn has_runestone(tx: &Transaction) -> bool {
  ArtifactParser::default().has_runestone(tx)
}

pub fn has_brc20(tx: &Transaction) -> bool {
  ArtifactParser::default().has_brc20(tx)
}

pub fn has_src20(tx: &Transaction) -> bool {
  ArtifactParser::default().has_src20(tx)
}

pub fn has_cat21(tx: &Transaction) -> bool {
  ArtifactParser::default().has_cat21(tx)
}
