use {super::*, crate::data_uri};

pub(crate) use self::tag::Tag;

mod tag;

/// The decoded content of one inscription envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInscription {
  pub content_type: String,
  #[serde(with = "Base64Serde")]
  pub body: Vec<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content_encoding: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delegate: Option<InscriptionId>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none",
    with = "OptionHexSerde"
  )]
  pub metadata: Option<Vec<u8>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metaprotocol: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parents: Vec<InscriptionId>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pointer: Option<u64>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none",
    with = "OptionHexSerde"
  )]
  pub rune: Option<Vec<u8>>,
  #[serde(default)]
  pub duplicate_field: bool,
  #[serde(default)]
  pub incomplete_field: bool,
  #[serde(default)]
  pub unrecognized_even_field: bool,
  #[serde(default)]
  pub pushnum: bool,
}

impl ParsedInscription {
  /// Builds an inscription from a raw envelope. Envelopes without a content
  /// type are not inscriptions as far as consumers are concerned.
  pub fn from_envelope(envelope: &Envelope) -> Option<Self> {
    let mut fields: BTreeMap<&[u8], VecDeque<&[u8]>> = BTreeMap::new();
    for (tag, value) in &envelope.fields {
      fields.entry(*tag).or_default().push_back(*value);
    }

    let mut duplicate_field = false;

    let content_type = Tag::ContentType.take(&mut fields, &mut duplicate_field);
    let pointer = Tag::Pointer.take(&mut fields, &mut duplicate_field);
    let parents = Tag::Parent.take_all(&mut fields);
    let metadata = Tag::Metadata.take(&mut fields, &mut duplicate_field);
    let metaprotocol = Tag::Metaprotocol.take(&mut fields, &mut duplicate_field);
    let content_encoding = Tag::ContentEncoding.take(&mut fields, &mut duplicate_field);
    let delegate = Tag::Delegate.take(&mut fields, &mut duplicate_field);
    let rune = Tag::Rune.take(&mut fields, &mut duplicate_field);

    let unrecognized_even_field = fields
      .keys()
      .any(|tag| tag.first().map(|lsb| lsb % 2 == 0).unwrap_or_default());

    let Some(content_type) = content_type else {
      log::debug!(
        "discarding envelope at offset {} without content type",
        envelope.offset
      );
      return None;
    };

    let mut body = Vec::with_capacity(envelope.body_len());
    for segment in envelope.body.iter().flatten() {
      body.extend_from_slice(segment);
    }

    Some(Self {
      content_type: String::from_utf8_lossy(&content_type).into_owned(),
      body,
      content_encoding: content_encoding.map(|value| String::from_utf8_lossy(&value).into_owned()),
      delegate: delegate.and_then(|value| InscriptionId::from_value(&value)),
      metadata,
      metaprotocol: metaprotocol.map(|value| String::from_utf8_lossy(&value).into_owned()),
      parents: parents
        .iter()
        .filter_map(|value| InscriptionId::from_value(value))
        .collect(),
      pointer: pointer.and_then(|value| Self::decode_pointer(&value)),
      rune,
      duplicate_field,
      incomplete_field: envelope.incomplete_field,
      unrecognized_even_field,
      pushnum: envelope.pushnum,
    })
  }

  /// Parses every inscription in `witness`. A malformed envelope yields none.
  pub fn from_witness(witness: &[u8]) -> Vec<Self> {
    match Envelope::from_witness(witness) {
      Ok(envelopes) => envelopes.iter().filter_map(Self::from_envelope).collect(),
      Err(err) => {
        log::debug!("malformed inscription envelope: {err}");
        Vec::new()
      }
    }
  }

  fn decode_pointer(value: &[u8]) -> Option<u64> {
    if value.iter().skip(8).any(|byte| *byte != 0) {
      return None;
    }

    let mut le = [0; 8];
    for (dst, src) in le.iter_mut().zip(value) {
      *dst = *src;
    }

    Some(u64::from_le_bytes(le))
  }

  pub fn body_str(&self) -> Option<&str> {
    std::str::from_utf8(&self.body).ok()
  }

  pub fn media(&self) -> Media {
    Media::from_content_type(&self.content_type)
  }

  pub fn data_uri(&self) -> String {
    data_uri::encode(&self.content_type, &self.body)
  }
}
