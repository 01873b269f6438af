use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
  ContentType,
  Pointer,
  Parent,
  Metadata,
  Metaprotocol,
  ContentEncoding,
  Delegate,
  Rune,
}

impl Tag {
  pub(crate) fn bytes(self) -> &'static [u8] {
    match self {
      Self::ContentType => &[1],
      Self::Pointer => &[2],
      Self::Parent => &[3],
      Self::Metadata => &[5],
      Self::Metaprotocol => &[7],
      Self::ContentEncoding => &[9],
      Self::Delegate => &[11],
      Self::Rune => &[13],
    }
  }

  /// Values of chunked tags are concatenated instead of counting as duplicates.
  fn chunked(self) -> bool {
    matches!(self, Self::Metadata)
  }

  /// Removes the first value for this tag, flagging extra values as duplicates.
  pub(crate) fn take<'a>(
    self,
    fields: &mut BTreeMap<&'a [u8], VecDeque<&'a [u8]>>,
    duplicate_field: &mut bool,
  ) -> Option<Vec<u8>> {
    if self.chunked() {
      let values = fields.remove(self.bytes())?;
      return Some(values.into_iter().flatten().copied().collect());
    }

    let values = fields.get_mut(self.bytes())?;
    let value = values.pop_front().map(<[u8]>::to_vec);

    if !values.is_empty() {
      *duplicate_field = true;
    }
    fields.remove(self.bytes());

    value
  }

  pub(crate) fn take_all<'a>(
    self,
    fields: &mut BTreeMap<&'a [u8], VecDeque<&'a [u8]>>,
  ) -> Vec<Vec<u8>> {
    fields
      .remove(self.bytes())
      .map(|values| values.into_iter().map(<[u8]>::to_vec).collect())
      .unwrap_or_default()
  }
}
