use {
  self::{flag::Flag, message::RawMessage, tag::Tag},
  super::*,
  crate::script::{
    opcode::{OP_PUSHNUM_13, OP_RETURN},
    MAX_SCRIPT_ELEMENT_SIZE,
  },
};

mod flag;
mod message;
mod tag;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runestone {
  pub edicts: Vec<Edict>,
  pub etching: Option<Etching>,
  pub mint: Option<RuneId>,
  pub pointer: Option<u32>,
}

/// The outcome of deciphering a transaction that carries a runestone output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunestoneMessage {
  Runestone(Runestone),
  Cenotaph(Cenotaph),
}

impl RunestoneMessage {
  pub fn mint(&self) -> Option<RuneId> {
    match self {
      Self::Runestone(runestone) => runestone.mint,
      Self::Cenotaph(cenotaph) => cenotaph.mint,
    }
  }

  pub fn is_cenotaph(&self) -> bool {
    matches!(self, Self::Cenotaph(_))
  }
}

#[derive(Debug, PartialEq)]
enum Payload {
  Valid(Vec<u8>),
  Invalid(Flaw),
}

impl Runestone {
  pub const MAGIC_NUMBER: u8 = OP_PUSHNUM_13;

  /// Deciphers the first `OP_RETURN OP_13` output. Returns `None` when there
  /// is no such output; a payload that breaks the protocol is a cenotaph.
  pub fn decipher(tx: &Transaction) -> Option<RunestoneMessage> {
    let payload = match Runestone::payload(tx) {
      Some(Payload::Valid(payload)) => payload,
      Some(Payload::Invalid(flaw)) => {
        log::debug!("runestone in {} is a cenotaph: {flaw}", tx.txid);
        return Some(RunestoneMessage::Cenotaph(Cenotaph {
          flaw: Some(flaw),
          ..default()
        }));
      }
      None => return None,
    };

    let Ok(integers) = Runestone::integers(&payload) else {
      log::debug!("runestone in {} has an invalid varint", tx.txid);
      return Some(RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::Varint),
        ..default()
      }));
    };

    let RawMessage {
      mut flaw,
      edicts,
      mut fields,
    } = RawMessage::from_integers(tx, &integers);

    let mut flags = Tag::Flags
      .take(&mut fields, |[flags]| Some(flags))
      .unwrap_or_default();

    let etching = Flag::Etching.take(&mut flags).then(|| Etching {
      divisibility: Tag::Divisibility.take(&mut fields, |[divisibility]| {
        let divisibility = u8::try_from(divisibility).ok()?;
        (divisibility <= Etching::MAX_DIVISIBILITY).then_some(divisibility)
      }),
      premine: Tag::Premine.take(&mut fields, |[premine]| Some(premine)),
      rune: Tag::Rune.take(&mut fields, |[rune]| Some(Rune(rune))),
      spacers: Tag::Spacers.take(&mut fields, |[spacers]| {
        let spacers = u32::try_from(spacers).ok()?;
        (spacers <= Etching::MAX_SPACERS).then_some(spacers)
      }),
      symbol: Tag::Symbol.take(&mut fields, |[symbol]| {
        char::from_u32(u32::try_from(symbol).ok()?)
      }),
      terms: Flag::Terms.take(&mut flags).then(|| Terms {
        cap: Tag::Cap.take(&mut fields, |[cap]| Some(cap)),
        height: (
          Tag::HeightStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
          Tag::HeightEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
        ),
        amount: Tag::Amount.take(&mut fields, |[amount]| Some(amount)),
        offset: (
          Tag::OffsetStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
          Tag::OffsetEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
        ),
      }),
      turbo: Flag::Turbo.take(&mut flags),
    });

    let mint = Tag::Mint.take(&mut fields, |[block, tx]| {
      RuneId::new(block.try_into().ok()?, tx.try_into().ok()?)
    });

    let outputs = u64::try_from(tx.vout.len()).unwrap_or(u64::MAX);
    let pointer = Tag::Pointer.take(&mut fields, |[pointer]| {
      let pointer = u32::try_from(pointer).ok()?;
      (u64::from(pointer) < outputs).then_some(pointer)
    });

    if etching
      .map(|etching| etching.supply().is_none())
      .unwrap_or_default()
    {
      flaw.get_or_insert(Flaw::SupplyOverflow);
    }

    if flags != 0 {
      flaw.get_or_insert(Flaw::UnrecognizedFlag);
    }

    if fields.keys().any(|tag| tag % 2 == 0) {
      flaw.get_or_insert(Flaw::UnrecognizedEvenTag);
    }

    if let Some(flaw) = flaw {
      log::debug!("runestone in {} is a cenotaph: {flaw}", tx.txid);
      return Some(RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(flaw),
        mint,
        etching: etching.and_then(|etching| etching.rune),
      }));
    }

    Some(RunestoneMessage::Runestone(Self {
      edicts,
      etching,
      mint,
      pointer,
    }))
  }

  /// Builds the `OP_RETURN` script carrying this runestone.
  pub fn encipher(&self) -> Vec<u8> {
    let mut payload = Vec::new();

    if let Some(etching) = self.etching {
      let mut flags = 0;
      Flag::Etching.set(&mut flags);

      if etching.terms.is_some() {
        Flag::Terms.set(&mut flags);
      }

      if etching.turbo {
        Flag::Turbo.set(&mut flags);
      }

      Tag::Flags.encode([flags], &mut payload);

      Tag::Rune.encode_option(etching.rune.map(|rune| rune.0), &mut payload);
      Tag::Divisibility.encode_option(etching.divisibility, &mut payload);
      Tag::Spacers.encode_option(etching.spacers, &mut payload);
      Tag::Symbol.encode_option(etching.symbol, &mut payload);
      Tag::Premine.encode_option(etching.premine, &mut payload);

      if let Some(terms) = etching.terms {
        Tag::Amount.encode_option(terms.amount, &mut payload);
        Tag::Cap.encode_option(terms.cap, &mut payload);
        Tag::HeightStart.encode_option(terms.height.0, &mut payload);
        Tag::HeightEnd.encode_option(terms.height.1, &mut payload);
        Tag::OffsetStart.encode_option(terms.offset.0, &mut payload);
        Tag::OffsetEnd.encode_option(terms.offset.1, &mut payload);
      }
    }

    if let Some(RuneId { block, tx }) = self.mint {
      Tag::Mint.encode([block.into(), tx.into()], &mut payload);
    }

    Tag::Pointer.encode_option(self.pointer, &mut payload);

    if !self.edicts.is_empty() {
      varint::encode_to_vec(Tag::Body.into(), &mut payload);

      let mut edicts = self.edicts.clone();
      edicts.sort_by_key(|edict| edict.id);

      let mut previous = RuneId::default();
      for edict in edicts {
        // sorted ids never produce a negative delta
        let (block, tx) = previous.delta(edict.id).unwrap_or_default();
        varint::encode_to_vec(block, &mut payload);
        varint::encode_to_vec(tx, &mut payload);
        varint::encode_to_vec(edict.amount, &mut payload);
        varint::encode_to_vec(edict.output.into(), &mut payload);
        previous = edict.id;
      }
    }

    let mut script_pubkey = vec![OP_RETURN, Runestone::MAGIC_NUMBER];

    for chunk in payload.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
      script::push_data(&mut script_pubkey, chunk);
    }

    script_pubkey
  }

  /// Whether `script` opens with `OP_RETURN OP_13`.
  pub fn is_runestone_script(script: &[u8]) -> bool {
    script.starts_with(&[OP_RETURN, Runestone::MAGIC_NUMBER])
  }

  fn payload(tx: &Transaction) -> Option<Payload> {
    for output in &tx.vout {
      let mut reader = ScriptReader::new(&output.scriptpubkey);

      if reader.read_instruction() != Ok(Instruction::Op(OP_RETURN)) {
        continue;
      }

      // OP_RETURN scripts may be invalid past this point
      if reader.read_instruction() != Ok(Instruction::Op(Runestone::MAGIC_NUMBER)) {
        continue;
      }

      let mut payload = Vec::new();

      while !reader.is_empty() {
        match reader.read_instruction() {
          Ok(Instruction::Push(push)) => payload.extend_from_slice(push),
          Ok(Instruction::Op(_)) => return Some(Payload::Invalid(Flaw::Opcode)),
          Err(_) => return Some(Payload::Invalid(Flaw::InvalidScript)),
        }
      }

      return Some(Payload::Valid(payload));
    }

    None
  }

  fn integers(payload: &[u8]) -> Result<Vec<u128>, varint::Error> {
    let mut integers = Vec::new();
    let mut i = 0;

    while i < payload.len() {
      let (integer, length) = varint::decode(&payload[i..])?;
      integers.push(integer);
      i += length;
    }

    Ok(integers)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::script::opcode, pretty_assertions::assert_eq};

  fn transaction(scripts: Vec<Vec<u8>>) -> Transaction {
    Transaction {
      txid: Txid::all_zeros(),
      locktime: 0,
      vin: Vec::new(),
      vout: scripts
        .into_iter()
        .map(|scriptpubkey| TxOut {
          scriptpubkey,
          scriptpubkey_address: None,
          value: 0,
        })
        .collect(),
      fee: None,
      weight: None,
    }
  }

  fn payload(integers: &[u128]) -> Vec<u8> {
    let mut payload = Vec::new();

    for integer in integers {
      payload.extend(varint::encode(*integer));
    }

    payload
  }

  fn script(integers: &[u128]) -> Vec<u8> {
    let mut script = vec![OP_RETURN, Runestone::MAGIC_NUMBER];
    script::push_data(&mut script, &payload(integers));
    script
  }

  fn decipher(integers: &[u128]) -> RunestoneMessage {
    Runestone::decipher(&transaction(vec![script(integers)])).unwrap()
  }

  fn rune_id(tx: u32) -> RuneId {
    RuneId { block: 1, tx }
  }

  #[test]
  fn decipher_returns_none_without_runestone_output() {
    assert_eq!(Runestone::decipher(&transaction(Vec::new())), None);
    assert_eq!(Runestone::decipher(&transaction(vec![vec![0x04]])), None);
    assert_eq!(
      Runestone::decipher(&transaction(vec![vec![0x00, 0x14]])),
      None
    );
    assert_eq!(
      Runestone::decipher(&transaction(vec![vec![OP_RETURN]])),
      None
    );
    assert_eq!(
      Runestone::decipher(&transaction(vec![vec![OP_RETURN, opcode::OP_PUSHNUM_1]])),
      None
    );
  }

  #[test]
  fn script_checked_against_bitcoin_builder() {
    let mut push = bitcoin::script::PushBytesBuf::new();
    push.extend_from_slice(&payload(&[0, 1, 1, 2, 0])).unwrap();

    let expected = bitcoin::script::Builder::new()
      .push_opcode(bitcoin::opcodes::all::OP_RETURN)
      .push_opcode(bitcoin::opcodes::all::OP_PUSHNUM_13)
      .push_slice(push)
      .into_script();

    assert_eq!(expected.as_bytes(), script(&[0, 1, 1, 2, 0]));
  }

  #[test]
  fn empty_runestone() {
    assert_eq!(decipher(&[]), RunestoneMessage::Runestone(default()));
  }

  #[test]
  fn non_push_opcode_is_cenotaph() {
    let script = vec![OP_RETURN, Runestone::MAGIC_NUMBER, opcode::OP_ENDIF];

    assert_eq!(
      Runestone::decipher(&transaction(vec![script])).unwrap(),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::Opcode),
        ..default()
      })
    );
  }

  #[test]
  fn truncated_push_is_cenotaph() {
    let script = vec![OP_RETURN, Runestone::MAGIC_NUMBER, opcode::OP_PUSHDATA1, 4, 0];

    assert_eq!(
      Runestone::decipher(&transaction(vec![script])).unwrap(),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::InvalidScript),
        ..default()
      })
    );
  }

  #[test]
  fn invalid_varint_is_cenotaph() {
    let script = vec![OP_RETURN, Runestone::MAGIC_NUMBER, 1, 0x80];

    assert_eq!(
      Runestone::decipher(&transaction(vec![script])).unwrap(),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::Varint),
        ..default()
      })
    );
  }

  #[test]
  fn payload_pushes_are_concatenated() {
    let mut script = vec![OP_RETURN, Runestone::MAGIC_NUMBER];
    script::push_data(&mut script, &payload(&[0, 1]));
    script::push_data(&mut script, &payload(&[1, 2, 0]));

    assert_eq!(
      Runestone::decipher(&transaction(vec![script])).unwrap(),
      RunestoneMessage::Runestone(Runestone {
        edicts: vec![Edict {
          id: rune_id(1),
          amount: 2,
          output: 0,
        }],
        ..default()
      })
    );
  }

  #[test]
  fn edicts_are_delta_encoded() {
    assert_eq!(
      decipher(&[0, 1, 1, 5, 0, 0, 2, 7, 0, 2, 0, 9, 0]),
      RunestoneMessage::Runestone(Runestone {
        edicts: vec![
          Edict {
            id: rune_id(1),
            amount: 5,
            output: 0,
          },
          Edict {
            id: rune_id(3),
            amount: 7,
            output: 0,
          },
          Edict {
            id: RuneId { block: 3, tx: 0 },
            amount: 9,
            output: 0,
          },
        ],
        ..default()
      })
    );
  }

  #[test]
  fn unrecognized_even_tag_is_cenotaph() {
    assert_eq!(
      decipher(&[128, 0, 0, 1, 1, 2, 0]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::UnrecognizedEvenTag),
        ..default()
      })
    );
  }

  #[test]
  fn unrecognized_odd_tag_is_ignored() {
    assert_eq!(
      decipher(&[Tag::Nop.into(), 100, 0, 1, 1, 2, 0]),
      RunestoneMessage::Runestone(Runestone {
        edicts: vec![Edict {
          id: rune_id(1),
          amount: 2,
          output: 0,
        }],
        ..default()
      })
    );
  }

  #[test]
  fn cenotaph_tag_and_flag() {
    assert_eq!(
      decipher(&[Tag::Cenotaph.into(), 0]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::UnrecognizedEvenTag),
        ..default()
      })
    );
    assert_eq!(
      decipher(&[Tag::Flags.into(), Flag::Cenotaph.mask()]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::UnrecognizedFlag),
        ..default()
      })
    );
  }

  #[test]
  fn truncated_field_and_trailing_integers() {
    assert_eq!(
      decipher(&[Tag::Flags.into()]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::TruncatedField),
        ..default()
      })
    );
    assert_eq!(
      decipher(&[0, 1, 1, 2, 0, 1]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::TrailingIntegers),
        ..default()
      })
    );
  }

  #[test]
  fn edict_errors() {
    assert_eq!(
      decipher(&[0, 0, 1, 2, 0]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::EdictRuneId),
        ..default()
      })
    );
    assert_eq!(
      decipher(&[0, 1, 1, 2, 2]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::EdictOutput),
        ..default()
      })
    );
  }

  #[test]
  fn edict_output_may_equal_output_count() {
    assert_eq!(
      decipher(&[0, 1, 1, 2, 1]),
      RunestoneMessage::Runestone(Runestone {
        edicts: vec![Edict {
          id: rune_id(1),
          amount: 2,
          output: 1,
        }],
        ..default()
      })
    );
  }

  #[test]
  fn cenotaph_keeps_rune_and_mint() {
    assert_eq!(
      decipher(&[
        Tag::Flags.into(),
        Flag::Etching.mask(),
        Tag::Rune.into(),
        4,
        Tag::Mint.into(),
        1,
        Tag::Mint.into(),
        1,
        Tag::Pointer.into(),
        7,
        200,
        0,
      ]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::UnrecognizedEvenTag),
        etching: Some(Rune(4)),
        mint: Some(rune_id(1)),
      })
    );
  }

  #[test]
  fn supply_overflow_is_cenotaph() {
    assert_eq!(
      decipher(&[
        Tag::Flags.into(),
        Flag::Etching.mask() | Flag::Terms.mask(),
        Tag::Cap.into(),
        2,
        Tag::Amount.into(),
        u128::MAX,
      ]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::SupplyOverflow),
        ..default()
      })
    );
  }

  #[test]
  fn out_of_range_fields_stay_unrecognized() {
    assert_eq!(
      decipher(&[
        Tag::Flags.into(),
        Flag::Etching.mask(),
        Tag::Divisibility.into(),
        u128::from(Etching::MAX_DIVISIBILITY) + 1,
      ]),
      RunestoneMessage::Runestone(Runestone {
        etching: Some(default()),
        ..default()
      })
    );
    assert_eq!(
      decipher(&[Tag::Pointer.into(), 1]),
      RunestoneMessage::Cenotaph(Cenotaph {
        flaw: Some(Flaw::UnrecognizedEvenTag),
        ..default()
      })
    );
  }

  #[test]
  fn full_etching() {
    let runestone = Runestone {
      edicts: vec![
        Edict {
          id: RuneId { block: 2, tx: 1 },
          amount: 5,
          output: 0,
        },
        Edict {
          id: rune_id(4),
          amount: u128::MAX,
          output: 1,
        },
      ],
      etching: Some(Etching {
        divisibility: Some(Etching::MAX_DIVISIBILITY),
        premine: Some(1000),
        rune: Some(Rune(99246114928149462)),
        spacers: Some(Etching::MAX_SPACERS),
        symbol: Some('\u{10FFFF}'),
        terms: Some(Terms {
          amount: Some(10),
          cap: Some(100),
          height: (Some(840_000), Some(850_000)),
          offset: (Some(1), Some(u64::MAX)),
        }),
        turbo: true,
      }),
      mint: Some(RuneId { block: 840_000, tx: 3 }),
      pointer: Some(0),
    };

    let tx = transaction(vec![runestone.encipher(), Vec::new()]);

    let mut expected = runestone.clone();
    expected.edicts.sort_by_key(|edict| edict.id);

    assert_eq!(
      Runestone::decipher(&tx),
      Some(RunestoneMessage::Runestone(expected))
    );
  }

  #[test]
  fn large_payload_is_split_into_max_size_pushes() {
    let runestone = Runestone {
      edicts: (0..200)
        .map(|tx| Edict {
          id: rune_id(tx),
          amount: u128::MAX,
          output: 0,
        })
        .collect(),
      ..default()
    };

    let script = runestone.encipher();
    assert!(script.len() > MAX_SCRIPT_ELEMENT_SIZE);

    assert_eq!(
      Runestone::decipher(&transaction(vec![script])),
      Some(RunestoneMessage::Runestone(runestone))
    );
  }

  #[test]
  fn only_first_runestone_output_is_deciphered() {
    let first = script(&[Tag::Pointer.into(), 0]);
    let second = script(&[128, 0]);

    assert_eq!(
      Runestone::decipher(&transaction(vec![vec![opcode::OP_PUSHNUM_1], first, second])),
      Some(RunestoneMessage::Runestone(Runestone {
        pointer: Some(0),
        ..default()
      }))
    );
  }

  #[test]
  fn is_runestone_script() {
    assert!(Runestone::is_runestone_script(&script(&[])));
    assert!(!Runestone::is_runestone_script(&[OP_RETURN]));
    assert!(!Runestone::is_runestone_script(&[]));
  }
}
