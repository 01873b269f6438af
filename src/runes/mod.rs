//! Runestones: rune etchings, mints and transfers carried in an
//! `OP_RETURN OP_13` output.

use {super::*, thiserror::Error};

pub use self::{
  cenotaph::Cenotaph,
  edict::Edict,
  etching::Etching,
  flaw::Flaw,
  rune::{Rune, RuneError},
  rune_id::{RuneId, RuneIdError},
  runestone::{Runestone, RunestoneMessage},
  spaced_rune::{SpacedRune, SpacedRuneError},
  terms::Terms,
};

mod cenotaph;
mod edict;
mod etching;
mod flaw;
mod rune;
mod rune_id;
mod runestone;
mod spaced_rune;
mod terms;
