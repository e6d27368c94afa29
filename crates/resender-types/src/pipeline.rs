//! Pipeline phases, item positions and run summaries.

use crate::transaction::SendAcknowledgement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a resend run.
///
/// A run moves strictly forward through `Extracting`, `Fetching`, `Sending` and
/// `Done`. Any phase before `Done` may instead end in `Aborted`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
	Extracting,
	Fetching,
	Sending,
	Done,
	Aborted,
}

impl Phase {
	/// The phase that follows a successful completion of `self`.
	pub fn next(self) -> Option<Phase> {
		match self {
			Phase::Extracting => Some(Phase::Fetching),
			Phase::Fetching => Some(Phase::Sending),
			Phase::Sending => Some(Phase::Done),
			Phase::Done | Phase::Aborted => None,
		}
	}
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Phase::Extracting => "extracting",
			Phase::Fetching => "fetching",
			Phase::Sending => "sending",
			Phase::Done => "done",
			Phase::Aborted => "aborted",
		};
		f.write_str(name)
	}
}

/// Zero-based index of an item within a phase of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPosition {
	pub index: usize,
	pub total: usize,
}

impl ItemPosition {
	pub fn new(index: usize, total: usize) -> Self {
		Self { index, total }
	}

	/// One-based item number.
	pub fn number(&self) -> usize {
		self.index + 1
	}

	/// Item number right-aligned to the width of the total, e.g. ` 3 from 12`.
	pub fn padded(&self) -> String {
		let width = self.total.to_string().len();
		format!("{:>width$} from {}", self.number(), self.total, width = width)
	}
}

impl fmt::Display for ItemPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} of {}", self.number(), self.total)
	}
}

/// Outcome of a run that completed both phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendSummary {
	pub fetched: usize,
	pub sent: usize,
	pub acknowledgements: Vec<SendAcknowledgement>,
}

impl ResendSummary {
	pub fn is_empty(&self) -> bool {
		self.fetched == 0 && self.sent == 0
	}
}
