//! Progress notifications emitted by the resend pipeline.

use crate::errors::PipelineError;
use crate::hash::TransactionHash;
use crate::pipeline::{ItemPosition, Phase, ResendSummary};

/// Description of a run, passed to observers when it starts.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
	pub source: &'a str,
	pub destination: &'a str,
	pub total: usize,
}

/// Side channel for progress reporting.
///
/// Notifications arrive strictly in order: `run_started`, then for each phase
/// `phase_started`, an `item_started`/`item_done` pair per item and `phase_done`,
/// and finally either `run_done` or `run_aborted`. Nothing an observer does can
/// influence the run. Every method defaults to doing nothing.
pub trait ResendObserver: Send + Sync {
	fn run_started(&self, _context: &RunContext<'_>) {}

	fn phase_started(&self, _phase: Phase, _total: usize) {}

	fn item_started(&self, _phase: Phase, _position: ItemPosition, _hash: &TransactionHash) {}

	fn item_done(&self, _phase: Phase, _position: ItemPosition, _hash: &TransactionHash) {}

	fn phase_done(&self, _phase: Phase, _total: usize) {}

	fn run_done(&self, _summary: &ResendSummary) {}

	fn run_aborted(&self, _error: &PipelineError) {}
}
