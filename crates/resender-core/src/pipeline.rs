//! Two-phase resend pipeline.
//!
//! A run is an explicit state machine over [`Phase`] with a single current-item
//! index. It extracts the worklist, fetches every transaction from the source,
//! and only then submits them to the destination. Every item in a phase finishes
//! before the next starts, and the first failure moves the run to
//! `Phase::Aborted`, from which no further requests are issued.

use crate::extractor::extract_hashes;
use crate::fetcher::TransactionFetcher;
use crate::resender::TransactionResender;
use resender_types::{
	ItemPosition, NetworkClient, Phase, PipelineError, RawTransaction, ResendError,
	ResendObserver, ResendSummary, RunContext, SendAcknowledgement, TransactionHash,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResendObserver for NoopObserver {}

#[derive(Debug)]
struct RunState {
	phase: Phase,
	index: usize,
}

impl RunState {
	fn new() -> Self {
		Self {
			phase: Phase::Extracting,
			index: 0,
		}
	}

	/// Moves to the phase that follows the current one and resets the index.
	fn complete_phase(&mut self) -> Phase {
		if let Some(next) = self.phase.next() {
			debug!(from = %self.phase, to = %next, "Pipeline phase transition");
			self.phase = next;
			self.index = 0;
		}
		self.phase
	}

	fn position(&self, total: usize) -> ItemPosition {
		ItemPosition::new(self.index, total)
	}

	fn complete_item(&mut self) {
		self.index += 1;
	}

	fn abort(&mut self, error: ResendError, total: usize) -> PipelineError {
		let aborted = PipelineError {
			phase: self.phase,
			position: self.position(total),
			error,
		};
		self.phase = Phase::Aborted;
		aborted
	}
}

/// Orchestrates extraction, the fetch phase and the send phase of a run.
pub struct ResendPipeline {
	observer: Arc<dyn ResendObserver>,
}

impl Default for ResendPipeline {
	fn default() -> Self {
		Self::new(Arc::new(NoopObserver))
	}
}

impl ResendPipeline {
	pub fn new(observer: Arc<dyn ResendObserver>) -> Self {
		Self { observer }
	}

	/// Resends every transaction hash found in `hash_list` from `source` to
	/// `destination`.
	///
	/// Input without any hash is a successful run over zero items. On failure the
	/// returned error names the phase, the item position and the offending hash.
	/// Submissions accepted before a failure are not undone.
	pub async fn run(
		&self,
		hash_list: &str,
		source: Arc<dyn NetworkClient>,
		destination: Arc<dyn NetworkClient>,
	) -> Result<ResendSummary, PipelineError> {
		let mut state = RunState::new();
		let hashes = extract_hashes(hash_list);

		self.observer.run_started(&RunContext {
			source: source.endpoint(),
			destination: destination.endpoint(),
			total: hashes.len(),
		});
		info!(count = hashes.len(), "Extracted transaction hashes");

		let fetcher = TransactionFetcher::new(source);
		let resender = TransactionResender::new(destination);

		let result = self.drive(&mut state, hashes, &fetcher, &resender).await;
		match &result {
			Ok(summary) => self.observer.run_done(summary),
			Err(error) => self.observer.run_aborted(error),
		}
		result
	}

	async fn drive(
		&self,
		state: &mut RunState,
		hashes: Vec<TransactionHash>,
		fetcher: &TransactionFetcher,
		resender: &TransactionResender,
	) -> Result<ResendSummary, PipelineError> {
		state.complete_phase();
		let fetched = self.fetch_phase(state, hashes, fetcher).await?;
		let fetched_count = fetched.len();

		state.complete_phase();
		let acknowledgements = self.send_phase(state, fetched, resender).await?;

		state.complete_phase();
		debug_assert_eq!(state.phase, Phase::Done);

		Ok(ResendSummary {
			fetched: fetched_count,
			sent: acknowledgements.len(),
			acknowledgements,
		})
	}

	async fn fetch_phase(
		&self,
		state: &mut RunState,
		hashes: Vec<TransactionHash>,
		fetcher: &TransactionFetcher,
	) -> Result<Vec<RawTransaction>, PipelineError> {
		let total = hashes.len();
		self.observer.phase_started(Phase::Fetching, total);

		let mut fetched = Vec::with_capacity(total);
		for hash in hashes {
			let position = state.position(total);
			self.observer.item_started(Phase::Fetching, position, &hash);

			let tx = fetcher
				.fetch(hash)
				.await
				.map_err(|error| state.abort(error, total))?;

			self.observer.item_done(Phase::Fetching, position, &hash);
			fetched.push(tx);
			state.complete_item();
		}

		self.observer.phase_done(Phase::Fetching, total);
		Ok(fetched)
	}

	async fn send_phase(
		&self,
		state: &mut RunState,
		transactions: Vec<RawTransaction>,
		resender: &TransactionResender,
	) -> Result<Vec<SendAcknowledgement>, PipelineError> {
		let total = transactions.len();
		self.observer.phase_started(Phase::Sending, total);

		let mut acknowledgements = Vec::with_capacity(total);
		for tx in transactions {
			let hash = *tx.hash();
			let position = state.position(total);
			self.observer.item_started(Phase::Sending, position, &hash);

			let ack = resender
				.send(tx)
				.await
				.map_err(|error| state.abort(error, total))?;

			self.observer.item_done(Phase::Sending, position, &hash);
			acknowledgements.push(ack);
			state.complete_item();
		}

		self.observer.phase_done(Phase::Sending, total);
		Ok(acknowledgements)
	}
}
