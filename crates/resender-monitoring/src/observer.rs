//! Progress reporting through `tracing`.

use resender_types::{
	ItemPosition, Phase, PipelineError, ResendObserver, ResendSummary, RunContext,
	TransactionHash,
};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{error, info, warn};

/// Logs each step of a resend run as it happens.
#[derive(Debug, Default)]
pub struct TracingObserver {
	started_at: Mutex<Option<Instant>>,
}

impl TracingObserver {
	pub fn new() -> Self {
		Self::default()
	}

	fn elapsed_ms(&self) -> Option<u128> {
		let started_at = self.started_at.lock().ok()?;
		(*started_at).map(|instant| instant.elapsed().as_millis())
	}
}

fn phase_banner(phase: Phase) -> &'static str {
	match phase {
		Phase::Fetching => "Fetching the transaction data from the source network",
		Phase::Sending => "Submitting the transactions to the destination network one by one",
		Phase::Extracting | Phase::Done | Phase::Aborted => "",
	}
}

fn phase_summary(phase: Phase) -> &'static str {
	match phase {
		Phase::Fetching => "All the transactions have been collected successfully",
		Phase::Sending => "All the transactions have been sent successfully",
		Phase::Extracting | Phase::Done | Phase::Aborted => "",
	}
}

fn item_message(phase: Phase, position: ItemPosition, hash: &TransactionHash) -> String {
	let verb = match phase {
		Phase::Sending => "Sending",
		_ => "Requesting",
	};
	format!(
		"{} the transaction {} with hash {}",
		verb,
		position.padded(),
		hash
	)
}

impl ResendObserver for TracingObserver {
	fn run_started(&self, context: &RunContext<'_>) {
		if let Ok(mut started_at) = self.started_at.lock() {
			*started_at = Some(Instant::now());
		}
		info!("Resending transactions");
		info!(source = %context.source, "Source RPC URL");
		info!(destination = %context.destination, "Destination RPC URL");
		info!(count = context.total, "Number of transactions to resend");
		if context.total == 0 {
			warn!("No transaction hashes found in the input");
		}
	}

	fn phase_started(&self, phase: Phase, total: usize) {
		info!(%phase, total, "{}", phase_banner(phase));
	}

	fn item_started(&self, phase: Phase, position: ItemPosition, hash: &TransactionHash) {
		info!(%phase, "{}", item_message(phase, position, hash));
	}

	fn item_done(&self, phase: Phase, position: ItemPosition, _hash: &TransactionHash) {
		info!(%phase, item = position.number(), "Done");
	}

	fn phase_done(&self, phase: Phase, total: usize) {
		info!(%phase, total, "{}", phase_summary(phase));
	}

	fn run_done(&self, summary: &ResendSummary) {
		info!(
			fetched = summary.fetched,
			sent = summary.sent,
			elapsed_ms = ?self.elapsed_ms(),
			"Everything is done"
		);
	}

	fn run_aborted(&self, failure: &PipelineError) {
		error!(
			phase = %failure.phase,
			item = failure.position.number(),
			total = failure.position.total,
			tx_hash = %failure.hash(),
			elapsed_ms = ?self.elapsed_ms(),
			"Resend aborted: {}",
			failure.error
		);
	}
}
