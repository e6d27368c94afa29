//! Core resend pipeline.
//!
//! A run extracts transaction hashes from free-form text, fetches every
//! transaction from the source endpoint, and only then submits the recovered raw
//! payloads to the destination endpoint, one at a time and in input order. The
//! first failure in either phase aborts the whole run.
//!
//! # Modules
//!
//! - `extractor`: hash extraction from arbitrary text
//! - `fetcher`: source lookups and wire-form reconstruction
//! - `resender`: destination submission of raw payloads
//! - `pipeline`: the two-phase state machine tying them together

pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod resender;

#[cfg(test)]
pub(crate) mod test_support;

pub use extractor::extract_hashes;
pub use fetcher::TransactionFetcher;
pub use pipeline::{NoopObserver, ResendPipeline};
pub use resender::TransactionResender;
