//! Shared types for the transaction resender.
//!
//! This crate defines the vocabulary every other crate in the workspace speaks:
//! transaction hashes, raw signed payloads, the `NetworkClient` seam used to talk to
//! an RPC endpoint, the `ResendObserver` progress side channel, and the error
//! taxonomy of a resend run.

pub mod client;
pub mod errors;
pub mod hash;
pub mod observer;
pub mod pipeline;
pub mod transaction;

pub use client::*;
pub use errors::*;
pub use hash::*;
pub use observer::*;
pub use pipeline::*;
pub use transaction::*;
