//! JSON-RPC network clients for the resender.
//!
//! The only implementation talks to EVM nodes over HTTP through an alloy
//! provider. It is the production `NetworkClient` handed to the pipeline for both
//! the source and the destination endpoint.

pub mod alloy_client;

pub use alloy_client::AlloyClient;
