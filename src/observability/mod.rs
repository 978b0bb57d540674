//! Observability subsystem.
//!
//! Every status line of the process is a `tracing` event: balances, sent
//! transaction hashes, faucet results and startup failures. Output is
//! human-readable text on stdout; there is no metrics endpoint.

pub mod logging;
