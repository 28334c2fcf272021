//! Logging bootstrap for fieldhud binaries.
//!
//! Thin wrapper over the `tracing` ecosystem: one `init` entry point with
//! a [`logging::LogFormat`] switch between human-readable output for
//! interactive terminals and JSON lines for log shippers. The monitor
//! pipeline itself only emits through `tracing` macros and stays
//! subscriber-agnostic.

pub mod logging;
