//! Core host-facing contracts.
//!
//! `Session` is the stable surface higher layers (UI policy, hosts) drive:
//! it wires the engine to the refresh scheduler and guarantees the display
//! is refreshed immediately after every state change.

mod session;

pub use session::Session;
