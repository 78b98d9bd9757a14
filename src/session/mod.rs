//! Session orchestration: signals in, rendered views out.
//!
//! ## Contents
//! - [`Signal`], [`SignalKind`] the core-facing shape of a reaction change
//! - [`Gateway`], [`MessageHandle`] the transport boundary
//! - [`Session`] roster ownership, `start_event` + `apply`
//! - [`SessionRuntime`], [`SessionHandle`], [`Directive`] the serialized
//!   directive loop for parallel hosts
//!
//! Hosts that already serialize their callbacks (single-threaded gateways,
//! tests) can drive a [`Session`] directly; everyone else goes through the
//! runtime.

mod gateway;
mod runtime;
mod session;
mod signal;

pub use gateway::{Gateway, MessageHandle};
pub use runtime::{Directive, SessionHandle, SessionRuntime};
pub use session::Session;
pub use signal::{Signal, SignalKind};
