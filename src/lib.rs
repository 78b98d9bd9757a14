//! # warparty
//!
//! **Warparty** is a reaction-driven roster runtime for guild events.
//!
//! It assigns participants into role-typed, capacity-bounded party slots
//! based on selection signals (message reactions), keeps each participant's
//! selection mutually exclusive, and maintains a single human-readable
//! rendering of current assignments. The crate is the state machine only;
//! the chat platform (connection, commands, reaction delivery, message I/O)
//! plugs in behind the [`Gateway`] trait.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   start-event command        reaction add/remove
//!          │                          │
//!          ▼                          ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  SessionRuntime (one directive at a time, arrival order)  │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │ Session                                             │  │
//! │  │   reconcile: remove everywhere ─► first-fit place   │  │
//! │  │   RosterState: 12 party slots + flex + absent       │  │
//! │  │   render: full snapshot, regenerated every mutation │  │
//! │  └───────────┬──────────────────────────┬──────────────┘  │
//! └──────────────┼──────────────────────────┼─────────────────┘
//!                ▼                          ▼
//!        Gateway (transport)         Bus (broadcast events)
//!        publish/update/prompt              │
//!                                    SubscriberSet
//!                                 ┌─────────┼─────────┐
//!                                 ▼         ▼         ▼
//!                             LogWriter  metrics   custom
//! ```
//!
//! ### Placement
//! ```text
//! select(user, role):
//!   ├─► remove user from every pool (slots, flex, absent)
//!   └─► role = Flex   ──► append to flex pool
//!       role = Absent ──► append to absent pool
//!       party role    ──► first slot with room, in index order
//!                          │  TANK cap 1 · DPS cap 4 · HEALER cap 1
//!                          └─ all 12 slots full ──► overflow to flex
//!
//! deselect(user, role):
//!   └─► remove user from that role's pools only
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                  |
//! |-----------------|----------------------------------------------------------|-------------------------------------|
//! | **Roster**      | Slots, pools, placement, reconciliation.                 | [`RosterState`], [`Role`], [`select`], [`deselect`] |
//! | **Rendering**   | Deterministic textual snapshot with mention tokens.      | [`render()`], [`mention()`]         |
//! | **Session**     | Start-event + signal application, view-handle ownership. | [`Session`], [`Signal`]             |
//! | **Runtime**     | Serialized directive loop for parallel hosts.            | [`SessionRuntime`], [`SessionHandle`] |
//! | **Transport**   | The boundary the platform implements.                    | [`Gateway`], [`MessageHandle`]      |
//! | **Observability**| Sequenced events fanned out to subscribers.             | [`Event`], [`Bus`], [`Subscribe`]   |
//! | **Errors**      | Typed command/transport/submit errors.                   | [`CommandError`], [`TransportError`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use warparty::{
//!     Config, Gateway, MessageHandle, Role, Session, Signal, TransportError, UserId,
//! };
//!
//! struct Stdout;
//!
//! #[async_trait]
//! impl Gateway for Stdout {
//!     async fn publish(&self, text: &str) -> Result<MessageHandle, TransportError> {
//!         println!("{text}");
//!         Ok(MessageHandle(1))
//!     }
//!     async fn update(&self, _: &MessageHandle, text: &str) -> Result<(), TransportError> {
//!         println!("{text}");
//!         Ok(())
//!     }
//!     async fn discard(&self, _: &MessageHandle) -> Result<(), TransportError> { Ok(()) }
//!     async fn prompt(&self, text: &str) -> Result<(), TransportError> {
//!         println!("{text}");
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::new(&Config::default(), Arc::new(Stdout));
//!
//!     session.start_event("Northwind", "Saturday 20:00 UTC").await?;
//!     session.apply(&Signal::select(UserId(42), Role::Tank.marker())).await?;
//!     session.apply(&Signal::select(UserId(7), Role::Healer.marker())).await?;
//!
//!     assert_eq!(session.state().parties()[0].tank, vec![UserId(42)]);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod render;
mod roster;
mod session;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{CommandError, SessionError, SubmitError, TransportError};
pub use events::{Bus, Event, EventKind};
pub use render::{mention, render};
pub use roster::{deselect, select, PartySlot, Placement, Role, RosterState, UserId};
pub use session::{
    Directive, Gateway, MessageHandle, Session, SessionHandle, SessionRuntime, Signal, SignalKind,
};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose the simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
