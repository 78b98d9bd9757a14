//! Textual view derivation.
//!
//! One function, one snapshot: [`render`] turns the roster into the text the
//! session publishes. See [`view`](self) internals for the layout rules.

mod view;

pub use view::{mention, render};
