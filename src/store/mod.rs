//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits for the state layer plus the
//! [`Store`] that drives them.
//!
//! - **State**: immutable snapshot of everything tracked for the UI
//! - **Action**: a tagged message describing an intent or outcome
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
pub use store::{shared, SharedStore, Store, StoreOptions};
