//! State layer for a stock-app front end talking to a REST data-store client.
//!
//! Every remote call the client exposes is tracked by the same small state
//! machine: dispatch an in-progress action before the call, then a successful
//! or failed action with the response payload. Reducers are pure; all side
//! effects (the actual HTTP calls) happen outside, around the dispatch.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                               │
//!    └───────── caller ──────────────┘
//! ```
//!
//! - [`remote`]: the generic per-operation slice and action triplet
//! - [`ops`]: one action set, state slice, and reducer per operation group,
//!   plus the root [`ops::ApiReducer`] that folds them together
//! - [`store`]: the dispatch loop, state history, and change subscribers
//! - [`api`]: payload types crossing the REST boundary

pub mod api;
pub mod ops;
pub mod remote;
pub mod store;
