//! API endpoint handlers.
//!
//! Handlers hold no logic of their own: they translate HTTP into
//! `CoreState` calls and portal actions.

pub mod documents;
pub mod health;
pub mod portal;
pub mod submissions;
