//! View-model core for the Hearth to-do dashboard cards.
//!
//! The host runtime hands each card a snapshot of entity state; the card
//! groups tasks into due-date categories, renders them, and sends mutation
//! payloads back through the host's service-call surface. This crate holds
//! the non-rendering half of that: classification and week math
//! (`core::groups`, `core::week`), the recurrence editing model
//! (`core::recurrence`, `core::form`), snapshot decoding ([`state`]),
//! and the service payload shapes ([`service`]).
//!
//! Everything here is synchronous and side-effect free. Malformed input
//! degrades to a documented default instead of erroring, because a view
//! model must always produce something renderable.

pub mod config;
pub mod core;
pub mod service;
pub mod state;
