//! Adapter utilities for the `flowlayout` crate.
//!
//! The `flowlayout` crate is UI-agnostic and focuses on the packing math and the height
//! feedback. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Incremental, index-ordered measurement for hosts that report sizes one item at a time
//! - A controller that re-packs only when width or items change
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod pass;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use pass::{MeasurePass, PassProgress};
