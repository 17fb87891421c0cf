//! A headless, row-wrapping flow layout engine.
//!
//! For host-side helpers (incremental measurement, re-layout control), see the
//! `flowlayout-adapter` crate.
//!
//! Items are packed left to right in sequence order and wrap to a new row whenever the next item
//! would overflow the container width, like CSS `flex-wrap: wrap`. The resulting content height
//! is fed back to the container through a [`HeightChannel`], either as an exact extent
//! (scrollable containers) or as a cap (bounded containers).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container width
//! - each item's intrinsic size for the current pass
//! - a way to apply the reported [`ContainerExtent`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cursor;
mod feedback;
mod flow;
mod options;
mod pack;
mod types;


pub use cursor::FlowCursor;
pub use feedback::HeightChannel;
pub use flow::{FlowFrame, FlowLayout, ViewMapping};
pub use options::{FlowOptions, HeightCallback};
pub use pack::{pack, pack_iter, pack_with_cursor};
pub use types::{
    ContainerExtent, ContainerMode, DEFAULT_ITEM_SPACING, PackResult, Placement, RowHeightPolicy,
    Size, SpacingPolicy,
};
