use alloc::vec::Vec;

/// Default gap applied around every item, in layout units.
pub const DEFAULT_ITEM_SPACING: f32 = 4.0;

/// Intrinsic size of one item, as measured by the host for the current pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grows the size by `spacing` on every side.
    pub fn padded(self, spacing: f32) -> Self {
        Self {
            width: self.width + spacing * 2.0,
            height: self.height + spacing * 2.0,
        }
    }

    /// Replaces negative and NaN components with zero.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

fn non_negative(v: f32) -> f32 {
    if v >= 0.0 { v } else { 0.0 }
}

/// How the container's own height follows the packed content height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerMode {
    /// The container's extent is exactly the content height, so an outer scroll region can size
    /// itself from it.
    #[default]
    Scrollable,
    /// The container never grows past the content height (or a configured cap) and starts out
    /// unbounded so nothing is clipped before the first pass.
    Bounded,
}

/// Which height a finished row contributes when the next row starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowHeightPolicy {
    /// The tallest item seen in the row.
    #[default]
    MaxInRow,
    /// The height of the last item placed before the break.
    ///
    /// Only correct when heights never decrease within a row. Kept for layouts that must match
    /// older output exactly.
    LastItem,
}

/// Where the inter-item spacing goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpacingPolicy {
    /// Every measured size is padded by `spacing` on all sides before packing.
    ///
    /// Adjacent items end up `2 * spacing` apart and the content is inset by `spacing` from the
    /// container edges.
    #[default]
    Padding,
    /// Exactly `spacing` is inserted between neighbours in a row and between rows. No space is
    /// added at the container edges.
    Gutter,
}

/// What the host should apply to the container's own height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerExtent {
    /// Fixed height.
    Exact(f32),
    /// Height may shrink below this value but must not exceed it.
    AtMost(f32),
    /// No constraint yet.
    Unbounded,
}

impl ContainerExtent {
    /// The largest height the container may take, `None` if unbounded.
    pub fn max(&self) -> Option<f32> {
        match *self {
            Self::Exact(h) | Self::AtMost(h) => Some(h),
            Self::Unbounded => None,
        }
    }
}

/// Output position of one item for one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub index: usize,
    pub row: usize,
    /// Position within the row (0 for the first item of every row).
    pub column: usize,
    /// Offset from the container's leading edge.
    pub x: f32,
    /// Offset from the container's top edge.
    pub y: f32,
    /// Slot width (includes padding under [`SpacingPolicy::Padding`]).
    pub width: f32,
    /// Slot height (includes padding under [`SpacingPolicy::Padding`]).
    pub height: f32,
}

impl Placement {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Origin of the unpadded item inside its slot.
    pub fn content_origin(&self, spacing: f32, policy: SpacingPolicy) -> (f32, f32) {
        match policy {
            SpacingPolicy::Padding => (self.x + spacing, self.y + spacing),
            SpacingPolicy::Gutter => (self.x, self.y),
        }
    }
}

/// Result of a full pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackResult {
    pub placements: Vec<Placement>,
    pub total_height: f32,
}

impl PackResult {
    pub fn row_count(&self) -> usize {
        self.placements.last().map_or(0, |p| p.row + 1)
    }
}
