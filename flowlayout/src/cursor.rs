use crate::{FlowOptions, Placement, RowHeightPolicy, Size, SpacingPolicy};

/// The packing state machine for one layout pass.
///
/// Items are fed in sequence order through [`FlowCursor::place`]. Each call decides, from what
/// has been placed so far, whether the item opens a new row, and returns its offset.
/// [`FlowCursor::finish`] reports the total content height and returns the cursor to its cold
/// state, so the same value can drive the next pass.
///
/// A cursor is owned by exactly one pass at a time. Independent layouts need independent
/// cursors.
#[derive(Clone, Debug)]
pub struct FlowCursor {
    spacing: f32,
    spacing_policy: SpacingPolicy,
    row_height_policy: RowHeightPolicy,
    container_width: f32,

    consumed: f32, // width used by the current row, gaps included
    row_top: f32,
    row_height: f32,
    extent: f32, // lowest bottom edge placed so far
    row: usize,
    column: usize, // items in the current row
    placed: usize,
}

impl FlowCursor {
    pub fn new(
        spacing: f32,
        spacing_policy: SpacingPolicy,
        row_height_policy: RowHeightPolicy,
    ) -> Self {
        Self {
            spacing: if spacing > 0.0 { spacing } else { 0.0 },
            spacing_policy,
            row_height_policy,
            container_width: 0.0,
            consumed: 0.0,
            row_top: 0.0,
            row_height: 0.0,
            extent: 0.0,
            row: 0,
            column: 0,
            placed: 0,
        }
    }

    pub fn from_options(options: &FlowOptions) -> Self {
        Self::new(
            options.effective_spacing(),
            options.spacing_policy,
            options.row_height,
        )
    }

    /// Starts a fresh pass against `container_width`.
    pub fn reset(&mut self, container_width: f32) {
        self.container_width = if container_width > 0.0 {
            container_width
        } else {
            0.0
        };
        self.clear();
    }

    fn clear(&mut self) {
        self.consumed = 0.0;
        self.row_top = 0.0;
        self.row_height = 0.0;
        self.extent = 0.0;
        self.row = 0;
        self.column = 0;
        self.placed = 0;
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Returns `true` when the cursor holds no state from a pass in progress.
    pub fn is_idle(&self) -> bool {
        self.placed == 0 && self.consumed == 0.0 && self.row_top == 0.0 && self.extent == 0.0
    }

    /// Places the next item in sequence order.
    ///
    /// An item opens a new row when the current row already holds something and the item would
    /// run past the container's trailing edge. An item wider than the container therefore
    /// always lands at `x = 0` of its own row and overflows it.
    pub fn place(&mut self, size: Size) -> Placement {
        if !size.is_well_formed() {
            fwarn!(
                index = self.placed,
                width = size.width,
                height = size.height,
                "FlowCursor::place: malformed size clamped to zero"
            );
        }
        let size = size.sanitized();
        let size = match self.spacing_policy {
            SpacingPolicy::Padding => size.padded(self.spacing),
            SpacingPolicy::Gutter => size,
        };

        let mut gap = self.gap();
        if self.column > 0 && self.consumed + gap + size.width > self.container_width {
            self.break_row();
            gap = 0.0;
        }

        let placement = Placement {
            index: self.placed,
            row: self.row,
            column: self.column,
            x: self.consumed + gap,
            y: self.row_top,
            width: size.width,
            height: size.height,
        };

        self.consumed = placement.right();
        self.row_height = match self.row_height_policy {
            RowHeightPolicy::MaxInRow => self.row_height.max(size.height),
            RowHeightPolicy::LastItem => size.height,
        };
        self.extent = self.extent.max(placement.bottom());
        self.column += 1;
        self.placed += 1;

        ftrace!(
            index = placement.index,
            row = placement.row,
            x = placement.x,
            y = placement.y,
            "FlowCursor::place"
        );
        placement
    }

    /// Ends the pass: returns the total content height and flushes the cursor.
    pub fn finish(&mut self) -> f32 {
        let total = self.extent;
        fdebug!(
            placed = self.placed,
            rows = if self.placed == 0 { 0 } else { self.row + 1 },
            total_height = total,
            "FlowCursor::finish"
        );
        self.clear();
        total
    }

    fn gap(&self) -> f32 {
        match self.spacing_policy {
            SpacingPolicy::Gutter if self.column > 0 => self.spacing,
            _ => 0.0,
        }
    }

    fn break_row(&mut self) {
        let row_gap = match self.spacing_policy {
            SpacingPolicy::Gutter => self.spacing,
            SpacingPolicy::Padding => 0.0,
        };
        self.row_top += self.row_height + row_gap;
        ftrace!(
            row = self.row + 1,
            row_top = self.row_top,
            "FlowCursor: row break"
        );
        self.consumed = 0.0;
        self.row_height = 0.0;
        self.column = 0;
        self.row += 1;
    }
}

impl Default for FlowCursor {
    fn default() -> Self {
        Self::from_options(&FlowOptions::default())
    }
}
