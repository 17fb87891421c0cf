use alloc::vec::Vec;

use flowlayout::{ContainerExtent, FlowCursor, HeightChannel, PackResult, Placement, Size};

/// Progress of a [`MeasurePass`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassProgress {
    pub count: usize,
    pub placed: usize,
    pub complete: bool,
}

/// An incremental layout pass for hosts that measure one item at a time.
///
/// Rendering systems often only know an item's size once they lay it out, and hand it to the
/// layout through a per-item geometry callback. `MeasurePass` turns that callback into an
/// explicit protocol:
/// - `place(index, size)` must be called with indexes `0..count` in ascending order.
/// - Re-querying an index that was already placed returns the same placement (hosts may evaluate
///   geometry callbacks more than once).
/// - Skipping ahead or going out of bounds is ignored (and debug-asserted).
///
/// The pass completes right after the last index is placed. Only then is the total height
/// available and deliverable, so partial heights never leave the pass.
#[derive(Clone, Debug)]
pub struct MeasurePass {
    cursor: FlowCursor,
    count: usize,
    placements: Vec<Placement>,
    total_height: Option<f32>,
    delivered: bool,
}

impl MeasurePass {
    pub fn begin(mut cursor: FlowCursor, count: usize, container_width: f32) -> Self {
        cursor.reset(container_width);
        let total_height = if count == 0 {
            Some(cursor.finish())
        } else {
            None
        };
        Self {
            cursor,
            count,
            placements: Vec::with_capacity(count),
            total_height,
            delivered: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_complete(&self) -> bool {
        self.total_height.is_some()
    }

    /// The settled content height, once the last item has been placed.
    pub fn total_height(&self) -> Option<f32> {
        self.total_height
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn progress(&self) -> PassProgress {
        PassProgress {
            count: self.count,
            placed: self.placements.len(),
            complete: self.is_complete(),
        }
    }

    pub fn place(&mut self, index: usize, size: Size) -> Option<Placement> {
        if index >= self.count {
            fwarn!(index, count = self.count, "MeasurePass: out-of-bounds index");
            debug_assert!(
                index < self.count,
                "MeasurePass: out-of-bounds index (i={index}, count={})",
                self.count
            );
            return None;
        }

        let next = self.placements.len();
        if index < next {
            return Some(self.placements[index]);
        }
        if index > next {
            fwarn!(
                expected = next,
                got = index,
                "MeasurePass: items must be measured in sequence order"
            );
            debug_assert!(
                index == next,
                "MeasurePass: items must be measured in sequence order (expected={next}, got={index})"
            );
            return None;
        }

        let placement = self.cursor.place(size);
        self.placements.push(placement);
        if self.placements.len() == self.count {
            self.total_height = Some(self.cursor.finish());
        }
        Some(placement)
    }

    /// Delivers the settled height to `channel`, once.
    ///
    /// Returns `None` while the pass is incomplete or after the height was already delivered.
    pub fn deliver(&mut self, channel: &mut HeightChannel) -> Option<ContainerExtent> {
        let height = self.total_height?;
        if self.delivered {
            return None;
        }
        self.delivered = true;
        fdebug!(height, count = self.count, "MeasurePass::deliver");
        Some(channel.deliver(height))
    }

    /// Hands the cursor back for the next pass. It is idle if the pass completed.
    pub fn into_cursor(self) -> FlowCursor {
        self.cursor
    }

    /// The finished pass as a [`PackResult`], `None` if incomplete.
    pub fn into_result(self) -> Option<PackResult> {
        let total_height = self.total_height?;
        Some(PackResult {
            placements: self.placements,
            total_height,
        })
    }
}
