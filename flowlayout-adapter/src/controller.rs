use alloc::vec::Vec;

use flowlayout::{FlowFrame, FlowLayout, Size};

/// A framework-neutral controller that owns a [`FlowLayout`] and decides when a new pass is
/// needed.
///
/// Packing depends on the container width and the item set, never on the container height. The
/// controller therefore re-packs only after `on_container_width` reports a different width or
/// the items change; applying the reported height to the container cannot trigger another pass,
/// so height feedback settles after one round trip.
///
/// Adapters drive it by calling:
/// - `on_container_width` when the container is resized
/// - `set_items` / `on_items_changed` when the data or the item content changes
/// - `frame(measure)` each time they render
#[derive(Clone)]
pub struct Controller<T, V> {
    layout: FlowLayout<T, V>,
    width: Option<f32>,
    dirty: bool,
    frame: Option<FlowFrame>,
    passes: u64,
}

impl<T, V> Controller<T, V> {
    pub fn new(layout: FlowLayout<T, V>) -> Self {
        Self {
            layout,
            width: None,
            dirty: true,
            frame: None,
            passes: 0,
        }
    }

    pub fn layout(&self) -> &FlowLayout<T, V> {
        &self.layout
    }

    /// Mutable access to the layout. Marks the controller dirty.
    pub fn layout_mut(&mut self) -> &mut FlowLayout<T, V> {
        self.dirty = true;
        &mut self.layout
    }

    pub fn into_layout(self) -> FlowLayout<T, V> {
        self.layout
    }

    pub fn container_width(&self) -> Option<f32> {
        self.width
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn needs_layout(&self) -> bool {
        self.dirty || self.frame.is_none()
    }

    /// Call this when the UI reports the container width.
    ///
    /// Negative and NaN widths are treated as zero.
    ///
    /// Returns `true` if the width changed and a new pass is due.
    pub fn on_container_width(&mut self, width: f32) -> bool {
        let width = if width > 0.0 { width } else { 0.0 };
        if self.width == Some(width) {
            return false;
        }
        self.width = Some(width);
        self.dirty = true;
        true
    }

    /// Call this when item content changed in a way that affects measured sizes.
    pub fn on_items_changed(&mut self) {
        self.dirty = true;
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.layout.set_items(items);
        self.dirty = true;
    }

    /// The most recent frame, without running a pass.
    pub fn last_frame(&self) -> Option<&FlowFrame> {
        self.frame.as_ref()
    }

    /// Returns the current frame, running a pass first if needed.
    ///
    /// Returns `None` until a container width is known.
    pub fn frame(&mut self, measure: impl FnMut(usize, &V) -> Size) -> Option<&FlowFrame> {
        let width = self.width?;
        if self.needs_layout() {
            let frame = self.layout.layout(width, measure);
            self.commit(frame);
        }
        self.frame.as_ref()
    }

    /// Like [`Controller::frame`], with sizes measured up front.
    pub fn frame_measured(&mut self, sizes: &[Size]) -> Option<&FlowFrame> {
        let width = self.width?;
        if self.needs_layout() {
            let frame = self.layout.layout_measured(width, sizes);
            self.commit(frame);
        }
        self.frame.as_ref()
    }

    fn commit(&mut self, frame: FlowFrame) {
        self.passes = self.passes.saturating_add(1);
        fdebug!(
            passes = self.passes,
            total_height = frame.total_height,
            "Controller: pass committed"
        );
        self.frame = Some(frame);
        self.dirty = false;
    }
}

impl<T: core::fmt::Debug, V> core::fmt::Debug for Controller<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("layout", &self.layout)
            .field("width", &self.width)
            .field("dirty", &self.dirty)
            .field("frame", &self.frame)
            .field("passes", &self.passes)
            .finish()
    }
}
