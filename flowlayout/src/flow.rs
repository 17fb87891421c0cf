use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    ContainerExtent, ContainerMode, FlowCursor, FlowOptions, HeightChannel, Placement, Size,
};

/// Maps an item to the visual the host measures and renders.
pub type ViewMapping<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// Everything a host needs to render one pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowFrame {
    pub placements: Vec<Placement>,
    pub total_height: f32,
    /// Height constraint to apply to the container itself.
    pub extent: ContainerExtent,
}

/// A row-wrapping flow layout over an ordered item sequence.
///
/// The layout holds no UI objects. A host drives it by calling [`FlowLayout::layout`] with the
/// container width and a measurement hook; items are identified by their position in the
/// sequence, so `T` needs no equality or hashing.
#[derive(Clone)]
pub struct FlowLayout<T, V> {
    options: FlowOptions,
    items: Vec<T>,
    view_mapping: ViewMapping<T, V>,
    cursor: FlowCursor,
    channel: HeightChannel,
}

impl<T, V> FlowLayout<T, V> {
    pub fn new(
        mode: ContainerMode,
        items: Vec<T>,
        view_mapping: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        Self::with_options(FlowOptions::new(mode), items, view_mapping)
    }

    pub fn with_options(
        options: FlowOptions,
        items: Vec<T>,
        view_mapping: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        fdebug!(
            count = items.len(),
            mode = ?options.mode,
            spacing = options.spacing,
            "FlowLayout::new"
        );
        Self {
            cursor: FlowCursor::from_options(&options),
            channel: HeightChannel::from_options(&options),
            options,
            items,
            view_mapping: Arc::new(view_mapping),
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.options.spacing = spacing;
        self.cursor = FlowCursor::from_options(&self.options);
        self
    }

    pub fn with_on_height_change(
        mut self,
        on_height_change: Option<impl Fn(f32) + Send + Sync + 'static>,
    ) -> Self {
        self.options = self.options.with_on_height_change(on_height_change);
        self.channel = HeightChannel::from_options(&self.options);
        self
    }

    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    pub fn mode(&self) -> ContainerMode {
        self.options.mode
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the item sequence. Takes effect on the next pass.
    pub fn set_items(&mut self, items: Vec<T>) {
        ftrace!(count = items.len(), "FlowLayout::set_items");
        self.items = items;
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Builds the visual for the item at `index`.
    pub fn view_for(&self, index: usize) -> Option<V> {
        self.items.get(index).map(|item| (self.view_mapping)(item))
    }

    /// Last delivered content height (see [`HeightChannel::height`]).
    pub fn height(&self) -> f32 {
        self.channel.height()
    }

    pub fn container_extent(&self) -> ContainerExtent {
        self.channel.extent()
    }

    pub fn height_channel(&self) -> &HeightChannel {
        &self.channel
    }

    /// Runs one pass: builds each item's view, asks `measure` for its intrinsic size, places it,
    /// then delivers the total height to the height channel.
    pub fn layout(
        &mut self,
        container_width: f32,
        mut measure: impl FnMut(usize, &V) -> Size,
    ) -> FlowFrame {
        let mut placements = Vec::with_capacity(self.items.len());
        self.cursor.reset(container_width);
        for (index, item) in self.items.iter().enumerate() {
            let view = (self.view_mapping)(item);
            placements.push(self.cursor.place(measure(index, &view)));
        }
        self.finish_pass(placements)
    }

    /// Runs one pass over sizes the host measured up front.
    ///
    /// `sizes` must hold one entry per item. Missing entries are treated as zero-sized, extra
    /// entries are ignored.
    pub fn layout_measured(&mut self, container_width: f32, sizes: &[Size]) -> FlowFrame {
        if sizes.len() != self.items.len() {
            fwarn!(
                sizes = sizes.len(),
                count = self.items.len(),
                "FlowLayout::layout_measured: size count does not match item count"
            );
        }
        let mut placements = Vec::with_capacity(self.items.len());
        self.cursor.reset(container_width);
        for index in 0..self.items.len() {
            let size = sizes.get(index).copied().unwrap_or(Size::ZERO);
            placements.push(self.cursor.place(size));
        }
        self.finish_pass(placements)
    }

    fn finish_pass(&mut self, placements: Vec<Placement>) -> FlowFrame {
        let total_height = self.cursor.finish();
        let extent = self.channel.deliver(total_height);
        FlowFrame {
            placements,
            total_height,
            extent,
        }
    }
}

impl<T: core::fmt::Debug, V> core::fmt::Debug for FlowLayout<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlowLayout")
            .field("options", &self.options)
            .field("items", &self.items)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}
