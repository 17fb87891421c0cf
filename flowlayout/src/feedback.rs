use alloc::sync::Arc;

use crate::{ContainerExtent, ContainerMode, FlowOptions, HeightCallback};

/// One-way channel from a finished pass to the container's own size.
///
/// Only settled heights go through it: callers deliver once per completed pass. Each delivery
/// supersedes the previous one.
#[derive(Clone)]
pub struct HeightChannel {
    mode: ContainerMode,
    max_height: Option<f32>,
    height: f32,
    extent: ContainerExtent,
    deliveries: u64,
    on_change: Option<HeightCallback>,
}

impl HeightChannel {
    pub fn new(mode: ContainerMode, max_height: Option<f32>) -> Self {
        let (height, extent) = match mode {
            ContainerMode::Scrollable => (0.0, ContainerExtent::Exact(0.0)),
            ContainerMode::Bounded => (f32::INFINITY, ContainerExtent::Unbounded),
        };
        Self {
            mode,
            max_height,
            height,
            extent,
            deliveries: 0,
            on_change: None,
        }
    }

    pub fn from_options(options: &FlowOptions) -> Self {
        let mut channel = Self::new(options.mode, options.max_height);
        channel.on_change = options.on_height_change.clone();
        channel
    }

    pub fn mode(&self) -> ContainerMode {
        self.mode
    }

    /// The last delivered height.
    ///
    /// Before the first delivery this is `0` for scrollable containers and `f32::INFINITY` for
    /// bounded ones.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn extent(&self) -> ContainerExtent {
        self.extent
    }

    /// Number of heights delivered so far.
    pub fn deliveries(&self) -> u64 {
        self.deliveries
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(f32) + Send + Sync + 'static>) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Publishes the settled height of a pass and returns the resulting container extent.
    pub fn deliver(&mut self, height: f32) -> ContainerExtent {
        self.height = height;
        self.extent = match self.mode {
            ContainerMode::Scrollable => ContainerExtent::Exact(height),
            ContainerMode::Bounded => {
                ContainerExtent::AtMost(self.max_height.map_or(height, |cap| height.min(cap)))
            }
        };
        self.deliveries = self.deliveries.saturating_add(1);
        fdebug!(
            height,
            deliveries = self.deliveries,
            "HeightChannel::deliver"
        );
        if let Some(cb) = &self.on_change {
            cb(height);
        }
        self.extent
    }
}

impl core::fmt::Debug for HeightChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeightChannel")
            .field("mode", &self.mode)
            .field("max_height", &self.max_height)
            .field("height", &self.height)
            .field("extent", &self.extent)
            .field("deliveries", &self.deliveries)
            .finish_non_exhaustive()
    }
}
