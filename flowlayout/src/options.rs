use alloc::sync::Arc;

use crate::{ContainerMode, DEFAULT_ITEM_SPACING, RowHeightPolicy, SpacingPolicy};

/// A callback fired with the settled content height at the end of every pass.
pub type HeightCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Configuration for [`crate::FlowLayout`], [`crate::FlowCursor`] and [`crate::pack`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct FlowOptions {
    pub mode: ContainerMode,
    /// Gap between items. Negative values are treated as zero.
    pub spacing: f32,
    pub spacing_policy: SpacingPolicy,
    pub row_height: RowHeightPolicy,
    /// Optional cap on the container height in [`ContainerMode::Bounded`].
    ///
    /// Ignored in scrollable mode.
    pub max_height: Option<f32>,
    /// Optional external handle that receives every delivered height.
    pub on_height_change: Option<HeightCallback>,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self::new(ContainerMode::default())
    }
}

impl FlowOptions {
    pub fn new(mode: ContainerMode) -> Self {
        Self {
            mode,
            spacing: DEFAULT_ITEM_SPACING,
            spacing_policy: SpacingPolicy::default(),
            row_height: RowHeightPolicy::default(),
            max_height: None,
            on_height_change: None,
        }
    }

    pub(crate) fn effective_spacing(&self) -> f32 {
        if self.spacing > 0.0 { self.spacing } else { 0.0 }
    }

    pub fn with_mode(mut self, mode: ContainerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_spacing_policy(mut self, spacing_policy: SpacingPolicy) -> Self {
        self.spacing_policy = spacing_policy;
        self
    }

    pub fn with_row_height_policy(mut self, row_height: RowHeightPolicy) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_max_height(mut self, max_height: Option<f32>) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_on_height_change(
        mut self,
        on_height_change: Option<impl Fn(f32) + Send + Sync + 'static>,
    ) -> Self {
        self.on_height_change = on_height_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for FlowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlowOptions")
            .field("mode", &self.mode)
            .field("spacing", &self.spacing)
            .field("spacing_policy", &self.spacing_policy)
            .field("row_height", &self.row_height)
            .field("max_height", &self.max_height)
            .finish_non_exhaustive()
    }
}
