use alloc::vec::Vec;

use crate::{FlowCursor, FlowOptions, PackResult, Size};

/// Packs already-measured items in one pure pass.
///
/// `sizes[i]` is the intrinsic size of item `i`. Placements come back in the same order.
pub fn pack(sizes: &[Size], container_width: f32, options: &FlowOptions) -> PackResult {
    pack_iter(sizes.iter().copied(), container_width, options)
}

/// Like [`pack`], for sizes that are produced lazily.
pub fn pack_iter(
    sizes: impl IntoIterator<Item = Size>,
    container_width: f32,
    options: &FlowOptions,
) -> PackResult {
    let mut cursor = FlowCursor::from_options(options);
    pack_with_cursor(&mut cursor, sizes, container_width)
}

/// Runs a full pass on a caller-owned cursor. The cursor is idle again on return.
pub fn pack_with_cursor(
    cursor: &mut FlowCursor,
    sizes: impl IntoIterator<Item = Size>,
    container_width: f32,
) -> PackResult {
    let sizes = sizes.into_iter();
    let mut placements = Vec::with_capacity(sizes.size_hint().0);
    cursor.reset(container_width);
    for size in sizes {
        placements.push(cursor.place(size));
    }
    let total_height = cursor.finish();
    PackResult {
        placements,
        total_height,
    }
}
