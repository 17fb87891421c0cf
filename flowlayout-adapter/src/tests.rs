use crate::*;

use alloc::vec::Vec;
use flowlayout::{
    ContainerExtent, ContainerMode, FlowCursor, FlowLayout, FlowOptions, HeightChannel, Size, pack,
};

fn dims() -> Vec<Size> {
    [(30.0, 10.0), (30.0, 12.0), (50.0, 8.0), (500.0, 20.0), (10.0, 4.0)]
        .iter()
        .map(|&(w, h)| Size::new(w, h))
        .collect()
}

fn options() -> FlowOptions {
    FlowOptions::default().with_spacing(0.0)
}

#[test]
fn incremental_pass_matches_batch_pack() {
    let sizes = dims();
    let mut pass = MeasurePass::begin(FlowCursor::from_options(&options()), sizes.len(), 100.0);
    for (i, &size) in sizes.iter().enumerate() {
        assert!(!pass.is_complete());
        assert_eq!(pass.total_height(), None);
        assert!(pass.place(i, size).is_some());
    }
    assert!(pass.is_complete());
    assert_eq!(
        pass.progress(),
        PassProgress {
            count: 5,
            placed: 5,
            complete: true
        }
    );

    let batch = pack(&sizes, 100.0, &options());
    assert_eq!(pass.total_height(), Some(batch.total_height));
    assert_eq!(pass.placements(), batch.placements.as_slice());
    assert_eq!(pass.into_result(), Some(batch));
}

#[test]
fn requerying_a_placed_index_returns_the_same_placement() {
    let sizes = dims();
    let mut pass = MeasurePass::begin(FlowCursor::from_options(&options()), sizes.len(), 100.0);
    let first = pass.place(0, sizes[0]);
    let second = pass.place(1, sizes[1]);
    // Different size on re-query: ignored, the settled placement wins.
    assert_eq!(pass.place(0, Size::new(99.0, 99.0)), first);
    assert_eq!(pass.place(1, sizes[1]), second);
    assert_eq!(pass.progress().placed, 2);
}

#[test]
fn cursor_comes_back_idle_after_the_last_item() {
    let sizes = dims();
    let mut pass = MeasurePass::begin(FlowCursor::from_options(&options()), sizes.len(), 100.0);
    for (i, &size) in sizes.iter().enumerate() {
        pass.place(i, size);
    }
    let cursor = pass.into_cursor();
    assert!(cursor.is_idle());

    // A second pass on the reused cursor is indistinguishable from a cold start.
    let mut warm = MeasurePass::begin(cursor, sizes.len(), 100.0);
    let mut cold = MeasurePass::begin(FlowCursor::from_options(&options()), sizes.len(), 100.0);
    for (i, &size) in sizes.iter().enumerate() {
        assert_eq!(warm.place(i, size), cold.place(i, size));
    }
    assert_eq!(warm.total_height(), cold.total_height());
}

#[test]
fn empty_pass_completes_immediately_with_zero_height() {
    let mut pass = MeasurePass::begin(FlowCursor::default(), 0, 100.0);
    assert!(pass.is_complete());
    assert_eq!(pass.total_height(), Some(0.0));

    let mut channel = HeightChannel::new(ContainerMode::Scrollable, None);
    assert_eq!(pass.deliver(&mut channel), Some(ContainerExtent::Exact(0.0)));
    assert_eq!(channel.deliveries(), 1);
}

#[test]
fn height_is_delivered_only_once_and_only_when_settled() {
    let sizes = dims();
    let mut channel = HeightChannel::new(ContainerMode::Bounded, Some(30.0));
    let mut pass = MeasurePass::begin(FlowCursor::from_options(&options()), sizes.len(), 100.0);

    for (i, &size) in sizes.iter().enumerate() {
        assert_eq!(pass.deliver(&mut channel), None);
        pass.place(i, size);
    }
    assert_eq!(channel.deliveries(), 0);
    assert_eq!(channel.extent(), ContainerExtent::Unbounded);

    // Rows: [30, 30] 12 tall, [50] 8, [500] 20, [10] 4 => 44.
    assert_eq!(pass.total_height(), Some(44.0));
    assert_eq!(pass.deliver(&mut channel), Some(ContainerExtent::AtMost(30.0)));
    assert_eq!(pass.deliver(&mut channel), None);
    assert_eq!(channel.deliveries(), 1);
    assert_eq!(channel.height(), 44.0);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "sequence order")]
fn skipping_an_index_is_a_contract_violation() {
    let mut pass = MeasurePass::begin(FlowCursor::default(), 3, 100.0);
    pass.place(1, Size::new(10.0, 10.0));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out-of-bounds")]
fn out_of_bounds_index_is_a_contract_violation() {
    let mut pass = MeasurePass::begin(FlowCursor::default(), 1, 100.0);
    pass.place(1, Size::new(10.0, 10.0));
}

#[cfg(not(debug_assertions))]
#[test]
fn contract_violations_are_ignored_in_release() {
    let mut pass = MeasurePass::begin(FlowCursor::default(), 2, 100.0);
    assert_eq!(pass.place(1, Size::new(10.0, 10.0)), None);
    assert_eq!(pass.place(2, Size::new(10.0, 10.0)), None);
    assert_eq!(pass.progress().placed, 0);
}

fn controller() -> Controller<u32, u32> {
    Controller::new(FlowLayout::with_options(
        options(),
        alloc::vec![30, 30, 50],
        |w: &u32| *w,
    ))
}

fn measure(_: usize, w: &u32) -> Size {
    Size::new(*w as f32, 10.0)
}

#[test]
fn controller_waits_for_a_width() {
    let mut c = controller();
    assert!(c.frame(measure).is_none());
    assert_eq!(c.passes(), 0);
    assert!(c.on_container_width(100.0));
    assert_eq!(c.frame(measure).map(|f| f.total_height), Some(20.0));
    assert_eq!(c.passes(), 1);
}

#[test]
fn controller_reuses_the_frame_until_width_or_items_change() {
    let mut c = controller();
    c.on_container_width(100.0);
    c.frame(measure);
    c.frame(measure);
    assert!(!c.on_container_width(100.0));
    c.frame(measure);
    assert_eq!(c.passes(), 1);
    assert!(!c.needs_layout());

    assert!(c.on_container_width(200.0));
    assert_eq!(c.frame(measure).map(|f| f.total_height), Some(10.0));
    assert_eq!(c.passes(), 2);

    c.set_items(alloc::vec![90, 90]);
    assert!(c.needs_layout());
    let frame = c.frame(measure).cloned();
    assert_eq!(frame.map(|f| f.total_height), Some(10.0));
    assert_eq!(c.passes(), 3);

    c.on_items_changed();
    c.frame(measure);
    assert_eq!(c.passes(), 4);

    c.layout_mut().push(300);
    c.frame(measure);
    assert_eq!(c.passes(), 5);
    assert_eq!(c.last_frame().map(|f| f.placements.len()), Some(3));
}

#[test]
fn applying_the_height_does_not_trigger_another_pass() {
    let mut c = controller();
    c.on_container_width(100.0);
    let extent = c.frame(measure).map(|f| f.extent);
    assert_eq!(extent, Some(ContainerExtent::Exact(20.0)));

    // A host resizes the container to the reported height; the width it reports back is the
    // same, so the layout has settled.
    for _ in 0..3 {
        c.on_container_width(100.0);
        assert_eq!(c.frame(measure).map(|f| f.extent), extent);
    }
    assert_eq!(c.passes(), 1);
    assert_eq!(c.layout().height_channel().deliveries(), 1);
}

#[test]
fn controller_frame_measured_matches_callback_frame() {
    let mut a = controller();
    let mut b = controller();
    a.on_container_width(100.0);
    b.on_container_width(100.0);
    let sizes: Vec<Size> = [30u32, 30, 50].iter().map(|w| measure(0, w)).collect();
    let fa = a.frame(measure).cloned();
    let fb = b.frame_measured(&sizes).cloned();
    assert_eq!(fa, fb);
    assert_eq!(a.container_width(), Some(100.0));
    assert_eq!(a.into_layout().height(), 20.0);
}

#[test]
fn degenerate_widths_settle_after_one_pass() {
    let mut c = controller();
    assert!(c.on_container_width(f32::NAN));
    assert_eq!(c.container_width(), Some(0.0));
    for width in [f32::NAN, -5.0, 0.0, f32::NAN] {
        assert!(!c.on_container_width(width));
        assert!(c.frame(measure).is_some());
    }
    assert_eq!(c.passes(), 1);
    assert_eq!(c.layout().height_channel().deliveries(), 1);
    // Every item sits on its own row in a zero-wide container.
    assert_eq!(c.last_frame().map(|f| f.total_height), Some(30.0));
}

#[test]
fn controller_debug_does_not_require_debug_views() {
    struct Opaque;
    let mut c = Controller::new(FlowLayout::new(
        ContainerMode::Scrollable,
        alloc::vec![1u32, 2],
        |_: &u32| Opaque,
    ));
    c.on_container_width(50.0);
    let s = std::format!("{c:?}");
    assert!(s.starts_with("Controller"));
    assert!(s.contains("width: Some(50.0)"));
}
