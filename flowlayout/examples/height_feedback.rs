// Example: a component re-laid out at several widths, reporting its height to the host.
use flowlayout::{ContainerMode, FlowLayout, FlowOptions, Size};

fn main() {
    let words: Vec<String> = "the quick brown fox jumps over the lazy dog"
        .split(' ')
        .map(str::to_owned)
        .collect();

    let options = FlowOptions::new(ContainerMode::Bounded)
        .with_max_height(Some(80.0))
        .with_on_height_change(Some(|h: f32| println!("  height -> {h}")));
    let mut flow = FlowLayout::with_options(options, words, |w: &String| w.chars().count());

    println!("initial extent={:?}", flow.container_extent());
    for width in [400.0, 160.0, 60.0] {
        println!("width={width}");
        let frame = flow.layout(width, |_, chars| Size::new(*chars as f32 * 8.0, 14.0));
        println!("  extent={:?}", frame.extent);
    }
}
