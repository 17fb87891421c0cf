// Example: a retained-mode host that measures items one at a time during its own layout
// callback, then resizes the container from the settled height.
use flowlayout::{ContainerExtent, FlowCursor, FlowOptions, HeightChannel, Size};
use flowlayout_adapter::MeasurePass;

struct Label {
    text: &'static str,
}

impl Label {
    // Stand-in for the host's text measurement.
    fn intrinsic_size(&self) -> Size {
        Size::new(self.text.len() as f32 * 7.0 + 16.0, 28.0)
    }
}

fn main() {
    let labels = [
        Label { text: "Some long item here" },
        Label { text: "And then some longer one" },
        Label { text: "Short" },
        Label { text: "Items" },
        Label { text: "and" },
        Label { text: "then some short short short ones" },
    ];

    let options = FlowOptions::default();
    let mut channel = HeightChannel::from_options(&options);
    let mut cursor = FlowCursor::from_options(&options);

    for container_width in [360.0, 240.0] {
        let mut pass = MeasurePass::begin(cursor, labels.len(), container_width);
        for (i, label) in labels.iter().enumerate() {
            // Hosts may ask for the same geometry twice; the second answer is cached.
            pass.place(i, label.intrinsic_size());
            if let Some(p) = pass.place(i, label.intrinsic_size()) {
                println!("w={container_width} {:<34} x={:>6.1} y={:>6.1}", label.text, p.x, p.y);
            }
        }
        match pass.deliver(&mut channel) {
            Some(ContainerExtent::Exact(h)) => println!("container height = {h}"),
            other => println!("container extent = {other:?}"),
        }
        cursor = pass.into_cursor();
    }
}
