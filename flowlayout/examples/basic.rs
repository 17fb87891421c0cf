// Example: pack a handful of tags into a fixed-width container.
use flowlayout::{FlowOptions, Size, pack};

fn main() {
    let tags = [
        "Some long item here",
        "And then some longer one",
        "Short",
        "Items",
        "Here",
        "And",
        "A",
        "Few",
        "More",
    ];
    // Pretend every character is 7 units wide and every line 16 units tall.
    let sizes: Vec<Size> = tags
        .iter()
        .map(|t| Size::new(t.len() as f32 * 7.0, 16.0))
        .collect();

    let r = pack(&sizes, 320.0, &FlowOptions::default());
    for (tag, p) in tags.iter().zip(&r.placements) {
        println!("row={} x={:>6.1} y={:>6.1} {tag}", p.row, p.x, p.y);
    }
    println!("rows={} total_height={}", r.row_count(), r.total_height);
}
