//! Visit entries with their positions and stop once enough are found.
use quadtree::prelude::*;

fn main() -> QuadtreeResult<()> {
    let mut tree = Quadtree::create(Rect::new(-1.0, -1.0, 2.0, 2.0), 8, 4)?;
    for i in 0..64_i32 {
        let angle = f64::from(i) * std::f64::consts::TAU / 64.0;
        tree.insert(i, Point::new(0.9 * angle.cos(), 0.9 * angle.sin()))?;
    }

    let mut found = Vec::new();
    tree.query_visit(&Rect::new(0.0, 0.0, 1.0, 1.0), |id, pos| {
        found.push((*id, pos));
        found.len() < 5
    });
    for (id, pos) in &found {
        println!("{id}: ({:.3}, {:.3})", pos.x, pos.y);
    }
    Ok(())
}
