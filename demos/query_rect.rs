//! Collect payloads inside a rectangle.
use quadtree::prelude::*;

fn main() -> QuadtreeResult<()> {
    let mut tree = Quadtree::create(Rect::new(0.0, 0.0, 100.0, 100.0), 6, 2)?;
    tree.insert("harbor", Point::new(12.0, 8.0))?;
    tree.insert("lighthouse", Point::new(3.5, 41.0))?;
    tree.insert("market", Point::new(55.0, 52.0))?;
    tree.insert("mill", Point::new(80.0, 90.0))?;

    let west = tree.query(&Rect::new(0.0, 0.0, 50.0, 100.0));
    println!("West half: {:?}", west);

    if let Err(err) = tree.insert("reef", Point::new(120.0, 10.0)) {
        println!("Rejected: {err}");
    }
    println!("Stored {} places", tree.size());
    Ok(())
}
