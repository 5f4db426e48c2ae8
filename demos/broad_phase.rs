//! Find collision candidates for a query rectangle, then filter them exactly.
use quadtree::prelude::*;

fn main() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    tree.insert(Rect::new(10.0, 10.0, 5.0, 5.0));   // top-left
    tree.insert(Rect::new(12.0, 30.0, 5.0, 5.0));   // top-left, away from the query
    tree.insert(Rect::new(70.0, 70.0, 5.0, 5.0));   // bottom-right
    tree.insert(Rect::new(45.0, 45.0, 10.0, 10.0)); // straddles the center

    let query = Rect::new(8.0, 8.0, 4.0, 4.0);
    let candidates = tree.retrieve(&query);
    println!("Candidates: {:?}", candidates);

    let hits: Vec<_> = candidates.into_iter().filter(|r| r.intersects(&query)).collect();
    println!("Hits: {:?}", hits);

    assert_eq!(hits.len(), 1, "Expected one overlapping box");
    assert_eq!(*hits[0], Rect::new(10.0, 10.0, 5.0, 5.0));
}
