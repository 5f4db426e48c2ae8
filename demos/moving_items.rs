//! Keep a tree in sync with moving entities by removing and re-inserting them.
//!
//! Run with `RUST_LOG=quadtree=trace` to watch splits and push-downs.
use quadtree::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ship {
    id: u32,
    rect: Rect,
    speed: f64,
}

impl Bounded for Ship {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

fn main() -> Result<(), QuadTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 640.0, 480.0))?;
    let mut ships: Vec<Ship> = (0..40)
        .map(|id| Ship {
            id,
            rect: Rect::new(f64::from(id % 8) * 70.0 + 10.0, f64::from(id / 8) * 40.0 + 10.0, 16.0, 16.0),
            speed: f64::from(id % 5) + 1.0,
        })
        .collect();
    for ship in &ships {
        tree.insert(*ship);
    }
    info!(nodes = tree.node_count(), depth = tree.depth(), "indexed fleet");

    for frame in 0..30 {
        for ship in &mut ships {
            tree.remove(ship);
            ship.rect.y = (ship.rect.y + ship.speed * 4.0) % 460.0;
            tree.insert(*ship);
        }

        let mut contacts = 0;
        for ship in &ships {
            contacts += tree
                .retrieve(ship)
                .into_iter()
                .filter(|other| other.id != ship.id && other.rect.intersects(&ship.rect))
                .count();
        }
        if frame % 10 == 0 {
            info!(frame, contacts = contacts / 2, nodes = tree.node_count(), "frame done");
        }
    }

    // The arena grew: keep every ship while changing the bounds
    tree.rebuild(Rect::new(0.0, 0.0, 1280.0, 960.0))?;
    info!(items = tree.len(), depth = tree.depth(), "rebuilt for the larger arena");
    assert_eq!(tree.len(), ships.len());
    Ok(())
}
