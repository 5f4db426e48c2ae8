//! Load split thresholds from TOML and compare tree shapes.
use quadtree::prelude::*;

const CONFIG: &str = r#"
# Split sooner, but never deeper than three levels
max_items = 4
max_depth = 3
"#;

fn main() -> Result<(), QuadTreeError> {
    let config = QuadTreeConfig::from_toml_str(CONFIG)?;
    println!("Loaded config: {:?}", config);

    let bounds = Rect::new(0.0, 0.0, 256.0, 256.0);
    let mut tuned = QuadTree::with_config(bounds, config)?;
    let mut default = QuadTree::new(bounds)?;

    for i in 0..64 {
        let rect = Rect::new(f64::from(i % 8) * 30.0 + 2.0, f64::from(i / 8) * 30.0 + 2.0, 10.0, 10.0);
        tuned.insert(rect);
        default.insert(rect);
    }

    println!("tuned:   {} nodes, depth {}", tuned.node_count(), tuned.depth());
    println!("default: {} nodes, depth {}", default.node_count(), default.depth());

    assert!(tuned.depth() <= 3, "Depth cap from the config must hold");
    assert_eq!(tuned.len(), default.len());
    Ok(())
}
