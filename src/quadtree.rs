//! Region quad-tree over axis-aligned rectangles.
//!
//! Each node covers a rectangle and owns either no children or exactly four,
//! one per quadrant. Items are routed to the single quadrant that fully
//! contains them; anything straddling a midline stays with the node whose
//! midlines it crosses. A node splits once it directly holds more than
//! `max_items` items and is shallower than `max_depth`.
//!
//! Queries return a broad-phase candidate set: the items along the routing
//! path of the query rectangle. Callers run their own exact overlap test.

use tracing::{debug, trace};

use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;
use crate::rect::{Bounded, Rect};

/// Child slot of a split node.
///
/// Discriminants are the child indices: top-right first, then
/// counter-clockwise.
#[repr(usize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// x past the vertical midline, y above the horizontal one
    TopRight = 0,
    /// x before the vertical midline, y above the horizontal one
    TopLeft = 1,
    /// x before the vertical midline, y below the horizontal one
    BottomLeft = 2,
    /// x past the vertical midline, y below the horizontal one
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child order
    pub const ALL: [Self; 4] = [Self::TopRight, Self::TopLeft, Self::BottomLeft, Self::BottomRight];

    /// Index of this quadrant in a node's child array
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Quadrant of `bounds` that fully holds `rect`, if any.
///
/// Top membership needs both horizontal edges above the midline, bottom
/// membership only looks at the top edge.
fn quadrant_of(bounds: &Rect, rect: &Rect) -> Option<Quadrant> {
    let (mid_x, mid_y) = bounds.center();

    let top = rect.y < mid_y && rect.y + rect.height < mid_y;
    let bottom = rect.y > mid_y;

    if rect.x < mid_x && rect.x + rect.width < mid_x {
        if top {
            Some(Quadrant::TopLeft)
        } else if bottom {
            Some(Quadrant::BottomLeft)
        } else {
            None
        }
    } else if rect.x > mid_x {
        if top {
            Some(Quadrant::TopRight)
        } else if bottom {
            Some(Quadrant::BottomRight)
        } else {
            None
        }
    } else {
        None
    }
}

/// A quad-tree node; the root node is the whole index.
///
/// `T` is whatever handle the caller wants back from queries: an id, a
/// reference, an `Rc`, or the rectangle itself. Routing only needs
/// [`Bounded`].
///
/// ```
/// use quadtree::prelude::*;
///
/// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
/// tree.insert(Rect::new(10.0, 10.0, 5.0, 5.0));
/// tree.insert(Rect::new(70.0, 70.0, 5.0, 5.0));
///
/// let candidates = tree.retrieve(&Rect::new(8.0, 8.0, 4.0, 4.0));
/// assert!(candidates.contains(&&Rect::new(10.0, 10.0, 5.0, 5.0)));
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    /// Region covered by this node
    bounds: Rect,
    /// Distance from the root
    level: u32,
    /// Thresholds shared with every descendant
    config: QuadTreeConfig,
    /// None for a leaf
    children: Option<Box<[QuadTree<T>; 4]>>,
    /// Items held directly at this level
    items: Vec<T>,
}

impl<T> QuadTree<T> {
    /// Creates a root node with the default thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] when `bounds` has a non-finite
    /// field or a negative extent.
    pub fn new(bounds: Rect) -> Result<Self, QuadTreeError> {
        Self::with_config(bounds, QuadTreeConfig::default())
    }

    /// Creates a root node with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] for unusable bounds and
    /// [`QuadTreeError::InvalidConfig`] for unusable thresholds.
    pub fn with_config(bounds: Rect, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        Self::with_level(bounds, 0, config)
    }

    /// Creates a detached node that believes it sits at `level`.
    ///
    /// The level only affects the depth cap: a node at `level` splits at most
    /// `config.max_depth - level` more times.
    ///
    /// # Errors
    ///
    /// Same as [`QuadTree::with_config`].
    pub fn with_level(bounds: Rect, level: u32, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        bounds.validate()?;
        config.validate()?;
        Ok(Self::node(bounds, level, config))
    }

    fn node(bounds: Rect, level: u32, config: QuadTreeConfig) -> Self {
        Self {
            bounds,
            level,
            config,
            children: None,
            items: Vec::new(),
        }
    }

    /// Region covered by this node
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Depth of this node, the root being 0
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Thresholds in effect
    #[inline]
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Items held directly by this node, excluding descendants
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The four children in [`Quadrant`] order, or None for a leaf
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Child covering `quadrant`, or None for a leaf
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|children| &children[quadrant.index()])
    }

    /// Returns true when this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns true when neither this node nor any descendant holds an item
    pub fn is_empty(&self) -> bool {
        let children_empty = self
            .children
            .as_deref()
            .is_none_or(|children| children.iter().all(Self::is_empty));
        children_empty && self.items.is_empty()
    }

    /// Number of items in this subtree
    pub fn len(&self) -> usize {
        let below: usize = self
            .children
            .as_deref()
            .map_or(0, |children| children.iter().map(Self::len).sum());
        below + self.items.len()
    }

    /// Deepest level present in this subtree
    pub fn depth(&self) -> u32 {
        self.children
            .as_deref()
            .and_then(|children| children.iter().map(Self::depth).max())
            .unwrap_or(self.level)
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |children| children.iter().map(Self::node_count).sum::<usize>())
    }

    /// Drops every descendant and every item, leaving an empty leaf.
    pub fn clear(&mut self) {
        self.items.clear();
        self.children = None;
    }

    /// Routes `rect` to the child quadrant that fully holds it.
    ///
    /// Returns None when the rectangle crosses a midline. The answer depends
    /// only on this node's bounds, not on whether children exist yet.
    #[inline]
    pub fn classify<R: Bounded + ?Sized>(&self, rect: &R) -> Option<Quadrant> {
        quadrant_of(&self.bounds, &rect.bounds())
    }

    fn route<R: Bounded + ?Sized>(&self, rect: &R) -> Option<&Self> {
        let quadrant = self.classify(rect)?;
        self.child(quadrant)
    }

    fn route_mut<R: Bounded + ?Sized>(&mut self, rect: &R) -> Option<&mut Self> {
        let quadrant = self.classify(rect)?;
        self.children
            .as_deref_mut()
            .map(|children| &mut children[quadrant.index()])
    }

    /// Creates four empty children covering the quadrants of the current
    /// bounds.
    ///
    /// Items are not moved. Splitting a node that already has children
    /// replaces them and drops everything they held.
    pub fn split(&mut self) {
        if let Some(old) = self.children.take() {
            let dropped: usize = old.iter().map(Self::len).sum();
            if dropped > 0 {
                debug!(level = self.level, dropped, "split discarded a populated subtree");
            }
        }

        let Rect { x, y, width, height } = self.bounds;
        let sub_width = width / 2.0;
        let sub_height = height / 2.0;
        let level = self.level + 1;
        let config = self.config;
        let quadrant = |qx: f64, qy: f64| Self::node(Rect::new(qx, qy, sub_width, sub_height), level, config);

        self.children = Some(Box::new([
            quadrant(x + sub_width, y),
            quadrant(x, y),
            quadrant(x, y + sub_height),
            quadrant(x + sub_width, y + sub_height),
        ]));
        trace!(level = self.level, bounds = ?self.bounds, "split node");
    }

    /// Replaces the bounds of this node.
    ///
    /// A node with children is split again at the new geometry, which drops
    /// every item held below this node. Items held directly here are kept.
    /// Use [`QuadTree::rebuild`] to keep everything.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] and leaves the tree untouched
    /// when `new_bounds` is unusable.
    pub fn resize(&mut self, new_bounds: Rect) -> Result<(), QuadTreeError> {
        new_bounds.validate()?;
        self.bounds = new_bounds;
        if self.children.is_some() {
            self.split();
        }
        Ok(())
    }

    /// Collects the broad-phase candidates for `rect`.
    ///
    /// Candidates from the child subtree on the routing path come first,
    /// followed by the items held at this level.
    pub fn retrieve<R: Bounded + ?Sized>(&self, rect: &R) -> Vec<&T> {
        let mut results = Vec::new();
        self.collect_candidates(rect, &mut results);
        results
    }

    /// Like [`QuadTree::retrieve`] but reuses the caller's buffer, which is
    /// cleared first.
    pub fn retrieve_into<'a, R: Bounded + ?Sized>(&'a self, rect: &R, results: &mut Vec<&'a T>) {
        results.clear();
        self.collect_candidates(rect, results);
    }

    fn collect_candidates<'a, R: Bounded + ?Sized>(&'a self, rect: &R, results: &mut Vec<&'a T>) {
        if let Some(child) = self.route(rect) {
            child.collect_candidates(rect, results);
        }
        results.extend(self.items.iter());
    }

    /// Iterates over every item in the subtree.
    ///
    /// Each child subtree is visited in [`Quadrant`] order before the items
    /// of the node itself.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![Frame { node: self, next_child: 0 }],
            current: Default::default(),
        }
    }

    /// Removes and returns every item, in [`QuadTree::iter`] order, leaving an
    /// empty leaf.
    pub fn drain(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        self.drain_into(&mut out);
        out
    }

    fn drain_into(&mut self, out: &mut Vec<T>) {
        if let Some(mut children) = self.children.take() {
            for child in children.iter_mut() {
                child.drain_into(out);
            }
        }
        out.append(&mut self.items);
    }
}

impl<T: Bounded> QuadTree<T> {
    /// Adds an item.
    ///
    /// The item sinks to the deepest existing node whose quadrant fully
    /// holds it. Overflowing a node below the depth cap splits it and pushes
    /// its items down.
    pub fn insert(&mut self, item: T) {
        if let Some(child) = self.route_mut(&item) {
            child.insert(item);
            return;
        }

        self.items.push(item);

        if self.items.len() > self.config.max_items && self.level < self.config.max_depth {
            if self.children.is_none() {
                self.split();
            }
            self.push_down();
        }
    }

    /// Moves every directly held item that fits a child into that child.
    fn push_down(&mut self) {
        let bounds = self.bounds;
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };

        let mut moved = 0usize;
        let mut i = 0;
        while i < self.items.len() {
            match quadrant_of(&bounds, &self.items[i].bounds()) {
                Some(quadrant) => {
                    let item = self.items.remove(i);
                    children[quadrant.index()].insert(item);
                    moved += 1;
                }
                None => i += 1,
            }
        }

        if moved > 0 {
            trace!(level = self.level, moved, kept = self.items.len(), "pushed items down");
        }
    }

    /// Re-bounds the tree without losing items.
    ///
    /// Drains the whole subtree, applies `new_bounds` and inserts every item
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] and leaves the tree untouched
    /// when `new_bounds` is unusable.
    pub fn rebuild(&mut self, new_bounds: Rect) -> Result<(), QuadTreeError> {
        new_bounds.validate()?;
        let items = self.drain();
        self.bounds = new_bounds;
        debug!(level = self.level, count = items.len(), bounds = ?new_bounds, "rebuilding quad-tree");
        for item in items {
            self.insert(item);
        }
        Ok(())
    }
}

impl<T: Bounded + PartialEq> QuadTree<T> {
    /// Removes one item equal to `item` along its routing path.
    ///
    /// The child on the path is searched first, then this node; both are
    /// always searched, so an equal item at each level is removed from both.
    /// Missing items are ignored.
    pub fn remove(&mut self, item: &T) {
        if let Some(child) = self.route_mut(item) {
            child.remove(item);
        }
        if let Some(pos) = self.items.iter().position(|held| held == item) {
            drop(self.items.remove(pos));
        }
    }

    /// Returns true when an item equal to `item` is reachable along its
    /// routing path.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item) || self.route(item).is_some_and(|child| child.contains(item))
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
struct Frame<'a, T> {
    node: &'a QuadTree<T>,
    next_child: usize,
}

/// Depth-first iterator over the items of a subtree, created by
/// [`QuadTree::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<Frame<'a, T>>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }

            let frame = self.stack.last_mut()?;
            let node = frame.node;
            let next = frame.next_child;
            match node.children.as_deref() {
                Some(children) if next < children.len() => {
                    frame.next_child += 1;
                    self.stack.push(Frame { node: &children[next], next_child: 0 });
                }
                _ => {
                    // Children exhausted: the node's own items come last.
                    self.current = node.items.iter();
                    self.stack.truncate(self.stack.len() - 1);
                }
            }
        }
    }
}
