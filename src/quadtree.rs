//! Point quadtree with rectangle range queries.
//!
//! The tree owns a root node covering fixed bounds. Every node is either a leaf
//! holding entries directly or an internal node holding exactly four children, one
//! per quadrant. A full leaf below the maximum depth splits into four children and
//! re-routes its entries into them. Leaves at the maximum depth grow without limit,
//! and so do leaves too narrow to cut in half, which only happens once a cell is a
//! few ULPs wide. Nodes never merge back and the bounds never grow.

use std::mem;
use std::ops::ControlFlow;

use log::{debug, trace};

use crate::config::QuadtreeConfig;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::geometry::{Cell, Point, Rect};

/// A payload stored at a position
#[derive(Clone, Debug)]
struct Entry<T> {
    position: Point,
    payload: T,
}

#[derive(Clone, Debug)]
enum NodeKind<T> {
    Leaf(Vec<Entry<T>>),
    /// Children indexed by `Quadrant::index`
    Internal(Box<[Node<T>; 4]>),
}

#[derive(Clone, Debug)]
struct Node<T> {
    bounds: Cell,
    depth: usize,
    kind: NodeKind<T>,
}

/// Dynamic spatial index over 2D points.
///
/// Stores arbitrary payloads keyed by position and answers axis-aligned rectangle
/// queries. The payload type needs no bounds: the tree never compares, hashes or
/// prints it. Duplicate positions and duplicate payloads are both allowed.
///
/// Insertion takes `&mut self` and queries take `&self`, so any sharing across
/// threads needs external synchronization (a lock or a snapshot per reader).
///
/// # Example
///
/// ```
/// use quadtree::prelude::*;
///
/// let mut tree = Quadtree::create(Rect::new(0.0, 0.0, 100.0, 100.0), 8, 4).unwrap();
/// tree.insert("a", Point::new(10.0, 10.0)).unwrap();
/// tree.insert("b", Point::new(60.0, 70.0)).unwrap();
///
/// let found = tree.query(&Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(found, vec![&"a"]);
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree<T> {
    bounds: Rect,
    root: Node<T>,
    config: QuadtreeConfig,
    /// Number of successfully inserted entries
    size: usize,
}

impl<T> Quadtree<T> {
    /// Creates an empty tree with the default limits (depth 10, 10 entries per leaf)
    pub fn new(bounds: Rect) -> Self {
        Self::build(bounds, QuadtreeConfig::default())
    }

    /// Creates an empty tree with explicit limits.
    ///
    /// # Errors
    /// Returns [`QuadtreeError::InvalidConfiguration`] if `max_depth` or
    /// `max_entries_per_leaf` is zero.
    pub fn create(bounds: Rect, max_depth: usize, max_entries_per_leaf: usize) -> QuadtreeResult<Self> {
        Self::with_config(bounds, QuadtreeConfig::new(max_depth, max_entries_per_leaf))
    }

    /// Creates an empty tree from a configuration.
    ///
    /// # Errors
    /// Returns [`QuadtreeError::InvalidConfiguration`] if the configuration fails
    /// [`QuadtreeConfig::validate`].
    pub fn with_config(bounds: Rect, config: QuadtreeConfig) -> QuadtreeResult<Self> {
        if let Err(err) = config.validate() {
            debug!("Rejected quadtree configuration {config:?}: {err}");
            return Err(err);
        }
        Ok(Self::build(bounds, config))
    }

    fn build(bounds: Rect, config: QuadtreeConfig) -> Self {
        debug!(
            "Creating quadtree over {bounds:?} (max_depth {}, max_entries_per_leaf {})",
            config.max_depth, config.max_entries_per_leaf
        );
        Self {
            bounds,
            root: Node::leaf(Cell::from(bounds), 0),
            config,
            size: 0,
        }
    }

    /// Adds `payload` at `position`.
    ///
    /// # Errors
    /// Returns [`QuadtreeError::OutOfBounds`] if the position is outside the tree
    /// bounds. The tree is left untouched in that case.
    pub fn insert(&mut self, payload: T, position: Point) -> QuadtreeResult<()> {
        if !self.bounds.contains(position) {
            debug!("Rejected insert at {position:?}: outside {:?}", self.bounds);
            return Err(QuadtreeError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        self.root.insert(Entry { position, payload }, &self.config);
        self.size += 1;
        Ok(())
    }

    /// Returns every payload whose position lies inside `area`.
    ///
    /// Order is unspecified across leaves; within a leaf, insertion order is kept.
    pub fn query(&self, area: &Rect) -> Vec<&T> {
        let mut results = Vec::new();
        self.query_into(area, &mut results);
        results
    }

    /// Same as [`query`](Self::query) but appends into `results`, which is not
    /// cleared first. Lets callers reuse one buffer across many queries.
    pub fn query_into<'a>(&'a self, area: &Rect, results: &mut Vec<&'a T>) {
        let _ = self.root.visit(area, &mut |entry: &'a Entry<T>| {
            results.push(&entry.payload);
            ControlFlow::Continue(())
        });
    }

    /// Calls `visitor` with each payload inside `area` and its stored position.
    ///
    /// Traversal of the whole tree stops as soon as `visitor` returns `false`.
    /// When it always returns `true`, entries are visited in the same order
    /// [`query`](Self::query) returns them.
    pub fn query_visit<F>(&self, area: &Rect, mut visitor: F)
    where
        F: FnMut(&T, Point) -> bool,
    {
        let _ = self.root.visit(area, &mut |entry: &Entry<T>| {
            if visitor(&entry.payload, entry.position) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
    }

    /// Number of entries inserted so far
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether nothing has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Bounds of the root node
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Limits the tree was created with
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Deepest level a node may be created at
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Leaf capacity below the maximum depth
    pub fn max_entries_per_leaf(&self) -> usize {
        self.config.max_entries_per_leaf
    }

    /// Depth of the deepest node currently in the tree (0 before the first split)
    pub fn depth(&self) -> usize {
        self.root.deepest()
    }

    /// Number of leaf nodes currently in the tree
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl<T> Node<T> {
    fn leaf(bounds: Cell, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// Routes `entry` down to the leaf covering its position, splitting full leaves
    /// on the way. Every entry handed in ends up stored.
    fn insert(&mut self, entry: Entry<T>, config: &QuadtreeConfig) {
        // The root checks containment and children share their parent's edges,
        // so the routed child always covers the position.
        debug_assert!(self.bounds.contains(entry.position), "entry routed outside its node");
        match self.kind {
            NodeKind::Internal(ref mut children) => {
                let quadrant = self.bounds.quadrant_of(entry.position);
                children[quadrant.index()].insert(entry, config);
            }
            NodeKind::Leaf(ref mut entries)
                if self.depth >= config.max_depth
                    || entries.len() < config.max_entries_per_leaf
                    || !self.bounds.can_split() =>
            {
                entries.push(entry);
            }
            NodeKind::Leaf(_) => {
                self.split(config);
                self.insert(entry, config);
            }
        }
    }

    /// Turns this leaf into an internal node and re-routes its entries into the
    /// new children.
    fn split(&mut self, config: &QuadtreeConfig) {
        let depth = self.depth + 1;
        let children = self.bounds.quadrants().map(|bounds| Self::leaf(bounds, depth));
        let previous = mem::replace(&mut self.kind, NodeKind::Internal(Box::new(children)));
        if let NodeKind::Leaf(entries) = previous {
            trace!(
                "Splitting node at depth {} over {:?}, moving {} entries",
                self.depth,
                self.bounds,
                entries.len()
            );
            for entry in entries {
                self.insert(entry, config);
            }
        }
    }

    /// Walks every entry inside `area`, pruning subtrees whose bounds miss it.
    /// Returns `Break` as soon as `visitor` does.
    fn visit<'a, F>(&'a self, area: &Rect, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&'a Entry<T>) -> ControlFlow<()>,
    {
        if !self.bounds.overlaps(area) {
            return ControlFlow::Continue(());
        }
        match &self.kind {
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.visit(area, visitor)?;
                }
            }
            NodeKind::Leaf(entries) => {
                // A leaf may only partly overlap the area
                for entry in entries {
                    if area.contains(entry.position) {
                        visitor(entry)?;
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn deepest(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => self.depth,
            NodeKind::Internal(children) => children
                .iter()
                .map(Self::deepest)
                .max()
                .unwrap_or(self.depth),
        }
    }

    fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}
