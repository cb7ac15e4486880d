//! Dijkstra's and A* pathfinding on top of [`BinaryHeap`]
//!
//! The frontier is a min-heap of lightweight entries ordered by f-score
//! (`g + h`, with `h = 0` for Dijkstra). The binary heap has no
//! `decrease_key`, so an improved path to a node pushes a fresh entry and the
//! outdated one is skipped when it surfaces (lazy deletion).
//!
//! The node type carries its own goal context and implements `is_goal()` to
//! determine when the search should terminate.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::pathfinding::{SearchNode, dijkstra};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, ..self.clone() }, 1),
//!             (GridPos { x: self.x - 1, y: self.y, ..self.clone() }, 1),
//!             (GridPos { x: self.x, y: self.y + 1, ..self.clone() }, 1),
//!             (GridPos { x: self.x, y: self.y - 1, ..self.clone() }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra(&start).unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use crate::binary::BinaryHeap;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` supplies the zero cost of the start node.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {
    /// Adds two costs, returning `None` if the sum is not representable.
    fn try_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate successors and to check
/// whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible (never overestimate the true cost)
/// for A* to find optimal paths.
pub trait AStarNode: SearchNode {
    fn heuristic(&self) -> Self::Cost;
}

type NodeIndex = usize;

/// One frontier entry; several may exist for the same node
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<C> {
    f_score: C,
    g_score: C,
    index: NodeIndex,
}

/// Metadata stored for each discovered node.
struct NodeEntry<N: SearchNode> {
    node: N,
    /// Best known cost from start
    g_score: N::Cost,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Node table for one search: discovered nodes by index, plus the reverse lookup.
struct PathFinder<N: SearchNode> {
    nodes: Vec<NodeEntry<N>>,
    state_to_index: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode> PathFinder<N> {
    fn new() -> Self {
        PathFinder {
            nodes: Vec::new(),
            state_to_index: FxHashMap::default(),
        }
    }

    /// Gets or creates an index for a node state.
    fn get_or_create_index(&mut self, node: N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.state_to_index.get(&node) {
            return (index, false);
        }
        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(NodeEntry {
            node,
            g_score,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    /// Walks `came_from` links back to the start.
    fn reconstruct_path(&self, goal: NodeIndex) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(entry) = current.and_then(|index| self.nodes.get(index)) {
            path.push(entry.node.clone());
            current = entry.came_from;
        }
        path.reverse();
        path
    }
}

/// Exploration limits for a search
#[derive(Debug, Clone, Copy)]
struct Limits<C> {
    max_cost: Option<C>,
    max_nodes: Option<usize>,
}

impl<C> Limits<C> {
    fn none() -> Self {
        Limits {
            max_cost: None,
            max_nodes: None,
        }
    }
}

/// Best-first search shared by every entry point.
///
/// `visit` is called once per node as it is closed, in cost order; returning
/// `true` ends the search with the path to that node.
fn explore<N, H, V>(
    start: &N,
    heuristic: H,
    limits: Limits<N::Cost>,
    mut visit: V,
) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: Fn(&N) -> N::Cost,
    V: FnMut(&N, N::Cost) -> bool,
{
    let mut frontier = BinaryHeap::new_by_key(|entry: &FrontierEntry<N::Cost>| entry.f_score);
    let mut finder = PathFinder::new();
    let zero = N::Cost::default();

    let (start_index, _) = finder.get_or_create_index(start.clone(), zero);
    frontier.push(FrontierEntry {
        f_score: heuristic(start),
        g_score: zero,
        index: start_index,
    });

    let mut nodes_explored = 0usize;

    while let Ok(entry) = frontier.poll() {
        let current = &mut finder.nodes[entry.index];
        if current.closed {
            continue;
        }
        current.closed = true;

        if let Some(max) = limits.max_nodes {
            if nodes_explored >= max {
                log::debug!("search stopped after {} nodes", nodes_explored);
                return None;
            }
        }
        nodes_explored += 1;

        let current_node = current.node.clone();
        let current_g = entry.g_score;

        if visit(&current_node, current_g) {
            log::debug!(
                "search reached goal after {} nodes ({} discovered)",
                nodes_explored,
                finder.nodes.len()
            );
            return Some((finder.reconstruct_path(entry.index), current_g));
        }

        for (neighbor, edge_cost) in current_node.successors() {
            // A cost past the end of the cost type is over any budget
            let Some(tentative_g) = current_g.try_add(edge_cost) else {
                log::trace!("skipping successor: path cost overflows");
                continue;
            };

            if let Some(max) = limits.max_cost {
                if tentative_g > max {
                    continue;
                }
            }

            let h = heuristic(&neighbor);
            let Some(f_score) = tentative_g.try_add(h) else {
                continue;
            };
            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            let neighbor_entry = &mut finder.nodes[neighbor_index];

            if neighbor_entry.closed {
                continue;
            }

            if is_new || tentative_g < neighbor_entry.g_score {
                neighbor_entry.g_score = tentative_g;
                neighbor_entry.came_from = Some(entry.index);
                frontier.push(FrontierEntry {
                    f_score,
                    g_score: tentative_g,
                    index: neighbor_index,
                });
            }
        }
        log::trace!("frontier holds {} entries", frontier.len());
    }

    log::debug!("search exhausted after {} nodes", nodes_explored);
    None
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// # Returns
/// - `Some((path, cost))` if a path is found; the path includes both ends
/// - `None` if no goal is reachable
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    explore(start, |_| N::Cost::default(), Limits::none(), |node, _| {
        node.is_goal()
    })
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search.
pub fn astar<N: AStarNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    explore(start, |node| node.heuristic(), Limits::none(), |node, _| {
        node.is_goal()
    })
}

/// Builder for pathfinding queries with exploration limits.
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    limits: Limits<N::Cost>,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            limits: Limits::none(),
        }
    }

    /// Paths costing more than `cost` are not explored.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.limits.max_cost = Some(cost);
        self
    }

    /// Gives up after closing `count` nodes.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.limits.max_nodes = Some(count);
        self
    }

    pub fn dijkstra(self) -> Option<(Vec<N>, N::Cost)> {
        explore(
            &self.start,
            |_| N::Cost::default(),
            self.limits,
            |node, _| node.is_goal(),
        )
    }

    pub fn astar(self) -> Option<(Vec<N>, N::Cost)>
    where
        N: AStarNode,
    {
        explore(
            &self.start,
            |node| node.heuristic(),
            self.limits,
            |node, _| node.is_goal(),
        )
    }
}

/// Returns all nodes reachable from the start within a given cost budget,
/// in non-decreasing cost order.
pub fn reachable_within<N: SearchNode>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)> {
    let mut result = Vec::new();
    let limits = Limits {
        max_cost: Some(max_cost),
        max_nodes: None,
    };
    explore(start, |_| N::Cost::default(), limits, |node, cost| {
        result.push((node.clone(), cost));
        false
    });
    result
}

/// Single-source shortest distances over an adjacency list.
///
/// `adj` maps a node to its `(neighbor, weight)` edges. Every node in
/// `0..num_nodes` appears in the result, mapped to `None` when unreachable.
/// Nodes outside that range still get an entry once reached.
pub fn shortest_distances(
    adj: &FxHashMap<usize, Vec<(usize, u64)>>,
    start: usize,
    num_nodes: usize,
) -> FxHashMap<usize, Option<u64>> {
    let mut distances: FxHashMap<usize, Option<u64>> = (0..num_nodes).map(|n| (n, None)).collect();
    distances.insert(start, Some(0));

    let mut frontier = BinaryHeap::new_by_key(|&(distance, _): &(u64, usize)| distance);
    frontier.push((0u64, start));

    while let Ok((d, u)) = frontier.poll() {
        if distances.get(&u).copied().flatten().is_some_and(|best| d > best) {
            continue;
        }

        let Some(edges) = adj.get(&u) else {
            continue;
        };
        for &(v, weight) in edges {
            let Some(candidate) = d.checked_add(weight) else {
                continue;
            };
            let improved = match distances.get(&v).copied().flatten() {
                Some(current) => candidate < current,
                None => true,
            };
            if improved {
                distances.insert(v, Some(candidate));
                frontier.push((candidate, v));
            }
        }
    }

    distances
}
