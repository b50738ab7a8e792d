use anyhow::{anyhow, Result};

/// Directed graph over dense vertex indices `[0, n)`.
///
/// Multi-edges and self-loops are allowed; adjacency order is kept as inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from `(source, target)` pairs, rejecting any endpoint
    /// outside `[0, n)` and a vertex count that cannot be allocated.
    pub fn from_edges(node_count: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        let mut edges: Vec<Vec<usize>> = Vec::new();
        edges
            .try_reserve_exact(node_count)
            .map_err(|e| anyhow!("cannot allocate a graph of {node_count} vertices: {e}"))?;
        edges.resize_with(node_count, Vec::new);

        let mut g = Self { edges };
        for (i, &(u, v)) in pairs.iter().enumerate() {
            if u >= node_count || v >= node_count {
                let bad = if u >= node_count { u } else { v };
                return Err(anyhow!(
                    "edge {i} ({u} -> {v}) references vertex {bad} outside [0, {node_count})"
                ));
            }
            g.add_edge(u, v);
        }
        Ok(g)
    }

    /// Panics if `u` is not a vertex of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.edges[u].push(v);
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.edges[v]
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }
}

/// Output of an SCC decomposition: one component id per vertex, ids dense from 0.
///
/// Only decomposers inside this crate can build one, so every assignment seen
/// by `build_condensation` is a true SCC partition:
///
/// ```compile_fail
/// use relation_chain::domain::graph::ComponentAssignment;
///
/// let _ = ComponentAssignment::new(vec![0, 1], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAssignment {
    component_of: Vec<usize>,
    component_count: usize,
}

impl ComponentAssignment {
    /// Every entry of `component_of` must be `< component_count`.
    pub(crate) fn new(component_of: Vec<usize>, component_count: usize) -> Self {
        debug_assert!(component_of.iter().all(|&c| c < component_count));
        Self {
            component_of,
            component_count,
        }
    }

    pub fn component_of(&self, v: usize) -> usize {
        self.component_of[v]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.component_of
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn node_count(&self) -> usize {
        self.component_of.len()
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of[u] == self.component_of[v]
    }

    /// Vertices grouped by component id; each group is sorted ascending.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.component_count];
        for (v, &c) in self.component_of.iter().enumerate() {
            groups[c].push(v);
        }
        groups
    }

    /// Number of components that contain a directed cycle: more than one
    /// vertex, or a single vertex carrying a self-loop.
    pub fn cyclic_components(&self, graph: &Graph) -> usize {
        let mut cyclic = vec![false; self.component_count];
        let mut sizes = vec![0usize; self.component_count];
        for &c in self.component_of.iter() {
            sizes[c] += 1;
        }
        for (c, &size) in sizes.iter().enumerate() {
            if size > 1 {
                cyclic[c] = true;
            }
        }
        for (u, outs) in graph.edges.iter().enumerate() {
            if outs.contains(&u) {
                cyclic[self.component_of[u]] = true;
            }
        }
        cyclic.iter().filter(|&&b| b).count()
    }
}

/// Graph whose vertices are the components of another graph.
///
/// Only `usecase::condense::build_condensation` creates one, so holders of a
/// `CondensationGraph` can rely on it having no directed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondensationGraph {
    graph: Graph,
}

impl CondensationGraph {
    pub(crate) fn from_acyclic(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
