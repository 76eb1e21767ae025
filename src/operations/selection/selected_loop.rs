use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::topology::{EdgeId, MeshTopology, VertexId};

/// A loop edge oriented along the walk direction of its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopEdge {
    /// The mesh edge.
    pub edge: EdgeId,
    /// Vertex where the walk enters this edge.
    pub start: VertexId,
    /// Vertex where the walk leaves this edge.
    pub end: VertexId,
}

/// Whether an edge loop wraps around on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// A chain with two free ends.
    Open,
    /// A cycle: every vertex joins exactly two loop edges.
    Closed,
}

/// The selected edges arranged as one contiguous walk.
///
/// Derived from the current selection on every invocation; never cached.
#[derive(Debug, Clone)]
pub struct EdgeLoop {
    edges: Vec<LoopEdge>,
    kind: LoopKind,
    selection_order: Vec<EdgeId>,
    ordered_selection: bool,
    members: HashSet<EdgeId>,
}

impl EdgeLoop {
    /// Loop edges in walk order.
    #[must_use]
    pub fn edges(&self) -> &[LoopEdge] {
        &self.edges
    }

    /// Number of edges in the loop. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false`; an empty selection never produces a loop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the loop is open or closed.
    #[must_use]
    pub fn kind(&self) -> LoopKind {
        self.kind
    }

    /// Returns `true` if `edge` belongs to the loop.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.members.contains(&edge)
    }

    /// The selected edges in the order the host reported them.
    #[must_use]
    pub fn selection_order(&self) -> &[EdgeId] {
        &self.selection_order
    }

    /// Walk index of the edge the user selected first, or `None` if the
    /// host does not preserve selection order.
    #[must_use]
    pub fn first_selected_index(&self) -> Option<usize> {
        if !self.ordered_selection {
            return None;
        }
        let first = *self.selection_order.first()?;
        self.edges.iter().position(|e| e.edge == first)
    }
}

/// Extracts the selected edges of a mesh as an [`EdgeLoop`].
///
/// The selection must be a single connected run of edges without forks.
/// The first selected edge is walked from its start to its end vertex,
/// which fixes the loop direction reproducibly.
#[derive(Debug, Default)]
pub struct SelectedLoop;

impl SelectedLoop {
    /// Creates a new `SelectedLoop` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query against the mesh's current selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoSelection`] if nothing is selected,
    /// [`SelectionError::SelectionNotALoop`] if the selection forks or is
    /// disconnected, and a topology error if a selected edge is missing.
    pub fn execute<M: MeshTopology + ?Sized>(&self, mesh: &M) -> Result<EdgeLoop> {
        let mut seen = HashSet::new();
        let selection: Vec<EdgeId> = mesh
            .selected_edges()
            .into_iter()
            .filter(|e| seen.insert(*e))
            .collect();

        let Some(&first) = selection.first() else {
            return Err(SelectionError::NoSelection.into());
        };

        let mut endpoints: HashMap<EdgeId, [VertexId; 2]> = HashMap::new();
        let mut incident: HashMap<VertexId, Vec<EdgeId>> = HashMap::new();
        for &edge in &selection {
            let verts = mesh.edge_vertices(edge)?;
            endpoints.insert(edge, verts);
            for v in verts {
                incident.entry(v).or_default().push(edge);
            }
        }

        if let Some(count) = incident.values().map(Vec::len).find(|&n| n > 2) {
            return Err(SelectionError::SelectionNotALoop(format!(
                "a vertex is shared by {count} selected edges"
            ))
            .into());
        }

        let next_edge = |vertex: VertexId, came_from: EdgeId| -> Option<EdgeId> {
            incident
                .get(&vertex)?
                .iter()
                .copied()
                .find(|&e| e != came_from)
        };

        let [first_start, first_end] = endpoints[&first];
        let mut ahead = vec![LoopEdge {
            edge: first,
            start: first_start,
            end: first_end,
        }];
        let mut kind = LoopKind::Open;

        let (mut vertex, mut prev) = (first_end, first);
        while let Some(edge) = next_edge(vertex, prev) {
            if edge == first {
                kind = LoopKind::Closed;
                break;
            }
            let [a, b] = endpoints[&edge];
            let far = if a == vertex { b } else { a };
            ahead.push(LoopEdge {
                edge,
                start: vertex,
                end: far,
            });
            vertex = far;
            prev = edge;
        }

        let mut behind = Vec::new();
        if kind == LoopKind::Open {
            let (mut vertex, mut prev) = (first_start, first);
            while let Some(edge) = next_edge(vertex, prev) {
                let [a, b] = endpoints[&edge];
                let far = if a == vertex { b } else { a };
                behind.push(LoopEdge {
                    edge,
                    start: far,
                    end: vertex,
                });
                vertex = far;
                prev = edge;
            }
        }

        behind.reverse();
        behind.extend(ahead);
        let edges = behind;

        if edges.len() != selection.len() {
            return Err(SelectionError::SelectionNotALoop(format!(
                "only {} of {} selected edges are connected",
                edges.len(),
                selection.len()
            ))
            .into());
        }

        debug!(edges = edges.len(), kind = ?kind, "extracted edge loop");

        Ok(EdgeLoop {
            members: edges.iter().map(|e| e.edge).collect(),
            edges,
            kind,
            selection_order: selection,
            ordered_selection: mesh.preserves_selection_order(),
        })
    }
}

/// Extracts the current selection as an [`EdgeLoop`].
///
/// # Errors
///
/// See [`SelectedLoop::execute`].
pub fn selected_loop<M: MeshTopology + ?Sized>(mesh: &M) -> Result<EdgeLoop> {
    SelectedLoop::new().execute(mesh)
}
