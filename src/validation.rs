//! Validation of raw graph descriptions
//! before they are handed to a solver.

use std::collections::HashSet;
use thiserror::Error;

use crate::graph::{Graph, VertexIndex};

/// An edge as described by the caller, not yet
/// checked against any graph invariant.
pub type RawEdge = (VertexIndex, VertexIndex);

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("vertex {0} is its own neighbour")]
    SelfLoop(VertexIndex),
    #[error("edge endpoint {endpoint} lies outside of 0..{size}")]
    VertexRange {
        endpoint: VertexIndex,
        size: usize,
    },
    #[error("expected {expected} vertices but the edges reference {referenced} distinct ones")]
    VertexCountMismatch { expected: usize, referenced: usize },
}

/// A graph description that passed [validate]:
/// no self-loops, all endpoints in range and a
/// deduplicated adjacency structure.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ValidatedGraph {
    graph: Graph,
}

impl ValidatedGraph {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn size(&self) -> usize {
        self.graph.size()
    }
}

/// Check a raw graph description for structural
/// well-formedness and build the adjacency structure
/// the solver works on.
///
/// With `strict_vertex_count` the number of distinct
/// vertex ids referenced by the edges must equal the
/// declared vertex count. This does not imply that every
/// id in range actually occurs; call sites predating the
/// flag relied on the weaker reading and keep it.
pub fn validate(
    number_of_vertices: usize,
    edges: &[RawEdge],
    strict_vertex_count: bool,
) -> Result<ValidatedGraph, ValidationError> {
    // A self-loop can never be satisfied by any colouring,
    // so it beats every other complaint about the input.
    for (start, end) in edges {
        if start == end {
            return Err(ValidationError::SelfLoop(*start));
        }
    }

    let mut referenced = HashSet::new();

    for (start, end) in edges {
        for endpoint in [*start, *end].iter() {
            if *endpoint < 0 || *endpoint as usize >= number_of_vertices {
                return Err(ValidationError::VertexRange {
                    endpoint: *endpoint,
                    size: number_of_vertices,
                });
            }
            referenced.insert(*endpoint);
        }
    }

    if strict_vertex_count && referenced.len() != number_of_vertices {
        return Err(ValidationError::VertexCountMismatch {
            expected: number_of_vertices,
            referenced: referenced.len(),
        });
    }

    let mut graph = Graph::new_ordered(number_of_vertices);
    for (start, end) in edges {
        graph
            .add_edge(*start, *end)
            .expect("Endpoints were range checked above!");
    }
    graph.minimize();

    Ok(ValidatedGraph { graph })
}
