//! Representation of graphs as well as
//! functionalities to build them from
//! simple building blocks.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GraphError(pub VertexIndex);

pub type Colour = i32;
pub type VertexIndex = i32;

/// Marks a vertex that has not been
/// assigned a colour yet.
pub const UNCOLOURED: Colour = -1;

/// Fixed size graph with adjacency lists.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    size: usize,
    edge_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexIndex,
    pub edges_to: Vec<VertexIndex>,
}

impl Graph {
    pub fn new_ordered(n: usize) -> Self {
        let mut vertices = Vec::with_capacity(n);
        for index in 0..n {
            vertices.push(Vertex::new(index as VertexIndex));
        }
        Graph {
            vertices,
            size: n,
            edge_number: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_edges(&self) -> usize {
        self.edge_number
    }

    pub fn is_sparse(&self) -> bool {
        // A complete graph has n(n-1)/2 edges for n vertices.
        // We draw the line between sparse and dense at half
        // of the possible edges in a complete graph.
        self.edge_number < self.size * (self.size.saturating_sub(1)) / 4
    }

    fn get_vertex_mut(&mut self, index: VertexIndex) -> Result<&mut Vertex, GraphError> {
        if index < 0 {
            return Err(GraphError(index));
        }
        self.vertices
            .get_mut(index as usize)
            .ok_or(GraphError(index))
    }

    /// Add the undirected edge (start, end), i.e. an
    /// arc in both directions. Duplicates are allowed
    /// until [minimize](Graph::minimize) removes them.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        // Check the second endpoint first so that a failed
        // call leaves no half-added arc behind.
        if end < 0 || end as usize >= self.size {
            return Err(GraphError(end));
        }
        self.get_vertex_mut(start)?.add_edge(end);
        self.vertices[end as usize].add_edge(start);
        self.edge_number += 1;
        Ok(())
    }

    pub fn degree(&self, index: VertexIndex) -> usize {
        self.vertices[index as usize].edges_to.len()
    }

    pub fn neighbours(&self, index: VertexIndex) -> &[VertexIndex] {
        &self.vertices[index as usize].edges_to
    }

    pub fn lookup_edge(&self, start: &VertexIndex, end: &VertexIndex) -> bool {
        let start = *start as usize;
        assert!(start < self.size);
        self.vertices[start].edges_to.iter().any(|edge| edge == end)
    }

    /// Iterate each undirected edge exactly once,
    /// always with the smaller endpoint first.
    pub fn iterate_edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices.iter().flat_map(|vertex| {
            vertex
                .edges_to
                .iter()
                .filter(move |end| vertex.index < **end)
                .map(move |end| (vertex.index, *end))
        })
    }

    /// Remove unneccessary edges.
    /// Does so by first sorting, thus trading runtime for reduced memory footprint.
    pub fn minimize(&mut self) {
        let mut arc_number = 0;
        for vertex in self.vertices.iter_mut() {
            vertex.edges_to.sort_unstable();
            vertex.edges_to.dedup();
            arc_number += vertex.edges_to.len();
        }

        // Every undirected edge was stored as two arcs.
        self.edge_number = arc_number / 2;
    }
}

impl Vertex {
    pub fn new(index: VertexIndex) -> Self {
        Vertex {
            index,
            edges_to: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, end: VertexIndex) {
        self.edges_to.push(end);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_graph_default() {
        let graph = Graph::new_ordered(120);
        assert!(graph.is_sparse());
        for (index, vertex) in graph.vertices.iter().enumerate() {
            assert_eq!(index as VertexIndex, vertex.index);
            assert!(vertex.edges_to.is_empty());
        }
    }

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new_ordered(5);
        assert_eq!(Ok(()), graph.add_edge(0, 1));
        assert_eq!(Ok(()), graph.add_edge(3, 2));

        // Out of bounds in either direction
        assert_eq!(Err(GraphError(5)), graph.add_edge(0, 5));
        assert_eq!(Err(GraphError(-1)), graph.add_edge(-1, 2));

        assert_eq!(2, graph.number_edges());
        assert!(graph.lookup_edge(&0, &1));
        assert!(graph.lookup_edge(&1, &0));
        assert!(graph.lookup_edge(&2, &3));
        assert!(!graph.lookup_edge(&0, &2));
    }

    #[test]
    fn test_minimize() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(4);
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 0)?;
        graph.add_edge(0, 1)?;
        graph.add_edge(2, 3)?;
        assert_eq!(4, graph.number_edges());

        graph.minimize();

        assert_eq!(2, graph.number_edges());
        assert_eq!(vec![1], graph.neighbours(0).to_vec());
        assert_eq!(vec![0], graph.neighbours(1).to_vec());
        Ok(())
    }

    #[test]
    fn test_iterate_edges() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(4);
        graph.add_edge(2, 1)?;
        graph.add_edge(0, 3)?;
        graph.minimize();

        let edges: Vec<(VertexIndex, VertexIndex)> = graph.iterate_edges().collect();
        assert_eq!(vec![(0, 3), (1, 2)], edges);
        Ok(())
    }
}
