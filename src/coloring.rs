//! Colourings as returned by a solver and
//! functionality to hand them over to consumers.

use itertools::Itertools;

use crate::{
    graph::{Colour, VertexIndex},
    solver::ColorBudget,
    validation::ValidatedGraph,
};

/// One colour per vertex, indexed by vertex id.
/// Colours are contiguous small integers starting
/// at 0 so that consumers can bucket vertices
/// directly by colour value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Coloring {
    colours: Vec<Colour>,
}

/// A colour together with the vertices that carry it.
pub type ColourClass = (Colour, Vec<VertexIndex>);

impl Coloring {
    pub(crate) fn new(colours: Vec<Colour>) -> Self {
        Coloring { colours }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn colour_of(&self, vertex: VertexIndex) -> Option<Colour> {
        self.colours.get(vertex as usize).copied()
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }

    /// Group the vertices into classes of equal colour,
    /// ordered by ascending colour. Colours that no
    /// vertex carries produce no class.
    pub fn classes(&self) -> Vec<ColourClass> {
        self.colours
            .iter()
            .enumerate()
            .sorted_by(|(_, colour_a), (_, colour_b)| colour_a.cmp(colour_b))
            .group_by(|(_, colour)| **colour)
            .into_iter()
            .map(|(colour, vertices)| {
                (
                    colour,
                    vertices
                        .into_iter()
                        .map(|(vertex, _)| vertex as VertexIndex)
                        .collect(),
                )
            })
            .collect()
    }

    /// Check the colouring against the graph it was
    /// produced for: one colour per vertex, all colours
    /// within the budget and no monochromatic edge.
    pub fn check(&self, validated: &ValidatedGraph, budget: ColorBudget) -> bool {
        if self.colours.len() != validated.size() {
            return false;
        }

        let in_budget = self
            .colours
            .iter()
            .all(|colour| *colour >= 0 && (*colour as u32) < budget);

        in_budget
            && validated
                .graph()
                .iterate_edges()
                .all(|(start, end)| self.colours[start as usize] != self.colours[end as usize])
    }
}
