//! Parser for graph descriptions in a specific format.
//! The supported format is based of data from
//! https://snap.stanford.edu/data/ .

use std::io::BufRead;

use crate::{
    get_line_parse, get_line_recognize,
    graph::VertexIndex,
    parse_single_line,
    validation::RawEdge,
    Error,
};

use super::{Input, ParseResult};

fn parse_size_comment(input: Input<'_>) -> ParseResult<'_, usize> {
    use nom::{
        bytes::complete::tag,
        character::complete::{char, u64},
        combinator::map,
        sequence::{preceded, terminated, tuple},
    };

    let size_parser = preceded(tag(" Nodes: "), u64);
    let edges_parser = tuple((tag(" Edges: "), u64));
    let comment_parser = preceded(char('#'), terminated(size_parser, edges_parser));

    map(comment_parser, |size| size as usize)(input)
}

fn parse_meaningless_comment(input: Input<'_>) -> ParseResult<'_, ()> {
    use nom::{
        character::complete::{char, not_line_ending},
        combinator::value,
        sequence::tuple,
    };

    let comment_line_parser = tuple((char('#'), not_line_ending));
    value((), comment_line_parser)(input)
}

fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{i32, multispace1},
        sequence::{pair, terminated},
    };

    pair(terminated(i32, multispace1), i32)(input)
}

/// Read a raw graph description, i.e. the declared vertex
/// count and the plain edge list. The result is deliberately
/// unchecked; it still has to pass
/// [validate](crate::validation::validate) before any solve.
pub fn parse_txt_input<B: BufRead>(input: B) -> Result<(usize, Vec<RawEdge>), Error> {
    use nom::combinator::eof;

    let mut lines = input.lines();

    get_line_recognize!(lines, parse_meaningless_comment);
    get_line_recognize!(lines, parse_meaningless_comment);
    get_line_parse!(lines, number_of_vertices, parse_size_comment);
    get_line_recognize!(lines, parse_meaningless_comment);

    let mut edges = Vec::new();

    for line in lines {
        let line = line?;
        parse_single_line!(start_end, parse_edge(&line));
        edges.push(start_end);
    }

    Ok((number_of_vertices, edges))
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use crate::Error;

    use super::*;

    #[test]
    fn test_parse_size_comment() -> Result<(), Error> {
        let comment = "# Nodes: 18772 Edges: 396160\n";
        let (_, parsed) = parse_size_comment(comment)?;
        assert_eq!(18772, parsed);

        Ok(())
    }

    #[test]
    fn test_parse_meaningless_comment() -> Result<(), Error> {
        let comment = "# Directed graph (each unordered pair of nodes is saved once):\n";
        Ok(parse_meaningless_comment(comment)?.1)
    }

    #[test]
    fn test_parse_txt_input() -> Result<(), Error> {
        let txt = "# Undirected graph (each unordered pair of nodes is saved once): example.txt
# Some network of things worth colouring
# Nodes: 6 Edges: 4
# FromNodeId	ToNodeId
0	1
2	3
1	4
2	5
";
        let buf = BufReader::new(txt.as_bytes());
        let (number_of_vertices, edges) = parse_txt_input(buf)?;

        assert_eq!(6, number_of_vertices);
        assert_eq!(vec![(0, 1), (2, 3), (1, 4), (2, 5)], edges);

        Ok(())
    }

    #[test]
    fn test_parsed_description_feeds_validation() -> Result<(), Error> {
        let txt = "#
#
# Nodes: 4 Edges: 3
#
0	1
1	2
2	3
";
        let buf = BufReader::new(txt.as_bytes());
        let (number_of_vertices, edges) = parse_txt_input(buf)?;
        let validated = crate::validation::validate(number_of_vertices, &edges, true)?;

        assert_eq!(4, validated.size());
        assert_eq!(3, validated.graph().number_edges());
        Ok(())
    }
}
