use crate::{Error, Graph, Input, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, space0, space1},
    combinator::{map_res, opt},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded, terminated},
    IResult,
};
use std::path::Path;

/// Parse line ending (handles both \n and \r\n)
fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\n"), tag("\r\n")))(input)
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a row of space-separated integers, trailing spaces allowed
fn parse_row(input: &str) -> IResult<&str, Vec<usize>> {
    delimited(space0, separated_list1(space1, parse_usize), space0)(input)
}

/// Parse `n` rows. Row lengths are not checked here, [`Graph::validate`] reports them.
fn parse_adjacency_matrix(input: &str, n: usize) -> IResult<&str, Vec<Vec<usize>>> {
    // `n` comes from the file, never reserve more rows than there are lines
    let mut rows = Vec::with_capacity(n.min(input.lines().count()));
    let mut remaining = input;

    for _ in 0..n {
        let (rest, row) = terminated(parse_row, opt(line_ending))(remaining)?;
        rows.push(row);
        remaining = rest;
    }

    Ok((remaining, rows))
}

/// Parse a single graph: vertex count followed by adjacency matrix
fn parse_graph(input: &str) -> IResult<&str, Graph> {
    let (input, n) = terminated(delimited(space0, parse_usize, space0), line_ending)(input)?;
    let (input, adj) = parse_adjacency_matrix(input, n)?;

    Ok((input, Graph::new(n, adj)))
}

fn blank_lines(input: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(space0, line_ending))(input)
}

/// Parse two graphs from input string
pub fn parse_two_graphs(input: &str) -> IResult<&str, (Graph, Graph)> {
    let (input, _) = blank_lines(input)?;
    let (input, g1) = parse_graph(input)?;
    let (input, _) = blank_lines(input)?;
    let (input, g2) = parse_graph(input)?;
    let (input, _) = blank_lines(input)?;

    Ok((input, (g1, g2)))
}

/// Parses `content` into an [`Input`] without validating the graphs.
pub fn parse_input(content: &str) -> Result<Input> {
    match parse_two_graphs(content) {
        Ok((_, (g1, g2))) => Ok(Input::new(g1, g2)),
        Err(e) => Err(Error::Parse(e.to_string())),
    }
}

/// Reads and validates the two graphs stored in `path`.
pub fn read_input(path: impl AsRef<Path>) -> Result<Input> {
    let content = std::fs::read_to_string(path)?;
    let input = parse_input(&content)?;
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CASE2: &str = "2\n0 1\n1 0\n\n3\n0 1 0\n1 0 1\n0 1 0\n";

    #[test]
    fn test_parse_two_graphs() {
        let (rest, (g1, g2)) = parse_two_graphs(CASE2).unwrap();

        assert!(rest.is_empty());
        assert_eq!(g1.num_vertices(), 2);
        assert_eq!(g1.adjacency_matrix(), &vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(g2.num_vertices(), 3);
        assert_eq!(g2.edges(), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_parse_crlf_and_trailing_spaces() {
        let content = "2 \r\n0 1 \r\n1 0\r\n\r\n\r\n2\r\n0 1\r\n1 0 ";

        let input = parse_input(content).unwrap();

        assert_eq!(input.g1, input.g2);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_parse_without_blank_line_between_graphs() {
        let input = parse_input("2\n0 1\n1 0\n2\n0 1\n1 0\n").unwrap();

        assert_eq!(input.g2.num_vertices(), 2);
    }

    #[test]
    fn test_parse_error_on_garbage() {
        let result = parse_input("two\n0 1\n1 0\n");

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_vertex_count_beyond_remaining_rows() {
        let result = parse_input("18446744073709551615\n0 1\n1 0\n2\n0 1\n1 0\n");

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_row_length_is_left_to_validation() {
        let input = parse_input("2\n0 1 0\n1 0\n2\n0 1\n1 0\n").unwrap();

        assert_eq!(
            input.g1.validate(),
            Err(GraphError::WrongRowLength {
                row: 0,
                actual: 3,
                expected: 2
            })
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", CASE2).unwrap();

        let input = read_input(file.path()).unwrap();

        assert_eq!(input.g1.num_vertices(), 2);
        assert_eq!(input.g2.num_vertices(), 3);
    }

    #[test]
    fn test_read_input_validates_graphs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "2\n0 1\n1 0\n\n3\n0 1 0\n1 0 0\n0 0 0\n").unwrap();

        let result = read_input(file.path());

        assert!(matches!(
            result,
            Err(Error::Graph(GraphError::Disconnected))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_input("/nonexistent/input.txt");

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
