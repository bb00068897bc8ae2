use crate::Graph;
use std::collections::VecDeque;

/// All-pairs shortest path lengths, `d[i][j]`
pub type DistanceMatrix = Vec<Vec<usize>>;

/// Breadth-first search from every vertex. Unreachable pairs keep the value `n - 1`.
pub fn distance_matrix(g: &Graph) -> DistanceMatrix {
    let n = g.num_vertices();
    let mut d = vec![vec![n.saturating_sub(1); n]; n];

    for (source, row) in d.iter_mut().enumerate() {
        let mut explored = vec![false; n];
        let mut queue = VecDeque::new();
        row[source] = 0;
        explored[source] = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for w in g.neighbors(v) {
                if explored[w] {
                    continue;
                }
                explored[w] = true;
                row[w] = row[v] + 1;
                queue.push_back(w);
            }
        }
    }

    d
}

/// Structural distortion of mapping graph 1 vertex `i` to graph 2 vertex `genes[i]`.
///
/// Sums `|d1[i][j] - d2[genes[i]][genes[j]]|` over all ordered pairs of the first
/// `d1.len()` genes. Zero means the mapped vertices keep every pairwise distance,
/// lower is better.
pub fn distortion(d1: &DistanceMatrix, d2: &DistanceMatrix, genes: &[usize]) -> usize {
    let n1 = d1.len();
    let mut sum = 0;
    for i in 0..n1 {
        for j in 0..n1 {
            sum += d1[i][j].abs_diff(d2[genes[i]][genes[j]]);
        }
    }
    sum
}

/// Distortion contributed by the single pair of genes at positions `i` and `j`.
pub fn pair_distortion(
    d1: &DistanceMatrix,
    d2: &DistanceMatrix,
    genes: &[usize],
    i: usize,
    j: usize,
) -> usize {
    d1[i][j].abs_diff(d2[genes[i]][genes[j]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data;

    #[test]
    fn test_distance_matrix() {
        let d = distance_matrix(&test_data::case3().g1);
        assert_eq!(
            d,
            vec![
                vec![0, 2, 2, 1, 1],
                vec![2, 0, 1, 3, 1],
                vec![2, 1, 0, 3, 1],
                vec![1, 3, 3, 0, 2],
                vec![1, 1, 1, 2, 0],
            ]
        );
    }

    #[test]
    fn test_distance_matrix_of_cycle() {
        let c5 = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let d = distance_matrix(&c5);
        assert_eq!(d[0], vec![0, 1, 2, 2, 1]);
        assert_eq!(d[2], vec![2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_unreachable_pairs_default_to_n_minus_one() {
        let g = Graph::from_edges(4, &[(0, 1), (2, 3)]);
        let d = distance_matrix(&g);
        assert_eq!(d[0], vec![0, 1, 3, 3]);
        assert_eq!(d[3], vec![3, 3, 1, 0]);
    }

    #[test]
    fn test_distortion() {
        let d1 = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let d2 = vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]];
        assert_eq!(distortion(&d1, &d2, &[1, 2, 0]), 20);
        assert_eq!(pair_distortion(&d1, &d2, &[1, 2, 0], 0, 1), 2);
    }

    #[test]
    fn test_distortion_only_reads_first_graph_positions() {
        let input = test_data::case2();
        let d1 = distance_matrix(&input.g1);
        let d2 = distance_matrix(&input.g2);
        assert_eq!(distortion(&d1, &d2, &[0, 1, 2]), 0);
        assert_eq!(distortion(&d1, &d2, &[0, 2, 1]), 2);
    }
}
