//! Exact maximum common induced subgraph search in the style of McSplit.
//!
//! Every search node owns a list of label classes. A label class pairs a set of
//! still undecided graph 1 vertices with the graph 2 vertices they may still be
//! matched to. Matching `v` to `w` splits every class into the vertices adjacent
//! to `v`/`w` and the vertices non-adjacent to them, so any mapping built from the
//! classes stays an induced isomorphism.

use crate::error::SearchError;
use crate::mapping::{MaximumCommonSubgraph, Pair};
use crate::supergraph::MaximumCommonSubgraphAlgorithm;
use crate::{Graph, Result};
use log::{debug, trace};

/// Exact branch-and-bound maximum common subgraph algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct McSplit;

impl McSplit {
    pub fn new() -> Self {
        McSplit
    }
}

impl MaximumCommonSubgraphAlgorithm for McSplit {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<MaximumCommonSubgraph> {
        let mut search = Search::new(g1, g2);
        let classes = LabelClasses::initial(&search.degrees, g1, g2);
        let mut mapping = Vec::with_capacity(g1.num_vertices().min(g2.num_vertices()));
        search.search(classes, &mut mapping)?;
        debug!(
            "mcsplit: explored {} nodes, maximum common subgraph has {} vertices",
            search.nodes,
            search.best.len()
        );
        Ok(MaximumCommonSubgraph::exact(g1, g2, search.best))
    }

    fn name(&self) -> &'static str {
        "McSplit"
    }
}

struct Search<'a> {
    g1: &'a Graph,
    g2: &'a Graph,
    /// Degrees of graph 1, used for every branching decision
    degrees: Vec<usize>,
    best: Vec<Pair>,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(g1: &'a Graph, g2: &'a Graph) -> Self {
        let degrees = (0..g1.num_vertices()).map(|v| g1.degree_of(v)).collect();
        Search {
            g1,
            g2,
            degrees,
            best: Vec::new(),
            nodes: 0,
        }
    }

    fn search(&mut self, mut classes: LabelClasses, mapping: &mut Vec<Pair>) -> Result<()> {
        self.nodes += 1;
        if mapping.len() > self.best.len() {
            self.best = mapping.clone();
            trace!("mcsplit: new best mapping of size {}", self.best.len());
        }

        let bound = mapping.len() + classes.sum_pairs_of_vertices();
        if bound <= self.best.len() {
            return Ok(());
        }

        let selected = classes.select();
        let v = classes.get(selected).max_degree_vertex;
        let candidates = classes.get(selected).h.clone();
        for w in candidates {
            let refined = classes.refine(&self.degrees, self.g1, self.g2, v, w);
            mapping.push(Pair::new(v, w));
            let result = self.search(refined, mapping);
            mapping.pop();
            result?;
        }

        // Leave v unmatched
        let class = classes.remove(selected)?;
        if class.g.len() > 1 {
            classes.push(class.without_vertex_from_g(&self.degrees, v));
        }
        if !classes.is_empty() {
            self.search(classes, mapping)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LabelClass {
    g: Vec<usize>,
    h: Vec<usize>,
    /// First vertex of `g` with the largest degree in graph 1
    max_degree_vertex: usize,
    max_degree: usize,
}

impl LabelClass {
    /// `g` must not be empty.
    fn new(degrees: &[usize], g: Vec<usize>, h: Vec<usize>) -> Self {
        let mut max_degree_vertex = g[0];
        let mut max_degree = degrees[g[0]];
        for &v in &g[1..] {
            if degrees[v] > max_degree {
                max_degree = degrees[v];
                max_degree_vertex = v;
            }
        }
        LabelClass {
            g,
            h,
            max_degree_vertex,
            max_degree,
        }
    }

    fn without_vertex_from_g(&self, degrees: &[usize], vertex: usize) -> Self {
        let g = self.g.iter().copied().filter(|&v| v != vertex).collect();
        LabelClass::new(degrees, g, self.h.clone())
    }

    fn neighbors_from_g_of(&self, g1: &Graph, vertex: usize) -> Vec<usize> {
        filter_side(&self.g, |v| g1.is_adjacent(vertex, v))
    }

    fn neighbors_from_h_of(&self, g2: &Graph, vertex: usize) -> Vec<usize> {
        filter_side(&self.h, |w| g2.is_adjacent(vertex, w))
    }

    fn not_neighbors_from_g_of(&self, g1: &Graph, vertex: usize) -> Vec<usize> {
        filter_side(&self.g, |v| v != vertex && !g1.is_adjacent(vertex, v))
    }

    fn not_neighbors_from_h_of(&self, g2: &Graph, vertex: usize) -> Vec<usize> {
        filter_side(&self.h, |w| w != vertex && !g2.is_adjacent(vertex, w))
    }

    fn bound(&self) -> usize {
        self.g.len().min(self.h.len())
    }

    fn size(&self) -> usize {
        self.g.len().max(self.h.len())
    }
}

fn filter_side(side: &[usize], keep: impl Fn(usize) -> bool) -> Vec<usize> {
    side.iter().copied().filter(|&v| keep(v)).collect()
}

#[derive(Debug, Clone, Default)]
struct LabelClasses(Vec<LabelClass>);

impl LabelClasses {
    fn initial(degrees: &[usize], g1: &Graph, g2: &Graph) -> Self {
        if g1.num_vertices() == 0 || g2.num_vertices() == 0 {
            return LabelClasses::default();
        }
        let g = (0..g1.num_vertices()).collect();
        let h = (0..g2.num_vertices()).collect();
        LabelClasses(vec![LabelClass::new(degrees, g, h)])
    }

    fn get(&self, index: usize) -> &LabelClass {
        &self.0[index]
    }

    fn push(&mut self, class: LabelClass) {
        self.0.push(class);
    }

    fn remove(&mut self, index: usize) -> Result<LabelClass, SearchError> {
        if index >= self.0.len() {
            return Err(SearchError::MissingLabelClass {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn sum_pairs_of_vertices(&self) -> usize {
        self.0.iter().map(LabelClass::bound).sum()
    }

    /// Index of the class with the largest `max(|G|, |H|)`, ties broken by the
    /// larger maximum degree in `G`, then by position. Must not be empty.
    fn select(&self) -> usize {
        let mut best = 0;
        for (index, class) in self.0.iter().enumerate().skip(1) {
            let current = &self.0[best];
            if class.size() > current.size()
                || (class.size() == current.size() && class.max_degree > current.max_degree)
            {
                best = index;
            }
        }
        best
    }

    /// Splits every class into common neighbours and common non-neighbours of the
    /// newly matched pair `(v, w)`, dropping empty sides.
    fn refine(&self, degrees: &[usize], g1: &Graph, g2: &Graph, v: usize, w: usize) -> Self {
        let mut refined = Vec::with_capacity(self.0.len() * 2);
        for class in &self.0 {
            let g = class.neighbors_from_g_of(g1, v);
            let h = class.neighbors_from_h_of(g2, w);
            if !g.is_empty() && !h.is_empty() {
                refined.push(LabelClass::new(degrees, g, h));
            }
            let g = class.not_neighbors_from_g_of(g1, v);
            let h = class.not_neighbors_from_h_of(g2, w);
            if !g.is_empty() && !h.is_empty() {
                refined.push(LabelClass::new(degrees, g, h));
            }
        }
        LabelClasses(refined)
    }
}
