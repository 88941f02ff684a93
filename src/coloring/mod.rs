//! Graph-coloring heuristics (§4.4): greedy, DSATUR, and RLF. All three
//! return a color-per-vertex array using colors `1, 2, …`; vertex indices
//! are the `Graph`'s dense indices, not domain ids.

use crate::graph::Graph;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// `colors[i]` is the color of vertex index `i`; `classes[k-1]` is the set
/// of vertices sharing color `k`.
#[derive(Debug, Clone)]
pub struct Coloring {
    pub colors: Vec<u32>,
    pub classes: Vec<Vec<usize>>,
}

impl Coloring {
    fn from_colors(colors: Vec<u32>) -> Self {
        let max_color = colors.iter().copied().max().unwrap_or(0);
        let mut classes = vec![Vec::new(); max_color as usize];
        for (vertex, &color) in colors.iter().enumerate() {
            if color > 0 {
                classes[(color - 1) as usize].push(vertex);
            }
        }
        Self { colors, classes }
    }
}

/// Visits vertices in `order` (ascending index if `order` is `None` and
/// `randomize` is false, a seeded shuffle if `randomize` is true), assigning
/// each the smallest color absent from its already-colored neighbors.
pub fn greedy_coloring<R: Rng>(
    graph: &Graph,
    order: Option<Vec<usize>>,
    randomize: bool,
    rng: &mut R,
) -> Coloring {
    let order = order.unwrap_or_else(|| {
        let mut v: Vec<usize> = (0..graph.len()).collect();
        if randomize {
            v.shuffle(rng);
        }
        v
    });

    let mut colors = vec![0u32; graph.len()];

    for v in order {
        let used: BTreeSet<u32> = graph
            .neighbors(v)
            .iter()
            .filter_map(|&u| {
                let c = colors[u];
                (c > 0).then_some(c)
            })
            .collect();

        let mut color = 1u32;
        while used.contains(&color) {
            color += 1;
        }
        colors[v] = color;
    }

    Coloring::from_colors(colors)
}

/// Degree-of-saturation sequential coloring. Ties on saturation break on
/// maximum degree in the original graph, then uniformly at random.
pub fn dsatur_coloring<R: Rng>(graph: &Graph, rng: &mut R) -> Coloring {
    let n = graph.len();
    let mut colors = vec![0u32; n];
    let mut uncolored: BTreeSet<usize> = (0..n).collect();

    let saturation = |v: usize, colors: &[u32]| -> usize {
        let distinct: BTreeSet<u32> = graph
            .neighbors(v)
            .iter()
            .filter_map(|&u| (colors[u] > 0).then_some(colors[u]))
            .collect();
        distinct.len()
    };

    while let Some(&first) = uncolored.iter().next() {
        let mut max_sat = saturation(first, &colors);
        let mut candidates = vec![first];
        for &v in uncolored.iter().skip(1) {
            let sat = saturation(v, &colors);
            match sat.cmp(&max_sat) {
                std::cmp::Ordering::Greater => {
                    max_sat = sat;
                    candidates = vec![v];
                }
                std::cmp::Ordering::Equal => candidates.push(v),
                std::cmp::Ordering::Less => {}
            }
        }

        let chosen = if candidates.len() > 1 {
            let max_degree = candidates.iter().map(|&v| graph.degree(v)).max().unwrap();
            let degree_candidates: Vec<usize> = candidates
                .into_iter()
                .filter(|&v| graph.degree(v) == max_degree)
                .collect();
            if degree_candidates.len() > 1 {
                *degree_candidates.choose(rng).unwrap()
            } else {
                degree_candidates[0]
            }
        } else {
            candidates[0]
        };

        let neighbor_colors: BTreeSet<u32> = graph
            .neighbors(chosen)
            .iter()
            .filter_map(|&u| (colors[u] > 0).then_some(colors[u]))
            .collect();
        let mut color = 1u32;
        while neighbor_colors.contains(&color) {
            color += 1;
        }
        colors[chosen] = color;
        uncolored.remove(&chosen);
    }

    Coloring::from_colors(colors)
}

/// Recursive Largest First: builds one color class at a time as a maximal
/// independent set, preferring (within the remaining candidate set `x`) the
/// vertex of highest induced degree.
pub fn rlf_coloring<R: Rng>(graph: &Graph, rng: &mut R) -> Coloring {
    let n = graph.len();
    let mut colors = vec![0u32; n];
    let mut x: BTreeSet<usize> = (0..n).collect();
    let mut y: BTreeSet<usize> = BTreeSet::new();
    let mut color = 1u32;

    while !x.is_empty() {
        while !x.is_empty() {
            let mut max_degree: i64 = -1;
            let mut candidates = Vec::new();
            for &v in &x {
                let degree_in_x = graph.neighbors(v).iter().filter(|u| x.contains(u)).count() as i64;
                match degree_in_x.cmp(&max_degree) {
                    std::cmp::Ordering::Greater => {
                        max_degree = degree_in_x;
                        candidates = vec![v];
                    }
                    std::cmp::Ordering::Equal => candidates.push(v),
                    std::cmp::Ordering::Less => {}
                }
            }
            let Some(&v) = candidates.choose(rng) else {
                break;
            };

            colors[v] = color;
            let neighbors_in_x: Vec<usize> = graph.neighbors(v).iter().filter(|u| x.contains(u)).copied().collect();
            for u in &neighbors_in_x {
                y.insert(*u);
            }
            x.remove(&v);
            for u in &neighbors_in_x {
                x.remove(u);
            }
        }

        x = std::mem::take(&mut y);
        color += 1;
    }

    Coloring::from_colors(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexKind;
    use crate::types::{CurriculumId, SectionId};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn k4() -> Graph {
        let mut g = Graph::new();
        let ids: Vec<usize> = (0..4)
            .map(|i| g.add_vertex(VertexKind::Section(SectionId(i))))
            .collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(ids[i], ids[j]);
            }
        }
        g
    }

    fn bipartite_k33() -> Graph {
        let mut g = Graph::new();
        let left: Vec<usize> = (0..3)
            .map(|i| g.add_vertex(VertexKind::Section(SectionId(i))))
            .collect();
        let right: Vec<usize> = (0..3)
            .map(|i| g.add_vertex(VertexKind::Curriculum(CurriculumId(i))))
            .collect();
        for &l in &left {
            for &r in &right {
                g.add_edge(l, r);
            }
        }
        g
    }

    fn assert_no_conflicting_adjacent(graph: &Graph, colors: &[u32]) {
        for v in 0..graph.len() {
            for &u in graph.neighbors(v) {
                assert_ne!(colors[v], colors[u], "vertices {} and {} share a color", v, u);
            }
        }
    }

    #[test]
    fn dsatur_colors_k4_with_four_colors() {
        let g = k4();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let coloring = dsatur_coloring(&g, &mut rng);
        assert_no_conflicting_adjacent(&g, &coloring.colors);
        assert_eq!(coloring.classes.len(), 4);
    }

    #[test]
    fn rlf_colors_bipartite_graph_with_two_colors() {
        let g = bipartite_k33();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let coloring = rlf_coloring(&g, &mut rng);
        assert_no_conflicting_adjacent(&g, &coloring.colors);
        assert_eq!(coloring.classes.len(), 2);
    }

    #[test]
    fn greedy_coloring_never_conflicts() {
        let g = k4();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let coloring = greedy_coloring(&g, None, true, &mut rng);
        assert_no_conflicting_adjacent(&g, &coloring.colors);
    }
}
