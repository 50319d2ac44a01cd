//! Colour refinement (1-dimensional Weisfeiler-Lehman) over the whole bigraph.
//!
//! Roots, sites, nodes and links are vertices; place edges connect parents to children and
//! link edges connect nodes to the links of their ports. Colours are re-derived every round
//! from the sorted colours of each vertex's neighbourhood until the number of colour classes
//! stops growing. Colours are ranks of sorted keys, never discovery positions, so two
//! isomorphic bigraphs get the same colour on corresponding entities.
use crate::bigraph::*;

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Initial<'a> {
    Root(usize),
    Site(usize),
    Node(&'a str),
    /// `names` is only filled in when interface names are significant.
    Edge { inners: usize, names: Vec<&'a str> },
    Outer {
        name: Option<&'a str>,
        inners: usize,
        names: Vec<&'a str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Relation {
    Parent,
    Child,
    Port,
    Point,
}

/// Stable colours of the nodes and links of one bigraph.
pub(crate) struct Colouring {
    num_edges: usize,
    nodes: Vec<usize>,
    /// Edges first, then outer names.
    links: Vec<usize>,
}

/// Replace each key by its rank among the distinct keys. Returns the ranks and the number of
/// distinct keys.
pub(crate) fn compress<K: Ord>(keys: &[K]) -> (Vec<usize>, usize) {
    let mut distinct: Vec<&K> = keys.iter().collect();
    distinct.sort();
    distinct.dedup();
    // every key is in `distinct`, so the number of smaller keys is its rank
    let ranks = keys
        .iter()
        .map(|k| distinct.partition_point(|d| *d < k))
        .collect();
    (ranks, distinct.len())
}

impl Colouring {
    /// Refine until stable. With `keep_names`, outer and inner names are part of the initial
    /// colour of their links.
    pub fn refine(graph: &Bigraph, keep_names: bool) -> Self {
        let roots = graph.num_roots();
        let sites = roots + graph.num_sites();
        let nodes = sites + graph.num_nodes();
        let total = nodes + graph.num_edges() + graph.num_outer_names();

        let place = |p: Place| match p {
            Place::Root(r) => r.0,
            Place::Node(n) => sites + n.0,
        };
        let link = |l: Link| match l {
            Link::Edge(e) => nodes + e.0,
            Link::Outer(o) => nodes + graph.num_edges() + o.0,
        };

        let mut adjacent: Vec<Vec<(Relation, usize)>> = vec![vec![]; total];
        for s in graph.sites() {
            let parent = place(graph.parent_of(Child::Site(s)));
            adjacent[roots + s.0].push((Relation::Parent, parent));
            adjacent[parent].push((Relation::Child, roots + s.0));
        }
        for n in graph.nodes() {
            let v = sites + n.0;
            let parent = place(graph.parent_of(Child::Node(n)));
            adjacent[v].push((Relation::Parent, parent));
            adjacent[parent].push((Relation::Child, v));
            for p in graph.ports_of(n) {
                if let Some(l) = graph.link_of(Point::Port(p)) {
                    adjacent[v].push((Relation::Port, link(l)));
                    adjacent[link(l)].push((Relation::Point, v));
                }
            }
        }

        let inner_names = |l: Link| {
            let mut names: Vec<&str> = graph
                .points_of(l)
                .iter()
                .filter_map(|p| match p {
                    Point::Inner(i) => Some(graph.inner_name(*i)),
                    Point::Port(_) => None,
                })
                .collect();
            let count = names.len();
            if !keep_names {
                names.clear();
            }
            names.sort_unstable();
            (count, names)
        };

        let mut initial: Vec<Initial> = Vec::with_capacity(total);
        initial.extend(graph.roots().map(|r| Initial::Root(r.0)));
        initial.extend(graph.sites().map(|s| Initial::Site(s.0)));
        initial.extend(
            graph
                .nodes()
                .map(|n| Initial::Node(graph.control_of(n).name.as_str())),
        );
        initial.extend(graph.edges().map(|e| {
            let (inners, names) = inner_names(Link::Edge(e));
            Initial::Edge { inners, names }
        }));
        initial.extend(graph.outer_names().map(|o| {
            let (inners, names) = inner_names(Link::Outer(o));
            Initial::Outer {
                name: keep_names.then(|| graph.outer_name(o)),
                inners,
                names,
            }
        }));

        let (mut colours, mut classes) = compress(&initial);
        let mut rounds = 0;
        loop {
            let keys: Vec<(usize, Vec<(Relation, usize)>)> = adjacent
                .iter()
                .enumerate()
                .map(|(v, neighbours)| {
                    let mut around: Vec<(Relation, usize)> =
                        neighbours.iter().map(|&(r, u)| (r, colours[u])).collect();
                    around.sort_unstable();
                    (colours[v], around)
                })
                .collect();
            let (next, next_classes) = compress(&keys);
            colours = next;
            rounds += 1;
            if next_classes == classes {
                break;
            }
            classes = next_classes;
        }
        trace!("colour refinement: {} classes after {} rounds", classes, rounds);

        Colouring {
            num_edges: graph.num_edges(),
            nodes: colours[sites..nodes].to_vec(),
            links: colours[nodes..].to_vec(),
        }
    }

    pub fn node(&self, n: NodeId) -> usize {
        self.nodes[n.0]
    }

    pub fn link(&self, l: Link) -> usize {
        match l {
            Link::Edge(e) => self.links[e.0],
            Link::Outer(o) => self.links[self.num_edges + o.0],
        }
    }
}
