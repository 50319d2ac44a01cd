use bigraphs::prelude::*;

use crate::theory::meaningless::{self, CONTROLS};
use proptest::collection::vec;
use proptest::prelude::*;

const MAX_ROOTS: usize = 3;
const MAX_SITES: usize = 3;
const MAX_LINKS: usize = 4;
const MAX_INNER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Root(usize),
    Node(usize),
}

/// A bigraph over the [`meaningless`] signature, described independently of the identities
/// and creation order the builder will use. Node `i` always has a parent created before it.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub roots: usize,
    /// `(control index, parent)` per node.
    pub nodes: Vec<(usize, Parent)>,
    /// Link index of every port, per node.
    pub ports: Vec<Vec<Option<usize>>>,
    pub sites: Vec<Parent>,
    /// One entry per link: `true` for an outer name, `false` for an edge.
    pub links: Vec<bool>,
    /// Link index of every inner name.
    pub inners: Vec<Option<usize>>,
}

/// How a [`Recipe`] is turned into a bigraph. Every layout of a recipe yields an isomorphic
/// bigraph.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Prepended to every node, edge and interface name.
    pub prefix: &'static str,
    /// Create nodes level by level instead of in recipe order.
    pub breadth_first: bool,
    /// Create links and inner names in reverse order.
    pub reverse_links: bool,
    /// Reverse the children of every place once built.
    pub reverse_siblings: bool,
    /// Shuffle the children of every place once built, with this seed.
    pub shuffle_siblings: Option<u64>,
}

impl Layout {
    /// Different names and creation order, same sibling order.
    pub fn shuffled(prefix: &'static str) -> Self {
        Layout {
            prefix,
            breadth_first: true,
            reverse_links: true,
            reverse_siblings: false,
            shuffle_siblings: None,
        }
    }

    /// Same names and creation order, siblings shuffled with `seed`.
    pub fn siblings_shuffled(seed: u64) -> Self {
        Layout {
            shuffle_siblings: Some(seed),
            ..Layout::default()
        }
    }

    /// The new position of each of `n` children of the `place`th place.
    fn sibling_order(&self, place: usize, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        if let Some(seed) = self.shuffle_siblings {
            order.sort_by_key(|&i| mix(seed ^ mix(place as u64) ^ (i as u64)));
        }
        if self.reverse_siblings {
            order.reverse();
        }
        order
    }
}

/// splitmix64 finaliser, enough to scatter sibling positions.
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

impl Recipe {
    fn depth(&self, node: usize) -> usize {
        match self.nodes[node].1 {
            Parent::Root(_) => 0,
            Parent::Node(p) => self.depth(p) + 1,
        }
    }

    pub fn build(&self) -> Bigraph {
        self.build_with(&Layout::default())
    }

    pub fn build_with(&self, layout: &Layout) -> Bigraph {
        let prefix = layout.prefix;
        let mut b = BigraphBuilder::new(meaningless::signature());
        let roots: Vec<RootId> = (0..self.roots).map(|_| b.new_root()).collect();

        let mut order: Vec<usize> = (0..self.nodes.len()).collect();
        if layout.breadth_first {
            order.sort_by_key(|&i| self.depth(i));
        }
        let mut ids: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        for i in order {
            let (control, parent) = self.nodes[i];
            let place = match parent {
                Parent::Root(r) => Place::Root(roots[r]),
                Parent::Node(p) => Place::Node(ids[p].unwrap()),
            };
            let name = format!("{}v{}", prefix, i);
            ids[i] = Some(b.new_named_node(CONTROLS[control].0, name, place).unwrap());
        }
        let ids: Vec<NodeId> = ids.into_iter().map(Option::unwrap).collect();

        for parent in &self.sites {
            let place = match *parent {
                Parent::Root(r) => Place::Root(roots[r]),
                Parent::Node(n) => Place::Node(ids[n]),
            };
            b.new_site(place).unwrap();
        }

        let mut link_order: Vec<usize> = (0..self.links.len()).collect();
        let mut inner_order: Vec<usize> = (0..self.inners.len()).collect();
        if layout.reverse_links {
            link_order.reverse();
            inner_order.reverse();
        }
        let mut links: Vec<Option<Link>> = vec![None; self.links.len()];
        for i in link_order {
            links[i] = Some(if self.links[i] {
                Link::Outer(b.new_outer_name(format!("{}x{}", prefix, i)).unwrap())
            } else {
                Link::Edge(b.new_named_edge(format!("{}e{}", prefix, i)).unwrap())
            });
        }

        for (n, ports) in self.ports.iter().enumerate() {
            for (index, link) in ports.iter().enumerate() {
                if let Some(l) = link {
                    b.connect_port(ids[n], index, links[*l].unwrap()).unwrap();
                }
            }
        }
        for i in inner_order {
            let inner = b.new_inner_name(format!("{}y{}", prefix, i)).unwrap();
            if let Some(l) = self.inners[i] {
                b.connect(Point::Inner(inner), links[l].unwrap()).unwrap();
            }
        }

        if layout.reverse_siblings || layout.shuffle_siblings.is_some() {
            let places: Vec<Place> = roots
                .iter()
                .map(|r| Place::Root(*r))
                .chain(ids.iter().map(|n| Place::Node(*n)))
                .collect();
            for (i, place) in places.into_iter().enumerate() {
                let children = b.current().children_of(place).to_vec();
                for j in layout.sibling_order(i, children.len()) {
                    b.set_parent(children[j], place).unwrap();
                }
            }
        }

        b.build()
    }
}

type NodeSeed = (usize, usize, Vec<Option<usize>>);

fn from_seeds(
    roots: usize,
    nodes: Vec<NodeSeed>,
    sites: Vec<usize>,
    links: Vec<bool>,
    inners: Vec<Option<usize>>,
) -> Recipe {
    let parent = |seed: usize, created: usize| {
        let p = seed % (roots + created);
        if p < roots {
            Parent::Root(p)
        } else {
            Parent::Node(p - roots)
        }
    };
    let link = |seed: &Option<usize>| seed.and_then(|s| (!links.is_empty()).then(|| s % links.len()));

    let mut recipe = Recipe {
        roots,
        nodes: vec![],
        ports: vec![],
        sites: sites.iter().map(|&s| parent(s, nodes.len())).collect(),
        links: links.clone(),
        inners: inners.iter().map(link).collect(),
    };
    for (i, (control, p, ports)) in nodes.iter().enumerate() {
        let control = control % CONTROLS.len();
        recipe.nodes.push((control, parent(*p, i)));
        recipe
            .ports
            .push(ports.iter().take(CONTROLS[control].1).map(link).collect());
    }
    recipe
}

/// Random recipes with up to `max_nodes` nodes. Without `linked` no port or inner name is
/// attached to anything and there are no links.
pub fn arb_recipe(max_nodes: usize, linked: bool) -> BoxedStrategy<Recipe> {
    let node = (any::<usize>(), any::<usize>(), vec(any::<Option<usize>>(), 2));
    let max_links = if linked { MAX_LINKS } else { 0 };
    (
        1..=MAX_ROOTS,
        vec(node, 0..=max_nodes),
        vec(any::<usize>(), 0..=MAX_SITES),
        vec(any::<bool>(), 0..=max_links),
        vec(any::<Option<usize>>(), 0..=MAX_INNER),
    )
        .prop_map(|(roots, nodes, sites, links, inners)| {
            from_seeds(roots, nodes, sites, links, inners)
        })
        .boxed()
}

/// Nodes of the binary control `C` whose ports close into cycles of edges, one cycle per entry
/// of `lengths`. Node `i` of a cycle shares its second port's edge with the first port of node
/// `i + 1`. Every node sits under one of `roots` roots, picked by `parents`.
pub fn rings(roots: usize, lengths: &[usize], parents: &[usize]) -> Recipe {
    let c = CONTROLS.iter().position(|(name, _)| *name == "C").unwrap();
    let mut recipe = Recipe {
        roots,
        nodes: vec![],
        ports: vec![],
        sites: vec![],
        links: vec![],
        inners: vec![],
    };
    for &len in lengths {
        let first = recipe.links.len();
        recipe.links.extend(std::iter::repeat(false).take(len));
        for i in 0..len {
            let k = recipe.nodes.len();
            let root = parents.get(k).map_or(0, |p| p % roots);
            recipe.nodes.push((c, Parent::Root(root)));
            recipe
                .ports
                .push(vec![Some(first + i), Some(first + (i + 1) % len)]);
        }
    }
    recipe
}

/// Random [`rings`] of up to three cycles of length one to five over one or two roots.
pub fn arb_rings() -> BoxedStrategy<Recipe> {
    (1..=2usize, vec(1..=5usize, 1..=3), vec(any::<usize>(), 15))
        .prop_map(|(roots, lengths, parents)| rings(roots, &lengths, &parents))
        .boxed()
}

pub fn arb_bigraph(max_nodes: usize) -> BoxedStrategy<Bigraph> {
    arb_recipe(max_nodes, true).prop_map(|r| r.build()).boxed()
}
