//! The per-call state of one canonical form computation.
//!
//! Siblings are emitted greedily by [`OrderKey`]. When several candidates share the smallest
//! key the encoder individualises each in turn and keeps the smallest complete encoding, up to
//! [`BRANCH_BUDGET`] branches.
use super::label::{join, LinkLabel};
use super::refine::{compress, Colouring};
use super::CanonicalForm;
use crate::bigraph::*;

use log::{debug, trace};
use std::cmp::Reverse;

/// Invariant signature of a child of some place. Sites keep their index since it denotes a
/// parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ChildKey {
    Node { height: usize, rank: usize },
    Site(usize),
}

/// Sibling order: signature, then more children first, then more ports first, then the
/// largest multiset of already assigned link labels. `None` marks a link without a label yet.
type OrderKey = (
    ChildKey,
    Reverse<usize>,
    Reverse<usize>,
    Reverse<Vec<Option<LinkLabel>>>,
);

/// Number of tie branches explored per computation. Past it, ties go to the first candidate.
const BRANCH_BUDGET: usize = 1 << 14;

pub(crate) struct Encoder<'a> {
    graph: &'a Bigraph,
    config: CanonicalForm,
    colours: Colouring,
    signatures: Vec<ChildKey>,
    /// Nodes whose subtree has no linked port.
    link_free: Vec<bool>,
}

/// Everything that changes while encoding. Cloned at every tie that is branched on.
#[derive(Debug, Clone)]
struct Cursor {
    /// Edges first, then outer names.
    labels: Vec<Option<LinkLabel>>,
    next_edge: usize,
    next_outer: usize,
    /// Finished roots.
    out: String,
    root: usize,
    /// Finished levels of the current root.
    levels: Vec<String>,
    /// Places whose children make up the current level.
    frontier: Vec<Place>,
    /// Position in `frontier` of the place being emitted.
    parent: usize,
    /// Finished groups of the current level.
    groups: Vec<String>,
    /// Children of `frontier[parent]` emitted so far, and those still to go.
    group: Vec<String>,
    remaining: Vec<Child>,
    /// Places emitted on the current level, in emission order.
    next: Vec<Place>,
}

impl<'a> Encoder<'a> {
    pub fn new(graph: &'a Bigraph, config: CanonicalForm) -> Self {
        let colours = Colouring::refine(graph, !config.rewrite_open_links);
        let (signatures, link_free) = subtree_signatures(graph, &colours);
        Encoder {
            graph,
            config,
            colours,
            signatures,
            link_free,
        }
    }

    pub fn run(self) -> String {
        let graph = self.graph;
        let mut cursor = Cursor {
            labels: vec![None; graph.num_edges() + graph.num_outer_names()],
            next_edge: 0,
            next_outer: 0,
            out: String::new(),
            root: 0,
            levels: vec![],
            frontier: vec![],
            parent: 0,
            groups: vec![],
            group: vec![],
            remaining: vec![],
            next: vec![],
        };

        let idle_outer: Vec<OuterId> = graph
            .outer_names()
            .filter(|&o| graph.is_idle(Link::Outer(o)))
            .collect();
        for &o in &idle_outer {
            self.label(&mut cursor, Link::Outer(o));
        }
        if graph.num_roots() > 0 {
            self.start_root(&mut cursor, RootId(0));
        }

        let mut budget = BRANCH_BUDGET;
        let form = self.complete(cursor, &mut budget);
        if budget == 0 {
            debug!("tie budget exhausted, remaining ties broken by position");
        }
        form
    }

    /// Finish the encoding from `cursor`. At a tie between candidates which are not
    /// interchangeable every choice is tried and the smallest encoding wins, so the result does
    /// not depend on the order of siblings.
    fn complete(&self, mut cursor: Cursor, budget: &mut usize) -> String {
        while let Some(tied) = self.advance(&mut cursor) {
            if tied.len() == 1 || *budget == 0 || self.interchangeable(&cursor, &tied) {
                self.take(&mut cursor, tied[0]);
                continue;
            }

            let mut best: Option<String> = None;
            for &choice in &tied {
                let mut branch = cursor.clone();
                self.take(&mut branch, choice);
                *budget = budget.saturating_sub(1);
                let form = self.complete(branch, budget);
                if best.as_ref().map_or(true, |b| form < *b) {
                    best = Some(form);
                }
            }
            return best.unwrap_or_default();
        }

        let trailing = self.trailing(&mut cursor);
        cursor.out.push_str(&trailing);
        cursor.out
    }

    fn start_root(&self, cursor: &mut Cursor, root: RootId) {
        cursor.root = root.0;
        cursor.levels = vec![root.0.to_string()];
        cursor.frontier = vec![Place::Root(root)];
        cursor.parent = 0;
        cursor.groups.clear();
        cursor.group.clear();
        cursor.remaining = self.graph.children_of(Place::Root(root)).to_vec();
        cursor.next.clear();
    }

    /// Move through finished groups, levels and roots until some child has to be chosen.
    /// Returns the positions in `remaining` of the candidates with the smallest [`OrderKey`],
    /// or `None` once every root is encoded.
    fn advance(&self, cursor: &mut Cursor) -> Option<Vec<usize>> {
        let graph = self.graph;
        loop {
            if cursor.root >= graph.num_roots() {
                return None;
            }

            if cursor.parent < cursor.frontier.len() {
                if !cursor.remaining.is_empty() {
                    return Some(self.tied(cursor));
                }
                let group = std::mem::take(&mut cursor.group);
                cursor.groups.push(group.join(","));
                cursor.parent += 1;
                if let Some(&place) = cursor.frontier.get(cursor.parent) {
                    cursor.remaining = graph.children_of(place).to_vec();
                }
                continue;
            }

            // the level is complete
            let groups = std::mem::take(&mut cursor.groups);
            if groups.iter().all(String::is_empty) {
                let encoded = format!("{}#", cursor.levels.join("$"));
                cursor.out.push_str(&encoded);
                let next_root = cursor.root + 1;
                if next_root < graph.num_roots() {
                    self.start_root(cursor, RootId(next_root));
                } else {
                    cursor.root = next_root;
                }
                continue;
            }

            let level = groups.join("|");
            trace!("root {} level {}: {}", cursor.root, cursor.levels.len(), level);
            cursor.levels.push(level);
            cursor.frontier = std::mem::take(&mut cursor.next);
            cursor.parent = 0;
            cursor.remaining = match cursor.frontier.first() {
                Some(&place) => graph.children_of(place).to_vec(),
                None => vec![],
            };
        }
    }

    fn tied(&self, cursor: &Cursor) -> Vec<usize> {
        let keys: Vec<OrderKey> = cursor
            .remaining
            .iter()
            .map(|&c| self.order_key(cursor, c))
            .collect();
        match keys.iter().min() {
            Some(min) => (0..keys.len()).filter(|&i| keys[i] == *min).collect(),
            None => vec![],
        }
    }

    /// Tied nodes whose subtrees carry no links encode identically whichever goes first.
    fn interchangeable(&self, cursor: &Cursor, tied: &[usize]) -> bool {
        tied.iter().all(|&i| match cursor.remaining[i] {
            Child::Node(n) => self.link_free[n.0],
            Child::Site(_) => false,
        })
    }

    /// Emit `remaining[index]`.
    fn take(&self, cursor: &mut Cursor, index: usize) {
        let child = cursor.remaining.remove(index);
        let label = self.emit(cursor, child);
        cursor.group.push(label);
        if let Child::Node(n) = child {
            cursor.next.push(Place::Node(n));
        }
    }

    fn slot(&self, link: Link) -> usize {
        match link {
            Link::Edge(e) => e.0,
            Link::Outer(o) => self.graph.num_edges() + o.0,
        }
    }

    /// The label of `link`, assigning the next sequence number on first encounter.
    fn label(&self, cursor: &mut Cursor, link: Link) -> LinkLabel {
        let slot = self.slot(link);
        if let Some(label) = &cursor.labels[slot] {
            return label.clone();
        }
        let label = match link {
            Link::Edge(_) => {
                cursor.next_edge += 1;
                LinkLabel::Edge(cursor.next_edge - 1)
            }
            Link::Outer(_) if self.config.rewrite_open_links => {
                cursor.next_outer += 1;
                LinkLabel::Outer(cursor.next_outer - 1)
            }
            Link::Outer(o) => LinkLabel::Named(self.graph.outer_name(o).to_string()),
        };
        cursor.labels[slot] = Some(label.clone());
        label
    }

    fn order_key(&self, cursor: &Cursor, child: Child) -> OrderKey {
        match child {
            Child::Site(s) => (
                ChildKey::Site(s.0),
                Reverse(0),
                Reverse(0),
                Reverse(vec![]),
            ),
            Child::Node(n) => {
                let node = self.graph.node(n);
                let mut current: Vec<Option<LinkLabel>> = self
                    .graph
                    .ports_of(n)
                    .map(|p| match self.graph.link_of(Point::Port(p)) {
                        Some(l) => cursor.labels[self.slot(l)].clone(),
                        None => Some(LinkLabel::Unlinked),
                    })
                    .collect();
                current.sort();
                (
                    self.signatures[n.0],
                    Reverse(node.children().len()),
                    Reverse(node.arity()),
                    Reverse(current),
                )
            }
        }
    }

    fn emit(&self, cursor: &mut Cursor, child: Child) -> String {
        let n = match child {
            Child::Site(s) => return format!("[{}]", s.0),
            Child::Node(n) => n,
        };
        let graph = self.graph;

        // links seen here first are numbered by colour, then by port position
        let mut fresh: Vec<(usize, usize, Link)> = graph
            .ports_of(n)
            .filter_map(|p| graph.link_of(Point::Port(p)).map(|l| (p.index, l)))
            .filter(|&(_, l)| cursor.labels[self.slot(l)].is_none())
            .map(|(index, l)| (self.colours.link(l), index, l))
            .collect();
        fresh.sort();
        for (_, _, l) in fresh {
            self.label(cursor, l);
        }

        let mut ports: Vec<LinkLabel> = graph
            .ports_of(n)
            .map(|p| match graph.link_of(Point::Port(p)) {
                Some(l) => self.label(cursor, l),
                None => LinkLabel::Unlinked,
            })
            .collect();
        ports.sort();

        let control = &graph.control_of(n).name;
        if ports.is_empty() {
            control.clone()
        } else {
            format!("{}({})", control, join(&ports, ","))
        }
    }

    /// `inner-via-edge;inner-via-outer;idle-outer;idle-inner`
    fn trailing(&self, cursor: &mut Cursor) -> String {
        let graph = self.graph;

        // links only reachable from inner names were not met by the traversal
        let mut pending: Vec<Link> = graph
            .links()
            .filter(|&l| cursor.labels[self.slot(l)].is_none() && !graph.is_idle(l))
            .collect();
        pending.sort_by_key(|&l| (matches!(l, Link::Outer(_)), self.colours.link(l)));
        for l in pending {
            self.label(cursor, l);
        }

        let keep_names = !self.config.rewrite_open_links;
        let mut via_edge: Vec<(&str, LinkLabel)> = vec![];
        let mut via_outer: Vec<(&str, LinkLabel)> = vec![];
        let mut idle_inner: Vec<&str> = vec![];
        for i in graph.inner_names() {
            let name = if keep_names { graph.inner_name(i) } else { "" };
            match graph.link_of(Point::Inner(i)) {
                Some(l @ Link::Edge(_)) => via_edge.push((name, self.label(cursor, l))),
                Some(l @ Link::Outer(_)) => via_outer.push((name, self.label(cursor, l))),
                None => idle_inner.push(if keep_names { name } else { "_" }),
            }
        }
        via_edge.sort();
        via_outer.sort();
        idle_inner.sort_unstable();

        let mut idle: Vec<LinkLabel> = graph
            .outer_names()
            .filter(|&o| graph.is_idle(Link::Outer(o)))
            .map(|o| self.label(cursor, Link::Outer(o)))
            .collect();
        idle.sort();

        let entries = |list: &[(&str, LinkLabel)]| -> String {
            let shown: Vec<String> = list
                .iter()
                .map(|(name, label)| {
                    if keep_names {
                        format!("{}={}", name, label)
                    } else {
                        label.to_string()
                    }
                })
                .collect();
            shown.join(",")
        };

        format!(
            "{};{};{};{}",
            entries(&via_edge),
            entries(&via_outer),
            join(&idle, ","),
            idle_inner.join(",")
        )
    }
}

/// Bottom-up signatures of every node: its colour, the sorted signatures of its children and
/// the sorted colours of the links on its ports. Ranks are taken per height so a signature
/// only depends on values already computed.
///
/// Also returns, per node, whether its subtree is free of linked ports.
fn subtree_signatures(graph: &Bigraph, colours: &Colouring) -> (Vec<ChildKey>, Vec<bool>) {
    // pre-order over all roots; reversed, every node comes after its children
    let mut order = Vec::with_capacity(graph.num_nodes());
    let mut stack: Vec<NodeId> = graph
        .roots()
        .flat_map(|r| graph.children_of(Place::Root(r)).iter().filter_map(|c| c.node()))
        .collect();
    while let Some(n) = stack.pop() {
        order.push(n);
        stack.extend(
            graph
                .children_of(Place::Node(n))
                .iter()
                .filter_map(|c| c.node()),
        );
    }

    let mut height = vec![0; graph.num_nodes()];
    let mut link_free = vec![true; graph.num_nodes()];
    for &n in order.iter().rev() {
        let children = || {
            graph
                .children_of(Place::Node(n))
                .iter()
                .filter_map(|c| c.node())
        };
        height[n.0] = children().map(|c| height[c.0] + 1).max().unwrap_or(0);
        link_free[n.0] = graph
            .ports_of(n)
            .all(|p| graph.link_of(Point::Port(p)).is_none())
            && children().all(|c| link_free[c.0]);
    }

    let mut layers: Vec<Vec<NodeId>> = vec![];
    for n in graph.nodes() {
        let h = height[n.0];
        if layers.len() <= h {
            layers.resize(h + 1, vec![]);
        }
        layers[h].push(n);
    }

    let mut signatures = vec![ChildKey::Site(0); graph.num_nodes()];
    for (h, layer) in layers.iter().enumerate() {
        let keys: Vec<(usize, Vec<ChildKey>, Vec<Option<usize>>)> = layer
            .iter()
            .map(|&n| {
                let mut children: Vec<ChildKey> = graph
                    .children_of(Place::Node(n))
                    .iter()
                    .map(|c| match c {
                        Child::Node(c) => signatures[c.0],
                        Child::Site(s) => ChildKey::Site(s.0),
                    })
                    .collect();
                children.sort();
                let mut ports: Vec<Option<usize>> = graph
                    .ports_of(n)
                    .map(|p| graph.link_of(Point::Port(p)).map(|l| colours.link(l)))
                    .collect();
                ports.sort();
                (colours.node(n), children, ports)
            })
            .collect();
        let (ranks, _) = compress(&keys);
        for (&n, rank) in layer.iter().zip(ranks) {
            signatures[n.0] = ChildKey::Node { height: h, rank };
        }
    }
    (signatures, link_free)
}
