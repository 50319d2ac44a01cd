use core::fmt;

/// The printed form of the link a point is attached to.
///
/// Labels order as `Unlinked < Edge < Outer < Named`, then by number or name, which is the
/// order ports are sorted in inside a node label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkLabel {
    /// A port attached to no link.
    Unlinked,
    /// An edge, by sequence number of first encounter.
    Edge(usize),
    /// An outer name in open-links mode, by sequence number of first encounter.
    Outer(usize),
    /// An outer name kept verbatim.
    Named(String),
}

impl fmt::Display for LinkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkLabel::Unlinked => write!(f, "_"),
            LinkLabel::Edge(n) => write!(f, "{}", n),
            LinkLabel::Outer(n) => write!(f, ":{}", n),
            LinkLabel::Named(name) => write!(f, "{}", name),
        }
    }
}

pub(crate) fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
