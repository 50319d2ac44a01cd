//! Interfaces (faces) of a bigraph.
use core::fmt;
use std::collections::BTreeSet;

/// An interface `<width, names>`: the number of roots (or sites) and a set of outer (or inner)
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interface {
    pub width: usize,
    pub names: BTreeSet<String>,
}

impl Interface {
    pub fn new<S: Into<String>>(width: usize, names: impl IntoIterator<Item = S>) -> Self {
        Interface {
            width,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The origin `<0, {}>`, also the unit of juxtaposition.
    pub fn origin() -> Self {
        Interface::default()
    }

    pub fn is_origin(&self) -> bool {
        self.width == 0 && self.names.is_empty()
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        write!(f, "<{}, {{{}}}>", self.width, names.join(", "))
    }
}
