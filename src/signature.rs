//! Controls and signatures.
//!
//! A [`Signature`] is a finite set of [`Control`]s, each with a name, an arity (the number of
//! ports carried by every node of that control) and a [`ControlKind`].
//! The algebra only ever *queries* a signature; it is never mutated by composition.
use core::fmt;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlKind {
    /// Reactions may occur inside nodes of this control.
    Active,
    /// Reactions may not occur inside nodes of this control.
    Passive,
    /// Nodes of this control have no children at all.
    Atomic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    pub name: String,
    pub arity: usize,
    pub kind: ControlKind,
}

impl Control {
    pub fn new(name: impl Into<String>, arity: usize, kind: ControlKind) -> Self {
        Control {
            name: name.into(),
            arity,
            kind,
        }
    }

    pub fn active(name: impl Into<String>, arity: usize) -> Self {
        Self::new(name, arity, ControlKind::Active)
    }

    pub fn passive(name: impl Into<String>, arity: usize) -> Self {
        Self::new(name, arity, ControlKind::Passive)
    }

    pub fn atomic(name: impl Into<String>, arity: usize) -> Self {
        Self::new(name, arity, ControlKind::Atomic)
    }

    pub fn is_atomic(&self) -> bool {
        self.kind == ControlKind::Atomic
    }

    pub fn is_active(&self) -> bool {
        self.kind == ControlKind::Active
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ControlKind::Active => "active",
            ControlKind::Passive => "passive",
            ControlKind::Atomic => "atomic",
        };
        write!(f, "{}:{}:{}", self.name, self.arity, kind)
    }
}

/// A set of controls, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    controls: BTreeMap<String, Control>,
}

impl Signature {
    /// The empty signature, carried by placings and linkings.
    pub fn empty() -> Self {
        Signature::default()
    }

    /// Build a signature from a list of controls.
    /// When two controls share a name the later one wins.
    pub fn new(controls: impl IntoIterator<Item = Control>) -> Self {
        let mut s = Signature::empty();
        for c in controls {
            s.add(c);
        }
        s
    }

    pub fn add(&mut self, control: Control) {
        self.controls.insert(control.name.clone(), control);
    }

    pub fn with(mut self, control: Control) -> Self {
        self.add(control);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).map(|c| c.arity)
    }

    pub fn kind(&self, name: &str) -> Option<ControlKind> {
        self.get(name).map(|c| c.kind)
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// The union of two signatures, or `None` if they disagree on some control.
    pub fn union(&self, other: &Signature) -> Option<Signature> {
        let mut result = self.clone();
        for c in other.controls() {
            match self.get(&c.name) {
                Some(existing) if existing != c => return None,
                _ => result.add(c.clone()),
            }
        }
        Some(result)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controls: Vec<String> = self.controls().map(|c| c.to_string()).collect();
        write!(f, "{}", controls.join(", "))
    }
}
