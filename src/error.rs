//! Error types for bigraph construction, the composition algebra and canonical forms.
use crate::bigraph::BigraphEntity;

use core::fmt;
use thiserror::Error;

/// Why two interfaces could not be glued together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceMismatch {
    /// The outer bigraph has `sites` sites but the inner one has `roots` roots.
    SiteRootMismatch { sites: usize, roots: usize },
    /// Names which must be disjoint are shared by both operands.
    NameOverlap { names: Vec<String> },
    /// Merging shared names would identify two distinct outer names.
    LinkConflict { left: String, right: String },
    /// The outer bigraph of a nesting has inner names.
    NamedInnerFace { names: Vec<String> },
}

impl fmt::Display for InterfaceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceMismatch::SiteRootMismatch { sites, roots } => {
                write!(f, "{} site(s) cannot receive {} root(s)", sites, roots)
            }
            InterfaceMismatch::NameOverlap { names } => {
                write!(f, "names must be disjoint but share {{{}}}", names.join(", "))
            }
            InterfaceMismatch::LinkConflict { left, right } => {
                write!(f, "outer names {} and {} would denote one link", left, right)
            }
            InterfaceMismatch::NamedInnerFace { names } => {
                write!(f, "inner face must be unnamed, found {{{}}}", names.join(", "))
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigraphError {
    #[error("incompatible signatures: [{left}] and [{right}]")]
    IncompatibleSignature { left: String, right: String },
    #[error("incompatible interface: {0}")]
    IncompatibleInterface(InterfaceMismatch),
    #[error("control {control} is atomic and cannot contain children")]
    ControlIsAtomic { control: String },
    #[error("control {0} is not part of the signature")]
    UnknownControl(String),
    #[error("port {index} out of range for node {node} of arity {arity}")]
    PortOutOfRange {
        node: String,
        index: usize,
        arity: usize,
    },
    #[error("{0} is already connected to a link")]
    PointAlreadyConnected(BigraphEntity),
    #[error("identity {0} is already in use")]
    DuplicateName(String),
    #[error("{0} does not exist")]
    NoSuchEntity(BigraphEntity),
    #[error("placing {child} under {parent} would create a cycle")]
    PlaceCycle {
        child: BigraphEntity,
        parent: BigraphEntity,
    },
    #[error("canonical form is undefined for a bigraph without roots")]
    NoRoots,
    #[error("node {node} has atomic control {control} but contains children")]
    AtomicNodeHasChildren { node: String, control: String },
    #[error("control {control} has arity {arity} but {names} name(s) were given")]
    ArityMismatch {
        control: String,
        arity: usize,
        names: usize,
    },
    #[error("{0:?} is not a permutation")]
    InvalidPermutation(Vec<usize>),
}

pub type Result<T> = core::result::Result<T, BigraphError>;
