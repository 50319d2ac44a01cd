use bigraphs::prelude::*;

use crate::bigraph::test_builder::assert_consistent;
use crate::theory::meaningless;

#[test]
fn nesting_shares_the_names_of_the_inner_bigraph() {
    let sig = meaningless::signature();
    let outer = Bigraph::ion(&sig, "B", &["x"]).unwrap();
    let inner = Bigraph::atom(&sig, "C", &["x", "y"])
        .unwrap()
        .juxtapose(&Bigraph::merge(1))
        .unwrap();
    let inner = Bigraph::join().compose(&inner).unwrap();

    let g = outer.nest(&inner).unwrap();
    assert_consistent(&g);
    assert_eq!(g.outer_face(), Interface::new(1, ["x", "y"]));
    assert_eq!(g.inner_face(), Interface::new(1, Vec::<String>::new()));

    let x = g.find_outer_name("x").unwrap();
    assert_eq!(g.points_of(Link::Outer(x)).len(), 2);
    let b = g.children_of(Place::Root(RootId(0)))[0].node().unwrap();
    assert_eq!(g.children_of(Place::Node(b)).len(), 2);
}

#[test]
fn nesting_requires_an_unnamed_inner_face() {
    let outer = Bigraph::substitution("x", ["a"])
        .juxtapose(&Bigraph::merge(1))
        .unwrap();
    assert_eq!(
        outer.nest(&Bigraph::barren()),
        Err(BigraphError::IncompatibleInterface(
            InterfaceMismatch::NamedInnerFace {
                names: vec!["a".to_string()]
            }
        ))
    );
}

#[test]
fn nesting_a_ground_prime_is_composition_when_names_are_disjoint() {
    let sig = meaningless::signature();
    let outer = Bigraph::ion(&sig, "B", &["x"]).unwrap();
    let inner = Bigraph::atom(&sig, "B", &["y"]).unwrap();

    assert_eq!(
        outer.nest(&inner).unwrap().canonical_form(),
        outer.compose(&inner).unwrap().canonical_form()
    );
}
