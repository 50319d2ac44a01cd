use bigraphs::prelude::*;

use crate::bigraph::strategy::{arb_bigraph, arb_recipe, Layout};
use crate::bigraph::test_builder::assert_consistent;
use crate::theory::meaningless;
use proptest::{prop_assert_eq, proptest};

fn ion(control: &str, names: &[&str]) -> Bigraph {
    Bigraph::ion(&meaningless::signature(), control, names).unwrap()
}

#[test]
fn juxtaposition_puts_the_left_operand_first() {
    let left = ion("B", &["x"]);
    let right = ion("C", &["y", "z"]);
    let g = left.juxtapose(&right).unwrap();

    assert_consistent(&g);
    assert_eq!(g.outer_face(), Interface::new(2, ["x", "y", "z"]));
    assert_eq!(g.inner_face().width, 2);

    let first = g.children_of(Place::Root(RootId(0)))[0].node().unwrap();
    let second = g.children_of(Place::Root(RootId(1)))[0].node().unwrap();
    assert_eq!(g.control_of(first).name, "B");
    assert_eq!(g.control_of(second).name, "C");
    assert_eq!(g.parent_of(Child::Site(SiteId(0))), Place::Node(first));
    assert_eq!(g.parent_of(Child::Site(SiteId(1))), Place::Node(second));
}

#[test]
fn juxtaposition_requires_disjoint_names() {
    let err = ion("B", &["x"]).juxtapose(&ion("B", &["x"]));
    assert_eq!(
        err,
        Err(BigraphError::IncompatibleInterface(
            InterfaceMismatch::NameOverlap {
                names: vec!["x".to_string()]
            }
        ))
    );

    let inner = Bigraph::substitution("x", ["a"]).juxtapose(&Bigraph::substitution("y", ["a"]));
    assert!(matches!(
        inner,
        Err(BigraphError::IncompatibleInterface(
            InterfaceMismatch::NameOverlap { .. }
        ))
    ));
}

#[test]
fn parallel_product_shares_outer_names() {
    let g = (&ion("B", &["x"]) & &ion("C", &["x", "y"])).unwrap();

    assert_consistent(&g);
    assert_eq!(g.outer_face(), Interface::new(2, ["x", "y"]));
    let x = g.find_outer_name("x").unwrap();
    // one port of B and the first port of C
    assert_eq!(g.points_of(Link::Outer(x)).len(), 2);
    let y = g.find_outer_name("y").unwrap();
    assert_eq!(g.points_of(Link::Outer(y)).len(), 1);
}

#[test]
fn parallel_product_shares_inner_names() {
    // the edge closing `a` on the left and the outer name `x` on the right become one link
    let g = Bigraph::closure(["a"])
        .parallel_product(&Bigraph::substitution("x", ["a"]))
        .unwrap();

    assert_eq!(g.num_edges(), 0);
    assert_eq!(g.inner_face(), Interface::new(0, ["a"]));
    let a = g.find_inner_name("a").unwrap();
    assert_eq!(
        g.link_of(Point::Inner(a)),
        Some(Link::Outer(g.find_outer_name("x").unwrap()))
    );

    // an inner name idle on one side takes the link of the other
    let mut b = BigraphBuilder::new(Signature::empty());
    b.new_inner_name("a").unwrap();
    let idle = b.build();
    let g = idle
        .parallel_product(&Bigraph::substitution("x", ["a"]))
        .unwrap();
    let a = g.find_inner_name("a").unwrap();
    assert!(g.link_of(Point::Inner(a)).is_some());
}

#[test]
fn parallel_product_rejects_merging_two_outer_names() {
    let err = Bigraph::substitution("x", ["a"]).parallel_product(&Bigraph::substitution("y", ["a"]));
    assert_eq!(
        err,
        Err(BigraphError::IncompatibleInterface(
            InterfaceMismatch::LinkConflict {
                left: "x".to_string(),
                right: "y".to_string()
            }
        ))
    );
}

#[test]
fn incompatible_signatures() {
    let other = Signature::new([Control::active("Z", 0)]);
    let z = Bigraph::ion(&other, "Z", &[]).unwrap();
    assert!(matches!(
        ion("A", &[]).juxtapose(&z),
        Err(BigraphError::IncompatibleSignature { .. })
    ));
    // elementary bigraphs go with anything
    assert!(Bigraph::merge(2).juxtapose(&z).is_ok());
}

proptest! {
    #[test]
    fn juxtaposition_adds_up(left in arb_recipe(6, true), right in arb_recipe(6, true)) {
        let g = left.build();
        let f = right.build_with(&Layout::shuffled("f_"));
        let h = (&g | &f).unwrap();

        assert_consistent(&h);
        prop_assert_eq!(h.num_nodes(), g.num_nodes() + f.num_nodes());
        prop_assert_eq!(h.num_roots(), g.num_roots() + f.num_roots());
        prop_assert_eq!(h.num_sites(), g.num_sites() + f.num_sites());
        prop_assert_eq!(h.num_edges(), g.num_edges() + f.num_edges());
        prop_assert_eq!(h.num_inner_names(), g.num_inner_names() + f.num_inner_names());

        // and the same with the empty bigraph
        prop_assert_eq!(g.juxtapose(&Bigraph::empty()).unwrap().canonical_form(), g.canonical_form());
    }

    #[test]
    fn parallel_product_of_a_bigraph_with_itself_shares_every_name(g in arb_bigraph(6)) {
        let h = g.parallel_product(&g).unwrap();
        assert_consistent(&h);
        prop_assert_eq!(h.outer_face().names, g.outer_face().names);
        prop_assert_eq!(h.inner_face().names, g.inner_face().names);
        prop_assert_eq!(h.num_nodes(), 2 * g.num_nodes());
    }
}
