use bigraphs::prelude::*;

use crate::theory::meaningless;

fn sig() -> Signature {
    Signature::new([Control::active("K", 1), Control::active("L", 1)])
}

/// Two `K` nodes under one root, port `i` on edge `edges[i]`.
fn two_ks(edges: [usize; 2]) -> Bigraph {
    let mut b = BigraphBuilder::new(sig());
    let root = b.new_root();
    let all = [b.new_edge(), b.new_edge()];
    for e in edges {
        let node = b.new_node("K", Place::Root(root)).unwrap();
        b.connect_port(node, 0, Link::Edge(all[e])).unwrap();
    }
    b.build()
}

#[test]
fn connectivity_is_visible() {
    let shared = two_ks([0, 0]).canonical_form().unwrap();
    let apart = two_ks([0, 1]).canonical_form().unwrap();
    assert_eq!(shared, "0$K(0),K(0)#;;;");
    assert_eq!(apart, "0$K(0),K(1)#;;;");
}

#[test]
fn controls_and_nesting_are_visible() {
    let sig = sig();
    let k = Bigraph::ion(&sig, "K", &["x"]).unwrap();
    let l = Bigraph::ion(&sig, "L", &["x"]).unwrap();
    assert_ne!(k.canonical_form().unwrap(), l.canonical_form().unwrap());

    let barren = Bigraph::barren();
    let flat = (&(&k | &Bigraph::ion(&sig, "L", &["y"]).unwrap()).unwrap() >> &Bigraph::join())
        .unwrap();
    let nested = k.nest(&Bigraph::ion(&sig, "L", &["y"]).unwrap()).unwrap();
    let nested = nested.compose(&barren).unwrap();
    let flat = flat
        .compose(&Bigraph::barren().juxtapose(&barren).unwrap())
        .unwrap();
    assert_ne!(flat.canonical_form().unwrap(), nested.canonical_form().unwrap());
}

#[test]
fn root_order_is_part_of_the_form() {
    let sig = meaningless::signature();
    let a = Bigraph::atom(&sig, "A", &[]).unwrap();
    let b = Bigraph::atom(&sig, "C", &["x", "y"]).unwrap();

    let ab = a.juxtapose(&b).unwrap().canonical_form().unwrap();
    let ba = b.juxtapose(&a).unwrap().canonical_form().unwrap();
    assert_eq!(ab, "0$A#1$C(:0,:1)#;;;");
    assert_ne!(ab, ba);
}

#[test]
fn interface_names_only_matter_when_asked_for() {
    let sig = sig();
    let x = Bigraph::ion(&sig, "K", &["x"]).unwrap();
    let y = Bigraph::ion(&sig, "K", &["y"]).unwrap();

    assert_eq!(x.canonical_form().unwrap(), y.canonical_form().unwrap());
    let form = CanonicalForm::interface_sensitive();
    assert_ne!(form.compute(&x).unwrap(), form.compute(&y).unwrap());
}

#[test]
fn idle_names_are_counted() {
    let with_idle = Bigraph::barren()
        .juxtapose(&Bigraph::substitution("x", Vec::<String>::new()))
        .unwrap();
    assert_ne!(
        with_idle.canonical_form().unwrap(),
        Bigraph::barren().canonical_form().unwrap()
    );

    let mut b = BigraphBuilder::new(Signature::empty());
    b.new_root();
    b.new_inner_name("a").unwrap();
    let idle_inner = b.build();
    assert_eq!(idle_inner.canonical_form().unwrap(), "0#;;;_");
    assert_eq!(
        CanonicalForm::interface_sensitive().compute(&idle_inner).unwrap(),
        "0#;;;a"
    );
}
