use std::cell::Cell;
use std::rc::Rc;

use retemplate_dom::{ChildContent, Children, RenderNode, h, text};

fn tags(nodes: &[RenderNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| match n {
            RenderNode::Text(t) => t.clone(),
            RenderNode::Element { tag, .. } => tag.clone(),
            RenderNode::Component { .. } => "<component>".to_string(),
        })
        .collect()
}

#[test]
fn empty_vec_is_no_children() {
    let children: Children = Vec::<RenderNode>::new().into();
    assert!(matches!(children, Children::Empty));
    match children.content() {
        ChildContent::Nodes(nodes) => assert!(nodes.is_empty()),
        ChildContent::Text(_) => panic!("expected nodes"),
    }
}

#[test]
fn raw_text_stays_text() {
    let node = h("p", (), "hello");
    let data = node.data().unwrap();
    match data.children.content() {
        ChildContent::Text(t) => assert_eq!(t, "hello"),
        ChildContent::Nodes(_) => panic!("expected text"),
    }
}

#[test]
fn slot_is_invoked_on_each_expansion() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let children = Children::slot(move || {
        counter.set(counter.get() + 1);
        vec![h("a", (), ()), text("b"), h("c", (), ())]
    });

    for _ in 0..2 {
        let ChildContent::Nodes(nodes) = children.content() else {
            panic!("expected nodes");
        };
        assert_eq!(tags(&nodes), vec!["a", "b", "c"]);
    }
    assert_eq!(calls.get(), 2);
}

#[test]
fn nodes_keep_document_order() {
    let node = h("ul", (), vec![h("li", (), "1"), h("li", (), "2"), text("3")]);
    let ChildContent::Nodes(nodes) = node.data().unwrap().children.content() else {
        panic!("expected nodes");
    };
    assert_eq!(tags(&nodes), vec!["li", "li", "3"]);
}
