use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use retemplate_codegen::{CodegenError, generate_source};
use retemplate_dom::{
    Component, ComponentDef, LoadError, Props, RenderNode, component, h, text,
};

fn lazy(def: ComponentDef, calls: Rc<Cell<usize>>) -> Component {
    Component::lazy(move || {
        calls.set(calls.get() + 1);
        let def = def.clone();
        async move { Ok::<_, LoadError>(def) }
    })
}

#[test]
fn async_component_is_resolved_before_naming() {
    let calls = Rc::new(Cell::new(0));
    let node = component(
        lazy(ComponentDef::from_file("src/components/user-card.vue"), calls.clone()),
        Props::new().set("userId", 7),
        vec![text("Ann")],
    );
    let out = pollster::block_on(generate_source(&node)).unwrap();
    assert_eq!(out, "<UserCard :user-id=\"7\">\n  Ann\n</UserCard>");
    assert_eq!(calls.get(), 1);
}

#[test]
fn resolved_component_is_not_loaded_again() {
    let calls = Rc::new(Cell::new(0));
    let node = component(lazy(ComponentDef::named("Chart"), calls.clone()), (), ());
    let first = pollster::block_on(generate_source(&node)).unwrap();
    let second = pollster::block_on(generate_source(&node)).unwrap();
    assert_eq!(first, "<Chart />");
    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);
}

#[test]
fn declared_name_wins_over_file() {
    let calls = Rc::new(Cell::new(0));
    let def = ComponentDef::named("BaseModal").with_file("src/modal.vue");
    let node = component(lazy(def, calls), (), ());
    assert_eq!(pollster::block_on(generate_source(&node)).unwrap(), "<BaseModal />");
}

#[test]
fn nested_async_components_resolve_in_order() {
    let calls = Rc::new(Cell::new(0));
    let node = h(
        "main",
        (),
        vec![
            component(lazy(ComponentDef::named("First"), calls.clone()), (), ()),
            component(lazy(ComponentDef::named("Second"), calls.clone()), (), ()),
        ],
    );
    let out = pollster::block_on(generate_source(&node)).unwrap();
    assert_eq!(out, "<main>\n  <First />\n  <Second />\n</main>");
    assert_eq!(calls.get(), 2);
}

#[test]
fn load_failure_aborts_render() {
    let broken = Component::lazy(|| async {
        Err::<ComponentDef, _>(LoadError::NotFound("Missing".into()))
    });
    let node = h("div", (), vec![text("before"), component(broken, (), ())]);
    let err = pollster::block_on(generate_source(&node)).unwrap_err();
    assert_eq!(err, CodegenError::ComponentLoad(LoadError::NotFound("Missing".into())));
}

#[test]
fn plain_definition_without_name_or_file() {
    let node: RenderNode = component(ComponentDef::default(), (), ());
    assert_eq!(pollster::block_on(generate_source(&node)).unwrap(), "<Anonymous />");
}
