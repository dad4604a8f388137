use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use queryquill_core::markup::Element as ViewElement;
use queryquill_core::{EventKind, Node};

/// Builds DOM nodes for a view tree. `bind` is called once per binding, after
/// the element's children are attached, so listeners see a complete subtree.
pub(crate) fn build<A>(
    document: &Document,
    node: &Node<A>,
    bind: &mut dyn FnMut(&Element, EventKind, &A),
) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(value) => Ok(document.create_text_node(value).into()),
        Node::Element(element) => build_element(document, element, bind).map(Into::into),
    }
}

fn build_element<A>(
    document: &Document,
    element: &ViewElement<A>,
    bind: &mut dyn FnMut(&Element, EventKind, &A),
) -> Result<Element, JsValue> {
    let target = document.create_element(element.tag)?;
    for (name, value) in &element.attrs {
        target.set_attribute(name, value)?;
    }
    for child in &element.children {
        let built = build(document, child, bind)?;
        target.append_child(&built)?;
    }
    for (kind, action) in &element.bindings {
        bind(&target, *kind, action);
    }
    Ok(target)
}

/// Replaces everything inside `container` with `node`.
pub(crate) fn mount<A>(
    document: &Document,
    container: &Element,
    node: &Node<A>,
    bind: &mut dyn FnMut(&Element, EventKind, &A),
) -> Result<(), JsValue> {
    let built = build(document, node, bind)?;
    container.set_inner_html("");
    container.append_child(&built)?;
    Ok(())
}
