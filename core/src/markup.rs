//! Host-independent view tree.
//!
//! Renderers build `Node`s; the web crate mounts them into the document and
//! turns each `(EventKind, action)` binding into one listener.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node<A> {
    Element(Element<A>),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element<A> {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub bindings: Vec<(EventKind, A)>,
    pub children: Vec<Node<A>>,
}

pub fn el<A>(tag: &'static str) -> Element<A> {
    Element {
        tag,
        attrs: Vec::new(),
        bindings: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text<A>(value: impl Into<String>) -> Node<A> {
    Node::Text(value.into())
}

impl<A> Element<A> {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn on(mut self, kind: EventKind, action: A) -> Self {
        self.bindings.push((kind, action));
        self
    }

    pub fn child(mut self, node: impl Into<Node<A>>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node<A>>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .map(|value| value.split_whitespace().any(|item| item == class))
            .unwrap_or(false)
    }
}

impl<A> From<Element<A>> for Node<A> {
    fn from(element: Element<A>) -> Self {
        Node::Element(element)
    }
}

impl<A> From<&str> for Node<A> {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl<A> From<String> for Node<A> {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl<A> Node<A> {
    pub fn as_element(&self) -> Option<&Element<A>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of the subtree, whitespace-collapsed.
    pub fn text_content(&self) -> String {
        let mut raw = String::new();
        self.collect_text(&mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(value) => {
                out.push_str(value);
                out.push(' ');
            }
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first, document-order search.
    pub fn find<F>(&self, predicate: F) -> Option<&Element<A>>
    where
        F: Fn(&Element<A>) -> bool,
    {
        self.find_all(predicate).into_iter().next()
    }

    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element<A>>
    where
        F: Fn(&Element<A>) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&predicate, &mut found);
        found
    }

    fn walk<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Element<A>>)
    where
        F: Fn(&Element<A>) -> bool,
    {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.walk(predicate, found);
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element<A>> {
        self.find(|element| element.attr_value("id") == Some(id))
    }

    /// Every event binding in the subtree, in document order.
    pub fn bindings(&self) -> Vec<(EventKind, &A)> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings<'a>(&'a self, out: &mut Vec<(EventKind, &'a A)>) {
        if let Node::Element(element) = self {
            for (kind, action) in &element.bindings {
                out.push((*kind, action));
            }
            for child in &element.children {
                child.collect_bindings(out);
            }
        }
    }
}
