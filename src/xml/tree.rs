use xmltree::{Element, XMLNode};

/// Builder and lookup helpers over [`xmltree::Element`].
///
/// The projector only ever appends to the tree; nothing is removed except by
/// [`ElementExt::prune_empty`].
pub trait ElementExt: Sized {
    /// Appends `text` as a text node. An empty string adds nothing.
    fn with_text(self, text: &str) -> Self;
    fn with_child(self, child: Element) -> Self;
    fn with_children<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>;

    fn push(&mut self, child: Element);
    /// Appends to the trailing text node, keeping existing text as DOM `appendChild` does.
    fn push_text(&mut self, text: &str);

    /// Concatenated direct text content, whitespace kept as written.
    fn text_content(&self) -> String;
    fn elements(&self) -> impl Iterator<Item = &Element>;
    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element>;
    /// Follows a path of direct child names, e.g. `["sol3-parameters", "ecp-connection"]`.
    fn path(&self, names: &[&str]) -> Option<&Element>;
    /// Depth-first search for the first element named `name`, including `self`.
    fn find(&self, name: &str) -> Option<&Element>;
    fn find_mut(&mut self, name: &str) -> Option<&mut Element>;

    /// True when the element carries neither child elements nor non-blank text.
    fn is_blank(&self) -> bool;
    /// Recursively removes child elements that end up blank.
    fn prune_empty(&mut self);
}

impl ElementExt for Element {
    fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    fn with_child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children
            .extend(children.into_iter().map(XMLNode::Element));
        self
    }

    fn push(&mut self, child: Element) {
        self.children.push(XMLNode::Element(child));
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XMLNode::Text(existing)) => existing.push_str(text),
            _ => self.children.push(XMLNode::Text(text.to_string())),
        }
    }

    fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                XMLNode::Text(t) | XMLNode::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XMLNode::as_element)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |e| e.name == name)
    }

    fn path(&self, names: &[&str]) -> Option<&Element> {
        names
            .iter()
            .try_fold(self, |element, name| element.get_child(*name))
    }

    fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.elements().find_map(|e| e.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            XMLNode::Element(e) => e.find_mut(name),
            _ => None,
        })
    }

    fn is_blank(&self) -> bool {
        self.children.iter().all(|c| match c {
            XMLNode::Element(_) => false,
            XMLNode::Text(t) | XMLNode::CData(t) => t.trim().is_empty(),
            _ => true,
        })
    }

    fn prune_empty(&mut self) {
        for child in self.children.iter_mut() {
            if let XMLNode::Element(element) = child {
                element.prune_empty();
            }
        }
        self.children.retain(|c| match c {
            XMLNode::Element(e) => !e.is_blank(),
            _ => true,
        });
    }
}
