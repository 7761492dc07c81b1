//! Typed page model the page clients operate on.
//!
//! A trimmed-down document tree carrying exactly what the login and toggle
//! handlers touch: ids, classes, input names and values, text content, and
//! the inline `display` style. Nodes live in an arena indexed by [`NodeId`],
//! which keeps handles `Copy` and sidesteps ownership cycles.

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Inline `display` style of an element.
///
/// `Unset` means no inline style is present; stylesheet-driven visibility is
/// out of scope for the page clients, which only read and write the inline
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Unset,
    None,
    Block,
}

/// A single element: tag, identity, form data, text, and inline style.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// The `name` attribute, meaningful for form inputs.
    pub name: Option<String>,
    /// The current value, meaningful for form inputs.
    pub value: String,
    /// Own text content (children carry their own).
    pub text: String,
    pub display: Display,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            name: None,
            value: String::new(),
            text: String::new(),
            display: Display::Unset,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An element tree addressed by [`NodeId`] handles.
///
/// The root is a synthetic `body` element created by [`Document::new`].
/// Removal detaches nodes from the tree without reclaiming arena slots;
/// documents here live for one page session, so slot reuse is not worth the
/// bookkeeping.
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document holding only the root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `element` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0].element
    }

    /// First element with the given id, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk(self.root())
            .find(|&node| self.nodes[node.0].element.id.as_deref() == Some(id))
    }

    /// All elements carrying the given class, in document order.
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.walk(self.root())
            .filter(|&node| self.nodes[node.0].element.has_class(class))
            .collect()
    }

    /// First descendant of `root` whose `name` attribute matches.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.walk(root)
            .find(|&node| self.nodes[node.0].element.name.as_deref() == Some(name))
    }

    /// Value of the named input under `form`, if such an input exists.
    pub fn input_value(&self, form: NodeId, name: &str) -> Option<String> {
        self.find_by_name(form, name)
            .map(|input| self.nodes[input.0].element.value.clone())
    }

    /// Sets the value of the named input under `form`. Returns false when no
    /// such input exists.
    pub fn set_input_value(&mut self, form: NodeId, name: &str, value: &str) -> bool {
        match self.find_by_name(form, name) {
            Some(input) => {
                self.nodes[input.0].element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// The element immediately following `id` under the same parent.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let position = siblings.iter().position(|&child| child == id)?;
        siblings.get(position + 1).copied()
    }

    /// Detaches all children of `id` from the tree.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Replaces the element's content with plain text (children are
    /// detached), the `textContent` analog.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.clear_children(id);
        self.nodes[id.0].element.text = text.into();
    }

    /// Concatenated text of the element and its descendants, in document
    /// order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.walk(id) {
            out.push_str(&self.nodes[node.0].element.text);
        }
        out
    }

    /// Depth-first traversal starting at (and including) `root`.
    fn walk(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![root];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            let children = &self.nodes[next.0].children;
            stack.extend(children.iter().rev().copied());
            Some(next)
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
