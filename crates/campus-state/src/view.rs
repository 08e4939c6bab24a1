//! # Presentation Trees
//!
//! Pure functions from directory data to a small element tree. The same
//! inputs always produce the same tree; nothing here reads the store.
//!
//! ```text
//! single_campus            campus_list
//! div                      ul
//! ├── h2 "Mars"            ├── li#1 "New York"
//! └── ul                   └── li#2 "Chicago"
//!     ├── li#1 <SingleStudent>
//!     └── li#2 <SingleStudent>
//! ```
//!
//! `Display` renders the tree as HTML markup with text escaped.

use std::borrow::Borrow;
use std::fmt;

use campus_core::{Campus, Student};
use serde::Serialize;

/// A reusable component placed in the tree with its props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "component", rename_all = "PascalCase")]
pub enum Component {
    SingleStudent { student: Student },
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleStudent { .. } => "SingleStudent",
        }
    }

    /// The element tree this component renders to.
    pub fn expand(&self) -> ViewNode {
        match self {
            Self::SingleStudent { student } => {
                let mut children = vec![ViewNode::element("span", vec![ViewNode::text(&student.name)])];
                if let Some(phase) = student.phase {
                    children.push(ViewNode::element("small", vec![ViewNode::text(phase.as_str())]));
                }
                ViewNode::element("div", children)
            }
        }
    }
}

/// One node of a presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Element {
        tag: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
    },
    Component(Component),
}

impl ViewNode {
    pub fn element(tag: &'static str, children: Vec<ViewNode>) -> Self {
        Self::Element {
            tag,
            key: None,
            children,
        }
    }

    pub fn keyed(tag: &'static str, key: impl ToString, children: Vec<ViewNode>) -> Self {
        Self::Element {
            tag,
            key: Some(key.to_string()),
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    fn children(&self) -> &[ViewNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text { .. } | Self::Component(_) => &[],
        }
    }

    /// Every element with the given tag, in document order.
    pub fn find(&self, tag: &str) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if matches!(node, Self::Element { tag: t, .. } if *t == tag) {
                found.push(node);
            }
        });
        found
    }

    /// Every component placed in the tree, in document order. Components
    /// are not expanded.
    pub fn components(&self) -> Vec<&Component> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Self::Component(c) = node {
                found.push(c);
            }
        });
        found
    }

    /// Concatenated text content of this subtree, excluding components.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let Self::Text { text } = node {
                out.push_str(text);
            }
        });
        out
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element { tag, children, .. } => {
                write!(f, "<{tag}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
            Self::Text { text } => write_escaped(f, text),
            Self::Component(c) => write!(f, "{}", c.expand()),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            other => write!(f, "{other}")?,
        }
    }
    Ok(())
}

/// A campus heading followed by its roster.
pub fn single_campus(campus: &Campus, students: &[Student]) -> ViewNode {
    let roster = students
        .iter()
        .map(|s| {
            ViewNode::keyed(
                "li",
                s.id.get(),
                vec![ViewNode::Component(Component::SingleStudent { student: s.clone() })],
            )
        })
        .collect();

    ViewNode::element(
        "div",
        vec![
            ViewNode::element("h2", vec![ViewNode::text(&campus.name)]),
            ViewNode::element("ul", roster),
        ],
    )
}

/// A list of campus names keyed by id.
pub fn campus_list<C: Borrow<Campus>>(campuses: &[C]) -> ViewNode {
    ViewNode::element(
        "ul",
        campuses
            .iter()
            .map(|c| {
                let c: &Campus = c.borrow();
                ViewNode::keyed("li", c.id.get(), vec![ViewNode::text(&c.name)])
            })
            .collect(),
    )
}
