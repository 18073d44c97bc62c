//! `ContentNode`: The tree being revealed.
//!
//! A content tree is plain text mixed with decorated containers. The
//! engine only ever looks at the shape of the tree and the text in its
//! leaves; the metadata carried by containers (styles, identities, tags)
//! is passed through untouched.
//!
//! ```text
//! Container { meta: bold }
//! ├── Leaf "Hello, "
//! ├── Container { meta: green }
//! │   └── Leaf "world"
//! └── Empty
//! ```

use std::fmt::Display;

/// A node in a content tree.
///
/// `M` is the caller's container metadata. The reveal engine never
/// inspects it; it only clones it onto every container it rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode<M> {
    /// An indivisible run of text.
    Leaf(String),
    /// A decorated node holding zero or more children in document order.
    Container {
        /// Children in document order.
        children: Vec<ContentNode<M>>,
        /// Opaque passthrough data.
        meta: M,
    },
    /// Explicit absence. Has zero length.
    Empty,
}

impl<M> ContentNode<M> {
    /// Create a text leaf.
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Create a leaf from a number, stringified in decimal form.
    ///
    /// `ContentNode::number(42)` is indistinguishable from
    /// `ContentNode::text("42")`.
    #[inline]
    pub fn number(value: impl Display) -> Self {
        Self::Leaf(value.to_string())
    }

    /// Create a container.
    #[inline]
    pub fn container(meta: M, children: impl IntoIterator<Item = Self>) -> Self {
        Self::Container {
            children: children.into_iter().collect(),
            meta,
        }
    }

    /// Create an empty node.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Children of a container, or an empty slice for leaves and `Empty`.
    #[inline]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Container { children, .. } => children,
            Self::Leaf(_) | Self::Empty => &[],
        }
    }

    /// Metadata of a container.
    #[inline]
    pub const fn meta(&self) -> Option<&M> {
        match self {
            Self::Container { meta, .. } => Some(meta),
            Self::Leaf(_) | Self::Empty => None,
        }
    }

    /// Concatenate every leaf in document order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Leaf(text) => out.push_str(text),
            Self::Container { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Empty => {}
        }
    }

    /// Structural comparison that ignores leaf text.
    ///
    /// Two trees have the same shape when every position holds the same
    /// kind of node and containers carry equal metadata.
    pub fn same_shape(&self, other: &Self) -> bool
    where
        M: PartialEq,
    {
        match (self, other) {
            (Self::Leaf(_), Self::Leaf(_)) | (Self::Empty, Self::Empty) => true,
            (
                Self::Container { children: a, meta: ma },
                Self::Container { children: b, meta: mb },
            ) => ma == mb && a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y)),
            _ => false,
        }
    }
}

impl<M> Default for ContentNode<M> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<M> From<&str> for ContentNode<M> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_owned())
    }
}

impl<M> From<String> for ContentNode<M> {
    #[inline]
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

macro_rules! numeric_leaf {
    ($($t:ty),*) => {
        $(
            impl<M> From<$t> for ContentNode<M> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::number(value)
                }
            }
        )*
    };
}

numeric_leaf!(i32, i64, u32, u64, usize, f64);

/// Booleans render as nothing.
impl<M> From<bool> for ContentNode<M> {
    #[inline]
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl<M, T: Into<Self>> From<Option<T>> for ContentNode<M> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
