//! Expression nodes: the numbers a drawing is parameterised with.
//!
//! A [`Node`] is a cheap handle to an immutable expression. Cloning the handle
//! shares the node, which is how the same random draw is reused in several
//! places. Three kinds exist, each with its own evaluation timing:
//!
//! * [`Scalar`]: a fixed number, known at construction.
//! * [`DistributionLeaf`]: sampled exactly once, *during construction*, then
//!   constant for the rest of its life.
//! * [`Combinator`]: two children and an operator; recomputed from the
//!   children on every [`Node::resolve`], never cached itself.

use std::fmt;
use std::rc::Rc;

use crate::prelude::*;

/* ═══════════════════════  LEAF: Scalar  ════════════════════════════════ */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    value: f64,
}

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

/* ═══════════════════════  NODE  ════════════════════════════════════════ */

#[derive(Debug)]
pub enum NodeKind {
    Scalar(Scalar),
    Distribution(DistributionLeaf),
    Combinator(Combinator),
}

#[derive(Debug, Clone)]
pub struct Node(Rc<NodeKind>);

impl Node {
    pub fn scalar(value: f64) -> Node {
        Node::from_kind(NodeKind::Scalar(Scalar::new(value)))
    }

    /// Build a distribution leaf. The sample is taken here.
    pub fn distribution(distribution: Distribution) -> Node {
        Node::from_kind(NodeKind::Distribution(DistributionLeaf::new(distribution)))
    }

    pub(crate) fn combinator(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::from_kind(NodeKind::Combinator(Combinator::new(op, left, right)))
    }

    fn from_kind(kind: NodeKind) -> Node {
        Node(Rc::new(kind))
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.0
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Cached value of a leaf. Combinators hold no cache.
    pub fn cached(&self) -> Option<f64> {
        match self.kind() {
            NodeKind::Scalar(s) => Some(s.value()),
            NodeKind::Distribution(d) => d.cached(),
            NodeKind::Combinator(_) => None,
        }
    }

    /// Concrete value of the expression.
    ///
    /// Leaves return their cached value. Combinators recompute from their
    /// children each call; since every path ends in a cached leaf, repeated
    /// calls agree.
    pub fn resolve(&self) -> Result<f64> {
        match self.kind() {
            NodeKind::Scalar(s) => Ok(s.value()),
            NodeKind::Distribution(d) => Ok(d.value()),
            NodeKind::Combinator(c) => c.resolve(),
        }
    }

    /* ---- composition ---- */

    pub fn add(&self, other: impl Into<Value>) -> Node {
        self.combine(BinaryOp::Add, other.into())
    }

    pub fn subtract(&self, other: impl Into<Value>) -> Node {
        self.combine(BinaryOp::Subtract, other.into())
    }

    pub fn multiply(&self, other: impl Into<Value>) -> Node {
        self.combine(BinaryOp::Multiply, other.into())
    }

    pub fn divide(&self, other: impl Into<Value>) -> Node {
        self.combine(BinaryOp::Divide, other.into())
    }

    /// `lhs - self`
    pub fn sub_from(&self, lhs: impl Into<Value>) -> Node {
        Node::combinator(BinaryOp::Subtract, lhs.into().into_node(), self.clone())
    }

    /// `lhs / self`
    pub fn div_from(&self, lhs: impl Into<Value>) -> Node {
        Node::combinator(BinaryOp::Divide, lhs.into().into_node(), self.clone())
    }

    fn combine(&self, op: BinaryOp, other: Value) -> Node {
        Node::combinator(op, self.clone(), other.into_node())
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::scalar(v)
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::scalar(v as f64)
    }
}

impl From<Distribution> for Node {
    fn from(d: Distribution) -> Self {
        Node::distribution(d)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NodeKind::Scalar(s) => write!(f, "{}", s.value()),
            NodeKind::Distribution(d) => write!(f, "{}", d.distribution()),
            NodeKind::Combinator(c) => {
                write!(f, "({} {} {})", c.left(), c.op().symbol(), c.right())
            }
        }
    }
}
