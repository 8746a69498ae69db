use std::ops::{Add, Div, Mul, Sub};

use crate::prelude::*;

/* ═════════════════════  OPERATORS  ══════════════════════════════════ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn apply(self, l: f64, r: f64) -> Result<f64> {
        match self {
            BinaryOp::Add => Ok(l + r),
            BinaryOp::Subtract => Ok(l - r),
            BinaryOp::Multiply => Ok(l * r),
            BinaryOp::Divide => {
                if r == 0.0 {
                    return Err(ArtkitError::DivisionByZero(l));
                }
                Ok(l / r)
            }
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/* ════════════════════  BINARY COMBINATOR  ═══════════════════════════ */

/// Two children and an operator. Holds no cache: every resolve recomputes
/// `op(left, right)` from the children.
#[derive(Debug)]
pub struct Combinator {
    op: BinaryOp,
    left: Node,
    right: Node,
}

impl Combinator {
    pub fn new(op: BinaryOp, left: Node, right: Node) -> Self {
        Self { op, left, right }
    }

    #[inline]
    pub fn op(&self) -> BinaryOp {
        self.op
    }
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn resolve(&self) -> Result<f64> {
        let l = self.left.resolve()?;
        let r = self.right.resolve()?;
        self.op.apply(l, r)
    }
}

/* ══════════════  OPERATOR OVERLOADS  ════════════════════════════════ */

macro_rules! impl_bin_op {
    ($Trait:ident, $func:ident, $op:expr) => {
        impl $Trait<Node> for Node {
            type Output = Node;
            fn $func(self, rhs: Node) -> Node {
                Node::combinator($op, self, rhs)
            }
        }
        impl $Trait<&Node> for Node {
            type Output = Node;
            fn $func(self, rhs: &Node) -> Node {
                Node::combinator($op, self, rhs.clone())
            }
        }
        impl $Trait<Node> for &Node {
            type Output = Node;
            fn $func(self, rhs: Node) -> Node {
                Node::combinator($op, self.clone(), rhs)
            }
        }
        impl $Trait<&Node> for &Node {
            type Output = Node;
            fn $func(self, rhs: &Node) -> Node {
                Node::combinator($op, self.clone(), rhs.clone())
            }
        }
        impl $Trait<f64> for Node {
            type Output = Node;
            fn $func(self, rhs: f64) -> Node {
                Node::combinator($op, self, Node::scalar(rhs))
            }
        }
        impl $Trait<f64> for &Node {
            type Output = Node;
            fn $func(self, rhs: f64) -> Node {
                Node::combinator($op, self.clone(), Node::scalar(rhs))
            }
        }
        /* constant on the left keeps its place: 5 - x is Subtract(5, x) */
        impl $Trait<Node> for f64 {
            type Output = Node;
            fn $func(self, rhs: Node) -> Node {
                Node::combinator($op, Node::scalar(self), rhs)
            }
        }
        impl $Trait<&Node> for f64 {
            type Output = Node;
            fn $func(self, rhs: &Node) -> Node {
                Node::combinator($op, Node::scalar(self), rhs.clone())
            }
        }
    };
}

impl_bin_op!(Add, add, BinaryOp::Add);
impl_bin_op!(Sub, sub, BinaryOp::Subtract);
impl_bin_op!(Mul, mul, BinaryOp::Multiply);
impl_bin_op!(Div, div, BinaryOp::Divide);
