use serde::{ser::Error as _, Serialize, Serializer};

use crate::prelude::*;

/// A field or operand that is either a plain number or an expression node.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Node(Node),
}

impl Value {
    pub fn resolve(&self) -> Result<f64> {
        resolve_or_passthrough(self)
    }

    /// Lift into a node; plain numbers become a [`Scalar`] leaf.
    pub fn into_node(self) -> Node {
        match self {
            Value::Number(v) => Node::scalar(v),
            Value::Node(n) => n,
        }
    }
}

/// Concrete number behind `value`. Nodes are resolved (triggering their
/// caching rules), plain numbers pass through.
pub fn resolve_or_passthrough(value: &Value) -> Result<f64> {
    match value {
        Value::Number(v) => Ok(*v),
        Value::Node(n) => n.resolve(),
    }
}

/* ---- conversions ---- */

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self {
        Value::Node(n)
    }
}

impl From<&Node> for Value {
    fn from(n: &Node) -> Self {
        Value::Node(n.clone())
    }
}

/// Only the resolved number is written, never the expression.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let v = self.resolve().map_err(S::Error::custom)?;
        serializer.serialize_f64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(resolve_or_passthrough(&Value::from(2.5)).unwrap(), 2.5);
        assert_eq!(resolve_or_passthrough(&Value::from(7)).unwrap(), 7.0);
    }

    #[test]
    fn test_node_is_resolved() {
        let n = Node::scalar(3.0).add(4.0);
        assert_eq!(resolve_or_passthrough(&n.into()).unwrap(), 7.0);
    }

    #[test]
    fn test_shared_node_seen_by_independent_fields() {
        let hue = uniform_float(0.0, 360.0);
        let a = Value::from(&hue);
        let b = Value::from(hue.add(10.0));
        let first = a.resolve().unwrap();
        assert_eq!(b.resolve().unwrap(), first + 10.0);
        assert_eq!(a.resolve().unwrap(), first);
    }

    #[test]
    fn test_into_node() {
        let n = Value::from(1.5).into_node();
        assert!(matches!(n.kind(), NodeKind::Scalar(_)));
        let leaf = uniform_int(0, 10);
        let back = Value::from(&leaf).into_node();
        assert!(back.ptr_eq(&leaf));
    }

    #[test]
    fn test_serialize_resolves() {
        let v = Value::from(Node::scalar(10.0).divide(4.0));
        assert_eq!(serde_json::to_string(&v).unwrap(), "2.5");
        let bad = Value::from(Node::scalar(1.0).divide(0.0));
        let err = serde_json::to_string(&bad).unwrap_err();
        assert!(err.to_string().contains("Division by zero"));
    }
}
