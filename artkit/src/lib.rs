//! Numbers, colours and shapes for generative drawings.
//!
//! Attributes of a drawing are [`Value`](numbers::value::Value)s: plain
//! numbers or expression [`Node`](numbers::node::Node)s built from fixed
//! scalars, one-shot random draws and arithmetic on both.

pub mod color;
pub mod numbers;
pub mod prelude;
pub mod reflect;
pub mod shapes;
pub mod utils;
