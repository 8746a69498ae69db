pub mod distributions;
pub mod node;
pub mod operators;
pub mod randomsource;
pub mod value;
