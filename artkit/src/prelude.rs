pub use crate::{
    color::*,
    numbers::{distributions::*, node::*, operators::*, randomsource::*, value::*},
    reflect::*,
    shapes::shape::*,
    utils::errors::*,
};
