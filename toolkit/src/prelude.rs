pub use crate::{
    docgen::generator::*, packaging::packager::*, scenes::scene::*, utils::errors::*,
};
