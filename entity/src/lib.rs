//! SeaORM entities for the models generated by the factories.

pub mod prelude;

pub mod non_integer_pk;
pub mod pointed_model;
pub mod pointer_model;
pub mod standard_model;
pub mod with_file;
pub mod with_image;
