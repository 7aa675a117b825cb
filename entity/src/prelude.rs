pub use super::non_integer_pk::Entity as NonIntegerPk;
pub use super::pointed_model::Entity as PointedModel;
pub use super::pointer_model::Entity as PointerModel;
pub use super::standard_model::Entity as StandardModel;
pub use super::with_file::Entity as WithFile;
pub use super::with_image::Entity as WithImage;
