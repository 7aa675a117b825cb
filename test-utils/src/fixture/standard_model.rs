//! Standard model fixtures for creating in-memory test data.

use entity::standard_model;

/// Default `foo` of a fixture row. Does not collide with sequence-driven values.
pub const DEFAULT_FOO: &str = "fixture";

/// Creates a standard model entity with default values.
///
/// # Default Values
/// - id: `1`
/// - foo: `"fixture"`
///
/// # Returns
/// - `standard_model::Model` - In-memory standard model entity
pub fn entity() -> standard_model::Model {
    entity_builder().build()
}

/// Creates a standard model entity builder for customization.
///
/// # Returns
/// - `StandardModelEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> StandardModelEntityBuilder {
    StandardModelEntityBuilder::default()
}

/// Builder for creating customized standard model entities.
pub struct StandardModelEntityBuilder {
    id: i32,
    foo: String,
}

impl Default for StandardModelEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            foo: DEFAULT_FOO.to_string(),
        }
    }
}

impl StandardModelEntityBuilder {
    /// Sets the primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets `foo`.
    ///
    /// # Arguments
    /// - `foo` - Field value
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn foo(mut self, foo: impl Into<String>) -> Self {
        self.foo = foo.into();
        self
    }

    /// Builds the standard model entity.
    ///
    /// # Returns
    /// - `standard_model::Model` - In-memory entity with configured values
    pub fn build(self) -> standard_model::Model {
        standard_model::Model {
            id: self.id,
            foo: self.foo,
        }
    }
}
