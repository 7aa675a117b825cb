//! Pointed model fixtures for creating in-memory test data.
//!
//! Get-or-create tests use these to seed rows behind the factory's back, e.g. two rows
//! sharing a name to provoke an ambiguous lookup.

use entity::pointed_model;

/// Default test pointed model name.
pub const DEFAULT_NAME: &str = "pointed";

/// Creates a pointed model entity with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"pointed"`
///
/// # Returns
/// - `pointed_model::Model` - In-memory pointed model entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let pointed = fixture::pointed_model::entity();
/// assert_eq!(pointed.name, "pointed");
/// ```
pub fn entity() -> pointed_model::Model {
    entity_builder().build()
}

/// Creates a pointed model entity builder for customization.
///
/// # Returns
/// - `PointedModelEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> PointedModelEntityBuilder {
    PointedModelEntityBuilder::default()
}

/// Builder for creating customized pointed model entities.
///
/// All fields have defaults that can be overridden.
pub struct PointedModelEntityBuilder {
    id: i32,
    name: String,
}

impl Default for PointedModelEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl PointedModelEntityBuilder {
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

    /// Sets the name used as lookup key.
    ///
    /// # Arguments
    /// - `name` - Pointed model name
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the pointed model entity.
    ///
    /// # Returns
    /// - `pointed_model::Model` - In-memory entity with configured values
    pub fn build(self) -> pointed_model::Model {
        pointed_model::Model {
            id: self.id,
            name: self.name,
        }
    }
}
