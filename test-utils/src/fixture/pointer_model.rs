//! Pointer model fixtures for creating in-memory test data.

use entity::pointer_model;

/// Default test pointer model name.
pub const DEFAULT_NAME: &str = "pointer";

/// Default target ID; matches the default pointed model fixture.
pub const DEFAULT_TARGET_ID: i32 = 1;

/// Creates a pointer model entity with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"pointer"`
/// - target_id: `1`
///
/// # Returns
/// - `pointer_model::Model` - In-memory pointer model entity
pub fn entity() -> pointer_model::Model {
    entity_builder().build()
}

/// Creates a pointer model entity builder for customization.
///
/// # Returns
/// - `PointerModelEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let pointer = fixture::pointer_model::entity_builder()
///     .name("one")
///     .target_id(3)
///     .build();
/// ```
pub fn entity_builder() -> PointerModelEntityBuilder {
    PointerModelEntityBuilder::default()
}

/// Builder for creating customized pointer model entities.
pub struct PointerModelEntityBuilder {
    id: i32,
    name: String,
    target_id: i32,
}

impl Default for PointerModelEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            target_id: DEFAULT_TARGET_ID,
        }
    }
}

impl PointerModelEntityBuilder {
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
    /// - `name` - Pointer model name
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the referenced pointed model.
    ///
    /// # Arguments
    /// - `target_id` - Primary key of the pointed model
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn target_id(mut self, target_id: i32) -> Self {
        self.target_id = target_id;
        self
    }

    /// Builds the pointer model entity.
    ///
    /// # Returns
    /// - `pointer_model::Model` - In-memory entity with configured values
    pub fn build(self) -> pointer_model::Model {
        pointer_model::Model {
            id: self.id,
            name: self.name,
            target_id: self.target_id,
        }
    }
}
