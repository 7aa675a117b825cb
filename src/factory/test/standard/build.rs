use super::*;

/// Tests building the first model from a fresh factory.
///
/// Verifies that the sequence-driven field starts at the base value and that an
/// unsaved model carries no primary key.
///
/// Expected: foo1 with no pk
#[test]
fn builds_first_with_base_value() {
    let factory = StandardFactory::new();

    let std = factory.build();

    assert_eq!(std.foo, "foo1");
    assert!(std.pk().is_none());
}

/// Tests building several models in a row.
///
/// Expected: foo1, foo2
#[test]
fn builds_many_with_contiguous_values() {
    let factory = StandardFactory::new();

    let std1 = factory.build();
    let std2 = factory.build();

    assert_eq!(std1.foo, "foo1");
    assert_eq!(std2.foo, "foo2");
}

/// Tests that overriding the sequence-driven field still consumes a value.
///
/// Expected: custom value, then foo2
#[test]
fn override_still_advances_sequence() {
    let factory = StandardFactory::new();

    let custom = factory.prepare().foo("custom").build();
    let next = factory.build();

    assert_eq!(custom.foo, "custom");
    assert_eq!(next.foo, "foo2");
}

/// Tests that building never writes to the database.
///
/// Expected: Ok with zero rows
#[tokio::test]
async fn build_does_not_persist() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StandardModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = StandardFactory::new();
    factory.build();
    factory.build();

    assert_eq!(entity::prelude::StandardModel::find().count(db).await?, 0);

    Ok(())
}
