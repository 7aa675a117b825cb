use super::*;

/// Tests creating a model with generated values.
///
/// Verifies that the first created row takes the first sequence value and the first
/// database-assigned primary key.
///
/// Expected: Ok with foo1 and pk 1
#[tokio::test]
async fn creates_with_sequence_value_and_pk() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StandardModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = StandardFactory::new();
    let std = factory.create(db).await?;

    assert_eq!(std.foo, "foo1");
    assert_eq!(std.pk(), Some(1));

    let row = entity::prelude::StandardModel::find_by_id(1).one(db).await?;
    assert_eq!(row.map(|row| row.foo), Some("foo1".to_string()));

    Ok(())
}

/// Tests creating several models.
///
/// Expected: Ok with three distinct rows
#[tokio::test]
async fn creates_many_distinct_rows() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StandardModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = StandardFactory::new();
    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(factory.create(db).await?);
    }

    let foos: Vec<_> = created.iter().map(|std| std.foo.as_str()).collect();
    assert_eq!(foos, ["foo1", "foo2", "foo3"]);
    assert_eq!(entity::prelude::StandardModel::find().count(db).await?, 3);

    Ok(())
}

/// Tests forcing the primary key on create.
///
/// Verifies that the forced key is stored and that the sequence is neither skipped
/// nor moved to match the key.
///
/// Expected: Ok with foo1 at pk 10, then foo2
#[tokio::test]
async fn forced_pk_does_not_alter_sequence() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StandardModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = StandardFactory::new();
    let std = factory.prepare().id(10).create(db).await?;

    assert_eq!(std.foo, "foo1");
    assert_eq!(std.pk(), Some(10));
    assert_eq!(factory.sequence().peek(), 2);

    Ok(())
}

/// Tests forcing a primary key that is already taken.
///
/// Expected: Err(FactoryError::DbErr)
#[tokio::test]
async fn fails_on_duplicate_forced_pk() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StandardModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = StandardFactory::new();
    factory.prepare().id(3).create(db).await?;
    let result = factory.prepare().id(3).create(db).await;

    assert!(matches!(result, Err(FactoryError::DbErr(_))));

    Ok(())
}
