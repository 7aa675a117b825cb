use super::*;

/// Tests that building skips get-or-create entirely.
///
/// Expected: Ok with an unsaved foo1 and no rows
#[tokio::test]
async fn build_does_not_touch_database() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PointedModel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = PointedFactory::new();
    let pointed = factory.build();

    assert_eq!(pointed.name, "foo1");
    assert!(pointed.pk().is_none());
    assert_eq!(entity::prelude::PointedModel::find().count(db).await?, 0);

    Ok(())
}
