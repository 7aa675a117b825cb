use super::*;

/// Tests building a pointer without persisting it.
///
/// Verifies that the target comes from the sub-factory, unsaved, and that both
/// sequences advance.
///
/// Expected: Ok with bar1 pointing at foo1 and no rows
#[tokio::test]
async fn builds_pointer_and_target_unsaved() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_pointer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let factory = PointerFactory::new();
    let ptr = factory.build();

    assert_eq!(ptr.name, "bar1");
    assert!(ptr.pk().is_none());
    assert_eq!(ptr.target.name, "foo1");
    assert!(ptr.target.pk().is_none());
    assert_eq!(counts(db).await?, (0, 0));

    Ok(())
}

/// Tests passing a target name through to the sub-factory.
///
/// Expected: the given target name
#[test]
fn passes_target_name_to_sub_factory() {
    let factory = PointerFactory::new();

    let ptr = factory.prepare().target_name("custom").build();

    assert_eq!(ptr.target.name, "custom");
}
