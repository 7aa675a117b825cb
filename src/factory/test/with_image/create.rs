use super::*;

/// Tests creating with default parameters.
///
/// Verifies that the row stores the image's name and that loading it back decodes the
/// same dimensions.
///
/// Expected: Ok with a pk and a 100x100 image at uploads/example.jpg
#[tokio::test]
async fn creates_with_default_image() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WithImage)
        .with_media()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = FileSystemStorage::new(test.media_root().unwrap());
    let factory = WithImageFactory::new(storage.clone());

    let o = factory.create(db).await?;

    let id = o.pk().unwrap();
    let animage = o.animage.as_ref().unwrap();
    assert_eq!((animage.width(), animage.height()), (100, 100));
    assert_eq!(animage.name(), "uploads/example.jpg");

    let row = entity::prelude::WithImage::find_by_id(id).one(db).await?.unwrap();
    let loaded = WithImage::from_entity(row, &storage)?;
    assert_eq!(loaded, o);

    Ok(())
}

/// Tests that a failed insert leaves no image behind.
///
/// Expected: Err(FactoryError::DbErr) and no stored image
#[tokio::test]
async fn deletes_image_when_insert_fails() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let result = factory.create(db).await;

    assert!(matches!(result, Err(FactoryError::DbErr(_))));
    assert!(!factory.storage().exists("uploads/example.jpg"));

    Ok(())
}
