use super::*;

/// Tests creating with default parameters.
///
/// Verifies that the row stores the file's name and that loading the row back from
/// the database yields the same file.
///
/// Expected: Ok with a pk and an empty file at uploads/example.dat
#[tokio::test]
async fn creates_with_default_file() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WithFile)
        .with_media()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = FileSystemStorage::new(test.media_root().unwrap());
    let factory = WithFileFactory::new(storage.clone());

    let o = factory.create(db).await?;

    let id = o.pk().unwrap();
    let afile = o.afile.as_ref().unwrap();
    assert_eq!(afile.read(), b"");
    assert_eq!(afile.name(), "uploads/example.dat");

    let row = entity::prelude::WithFile::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(row.afile.as_deref(), Some("uploads/example.dat"));
    assert_eq!(WithFile::from_entity(row, &storage)?, o);

    Ok(())
}

/// Tests creating without a file.
///
/// Expected: Ok with a pk and a NULL column
#[tokio::test]
async fn creates_without_file() -> Result<(), FactoryError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WithFile)
        .with_media()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory.prepare().afile(FileInput::Empty).create(db).await?;

    let row = entity::prelude::WithFile::find_by_id(o.pk().unwrap())
        .one(db)
        .await?
        .unwrap();
    assert!(row.afile.is_none());

    Ok(())
}

/// Tests that a failed insert leaves no file behind.
///
/// Builds a context without the `with_file` table so the insert fails after the file
/// was stored.
///
/// Expected: Err(FactoryError::DbErr) and no stored file
#[tokio::test]
async fn deletes_file_when_insert_fails() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let result = factory
        .prepare()
        .afile(FileParams::new().data("foo"))
        .create(db)
        .await;

    assert!(matches!(result, Err(FactoryError::DbErr(_))));
    assert!(!factory.storage().exists("uploads/example.dat"));

    Ok(())
}
