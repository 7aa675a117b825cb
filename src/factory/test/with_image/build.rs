use super::*;

/// Tests building with default parameters.
///
/// Expected: Ok with a 100x100 image at uploads/example.jpg and no pk
#[tokio::test]
async fn builds_default_image() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory.build()?;

    assert!(o.pk().is_none());
    let animage = o.animage.unwrap();
    assert_eq!(animage.width(), 100);
    assert_eq!(animage.height(), 100);
    assert_eq!(animage.name(), "uploads/example.jpg");

    Ok(())
}

/// Tests building with a width and a color.
///
/// Expected: Ok with a 13x13 image at uploads/example.jpg
#[tokio::test]
async fn builds_with_width_and_color() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .animage(ImageParams::new().width(13).color("blue".parse()?))
        .build()?;

    let animage = o.animage.unwrap();
    assert_eq!(animage.width(), 13);
    assert_eq!(animage.height(), 13);
    assert_eq!(animage.name(), "uploads/example.jpg");

    Ok(())
}

/// Tests building with distinct width and height.
///
/// Expected: Ok with a 20x10 image
#[tokio::test]
async fn builds_with_explicit_height() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .animage(ImageParams::new().width(20).height(10).color(ImageColor::RED))
        .build()?;

    let animage = o.animage.unwrap();
    assert_eq!((animage.width(), animage.height()), (20, 10));

    Ok(())
}

/// Tests building from an open file handle.
///
/// Expected: Ok with the source bytes and dimensions under the source's basename
#[tokio::test]
async fn builds_from_file_handle() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(&path).unwrap();
    let o = factory
        .prepare()
        .animage(ImageParams::new().from_file(handle))
        .build()?;

    assert!(o.pk().is_none());
    let animage = o.animage.unwrap();
    assert_eq!(animage.read(), std::fs::read(&path).unwrap());
    assert_eq!((animage.width(), animage.height()), (42, 42));
    assert_eq!(animage.name(), "uploads/example.jpeg");

    Ok(())
}

/// Tests building from a path; size parameters are ignored for a source.
///
/// Expected: Ok with a 42x42 image at uploads/example.jpeg
#[tokio::test]
async fn builds_from_path_ignoring_size() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .animage(ImageParams::new().from_path(&path).width(13))
        .build()?;

    let animage = o.animage.unwrap();
    assert_eq!(animage.len(), std::fs::read(&path).unwrap().len());
    assert_eq!((animage.width(), animage.height()), (42, 42));
    assert_eq!(animage.name(), "uploads/example.jpeg");

    Ok(())
}

/// Tests that an empty path next to a handle is ignored.
///
/// Expected: Ok with the handle's image
#[tokio::test]
async fn ignores_empty_path_next_to_handle() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(&path).unwrap();
    let o = factory
        .prepare()
        .animage(ImageParams::new().from_file(handle).from_path(""))
        .build()?;

    let animage = o.animage.unwrap();
    assert_eq!((animage.width(), animage.height()), (42, 42));
    assert_eq!(animage.name(), "uploads/example.jpeg");

    Ok(())
}

/// Tests supplying both a handle and a path.
///
/// Expected: Err with is_invalid_argument() and nothing stored
#[tokio::test]
async fn rejects_both_handle_and_path() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(&path).unwrap();
    let result = factory
        .prepare()
        .animage(ImageParams::new().from_file(handle).from_path(&path))
        .build();

    assert!(result.unwrap_err().is_invalid_argument());
    assert!(!factory.storage().exists("uploads/example.jpeg"));

    Ok(())
}

/// Tests overriding the filename derived from a path.
///
/// Expected: Ok with a 42x42 image at uploads/example.foo
#[tokio::test]
async fn overrides_filename_from_path() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .animage(ImageParams::new().from_path(&path).filename("example.foo"))
        .build()?;

    let animage = o.animage.unwrap();
    assert_eq!((animage.width(), animage.height()), (42, 42));
    assert_eq!(animage.name(), "uploads/example.foo");

    Ok(())
}

/// Tests building with another model's image.
///
/// Expected: Ok with the same bytes at uploads/example_1.jpeg
#[tokio::test]
async fn copies_existing_image_under_free_name() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = write_test_image(source.path(), "example.jpeg", 42, 42).unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o1 = factory
        .prepare()
        .animage(ImageParams::new().from_path(&path))
        .build()?;
    let existing: ImageFieldFile = o1.animage.unwrap();

    let o2 = factory.prepare().animage(existing.clone()).build()?;

    let animage = o2.animage.unwrap();
    assert_eq!(animage.read(), existing.read());
    assert_eq!((animage.width(), animage.height()), (42, 42));
    assert_eq!(animage.name(), "uploads/example_1.jpeg");

    Ok(())
}

/// Tests suppressing the image.
///
/// Expected: Ok with no image
#[tokio::test]
async fn builds_without_image() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory.prepare().animage(ImageInput::Empty).build()?;

    assert!(o.pk().is_none());
    assert!(o.animage.is_none());
    assert!(!factory.storage().exists("uploads/example.jpg"));

    Ok(())
}

/// Tests building from a path that does not hold an image.
///
/// Expected: Err(FactoryError::FieldErr) and nothing stored
#[tokio::test]
async fn rejects_non_image_source_without_storing() -> Result<(), FactoryError> {
    let source = tempfile::tempdir().unwrap();
    let path = source.path().join("notimage.jpg");
    std::fs::write(&path, b"plain text").unwrap();
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithImageFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let result = factory
        .prepare()
        .animage(ImageParams::new().from_path(&path))
        .build();

    assert!(matches!(result, Err(FactoryError::FieldErr(_))));
    assert!(!factory.storage().exists("uploads/notimage.jpg"));

    Ok(())
}
