use super::*;

/// Tests building with default parameters.
///
/// Expected: Ok with an empty file at uploads/example.dat and no pk
#[tokio::test]
async fn builds_empty_default_file() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory.build()?;

    assert!(o.pk().is_none());
    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), b"");
    assert_eq!(afile.name(), "uploads/example.dat");
    assert!(factory.storage().exists("uploads/example.dat"));

    Ok(())
}

/// Tests building with explicit content.
///
/// Expected: Ok with content "foo" at uploads/example.dat
#[tokio::test]
async fn builds_with_explicit_data() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .afile(FileParams::new().data("foo"))
        .build()?;

    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), b"foo");
    assert_eq!(afile.name(), "uploads/example.dat");

    Ok(())
}

/// Tests building from an open file handle.
///
/// Expected: Ok with the test file's content under its basename
#[tokio::test]
async fn builds_from_file_handle() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(testfile_path()).unwrap();
    let o = factory
        .prepare()
        .afile(FileParams::new().from_file(handle))
        .build()?;

    assert!(o.pk().is_none());
    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), TESTFILE_CONTENT);
    assert_eq!(afile.name(), "uploads/example.data");

    Ok(())
}

/// Tests building from a path.
///
/// Expected: Ok with the test file's content under its basename
#[tokio::test]
async fn builds_from_path() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .afile(FileParams::new().from_path(testfile_path()))
        .build()?;

    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), TESTFILE_CONTENT);
    assert_eq!(afile.name(), "uploads/example.data");

    Ok(())
}

/// Tests that an empty path next to a handle is ignored.
///
/// Expected: Ok with the handle's content
#[tokio::test]
async fn ignores_empty_path_next_to_handle() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(testfile_path()).unwrap();
    let o = factory
        .prepare()
        .afile(FileParams::new().from_file(handle).from_path(""))
        .build()?;

    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), TESTFILE_CONTENT);
    assert_eq!(afile.name(), "uploads/example.data");

    Ok(())
}

/// Tests supplying both a handle and a path.
///
/// Verifies that the conflict is reported as an invalid-argument failure before
/// anything reaches storage.
///
/// Expected: Err(FieldError::ConflictingSources) and an empty upload directory
#[tokio::test]
async fn rejects_both_handle_and_path() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let handle = FileHandle::open(testfile_path()).unwrap();
    let result = factory
        .prepare()
        .afile(
            FileParams::new()
                .from_file(handle)
                .from_path(testfile_path()),
        )
        .build();

    let err = result.unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(
        err,
        FactoryError::FieldErr(FieldError::ConflictingSources { ref field }) if field == "afile"
    ));
    assert!(!factory.storage().exists("uploads/example.data"));

    Ok(())
}

/// Tests overriding the filename derived from a path.
///
/// Expected: Ok with the test file's content at uploads/example.foo
#[tokio::test]
async fn overrides_filename_from_path() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory
        .prepare()
        .afile(
            FileParams::new()
                .from_path(testfile_path())
                .filename("example.foo"),
        )
        .build()?;

    let afile = o.afile.unwrap();
    assert_eq!(afile.read(), TESTFILE_CONTENT);
    assert_eq!(afile.name(), "uploads/example.foo");

    Ok(())
}

/// Tests building with another model's file.
///
/// Verifies that the content is stored again, under a fresh name since the first
/// name is taken.
///
/// Expected: Ok with the same content at uploads/example_1.data
#[tokio::test]
async fn copies_existing_file_under_free_name() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o1 = factory
        .prepare()
        .afile(FileParams::new().from_path(testfile_path()))
        .build()?;
    let existing: FieldFile = o1.afile.unwrap();

    let o2 = factory.prepare().afile(existing).build()?;

    assert!(o2.pk().is_none());
    let afile = o2.afile.unwrap();
    assert_eq!(afile.read(), TESTFILE_CONTENT);
    assert_eq!(afile.name(), "uploads/example_1.data");

    Ok(())
}

/// Tests suppressing the file.
///
/// Expected: Ok with no file and nothing stored
#[tokio::test]
async fn builds_without_file() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(test.media_root().unwrap()));

    let o = factory.prepare().afile(FileInput::Empty).build()?;
    let o2 = factory.prepare().afile(None::<FieldFile>).build()?;

    assert!(o.pk().is_none());
    assert!(o.afile.is_none());
    assert!(o2.afile.is_none());
    assert!(!factory.storage().exists("uploads/example.dat"));

    Ok(())
}

/// Tests an upload directory that points outside the media root.
///
/// Expected: Err(FieldError::InvalidFilename) and nothing written next to the root
#[tokio::test]
async fn rejects_upload_directory_outside_media_root() -> Result<(), FactoryError> {
    let test = TestBuilder::new().with_media().build().await.unwrap();
    let media_root = test.media_root().unwrap();
    let factory = WithFileFactory::new(FileSystemStorage::new(media_root.join("media")))
        .with_field(FileField::new("afile", "../escaped"));

    let result = factory.build();

    assert!(matches!(
        result,
        Err(FactoryError::FieldErr(FieldError::InvalidFilename(_)))
    ));
    assert!(!media_root.join("escaped").exists());

    Ok(())
}
