use modelfactory::{
    config::Config,
    error::FactoryError,
    factory::{PointerFactory, StandardFactory, WithFileFactory, WithImageFactory},
    startup,
    storage::FileSystemStorage,
};

/// Seeds the configured database with one batch from every factory.
#[tokio::main]
async fn main() -> Result<(), FactoryError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let storage = FileSystemStorage::new(&config.media_root);

    tracing::info!(
        database = %config.database_url,
        media_root = %config.media_root.display(),
        "Seeding database"
    );

    let standard = StandardFactory::new();
    standard.reset_sequence_from_store(&db).await?;
    for _ in 0..config.seed_count {
        let model = standard.create(&db).await?;
        tracing::info!(id = ?model.id, foo = %model.foo, "Created standard model");
    }

    let pointers = PointerFactory::new();
    pointers.reset_sequence_from_store(&db).await?;
    pointers
        .target_factory()
        .reset_sequence_from_store(&db)
        .await?;
    for _ in 0..config.seed_count {
        let pointer = pointers.create(&db).await?;
        tracing::info!(
            id = ?pointer.id,
            name = %pointer.name,
            target = %pointer.target.name,
            "Resolved pointer"
        );
    }

    let with_file = WithFileFactory::new(storage.clone()).create(&db).await?;
    if let Some(afile) = &with_file.afile {
        tracing::info!(id = ?with_file.id, file = %afile.name(), "Created file model");
    }

    let with_image = WithImageFactory::new(storage).create(&db).await?;
    if let Some(animage) = &with_image.animage {
        tracing::info!(
            id = ?with_image.id,
            image = %animage.name(),
            width = animage.width(),
            height = animage.height(),
            "Created image model"
        );
    }

    Ok(())
}
