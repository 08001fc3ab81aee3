use photo_catalog::{
    generate_manifest, load_catalog, CaptureInstant, CatalogBuilder, CatalogConfig,
    ManifestSource, UnknownDatePolicy,
};
use std::fs;

const PHOTOS: [&str; 5] = [
    "20240101-12-00-00-beach.jpg",
    "20240615-10-00-00-hills.jpg",
    "20240615-DJI_0042.jpg",
    "31-12-98_235959_old_town.png",
    "holiday.webp",
];

#[tokio::test]
async fn test_generated_manifest_round_trips_into_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let photos_dir = dir.path().join("photos");
    fs::create_dir(&photos_dir).unwrap();
    for name in PHOTOS {
        fs::write(photos_dir.join(name), b"").unwrap();
    }
    fs::write(photos_dir.join("README.md"), b"").unwrap();

    let manifest = generate_manifest(&photos_dir).unwrap();
    assert_eq!(manifest.count, Some(PHOTOS.len()));

    let config = CatalogConfig::from_toml(
        r#"
        base_path = "/portfolio"
        unknown_date = "epoch"
        "#,
    )
    .unwrap();
    let source = ManifestSource::File(photos_dir.join("manifest.json"));
    let catalog = load_catalog(&source, &CatalogBuilder::from_config(&config)).await;

    let ids: Vec<&str> = catalog.iter().map(|p| p.id()).collect();
    assert_eq!(
        ids,
        vec![
            "20240615-DJI_0042.jpg",
            "20240615-10-00-00-hills.jpg",
            "20240101-12-00-00-beach.jpg",
            "31-12-98_235959_old_town.png",
            "holiday.webp",
        ]
    );

    let drone = &catalog.photos()[0];
    assert_eq!(drone.title(), "Aerial");
    assert_eq!(drone.description(), "Captured on June 15, 2024 at 12:00 PM");
    assert_eq!(drone.path(), "/portfolio/photos/20240615-DJI_0042.jpg");

    let old_town = &catalog.photos()[3];
    assert_eq!(old_town.title(), "old town");
    assert_eq!(old_town.display_date(), "December 31, 1998");
    assert_eq!(old_town.display_time(), "11:59 PM");

    assert_eq!(catalog.photos()[4].capture(), CaptureInstant::Unknown);
    assert_eq!(catalog.gallery(config.exclude_hero).len(), PHOTOS.len() - 1);
}

#[tokio::test]
async fn test_loading_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    for name in PHOTOS {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    generate_manifest(dir.path()).unwrap();

    let source = ManifestSource::File(dir.path().join("manifest.json"));
    let builder = CatalogBuilder::default().with_unknown_date(UnknownDatePolicy::Epoch);
    let first = load_catalog(&source, &builder).await;
    let second = load_catalog(&source, &builder).await;
    assert_eq!(first, second);
}
