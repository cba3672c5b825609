use std::sync::Arc;

use drive_type_catalog::{
    CatalogConfig, DriveTypeCatalog, DriveTypeUpdate, JsonFileStore, NewDriveType,
    RequestContext, StorageErrorKind,
};

#[tokio::test]
async fn drive_type_lifecycle_against_json_file_store() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("drive-types.json");
    let ctx = RequestContext::admin().with_user("operator");

    let catalog = DriveTypeCatalog::from_config(JsonFileStore::new(&path), &CatalogConfig::default())
        .expect("build catalog");

    let sata = catalog
        .create(&ctx, NewDriveType::new("SATA", 500, 7200).with_name("disk1"))
        .await
        .expect("create sata");
    let ssd = catalog
        .create(&ctx, NewDriveType::new("SSD", 256, "0").with_capabilities("trim"))
        .await
        .expect("create ssd");
    assert_eq!(ssd.name, "SSD_256GB_0RPM_trim");

    let duplicate = catalog
        .create(&ctx, NewDriveType::new("SSD", 256, "0").with_capabilities("trim"))
        .await
        .unwrap_err();
    assert_eq!(duplicate.kind, StorageErrorKind::Conflict);

    let renamed = catalog.rename(&ctx, "disk1", None).await.expect("rename");
    assert_eq!(renamed.name, "SATA_500GB_7200RPM");

    let hidden = catalog
        .update(&ctx, ssd.id, DriveTypeUpdate::new().visible(false).capabilities(""))
        .await
        .expect("hide ssd");
    assert!(!hidden.visible);
    assert_eq!(hidden.capabilities, "trim");

    // a second catalog over the same file sees everything the first wrote
    let reopened = DriveTypeCatalog::from_config(JsonFileStore::new(&path), &CatalogConfig::default())
        .expect("reopen catalog");
    let visible = reopened.list(&ctx, true).await.expect("list visible");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, sata.id);
    assert_eq!(visible[0].name, "SATA_500GB_7200RPM");

    reopened.delete(&ctx, ssd.id).await.expect("delete ssd");
    assert!(reopened.delete(&ctx, ssd.id).await.unwrap_err().is_not_found());
    assert!(reopened.list(&ctx, false).await.expect("list hidden").is_empty());
}

#[tokio::test]
async fn catalogs_can_share_one_store() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = Arc::new(JsonFileStore::new(dir.path().join("shared.json")));
    let ctx = RequestContext::new();

    let short = CatalogConfig::from_toml_str(
        r#"
drive_type_template_short = "%s/%s/%s"
"#,
    )
    .expect("parse config");
    let defaults = DriveTypeCatalog::from_config(Arc::clone(&store), &CatalogConfig::default())
        .expect("build default catalog");
    let custom =
        DriveTypeCatalog::from_config(Arc::clone(&store), &short).expect("build custom catalog");

    let created = custom
        .create(&ctx, NewDriveType::new("SAS", 600, 10000))
        .await
        .expect("create via custom catalog");
    assert_eq!(created.name, "SAS/600/10000");

    let fetched = defaults
        .get_by_name(&ctx, "SAS/600/10000")
        .await
        .expect("get via default catalog");
    assert_eq!(fetched.id, created.id);

    let renamed = defaults
        .rename(&ctx, "SAS/600/10000", Some(""))
        .await
        .expect("reset name via default catalog");
    assert_eq!(renamed.name, "SAS_600GB_10000RPM");
}
