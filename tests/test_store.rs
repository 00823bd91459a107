//! Persistence gateway, directory service and the add form.

use school_directory::{
    AddSchoolForm, DirectoryError, DirectoryService, FilterField, FilterState, ImagePayload,
    JsonFileStore, MemoryStore, NewSchool, SchoolField, SchoolGateway, StoreError,
};
use std::sync::Arc;

fn candidate(name: &str, city: &str) -> NewSchool {
    NewSchool {
        name: name.to_string(),
        address: "1 School Ln".to_string(),
        city: city.to_string(),
        state: "TX".to_string(),
        contact: "5125550100".to_string(),
        email: "front.office@district.org".to_string(),
        image: Some(ImagePayload::from_bytes("image/png", &[1, 2, 3, 4]).unwrap()),
    }
}

#[tokio::test]
async fn append_assigns_next_id_and_timestamp() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::with_schools(vec![
        candidate("Oak Hill", "Austin"),
        candidate("Oakridge", "Dallas"),
        candidate("Pecan Grove", "Waco"),
    ]);
    assert_eq!(store.count().await?, 3);

    let record = store.append(candidate("Live Oak", "Austin")).await?;
    assert_eq!(record.id, 4);
    let json = serde_json::to_value(&record)?;
    assert!(!json["createdAt"].as_str().unwrap_or_default().is_empty());
    assert!(json["image"].as_str().unwrap().starts_with("data:image/png;base64,"));

    let names: Vec<String> = store.load_all().await?.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Oak Hill", "Oakridge", "Pecan Grove", "Live Oak"]);
    Ok(())
}

#[tokio::test]
async fn empty_store_loads_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::open(dir.path().join("schools.json")).await?;
    assert!(store.load_all().await?.is_empty());
    assert!(!store.path().exists());
    Ok(())
}

#[tokio::test]
async fn file_store_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("schools.json");

    {
        let store = JsonFileStore::open(&path).await?;
        store.append(candidate("Oak Hill", "Austin")).await?;
        store.append(candidate("Oakridge", "Dallas")).await?;
    }

    let store = JsonFileStore::open(&path).await?;
    let loaded = store.load_all().await?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].name, "Oakridge");

    let third = store.append(candidate("Elm", "Tyler")).await?;
    assert_eq!(third.id, 3);

    let raw = std::fs::read_to_string(&path)?;
    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(doc["nextId"], 4);
    assert_eq!(doc["schools"].as_array().map(|a| a.len()), Some(3));
    Ok(())
}

#[tokio::test]
async fn counter_never_reuses_stored_ids() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("schools.json");
    std::fs::write(
        &path,
        r#"{
            "nextId": 1,
            "schools": [{
                "id": 7, "name": "Old", "address": "x", "city": "y", "state": "z",
                "contact": "0123456789", "email": "a@b.co",
                "createdAt": "2024-01-01T00:00:00Z"
            }]
        }"#,
    )?;

    let store = JsonFileStore::open(&path).await?;
    let record = store.append(candidate("New", "Austin")).await?;
    assert_eq!(record.id, 8);
    Ok(())
}

#[tokio::test]
async fn failed_write_leaves_store_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("schools.json");
    let store = JsonFileStore::open(&path).await?;
    assert_eq!(store.append(candidate("Oak Hill", "Austin")).await?.id, 1);

    // A directory squatting on the temp file name makes the next write fail.
    let blocker = dir.path().join("schools.json.tmp");
    std::fs::create_dir(&blocker)?;
    assert!(store.append(candidate("Oakridge", "Dallas")).await.is_err());
    assert_eq!(store.count().await?, 1);

    std::fs::remove_dir(&blocker)?;
    let record = store.append(candidate("Oakridge", "Dallas")).await?;
    assert_eq!(record.id, 2);

    let reopened = JsonFileStore::open(&path).await?;
    let names: Vec<String> = reopened.load_all().await?.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Oak Hill", "Oakridge"]);
    assert_eq!(reopened.append(candidate("Elm", "Tyler")).await?.id, 3);
    Ok(())
}

#[tokio::test]
async fn missing_counter_is_rebuilt_from_ids() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("schools.json");
    std::fs::write(
        &path,
        r#"{
            "schools": [{
                "id": 3, "name": "Old", "address": "x", "city": "y", "state": "z",
                "contact": "0123456789", "email": "a@b.co",
                "createdAt": "2024-01-01T00:00:00Z"
            }]
        }"#,
    )?;
    let store = JsonFileStore::open(&path).await?;
    assert_eq!(store.append(candidate("New", "Austin")).await?.id, 4);

    let bare = dir.path().join("bare.json");
    std::fs::write(&bare, "{}")?;
    let store = JsonFileStore::open(&bare).await?;
    assert_eq!(store.append(candidate("First", "Austin")).await?.id, 1);
    Ok(())
}

#[tokio::test]
async fn reset_wipes_records_and_counter() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::open(dir.path().join("schools.json")).await?;
    store.append(candidate("Oak Hill", "Austin")).await?;
    store.reset().await?;
    assert_eq!(store.count().await?, 0);
    assert_eq!(store.append(candidate("Again", "Austin")).await?.id, 1);
    Ok(())
}

#[tokio::test]
async fn corrupt_document_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("schools.json");
    std::fs::write(&path, "{ not json")?;
    match JsonFileStore::open(&path).await {
        Err(StoreError::Corrupt(_)) => Ok(()),
        Err(e) => panic!("expected Corrupt, got {}", e),
        Ok(_) => panic!("expected Corrupt, got a store"),
    }
}

#[tokio::test]
async fn service_rejects_invalid_without_storing() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut service = DirectoryService::new(store.clone());

    let mut bad = candidate("Oak Hill", "Austin");
    bad.contact = "555-0100".to_string();
    match service.add_school(bad).await {
        Err(DirectoryError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.get(SchoolField::Contact).is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn service_maps_store_failure_to_submit_failed() {
    let store = Arc::new(MemoryStore::new());
    store.set_fail_appends(true);
    let mut service = DirectoryService::new(store.clone());

    let err = service.add_school(candidate("Oak Hill", "Austin")).await.unwrap_err();
    assert!(matches!(err, DirectoryError::SubmitFailed(_)));
    assert_eq!(err.to_string(), "Failed to add school, please try again");
}

#[tokio::test]
async fn service_search_suggest_and_get() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut service = DirectoryService::new(store);
    service.add_school(candidate("Oak Hill", "Austin")).await?;
    service.add_school(candidate("Oakridge", "Dallas")).await?;

    let hits = service
        .search(&FilterState {
            city: "AUSTIN".to_string(),
            ..Default::default()
        })
        .await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Oak Hill");

    assert_eq!(service.suggest(FilterField::Name, "oak").await?, vec!["Oak Hill", "Oakridge"]);

    // Index refreshes after a new record arrives.
    service.add_school(candidate("Oakwood", "Plano")).await?;
    assert_eq!(
        service.suggest(FilterField::Name, "oak").await?,
        vec!["Oak Hill", "Oakridge", "Oakwood"]
    );
    assert!(service.suggest(FilterField::City, "").await?.is_empty());

    assert_eq!(service.get_school(2).await?.city, "Dallas");
    assert!(matches!(
        service.get_school(42).await,
        Err(DirectoryError::NotFound(42))
    ));
    Ok(())
}

#[tokio::test]
async fn form_keeps_fields_after_submit_failure() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let mut form = AddSchoolForm::new();

    // Nothing filled in: every field flagged, nothing stored.
    assert!(matches!(
        form.submit(&store).await,
        Err(DirectoryError::Validation(_))
    ));
    assert_eq!(form.errors().len(), SchoolField::ALL.len());

    form.set_field(SchoolField::Name, "Oak Hill");
    form.set_field(SchoolField::Address, "12 Ridge Rd");
    form.set_field(SchoolField::City, "Austin");
    form.set_field(SchoolField::State, "TX");
    form.set_field(SchoolField::Contact, "5125550100");
    form.set_field(SchoolField::Email, "office@oakhill.edu");
    form.attach_image("image/jpeg", &[0xff, 0xd8, 0xff])?;
    assert!(form.errors().is_empty());

    store.set_fail_appends(true);
    assert!(matches!(
        form.submit(&store).await,
        Err(DirectoryError::SubmitFailed(_))
    ));
    assert_eq!(form.submit_error(), Some("Failed to add school, please try again"));
    assert_eq!(form.candidate().name, "Oak Hill");
    assert!(form.candidate().image.is_some());

    store.set_fail_appends(false);
    let record = form.submit(&store).await?;
    assert_eq!(record.id, 1);
    assert_eq!(form.candidate(), &NewSchool::default());
    assert!(form.submit_error().is_none());
    Ok(())
}
