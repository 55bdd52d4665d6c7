use chrono::{TimeZone, Utc};
use gyazo_api::types::{DeletedImage, Image, Profile, UploadResult};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_profile() {
    let json = load_fixture("profile.json");
    let profile: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(profile.email, "jane@example.com");
    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.uid, "4f2b9af1c0e7d8a3b5c1");
    assert!(profile.profile_image.starts_with("https://thumb.gyazo.com/"));
}

#[test]
fn deserialize_image_full() {
    let json = load_fixture("image.json");
    let image: Image = serde_json::from_str(&json).unwrap();
    assert_eq!(image.image_id, "8980c52421e452ac3355ca3e5cfe7a0c");
    assert_eq!(image.image_type, "png");
    assert_eq!(
        image.created_at,
        Utc.with_ymd_and_hms(2024, 5, 21, 14, 23, 10).unwrap()
    );

    let ocr = image.ocr.unwrap();
    assert_eq!(ocr.locale.as_deref(), Some("en"));
    assert_eq!(ocr.description, "a screenshot of a terminal");

    let metadata = image.metadata.unwrap();
    assert_eq!(metadata.app.as_deref(), Some("Gyazo"));
    assert_eq!(metadata.title, "release notes");
    assert_eq!(metadata.url, None);
    assert_eq!(metadata.original_title, None);
}

#[test]
fn deserialize_image_without_ocr_and_metadata() {
    let json = load_fixture("image_minimal.json");
    let image: Image = serde_json::from_str(&json).unwrap();
    assert_eq!(image.image_id, "2d6f9c81be73a4e5f0a2b3c4d5e6f708");
    assert!(image.ocr.is_none());
    assert!(image.metadata.is_none());
}

#[test]
fn deserialize_image_with_empty_ocr() {
    let json = load_fixture("images.json");
    let images: Vec<Image> = serde_json::from_str(&json).unwrap();
    assert_eq!(images.len(), 2);

    let ocr = images[1].ocr.as_ref().unwrap();
    assert_eq!(ocr.locale, None);
    assert_eq!(ocr.description, "");

    let metadata = images[1].metadata.as_ref().unwrap();
    assert_eq!(metadata.app, None);
    assert_eq!(metadata.url.as_deref(), Some("https://example.com/article"));
    assert_eq!(metadata.original_title.as_deref(), Some("draft"));
}

#[test]
fn deserialize_deleted_image() {
    let json = load_fixture("deleted.json");
    let deleted: DeletedImage = serde_json::from_str(&json).unwrap();
    assert_eq!(deleted.image_id, "8980c52421e452ac3355ca3e5cfe7a0c");
    assert_eq!(deleted.image_type, "png");
}

#[test]
fn deserialize_upload_result() {
    let json = load_fixture("upload.json");
    let result: UploadResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.image_id, "a1b2c3d4e5f60718293a4b5c6d7e8f90");
    assert_eq!(result.image_type, "png");
    assert_eq!(
        result.permalink_url,
        "https://gyazo.com/a1b2c3d4e5f60718293a4b5c6d7e8f90"
    );
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"image_id": "abc"}"#;
    let result = serde_json::from_str::<Image>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"image_id": not valid json}"#;
    let result = serde_json::from_str::<Image>(bad_json);
    assert!(result.is_err());
}
