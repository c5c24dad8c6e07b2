use crate::pexels::parse_photos;

const SAMPLE: &str = r#"{
    "page": 1,
    "per_page": 12,
    "photos": [
        {
            "id": 1181244,
            "photographer": "Christina Morillo",
            "alt": "Woman writing on a whiteboard",
            "src": {
                "original": "https://images.pexels.com/photos/1181244/original.jpg",
                "large2x": "https://images.pexels.com/photos/1181244/large2x.jpg",
                "medium": "https://images.pexels.com/photos/1181244/medium.jpg"
            }
        },
        {
            "id": 2,
            "src": {
                "large2x": "https://images.pexels.com/photos/2/large2x.jpg",
                "medium": "https://images.pexels.com/photos/2/medium.jpg"
            }
        }
    ]
}"#;

#[test]
fn reduces_photos_to_picker_fields() {
    let photos = parse_photos(SAMPLE).unwrap();

    assert_eq!(photos.len(), 2);
    assert_eq!(
        photos[0].thumbnail_url,
        "https://images.pexels.com/photos/1181244/medium.jpg"
    );
    assert_eq!(
        photos[0].large_url,
        "https://images.pexels.com/photos/1181244/large2x.jpg"
    );
    assert_eq!(photos[0].photographer, "Christina Morillo");
}

#[test]
fn optional_fields_default_to_empty() {
    let photos = parse_photos(SAMPLE).unwrap();

    assert!(photos[1].photographer.is_empty());
    assert!(photos[1].alt.is_empty());
}

#[test]
fn missing_photos_array_yields_no_results() {
    let photos = parse_photos(r#"{"page":1}"#).unwrap();
    assert!(photos.is_empty());
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(parse_photos("<!doctype html>").is_err());
}
