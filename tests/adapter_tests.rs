//! Integration tests for object adapters.
//!
//! Exercises whole-model encoding and decoding through specifications:
//! nested objects, arrays of models, recursive shapes through the
//! fixed-point combinator, the first-failure ordering contract, and the
//! optional-field absence semantics.

use refract::adapter::{JsonAdapter, fix};
use refract::json::{
    JsonKind, MappingError, json_array, json_array_opt, json_bool, json_number, json_object,
    json_object_opt, json_string,
};
use refract::{lens, specification};
use rstest::rstest;
use serde_json::{Value, json};

// =============================================================================
// Flat models
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
struct Track {
    title: String,
    duration: f64,
    explicit: bool,
}

fn track_adapter() -> JsonAdapter<Track> {
    JsonAdapter::new(
        specification! {
            "title" => json_string(lens!(Track, title)),
            "duration" => json_number(lens!(Track, duration)),
            "explicit" => json_bool(lens!(Track, explicit)),
        },
        Track::default,
    )
}

#[rstest]
fn test_flat_model_round_trips() {
    let adapter = track_adapter();
    let track = Track {
        title: "Interlude".to_string(),
        duration: 92.5,
        explicit: false,
    };

    let encoded = adapter.transform(&track).unwrap();
    assert_eq!(
        encoded,
        json!({ "title": "Interlude", "duration": 92.5, "explicit": 0 })
    );
    assert_eq!(adapter.reverse_transform(&encoded), Ok(track));
}

#[rstest]
#[case(json!(null))]
#[case(json!(3))]
#[case(json!("track"))]
#[case(json!([1, 2]))]
fn test_decoding_a_non_object_fails(#[case] value: Value) {
    let adapter = track_adapter();
    assert_eq!(
        adapter.reverse_transform(&value),
        Err(MappingError::mismatch(JsonKind::Object, &value))
    );
}

#[rstest]
fn test_encoding_fails_on_the_first_bad_field_in_order() {
    // "duration" precedes "explicit"; a non-finite duration must win even
    // though no later field could fail anyway.
    let adapter = track_adapter();
    let track = Track {
        title: "Interlude".to_string(),
        duration: f64::NAN,
        explicit: true,
    };

    let error = adapter.transform(&track).unwrap_err();
    assert!(error.to_string().contains("a finite JSON number"));
}

#[rstest]
fn test_decoding_fails_on_the_first_bad_field_in_order() {
    // Both "title" and "duration" carry the wrong variant; the error must
    // name the first one in specification order.
    let adapter = track_adapter();
    let error = adapter
        .reverse_transform(&json!({ "title": 1, "duration": "long", "explicit": 0 }))
        .unwrap_err();

    assert_eq!(
        error,
        MappingError::mismatch(JsonKind::String, &json!(1))
    );
}

// =============================================================================
// Nested objects and arrays of models
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
struct Artist {
    name: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct Album {
    artist: Artist,
    tracks: Vec<Track>,
}

fn album_adapter() -> JsonAdapter<Album> {
    let artist = JsonAdapter::new(
        specification! {
            "name" => json_string(lens!(Artist, name)),
        },
        Artist::default,
    );

    JsonAdapter::new(
        specification! {
            "artist" => json_object(lens!(Album, artist), &artist),
            "tracks" => json_array(lens!(Album, tracks), &track_adapter()),
        },
        Album::default,
    )
}

#[rstest]
fn test_nested_models_round_trip() {
    let adapter = album_adapter();
    let album = Album {
        artist: Artist {
            name: "Unknown".to_string(),
        },
        tracks: vec![Track {
            title: "One".to_string(),
            duration: 10.0,
            explicit: true,
        }],
    };

    let encoded = adapter.transform(&album).unwrap();
    assert_eq!(
        encoded,
        json!({
            "artist": { "name": "Unknown" },
            "tracks": [{ "title": "One", "duration": 10.0, "explicit": 1 }],
        })
    );
    assert_eq!(adapter.reverse_transform(&encoded), Ok(album));
}

#[rstest]
fn test_nested_decode_failure_surfaces_the_inner_error() {
    let adapter = album_adapter();
    let error = adapter
        .reverse_transform(&json!({ "artist": { "name": 1 }, "tracks": [] }))
        .unwrap_err();

    assert_eq!(error, MappingError::mismatch(JsonKind::String, &json!(1)));
}

// =============================================================================
// Optional nested fields
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
struct Release {
    label: Option<Artist>,
    bonus: Option<Vec<Track>>,
}

fn release_adapter() -> JsonAdapter<Release> {
    let artist = JsonAdapter::new(
        specification! {
            "name" => json_string(lens!(Artist, name)),
        },
        Artist::default,
    );

    JsonAdapter::new(
        specification! {
            "label" => json_object_opt(lens!(Release, label), &artist, Value::Null),
            "bonus" => json_array_opt(lens!(Release, bonus), &track_adapter(), Value::Null),
        },
        Release::default,
    )
}

#[rstest]
fn test_absent_optionals_encode_to_their_defaults() {
    let adapter = release_adapter();
    let release = Release {
        label: None,
        bonus: None,
    };

    assert_eq!(
        adapter.transform(&release),
        Ok(json!({ "label": null, "bonus": null }))
    );
}

#[rstest]
fn test_missing_keys_decode_optionals_to_none() {
    let adapter = release_adapter();
    assert_eq!(
        adapter.reverse_transform(&json!({})),
        Ok(Release {
            label: None,
            bonus: None,
        })
    );
}

#[rstest]
fn test_an_explicit_null_is_not_absence_for_a_nested_optional() {
    // The default only shapes encoding. A key that is present with a null
    // still reaches the nested adapter, which requires an object.
    let adapter = release_adapter();
    let error = adapter
        .reverse_transform(&json!({ "label": null }))
        .unwrap_err();

    assert_eq!(
        error,
        MappingError::mismatch(JsonKind::Object, &Value::Null)
    );
}

#[rstest]
fn test_present_optionals_round_trip() {
    let adapter = release_adapter();
    let release = Release {
        label: Some(Artist {
            name: "Blue".to_string(),
        }),
        bonus: Some(vec![]),
    };

    let encoded = adapter.transform(&release).unwrap();
    assert_eq!(encoded, json!({ "label": { "name": "Blue" }, "bonus": [] }));
    assert_eq!(adapter.reverse_transform(&encoded), Ok(release));
}

// =============================================================================
// Recursive models
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Node {
    children: Vec<Node>,
}

fn node_adapter() -> JsonAdapter<Node> {
    fix(|adapter| {
        JsonAdapter::new(
            specification! {
                "children" => json_array(lens!(Node, children), &adapter),
            },
            || Node { children: vec![] },
        )
    })
}

#[rstest]
fn test_recursive_model_round_trips() {
    let adapter = node_adapter();
    let tree = Node {
        children: vec![
            Node {
                children: vec![Node { children: vec![] }],
            },
            Node { children: vec![] },
        ],
    };

    let encoded = adapter.transform(&tree).unwrap();
    assert_eq!(
        encoded,
        json!({
            "children": [
                { "children": [{ "children": [] }] },
                { "children": [] },
            ],
        })
    );
    assert_eq!(adapter.reverse_transform(&encoded), Ok(tree));
}

#[rstest]
fn test_recursive_leaf_round_trips() {
    let adapter = node_adapter();
    let leaf = Node { children: vec![] };

    let encoded = adapter.transform(&leaf).unwrap();
    assert_eq!(encoded, json!({ "children": [] }));
    assert_eq!(adapter.reverse_transform(&encoded), Ok(leaf));
}

#[rstest]
fn test_recursive_decode_rejects_a_malformed_child() {
    let adapter = node_adapter();
    let error = adapter
        .reverse_transform(&json!({ "children": [{ "children": "nope" }] }))
        .unwrap_err();

    assert_eq!(
        error,
        MappingError::mismatch(JsonKind::Array, &json!("nope"))
    );
}
