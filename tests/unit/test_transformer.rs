use catalog_prep::core::record::split_list;
use catalog_prep::core::schema::REQUIRED_FIELDS;
use catalog_prep::core::{ErrorCategory, OutputRecord, RawRecord, RecordTransformer};
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "sid": 1,
        "store_url": "u",
        "published_store": "d",
        "image": "i",
        "name": "Game",
        "current_price": 10,
        "platforms": "Win,Mac",
        "categories": "Single-player",
        "genres": "Action",
        "tags": "Indie",
        "gfq_difficulty": 3,
        "hltb_complete": 5,
        "languages": "English,French",
        "meta_score": 80,
        "grnk_score": 90,
        "igdb_score": null
    })
}

fn with(mut value: Value, field: &str, replacement: Value) -> Value {
    value[field] = replacement;
    value
}

fn raw(value: Value) -> RawRecord {
    RawRecord::from_value(value).unwrap()
}

fn transform(values: Vec<Value>) -> Vec<OutputRecord> {
    RecordTransformer::new()
        .transform_all(values.into_iter().map(raw).collect())
        .unwrap()
}

#[test]
fn test_sample_record_projects_every_field() {
    let output = transform(vec![sample()]);
    assert_eq!(output.len(), 1);

    let expected: OutputRecord = serde_json::from_value(json!({
        "id": 1,
        "url": "u",
        "date": "d",
        "image": "i",
        "name": "Game",
        "price": 10,
        "os": ["Win", "Mac"],
        "mode": ["Single-player"],
        "genres": ["Action"],
        "tags": ["Indie"],
        "difficulty": 3,
        "duration": 5,
        "rating": 85.0
    }))
    .unwrap();
    assert_eq!(output[0], expected);
}

#[test]
fn test_missing_or_null_required_field_drops_record() {
    for field in REQUIRED_FIELDS {
        let nulled = with(sample(), field, Value::Null);
        assert!(transform(vec![nulled]).is_empty(), "{} = null", field);

        let mut removed = sample();
        removed.as_object_mut().unwrap().remove(field);
        assert!(transform(vec![removed]).is_empty(), "{} removed", field);
    }
}

#[test]
fn test_non_english_records_are_dropped() {
    let cases = [
        json!("French"),
        json!("French, English"),
        json!("english"),
        json!(""),
        Value::Null,
    ];
    for languages in cases {
        let value = with(sample(), "languages", languages.clone());
        assert!(transform(vec![value]).is_empty(), "languages = {}", languages);
    }

    let mut absent = sample();
    absent.as_object_mut().unwrap().remove("languages");
    assert!(transform(vec![absent]).is_empty());
}

#[test]
fn test_all_scores_null_drops_record() {
    let value = with(sample(), "meta_score", Value::Null);
    let value = with(value, "grnk_score", Value::Null);
    assert!(transform(vec![value]).is_empty());

    let mut absent = sample();
    let fields = absent.as_object_mut().unwrap();
    fields.remove("meta_score");
    fields.remove("grnk_score");
    fields.remove("igdb_score");
    assert!(transform(vec![absent]).is_empty());
}

#[test]
fn test_rating_is_mean_of_present_scores() {
    let cases = [
        (json!(80), json!(90), json!(70), 80.0),
        (json!(80), Value::Null, Value::Null, 80.0),
        (Value::Null, json!(75.5), json!(24.5), 50.0),
        (json!(1), json!(2), Value::Null, 1.5),
    ];
    for (meta, grnk, igdb, expected) in cases {
        let value = with(sample(), "meta_score", meta);
        let value = with(value, "grnk_score", grnk);
        let value = with(value, "igdb_score", igdb);
        let output = transform(vec![value]);
        assert_eq!(output[0].rating, expected);
    }
}

#[test]
fn test_list_fields_keep_order_and_empty_segments() {
    let value = with(sample(), "tags", json!("Indie,Puzzle,"));
    let value = with(value, "platforms", json!("Mac,Win,Mac"));
    let output = transform(vec![value]);
    assert_eq!(output[0].tags, vec!["Indie", "Puzzle", ""]);
    assert_eq!(output[0].os, vec!["Mac", "Win", "Mac"]);
    assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
    assert_eq!(split_list("a,b,"), vec!["a", "b", ""]);
}

#[test]
fn test_survivors_keep_input_order() {
    let records = vec![
        with(sample(), "sid", json!(1)),
        with(sample(), "languages", json!("German")),
        with(sample(), "sid", json!(3)),
        with(sample(), "image", Value::Null),
        with(sample(), "sid", json!(5)),
    ];
    let ids: Vec<Value> = transform(records).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![json!(1), json!(3), json!(5)]);
}

#[test]
fn test_scalar_values_pass_through_unchanged() {
    let value = with(sample(), "current_price", json!(19.99));
    let value = with(value, "gfq_difficulty", json!("Just Right"));
    let value = with(value, "sid", json!("abc"));
    let output = transform(vec![value]);
    assert_eq!(output[0].price, json!(19.99));
    assert_eq!(output[0].difficulty, json!("Just Right"));
    assert_eq!(output[0].id, json!("abc"));
}

#[test]
fn test_malformed_list_field_fails_fast() {
    let records = vec![
        raw(sample()),
        raw(with(sample(), "categories", json!(7))),
    ];
    let err = RecordTransformer::new().transform_all(records).unwrap_err();
    assert_eq!(err.category, ErrorCategory::Validation);
    assert_eq!(err.context.get("record"), Some(&"1".to_string()));
    assert_eq!(err.context.get("field"), Some(&"categories".to_string()));
}

#[test]
fn test_string_score_fails_fast() {
    let records = vec![raw(with(sample(), "igdb_score", json!("70")))];
    let err = RecordTransformer::new().transform_all(records).unwrap_err();
    assert_eq!(err.context.get("field"), Some(&"igdb_score".to_string()));
}

#[test]
fn test_rejected_record_is_not_validated_further() {
    // Non-English records are dropped before list fields are inspected.
    let value = with(sample(), "languages", json!("French"));
    let value = with(value, "tags", json!(["already", "split"]));
    assert!(transform(vec![value]).is_empty());
}
