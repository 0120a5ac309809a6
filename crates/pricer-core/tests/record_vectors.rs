//! Record validation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pricer_core::record::{validate, OceanProximity};

mod vector_loader;
use vector_loader::load;

#[test]
fn record_vectors() {
    let files = [
        "record_example.json",
        "record_lowercase_category.json",
        "record_numeric_strings.json",
        "record_latitude_out_of_range.json",
        "record_unknown_category.json",
        "record_missing_field.json",
        "record_negative_rooms.json",
        "record_non_numeric.json",
        "record_not_object.json",
    ];

    for f in files {
        let v = load(f);
        let res = validate(&v.input);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.field, err.field, "vector={}", v.description);
            if let Some(reason) = err.reason {
                assert_eq!(e.reason, reason, "vector={}", v.description);
            }
            continue;
        }

        let rec = res.expect("expected valid record");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(rec.latitude, ex["latitude"].as_f64().unwrap(), "vector={}", v.description);
        assert_eq!(rec.median_income, ex["median_income"].as_f64().unwrap(), "vector={}", v.description);
        assert_eq!(
            rec.ocean_proximity.as_str(),
            ex["ocean_proximity"].as_str().unwrap(),
            "vector={}",
            v.description
        );
    }
}

#[test]
fn category_case_is_ignored() {
    let upper = load("record_example.json");
    let lower = load("record_lowercase_category.json");
    assert_eq!(validate(&upper.input).unwrap(), validate(&lower.input).unwrap());
}

#[test]
fn every_category_parses() {
    for c in OceanProximity::ALL {
        assert_eq!(OceanProximity::parse(&c.as_str().to_lowercase()), Some(c));
    }
    assert_eq!(OceanProximity::parse("NEAR  BAY"), None);
    assert_eq!(OceanProximity::parse(""), None);
}

#[test]
fn null_is_missing_and_non_finite_is_rejected() {
    let mut input = load("record_example.json").input;
    input["population"] = serde_json::Value::Null;
    let e = validate(&input).unwrap_err();
    assert_eq!((e.field.as_str(), e.reason.as_str()), ("population", "field required"));

    input["population"] = serde_json::json!("NaN");
    let e = validate(&input).unwrap_err();
    assert_eq!((e.field.as_str(), e.reason.as_str()), ("population", "must be a finite number"));
}

#[test]
fn bounds_are_inclusive() {
    let mut input = load("record_example.json").input;
    input["longitude"] = serde_json::json!(-180);
    input["latitude"] = serde_json::json!(90);
    input["total_bedrooms"] = serde_json::json!(0);
    let rec = validate(&input).unwrap();
    assert_eq!((rec.longitude, rec.latitude, rec.total_bedrooms), (-180.0, 90.0, 0.0));

    input["longitude"] = serde_json::json!(180.0001);
    assert_eq!(validate(&input).unwrap_err().field, "longitude");
}

#[test]
fn category_must_be_string() {
    let mut input = load("record_example.json").input;
    input["ocean_proximity"] = serde_json::json!(3);
    let e = validate(&input).unwrap_err();
    assert_eq!((e.field.as_str(), e.reason.as_str()), ("ocean_proximity", "must be a string"));
}

#[test]
fn first_violation_in_schema_order_wins() {
    let mut input = load("record_example.json").input;
    input["ocean_proximity"] = serde_json::json!("MOON");
    input["latitude"] = serde_json::json!(-91);
    assert_eq!(validate(&input).unwrap_err().field, "latitude");
}
