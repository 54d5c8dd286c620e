//! Verify request building against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file lists cases with the required arguments, the options as
//! JSON, and the expected path, ordered params and encoded query string.
//! Param values are compared as JSON so strings, numbers and booleans stay
//! distinct.

use places_core::{
    FindPlaceOptions, NearbySearchOptions, PlaceAutocompleteOptions, PlaceDetailsOptions,
    PlacePhotosOptions, PlaceRequest, QueryAutocompleteOptions, TextSearchOptions,
};
use serde_json::Value;

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn arg<'a>(case: &'a Value, name: &str) -> &'a str {
    case["args"][name].as_str().unwrap()
}

fn options<T: serde::de::DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["options"].clone()).unwrap()
}

/// Compare a built request with `expected_request`.
fn check(case: &Value, req: &PlaceRequest) {
    let name = case["name"].as_str().unwrap();
    let expected = &case["expected_request"];

    assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");

    let actual: Vec<Value> = req
        .params
        .iter()
        .map(|(k, v)| serde_json::json!([k, v]))
        .collect();
    assert_eq!(&actual, expected["params"].as_array().unwrap(), "{name}: params");

    assert_eq!(
        req.params.to_query_string(),
        expected["query"].as_str().unwrap(),
        "{name}: query"
    );
}

#[test]
fn find_place_test_vectors() {
    for case in cases(include_str!("../../test-vectors/find_place.json")) {
        let opts: FindPlaceOptions = options(&case);
        let req = PlaceRequest::find_place(arg(&case, "input"), arg(&case, "input_type"), &opts);
        check(&case, &req);
    }
}

#[test]
fn nearby_search_test_vectors() {
    for case in cases(include_str!("../../test-vectors/nearby_search.json")) {
        let opts: NearbySearchOptions = options(&case);
        let req = PlaceRequest::nearby_search(arg(&case, "location"), &opts);
        check(&case, &req);
    }
}

#[test]
fn text_search_test_vectors() {
    for case in cases(include_str!("../../test-vectors/text_search.json")) {
        let opts: TextSearchOptions = options(&case);
        let req = PlaceRequest::text_search(arg(&case, "query"), &opts);
        check(&case, &req);
    }
}

#[test]
fn place_details_test_vectors() {
    for case in cases(include_str!("../../test-vectors/place_details.json")) {
        let opts: PlaceDetailsOptions = options(&case);
        let req = PlaceRequest::place_details(arg(&case, "place_id"), &opts);
        check(&case, &req);
    }
}

#[test]
fn place_photos_test_vectors() {
    for case in cases(include_str!("../../test-vectors/place_photos.json")) {
        let opts: PlacePhotosOptions = options(&case);
        let req = PlaceRequest::place_photos(arg(&case, "photo_reference"), &opts);
        check(&case, &req);
    }
}

#[test]
fn place_autocomplete_test_vectors() {
    for case in cases(include_str!("../../test-vectors/place_autocomplete.json")) {
        let opts: PlaceAutocompleteOptions = options(&case);
        let req = PlaceRequest::place_autocomplete(arg(&case, "input"), &opts);
        check(&case, &req);
    }
}

#[test]
fn query_autocomplete_test_vectors() {
    for case in cases(include_str!("../../test-vectors/query_autocomplete.json")) {
        let opts: QueryAutocompleteOptions = options(&case);
        let req = PlaceRequest::query_autocomplete(arg(&case, "input"), &opts);
        check(&case, &req);
    }
}
