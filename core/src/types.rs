//! Per-operation optional arguments.
//!
//! # Design
//! Every field is optional and unset by `Default`, so callers spell out only
//! what they need: `NearbySearchOptions { radius: Some(1500), ..Default::default() }`.
//! List fields use an empty `Vec` for "unset". Field names are idiomatic; the
//! wire key each one maps to is noted on the field.
//!
//! Values are not range-checked. The remote service rejects bad input.

use serde::Deserialize;

/// Options for `find_place`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FindPlaceOptions {
    /// `fields`, comma-joined.
    pub fields: Vec<String>,
    /// `language`
    pub language: Option<String>,
    /// `locationbias`
    pub location_bias: Option<String>,
}

/// Options for `nearby_search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NearbySearchOptions {
    /// `radius`, in meters.
    pub radius: Option<i64>,
    /// `keyword`
    pub key_word: Option<String>,
    /// `language`
    pub language: Option<String>,
    /// `maxprice`, 0 (most affordable) to 4 (most expensive).
    pub max_price: Option<i64>,
    /// `minprice`
    pub min_price: Option<i64>,
    /// `opennow`. `Some(false)` is sent.
    pub open_now: Option<bool>,
    /// `pagetoken`
    pub page_token: Option<String>,
    /// `rankby`: `prominence` or `distance`.
    pub rank_by: Option<String>,
    /// `type`
    pub place_type: Option<String>,
}

/// Options for `text_search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextSearchOptions {
    /// `radius`
    pub radius: Option<i64>,
    /// `language`
    pub language: Option<String>,
    /// `location`, as `lat,lng`.
    pub location: Option<String>,
    /// `maxprice`
    pub max_price: Option<i64>,
    /// `minprice`
    pub min_price: Option<i64>,
    /// `opennow`. `Some(false)` is sent.
    pub open_now: Option<bool>,
    /// `pagetoken`
    pub page_token: Option<String>,
    /// `region`, a ccTLD two-character code.
    pub region: Option<String>,
    /// `type`
    pub place_type: Option<String>,
}

/// Options for `place_details`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceDetailsOptions {
    pub language: Option<String>,
    /// `fields`, comma-joined.
    pub fields: Vec<String>,
    pub region: Option<String>,
    /// `reviews_no_translations`. `Some(false)` is sent.
    pub reviews_no_translations: Option<bool>,
    /// `reviews_sort`: `most_relevant` or `newest`.
    pub reviews_sort: Option<String>,
    /// `sessiontoken`
    pub session_token: Option<String>,
}

/// Options for `place_photos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlacePhotosOptions {
    /// `maxheight`, in pixels.
    pub max_height: Option<i64>,
    /// `maxwidth`, in pixels.
    pub max_width: Option<i64>,
}

/// Options for `place_autocomplete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceAutocompleteOptions {
    pub radius: Option<i64>,
    /// `components`, e.g. `country:us|country:pr`.
    pub components: Option<String>,
    pub language: Option<String>,
    pub location: Option<String>,
    /// `locationbias`
    pub location_bias: Option<String>,
    /// `locationrestriction`
    pub location_restriction: Option<String>,
    /// `offset`: position of the last input character used for matching.
    pub offset: Option<i64>,
    /// `origin`, as `lat,lng`.
    pub origin: Option<String>,
    pub region: Option<String>,
    /// `sessiontoken`
    pub session_token: Option<String>,
    /// `strictbounds`
    pub strict_bounds: Option<bool>,
    pub types: Option<String>,
}

/// Options for `query_autocomplete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryAutocompleteOptions {
    pub radius: Option<i64>,
    pub language: Option<String>,
    pub location: Option<String>,
    pub offset: Option<i64>,
}
