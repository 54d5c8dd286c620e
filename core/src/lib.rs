//! Query builder for the Places web API.
//!
//! # Overview
//! Turns typed arguments into the wire-named query parameters the Places
//! endpoints expect (`key_word` → `keyword`, `open_now` → `opennow`, ...) and
//! hands them to a caller-supplied `GetClient`. The core never touches the
//! network: host, API key, signing, transport and response parsing belong to
//! the collaborator.
//!
//! # Design
//! - `PlaceQueryBuilder` is stateless; it holds only the collaborator.
//! - Optional arguments live in one options struct per operation. A field is
//!   sent only when it is `Some`, so `Some(false)` is sent and `None` is not.
//! - `QueryParams` keeps insertion order, so output is deterministic.
//! - Collaborator errors are returned as-is; there is no error type here.

pub mod client;
pub mod http;
pub mod params;
pub mod types;

pub use client::{
    PlaceQueryBuilder, FIND_PLACE_PATH, NEARBY_SEARCH_PATH, PLACE_AUTOCOMPLETE_PATH,
    PLACE_DETAILS_PATH, PLACE_PHOTOS_PATH, QUERY_AUTOCOMPLETE_PATH, TEXT_SEARCH_PATH,
};
pub use http::{GetClient, PlaceRequest};
pub use params::{ParamValue, QueryParams};
pub use types::{
    FindPlaceOptions, NearbySearchOptions, PlaceAutocompleteOptions, PlaceDetailsOptions,
    PlacePhotosOptions, QueryAutocompleteOptions, TextSearchOptions,
};
