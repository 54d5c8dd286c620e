//! Parameter builder and dispatcher for the Places endpoints.
//!
//! # Design
//! `PlaceQueryBuilder` holds only its `GetClient` and carries no state
//! between calls. Every operation is split into a pure `PlaceRequest`
//! constructor that maps arguments onto wire keys, and a dispatching method
//! that hands the result to the collaborator. Required arguments are
//! positional, optional ones come from the per-operation options struct.

use crate::http::{GetClient, PlaceRequest};
use crate::params::QueryParams;
use crate::types::{
    FindPlaceOptions, NearbySearchOptions, PlaceAutocompleteOptions, PlaceDetailsOptions,
    PlacePhotosOptions, QueryAutocompleteOptions, TextSearchOptions,
};

pub const FIND_PLACE_PATH: &str = "/maps/api/place/findplacefromtext/json";
pub const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";
pub const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
pub const PLACE_DETAILS_PATH: &str = "/maps/api/place/details/json";
pub const PLACE_PHOTOS_PATH: &str = "/maps/api/place/photo";
pub const PLACE_AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
pub const QUERY_AUTOCOMPLETE_PATH: &str = "/maps/api/place/queryautocomplete/json";

/// Stateless front end to the Places endpoints.
///
/// Safe to share across threads whenever `C` is.
#[derive(Debug, Clone)]
pub struct PlaceQueryBuilder<C> {
    client: C,
}

impl<C: GetClient> PlaceQueryBuilder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    /// Find places from a name, address or phone number. `input_type` is
    /// `textquery` or `phonenumber`.
    pub fn find_place(
        &self,
        input: &str,
        input_type: &str,
        options: &FindPlaceOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::find_place(input, input_type, options))
    }

    /// Search around `location` (`lat,lng`).
    pub fn nearby_search(
        &self,
        location: &str,
        options: &NearbySearchOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::nearby_search(location, options))
    }

    /// Free-text search, e.g. `pizza in New York`.
    pub fn text_search(
        &self,
        query: &str,
        options: &TextSearchOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::text_search(query, options))
    }

    pub fn place_details(
        &self,
        place_id: &str,
        options: &PlaceDetailsOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::place_details(place_id, options))
    }

    pub fn place_photos(
        &self,
        photo_reference: &str,
        options: &PlacePhotosOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::place_photos(photo_reference, options))
    }

    pub fn place_autocomplete(
        &self,
        input: &str,
        options: &PlaceAutocompleteOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::place_autocomplete(input, options))
    }

    pub fn query_autocomplete(
        &self,
        input: &str,
        options: &QueryAutocompleteOptions,
    ) -> Result<C::Response, C::Error> {
        self.dispatch(PlaceRequest::query_autocomplete(input, options))
    }

    fn dispatch(&self, request: PlaceRequest) -> Result<C::Response, C::Error> {
        tracing::debug!(
            path = request.path,
            query = %request.params,
            "dispatching places request"
        );
        self.client.get(request.path, &request.params)
    }
}

impl PlaceRequest {
    pub fn find_place(input: &str, input_type: &str, options: &FindPlaceOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("input", input);
        params.push("inputtype", input_type);
        params.push_list("fields", &options.fields);
        params.push_opt("language", options.language.as_deref());
        params.push_opt("locationbias", options.location_bias.as_deref());
        Self { path: FIND_PLACE_PATH, params }
    }

    pub fn nearby_search(location: &str, options: &NearbySearchOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("location", location);
        params.push_opt("radius", options.radius);
        params.push_opt("keyword", options.key_word.as_deref());
        params.push_opt("language", options.language.as_deref());
        params.push_opt("maxprice", options.max_price);
        params.push_opt("minprice", options.min_price);
        params.push_opt("opennow", options.open_now);
        params.push_opt("pagetoken", options.page_token.as_deref());
        params.push_opt("rankby", options.rank_by.as_deref());
        params.push_opt("type", options.place_type.as_deref());
        Self { path: NEARBY_SEARCH_PATH, params }
    }

    pub fn text_search(query: &str, options: &TextSearchOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("query", query);
        params.push_opt("radius", options.radius);
        params.push_opt("language", options.language.as_deref());
        params.push_opt("location", options.location.as_deref());
        params.push_opt("maxprice", options.max_price);
        params.push_opt("minprice", options.min_price);
        params.push_opt("opennow", options.open_now);
        params.push_opt("pagetoken", options.page_token.as_deref());
        params.push_opt("region", options.region.as_deref());
        params.push_opt("type", options.place_type.as_deref());
        Self { path: TEXT_SEARCH_PATH, params }
    }

    pub fn place_details(place_id: &str, options: &PlaceDetailsOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("place_id", place_id);
        params.push_opt("language", options.language.as_deref());
        params.push_list("fields", &options.fields);
        params.push_opt("region", options.region.as_deref());
        params.push_opt("reviews_no_translations", options.reviews_no_translations);
        params.push_opt("reviews_sort", options.reviews_sort.as_deref());
        params.push_opt("sessiontoken", options.session_token.as_deref());
        Self { path: PLACE_DETAILS_PATH, params }
    }

    pub fn place_photos(photo_reference: &str, options: &PlacePhotosOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("photo_reference", photo_reference);
        params.push_opt("maxheight", options.max_height);
        params.push_opt("maxwidth", options.max_width);
        Self { path: PLACE_PHOTOS_PATH, params }
    }

    pub fn place_autocomplete(input: &str, options: &PlaceAutocompleteOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("input", input);
        params.push_opt("radius", options.radius);
        params.push_opt("components", options.components.as_deref());
        params.push_opt("language", options.language.as_deref());
        params.push_opt("location", options.location.as_deref());
        params.push_opt("locationbias", options.location_bias.as_deref());
        params.push_opt("locationrestriction", options.location_restriction.as_deref());
        params.push_opt("offset", options.offset);
        params.push_opt("origin", options.origin.as_deref());
        params.push_opt("region", options.region.as_deref());
        params.push_opt("sessiontoken", options.session_token.as_deref());
        params.push_opt("strictbounds", options.strict_bounds);
        params.push_opt("types", options.types.as_deref());
        Self { path: PLACE_AUTOCOMPLETE_PATH, params }
    }

    pub fn query_autocomplete(input: &str, options: &QueryAutocompleteOptions) -> PlaceRequest {
        let mut params = QueryParams::new();
        params.push("input", input);
        params.push_opt("radius", options.radius);
        params.push_opt("language", options.language.as_deref());
        params.push_opt("location", options.location.as_deref());
        params.push_opt("offset", options.offset);
        Self { path: QUERY_AUTOCOMPLETE_PATH, params }
    }
}
