//! The boundary between the query builder and whoever performs the GET.
//!
//! # Design
//! The core crate never touches the network. `PlaceRequest` describes a
//! request as plain data, and `GetClient` is the one operation the caller
//! must provide. Adding the API key, picking the host, signing, retrying and
//! parsing the body all happen behind `get`. Its `Response` and `Error` are
//! the caller's types, and they come back out of the builder unchanged.

use crate::params::QueryParams;

/// A Places request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRequest {
    /// Endpoint path, relative to the API host.
    pub path: &'static str,
    pub params: QueryParams,
}

/// External collaborator that executes a GET and parses the response.
pub trait GetClient {
    type Response;
    type Error;

    fn get(&self, path: &str, params: &QueryParams) -> Result<Self::Response, Self::Error>;
}

impl<C: GetClient + ?Sized> GetClient for &C {
    type Response = C::Response;
    type Error = C::Error;

    fn get(&self, path: &str, params: &QueryParams) -> Result<Self::Response, Self::Error> {
        (**self).get(path, params)
    }
}
