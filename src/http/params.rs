//! Request parameter aggregation.
//!
//! Query-string pairs and `application/x-www-form-urlencoded` body pairs are
//! merged into a single read-only map before the handler runs.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::http::request::Request;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Parameters aggregated from the query string and form body.
///
/// A name may repeat (`?tag=a&tag=b`); [`Params::get`] returns the first
/// value, [`Params::get_all`] all of them. Query values come before body
/// values for the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the query string and, for form-encoded requests, the body.
    pub fn from_request(request: &Request) -> Self {
        let mut params = Params::new();

        if let Some(query) = request.query() {
            params.extend_from_urlencoded(query.as_bytes());
        }

        if is_form_body(request) {
            params.extend_from_urlencoded(&request.body);
        }

        params
    }

    fn extend_from_urlencoded(&mut self, input: &[u8]) {
        for (name, value) in form_urlencoded::parse(input) {
            self.values
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

fn is_form_body(request: &Request) -> bool {
    request
        .header("Content-Type")
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_URLENCODED))
}
