//! Request descriptors for the CMS REST API.
//!
//! A [`ResourceRequest`] names a collection (and optionally one document in
//! it) plus a [`CmsQuery`] describing which relations to populate and which
//! filters to apply. Query keys use the bracketed `qs` notation the CMS
//! expects, e.g. `populate[heroImage][fields][0]=url`.

use url::Url;

use crate::core::fetch::{FetchError, Shape};

pub mod resources {
    pub const SERVICES: &str = "services";
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
    pub const PROJECT_CATEGORIES: &str = "project-categories";
    pub const PROJECTS: &str = "projects";
}

/// Fields requested for every populated media relation.
pub const MEDIA_FIELDS: &[&str] = &["url", "alternativeText"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// `populate[relation][fields][i]=field` for each field.
    Fields { relation: String, fields: Vec<String> },
    /// `populate[relation]=true`
    All { relation: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    path: Vec<String>,
    operator: String,
    value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmsQuery {
    populate: Vec<Populate>,
    filters: Vec<Filter>,
}

impl CmsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate_fields(mut self, relation: &str, fields: &[&str]) -> Self {
        self.populate.push(Populate::Fields {
            relation: relation.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        });
        self
    }

    pub fn populate_media(self, relation: &str) -> Self {
        self.populate_fields(relation, MEDIA_FIELDS)
    }

    pub fn populate_all(mut self, relation: &str) -> Self {
        self.populate.push(Populate::All {
            relation: relation.to_string(),
        });
        self
    }

    pub fn filter_eq(mut self, path: &[&str], value: &str) -> Self {
        self.filters.push(Filter {
            path: path.iter().map(|p| p.to_string()).collect(),
            operator: "$eq".to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.populate.is_empty() && self.filters.is_empty()
    }

    /// Flattens the query into ordered key/value pairs: populates first, then
    /// filters, each in insertion order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for populate in &self.populate {
            match populate {
                Populate::Fields { relation, fields } => {
                    for (index, field) in fields.iter().enumerate() {
                        pairs.push((
                            format!("populate[{}][fields][{}]", relation, index),
                            field.clone(),
                        ));
                    }
                }
                Populate::All { relation } => {
                    pairs.push((format!("populate[{}]", relation), "true".to_string()));
                }
            }
        }

        for filter in &self.filters {
            let path: String = filter.path.iter().map(|p| format!("[{}]", p)).collect();
            pairs.push((
                format!("filters{}[{}]", path, filter.operator),
                filter.value.clone(),
            ));
        }

        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    resource: String,
    document_id: Option<String>,
    query: CmsQuery,
}

impl ResourceRequest {
    /// Listing request: `GET /api/{resource}`, expects an array.
    pub fn collection(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            document_id: None,
            query: CmsQuery::default(),
        }
    }

    /// Detail request: `GET /api/{resource}/{document_id}`, expects an object.
    pub fn document(resource: &str, document_id: &str) -> Self {
        Self {
            resource: resource.to_string(),
            document_id: Some(document_id.to_string()),
            query: CmsQuery::default(),
        }
    }

    pub fn with_query(mut self, query: CmsQuery) -> Self {
        self.query = query;
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn query(&self) -> &CmsQuery {
        &self.query
    }

    pub fn expected_shape(&self) -> Shape {
        if self.document_id.is_some() {
            Shape::Object
        } else {
            Shape::Array
        }
    }

    pub fn path(&self) -> String {
        match &self.document_id {
            Some(id) => format!("/api/{}/{}", self.resource, id),
            None => format!("/api/{}", self.resource),
        }
    }

    /// Resolves the request against the CMS base address. Any path prefix on
    /// the base (e.g. a reverse-proxy mount point) is preserved.
    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidBaseUrl(base.to_string()))?;
            segments.pop_if_empty().push("api").push(&self.resource);
            if let Some(id) = &self.document_id {
                segments.push(id);
            }
        }

        let pairs = self.query.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}
