use crate::core::loader::{self, LoadState};
use crate::core::query::{resources, CmsQuery, ResourceRequest};
use crate::core::scope::FetchScope;
use crate::domain::model::Service;
use crate::domain::ports::ContentSource;

/// `/{serviceId}`: one service in detail plus the "Our Services" listing.
#[derive(Debug, Clone)]
pub struct ServicePage {
    pub service_id: String,
    pub service: LoadState<Service>,
    pub services: LoadState<Vec<Service>>,
}

impl ServicePage {
    pub fn detail_request(service_id: &str) -> ResourceRequest {
        ResourceRequest::document(resources::SERVICES, service_id).with_query(
            CmsQuery::new()
                .populate_media("serviceImage")
                .populate_media("heroImage")
                .populate_media("ctaImage"),
        )
    }

    pub fn listing_request() -> ResourceRequest {
        ResourceRequest::collection(resources::SERVICES)
            .with_query(CmsQuery::new().populate_media("serviceImage"))
    }

    /// CMS document ids are plain tokens; anything else (`favicon.ico`,
    /// `robots.txt`) is not a service page.
    pub fn accepts_id(service_id: &str) -> bool {
        !service_id.is_empty()
            && service_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    pub async fn load(service_id: &str, source: &dyn ContentSource, scope: &FetchScope) -> Self {
        let (service, services) = tokio::join!(
            loader::load_one(source, scope, Self::detail_request(service_id)),
            loader::load_many(source, scope, Self::listing_request()),
        );

        Self {
            service_id: service_id.to_string(),
            service,
            services,
        }
    }

    /// Listing entries to show; empty when the listing failed or is empty.
    pub fn other_services(&self) -> &[Service] {
        self.services.ready().map(Vec::as_slice).unwrap_or_default()
    }
}
