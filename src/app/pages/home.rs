use crate::core::loader::{self, LoadState};
use crate::core::query::{resources, CmsQuery, ResourceRequest};
use crate::core::scope::FetchScope;
use crate::domain::model::{Category, ProjectCategory, Service};
use crate::domain::ports::ContentSource;

/// `/`: three independent listing sections.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub services: LoadState<Vec<Service>>,
    pub categories: LoadState<Vec<Category>>,
    pub project_categories: LoadState<Vec<ProjectCategory>>,
}

impl HomePage {
    pub fn services_request() -> ResourceRequest {
        ResourceRequest::collection(resources::SERVICES).with_query(
            CmsQuery::new()
                .populate_media("serviceImage")
                .populate_media("heroImage"),
        )
    }

    pub fn categories_request() -> ResourceRequest {
        ResourceRequest::collection(resources::CATEGORIES)
            .with_query(CmsQuery::new().populate_media("Image"))
    }

    pub fn project_categories_request() -> ResourceRequest {
        ResourceRequest::collection(resources::PROJECT_CATEGORIES)
            .with_query(CmsQuery::new().populate_media("Image"))
    }

    pub async fn load(source: &dyn ContentSource, scope: &FetchScope) -> Self {
        let (services, categories, project_categories) = tokio::join!(
            loader::load_many(source, scope, Self::services_request()),
            loader::load_many(source, scope, Self::categories_request()),
            loader::load_many(source, scope, Self::project_categories_request()),
        );

        Self {
            services,
            categories,
            project_categories,
        }
    }
}
