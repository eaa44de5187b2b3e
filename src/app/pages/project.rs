use crate::core::loader::{self, LoadState};
use crate::core::query::{resources, CmsQuery, ResourceRequest};
use crate::core::scope::FetchScope;
use crate::domain::model::{Project, ProjectCategory};
use crate::domain::ports::ContentSource;

/// `/projects` and `/projects/category/{projCatId}`.
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub proj_cat_id: Option<String>,
    pub category: Option<LoadState<ProjectCategory>>,
    pub projects: LoadState<Vec<Project>>,
}

impl ProjectPage {
    pub fn category_request(proj_cat_id: &str) -> ResourceRequest {
        ResourceRequest::collection(resources::PROJECT_CATEGORIES).with_query(
            CmsQuery::new()
                .populate_media("Image")
                .filter_eq(&["projCatId"], proj_cat_id),
        )
    }

    pub fn listing_request(proj_cat_id: Option<&str>) -> ResourceRequest {
        let mut query = CmsQuery::new()
            .populate_media("projImage")
            .populate_all("category");
        if let Some(id) = proj_cat_id {
            query = query.filter_eq(&["category", "projCatId"], id);
        }
        ResourceRequest::collection(resources::PROJECTS).with_query(query)
    }

    pub async fn load(
        proj_cat_id: Option<&str>,
        source: &dyn ContentSource,
        scope: &FetchScope,
    ) -> Self {
        let category = async {
            match proj_cat_id {
                Some(id) => {
                    let request = Self::category_request(id);
                    Some(loader::load_first::<ProjectCategory>(source, scope, request, id).await)
                }
                None => None,
            }
        };
        let (category, projects) = tokio::join!(
            category,
            loader::load_many(source, scope, Self::listing_request(proj_cat_id)),
        );

        Self {
            proj_cat_id: proj_cat_id.map(str::to_string),
            category,
            projects,
        }
    }

    pub fn heading(&self) -> &str {
        match &self.category {
            None => "Our Projects",
            Some(state) => state
                .ready()
                .map(|c| c.title.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or("Projects"),
        }
    }
}
