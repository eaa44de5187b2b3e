//! Site navigation: a static base menu whose dropdown entries are filled
//! from three independent CMS collections.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use uuid::Uuid;

use crate::core::loader::{self, LoadState};
use crate::core::query::{resources, ResourceRequest};
use crate::core::scope::FetchScope;
use crate::domain::model::{Category, ProjectCategory, Service};
use crate::domain::ports::ContentSource;

pub const SERVICES_ENTRY: &str = "services";
pub const PRODUCTS_ENTRY: &str = "all-products";
pub const PROJECTS_ENTRY: &str = "projects";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavLink>>,
}

impl NavLink {
    pub fn new(id: &str, title: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            href: href.to_string(),
            children: None,
        }
    }

    fn child(title: String, href: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            href,
            children: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

pub fn default_menu() -> Vec<NavLink> {
    vec![
        NavLink::new("home", "Home", "/"),
        NavLink::new(SERVICES_ENTRY, "Services", "#"),
        NavLink::new(PRODUCTS_ENTRY, "Products", "/product"),
        NavLink::new(PROJECTS_ENTRY, "Projects", "/projects"),
        NavLink::new("contact", "Contact Us", "/contactus"),
    ]
}

pub fn category_href(category: &Category) -> String {
    let key = category
        .category_id
        .as_deref()
        .or(category.document_id.as_deref())
        .unwrap_or_default();
    format!("/product/category/{}", key)
}

pub fn project_category_href(category: &ProjectCategory) -> String {
    let key = category
        .proj_cat_id
        .as_deref()
        .or(category.document_id.as_deref())
        .unwrap_or_default();
    format!("/projects/category/{}", key)
}

pub fn service_href(service: &Service) -> String {
    format!("/{}", service.document_id.as_deref().unwrap_or_default())
}

pub fn category_links(categories: &[Category]) -> Vec<NavLink> {
    categories
        .iter()
        .map(|category| NavLink::child(category.title.clone(), category_href(category)))
        .collect()
}

pub fn project_category_links(categories: &[ProjectCategory]) -> Vec<NavLink> {
    categories
        .iter()
        .map(|category| NavLink::child(category.title.clone(), project_category_href(category)))
        .collect()
}

pub fn service_links(services: &[Service]) -> Vec<NavLink> {
    services
        .iter()
        .map(|service| {
            let title = service
                .name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or("Unnamed Service");
            NavLink::child(title.to_string(), service_href(service))
        })
        .collect()
}

/// The three menu branches filled from the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Categories,
    ProjectCategories,
    Services,
}

impl Branch {
    pub fn entry_id(&self) -> &'static str {
        match self {
            Branch::Categories => PRODUCTS_ENTRY,
            Branch::ProjectCategories => PROJECTS_ENTRY,
            Branch::Services => SERVICES_ENTRY,
        }
    }

    pub fn request(&self) -> ResourceRequest {
        match self {
            Branch::Categories => ResourceRequest::collection(resources::CATEGORIES),
            Branch::ProjectCategories => ResourceRequest::collection(resources::PROJECT_CATEGORIES),
            Branch::Services => ResourceRequest::collection(resources::SERVICES),
        }
    }
}

/// At most one dropdown open, keyed by menu entry id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: Option<String>,
}

impl DropdownState {
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    fn open(&mut self, id: &str) {
        self.open = Some(id.to_string());
    }

    fn close(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    links: Vec<NavLink>,
    categories: LoadState<usize>,
    project_categories: LoadState<usize>,
    services: LoadState<usize>,
    dropdown: DropdownState,
    page_path: String,
}

impl Navigation {
    pub fn new(base: Vec<NavLink>) -> Self {
        Self {
            links: base,
            categories: LoadState::Loading,
            project_categories: LoadState::Loading,
            services: LoadState::Loading,
            dropdown: DropdownState::default(),
            page_path: "/".to_string(),
        }
    }

    /// Path of the page being rendered; dropdown toggles link back to it.
    pub fn at(mut self, path: &str) -> Self {
        self.page_path = path.to_string();
        self
    }

    /// Fetches all three branches concurrently. Each branch settles on its
    /// own; a failure leaves only that entry without children.
    pub async fn load(base: Vec<NavLink>, source: &dyn ContentSource, scope: &FetchScope) -> Self {
        let (categories, project_categories, services) = tokio::join!(
            loader::load_many::<Category>(source, scope, Branch::Categories.request()),
            loader::load_many::<ProjectCategory>(source, scope, Branch::ProjectCategories.request()),
            loader::load_many::<Service>(source, scope, Branch::Services.request()),
        );

        let mut navigation = Self::new(base);
        navigation.apply(
            Branch::Categories,
            categories.map(|items| category_links(&items)),
        );
        navigation.apply(
            Branch::ProjectCategories,
            project_categories.map(|items| project_category_links(&items)),
        );
        navigation.apply(Branch::Services, services.map(|items| service_links(&items)));
        navigation
    }

    /// Settles one branch. Ready children replace the entry's children; the
    /// services entry additionally stops being a link of its own.
    pub fn apply(&mut self, branch: Branch, state: LoadState<Vec<NavLink>>) {
        let status = self.branch_mut(branch);
        if !status.is_loading() {
            return;
        }

        match state {
            LoadState::Loading => {}
            LoadState::Failed(message) => *status = LoadState::Failed(message),
            LoadState::Ready(children) => {
                *status = LoadState::Ready(children.len());
                if let Some(entry) = self.links.iter_mut().find(|l| l.id == branch.entry_id()) {
                    if branch == Branch::Services {
                        entry.href = "#".to_string();
                    }
                    entry.children = Some(children);
                }
            }
        }
    }

    fn branch_mut(&mut self, branch: Branch) -> &mut LoadState<usize> {
        match branch {
            Branch::Categories => &mut self.categories,
            Branch::ProjectCategories => &mut self.project_categories,
            Branch::Services => &mut self.services,
        }
    }

    /// Status of one branch; `Ready` carries the number of children.
    pub fn status(&self, branch: Branch) -> &LoadState<usize> {
        match branch {
            Branch::Categories => &self.categories,
            Branch::ProjectCategories => &self.project_categories,
            Branch::Services => &self.services,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn entry(&self, id: &str) -> Option<&NavLink> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    /// Hover or focus on an entry. Entries without children never open.
    pub fn hover(&mut self, id: &str) {
        if self.entry(id).is_some_and(NavLink::has_children) {
            self.dropdown.open(id);
        }
    }

    pub fn leave(&mut self, id: &str) {
        self.dropdown.close(id);
    }

    /// Link that flips one dropdown: `?menu=<id>` on the current page to open
    /// it, the bare page path to close it again.
    pub fn toggle_href(&self, id: &str) -> String {
        if self.dropdown.is_open(id) {
            return self.page_path.clone();
        }
        let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
        format!("{}?menu={}", self.page_path, encoded)
    }
}
