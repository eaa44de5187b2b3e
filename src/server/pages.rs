use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::Uri,
    response::Html,
    Form,
};
use maud::Markup;
use serde::Deserialize;

use super::AppState;
use crate::app::navigation::Navigation;
use crate::app::pages::{ContactPage, HomePage, ProductPage, ProjectPage, ServicePage};
use crate::app::render;
use crate::core::fetch::FetchError;
use crate::core::scope::FetchScope;
use crate::domain::model::NewContact;
use crate::utils::error::{Result, SiteError};

/// `?menu=<id>` opens that dropdown in the rendered menu.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub menu: Option<String>,
}

async fn navigation(
    state: &AppState,
    scope: &FetchScope,
    uri: &Uri,
    query: &MenuQuery,
) -> Navigation {
    let base = state.menu.as_ref().clone();
    let mut nav = Navigation::load(base, state.content.as_ref(), scope)
        .await
        .at(uri.path());
    if let Some(id) = &query.menu {
        nav.hover(id);
    }
    nav
}

/// A scope cancelled during the render (server shutdown) produces no page.
fn respond(
    scope: &FetchScope,
    title: &str,
    nav: &Navigation,
    body: Markup,
) -> Result<Html<String>> {
    if scope.is_cancelled() {
        return Err(FetchError::Cancelled.into());
    }
    Ok(Html(render::layout(title, nav, body).into_string()))
}

pub async fn home(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let (nav, page) = tokio::join!(
        navigation(&state, &scope, &uri, &query),
        HomePage::load(state.content.as_ref(), &scope),
    );
    respond(&scope, "Home", &nav, render::pages::home(&page))
}

pub async fn service(
    State(state): State<AppState>,
    uri: Uri,
    Path(service_id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    // stray files such as /favicon.ico never reach the CMS
    if !ServicePage::accepts_id(&service_id) {
        return Err(SiteError::NotFound(format!("page /{}", service_id)));
    }

    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let (nav, page) = tokio::join!(
        navigation(&state, &scope, &uri, &query),
        ServicePage::load(&service_id, state.content.as_ref(), &scope),
    );
    let title = page
        .service
        .ready()
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| "Service".to_string());
    respond(&scope, &title, &nav, render::pages::service(&page))
}

async fn product_listing(
    state: AppState,
    uri: Uri,
    category_id: Option<String>,
    query: MenuQuery,
) -> Result<Html<String>> {
    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let (nav, page) = tokio::join!(
        navigation(&state, &scope, &uri, &query),
        ProductPage::load(category_id.as_deref(), state.content.as_ref(), &scope),
    );
    respond(&scope, page.heading(), &nav, render::pages::product(&page))
}

pub async fn products(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    product_listing(state, uri, None, query).await
}

pub async fn product_category(
    State(state): State<AppState>,
    uri: Uri,
    Path(category_id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    product_listing(state, uri, Some(category_id), query).await
}

async fn project_listing(
    state: AppState,
    uri: Uri,
    proj_cat_id: Option<String>,
    query: MenuQuery,
) -> Result<Html<String>> {
    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let (nav, page) = tokio::join!(
        navigation(&state, &scope, &uri, &query),
        ProjectPage::load(proj_cat_id.as_deref(), state.content.as_ref(), &scope),
    );
    respond(&scope, page.heading(), &nav, render::pages::project(&page))
}

pub async fn projects(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    project_listing(state, uri, None, query).await
}

pub async fn project_category(
    State(state): State<AppState>,
    uri: Uri,
    Path(proj_cat_id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    project_listing(state, uri, Some(proj_cat_id), query).await
}

pub async fn contact_form(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>> {
    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let nav = navigation(&state, &scope, &uri, &query).await;
    respond(&scope, "Contact Us", &nav, render::pages::contact(&ContactPage::blank()))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<MenuQuery>,
    form: std::result::Result<Form<NewContact>, FormRejection>,
) -> Result<Html<String>> {
    let scope = state.fetch_scope();
    let _guard = scope.drop_guard();

    let submission = async {
        match form {
            Ok(Form(form)) => ContactPage::submit(&state.contacts, form).await,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable contact form");
                Ok(ContactPage::rejected(&rejection.body_text()))
            }
        }
    };
    let (nav, page) = tokio::join!(navigation(&state, &scope, &uri, &query), submission);
    respond(&scope, "Contact Us", &nav, render::pages::contact(&page?))
}
