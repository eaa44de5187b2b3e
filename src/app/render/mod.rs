//! HTML rendering with maud. Everything dynamic is escaped except the
//! CMS rich-text blocks, which are editor-authored HTML.

mod media;
pub mod pages;

pub use media::MediaView;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::app::navigation::Navigation;
use crate::core::loader::LoadState;

// Hover and keyboard focus reveal a dropdown without a round trip.
const MENU_CSS: &str = ".menu-item.has-dropdown:hover > .dropdown, \
.menu-item.has-dropdown:focus-within > .dropdown { display: block; }";

pub fn layout(title: &str, nav: &Navigation, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(MENU_CSS)) }
            }
            body {
                header { (navigation(nav)) }
                main { (body) }
            }
        }
    }
}

pub fn navigation(nav: &Navigation) -> Markup {
    html! {
        nav.site-nav {
            ul.menu {
                @for link in nav.links() {
                    @let open = nav.dropdown().is_open(&link.id);
                    li.menu-item.has-dropdown[link.has_children()].open[open] data-menu-id=(link.id) {
                        a href=(link.href) { (link.title) }
                        @if let Some(children) = link.children.as_ref().filter(|c| !c.is_empty()) {
                            a.dropdown-toggle href=(nav.toggle_href(&link.id)) aria-expanded=(open.to_string()) {
                                @if open { "Close " } @else { "Open " }
                                (link.title) " menu"
                            }
                            ul.dropdown hidden[!open] {
                                @for child in children {
                                    li data-menu-id=(child.id) {
                                        a href=(child.href) { (child.title) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn image(view: &MediaView) -> Markup {
    html! {
        img src=(view.src) alt=(view.alt);
    }
}

/// Renders one slice: an indicator until it settles, the error in place of
/// the content when it failed.
pub fn slice<T>(state: &LoadState<T>, what: &str, ready: impl FnOnce(&T) -> Markup) -> Markup {
    match state {
        LoadState::Loading => html! { div.loading { "Loading..." } },
        LoadState::Failed(message) => html! {
            div.error role="alert" { "Error fetching " (what) ": " (message) }
        },
        LoadState::Ready(value) => ready(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::{default_menu, Branch, NavLink, PRODUCTS_ENTRY};

    #[test]
    fn test_navigation_marks_only_open_dropdown() {
        let mut nav = Navigation::new(default_menu());
        nav.apply(
            Branch::Categories,
            LoadState::Ready(vec![NavLink::new("c1", "Feeds", "/product/category/feeds")]),
        );

        let closed = navigation(&nav).into_string();
        assert!(closed.contains(r#"<ul class="dropdown" hidden>"#));
        assert!(closed.contains(
            r#"<a class="dropdown-toggle" href="/?menu=all-products" aria-expanded="false">Open Products menu</a>"#
        ));

        nav.hover(PRODUCTS_ENTRY);
        let open = navigation(&nav).into_string();
        assert!(open.contains(r#"<ul class="dropdown">"#));
        assert!(open.contains(r#"href="/product/category/feeds""#));
        assert!(open.contains(r#"<a class="dropdown-toggle" href="/" aria-expanded="true">"#));
    }

    #[test]
    fn test_entries_without_children_get_no_toggle() {
        let nav = Navigation::new(default_menu());
        let html = navigation(&nav).into_string();
        assert!(!html.contains("dropdown-toggle"));
        assert!(html.contains(r##"<a href="#">Services</a>"##));
    }

    #[test]
    fn test_slice_states() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert!(slice(&loading, "things", |_| html! {}).into_string().contains("Loading..."));

        let failed: LoadState<u8> = LoadState::Failed("HTTP 500".into());
        assert_eq!(
            slice(&failed, "things", |_| html! {}).into_string(),
            r#"<div class="error" role="alert">Error fetching things: HTTP 500</div>"#
        );

        let ready = LoadState::Ready(7u8);
        assert_eq!(slice(&ready, "things", |n| html! { (n) }).into_string(), "7");
    }

    #[test]
    fn test_layout_escapes_title() {
        let nav = Navigation::new(default_menu());
        let page = layout("Feeds & <Tools>", &nav, html! { p { "body" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Feeds &amp; &lt;Tools&gt;</title>"));
        assert!(page.contains(":focus-within > .dropdown"));
    }
}
