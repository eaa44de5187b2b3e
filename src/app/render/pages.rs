use maud::{html, Markup, PreEscaped};

use super::{image, slice, MediaView};
use crate::app::navigation::{category_href, project_category_href, service_href};
use crate::app::pages::{ContactOutcome, ContactPage, HomePage, ProductPage, ProjectPage, ServicePage};
use crate::domain::model::{Product, Project, Service};

fn rich_text(html: Option<&str>) -> Markup {
    html! {
        section.rich-text { (PreEscaped(html.unwrap_or_default())) }
    }
}

fn service_card(service: &Service) -> Markup {
    let view = MediaView::resolve(service.service_image.as_ref(), &[service.name.as_deref()]);
    html! {
        a.card href=(service_href(service)) {
            (image(&view))
            h3 { (service.name.as_deref().unwrap_or_default()) }
        }
    }
}

pub fn home(page: &HomePage) -> Markup {
    html! {
        section.services {
            h2 { "Our Services" }
            (slice(&page.services, "services", |services| html! {
                @if services.is_empty() {
                    p.empty { "No services available at the moment." }
                } @else {
                    div.grid { @for service in services { (service_card(service)) } }
                }
            }))
        }
        section.product-categories {
            h2 { "Our Product Categories" }
            (slice(&page.categories, "products", |categories| html! {
                @if categories.is_empty() {
                    p.empty { "No products available at the moment." }
                } @else {
                    div.grid {
                        @for category in categories {
                            @let view = MediaView::resolve(category.image.as_ref(), &[Some(category.title.as_str())]);
                            a.card href=(category_href(category)) {
                                (image(&view))
                                h3 { (category.title) }
                            }
                        }
                    }
                }
            }))
            a.button href="/product" { "View All Products" }
        }
        section.project-categories {
            h2 { "Our Projects" }
            (slice(&page.project_categories, "projects", |categories| html! {
                @if categories.is_empty() {
                    p.empty { "No projects available at the moment." }
                } @else {
                    div.grid {
                        @for category in categories {
                            @let view = MediaView::resolve(category.image.as_ref(), &[Some(category.title.as_str())]);
                            a.card href=(project_category_href(category)) {
                                (image(&view))
                                h3 { (category.title) }
                            }
                        }
                    }
                }
            }))
        }
    }
}

pub fn service(page: &ServicePage) -> Markup {
    let others = page.other_services();
    html! {
        (slice(&page.service, "service", |service| {
            let heading = service.hero_headings.as_deref();
            let hero = MediaView::resolve(service.hero_image.as_ref(), &[heading]);
            let body = MediaView::resolve(service.service_image.as_ref(), &[heading]);
            html! {
                section.hero {
                    (image(&hero))
                    h1 { (heading.unwrap_or_default()) }
                }
                section.service-body {
                    (image(&body))
                    div.content {
                        (rich_text(service.content.as_deref()))
                        (rich_text(service.advertisement.as_deref()))
                        (rich_text(service.about.as_deref()))
                    }
                }
            }
        }))
        section.other-services {
            h2 { "Our Services" }
            @if others.is_empty() {
                p.empty { "No services available" }
            } @else {
                div.grid { @for other in others { (service_card(other)) } }
            }
        }
        @if let Some(service) = page.service.ready() {
            @let cta = MediaView::resolve(service.cta_image.as_ref(), &[service.cta_text.as_deref()]);
            section.cta {
                (image(&cta))
                h2 { (service.cta_text.as_deref().unwrap_or_default()) }
                p { (service.cta_para.as_deref().unwrap_or_default()) }
                a.button href="/contactus" { "Get Started" }
            }
        }
    }
}

fn product_card(product: &Product) -> Markup {
    let view = MediaView::resolve(product.image.as_ref(), &[Some(product.title.as_str())]);
    html! {
        article.card.product {
            (image(&view))
            h3 { (product.title) }
            @if product.is_on_sale.unwrap_or(false) {
                span.badge { "On Sale" }
            }
            @if let Some(description) = &product.description {
                p.description { (description) }
            }
            @if let Some(price) = product.price {
                p.price { (format!("{:.2}", price)) }
            }
            @if let Some(sku) = &product.sku {
                p.sku { "SKU: " (sku) }
            }
            @if product.detail.is_some() {
                (rich_text(product.detail.as_deref()))
            }
        }
    }
}

pub fn product(page: &ProductPage) -> Markup {
    html! {
        section.products {
            h1 { (page.heading()) }
            @if let Some(category) = &page.category {
                (slice(category, "category", |_| html! {}))
            }
            (slice(&page.products, "products", |products| html! {
                @if products.is_empty() {
                    p.empty { "No products available at the moment." }
                } @else {
                    div.grid { @for product in products { (product_card(product)) } }
                }
            }))
        }
    }
}

fn project_card(project: &Project) -> Markup {
    let view = MediaView::resolve(project.image.as_ref(), &[Some(project.title.as_str())]);
    html! {
        article.card.project {
            (image(&view))
            h3 { (project.title) }
            @if let Some(header) = &project.header {
                h4 { (header) }
            }
            @if let Some(subtitle) = &project.subtitle {
                p.subtitle { (subtitle) }
            }
            (rich_text(project.html.as_deref()))
        }
    }
}

pub fn project(page: &ProjectPage) -> Markup {
    html! {
        section.projects {
            h1 { (page.heading()) }
            @if let Some(category) = &page.category {
                (slice(category, "project category", |_| html! {}))
            }
            (slice(&page.projects, "projects", |projects| html! {
                @if projects.is_empty() {
                    p.empty { "No projects available at the moment." }
                } @else {
                    div.grid { @for project in projects { (project_card(project)) } }
                }
            }))
        }
    }
}

pub fn contact(page: &ContactPage) -> Markup {
    let form = &page.form;
    html! {
        section.contact {
            h1 { "Contact Us" }
            @match &page.outcome {
                Some(ContactOutcome::Sent(contact)) => {
                    p.notice.success role="status" {
                        "Thank you, " (contact.name) ". Your message has been sent."
                    }
                }
                Some(ContactOutcome::Invalid(message)) => {
                    p.notice.error role="alert" { (message) }
                }
                None => {}
            }
            form method="post" action="/contactus" {
                label { "Name" input type="text" name="name" required value=[form.name.as_deref()]; }
                label { "Email" input type="email" name="email" required value=[form.email.as_deref()]; }
                label { "Phone" input type="tel" name="phone" value=[form.phone.as_deref()]; }
                label { "Subject" input type="text" name="subject" value=[form.subject.as_deref()]; }
                label { "Message" textarea name="message" required { (form.message.as_deref().unwrap_or_default()) } }
                button type="submit" { "Send" }
            }
        }
    }
}
