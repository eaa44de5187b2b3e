//! View models for CMS entities and the contact submission record.
//!
//! Field names follow the CMS content types verbatim (hence the mixed
//! `Title` / `productTitle` casing in the serde renames). Everything the CMS
//! may omit is an `Option`; fallbacks are applied when rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The CMS sends `null` for unset text fields; treat it like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Uploaded media reference as returned by a populate on an image field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Option<i64>,
    pub url: Option<String>,
    pub alternative_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Option<i64>,
    pub document_id: Option<String>,
    pub name: Option<String>,
    pub hero_headings: Option<String>,
    pub hero_image: Option<Media>,
    pub service_image: Option<Media>,
    pub cta_text: Option<String>,
    pub cta_para: Option<String>,
    pub cta_image: Option<Media>,
    pub content: Option<String>,
    pub advertisement: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "Image")]
    pub image: Option<Media>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub pid: Option<String>,
    #[serde(rename = "productTitle", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "productDescription")]
    pub description: Option<String>,
    #[serde(rename = "productPrice")]
    pub price: Option<f64>,
    #[serde(rename = "SKU")]
    pub sku: Option<String>,
    #[serde(rename = "productImage")]
    pub image: Option<Media>,
    #[serde(rename = "productDetail")]
    pub detail: Option<String>,
    #[serde(rename = "isOnSale")]
    pub is_on_sale: Option<bool>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: Option<i64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "Image")]
    pub image: Option<Media>,
    #[serde(rename = "projCatId")]
    pub proj_cat_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(rename = "projId")]
    pub proj_id: Option<String>,
    #[serde(rename = "projTitle", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "projHeader")]
    pub header: Option<String>,
    #[serde(rename = "projSubTitle")]
    pub subtitle: Option<String>,
    #[serde(rename = "projImage")]
    pub image: Option<Media>,
    pub html: Option<String>,
    pub category: Option<ProjectCategory>,
}

/// Contact form payload as received. Every field is optional at the wire
/// level so that a missing field surfaces as a validation error rather than
/// a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
