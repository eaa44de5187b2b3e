use crate::core::loader::{self, LoadState};
use crate::core::query::{resources, CmsQuery, ResourceRequest};
use crate::core::scope::FetchScope;
use crate::domain::model::{Category, Product};
use crate::domain::ports::ContentSource;

/// `/product` and `/product/category/{categoryId}`.
///
/// `category` is `None` on the unfiltered route; otherwise it holds the
/// category looked up by its `categoryId`.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub category_id: Option<String>,
    pub category: Option<LoadState<Category>>,
    pub products: LoadState<Vec<Product>>,
}

impl ProductPage {
    pub fn category_request(category_id: &str) -> ResourceRequest {
        ResourceRequest::collection(resources::CATEGORIES).with_query(
            CmsQuery::new()
                .populate_media("Image")
                .filter_eq(&["categoryId"], category_id),
        )
    }

    pub fn listing_request(category_id: Option<&str>) -> ResourceRequest {
        let mut query = CmsQuery::new()
            .populate_media("productImage")
            .populate_all("category");
        if let Some(id) = category_id {
            query = query.filter_eq(&["category", "categoryId"], id);
        }
        ResourceRequest::collection(resources::PRODUCTS).with_query(query)
    }

    pub async fn load(
        category_id: Option<&str>,
        source: &dyn ContentSource,
        scope: &FetchScope,
    ) -> Self {
        let category = async {
            match category_id {
                Some(id) => {
                    let request = Self::category_request(id);
                    Some(loader::load_first::<Category>(source, scope, request, id).await)
                }
                None => None,
            }
        };
        let (category, products) = tokio::join!(
            category,
            loader::load_many(source, scope, Self::listing_request(category_id)),
        );

        Self {
            category_id: category_id.map(str::to_string),
            category,
            products,
        }
    }

    /// Heading for the listing: the category title once known.
    pub fn heading(&self) -> &str {
        match &self.category {
            None => "All Products",
            Some(state) => state
                .ready()
                .map(|c| c.title.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or("Products"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::testing::RoutedSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_unfiltered_listing_skips_category_lookup() {
        let source = RoutedSource::new().respond(
            "/api/products",
            json!({"data": [{"productTitle": "Milk Can", "productPrice": 12.5}]}),
        );

        let page = ProductPage::load(None, &source, &FetchScope::new()).await;

        assert!(page.category.is_none());
        assert_eq!(page.heading(), "All Products");
        assert_eq!(page.products.ready().unwrap()[0].title, "Milk Can");
        assert_eq!(source.seen().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_category_fails_only_the_detail() {
        let source = RoutedSource::new()
            .respond("/api/categories", json!({"data": []}))
            .respond("/api/products", json!({"data": []}));

        let page = ProductPage::load(Some("feeds"), &source, &FetchScope::new()).await;

        let category = page.category.as_ref().unwrap();
        assert_eq!(category.error(), Some("No categories found for 'feeds'"));
        assert_eq!(page.products, LoadState::Ready(vec![]));
        assert_eq!(page.heading(), "Products");
    }

    #[test]
    fn test_listing_filter_is_nested_under_category() {
        let request = ProductPage::listing_request(Some("feeds"));
        let pairs = request.query().pairs();
        assert!(pairs.contains(&("populate[category]".to_string(), "true".to_string())));
        assert!(pairs.contains(&(
            "filters[category][categoryId][$eq]".to_string(),
            "feeds".to_string()
        )));
    }
}
