//! Catalog route handlers.
//!
//! One page with category tabs. The unfiltered view additionally shows the
//! New Arrivals and Bestsellers sections.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use mmbm_core::Product;

use crate::filters;
use crate::state::AppState;

/// The pseudo-category that shows everything.
const ALL_CATEGORY: &str = "All";

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub sizes: Vec<String>,
    pub has_options: bool,
    pub is_new: bool,
    pub is_bestseller: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            sizes: product.sizes.clone(),
            has_options: product.has_options(),
            is_new: product.is_new,
            is_bestseller: product.is_bestseller,
        }
    }
}

/// Catalog page query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub categories: Vec<String>,
    pub selected: String,
    pub show_featured: bool,
    pub new_arrivals: Vec<ProductCardView>,
    pub bestsellers: Vec<ProductCardView>,
    pub products: Vec<ProductCardView>,
    pub heading: String,
}

/// Display the catalog, optionally filtered to one category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    let selected = query
        .category
        .filter(|c| catalog.categories().contains(&c.as_str()))
        .unwrap_or_else(|| ALL_CATEGORY.to_owned());

    let products: Vec<ProductCardView> = if selected == ALL_CATEGORY {
        catalog.all().iter().map(ProductCardView::from).collect()
    } else {
        catalog
            .by_category(&selected)
            .into_iter()
            .map(ProductCardView::from)
            .collect()
    };

    let show_featured = selected == ALL_CATEGORY;
    let heading = if show_featured {
        "All Products".to_owned()
    } else {
        selected.clone()
    };

    let mut categories = vec![ALL_CATEGORY.to_owned()];
    categories.extend(catalog.categories().into_iter().map(ToOwned::to_owned));

    CatalogTemplate {
        categories,
        selected,
        show_featured,
        new_arrivals: catalog
            .new_arrivals()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        bestsellers: catalog
            .bestsellers()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        products,
        heading,
    }
}
