//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::catalog::ProductCardView;
use crate::state::AppState;

/// Home page template: hero plus featured product sections.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub new_arrivals: Vec<ProductCardView>,
    pub bestsellers: Vec<ProductCardView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
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
    }
}
