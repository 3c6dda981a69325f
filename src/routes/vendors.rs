use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use mealcart_vendor::{BudgetTier, Vendor};

use crate::routes::AppState;

#[derive(Deserialize)]
pub struct VendorListQuery {
    /// Budget tier to rank by; defaults to the balanced tier.
    #[serde(default)]
    pub tier: Option<BudgetTier>,
}

/// GET /vendors - the vendor registry ranked for the requested tier.
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<VendorListQuery>,
) -> impl IntoResponse {
    let tier = query.tier.unwrap_or(BudgetTier::Normal);
    let vendors: Vec<Vendor> = state.registry.rank_all(tier).into_iter().cloned().collect();

    Json(vendors)
}
