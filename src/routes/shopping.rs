use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use mealcart_mealplan::ShoppingScope;
use mealcart_shopping::{AggregatedItem, ItemDraft, aggregate, carry_checked};
use mealcart_vendor::{BudgetTier, CartItem, CartResult, CheckoutConfig, OrderRecord};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub scope: ShoppingScope,
    /// Items from a previous generation whose `checked` state should carry
    /// over onto matching entries.
    #[serde(default)]
    pub previous_items: Vec<AggregatedItem>,
}

/// POST /shopping/generate - collapse the planned dishes in scope into an
/// aggregated shopping list.
///
/// The generated list is also written to the external list store, but only
/// best-effort: a store failure is logged and the aggregation is still
/// returned.
pub async fn post_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Vec<AggregatedItem>>, AppError> {
    let plan = state.plan_store.snapshot();
    let mut items = aggregate(&plan, &request.scope, state.provider.as_ref());
    carry_checked(&request.previous_items, &mut items);

    persist_list(&state, &request.scope, &items);

    Ok(Json(items))
}

fn persist_list(state: &AppState, scope: &ShoppingScope, items: &[AggregatedItem]) {
    if items.is_empty() {
        return;
    }

    let name = format!("Shopping · {}", scope.describe());
    let list_id = match state.list_store.create_list(&name) {
        Ok(list_id) => list_id,
        Err(err) => {
            tracing::warn!(err = %err, "failed to persist generated shopping list");
            return;
        }
    };

    for item in items {
        let draft = ItemDraft {
            name: item.name.clone(),
            amount: item.total_quantity,
            unit: item.unit.clone(),
            notes: item.note.clone(),
        };
        if let Err(err) = state.list_store.add_item(&list_id, draft) {
            tracing::warn!(err = %err, item = %item.name, "failed to persist shopping list item");
        }
    }
}

#[derive(Deserialize)]
pub struct MatchRequest {
    /// Logical session the request belongs to; a newer request for the same
    /// session supersedes this one.
    #[serde(default)]
    pub session: Option<String>,
    pub items: Vec<AggregatedItem>,
    pub vendor_id: String,
    pub budget_tier: BudgetTier,
}

/// POST /shopping/match - resolve aggregated items to products at one
/// vendor, ordered by budget tier.
///
/// If a newer match request for the same session arrives while this one is
/// in flight, the stale result is discarded and 409 is returned instead.
pub async fn post_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Response, AppError> {
    if state.registry.get(&request.vendor_id).is_none() {
        tracing::warn!(vendor = %request.vendor_id, "matching against unregistered vendor");
    }

    let session = request.session.clone().unwrap_or_else(|| "default".to_owned());
    let generation = {
        let mut generations = state.match_generations.lock().await;
        let counter = generations.entry(session.clone()).or_insert(0);
        *counter += 1;
        *counter
    };

    let outcome = state
        .matcher
        .match_all(&request.items, &request.vendor_id, request.budget_tier)
        .await;

    let current = {
        let generations = state.match_generations.lock().await;
        generations.get(&session).copied().unwrap_or(0)
    };
    if current != generation {
        tracing::debug!(session = %session, "match result superseded, discarding");
        return Ok((
            StatusCode::CONFLICT,
            Json(json!({ "error": "superseded by a newer match request" })),
        )
            .into_response());
    }

    Ok(Json(outcome).into_response())
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub vendor_id: String,
    pub items: Vec<CartItem>,
    pub budget_tier: BudgetTier,
    #[serde(default)]
    pub config: Option<CheckoutConfig>,
}

/// POST /shopping/checkout - build the vendor-specific fulfillment artifact.
///
/// Unrecognized vendor ids degrade to a search-fallback URL. The order
/// record is written fire-and-forget after the artifact is built.
pub async fn post_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Json<CartResult> {
    let vendor = state.registry.get(&request.vendor_id);
    let config = request.config.unwrap_or_default();
    let result = state.dispatcher.checkout(vendor, &request.items, &config);

    tracing::info!(
        vendor = %request.vendor_id,
        tier = %request.budget_tier,
        items = request.items.len(),
        total = result.estimated_total,
        "checkout dispatched"
    );

    let order_log = state.order_log.clone();
    let record = OrderRecord {
        vendor_id: vendor.map(|v| v.id.clone()),
        item_count: request.items.len(),
        estimated_total: result.estimated_total,
        currency: result.currency.clone(),
    };
    tokio::spawn(async move {
        if let Err(err) = order_log.record(record) {
            tracing::warn!(err = %err, "failed to record dispatched order");
        }
    });

    Json(result)
}
