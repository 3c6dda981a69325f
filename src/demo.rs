use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use mealcart_mealplan::{
    InMemoryPlanStore, MealSlot, PlanDay, PlanSnapshot, PlannedDish, week_at,
};
use mealcart_recipe::{InMemoryProvider, IngredientLine, RawIngredient};
use mealcart_shopping::{DictionaryCanonicalizer, InMemoryListStore};
use mealcart_vendor::{
    CheckoutDispatcher, InMemoryOrderLog, ProductMatcher, SeedCatalog, VendorRegistry,
};

use crate::config::FulfillmentConfig;
use crate::routes::AppState;

/// App state over seeded demo data, so `serve` works without any external
/// collaborator wired up.
pub fn demo_state(fulfillment: &FulfillmentConfig) -> AppState {
    let today = time::OffsetDateTime::now_utc().date();
    tracing::info!(
        week = %week_at(today, 1).label(),
        "seeding demo meal plan for the current week"
    );

    let matcher = ProductMatcher::new(
        Arc::new(DictionaryCanonicalizer::seeded()),
        Arc::new(SeedCatalog::seeded()),
    )
    .with_lookup_timeout(Duration::from_millis(fulfillment.lookup_timeout_ms));

    AppState {
        plan_store: Arc::new(InMemoryPlanStore::new(demo_plan())),
        provider: Arc::new(demo_provider()),
        registry: Arc::new(VendorRegistry::seeded()),
        matcher: Arc::new(matcher),
        dispatcher: Arc::new(CheckoutDispatcher::new(fulfillment.search_base_url.clone())),
        list_store: Arc::new(InMemoryListStore::new()),
        order_log: Arc::new(InMemoryOrderLog::new()),
        match_generations: Arc::new(Mutex::new(HashMap::new())),
    }
}

fn line(name: &str, quantity: f64, unit: &str) -> IngredientLine {
    IngredientLine {
        name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
        category: String::new(),
        note: String::new(),
    }
}

fn demo_provider() -> InMemoryProvider {
    let mut provider = InMemoryProvider::new();

    provider.insert(
        "margherita-pizza",
        vec![
            line("Flour", 300.0, "g"),
            line("Tomatoes", 200.0, "g"),
            line("Mozzarella", 150.0, "g"),
            line("Basil", 10.0, "g"),
            line("Olive oil", 30.0, "ml"),
        ],
    );
    provider.insert(
        "chicken-curry",
        vec![
            line("Chicken", 500.0, "g"),
            line("Rice", 250.0, "g"),
            line("Onion", 1.0, "item"),
            line("Garlic", 2.0, "item"),
            line("Milk", 200.0, "ml"),
        ],
    );
    provider.insert(
        "pancakes",
        vec![
            line("Flour", 200.0, "g"),
            line("Milk", 300.0, "ml"),
            line("Eggs", 2.0, "item"),
            line("Butter", 30.0, "g"),
        ],
    );
    // content-store style records: string quantities, missing units, the
    // "notes" alias; coerced at the provider boundary
    let caprese: Vec<RawIngredient> = serde_json::from_str(
        r#"[
            {"name": "Tomatoes", "quantity": 300, "unit": "g"},
            {"name": "Mozzarella", "quantity": "125", "unit": "g", "notes": "buffalo if available"},
            {"name": "Basil", "quantity": 5, "unit": "g"},
            {"name": "Olive oil", "quantity": 15, "unit": "ml"}
        ]"#,
    )
    .expect("demo recipe records parse");
    provider
        .insert_raw("caprese-salad", caprese)
        .expect("demo recipe records are valid");

    provider
}

fn dish(recipe_id: &str, title: &str, servings: f64) -> PlannedDish {
    PlannedDish {
        recipe_id: recipe_id.to_owned(),
        title: title.to_owned(),
        servings_multiplier: servings,
    }
}

fn demo_plan() -> PlanSnapshot {
    let mut plan = PlanSnapshot::new();

    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        dish("margherita-pizza", "Margherita Pizza", 2.0),
    );
    plan.add_dish(
        1,
        PlanDay::Tuesday,
        MealSlot::Dinner,
        dish("chicken-curry", "Chicken Curry", 1.0),
    );
    plan.add_dish(
        1,
        PlanDay::Wednesday,
        MealSlot::Breakfast,
        dish("pancakes", "Pancakes", 1.0),
    );
    plan.add_dish(
        1,
        PlanDay::Wednesday,
        MealSlot::Lunch,
        dish("caprese-salad", "Caprese Salad", 1.0),
    );
    plan.add_dish(
        2,
        PlanDay::Monday,
        MealSlot::Dinner,
        dish("chicken-curry", "Chicken Curry", 2.0),
    );
    plan.add_dish(
        2,
        PlanDay::Thursday,
        MealSlot::Dinner,
        dish("margherita-pizza", "Margherita Pizza", 1.0),
    );

    plan
}
