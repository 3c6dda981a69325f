mod health;
mod shopping;
mod vendors;

pub use health::*;
pub use shopping::*;
pub use vendors::*;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use mealcart_mealplan::MealPlanStore;
use mealcart_recipe::IngredientProvider;
use mealcart_shopping::ShoppingListStore;
use mealcart_vendor::{CheckoutDispatcher, OrderLog, ProductMatcher, VendorRegistry};

#[derive(Clone)]
pub struct AppState {
    pub plan_store: Arc<dyn MealPlanStore>,
    pub provider: Arc<dyn IngredientProvider>,
    pub registry: Arc<VendorRegistry>,
    pub matcher: Arc<ProductMatcher>,
    pub dispatcher: Arc<CheckoutDispatcher>,
    pub list_store: Arc<dyn ShoppingListStore>,
    pub order_log: Arc<dyn OrderLog>,
    /// Latest-wins guard for batch matching: the newest request per session
    /// supersedes any still in flight, whose result is then discarded.
    pub match_generations: Arc<Mutex<HashMap<String, u64>>>,
}
