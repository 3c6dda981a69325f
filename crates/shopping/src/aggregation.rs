use std::collections::{BTreeSet, HashMap};

use mealcart_mealplan::{PlanSnapshot, ShoppingScope};
use mealcart_recipe::{IngredientLine, IngredientProvider};
use serde::{Deserialize, Serialize};

use crate::categorization::categorize;

/// A deduplicated, quantity-summed shopping-list entry.
///
/// Two ingredient lines fold into one entry iff their normalized names AND
/// units match exactly. The same ingredient in different units stays as
/// separate entries; no unit conversion is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedItem {
    pub name: String,
    pub total_quantity: f64,
    pub unit: String,
    pub category: String,
    pub source_recipes: BTreeSet<String>,
    pub source_slots: BTreeSet<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub note: String,
}

impl AggregatedItem {
    /// Merge identity: `(lowercased trimmed name, unit)`.
    pub fn key(&self) -> (String, String) {
        (normalize_name(&self.name), self.unit.clone())
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Collapse every dish inside `scope` into summed, deduplicated entries.
///
/// Quantities are scaled by each dish's servings multiplier before folding.
/// A recipe with no provider entry degrades to a single placeholder line
/// instead of failing the whole aggregation. Output is sorted by
/// `(category, name)` so regeneration is deterministic regardless of dish
/// visitation order.
pub fn aggregate(
    plan: &PlanSnapshot,
    scope: &ShoppingScope,
    provider: &dyn IngredientProvider,
) -> Vec<AggregatedItem> {
    let mut groups: HashMap<(String, String), AggregatedItem> = HashMap::new();

    for (slot, dish) in plan.dishes_in(scope) {
        let lines = provider.ingredients(&dish.recipe_id).unwrap_or_else(|| {
            tracing::warn!(
                recipe_id = %dish.recipe_id,
                "no ingredient data for planned dish, using placeholder line"
            );

            vec![placeholder_line(&dish.title)]
        });

        for line in lines {
            let key = (normalize_name(&line.name), line.unit.clone());
            let scaled = line.quantity * dish.servings_multiplier;

            let entry = groups.entry(key).or_insert_with(|| AggregatedItem {
                name: line.name.trim().to_owned(),
                total_quantity: 0.0,
                unit: line.unit.clone(),
                category: resolve_category(&line),
                source_recipes: BTreeSet::new(),
                source_slots: BTreeSet::new(),
                checked: false,
                note: String::new(),
            });

            entry.total_quantity += scaled;
            entry.source_recipes.insert(dish.title.clone());
            entry.source_slots.insert(slot.clone());
            if entry.note.is_empty() && !line.note.is_empty() {
                entry.note = line.note.clone();
            }
        }
    }

    let mut items: Vec<AggregatedItem> = groups.into_values().collect();
    items.sort_by(|a, b| {
        (a.category.as_str(), normalize_name(&a.name))
            .cmp(&(b.category.as_str(), normalize_name(&b.name)))
    });

    items
}

/// Copy operator-assigned `checked` state from a previous generation onto a
/// fresh one. Items whose key disappeared simply drop their state.
pub fn carry_checked(previous: &[AggregatedItem], fresh: &mut [AggregatedItem]) {
    let checked: std::collections::HashSet<(String, String)> = previous
        .iter()
        .filter(|item| item.checked)
        .map(AggregatedItem::key)
        .collect();

    for item in fresh {
        if checked.contains(&item.key()) {
            item.checked = true;
        }
    }
}

/// Group a sorted aggregation into `(category, items)` runs for display.
pub fn group_by_category(items: &[AggregatedItem]) -> Vec<(String, Vec<AggregatedItem>)> {
    let mut groups: Vec<(String, Vec<AggregatedItem>)> = Vec::new();

    for item in items {
        match groups.last_mut() {
            Some((category, bucket)) if *category == item.category => bucket.push(item.clone()),
            _ => groups.push((item.category.clone(), vec![item.clone()])),
        }
    }

    groups
}

fn resolve_category(line: &IngredientLine) -> String {
    if line.category.trim().is_empty() {
        categorize(&line.name).to_string()
    } else {
        line.category.clone()
    }
}

fn placeholder_line(dish_title: &str) -> IngredientLine {
    IngredientLine {
        name: dish_title.to_owned(),
        quantity: 1.0,
        unit: "item".to_owned(),
        category: "Other".to_owned(),
        note: "ingredients unavailable".to_owned(),
    }
}
