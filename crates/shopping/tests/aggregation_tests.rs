use mealcart_mealplan::{MealSlot, PlanDay, PlanSnapshot, PlannedDish, ShoppingScope};
use mealcart_recipe::{InMemoryProvider, IngredientLine};
use mealcart_shopping::{AggregatedItem, aggregate, carry_checked, normalize_name};

fn line(name: &str, quantity: f64, unit: &str) -> IngredientLine {
    IngredientLine {
        name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
        category: String::new(),
        note: String::new(),
    }
}

fn planned(recipe_id: &str, title: &str, servings: f64) -> PlannedDish {
    PlannedDish {
        recipe_id: recipe_id.to_owned(),
        title: title.to_owned(),
        servings_multiplier: servings,
    }
}

fn margherita_provider() -> InMemoryProvider {
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
    provider
}

#[test]
fn test_week_aggregation_scales_by_servings() {
    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 2.0),
    );

    let items = aggregate(
        &plan,
        &ShoppingScope::Week { week: 1 },
        &margherita_provider(),
    );

    assert_eq!(items.len(), 5);

    let expect = [
        ("Flour", 600.0, "g"),
        ("Tomatoes", 400.0, "g"),
        ("Mozzarella", 300.0, "g"),
        ("Basil", 20.0, "g"),
        ("Olive oil", 60.0, "ml"),
    ];
    for (name, quantity, unit) in expect {
        let item = items.iter().find(|i| i.name == name).unwrap();
        assert_eq!(item.total_quantity, quantity, "{name}");
        assert_eq!(item.unit, unit, "{name}");
        assert!(item.source_recipes.contains("Margherita Pizza"));
        assert_eq!(item.source_recipes.len(), 1);
    }
}

#[test]
fn test_quantities_sum_across_contributing_dishes() {
    let mut provider = margherita_provider();
    provider.insert("bruschetta", vec![line("tomatoes", 100.0, "g")]);

    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 2.0),
    );
    plan.add_dish(
        1,
        PlanDay::Tuesday,
        MealSlot::Lunch,
        planned("bruschetta", "Bruschetta", 3.0),
    );

    let items = aggregate(&plan, &ShoppingScope::Week { week: 1 }, &provider);

    let tomatoes = items
        .iter()
        .find(|i| normalize_name(&i.name) == "tomatoes")
        .unwrap();

    // 200g x2 servings + 100g x3 servings
    assert_eq!(tomatoes.total_quantity, 700.0);
    assert_eq!(tomatoes.source_recipes.len(), 2);
    assert_eq!(tomatoes.source_slots.len(), 2);
}

#[test]
fn test_differing_units_stay_separate_entries() {
    let mut provider = InMemoryProvider::new();
    provider.insert("cake", vec![line("Eggs", 2.0, "item")]);
    provider.insert("quiche", vec![line("Eggs", 120.0, "g")]);

    let mut plan = PlanSnapshot::new();
    plan.add_dish(1, PlanDay::Monday, MealSlot::Snack, planned("cake", "Cake", 1.0));
    plan.add_dish(
        1,
        PlanDay::Tuesday,
        MealSlot::Dinner,
        planned("quiche", "Quiche", 1.0),
    );

    let items = aggregate(&plan, &ShoppingScope::Week { week: 1 }, &provider);

    let eggs: Vec<_> = items
        .iter()
        .filter(|i| normalize_name(&i.name) == "eggs")
        .collect();
    assert_eq!(eggs.len(), 2);
}

#[test]
fn test_aggregation_is_visitation_order_independent() {
    let mut provider = margherita_provider();
    provider.insert(
        "bruschetta",
        vec![line("Tomatoes", 100.0, "g"), line("Basil", 5.0, "g")],
    );

    let mut forward = PlanSnapshot::new();
    forward.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );
    forward.add_dish(
        1,
        PlanDay::Tuesday,
        MealSlot::Lunch,
        planned("bruschetta", "Bruschetta", 1.0),
    );

    let mut reversed = PlanSnapshot::new();
    reversed.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Breakfast,
        planned("bruschetta", "Bruschetta", 1.0),
    );
    reversed.add_dish(
        1,
        PlanDay::Friday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );

    let scope = ShoppingScope::Week { week: 1 };
    let a = aggregate(&forward, &scope, &provider);
    let b = aggregate(&reversed, &scope, &provider);

    let totals = |items: &[AggregatedItem]| -> Vec<(String, String, String)> {
        items
            .iter()
            .map(|i| {
                (
                    normalize_name(&i.name),
                    i.unit.clone(),
                    format!("{:.4}", i.total_quantity),
                )
            })
            .collect()
    };

    assert_eq!(totals(&a), totals(&b));
}

#[test]
fn test_aggregation_is_idempotent() {
    let provider = margherita_provider();
    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        2,
        PlanDay::Wednesday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 3.0),
    );

    let scope = ShoppingScope::Week { week: 2 };
    assert_eq!(
        aggregate(&plan, &scope, &provider),
        aggregate(&plan, &scope, &provider)
    );
}

#[test]
fn test_empty_scope_yields_empty_list() {
    let plan = PlanSnapshot::new();
    let items = aggregate(
        &plan,
        &ShoppingScope::Week { week: 1 },
        &margherita_provider(),
    );
    assert!(items.is_empty());
}

#[test]
fn test_range_scope_spans_weeks() {
    let provider = margherita_provider();
    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );
    plan.add_dish(
        2,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );
    plan.add_dish(
        4,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );

    let items = aggregate(
        &plan,
        &ShoppingScope::Range {
            from_week: 1,
            to_week: 2,
        },
        &provider,
    );

    let flour = items.iter().find(|i| i.name == "Flour").unwrap();
    assert_eq!(flour.total_quantity, 600.0);
    assert_eq!(flour.source_slots.len(), 2);
}

#[test]
fn test_missing_recipe_degrades_to_placeholder_line() {
    let provider = InMemoryProvider::new();
    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Saturday,
        MealSlot::Dinner,
        planned("ghost-recipe", "Mystery Stew", 2.0),
    );

    let items = aggregate(&plan, &ShoppingScope::Week { week: 1 }, &provider);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Mystery Stew");
    assert_eq!(items[0].total_quantity, 2.0);
    assert_eq!(items[0].unit, "item");
    assert_eq!(items[0].category, "Other");
    assert_eq!(items[0].note, "ingredients unavailable");
}

#[test]
fn test_output_sorted_by_category_then_name() {
    let mut provider = InMemoryProvider::new();
    provider.insert(
        "mixed",
        vec![
            line("Flour", 300.0, "g"),
            line("Basil", 10.0, "g"),
            line("Milk", 200.0, "ml"),
            line("Chicken", 500.0, "g"),
        ],
    );

    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("mixed", "Mixed", 1.0),
    );

    let items = aggregate(&plan, &ShoppingScope::Week { week: 1 }, &provider);

    let order: Vec<(String, String)> = items
        .iter()
        .map(|i| (i.category.clone(), normalize_name(&i.name)))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();

    assert_eq!(order, sorted);
}

#[test]
fn test_regeneration_with_carry_checked_preserves_ticks() {
    let provider = margherita_provider();
    let mut plan = PlanSnapshot::new();
    plan.add_dish(
        1,
        PlanDay::Monday,
        MealSlot::Dinner,
        planned("margherita-pizza", "Margherita Pizza", 1.0),
    );

    let scope = ShoppingScope::Week { week: 1 };
    let mut previous = aggregate(&plan, &scope, &provider);
    previous
        .iter_mut()
        .find(|i| i.name == "Flour")
        .unwrap()
        .checked = true;

    let mut fresh = aggregate(&plan, &scope, &provider);
    carry_checked(&previous, &mut fresh);

    assert!(fresh.iter().find(|i| i.name == "Flour").unwrap().checked);
    assert!(!fresh.iter().find(|i| i.name == "Basil").unwrap().checked);
}
