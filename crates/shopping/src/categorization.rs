use strum::{AsRefStr, Display, EnumString};

/// Category for grocery store organization, used both for list grouping and
/// as the product-pool fallback when no canonical key matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Bakery,
    Other,
}

/// Categorize an ingredient by name against a predefined mapping.
///
/// Names are normalized, tried whole, then token by token, so free text like
/// "free-range chicken breast" still lands in Meat. Unknown names fall back
/// to `Category::Other`.
pub fn categorize(ingredient_name: &str) -> Category {
    let normalized = ingredient_name.trim().to_lowercase();

    if let Some(category) = lookup(&normalized) {
        return category;
    }

    for token in normalized.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if let Some(category) = lookup(token) {
            return category;
        }
    }

    Category::Other
}

fn lookup(name: &str) -> Option<Category> {
    if is_produce(name) {
        return Some(Category::Produce);
    }
    if is_dairy(name) {
        return Some(Category::Dairy);
    }
    if is_meat(name) {
        return Some(Category::Meat);
    }
    if is_pantry(name) {
        return Some(Category::Pantry);
    }
    if is_frozen(name) {
        return Some(Category::Frozen);
    }
    if is_bakery(name) {
        return Some(Category::Bakery);
    }

    None
}

fn is_produce(name: &str) -> bool {
    matches!(
        name,
        "tomato"
            | "tomatoes"
            | "onion"
            | "onions"
            | "garlic"
            | "lettuce"
            | "carrot"
            | "carrots"
            | "cucumber"
            | "zucchini"
            | "broccoli"
            | "spinach"
            | "potato"
            | "potatoes"
            | "mushroom"
            | "mushrooms"
            | "avocado"
            | "basil"
            | "parsley"
            | "cilantro"
            | "mint"
            | "thyme"
            | "rosemary"
            | "apple"
            | "apples"
            | "banana"
            | "bananas"
            | "lemon"
            | "lemons"
            | "lime"
            | "limes"
            | "ginger"
    )
}

fn is_dairy(name: &str) -> bool {
    matches!(
        name,
        "milk"
            | "butter"
            | "cream"
            | "yogurt"
            | "cheese"
            | "mozzarella"
            | "parmesan"
            | "feta"
            | "ricotta"
            | "egg"
            | "eggs"
    )
}

fn is_meat(name: &str) -> bool {
    matches!(
        name,
        "chicken"
            | "beef"
            | "pork"
            | "lamb"
            | "turkey"
            | "bacon"
            | "sausage"
            | "ham"
            | "salmon"
            | "tuna"
            | "shrimp"
            | "cod"
    )
}

fn is_pantry(name: &str) -> bool {
    matches!(
        name,
        "flour"
            | "sugar"
            | "salt"
            | "pepper"
            | "rice"
            | "pasta"
            | "spaghetti"
            | "oil"
            | "vinegar"
            | "honey"
            | "oats"
            | "lentils"
            | "beans"
            | "chickpeas"
            | "stock"
            | "broth"
            | "paprika"
            | "cumin"
            | "oregano"
            | "cinnamon"
    )
}

fn is_frozen(name: &str) -> bool {
    matches!(name, "peas" | "spinach frozen" | "ice cream" | "puff pastry")
}

fn is_bakery(name: &str) -> bool {
    matches!(
        name,
        "bread" | "baguette" | "rolls" | "tortilla" | "tortillas" | "pita" | "croissant"
    )
}
