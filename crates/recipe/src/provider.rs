use std::collections::HashMap;

use crate::ingredient::{IngredientLine, RawIngredient};

/// Source of recipe ingredient lines.
///
/// `None` means the recipe has no entry at all; aggregation degrades to a
/// placeholder line instead of failing.
pub trait IngredientProvider: Send + Sync {
    fn ingredients(&self, recipe_id: &str) -> Option<Vec<IngredientLine>>;
}

/// Provider backed by an in-memory map, filled from content-store records
/// at startup.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProvider {
    recipes: HashMap<String, Vec<IngredientLine>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, recipe_id: impl Into<String>, lines: Vec<IngredientLine>) {
        self.recipes.insert(recipe_id.into(), lines);
    }

    /// Coerce loosely-typed records and register them under `recipe_id`.
    /// Fails on the first invalid record rather than storing a partial
    /// recipe.
    pub fn insert_raw(
        &mut self,
        recipe_id: impl Into<String>,
        raw: Vec<RawIngredient>,
    ) -> mealcart_shared::Result<()> {
        let lines = raw
            .into_iter()
            .map(RawIngredient::coerce)
            .collect::<mealcart_shared::Result<Vec<_>>>()?;
        self.recipes.insert(recipe_id.into(), lines);

        Ok(())
    }
}

impl IngredientProvider for InMemoryProvider {
    fn ingredients(&self, recipe_id: &str) -> Option<Vec<IngredientLine>> {
        self.recipes.get(recipe_id).cloned()
    }
}
