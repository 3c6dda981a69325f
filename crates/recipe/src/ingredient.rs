use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single ingredient line of a recipe, as consumed by shopping-list
/// aggregation. Produced only by [`RawIngredient::coerce`]; read-only after
/// that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub note: String,
}

/// Quantity as the content store delivers it: a number, or free text like
/// `"2"` or `"some"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
}

/// Loosely-typed ingredient record coming out of the content store.
///
/// Shape variations (missing unit, string quantities, `notes` vs `note`) are
/// absorbed here so downstream code only ever sees [`IngredientLine`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RawIngredient {
    #[validate(length(min = 1, message = "ingredient name is required"))]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<RawQuantity>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "notes")]
    pub note: Option<String>,
}

impl RawIngredient {
    /// Validate and coerce into the strict line shape.
    ///
    /// Missing or unparseable quantities default to 1, negative quantities
    /// clamp to 0. Missing unit becomes the count unit `"item"`.
    pub fn coerce(self) -> mealcart_shared::Result<IngredientLine> {
        self.validate()?;

        let quantity = match self.quantity {
            Some(RawQuantity::Number(n)) => n,
            Some(RawQuantity::Text(s)) => s.trim().parse::<f64>().unwrap_or(1.0),
            None => 1.0,
        };

        Ok(IngredientLine {
            name: self.name.trim().to_owned(),
            quantity: quantity.max(0.0),
            unit: self
                .unit
                .map(|u| u.trim().to_lowercase())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| "item".to_owned()),
            category: self.category.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric_quantity() {
        let raw: RawIngredient =
            serde_json::from_str(r#"{"name": "Flour", "quantity": 300, "unit": "g"}"#).unwrap();
        let line = raw.coerce().unwrap();

        assert_eq!(line.name, "Flour");
        assert_eq!(line.quantity, 300.0);
        assert_eq!(line.unit, "g");
        assert_eq!(line.category, "");
    }

    #[test]
    fn test_coerce_string_quantity_and_notes_alias() {
        let raw: RawIngredient = serde_json::from_str(
            r#"{"name": "Basil", "quantity": "10", "unit": "G", "notes": "fresh"}"#,
        )
        .unwrap();
        let line = raw.coerce().unwrap();

        assert_eq!(line.quantity, 10.0);
        assert_eq!(line.unit, "g");
        assert_eq!(line.note, "fresh");
    }

    #[test]
    fn test_coerce_missing_fields_get_defaults() {
        let raw: RawIngredient = serde_json::from_str(r#"{"name": "Eggs"}"#).unwrap();
        let line = raw.coerce().unwrap();

        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.unit, "item");
    }

    #[test]
    fn test_coerce_unparseable_quantity_defaults_to_one() {
        let raw: RawIngredient =
            serde_json::from_str(r#"{"name": "Salt", "quantity": "a pinch"}"#).unwrap();
        let line = raw.coerce().unwrap();

        assert_eq!(line.quantity, 1.0);
    }

    #[test]
    fn test_coerce_rejects_empty_name() {
        let raw: RawIngredient = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(raw.coerce().is_err());
    }

    #[test]
    fn test_coerce_clamps_negative_quantity() {
        let raw: RawIngredient =
            serde_json::from_str(r#"{"name": "Milk", "quantity": -2, "unit": "ml"}"#).unwrap();
        let line = raw.coerce().unwrap();

        assert_eq!(line.quantity, 0.0);
    }
}
