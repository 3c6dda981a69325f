use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::scope::ShoppingScope;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A dish scheduled into a meal slot. `servings_multiplier` scales the
/// recipe's base ingredient quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedDish {
    pub recipe_id: String,
    pub title: String,
    pub servings_multiplier: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    pub meals: BTreeMap<MealSlot, Vec<PlannedDish>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: BTreeMap<PlanDay, DayPlan>,
}

/// Read-only snapshot of the meal plan, owned by the caller and passed by
/// reference into aggregation. The engine keeps no state between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub weeks: BTreeMap<u8, WeekPlan>,
}

impl PlanSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dish(&mut self, week: u8, day: PlanDay, meal: MealSlot, dish: PlannedDish) {
        self.weeks
            .entry(week)
            .or_default()
            .days
            .entry(day)
            .or_default()
            .meals
            .entry(meal)
            .or_default()
            .push(dish);
    }

    /// All dishes falling inside `scope`, each with its slot label
    /// (`"w1 monday dinner"`).
    pub fn dishes_in(&self, scope: &ShoppingScope) -> Vec<(String, &PlannedDish)> {
        let mut out = Vec::new();

        for (week, week_plan) in &self.weeks {
            for (day, day_plan) in &week_plan.days {
                if !scope.contains(*week, *day) {
                    continue;
                }

                for (meal, dishes) in &day_plan.meals {
                    for dish in dishes {
                        out.push((slot_label(*week, *day, *meal), dish));
                    }
                }
            }
        }

        out
    }
}

pub fn slot_label(week: u8, day: PlanDay, meal: MealSlot) -> String {
    format!("w{week} {day} {meal}")
}
