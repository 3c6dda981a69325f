use serde::{Deserialize, Serialize};

use crate::plan::PlanDay;

/// Which slice of the plan feeds into shopping-list aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShoppingScope {
    Day { week: u8, day: PlanDay },
    Week { week: u8 },
    Range { from_week: u8, to_week: u8 },
}

impl ShoppingScope {
    /// A reversed range selects nothing, mirroring a forward-only week
    /// iteration.
    pub fn contains(&self, week: u8, day: PlanDay) -> bool {
        match self {
            Self::Day {
                week: w,
                day: scope_day,
            } => *w == week && *scope_day == day,
            Self::Week { week: w } => *w == week,
            Self::Range { from_week, to_week } => (*from_week..=*to_week).contains(&week),
        }
    }

    /// Short human label used when naming persisted lists.
    pub fn describe(&self) -> String {
        match self {
            Self::Day { week, day } => format!("w{week} {day}"),
            Self::Week { week } => format!("w{week}"),
            Self::Range { from_week, to_week } => format!("w{from_week}-w{to_week}"),
        }
    }
}
