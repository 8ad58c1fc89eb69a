use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MealType, ParseEnumError, parse_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestMealStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl GuestMealStatus {
    pub const ALL: [GuestMealStatus; 3] = [
        GuestMealStatus::Confirmed,
        GuestMealStatus::Pending,
        GuestMealStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GuestMealStatus::Confirmed => "Confirmed",
            GuestMealStatus::Pending => "Pending",
            GuestMealStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for GuestMealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuestMealStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "guest meal status", s)
    }
}

/// Meal booking for a non-resident guest, hosted by a resident student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestMeal {
    pub id: String,
    pub guest_name: String,
    pub host_student: String,
    pub date: NaiveDate,
    meals: Vec<MealType>,
    pub status: GuestMealStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestMealError {
    NoMeals,
}

impl fmt::Display for GuestMealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestMealError::NoMeals => write!(f, "A guest meal must book at least one meal"),
        }
    }
}

impl std::error::Error for GuestMealError {}

impl GuestMeal {
    /// Duplicate meals are collapsed, keeping the first occurrence.
    pub fn new(
        id: impl Into<String>,
        guest_name: impl Into<String>,
        host_student: impl Into<String>,
        date: NaiveDate,
        meals: &[MealType],
        status: GuestMealStatus,
    ) -> Result<Self, GuestMealError> {
        let mut unique: Vec<MealType> = Vec::with_capacity(meals.len());
        for meal in meals {
            if !unique.contains(meal) {
                unique.push(*meal);
            }
        }
        if unique.is_empty() {
            return Err(GuestMealError::NoMeals);
        }
        Ok(Self {
            id: id.into(),
            guest_name: guest_name.into(),
            host_student: host_student.into(),
            date,
            meals: unique,
            status,
        })
    }

    pub fn meals(&self) -> &[MealType] {
        &self.meals
    }

    pub fn meals_label(&self) -> String {
        self.meals
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
