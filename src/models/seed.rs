//! Demo records the dashboard starts with.

use chrono::{DateTime, NaiveDate, Utc};

use super::{
    GuestMeal, GuestMealStatus, MaintenanceCategory, MaintenanceRequest, MealType, MessFeedback,
    Rating, RequestStatus,
};

pub fn maintenance_requests(now: DateTime<Utc>) -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            id: "1".to_string(),
            student_name: "Rahul Singh".to_string(),
            room_number: "B-204".to_string(),
            hostel: "Mega Hostel".to_string(),
            category: MaintenanceCategory::Electrical,
            description: "Fan making loud noise".to_string(),
            status: RequestStatus::Pending,
            timestamp: now,
        },
        MaintenanceRequest {
            id: "2".to_string(),
            student_name: "Amit Kumar".to_string(),
            room_number: "A-102".to_string(),
            hostel: "H-7".to_string(),
            category: MaintenanceCategory::Plumbing,
            description: "Leaking tap in washroom".to_string(),
            status: RequestStatus::InProgress,
            timestamp: now,
        },
    ]
}

pub fn mess_feedbacks(now: DateTime<Utc>) -> Vec<MessFeedback> {
    vec![
        MessFeedback {
            id: "1".to_string(),
            meal_type: MealType::Lunch,
            rating: Rating::new(4).unwrap_or_default(),
            comment: "Dal was great today!".to_string(),
            timestamp: now,
        },
        MessFeedback {
            id: "2".to_string(),
            meal_type: MealType::Breakfast,
            rating: Rating::new(2).unwrap_or_default(),
            comment: "Paratha was undercooked".to_string(),
            timestamp: now,
        },
    ]
}

pub fn guest_meals() -> Vec<GuestMeal> {
    let date = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap_or_default();
    GuestMeal::new(
        "1",
        "Sohan Lal",
        "Rahul Singh",
        date,
        &[MealType::Lunch, MealType::Dinner],
        GuestMealStatus::Confirmed,
    )
    .into_iter()
    .collect()
}
