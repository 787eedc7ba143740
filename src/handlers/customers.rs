use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{
    BookingStatus, CustomerRecord, FoodService, IdentityCardKind, PaymentOption, RoomType,
};
use crate::state::AppState;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const MIN_ROOMS: i64 = 1;
pub const MAX_ROOMS: i64 = 10;

/// The add-customer form as submitted. Each select that offers "Other"
/// carries a companion free-text field.
#[derive(Debug, Deserialize)]
pub struct NewCustomerForm {
    pub full_name: String,
    pub identity_card: String,
    pub other_identity_card: Option<String>,
    pub identity_card_number: String,
    pub age: i64,
    pub phone_number: String,
    pub room_type: String,
    pub other_room_type: Option<String>,
    pub number_of_rooms: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub food_service: String,
    pub total_bill_amount: Decimal,
    pub payment_option: String,
    pub other_payment_option: Option<String>,
}

impl NewCustomerForm {
    /// Checks required fields and bounds, resolves "Other" selections to
    /// their free-text values, and fixes the status to Pending. No store
    /// call happens unless this succeeds.
    pub fn into_record(self) -> Result<CustomerRecord, AppError> {
        let identity_card_number = self.identity_card_number.trim().to_string();
        if identity_card_number.is_empty() {
            return Err(AppError::Validation(
                "Identity card number is required.".to_string(),
            ));
        }

        let full_name = self.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(AppError::Validation("Full name is required.".to_string()));
        }

        let phone_number = self.phone_number.trim().to_string();
        if phone_number.is_empty() {
            return Err(AppError::Validation("Phone number is required.".to_string()));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::Validation(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE}."
            )));
        }

        if !(MIN_ROOMS..=MAX_ROOMS).contains(&self.number_of_rooms) {
            return Err(AppError::Validation(format!(
                "Number of rooms must be between {MIN_ROOMS} and {MAX_ROOMS}."
            )));
        }

        if self.check_out_date < self.check_in_date {
            return Err(AppError::Validation(
                "Check-out date cannot be before check-in date.".to_string(),
            ));
        }

        if self.total_bill_amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total bill amount cannot be negative.".to_string(),
            ));
        }

        let identity_card = resolve_choice(
            "identity card type",
            &self.identity_card,
            self.other_identity_card.as_deref(),
        )?;
        let room_type = resolve_choice("room type", &self.room_type, self.other_room_type.as_deref())?;
        let payment_option = resolve_choice(
            "payment option",
            &self.payment_option,
            self.other_payment_option.as_deref(),
        )?;

        Ok(CustomerRecord {
            identity_card_number,
            full_name,
            age: self.age,
            identity_card: IdentityCardKind::parse(&identity_card),
            phone_number,
            room_type: RoomType::parse(&room_type),
            number_of_rooms: self.number_of_rooms,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            food_service: FoodService::parse(&self.food_service),
            total_bill_amount: self.total_bill_amount,
            payment_option: PaymentOption::parse(&payment_option),
            booking_status: BookingStatus::Pending,
            conversation: vec![],
        })
    }
}

fn resolve_choice(field: &str, choice: &str, other: Option<&str>) -> Result<String, AppError> {
    if choice.eq_ignore_ascii_case("other") {
        let other = other.map(str::trim).unwrap_or("");
        if other.is_empty() {
            return Err(AppError::Validation(format!("Please specify the {field}.")));
        }
        Ok(other.to_string())
    } else {
        Ok(choice.to_string())
    }
}

// POST /api/customers
//
// On success the session returns to Home; on a duplicate key the error
// propagates and the session stays on the add form so the user can correct
// the id.
pub async fn add_customer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewCustomerForm>,
) -> Result<Json<serde_json::Value>, AppError> {
    let record = form.into_record()?;

    state.store.create(&record).await?;

    tracing::info!(id = %record.identity_card_number, "customer added");
    state.session.lock().unwrap().back_home();

    Ok(Json(serde_json::json!({ "ok": true })))
}

// POST /api/customers/approve
pub async fn approve_selected(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    apply_status(&state, BookingStatus::Booked).await
}

// POST /api/customers/decline
pub async fn decline_selected(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    apply_status(&state, BookingStatus::NotBooked).await
}

async fn apply_status(
    state: &Arc<AppState>,
    status: BookingStatus,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = { state.session.lock().unwrap().selected_ids() };

    let mut updated = 0usize;
    let mut skipped = 0usize;
    for id in &ids {
        match state.store.update_status(id, status).await {
            Ok(()) => updated += 1,
            // A selected row may have been deleted by another session since
            // the last render; skip it and keep going.
            Err(AppError::NotFound(_)) => {
                tracing::warn!(id = %id, "skipping status update for missing customer");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    state.session.lock().unwrap().clear_selection();
    tracing::info!(status = status.as_str(), updated, skipped, "bulk status update");

    Ok(Json(
        serde_json::json!({ "ok": true, "updated": updated, "skipped": skipped }),
    ))
}

// POST /api/customers/remove
pub async fn remove_selected(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = { state.session.lock().unwrap().selected_ids() };

    let mut removed = 0usize;
    let mut skipped = 0usize;
    for id in &ids {
        match state.store.remove(id).await {
            Ok(()) => removed += 1,
            Err(AppError::NotFound(_)) => {
                tracing::warn!(id = %id, "skipping removal of missing customer");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    state.session.lock().unwrap().clear_selection();
    tracing::info!(removed, skipped, "bulk removal");

    Ok(Json(
        serde_json::json!({ "ok": true, "removed": removed, "skipped": skipped }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewCustomerForm {
        NewCustomerForm {
            full_name: "Alice Smith".to_string(),
            identity_card: "Passport".to_string(),
            other_identity_card: None,
            identity_card_number: "P-1001".to_string(),
            age: 34,
            phone_number: "+15551234567".to_string(),
            room_type: "Deluxe".to_string(),
            other_room_type: None,
            number_of_rooms: 2,
            check_in_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            food_service: "Yes".to_string(),
            total_bill_amount: Decimal::new(450000, 2),
            payment_option: "UPI".to_string(),
            other_payment_option: None,
        }
    }

    #[test]
    fn test_valid_form_becomes_pending_record() {
        let record = valid_form().into_record().unwrap();
        assert_eq!(record.booking_status, BookingStatus::Pending);
        assert_eq!(record.identity_card, IdentityCardKind::Passport);
        assert!(record.conversation.is_empty());
    }

    #[test]
    fn test_underage_is_rejected() {
        let mut form = valid_form();
        form.age = 17;
        let err = form.into_record().unwrap_err();
        assert!(err.to_string().contains("Age"));
    }

    #[test]
    fn test_rooms_out_of_bounds_rejected() {
        let mut form = valid_form();
        form.number_of_rooms = 11;
        assert!(form.into_record().is_err());
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut form = valid_form();
        form.identity_card_number = "   ".to_string();
        assert!(form.into_record().is_err());
    }

    #[test]
    fn test_check_out_before_check_in_rejected() {
        let mut form = valid_form();
        form.check_out_date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert!(form.into_record().is_err());
    }

    #[test]
    fn test_negative_bill_rejected() {
        let mut form = valid_form();
        form.total_bill_amount = Decimal::new(-1, 0);
        assert!(form.into_record().is_err());
    }

    #[test]
    fn test_other_selection_resolves_to_free_text() {
        let mut form = valid_form();
        form.identity_card = "Other".to_string();
        form.other_identity_card = Some("Driving License".to_string());

        let record = form.into_record().unwrap();
        assert_eq!(
            record.identity_card,
            IdentityCardKind::Other("Driving License".to_string())
        );
    }

    #[test]
    fn test_other_selection_without_text_rejected() {
        let mut form = valid_form();
        form.room_type = "Other".to_string();
        form.other_room_type = None;

        let err = form.into_record().unwrap_err();
        assert!(err.to_string().contains("room type"));
    }
}
