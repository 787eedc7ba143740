use serde::Serialize;

use crate::models::customer::{
    FOOD_SERVICE_OPTIONS, IDENTITY_CARD_OPTIONS, PAYMENT_OPTIONS, ROOM_TYPE_OPTIONS,
    STATUS_FILTER_OPTIONS,
};
use crate::models::{ConversationTurn, CustomerRecord};
use crate::query;
use crate::session::SessionState;

/// What the page renders. Every interaction re-derives one of these from the
/// current store snapshot and session state; the client holds no state of
/// its own beyond what it POSTs back.
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum DashboardView {
    Home {
        customers: Vec<CustomerRow>,
        selected_count: usize,
        status_options: Vec<&'static str>,
    },
    AddCustomer {
        identity_card_options: Vec<&'static str>,
        room_type_options: Vec<&'static str>,
        payment_options: Vec<&'static str>,
        food_service_options: Vec<&'static str>,
    },
    ShowConversation {
        identity_card_number: String,
        turns: Vec<TurnView>,
    },
}

#[derive(Debug, Serialize)]
pub struct CustomerRow {
    pub identity_card_number: String,
    pub full_name: String,
    pub age: i64,
    pub identity_card: String,
    pub phone_number: String,
    pub room_type: String,
    pub number_of_rooms: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub food_service: String,
    pub total_bill_amount: String,
    pub payment_option: String,
    pub booking_status: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct TurnView {
    pub speaker: &'static str,
    pub text: String,
}

pub fn render_home(
    records: &[CustomerRecord],
    session: &SessionState,
    search_term: &str,
    status_filter: Option<&str>,
) -> DashboardView {
    let customers = query::filter_records(records, search_term, status_filter)
        .into_iter()
        .map(|record| customer_row(record, session.is_selected(&record.identity_card_number)))
        .collect();

    DashboardView::Home {
        customers,
        selected_count: session.selected_count(),
        status_options: STATUS_FILTER_OPTIONS.to_vec(),
    }
}

pub fn render_add_customer() -> DashboardView {
    DashboardView::AddCustomer {
        identity_card_options: IDENTITY_CARD_OPTIONS.to_vec(),
        room_type_options: ROOM_TYPE_OPTIONS.to_vec(),
        payment_options: PAYMENT_OPTIONS.to_vec(),
        food_service_options: FOOD_SERVICE_OPTIONS.to_vec(),
    }
}

pub fn render_conversation(identity_card_number: &str, turns: &[ConversationTurn]) -> DashboardView {
    DashboardView::ShowConversation {
        identity_card_number: identity_card_number.to_string(),
        turns: turns
            .iter()
            .map(|turn| TurnView {
                speaker: turn.speaker.label(),
                text: turn.display_text(),
            })
            .collect(),
    }
}

fn customer_row(record: &CustomerRecord, selected: bool) -> CustomerRow {
    CustomerRow {
        identity_card_number: record.identity_card_number.clone(),
        full_name: record.full_name.clone(),
        age: record.age,
        identity_card: record.identity_card.as_str().to_string(),
        phone_number: record.phone_number.clone(),
        room_type: record.room_type.as_str().to_string(),
        number_of_rooms: record.number_of_rooms,
        check_in_date: record.check_in_date.format("%Y-%m-%d").to_string(),
        check_out_date: record.check_out_date.format("%Y-%m-%d").to_string(),
        food_service: record.food_service.as_str().to_string(),
        total_bill_amount: record.total_bill_amount.to_string(),
        payment_option: record.payment_option.as_str().to_string(),
        booking_status: record.booking_status.as_str().to_string(),
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BookingStatus, FoodService, IdentityCardKind, PaymentOption, RoomType, Speaker,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn record(id: &str, name: &str, status: BookingStatus) -> CustomerRecord {
        CustomerRecord {
            identity_card_number: id.to_string(),
            full_name: name.to_string(),
            age: 42,
            identity_card: IdentityCardKind::VoterId,
            phone_number: "+15550001111".to_string(),
            room_type: RoomType::Suite,
            number_of_rooms: 2,
            check_in_date: NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 10, 8).unwrap(),
            food_service: FoodService::Yes,
            total_bill_amount: Decimal::new(123450, 2),
            payment_option: PaymentOption::CreditCard,
            booking_status: status,
            conversation: vec![],
        }
    }

    #[test]
    fn test_home_marks_selected_rows() {
        let records = vec![
            record("A1", "Alice", BookingStatus::Pending),
            record("B2", "Bob", BookingStatus::Booked),
        ];
        let mut session = SessionState::new();
        session.toggle_selection("B2", true);

        let view = render_home(&records, &session, "", None);
        let DashboardView::Home {
            customers,
            selected_count,
            ..
        } = view
        else {
            panic!("expected home view");
        };

        assert_eq!(selected_count, 1);
        assert!(!customers[0].selected);
        assert!(customers[1].selected);
        assert_eq!(customers[1].booking_status, "Booked");
        assert_eq!(customers[1].total_bill_amount, "1234.50");
    }

    #[test]
    fn test_home_applies_search_and_status_filter() {
        let records = vec![
            record("A1", "Alice", BookingStatus::Pending),
            record("B2", "Bob", BookingStatus::Booked),
        ];
        let session = SessionState::new();

        let view = render_home(&records, &session, "ali", Some("All"));
        let DashboardView::Home { customers, .. } = view else {
            panic!("expected home view");
        };
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].identity_card_number, "A1");
    }

    #[test]
    fn test_conversation_turns_are_decoded_and_labeled() {
        let turns = vec![
            ConversationTurn {
                speaker: Speaker::Customer,
                message: r#"{"text":"Hello"}"#.to_string(),
            },
            ConversationTurn {
                speaker: Speaker::Agent,
                message: "Hi there".to_string(),
            },
        ];

        let view = render_conversation("A1", &turns);
        let DashboardView::ShowConversation {
            identity_card_number,
            turns,
        } = view
        else {
            panic!("expected conversation view");
        };

        assert_eq!(identity_card_number, "A1");
        assert_eq!(turns[0].speaker, "Customer");
        assert_eq!(turns[0].text, "Hello");
        assert_eq!(turns[1].speaker, "Agent");
        assert_eq!(turns[1].text, "Hi there");
    }

    #[test]
    fn test_empty_conversation_renders_no_turns() {
        let view = render_conversation("A1", &[]);
        let DashboardView::ShowConversation { turns, .. } = view else {
            panic!("expected conversation view");
        };
        assert!(turns.is_empty());
    }
}
