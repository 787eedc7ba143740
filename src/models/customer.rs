use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ConversationTurn;

/// Option lists offered by the add-customer form. The last entry of each
/// select is the free-text "Other" escape hatch.
pub const IDENTITY_CARD_OPTIONS: [&str; 4] = ["Adhar Card", "Passport", "Voter Id", "Other"];
pub const ROOM_TYPE_OPTIONS: [&str; 4] = ["Standard", "Deluxe", "Suite", "Other"];
pub const PAYMENT_OPTIONS: [&str; 4] = ["UPI", "Debit Card", "Credit Card", "Other"];
pub const FOOD_SERVICE_OPTIONS: [&str; 2] = ["Yes", "No"];
pub const STATUS_FILTER_OPTIONS: [&str; 4] = ["All", "Pending", "Booked", "Not Booked"];

/// One booking row, keyed by identity card number. The key is immutable
/// after creation; only `booking_status` is ever mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub identity_card_number: String,
    pub full_name: String,
    pub age: i64,
    pub identity_card: IdentityCardKind,
    pub phone_number: String,
    pub room_type: RoomType,
    pub number_of_rooms: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub food_service: FoodService,
    pub total_bill_amount: Decimal,
    pub payment_option: PaymentOption,
    pub booking_status: BookingStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation: Vec<ConversationTurn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Booked,
    #[serde(rename = "Not Booked")]
    NotBooked,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Booked => "Booked",
            BookingStatus::NotBooked => "Not Booked",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("booked") {
            BookingStatus::Booked
        } else if s.eq_ignore_ascii_case("not booked") {
            BookingStatus::NotBooked
        } else {
            BookingStatus::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdentityCardKind {
    AdharCard,
    Passport,
    VoterId,
    Other(String),
}

impl IdentityCardKind {
    pub fn as_str(&self) -> &str {
        match self {
            IdentityCardKind::AdharCard => "Adhar Card",
            IdentityCardKind::Passport => "Passport",
            IdentityCardKind::VoterId => "Voter Id",
            IdentityCardKind::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Adhar Card" => IdentityCardKind::AdharCard,
            "Passport" => IdentityCardKind::Passport,
            "Voter Id" => IdentityCardKind::VoterId,
            other => IdentityCardKind::Other(other.to_string()),
        }
    }
}

impl From<String> for IdentityCardKind {
    fn from(s: String) -> Self {
        IdentityCardKind::parse(&s)
    }
}

impl From<IdentityCardKind> for String {
    fn from(kind: IdentityCardKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Other(String),
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Standard" => RoomType::Standard,
            "Deluxe" => RoomType::Deluxe,
            "Suite" => RoomType::Suite,
            other => RoomType::Other(other.to_string()),
        }
    }
}

impl From<String> for RoomType {
    fn from(s: String) -> Self {
        RoomType::parse(&s)
    }
}

impl From<RoomType> for String {
    fn from(room: RoomType) -> Self {
        room.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentOption {
    Upi,
    DebitCard,
    CreditCard,
    Other(String),
}

impl PaymentOption {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentOption::Upi => "UPI",
            PaymentOption::DebitCard => "Debit Card",
            PaymentOption::CreditCard => "Credit Card",
            PaymentOption::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "UPI" => PaymentOption::Upi,
            "Debit Card" => PaymentOption::DebitCard,
            "Credit Card" => PaymentOption::CreditCard,
            other => PaymentOption::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentOption {
    fn from(s: String) -> Self {
        PaymentOption::parse(&s)
    }
}

impl From<PaymentOption> for String {
    fn from(option: PaymentOption) -> Self {
        option.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodService {
    Yes,
    No,
}

impl FoodService {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodService::Yes => "Yes",
            FoodService::No => "No",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("yes") {
            FoodService::Yes
        } else {
            FoodService::No
        }
    }
}
