use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::errors::AppError;
use crate::models::{
    BookingStatus, ConversationTurn, CustomerRecord, FoodService, IdentityCardKind, PaymentOption,
    RoomType,
};

const CUSTOMER_COLUMNS: &str = "identity_card_number, full_name, age, identity_card, phone_number, \
     room_type, number_of_rooms, check_in_date, check_out_date, food_service, total_bill_amount, \
     payment_option, booking_status, conversation";

pub fn insert_customer(conn: &Connection, record: &CustomerRecord) -> Result<(), AppError> {
    let conversation = if record.conversation.is_empty() {
        None
    } else {
        serde_json::to_string(&record.conversation).ok()
    };

    let result = conn.execute(
        "INSERT INTO customers (identity_card_number, full_name, age, identity_card, phone_number, \
         room_type, number_of_rooms, check_in_date, check_out_date, food_service, \
         total_bill_amount, payment_option, booking_status, conversation)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            record.identity_card_number,
            record.full_name,
            record.age,
            record.identity_card.as_str(),
            record.phone_number,
            record.room_type.as_str(),
            record.number_of_rooms,
            record.check_in_date.format("%Y-%m-%d").to_string(),
            record.check_out_date.format("%Y-%m-%d").to_string(),
            record.food_service.as_str(),
            record.total_bill_amount.to_string(),
            record.payment_option.as_str(),
            record.booking_status.as_str(),
            conversation,
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateKey(record.identity_card_number.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn list_customers(conn: &Connection) -> Result<Vec<CustomerRecord>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY rowid ASC"
    ))?;

    let rows = stmt.query_map([], |row| Ok(parse_customer_row(row)))?;

    let mut customers = vec![];
    for row in rows {
        customers.push(row??);
    }
    Ok(customers)
}

pub fn set_booking_status(
    conn: &Connection,
    id: &str,
    status: BookingStatus,
) -> Result<bool, AppError> {
    let count = conn.execute(
        "UPDATE customers SET booking_status = ?1 WHERE identity_card_number = ?2",
        params![status.as_str(), id],
    )?;
    Ok(count > 0)
}

pub fn delete_customer(conn: &Connection, id: &str) -> Result<bool, AppError> {
    let count = conn.execute(
        "DELETE FROM customers WHERE identity_card_number = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

/// Projects only the conversation column. `Ok(None)` means the record itself
/// is absent; a present record with no transcript yields an empty vec.
pub fn get_conversation(
    conn: &Connection,
    id: &str,
) -> Result<Option<Vec<ConversationTurn>>, AppError> {
    let result = conn.query_row(
        "SELECT conversation FROM customers WHERE identity_card_number = ?1",
        params![id],
        |row| row.get::<_, Option<String>>(0),
    );

    match result {
        Ok(json) => {
            let turns = json
                .as_deref()
                .and_then(|j| serde_json::from_str(j).ok())
                .unwrap_or_default();
            Ok(Some(turns))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_customer_row(row: &rusqlite::Row) -> Result<CustomerRecord, AppError> {
    let identity_card_number: String = row.get(0)?;
    let full_name: String = row.get(1)?;
    let age: i64 = row.get(2)?;
    let identity_card: String = row.get(3)?;
    let phone_number: String = row.get(4)?;
    let room_type: String = row.get(5)?;
    let number_of_rooms: i64 = row.get(6)?;
    let check_in_date: String = row.get(7)?;
    let check_out_date: String = row.get(8)?;
    let food_service: String = row.get(9)?;
    let total_bill_amount: String = row.get(10)?;
    let payment_option: String = row.get(11)?;
    let booking_status: String = row.get(12)?;
    let conversation_json: Option<String> = row.get(13)?;

    let conversation = conversation_json
        .as_deref()
        .and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default();

    Ok(CustomerRecord {
        identity_card_number,
        full_name,
        age,
        identity_card: IdentityCardKind::parse(&identity_card),
        phone_number,
        room_type: RoomType::parse(&room_type),
        number_of_rooms,
        check_in_date: parse_date(&check_in_date),
        check_out_date: parse_date(&check_out_date),
        food_service: FoodService::parse(&food_service),
        total_bill_amount: Decimal::from_str(&total_bill_amount).unwrap_or_default(),
        payment_option: PaymentOption::parse(&payment_option),
        booking_status: BookingStatus::parse(&booking_status),
        conversation,
    })
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}
