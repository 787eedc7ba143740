pub mod conversation;
pub mod customer;

pub use conversation::{ConversationTurn, Speaker};
pub use customer::{
    BookingStatus, CustomerRecord, FoodService, IdentityCardKind, PaymentOption, RoomType,
};
