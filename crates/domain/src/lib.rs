mod customer;
pub mod date;
mod product;
mod reminder;
pub mod reminder_feed;
mod reminder_window;
mod shared;
mod visit;

pub use customer::{Customer, Intention, IntentionDistribution};
pub use date::MonthDay;
pub use product::ProductPurchase;
pub use reminder::{ReminderEvent, ReminderKind, PRODUCT_FOLLOW_UP_DAYS};
pub use reminder_window::{InvalidWindowError, ReminderWindow};
pub use shared::entity::{Entity, ID};
pub use visit::Visit;
