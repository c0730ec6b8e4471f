//! Notify module - message formatting and delivery.

mod message;
mod notify_traits;
mod webhook;

pub use message::{format_amount, format_price_message};
pub use notify_traits::NotifierTrait;
pub use webhook::WebhookNotifier;
