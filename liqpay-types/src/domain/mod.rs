//! Domain values shared by every gateway payload.

#[macro_use]
mod macros;

pub mod amount;
pub mod datetime;
pub mod items;
pub mod status;
pub mod values;

pub use amount::{DecimalAmount, NumericAmount};
pub use datetime::{epoch_millis_to_utc, format_gateway_datetime};
pub use items::{InvoiceItem, Item, RroInfo};
pub use status::{Status, StatusClass};
pub use values::{Action, CancelInvoiceResult, Currency, Language, PayType, SubscribePeriod};

use crate::error::ValidationError;

/// Common surface of the generated value sets, used for field validation.
pub trait WireValue {
    fn token(&self) -> &str;

    fn is_member(&self) -> bool;

    /// Fails with the field's wire name when the token is outside the set.
    fn ensure_valid(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.is_member() {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue {
                field,
                value: self.token().to_string(),
            })
        }
    }
}
