//! Enumerated values carried by requests and responses.
//!
//! All of these are open sets: deserializing an unknown token succeeds and the
//! caller checks membership with `is_valid()` before relying on it.

define_wire_values! {
    /// Operation kind of a request, echoed back in responses.
    Action {
        /// Default payment
        PAY => "pay",
        /// Hold the amount on the sender's account
        HOLD => "hold",
        /// Create a subscription
        SUBSCRIBE => "subscribe",
        /// Update a subscription
        SUBSCRIBE_UPDATE => "subscribe_update",
        /// Cancel a subscription
        UNSUBSCRIBE => "unsubscribe",
        /// Payment status
        STATUS => "status",
        /// Donation
        PAYDONATE => "paydonate",
        /// Split payment
        PAYSPLIT => "paysplit",
        /// Card preauthorization
        AUTH => "auth",
        /// Regular payment
        REGULAR => "regular",
        /// Refund a payment
        REFUND => "refund",
        /// Send an invoice
        INVOICE_SEND => "invoice_send",
        /// Cancel an invoice
        INVOICE_CANCEL => "invoice_cancel",
    }
}

define_wire_values! {
    /// Payment currency.
    Currency {
        USD => "USD",
        EUR => "EUR",
        UAH => "UAH",
    }
}

define_wire_values! {
    /// Language of the customer-facing pages.
    Language {
        UK => "uk",
        EN => "en",
    }
}

define_wire_values! {
    /// Payment method offered on the checkout page.
    PayType {
        APPLE_PAY => "apay",
        GOOGLE_PAY => "gpay",
        CARD => "card",
        /// Privat24 account
        PRIVAT24 => "privat24",
        /// Installments
        MOMENT_PART => "moment_part",
        /// Payment by parts
        PAYPART => "paypart",
        CASH => "cash",
        INVOICE => "invoice",
        /// QR code scanning
        QR => "qr",
    }
}

define_wire_values! {
    /// Cadence of a regular (subscription) payment.
    SubscribePeriod {
        DAY => "day",
        WEEK => "week",
        MONTH => "month",
        YEAR => "year",
    }
}

define_wire_values! {
    /// Outcome of an invoice cancellation.
    CancelInvoiceResult {
        OK => "ok",
        ERROR => "error",
    }
}

impl Action {
    /// Returns true for the operation kinds accepted on the checkout page.
    pub fn is_checkout_kind(&self) -> bool {
        [
            Self::PAY,
            Self::HOLD,
            Self::SUBSCRIBE,
            Self::PAYDONATE,
            Self::AUTH,
            Self::REGULAR,
            Self::PAYSPLIT,
        ]
        .contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_is_case_sensitive() {
        assert!(Currency::new("USD").is_valid());
        assert!(!Currency::new("usd").is_valid());
    }

    #[test]
    fn test_empty_token_is_never_valid() {
        assert!(!Action::new("").is_valid());
        assert!(!Currency::new("").is_valid());
        assert!(!Language::new("").is_valid());
        assert!(!PayType::new("").is_valid());
        assert!(!SubscribePeriod::new("").is_valid());
        assert!(!CancelInvoiceResult::new("").is_valid());
        assert!(!Action::default().is_valid());
    }

    #[test]
    fn test_every_member_is_valid() {
        assert_eq!(Action::ALL.len(), 13);
        assert!(Action::ALL.iter().all(Action::is_valid));
        assert_eq!(PayType::ALL.len(), 9);
        assert!(PayType::ALL.iter().all(PayType::is_valid));
        assert!(Currency::ALL.iter().all(Currency::is_valid));
        assert!(Language::ALL.iter().all(Language::is_valid));
        assert!(SubscribePeriod::ALL.iter().all(SubscribePeriod::is_valid));
        assert!(CancelInvoiceResult::ALL.iter().all(CancelInvoiceResult::is_valid));
    }

    #[test]
    fn test_wire_tokens() {
        assert_eq!(Action::SUBSCRIBE_UPDATE.as_str(), "subscribe_update");
        assert_eq!(PayType::APPLE_PAY.to_string(), "apay");
        assert_eq!(PayType::GOOGLE_PAY.to_string(), "gpay");
        assert_eq!(Language::UK.as_str(), "uk");
        assert_eq!(SubscribePeriod::MONTH.as_str(), "month");
    }

    #[test]
    fn test_owned_and_borrowed_tokens_compare_equal() {
        assert_eq!(Action::from("pay"), Action::PAY);
        assert_eq!(Currency::from(String::from("UAH")), Currency::UAH);
    }

    #[test]
    fn test_unknown_token_is_kept_verbatim() {
        let pay_type: PayType = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(pay_type.as_str(), "crypto");
        assert!(!pay_type.is_valid());
        assert_eq!(serde_json::to_string(&pay_type).unwrap(), "\"crypto\"");
    }

    #[test]
    fn test_checkout_kinds() {
        assert!(Action::PAY.is_checkout_kind());
        assert!(Action::PAYSPLIT.is_checkout_kind());
        assert!(!Action::REFUND.is_checkout_kind());
        assert!(!Action::new("PAY").is_checkout_kind());
    }
}
