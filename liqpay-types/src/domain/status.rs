//! Payment and subscription status.

use serde::{Deserialize, Serialize};

define_wire_values! {
    /// Status of a payment or subscription as reported by the gateway.
    ///
    /// The gateway drives every transition; this type only carries the token.
    /// See [`Status::class`] for the informal life-cycle grouping.
    Status {
        /// Failed payment, incorrectly filled data
        ERROR => "error",
        /// Failed payment
        FAILURE => "failure",
        /// Payment refunded
        REVERSED => "reversed",
        /// Subscription created
        SUBSCRIBED => "subscribed",
        /// Successful payment
        SUCCESS => "success",
        /// Subscription deactivated
        UNSUBSCRIBED => "unsubscribed",

        /// 3DS verification required
        THREE_DS_VERIFY => "3ds_verify",
        /// Awaiting captcha confirmation
        CAPTCHA_VERIFY => "captcha_verify",
        /// CVV verification required
        CVV_VERIFY => "cvv_verify",
        /// Awaiting IVR call confirmation
        IVR_VERIFY => "ivr_verify",
        /// OTP confirmation required
        OTP_VERIFY => "otp_verify",
        /// Awaiting Privat24 app password confirmation
        PASSWORD_VERIFY => "password_verify",
        /// Awaiting phone number input
        PHONE_VERIFY => "phone_verify",
        /// Awaiting pin-code confirmation
        PIN_VERIFY => "pin_verify",
        /// Receiver data input required
        RECEIVER_VERIFY => "receiver_verify",
        /// Sender data input required
        SENDER_VERIFY => "sender_verify",
        /// Awaiting confirmation in the Privat24 app
        SENDERAPP_VERIFY => "senderapp_verify",
        /// Awaiting QR code scanning
        WAIT_QR => "wait_qr",
        /// Awaiting confirmation in the Privat24/SENDER app
        WAIT_SENDER => "wait_sender",

        /// Awaiting cash payment at a terminal
        CASH_WAIT => "cash_wait",
        /// Amount blocked on the sender's account
        HOLD_WAIT => "hold_wait",
        /// Invoice created, awaiting payment
        INVOICE_WAIT => "invoice_wait",
        /// Payment created, awaiting completion by the sender
        PREPARED => "prepared",
        /// Payment is being processed
        PROCESSING => "processing",
        /// Funds deducted, merchant not verified yet
        WAIT_ACCEPT => "wait_accept",
        /// Refund method not set for the recipient
        WAIT_CARD => "wait_card",
        /// Successful, credited in the daily posting
        WAIT_COMPENSATION => "wait_compensation",
        /// Letter of credit, awaiting delivery confirmation
        WAIT_LC => "wait_lc",
        /// Funds reserved for a refund
        WAIT_RESERVE => "wait_reserve",
        /// Payment under verification
        WAIT_SECURE => "wait_secure",
    }
}

/// Informal life-cycle grouping of [`Status`] tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// No further change is expected.
    Terminal,
    /// The end user has to confirm something.
    AwaitingConfirmation,
    /// The gateway or a bank is still working on it.
    InFlight,
}

impl Status {
    /// Returns the life-cycle class, or `None` for a token outside the set.
    pub fn class(&self) -> Option<StatusClass> {
        let class = match self.as_str() {
            "error" | "failure" | "reversed" | "subscribed" | "success" | "unsubscribed" => {
                StatusClass::Terminal
            }
            "3ds_verify" | "captcha_verify" | "cvv_verify" | "ivr_verify" | "otp_verify"
            | "password_verify" | "phone_verify" | "pin_verify" | "receiver_verify"
            | "sender_verify" | "senderapp_verify" | "wait_qr" | "wait_sender" => {
                StatusClass::AwaitingConfirmation
            }
            "cash_wait" | "hold_wait" | "invoice_wait" | "prepared" | "processing"
            | "wait_accept" | "wait_card" | "wait_compensation" | "wait_lc" | "wait_reserve"
            | "wait_secure" => StatusClass::InFlight,
            _ => return None,
        };
        Some(class)
    }

    pub fn is_terminal(&self) -> bool {
        self.class() == Some(StatusClass::Terminal)
    }

    pub fn awaits_confirmation(&self) -> bool {
        self.class() == Some(StatusClass::AwaitingConfirmation)
    }
}
