//! Project status, payment state, and the payment-completion guard.
//!
//! Two quirks of the legacy data feed are absorbed here so the rest of the
//! system only ever sees canonical values:
//!
//! - One creation path historically sent the statuses `selesai` / `batal`
//!   instead of `done` / `canceled`. Parsing accepts both and stores only
//!   the canonical vocabulary.
//! - The payment state is a string pair (`lunas` / `belum lunas`) but some
//!   callers send a JSON boolean. The [`PaymentState`] deserializer accepts
//!   either; everything past the request boundary is the enum.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Done,
    Canceled,
}

impl ProjectStatus {
    /// Canonical wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Done => "done",
            ProjectStatus::Canceled => "canceled",
        }
    }

    /// Parse a status string. Accepts the canonical vocabulary plus the
    /// legacy aliases `selesai` (done) and `batal` (canceled).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "done" | "selesai" => Ok(ProjectStatus::Done),
            "canceled" | "batal" => Ok(ProjectStatus::Canceled),
            other => Err(CoreError::Validation(format!(
                "Invalid project status '{other}'. Must be one of: ongoing, done, canceled"
            ))),
        }
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProjectStatus::parse(&value)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ProjectStatus::parse(&s).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Payment state
// ---------------------------------------------------------------------------

/// Whether a project has been fully paid.
///
/// Wire and storage values are the literal strings `"lunas"` (paid) and
/// `"belum lunas"` (unpaid). Deserialization additionally accepts JSON
/// booleans (`true` is paid) for compatibility with older callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentState {
    Paid,
    #[default]
    Unpaid,
}

impl PaymentState {
    pub const PAID: &'static str = "lunas";
    pub const UNPAID: &'static str = "belum lunas";

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentState::Paid => Self::PAID,
            PaymentState::Unpaid => Self::UNPAID,
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            Self::PAID => Ok(PaymentState::Paid),
            Self::UNPAID => Ok(PaymentState::Unpaid),
            other => Err(CoreError::Validation(format!(
                "Invalid payment state '{other}'. Must be '{}' or '{}'",
                Self::PAID,
                Self::UNPAID
            ))),
        }
    }

    pub fn is_paid(self) -> bool {
        self == PaymentState::Paid
    }
}

impl From<bool> for PaymentState {
    fn from(paid: bool) -> Self {
        if paid {
            PaymentState::Paid
        } else {
            PaymentState::Unpaid
        }
    }
}

impl TryFrom<String> for PaymentState {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PaymentState::parse(&value)
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaymentStateVisitor;

        impl Visitor<'_> for PaymentStateVisitor {
            type Value = PaymentState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "'{}', '{}', or a boolean",
                    PaymentState::PAID,
                    PaymentState::UNPAID
                )
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(PaymentState::from(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                PaymentState::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PaymentStateVisitor)
    }
}

// ---------------------------------------------------------------------------
// Payment method
// ---------------------------------------------------------------------------

/// How a project is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Qris,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Qris => "qris",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            "qris" => Ok(PaymentMethod::Qris),
            other => Err(CoreError::Validation(format!(
                "Invalid payment method '{other}'. Must be one of: cash, transfer, qris"
            ))),
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PaymentMethod::parse(&value)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the required project fields on create/update.
pub fn validate_fields(title: &str, total_bill: i64, paid_amount: i64) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Project title must not be empty".into()));
    }
    if total_bill < 0 {
        return Err(CoreError::Validation("totalBill must not be negative".into()));
    }
    if paid_amount < 0 {
        return Err(CoreError::Validation("paidAmount must not be negative".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Payment guard
// ---------------------------------------------------------------------------

/// Enforce the payment-completion invariant over the EFFECTIVE field values
/// of a write (incoming changes merged over the stored record).
///
/// Marking a project paid, or moving it to the terminal `done` status, is
/// rejected while `total_bill - paid_amount > 0`. The rejection carries
/// [`CoreError::PaymentIncomplete`] and the caller must not persist any part
/// of the write.
pub fn check_payment_guard(
    status: ProjectStatus,
    paid: PaymentState,
    total_bill: i64,
    paid_amount: i64,
) -> Result<(), CoreError> {
    let remaining = total_bill - paid_amount;
    if (paid.is_paid() || status == ProjectStatus::Done) && remaining > 0 {
        return Err(CoreError::PaymentIncomplete(format!(
            "Cannot mark project as {} while a balance of {remaining} remains",
            if paid.is_paid() { "paid" } else { "done" }
        )));
    }
    Ok(())
}

/// View-side classification: a project is completed when it is both done
/// and fully paid. Never stored; recomputed on every read.
pub fn is_completed(status: ProjectStatus, paid: PaymentState) -> bool {
    status == ProjectStatus::Done && paid.is_paid()
}
