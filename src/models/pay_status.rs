use serde::Serialize;
use std::str::FromStr;

/// Payment state of a work log. Variant order is the progress rank:
/// `Unpaid < Partial < Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PayStatus {
    Unpaid,
    Partial,
    Paid,
}

impl PayStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PayStatus::Unpaid => "UNPAID",
            PayStatus::Partial => "PARTIAL",
            PayStatus::Paid => "PAID",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "UNPAID" => Some(PayStatus::Unpaid),
            "PARTIAL" => Some(PayStatus::Partial),
            "PAID" => Some(PayStatus::Paid),
            _ => None,
        }
    }

    pub fn is_outstanding(&self) -> bool {
        !matches!(self, PayStatus::Paid)
    }
}

impl FromStr for PayStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayStatus::from_code(s).ok_or(())
    }
}
