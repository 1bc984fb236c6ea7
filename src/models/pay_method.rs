use serde::Serialize;
use std::str::FromStr;

/// Label the earlier front end wrote for cash payments.
const CASH_LABEL_TE: &str = "నగదు";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayMethod {
    None, // "" (nothing paid yet)
    Cash, // cash
    Upi,  // UPI
}

impl PayMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PayMethod::None => "",
            PayMethod::Cash => "cash",
            PayMethod::Upi => "UPI",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Some(PayMethod::None);
        }
        if code == CASH_LABEL_TE {
            return Some(PayMethod::Cash);
        }
        match code.to_lowercase().as_str() {
            "cash" => Some(PayMethod::Cash),
            "upi" => Some(PayMethod::Upi),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayMethod::None => "-",
            PayMethod::Cash => "cash",
            PayMethod::Upi => "UPI",
        }
    }
}

impl FromStr for PayMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayMethod::from_code(s).ok_or(())
    }
}
