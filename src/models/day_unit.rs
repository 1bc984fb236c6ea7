use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayUnit {
    Full, // FULL
    Half, // HALF
}

impl DayUnit {
    pub fn code(&self) -> &'static str {
        match self {
            DayUnit::Full => "FULL",
            DayUnit::Half => "HALF",
        }
    }

    /// Convert cell/CLI string → enum (case insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "FULL" => Some(DayUnit::Full),
            "HALF" => Some(DayUnit::Half),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayUnit::Full => "Full day",
            DayUnit::Half => "Half day",
        }
    }
}

impl FromStr for DayUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayUnit::from_code(s).ok_or(())
    }
}
