use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToolStatus {
    Ok,          // OK
    NeedsRepair, // NEEDS_REPAIR
    Broken,      // BROKEN
}

impl ToolStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ToolStatus::Ok => "OK",
            ToolStatus::NeedsRepair => "NEEDS_REPAIR",
            ToolStatus::Broken => "BROKEN",
        }
    }

    /// Canonical codes (any case, `-` or `_`) plus the Telugu labels found in
    /// sheets written by the earlier front end.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "బాగుంది" => return Some(ToolStatus::Ok),
            "మరమ్మత్తు అవసరం" => return Some(ToolStatus::NeedsRepair),
            "పనిచేయడం లేదు" => return Some(ToolStatus::Broken),
            _ => {}
        }

        match code.trim().to_uppercase().replace('-', "_").as_str() {
            "OK" => Some(ToolStatus::Ok),
            "NEEDS_REPAIR" | "REPAIR" => Some(ToolStatus::NeedsRepair),
            "BROKEN" => Some(ToolStatus::Broken),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolStatus::Ok => "OK",
            ToolStatus::NeedsRepair => "Needs repair",
            ToolStatus::Broken => "Broken",
        }
    }

    pub fn needs_attention(&self) -> bool {
        !matches!(self, ToolStatus::Ok)
    }
}

impl FromStr for ToolStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolStatus::from_code(s).ok_or(())
    }
}
