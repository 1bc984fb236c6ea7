/// ANSI color helper utilities for terminal output.
use crate::models::pay_status::PayStatus;
use crate::models::tool_status::ToolStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_pay_status(status: PayStatus) -> &'static str {
    match status {
        PayStatus::Unpaid => RED,
        PayStatus::Partial => YELLOW,
        PayStatus::Paid => GREEN,
    }
}

pub fn color_for_tool_status(status: ToolStatus) -> &'static str {
    match status {
        ToolStatus::Ok => GREEN,
        ToolStatus::NeedsRepair => YELLOW,
        ToolStatus::Broken => RED,
    }
}

/// Wrap a value in a color, greying out empty values.
pub fn paint(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
