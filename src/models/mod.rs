pub mod chekkulu;
pub mod cold_storage;
pub mod day_unit;
pub mod pay_method;
pub mod pay_status;
pub mod snapshot;
pub mod storage_place;
pub mod tool;
pub mod tool_move;
pub mod tool_status;
pub mod work_log;
pub mod work_type;
pub mod worker;
