pub mod activity;
pub mod entry;
pub mod summary;
pub mod workday;
