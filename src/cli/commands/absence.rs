use crate::cli::commands::open_db;
use crate::config::Config;
use crate::core::guard;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a whole-day absence marker (sick / vacation / time off).
pub fn handle(cfg: &Config, kind: Activity, date_arg: Option<&String>) -> AppResult<()> {
    let day = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    let pool = open_db(cfg)?;
    guard::record_absence(&pool.conn, kind, day, date::now())?;

    success(format!("Recorded {} for {}", kind.to_db_str(), day));
    Ok(())
}
