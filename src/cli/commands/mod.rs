pub mod absence;
pub mod config;
pub mod init;
pub mod report;
pub mod track;

use crate::calendar::germany::GermanCalendar;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and make sure the schema is current.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Holiday calendar for the configured region.
pub(crate) fn calendar(cfg: &Config) -> GermanCalendar {
    GermanCalendar::from_code(&cfg.region)
}
