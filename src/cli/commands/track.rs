//! Handlers for the four tracking transitions (morning / break / resume /
//! closing), including the interactive same-day re-arrival confirmation.

use crate::cli::commands::open_db;
use crate::config::Config;
use crate::core::guard::{self, StartDay};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{self, success};
use crate::utils::date;

pub fn morning(cfg: &Config, assume_yes: bool) -> AppResult<()> {
    let mut pool = open_db(cfg)?;
    let now = date::now();

    match guard::start_day(&pool.conn, now)? {
        StartDay::Started(ts) => {
            success(format!("Day started at {}", ts.format("%H:%M")));
        }
        StartDay::NeedsConfirmation(leave_ts) => {
            let prompt = format!(
                "You already left today at {}. Continue the same work day?",
                leave_ts.format("%H:%M")
            );
            let confirmed = assume_yes || messages::confirm(&prompt)?;
            if !confirmed {
                return Err(AppError::NotIdle(
                    "re-arrival declined, nothing was recorded".to_string(),
                ));
            }

            guard::confirm_restart(&mut pool.conn, now)?;
            success(format!(
                "Welcome back. The {} leave became a break; resumed at {}",
                leave_ts.format("%H:%M"),
                now.format("%H:%M")
            ));
        }
    }
    Ok(())
}

pub fn take_break(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let ts = guard::start_break(&pool.conn, date::now())?;
    success(format!("Break started at {}", ts.format("%H:%M")));
    Ok(())
}

pub fn resume(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let ts = guard::resume_work(&pool.conn, date::now())?;
    success(format!("Work resumed at {}", ts.format("%H:%M")));
    Ok(())
}

pub fn closing(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let ts = guard::end_day(&pool.conn, date::now())?;
    success(format!("Day closed at {}. See you tomorrow!", ts.format("%H:%M")));
    Ok(())
}
