//! Read-only report handlers: day, week, month, year, total.
//! Each one runs a single aggregation against the ledger and prints it.

use crate::calendar::HolidayCalendar;
use crate::cli::commands::{calendar, open_db};
use crate::config::Config;
use crate::core::aggregate;
use crate::core::reconstruct::reconstruct_day;
use crate::db::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::workday::{DayCategory, WorkDay};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::time::{format_delta_hours, format_minutes};
use chrono::{Datelike, TimeDelta};

pub fn day(cfg: &Config, offset: i64) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let as_of = date::now();
    let target = date::today() + TimeDelta::days(offset);

    let entries = ledger::entries_for_day(&pool.conn, target)?;
    if entries.is_empty() {
        return Err(AppError::NoEntries(target.to_string()));
    }

    info(format!("Entries for {}:", target));
    for e in &entries {
        println!("  {:<10} {}", e.kind.to_db_str(), e.time_str());
    }

    let workday = reconstruct_day(target, &entries, cfg.daily_minutes(), as_of)?;
    if workday.category != DayCategory::Normal {
        println!(
            "Whole day recorded as {} ({} credited)",
            workday.category.label(),
            format_minutes(workday.worked_minutes())
        );
        return Ok(());
    }

    if workday.open {
        println!("You are currently at work.");
    }
    println!("You have worked {}", format_minutes(workday.worked_minutes()));
    Ok(())
}

pub fn week(cfg: &Config, offset: i64) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let cal = calendar(cfg);
    let as_of = date::now();
    let start = date::week_start(date::today()) + TimeDelta::days(7 * offset);

    let ww = aggregate::work_week(&pool.conn, &cal, start, cfg.daily_minutes(), as_of)?;

    info(format!("Statistics for week {:>02}:", start.iso_week().week()));
    println!("   date         hours     diff");
    println!("  ----------   -------   ------");
    for wd in &ww.days {
        println!("  {}   {}     {}", wd.date, format_minutes(wd.worked_minutes()), day_diff(cfg, wd, &cal));
    }
    println!("  ----------   -------   ------");
    println!(
        "   Expected:   {}",
        format_minutes(ww.expected_minutes)
    );
    println!(
        "      Total:   {}     {}",
        format_minutes(ww.actual_minutes),
        format_delta_hours(ww.delta_minutes())
    );
    Ok(())
}

fn day_diff(cfg: &Config, wd: &WorkDay, cal: &dyn HolidayCalendar) -> String {
    // Weekend or holiday work is all surplus.
    let expected = if cal.is_working_day(wd.date) {
        cfg.daily_minutes()
    } else {
        0
    };
    format_delta_hours(wd.worked_minutes() - expected)
}

pub fn month(cfg: &Config, month_arg: Option<&String>) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let cal = calendar(cfg);
    let as_of = date::now();

    let (year, month) = match month_arg {
        Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
        None => (as_of.date().year(), as_of.date().month()),
    };

    let wm = aggregate::work_month(
        &pool.conn,
        &cal,
        year,
        month,
        cfg.daily_minutes(),
        cfg.epoch_date()?,
        as_of,
    )?;

    info(format!("Statistics for {}-{:02}:", year, month));
    println!("   date         kind       hours");
    println!("  ----------   --------   -------");
    for wd in &wm.days {
        println!(
            "  {}   {:<8}   {}",
            wd.date,
            wd.category.label(),
            format_minutes(wd.worked_minutes())
        );
    }
    println!("  ----------   --------   -------");
    println!("   Expected:   {} working days, {}", wm.expected_days, format_minutes(wm.expected_minutes));
    println!(
        "     Actual:   {}   ({})",
        format_minutes(wm.actual_minutes),
        format_delta_hours(wm.delta_minutes())
    );
    Ok(())
}

pub fn year(
    cfg: &Config,
    year_arg: Option<i32>,
    from: Option<u32>,
    to: Option<u32>,
) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let cal = calendar(cfg);
    let as_of = date::now();

    let target = year_arg.unwrap_or_else(|| as_of.date().year());

    // Defaults: full year for past years, completed months for the running one.
    let from = from.unwrap_or(1);
    let to = to.unwrap_or_else(|| {
        if target == as_of.date().year() {
            as_of.date().month().saturating_sub(1).max(1)
        } else {
            12
        }
    });

    let wy = aggregate::work_year(
        &pool.conn,
        &cal,
        target,
        from,
        to,
        cfg.daily_minutes(),
        cfg.epoch_date()?,
        as_of,
    )?;

    info(format!(
        "Statistics for {} (months {:02}-{:02}):",
        target, wy.from_month, wy.to_month
    ));
    println!("   month       expected   actual     diff");
    println!("  ---------   --------   -------   ------");
    for wm in &wy.months {
        println!(
            "  {}-{:02}     {}      {}     {}",
            wm.year,
            wm.month,
            format_minutes(wm.expected_minutes),
            format_minutes(wm.actual_minutes),
            format_delta_hours(wm.delta_minutes())
        );
    }
    println!("  ---------   --------   -------   ------");
    println!(
        "      Total    {}      {}     {}",
        format_minutes(wy.expected_minutes),
        format_minutes(wy.actual_minutes),
        format_delta_hours(wy.delta_minutes())
    );
    Ok(())
}

pub fn total(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let cal = calendar(cfg);
    let as_of = date::now();

    let totals = aggregate::work_totals(
        &pool.conn,
        &cal,
        as_of.date().year(),
        cfg.daily_minutes(),
        cfg.epoch_date()?,
        as_of,
    )?;

    info(format!("Totals since {}:", cfg.epoch));
    println!("   year     expected    actual      diff");
    println!("  ------   ---------   -------    ------");
    for wy in &totals.years {
        println!(
            "  {}     {}      {}     {}",
            wy.year,
            format_minutes(wy.expected_minutes),
            format_minutes(wy.actual_minutes),
            format_delta_hours(wy.delta_minutes())
        );
    }
    println!("  ------   ---------   -------    ------");
    println!(
        "   Total    {}      {}     {}",
        format_minutes(totals.expected_minutes),
        format_minutes(totals.actual_minutes),
        format_delta_hours(totals.delta_minutes())
    );
    Ok(())
}
