use crate::cli::commands::{active_user, open_ledger, short_id};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, MealCategory};
use crate::ui::messages::info;
use crate::utils::colors::{RESET, colorize_tracked};
use crate::utils::date;
use crate::utils::{describe_category, fmt_grams, fmt_kcal};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_arg, all } = &cli.command {
        let user = active_user(cli, cfg);
        let ledger = open_ledger(cfg)?;

        if *all {
            if ledger.state().days.is_empty() {
                info("The ledger holds no day records.");
                return Ok(());
            }
            for day in &ledger.state().days {
                print_day(day);
            }
            return Ok(());
        }

        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        match ledger.day_record(d, &user) {
            None => info(format!("No meals recorded for user {} on {}.", user, d)),
            Some(day) => print_day(day),
        }
    }
    Ok(())
}

fn print_day(day: &DayRecord) {
    println!("\n📅 {} (user {})", day.date_str(), day.user_id);

    if day.categories.is_empty() {
        println!("   (empty day record)");
        return;
    }

    for category in MealCategory::ALL {
        let bucket = day.categories.bucket(category);
        if bucket.is_empty() {
            continue;
        }

        let (label, color) = describe_category(category.mc_as_str());
        println!("  {}{}{}", color, label, RESET);

        for meal in bucket {
            let marker = colorize_tracked(if meal.tracked { "✓" } else { "·" }, meal.tracked);
            let serving = if meal.serving.is_empty() {
                String::new()
            } else {
                format!(" ({})", meal.serving)
            };
            println!(
                "    {} {}{} [{}] {} | P {} | C {} | F {}",
                marker,
                meal.name,
                serving,
                short_id(&meal.id),
                fmt_kcal(meal.calories),
                fmt_grams(meal.protein),
                fmt_grams(meal.carbs),
                fmt_grams(meal.fat),
            );
        }
    }

    let totals = day.tracked_totals();
    println!(
        "  Tracked: {} | P {} | C {} | F {}",
        fmt_kcal(totals.calories),
        fmt_grams(totals.protein),
        fmt_grams(totals.carbs),
        fmt_grams(totals.fat),
    );
}
