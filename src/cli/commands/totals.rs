use crate::cli::commands::{active_user, open_ledger};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::fmt_kcal;
use crate::utils::table::{Column, Table};

/// Show the cached tracked totals against the configured daily targets.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = active_user(cli, cfg);
    let ledger = open_ledger(cfg)?;

    let totals = ledger.macro_totals(&user);
    let targets = cfg.targets;

    header(format!("Daily totals for {}", user));

    let mut table = Table::new(vec![
        Column::new("Macro", 10),
        Column::numeric("Eaten", 10),
        Column::numeric("Target", 10),
        Column::numeric("Remaining", 10),
    ]);

    let rows = [
        ("Calories", totals.calories, targets.calories),
        ("Protein", totals.protein, targets.protein),
        ("Carbs", totals.carbs, targets.carbs),
        ("Fat", totals.fat, targets.fat),
    ];

    for (label, eaten, target) in rows {
        table.add_row(vec![
            label.to_string(),
            format!("{:.0}", eaten),
            format!("{:.0}", target),
            format!("{:.0}", target - eaten),
        ]);
    }

    print!("{}", table.render());

    let remaining = targets.calories - totals.calories;
    let color = color_for_remaining(remaining);
    if remaining >= 0.0 {
        println!("\n{}Remaining today: {}{}", color, fmt_kcal(remaining), RESET);
    } else {
        println!(
            "\n{}Over target by {}{}",
            color,
            fmt_kcal(remaining.abs()),
            RESET
        );
    }

    Ok(())
}
