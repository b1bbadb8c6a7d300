use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, ntl, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Initializing nutrilog"))
        .stdout(contains("initialization completed"));

    // Both tables must exist after init
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["kv_state", "log"] {
        let found: String = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("table present");
        assert_eq!(found, table);
    }
}

#[test]
fn test_add_slots_meal_by_hour() {
    let db_path = setup_test_db("add_slots_by_hour");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Oatmeal",
            "--calories",
            "150",
            "--protein",
            "5",
            "--carbs",
            "27",
            "--fat",
            "3",
            "--at",
            "08:00",
        ])
        .assert()
        .success()
        .stdout(contains("Added 'Oatmeal' (150 kcal) under breakfast for user alice"))
        .stdout(contains("Meal is not tracked yet"));

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Late snack",
            "--calories",
            "90",
            "--protein",
            "2",
            "--carbs",
            "12",
            "--fat",
            "4",
            "--at",
            "16:59",
        ])
        .assert()
        .success()
        .stdout(contains("under snack for user alice"));

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Dinner",
            "--calories",
            "700",
            "--protein",
            "30",
            "--carbs",
            "60",
            "--fat",
            "25",
            "--at",
            "17:00",
        ])
        .assert()
        .success()
        .stdout(contains("under dinner for user alice"));
}

#[test]
fn test_add_rejects_negative_macros() {
    let db_path = setup_test_db("add_rejects_negative");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "add",
            "Broken",
            "--calories",
            "-5",
            "--protein",
            "0",
            "--carbs",
            "0",
            "--fat",
            "0",
            "--at",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid macro value"));
}

#[test]
fn test_add_rejects_duplicate_id() {
    let db_path = setup_test_db("add_rejects_duplicate_id");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Salad",
            "--calories",
            "120",
            "--protein",
            "4",
            "--carbs",
            "10",
            "--fat",
            "7",
            "--id",
            "meal-1",
            "--at",
            "13:00",
        ])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Soup",
            "--calories",
            "90",
            "--protein",
            "3",
            "--carbs",
            "12",
            "--fat",
            "2",
            "--id",
            "meal-1",
            "--at",
            "13:00",
        ])
        .assert()
        .failure()
        .stderr(contains("A meal with id meal-1 already exists"));
}

#[test]
fn test_track_by_unique_prefix() {
    let db_path = setup_test_db("track_by_prefix");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Oatmeal",
            "--calories",
            "150",
            "--protein",
            "5",
            "--carbs",
            "27",
            "--fat",
            "3",
            "--id",
            "alpha-1",
            "--at",
            "08:00",
        ])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "alice",
            "add",
            "Coffee",
            "--calories",
            "5",
            "--protein",
            "0",
            "--carbs",
            "1",
            "--fat",
            "0",
            "--id",
            "beta-1",
            "--at",
            "08:10",
        ])
        .assert()
        .success();

    ntl()
        .args(["--db", &db_path, "--user", "alice", "track", "alp"])
        .assert()
        .success()
        .stdout(contains("Meal alpha-1 is now tracked."))
        .stdout(contains("Tracked today for alice: 150 kcal."));
}

#[test]
fn test_track_ambiguous_prefix_fails() {
    let db_path = setup_test_db("track_ambiguous_prefix");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for (name, id) in [("Oatmeal", "alpha-1"), ("Toast", "alpha-2")] {
        ntl()
            .args([
                "--db",
                &db_path,
                "--user",
                "alice",
                "add",
                name,
                "--calories",
                "100",
                "--protein",
                "3",
                "--carbs",
                "15",
                "--fat",
                "2",
                "--id",
                id,
                "--at",
                "08:00",
            ])
            .assert()
            .success();
    }

    ntl()
        .args(["--db", &db_path, "--user", "alice", "track", "alpha"])
        .assert()
        .failure()
        .stderr(contains("Ambiguous meal id prefix: alpha"));
}

#[test]
fn test_track_unknown_id_is_noop() {
    let db_path = setup_test_db("track_unknown_noop");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args(["--db", &db_path, "--user", "alice", "track", "ghost"])
        .assert()
        .success()
        .stdout(contains("No meal matching 'ghost' in today's record."));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_with_confirmation");
    init_db_with_data(&db_path);

    // Minted ids are UUIDs; read the breakfast one back from the snapshot
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let payload: String = conn
        .query_row(
            "SELECT payload FROM kv_state WHERE slot='meal-ledger'",
            [],
            |row| row.get(0),
        )
        .expect("payload");
    let state: serde_json::Value = serde_json::from_str(&payload).expect("parse state");
    let id = state["days"][0]["categories"]["breakfast"][0]["id"]
        .as_str()
        .expect("meal id")
        .to_string();
    drop(conn);

    // Answering "n" keeps the meal
    ntl()
        .args(["--db", &db_path, "--user", "alice", "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    ntl()
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Oatmeal"));

    ntl()
        .args(["--db", &db_path, "--user", "alice", "del", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Delete 'Oatmeal'"))
        .stdout(contains("Meal 'Oatmeal' has been deleted."));

    // --yes skips the prompt entirely
    ntl()
        .args(["--db", &db_path, "--user", "alice", "del", "--yes", "ghost"])
        .assert()
        .success()
        .stdout(contains("No meal matching 'ghost' in today's record."));
}

#[test]
fn test_list_today_and_missing_date() {
    let db_path = setup_test_db("list_today");
    init_db_with_data(&db_path);

    ntl()
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Breakfast"))
        .stdout(contains("Oatmeal"))
        .stdout(contains("Lunch"))
        .stdout(contains("Chicken bowl"))
        .stdout(contains("Tracked: 150 kcal"));

    // Another user sees nothing for today
    ntl()
        .args(["--db", &db_path, "--user", "bob", "list"])
        .assert()
        .success()
        .stdout(contains("No meals recorded for user bob"));

    // Dates must be well-formed
    ntl()
        .args(["--db", &db_path, "--user", "alice", "list", "--date", "24/08/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_totals_against_targets() {
    let db_path = setup_test_db("totals_against_targets");
    init_db_with_data(&db_path);

    // Only the tracked breakfast counts: 150 of the default 2000 kcal target
    ntl()
        .args(["--db", &db_path, "--user", "alice", "totals"])
        .assert()
        .success()
        .stdout(contains("Daily totals for alice"))
        .stdout(contains("Macro"))
        .stdout(contains("Calories"))
        .stdout(contains("Remaining today: 1850 kcal"));

    // A user with no tracked meals sits at the full target
    ntl()
        .args(["--db", &db_path, "--user", "bob", "totals"])
        .assert()
        .success()
        .stdout(contains("Remaining today: 2000 kcal"));
}

#[test]
fn test_clear_wipes_every_user() {
    let db_path = setup_test_db("clear_wipes_every_user");
    init_db_with_data(&db_path);

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "bob",
            "add",
            "Steak",
            "--calories",
            "600",
            "--protein",
            "50",
            "--carbs",
            "0",
            "--fat",
            "42",
            "--at",
            "20:00",
            "--tracked",
        ])
        .assert()
        .success();

    // Without confirmation nothing happens
    ntl()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    ntl()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Ledger cleared."));

    ntl()
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("No meals recorded for user alice"));

    ntl()
        .args(["--db", &db_path, "--user", "bob", "totals"])
        .assert()
        .success()
        .stdout(contains("Remaining today: 2000 kcal"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print_operations");
    init_db_with_data(&db_path);

    ntl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("init"))
        .stdout(contains("add_meal"));
}

#[test]
fn test_db_maintenance_flags() {
    let db_path = setup_test_db("db_maintenance_flags");
    init_db_with_data(&db_path);

    ntl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    ntl()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    ntl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Day records:"))
        .stdout(contains("Log lines:"));
}

#[test]
fn test_user_flag_isolates_profiles() {
    let db_path = setup_test_db("user_flag_isolates");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "A",
            "add",
            "Wrap",
            "--calories",
            "300",
            "--protein",
            "15",
            "--carbs",
            "35",
            "--fat",
            "9",
            "--at",
            "12:00",
            "--tracked",
        ])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            &db_path,
            "--user",
            "B",
            "add",
            "Yogurt",
            "--calories",
            "100",
            "--protein",
            "10",
            "--carbs",
            "12",
            "--fat",
            "2",
            "--at",
            "12:05",
            "--tracked",
        ])
        .assert()
        .success();

    ntl()
        .args(["--db", &db_path, "--user", "A", "totals"])
        .assert()
        .success()
        .stdout(contains("Remaining today: 1700 kcal"));

    ntl()
        .args(["--db", &db_path, "--user", "B", "totals"])
        .assert()
        .success()
        .stdout(contains("Remaining today: 1900 kcal"));

    ntl()
        .args(["--db", &db_path, "--user", "A", "list"])
        .assert()
        .success()
        .stdout(contains("Wrap"))
        .stdout(contains("Yogurt").not());
}
