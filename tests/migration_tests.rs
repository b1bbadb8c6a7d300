use predicates::str::contains;

mod common;
use common::{ntl, setup_test_db};

use nutrilog::ledger::MealLedger;
use nutrilog::storage::SqliteStore;

/// Seed a pre-0.4.0 database: single-row ledger_state table, no kv_state.
fn seed_legacy_db(db_path: &str, json: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE ledger_state (
            id   INTEGER PRIMARY KEY,
            json TEXT NOT NULL
        );",
    )
    .expect("create legacy table");
    conn.execute("INSERT INTO ledger_state (id, json) VALUES (1, ?1)", [json])
        .expect("insert legacy row");
}

#[test]
fn test_legacy_ledger_state_folds_into_kv_state() {
    let db_path = setup_test_db("legacy_fold");

    let legacy_json = r#"{
        "days": [
            {
                "date": "2025-08-24",
                "user_id": "alice",
                "categories": {
                    "breakfast": [
                        {
                            "id": "m1",
                            "name": "Oatmeal",
                            "calories": 150.0,
                            "protein": 5.0,
                            "carbs": 27.0,
                            "fat": 3.0,
                            "serving": "",
                            "tracked": true
                        }
                    ],
                    "lunch": [],
                    "snack": [],
                    "dinner": []
                }
            }
        ],
        "totals": {
            "alice": { "calories": 150.0, "protein": 5.0, "carbs": 27.0, "fat": 3.0 }
        }
    }"#;
    seed_legacy_db(&db_path, legacy_json);

    // Opening the store runs the pending migrations
    let store = SqliteStore::open_and_init(&db_path).expect("open and migrate");
    let ledger = MealLedger::open(store).expect("open ledger");

    let day = ledger
        .day_record("2025-08-24".parse().expect("date"), "alice")
        .expect("migrated day record");
    assert_eq!(day.categories.breakfast[0].name, "Oatmeal");
    assert_eq!(ledger.macro_totals("alice").calories, 150.0);

    // The legacy table is gone, the payload now lives in kv_state
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let legacy: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='ledger_state'",
            [],
            |row| row.get(0),
        )
        .expect("count legacy");
    assert_eq!(legacy, 0);

    let slot: String = conn
        .query_row("SELECT slot FROM kv_state", [], |row| row.get(0))
        .expect("kv_state row");
    assert_eq!(slot, "meal-ledger");
}

#[test]
fn test_updated_at_column_added_once() {
    let db_path = setup_test_db("add_updated_at");

    // 0.4.0 schema: kv_state without the updated_at column
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE kv_state (
            slot    TEXT PRIMARY KEY,
            payload TEXT NOT NULL
        );",
    )
    .expect("create old kv_state");
    drop(conn);

    ntl()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20250712_0041_add_updated_at"))
        .stdout(contains("Migration completed."));

    // Running the migration again must not re-apply it
    ntl()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    let mut stmt = conn.prepare("PRAGMA table_info('kv_state')").expect("pragma");
    let cols: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .expect("columns")
        .map(|c| c.expect("column name"))
        .collect();
    assert!(cols.contains(&"updated_at".to_string()));

    let markers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation='migration_applied' AND target='20250712_0041_add_updated_at'",
            [],
            |row| row.get(0),
        )
        .expect("count markers");
    assert_eq!(markers, 1);
}

#[test]
fn test_fresh_db_needs_no_migrations() {
    let db_path = setup_test_db("fresh_no_migrations");

    ntl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // A database created with the modern schema carries no migration markers
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let markers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation='migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count markers");
    assert_eq!(markers, 0);

    // Re-opening is harmless
    SqliteStore::open_and_init(&db_path).expect("reopen");
}
