//! The meal ledger: per-user day records with derived macro totals.
//!
//! The ledger owns every [`DayRecord`] plus a per-user cache of
//! [`MacroTotals`], and is the single mutation path for both. State lives
//! behind an injected [`StateStore`]; every mutation rewrites the whole
//! snapshot into one storage slot, so the stored payload is always a full,
//! self-contained picture of the ledger.

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, MacroTotals, Meal, MealCategory, MealDraft};
use crate::storage::{LEDGER_SLOT, StateStore};
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized shape of the whole ledger. This is exactly what goes into
/// the storage slot on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerState {
    #[serde(default)]
    pub days: Vec<DayRecord>,
    /// Cached totals keyed by user id. Always recomputable from `days`.
    #[serde(default)]
    pub totals: BTreeMap<String, MacroTotals>,
}

/// State container for all meal data, generic over its persistence backend.
pub struct MealLedger<S: StateStore> {
    store: S,
    state: LedgerState,
}

impl<S: StateStore> MealLedger<S> {
    /// Rehydrate the ledger from the store's slot.
    ///
    /// An unreadable payload (older shape, hand-edited file) is not fatal:
    /// the ledger starts fresh and the next mutation overwrites the slot.
    pub fn open(mut store: S) -> AppResult<Self> {
        let state = match store.load(LEDGER_SLOT)? {
            None => LedgerState::default(),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(state) => state,
                Err(e) => {
                    warning(format!("Stored ledger state unreadable ({e}); starting fresh."));
                    LedgerState::default()
                }
            },
        };
        Ok(Self { store, state })
    }

    /// Give the backend back, e.g. to reopen the same ledger later.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    // ------------------------------------------------
    // Reads
    // ------------------------------------------------

    pub fn day_record(&self, date: NaiveDate, user_id: &str) -> Option<&DayRecord> {
        self.state
            .days
            .iter()
            .find(|d| d.date == date && d.user_id == user_id)
    }

    pub fn today_record(&self, user_id: &str) -> Option<&DayRecord> {
        self.day_record(Local::now().date_naive(), user_id)
    }

    /// Cached totals for `user_id`; zero when nothing was ever computed.
    pub fn macro_totals(&self, user_id: &str) -> MacroTotals {
        self.state
            .totals
            .get(user_id)
            .copied()
            .unwrap_or_default()
    }

    /// True when the user has no record for `date`, or an all-empty one.
    pub fn is_store_empty_on(&self, user_id: &str, date: NaiveDate) -> bool {
        match self.day_record(date, user_id) {
            None => true,
            Some(day) => day.categories.is_empty(),
        }
    }

    pub fn is_store_empty(&self, user_id: &str) -> bool {
        self.is_store_empty_on(user_id, Local::now().date_naive())
    }

    // ------------------------------------------------
    // Mutations
    // ------------------------------------------------

    /// Add a meal to today's record for `user_id`, slotted by the current
    /// local hour. See [`add_meal_at`](Self::add_meal_at).
    pub fn add_meal(&mut self, draft: MealDraft, user_id: &str) -> AppResult<Meal> {
        self.add_meal_at(draft, user_id, Local::now().naive_local())
    }

    /// Add a meal as if logged at `when`. The day record for
    /// `(when.date(), user_id)` is created on first use; the meal lands in
    /// the slot implied by `when`'s hour. A caller-supplied id must not
    /// collide with any meal already in that record.
    pub fn add_meal_at(
        &mut self,
        draft: MealDraft,
        user_id: &str,
        when: NaiveDateTime,
    ) -> AppResult<Meal> {
        let date = when.date();

        if let Some(id) = &draft.id
            && let Some(day) = self.day_record(date, user_id)
            && day.find_meal(id).is_some()
        {
            return Err(AppError::DuplicateMealId(id.clone()));
        }

        let meal = draft.into_meal();
        let category = MealCategory::for_hour(when.hour());

        let day = self.day_entry(date, user_id);
        day.categories.bucket_mut(category).push(meal.clone());

        self.recompute_totals(user_id);
        self.persist()?;
        self.store.record_op(
            "add_meal",
            &meal.id,
            &format!(
                "added '{}' under {} for user {}",
                meal.name,
                category.mc_as_str(),
                user_id
            ),
        )?;

        Ok(meal)
    }

    /// Remove the meal with `id` from today's record for `user_id`.
    /// Returns false (and writes nothing) when no such meal exists.
    pub fn remove_meal(&mut self, id: &str, user_id: &str) -> AppResult<bool> {
        self.remove_meal_on(id, user_id, Local::now().date_naive())
    }

    pub fn remove_meal_on(&mut self, id: &str, user_id: &str, date: NaiveDate) -> AppResult<bool> {
        let removed = match self.day_record_mut(date, user_id) {
            None => None,
            Some(day) => day.remove_meal(id),
        };

        let Some(meal) = removed else {
            return Ok(false);
        };

        self.recompute_totals(user_id);
        self.persist()?;
        self.store.record_op(
            "remove_meal",
            id,
            &format!("removed '{}' for user {}", meal.name, user_id),
        )?;
        Ok(true)
    }

    /// Mark the meal with `id` as tracked so it counts toward the totals.
    /// Re-tracking an already tracked meal still rewrites the snapshot.
    pub fn track_meal(&mut self, id: &str, user_id: &str) -> AppResult<bool> {
        self.track_meal_on(id, user_id, Local::now().date_naive())
    }

    pub fn track_meal_on(&mut self, id: &str, user_id: &str, date: NaiveDate) -> AppResult<bool> {
        let found = match self.day_record_mut(date, user_id) {
            None => false,
            Some(day) => day.set_tracked(id, true),
        };

        if !found {
            return Ok(false);
        }

        self.recompute_totals(user_id);
        self.persist()?;
        self.store.record_op(
            "track_meal",
            id,
            &format!("tracked meal for user {}", user_id),
        )?;
        Ok(true)
    }

    /// Bulk replace: drop every record belonging to `user_id` and insert
    /// the supplied ones instead. Records are normalized onto `user_id`;
    /// when two carry the same date the later one wins. Other users are
    /// untouched.
    pub fn populate_store(&mut self, records: Vec<DayRecord>, user_id: &str) -> AppResult<()> {
        self.state.days.retain(|d| d.user_id != user_id);

        for mut record in records {
            record.user_id = user_id.to_string();
            self.state
                .days
                .retain(|d| !(d.user_id == user_id && d.date == record.date));
            self.state.days.push(record);
        }

        self.recompute_totals(user_id);
        self.persist()?;
        self.store.record_op(
            "populate_store",
            user_id,
            &format!("replaced day records for user {}", user_id),
        )?;
        Ok(())
    }

    /// Global pruning: drop every day record whose date is not `today`,
    /// across all users, and rebuild the totals cache from what is left.
    /// Returns how many records were dropped. Irreversible.
    pub fn remove_old_meals(&mut self) -> AppResult<usize> {
        self.remove_old_meals_on(Local::now().date_naive())
    }

    pub fn remove_old_meals_on(&mut self, today: NaiveDate) -> AppResult<usize> {
        let before = self.state.days.len();
        self.state.days.retain(|d| d.date == today);
        let removed = before - self.state.days.len();

        if removed == 0 {
            return Ok(0);
        }

        self.rebuild_all_totals();
        self.persist()?;
        self.store.record_op(
            "remove_old_meals",
            "",
            &format!("pruned {} stale day records", removed),
        )?;
        Ok(removed)
    }

    /// Reset the whole ledger (all users, all days). Used on logout.
    pub fn clear_store(&mut self) -> AppResult<()> {
        self.state = LedgerState::default();
        self.persist()?;
        self.store.record_op("clear_store", "", "ledger reset to empty")?;
        Ok(())
    }

    // ------------------------------------------------
    // Internals
    // ------------------------------------------------

    fn day_record_mut(&mut self, date: NaiveDate, user_id: &str) -> Option<&mut DayRecord> {
        self.state
            .days
            .iter_mut()
            .find(|d| d.date == date && d.user_id == user_id)
    }

    /// Find-or-create the record for `(date, user_id)`.
    fn day_entry(&mut self, date: NaiveDate, user_id: &str) -> &mut DayRecord {
        let pos = match self
            .state
            .days
            .iter()
            .position(|d| d.date == date && d.user_id == user_id)
        {
            Some(pos) => pos,
            None => {
                self.state.days.push(DayRecord::new(date, user_id));
                self.state.days.len() - 1
            }
        };
        &mut self.state.days[pos]
    }

    /// Recompute the cached totals for one user from scratch. No deltas:
    /// the sum always re-scans every tracked meal the user has resident.
    fn recompute_totals(&mut self, user_id: &str) {
        let mut totals = MacroTotals::default();
        for day in self.state.days.iter().filter(|d| d.user_id == user_id) {
            for (_, meal) in day.categories.iter_all() {
                if meal.tracked {
                    totals.add_meal(meal);
                }
            }
        }
        self.state.totals.insert(user_id.to_string(), totals);
    }

    fn rebuild_all_totals(&mut self) {
        let users: Vec<String> = self
            .state
            .days
            .iter()
            .map(|d| d.user_id.clone())
            .collect();
        self.state.totals.clear();
        for user in users {
            if !self.state.totals.contains_key(&user) {
                self.recompute_totals(&user);
            }
        }
    }

    /// Serialize the whole state and hand it to the backend. The in-memory
    /// state is already updated when this runs; a failure surfaces to the
    /// caller as [`AppError::Persistence`] without rolling anything back.
    fn persist(&mut self) -> AppResult<()> {
        let payload = serde_json::to_string(&self.state)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        self.store.save(LEDGER_SLOT, &payload)
    }
}
