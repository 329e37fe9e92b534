//! List view projection.
//!
//! # Responsibility
//! - Project records into cards with formatted money/date labels.
//! - Provide empty-state copy when no records exist.
//!
//! # Invariants
//! - Card order equals store order.
//! - `empty_state` is `Some` iff `cards` is empty.
//! - Date labels use the viewer's calendar day, not the UTC day.

use crate::model::record::{RecordId, UserRecord};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// `toDateString()`-style label, e.g. `Thu Oct 16 2026`.
const DATE_LABEL_FORMAT: &str = "%a %b %d %Y";

/// One rendered row of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    /// Currency-prefixed amount, e.g. `Rs 500`.
    pub money_label: String,
    pub date_label: String,
}

/// Copy shown when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No users yet",
    hint: "Tap the + button to add one",
};

/// Full list view projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProjection {
    pub cards: Vec<RecordCard>,
    pub empty_state: Option<EmptyState>,
}

/// Projects `records` for display, prefixing amounts with `currency_label`
/// and labelling dates in the viewer's `offset`.
pub fn project_list(
    records: &[UserRecord],
    currency_label: &str,
    offset: FixedOffset,
) -> ListProjection {
    let cards = records
        .iter()
        .map(|record| project_card(record, currency_label, offset))
        .collect::<Vec<_>>();
    let empty_state = cards.is_empty().then_some(EMPTY_STATE);
    ListProjection { cards, empty_state }
}

pub fn project_card(
    record: &UserRecord,
    currency_label: &str,
    offset: FixedOffset,
) -> RecordCard {
    RecordCard {
        id: record.id.clone(),
        name: record.name.clone(),
        phone: record.phone.clone(),
        money_label: money_label(&record.money, currency_label),
        date_label: date_label(record.date, offset),
    }
}

fn money_label(money: &str, currency_label: &str) -> String {
    let currency = currency_label.trim();
    if currency.is_empty() {
        return money.to_string();
    }
    format!("{currency} {money}")
}

pub fn date_label(date: DateTime<Utc>, offset: FixedOffset) -> String {
    date.with_timezone(&offset).format(DATE_LABEL_FORMAT).to_string()
}

/// Current UTC offset of the host time zone.
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

/// Builds an offset from minutes east of UTC, as Dart's `timeZoneOffset`
/// reports it. Returns `None` outside +/- 24h.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}
