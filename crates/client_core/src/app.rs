//! The inventory screen as one explicit state object: store, form, query,
//! alert and pending confirmation, with the last rendered view kept current.

use std::time::Instant;

use chrono::{DateTime, Utc};
use shared::{
    domain::{ShoeId, ShoeRecord, SortKey},
    error::SeedError,
};

use crate::{
    form::{FormController, SubmitOutcome},
    notifier::AlertNotifier,
    store::RecordStore,
    view::{self, CardAction, RenderedView, ViewQuery},
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this shoe?";
pub const DELETED_NOTICE: &str = "Shoe deleted successfully!";

/// A delete awaiting the user's yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: ShoeId,
}

impl PendingDelete {
    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }
}

#[derive(Debug, Clone)]
pub struct InventoryApp {
    store: RecordStore,
    pub form: FormController,
    query: ViewQuery,
    alert: AlertNotifier,
    pending_delete: Option<PendingDelete>,
    rendered: RenderedView,
}

impl InventoryApp {
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(RecordStore::seeded()?, AlertNotifier::default()))
    }

    pub fn new(store: RecordStore, alert: AlertNotifier) -> Self {
        let query = ViewQuery::default();
        let rendered = view::render(store.all(), &query);
        Self {
            store,
            form: FormController::new(),
            query,
            alert,
            pending_delete: None,
            rendered,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn alert(&self) -> &AlertNotifier {
        &self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    pub fn view(&self) -> &RenderedView {
        &self.rendered
    }

    /// Count badge value: filtered records, not store size.
    pub fn count(&self) -> usize {
        self.rendered.count
    }

    pub fn visible(&self) -> Vec<&ShoeRecord> {
        view::visible(self.store.all(), &self.query)
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending_delete
    }

    fn rerender(&mut self) {
        self.rendered = view::render(self.store.all(), &self.query);
    }

    /// Every keystroke re-renders; no debounce.
    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.query.filter = text.into();
        self.rerender();
    }

    pub fn on_sort_change(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.rerender();
    }

    pub fn on_submit(&mut self, now: Instant) -> SubmitOutcome {
        self.on_submit_at(now, Utc::now())
    }

    pub fn on_submit_at(&mut self, now: Instant, wall_clock: DateTime<Utc>) -> SubmitOutcome {
        let outcome = self
            .form
            .submit(&mut self.store, ShoeId::from_timestamp(wall_clock));
        if let Some(notice) = outcome.notice() {
            self.alert.show(notice, now);
        }
        self.rerender();
        outcome
    }

    pub fn request_edit(&mut self, id: ShoeId) -> bool {
        self.form.begin_edit(&self.store, id)
    }

    pub fn request_delete(&mut self, id: ShoeId) -> Option<PendingDelete> {
        if !self.store.contains(id) {
            return None;
        }
        let pending = PendingDelete { id };
        self.pending_delete = Some(pending);
        Some(pending)
    }

    /// Completes a pending delete. Declining leaves everything untouched.
    pub fn resolve_delete(&mut self, confirmed: bool, now: Instant) -> Option<ShoeRecord> {
        let pending = self.pending_delete.take()?;
        if !confirmed {
            tracing::debug!(id = %pending.id, "delete declined");
            return None;
        }
        let removed = self.store.remove(pending.id)?;
        self.form.cancel_edit_if(pending.id);
        self.rerender();
        self.alert.show(DELETED_NOTICE, now);
        Some(removed)
    }

    pub fn dispatch(&mut self, action: CardAction) {
        match action {
            CardAction::Edit(id) => {
                self.request_edit(id);
            }
            CardAction::Delete(id) => {
                self.request_delete(id);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.alert.poll(now);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
