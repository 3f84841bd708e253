use shared::domain::{ShoeDraft, ShoeId};

use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(ShoeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ShoeId),
    Updated(ShoeId),
    /// The record being edited no longer exists; nothing was written.
    NotFound(ShoeId),
}

impl SubmitOutcome {
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Added(_) => Some("Shoe added successfully!"),
            SubmitOutcome::Updated(_) => Some("Shoe updated successfully!"),
            SubmitOutcome::NotFound(_) => None,
        }
    }
}

/// Create/edit form state. Only a submit leaves `Editing`; there is no cancel.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    pub fields: ShoeDraft,
    mode: FormMode,
    scroll_requested: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<ShoeId> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Creating => None,
        }
    }

    /// Loads `id` into the fields. Returns false, changing nothing, when the
    /// record does not exist.
    pub fn begin_edit(&mut self, store: &RecordStore, id: ShoeId) -> bool {
        let Some(record) = store.get(id) else {
            return false;
        };
        self.fields = ShoeDraft::from_record(record);
        self.mode = FormMode::Editing(id);
        self.scroll_requested = true;
        tracing::debug!(%id, "editing shoe");
        true
    }

    /// One-shot request to bring the form into view after `begin_edit`.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    pub fn submit(&mut self, store: &mut RecordStore, candidate_id: ShoeId) -> SubmitOutcome {
        let draft = std::mem::take(&mut self.fields);
        let outcome = match self.mode {
            FormMode::Editing(id) => match store.update(id, draft.into_record(id)) {
                Ok(()) => SubmitOutcome::Updated(id),
                Err(_) => SubmitOutcome::NotFound(id),
            },
            FormMode::Creating => {
                let id = store.next_id(candidate_id);
                store.add(draft.into_record(id));
                SubmitOutcome::Added(id)
            }
        };
        self.mode = FormMode::Creating;
        outcome
    }

    /// Drops edit state when the edited record goes away.
    pub fn cancel_edit_if(&mut self, id: ShoeId) -> bool {
        if self.mode != FormMode::Editing(id) {
            return false;
        }
        self.mode = FormMode::Creating;
        self.fields.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puma() -> ShoeDraft {
        ShoeDraft {
            shoe_brand: " Puma ".to_string(),
            shoe_name: "Speed".to_string(),
            shoe_size: "8".to_string(),
            feet_shape: "Narrow".to_string(),
            source_link: "https://puma.com/speed".to_string(),
        }
    }

    #[test]
    fn submit_while_creating_adds_with_fresh_id() {
        let mut store = RecordStore::seeded().expect("seed");
        let mut form = FormController::new();
        form.fields = puma();

        let outcome = form.submit(&mut store, ShoeId(1));

        let SubmitOutcome::Added(id) = outcome else {
            panic!("expected add, got {outcome:?}");
        };
        assert_ne!(id, ShoeId(1));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(id).map(|r| r.shoe_brand.as_str()), Some("Puma"));
        assert_eq!(form.fields, ShoeDraft::default());
        assert_eq!(form.mode(), FormMode::Creating);
    }

    #[test]
    fn edit_populates_fields_and_submit_updates_in_place() {
        let mut store = RecordStore::seeded().expect("seed");
        let mut form = FormController::new();

        assert!(form.begin_edit(&store, ShoeId(2)));
        assert_eq!(form.mode(), FormMode::Editing(ShoeId(2)));
        assert_eq!(form.fields.shoe_brand, "Adidas");
        assert!(form.take_scroll_request());
        assert!(!form.take_scroll_request());

        form.fields.shoe_size = " 11 ".to_string();
        let outcome = form.submit(&mut store, ShoeId(999));

        assert_eq!(outcome, SubmitOutcome::Updated(ShoeId(2)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(ShoeId(2)).map(|r| r.shoe_size.as_str()), Some("11"));
        assert_eq!(store.get(ShoeId(1)).map(|r| r.shoe_brand.as_str()), Some("Nike"));
        assert_eq!(form.mode(), FormMode::Creating);
    }

    #[test]
    fn begin_edit_of_unknown_id_changes_nothing() {
        let store = RecordStore::seeded().expect("seed");
        let mut form = FormController::new();
        form.fields.shoe_name = "typed".to_string();
        assert!(!form.begin_edit(&store, ShoeId(77)));
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(form.fields.shoe_name, "typed");
    }

    #[test]
    fn submit_for_vanished_record_writes_nothing() {
        let mut store = RecordStore::seeded().expect("seed");
        let mut form = FormController::new();
        form.begin_edit(&store, ShoeId(1));
        store.remove(ShoeId(1));

        let outcome = form.submit(&mut store, ShoeId(5));

        assert_eq!(outcome, SubmitOutcome::NotFound(ShoeId(1)));
        assert_eq!(outcome.notice(), None);
        assert_eq!(store.len(), 1);
        assert_eq!(form.mode(), FormMode::Creating);
    }

    #[test]
    fn cancel_edit_if_only_affects_matching_id() {
        let store = RecordStore::seeded().expect("seed");
        let mut form = FormController::new();
        form.begin_edit(&store, ShoeId(1));
        assert!(!form.cancel_edit_if(ShoeId(2)));
        assert!(form.cancel_edit_if(ShoeId(1)));
        assert_eq!(form.mode(), FormMode::Creating);
        assert!(form.fields.shoe_brand.is_empty());
    }
}
