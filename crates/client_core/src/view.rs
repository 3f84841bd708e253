//! Filtering, ordering and markup for the visible shoe list.

use std::cmp::Ordering;

use shared::domain::{ShoeId, ShoeRecord, SortKey};
use thiserror::Error;

/// Characters of a source link shown on a card before it is cut short.
pub const LINK_DISPLAY_BUDGET: usize = 35;
pub const TRUNCATION_MARKER: &str = "...";

pub const EMPTY_TITLE: &str = "No shoes found";
pub const EMPTY_HINT: &str = "Try adjusting your search or add a new shoe";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: String,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn new(filter: impl Into<String>, sort: SortKey) -> Self {
        Self {
            filter: filter.into(),
            sort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub markup: String,
    /// Records left after filtering, not the store size.
    pub count: usize,
    pub is_empty: bool,
}

/// Records matching `query.filter`, ordered by `query.sort`.
pub fn visible<'a>(records: &'a [ShoeRecord], query: &ViewQuery) -> Vec<&'a ShoeRecord> {
    let needle = query.filter.to_lowercase();
    let mut list: Vec<&ShoeRecord> = records
        .iter()
        .filter(|r| r.matches_filter(&needle))
        .collect();
    list.sort_by(|a, b| compare(a, b, query.sort));
    list
}

fn compare(a: &ShoeRecord, b: &ShoeRecord, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Brand => compare_text(&a.shoe_brand, &b.shoe_brand),
        SortKey::Name => compare_text(&a.shoe_name, &b.shoe_name),
        SortKey::Recent => b.id.cmp(&a.id),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Display form of a link: unchanged when within `budget` characters,
/// otherwise the first `budget` characters followed by `...`.
pub fn truncate_link(url: &str, budget: usize) -> String {
    if url.chars().count() <= budget {
        return url.to_string();
    }
    let mut cut: String = url.chars().take(budget).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

pub fn render(records: &[ShoeRecord], query: &ViewQuery) -> RenderedView {
    let list = visible(records, query);
    tracing::debug!(
        filter = %query.filter,
        sort = query.sort.as_str(),
        count = list.len(),
        "rendering shoe list"
    );

    if list.is_empty() {
        return RenderedView {
            markup: empty_state_markup(),
            count: 0,
            is_empty: true,
        };
    }

    let markup = list.iter().map(|shoe| card_markup(shoe)).collect::<String>();
    RenderedView {
        markup,
        count: list.len(),
        is_empty: false,
    }
}

fn empty_state_markup() -> String {
    format!(
        "<div class=\"col-span-full empty-state\">\
         <p class=\"text-xl font-semibold text-gray-600\">{EMPTY_TITLE}</p>\
         <p class=\"text-gray-500 mt-2\">{EMPTY_HINT}</p>\
         </div>"
    )
}

fn card_markup(shoe: &ShoeRecord) -> String {
    let id = shoe.id;
    format!(
        "<div class=\"card group\" data-shoe-id=\"{id}\">\
         <div class=\"card-header\">\
         <div class=\"avatar\">{initial}</div>\
         <h3>{name}</h3>\
         </div>\
         <div class=\"card-body\">\
         <p><strong>Brand:</strong> {brand}</p>\
         <p><strong>Size:</strong> {size}</p>\
         <p><strong>Feet Shape:</strong> {shape}</p>\
         <p class=\"break-all\"><strong>Source:</strong><br>\
         <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{link_text}</a></p>\
         </div>\
         <div class=\"card-actions\">\
         <button class=\"edit-btn\" data-action=\"{edit}\" data-shoe-id=\"{id}\">Edit</button>\
         <button class=\"delete-btn\" data-action=\"{delete}\" data-shoe-id=\"{id}\">Delete</button>\
         </div>\
         </div>",
        initial = escape_html(&shoe.brand_initial()),
        name = escape_html(&shoe.shoe_name),
        brand = escape_html(&shoe.shoe_brand),
        size = escape_html(&shoe.shoe_size),
        shape = escape_html(&shoe.feet_shape),
        href = escape_html(&shoe.source_link),
        link_text = escape_html(&truncate_link(&shoe.source_link, LINK_DISPLAY_BUDGET)),
        edit = CardAction::EDIT,
        delete = CardAction::DELETE,
    )
}

/// A card button press, decoded from its `data-action` / `data-shoe-id` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit(ShoeId),
    Delete(ShoeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardActionError {
    #[error("unknown card action '{0}'")]
    UnknownAction(String),
    #[error("invalid shoe id '{0}'")]
    InvalidId(String),
}

impl CardAction {
    pub const EDIT: &'static str = "edit";
    pub const DELETE: &'static str = "delete";

    pub fn parse(action: &str, id: &str) -> Result<Self, CardActionError> {
        let id = id
            .parse::<ShoeId>()
            .map_err(|_| CardActionError::InvalidId(id.to_string()))?;
        match action {
            Self::EDIT => Ok(CardAction::Edit(id)),
            Self::DELETE => Ok(CardAction::Delete(id)),
            other => Err(CardActionError::UnknownAction(other.to_string())),
        }
    }

    pub fn shoe_id(self) -> ShoeId {
        match self {
            CardAction::Edit(id) | CardAction::Delete(id) => id,
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
