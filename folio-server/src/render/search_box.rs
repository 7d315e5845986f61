//! Render-time view of the search form
//!
//! The markup's clear button starts hidden. Running the widget's ready hook
//! against this view before emitting HTML means a pre-filled search already
//! shows the button, before the browser script has run.

use std::cell::{Cell, RefCell};

use folio_core::{escape_html, ClearButton, InputField, SearchClearWidget, Visibility};

pub const FORM_ID: &str = "search-form";
pub const INPUT_ID: &str = "search-input";
pub const CLEAR_ID: &str = "search-clear";

pub struct SearchBox {
    value: RefCell<String>,
    clear: Cell<Visibility>,
}

impl SearchBox {
    pub fn new(term: Option<&str>) -> Self {
        let search_box = Self {
            value: RefCell::new(term.unwrap_or_default().to_string()),
            clear: Cell::new(Visibility::Hidden),
        };
        SearchClearWidget::new(Some(&search_box), Some(&search_box), None).on_ready();
        search_box
    }

    pub fn to_html(&self) -> String {
        let hidden = if self.clear.get().is_visible() {
            ""
        } else {
            " hidden"
        };

        format!(
            r#"<form id="{FORM_ID}" class="search" action="/" method="get" role="search">
  <input id="{INPUT_ID}" type="search" name="search" value="{value}" placeholder="Search articles" autocomplete="off">
  <button id="{CLEAR_ID}" type="button" class="search-clear" aria-label="Clear search"{hidden}>&times;</button>
  <button type="submit">Search</button>
</form>"#,
            value = escape_html(&self.value.borrow()),
        )
    }
}

impl InputField for SearchBox {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl ClearButton for SearchBox {
    fn visibility(&self) -> Visibility {
        self.clear.get()
    }

    fn set_visibility(&self, visibility: Visibility) {
        self.clear.set(visibility);
    }
}
