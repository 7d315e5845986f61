//! Search clear widget
//!
//! Keeps a clear button's visibility in sync with a search input and offers
//! a one-shot "clear and resubmit" action. The widget owns no state: it is
//! wired to three collaborators supplied by the hosting view, any of which
//! may be missing. Operations that touch a missing collaborator do nothing.
//!
//! ```text
//!            len > 0
//!   Hidden ----------> Visible
//!     ^                  |
//!     +------------------+
//!      len == 0 / clear_and_submit
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility of the clear button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Visibility the clear button must have for an input holding `value`.
    pub fn for_value(value: &str) -> Self {
        if value.is_empty() {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Text input holding the search query.
pub trait InputField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Button that clears the input.
pub trait ClearButton {
    fn visibility(&self) -> Visibility;
    fn set_visibility(&self, visibility: Visibility);
}

/// Form that owns the input and sends the query.
pub trait SearchForm {
    fn submit(&self);
}

/// Wires the clear button to the input and form of one view.
///
/// Collaborators are borrowed for the lifetime of the view, so the widget
/// is cheap to construct per event.
pub struct SearchClearWidget<'a> {
    input: Option<&'a dyn InputField>,
    button: Option<&'a dyn ClearButton>,
    form: Option<&'a dyn SearchForm>,
}

impl<'a> SearchClearWidget<'a> {
    pub fn new(
        input: Option<&'a dyn InputField>,
        button: Option<&'a dyn ClearButton>,
        form: Option<&'a dyn SearchForm>,
    ) -> Self {
        Self {
            input,
            button,
            form,
        }
    }

    /// Called once when the view becomes interactive.
    pub fn on_ready(&self) {
        self.sync_visibility();
    }

    /// Called on every value change of the input.
    pub fn on_input(&self) {
        self.sync_visibility();
    }

    /// Show the clear button iff the input is non-empty.
    pub fn sync_visibility(&self) {
        let (Some(input), Some(button)) = (self.input, self.button) else {
            return;
        };

        let wanted = Visibility::for_value(&input.value());
        if button.visibility() != wanted {
            debug!(visibility = ?wanted, "clear button visibility changed");
            button.set_visibility(wanted);
        }
    }

    /// Empty the input, hide the button, then submit the form once.
    pub fn clear_and_submit(&self) {
        if let Some(input) = self.input {
            input.set_value("");
        }
        if let Some(button) = self.button {
            button.set_visibility(Visibility::Hidden);
        }
        match self.form {
            Some(form) => form.submit(),
            None => debug!("no search form present, skipping submit"),
        }
    }
}
