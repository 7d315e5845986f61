use std::cell::{Cell, RefCell};

use folio_core::{ClearButton, InputField, SearchClearWidget, SearchForm, Visibility};
use proptest::prelude::*;

struct Input(RefCell<String>);

impl InputField for Input {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

struct Button(Cell<Visibility>);

impl ClearButton for Button {
    fn visibility(&self) -> Visibility {
        self.0.get()
    }

    fn set_visibility(&self, visibility: Visibility) {
        self.0.set(visibility);
    }
}

struct Form(Cell<usize>);

impl SearchForm for Form {
    fn submit(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn arb_visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![Just(Visibility::Visible), Just(Visibility::Hidden)]
}

proptest! {
    /// Property: after a sync the button is visible iff the input is non-empty
    #[test]
    fn prop_sync_matches_value_length(value in ".*", start in arb_visibility()) {
        let input = Input(RefCell::new(value.clone()));
        let button = Button(Cell::new(start));
        let widget = SearchClearWidget::new(Some(&input), Some(&button), None);

        widget.sync_visibility();
        prop_assert_eq!(button.visibility().is_visible(), !value.is_empty());

        // Idempotent
        widget.sync_visibility();
        prop_assert_eq!(button.visibility().is_visible(), !value.is_empty());
    }

    /// Property: the invariant holds after every edit in a sequence
    #[test]
    fn prop_invariant_holds_across_edits(edits in prop::collection::vec(".{0,4}", 1..20)) {
        let input = Input(RefCell::new(String::new()));
        let button = Button(Cell::new(Visibility::Hidden));
        let widget = SearchClearWidget::new(Some(&input), Some(&button), None);
        widget.on_ready();

        for edit in edits {
            input.set_value(&edit);
            widget.on_input();
            prop_assert_eq!(button.visibility(), Visibility::for_value(&edit));
        }
    }

    /// Property: clearing always leaves an empty input, a hidden button, one submit
    #[test]
    fn prop_clear_resets_any_value(value in ".*", start in arb_visibility()) {
        let input = Input(RefCell::new(value));
        let button = Button(Cell::new(start));
        let form = Form(Cell::new(0));

        SearchClearWidget::new(Some(&input), Some(&button), Some(&form)).clear_and_submit();

        prop_assert_eq!(input.value(), "");
        prop_assert_eq!(button.visibility(), Visibility::Hidden);
        prop_assert_eq!(form.0.get(), 1);
    }
}
