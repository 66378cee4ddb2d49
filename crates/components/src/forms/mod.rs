mod button;
mod errors;
mod form_group;
mod searchable_select;
mod theme_toggle;
mod toggle_group;

pub use button::Button;
pub use errors::{extract_field_error, form_group_from_errors, map_form_group_validation, FieldValidation};
pub use form_group::FormGroup;
pub use searchable_select::SearchableSelect;
pub use theme_toggle::{ThemeMode, ThemeToggle};
pub use toggle_group::ToggleGroup;
