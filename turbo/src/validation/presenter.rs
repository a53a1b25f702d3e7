//! Presentation adapter for form errors.

use indexmap::IndexMap;

use super::result::ErrorRecord;
use super::settings::ErrorDisplay;
use super::value::FieldValue;

/// A form that can hand over its values and display validation errors.
///
/// This is the only contact the validator has with the page. Implementors
/// resolve field names to controls however they like.
pub trait FormPresenter {
    /// Read the current value of every field, in form order.
    fn collect(&self) -> IndexMap<String, FieldValue>;

    /// Render error messages next to their fields.
    ///
    /// Fields that cannot be found are skipped.
    fn show_errors(&mut self, errors: &IndexMap<String, ErrorRecord>, display: ErrorDisplay);

    /// Remove every previously rendered error.
    fn clear_errors(&mut self);
}
