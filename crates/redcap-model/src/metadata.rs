//! Raw data dictionary row, as exported by REDCap.

use serde::{Deserialize, Serialize};

/// One dictionary row, attributes verbatim as captured. Blank means
/// absent; typing happens during schema compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRow {
    /// Unique field identifier, shared with the raw data table's column
    /// namespace.
    pub field_name: String,
    pub form_name: String,
    pub section_header: String,
    /// Raw field type string (`radio`, `text`, `descriptive`, ...).
    pub field_type: String,
    pub field_label: String,
    /// The "Choices, Calculations, OR Slider Labels" cell.
    pub choices: String,
    /// The "Text Validation Type OR Show Slider Number" cell.
    pub validation_kind: String,
    pub validation_min: String,
    pub validation_max: String,
}
