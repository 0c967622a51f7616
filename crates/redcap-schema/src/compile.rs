//! The schema compiler: dictionary rows to an ordered field-name to
//! descriptor mapping.

use tracing::debug;

use redcap_model::{DESCRIPTIVE, DictionaryRow, FieldType, SchemaError};

use crate::descriptor::FieldDescriptor;

/// Compiled schema: field descriptors in dictionary order with by-name
/// lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Descriptors in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Names of the compound (checkbox) fields, in dictionary order.
    pub fn checkbox_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.field_type == FieldType::Checkbox)
            .map(|field| field.name.as_str())
    }
}

/// Compile a data dictionary into a [`Schema`].
///
/// Rows whose field type is `descriptive` carry no data and are dropped
/// before compilation. Remaining rows compile in their original order;
/// the first authoring defect aborts with an error naming the field.
pub fn compile(rows: &[DictionaryRow]) -> Result<Schema, SchemaError> {
    let mut fields = Vec::new();
    for row in rows {
        if row.field_type.trim() == DESCRIPTIVE {
            continue;
        }
        let descriptor = FieldDescriptor::from_row(row)?;
        debug!(field = %descriptor.name, field_type = %descriptor.field_type, "compiled field");
        fields.push(descriptor);
    }
    Ok(Schema { fields })
}
