pub mod cast;
pub mod choices;
pub mod column;
pub mod enums;
pub mod error;
pub mod metadata;
pub mod value;

pub use cast::{CastFallback, as_date, as_float, as_integer, as_string, as_time, cast_bound, cast_for_kind};
pub use choices::ChoiceMap;
pub use column::{ColumnDef, ColumnSpec, ColumnTransform, Recoder, TranslationMap, Validator};
pub use enums::{DESCRIPTIVE, DateOrder, FieldType, ValidationKind};
pub use error::{CastError, RecodeError, SchemaError};
pub use metadata::DictionaryRow;
pub use value::{CellValue, ValueType, is_null_like};
