pub mod choices;
pub mod compile;
pub mod descriptor;
mod strategies;

pub use choices::parse_choices;
pub use compile::{Schema, compile};
pub use descriptor::FieldDescriptor;
pub use strategies::CHECKBOX_SEP;
