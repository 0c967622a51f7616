pub mod reshape;

pub use reshape::{ReshapeError, build_checkbox_frame, process_checkboxes};
