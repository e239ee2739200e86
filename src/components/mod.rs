pub mod field_input;
pub mod result_panel;
