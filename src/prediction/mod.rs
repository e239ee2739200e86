pub mod controller;
pub mod display;
pub mod fields;
pub mod tier;
pub mod types;

pub use controller::{submit, BusyState, PredictionService, SubmitState};
pub use display::{Outcome, ResultDisplay};
pub use fields::{field_spec, format_slider_value, FieldKind, FieldSpec, FIELDS};
pub use tier::Tier;
pub use types::{FormPayload, PredictionBody};
