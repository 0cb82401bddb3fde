//! Per-row rewriting rules for pin tables

mod direction;
mod pin;

pub use direction::{infer_direction, Direction};
pub use pin::{append_pin_suffix, is_pin_number};
