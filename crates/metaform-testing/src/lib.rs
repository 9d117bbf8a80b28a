//! Testing utilities for metaform
//!
//! - [`fixtures`] - Sample beans with property tables
//! - [`robot`] - Drives widgets with synthetic key and focus events
//! - [`robot_assertions`] - Assertion helpers for field state

pub mod fixtures;
pub mod robot;
pub mod robot_assertions;

pub use robot::FieldRobot;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::robot::FieldRobot;
    pub use crate::robot_assertions::*;
}
