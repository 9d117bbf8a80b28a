//! Assertion helpers for robot tests.

use crate::FieldRobot;
use metaform_foundation::ErrorStatus;

/// Assert that a field shows `expected` text and status.
pub fn assert_field(robot: &FieldRobot, text: &str, status: ErrorStatus, msg: &str) {
    assert_eq!(robot.text(), text, "{}: text", msg);
    assert_eq!(robot.status(), status, "{}: status", msg);
}

/// Assert that every character of `text` stays valid while it is typed.
pub fn assert_valid_while_typing(robot: &FieldRobot, text: &str, msg: &str) {
    for ch in text.chars() {
        robot.type_text(&ch.to_string());
        assert_eq!(
            robot.status(),
            ErrorStatus::Valid,
            "{}: status after typing '{}' (text '{}')",
            msg,
            ch,
            robot.text()
        );
    }
}
