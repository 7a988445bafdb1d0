//! Classification of driver errors the domain layers care about.

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server error code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Returns the server message when `err` is a unique index violation.
///
/// Covers both single-document writes (`insert_one`, `update_one`) and
/// command-style writes (`find_one_and_update`), which the driver reports
/// through different error kinds. The message names the violated index,
/// e.g. `E11000 duplicate key error collection: db.users index: username_1 ...`.
pub fn duplicate_key_message(err: &Error) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.as_str())
        }
        _ => None,
    }
}
