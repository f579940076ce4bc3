//! File system errors

use super::TccGrantError;

/// Creates an applications directory error
pub fn applications_dir_unreadable(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> TccGrantError {
    TccGrantError::ApplicationsDirUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}
