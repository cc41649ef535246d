//! Per-invocation admin resolution.
//!
//! No caching: the allow-list is read from the live configuration on every
//! message, so config edits apply to the next invocation without a restart.

use std::collections::HashSet;

/// Resolve whether the invoking user holds admin rights.
///
/// `admin_override` forces admin and is only set for trusted internal
/// re-dispatch (privileged replay); otherwise the user is admin iff the
/// allow-list is non-empty and contains their id.
pub fn resolve(user_id: &str, admin_override: bool, admin_users: &HashSet<String>) -> bool {
    if admin_override {
        return true;
    }
    !admin_users.is_empty() && admin_users.contains(user_id)
}
