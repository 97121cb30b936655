//! Unique test data built from ULIDs so tests never collide on
//! usernames or emails.

use ulid::Ulid;

/// Generate a unique alphanumeric username with the given prefix.
///
/// Author usernames must be alphanumeric, so no separator is used.
///
/// ```
/// use backend_test_support::unique_helpers::unique_username;
///
/// let a = unique_username("chef");
/// let b = unique_username("chef");
/// assert_ne!(a, b);
/// assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn unique_username(prefix: &str) -> String {
    format!("{}{}", prefix, Ulid::new()).to_lowercase()
}

/// Generate a unique email address with the given prefix.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("chef");
/// assert!(email.starts_with("chef-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}
