//! Environment isolation for tests that read process-wide variables

use std::sync::Mutex;

/// Serializes tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `key` set to `value` (or removed when `None`), then restore it
///
/// The lock recovers from poisoning so one failed test does not cascade.
///
/// ```
/// use texcv_testkit::with_env_var;
///
/// let seen = with_env_var("TEXCV_EXAMPLE", Some("lualatex"), || {
///     std::env::var("TEXCV_EXAMPLE").unwrap()
/// });
/// assert_eq!(seen, "lualatex");
/// ```
pub fn with_env_var<F, R>(key: &str, value: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original = std::env::var(key).ok();

    // SAFETY: ENV_LOCK is held, so no other test in this binary touches the
    // environment concurrently.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    let result = f();

    // SAFETY: still holding ENV_LOCK.
    unsafe {
        match original {
            Some(original) => std::env::set_var(key, original),
            None => std::env::remove_var(key),
        }
    }

    result
}
