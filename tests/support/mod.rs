use std::sync::Mutex;

// Env vars are process-global; serialize the tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily set or removed.
///
/// Restores the previous values afterwards, including on panic, so tests
/// cannot leak configuration into each other.
///
/// Each entry in `changes` is `(key, value)`: `Some(v)` sets the variable,
/// `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");

    let mut saved: Vec<(String, Option<String>)> = Vec::with_capacity(changes.len());
    for (key, value) in changes {
        if !saved.iter().any(|(k, _)| k == key) {
            saved.push((key.to_string(), std::env::var(key).ok()));
        }
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    struct Restore(Vec<(String, Option<String>)>);
    impl Drop for Restore {
        fn drop(&mut self) {
            for (key, value) in self.0.drain(..) {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
    let _restore = Restore(saved);

    f()
}
