use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes env-var mutation across tests and restores every touched
/// variable when dropped.
pub(crate) struct EnvScope {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvScope {
    pub(crate) fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.remember(key);
        // SAFETY: ENV_LOCK is held for the lifetime of this scope.
        unsafe {
            std::env::set_var(key, value);
        }
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.remember(key);
        // SAFETY: ENV_LOCK is held for the lifetime of this scope.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }

    fn remember(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(saved, _)| *saved == key) {
            self.saved.push((key, std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..) {
            // SAFETY: restoration happens before the lock guard is released.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
