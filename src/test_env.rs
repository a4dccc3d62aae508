use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

/// Serializes access to the process environment and removes `vars` on entry and on drop, so a failed assertion
/// cannot leak values into later tests.
pub(crate) struct EnvGuard {
    vars: Vec<&'static str>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn new(vars: &[&'static str]) -> Self {
        let lock = env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let guard = Self {
            vars: vars.to_vec(),
            _lock: lock,
        };
        guard.clear();
        guard
    }

    fn clear(&self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        self.clear();
    }
}
