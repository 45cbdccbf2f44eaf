//! Body Scroll Lock
//!
//! Overlays suppress background scrolling by forcing `overflow: hidden` on
//! the body. The previous inline value is saved on lock and written back on
//! unlock, so closing an overlay always restores the exact pre-open scroll
//! state. Locking twice must not clobber the saved value.

/// Save/restore state machine for the body `overflow` style.
#[derive(Debug, Default)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    pub const fn new() -> Self {
        Self { saved: None }
    }

    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// Save the current overflow value and return the value to write, or
    /// `None` when already locked.
    pub fn lock(&mut self, current: String) -> Option<&'static str> {
        if self.saved.is_some() {
            return None;
        }
        self.saved = Some(current);
        Some("hidden")
    }

    /// Return the saved overflow value to restore, or `None` when not
    /// locked.
    pub fn unlock(&mut self) -> Option<String> {
        self.saved.take()
    }
}

/// Apply the lock state to the document body. Every exit path (flag toggle
/// or component teardown) must call this with `locked = false`.
pub fn sync_body_scroll(lock: &mut ScrollLock, locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    let Some(body) = body else {
        return;
    };
    let style = body.style();

    if locked {
        let current = style.get_property_value("overflow").unwrap_or_default();
        if let Some(value) = lock.lock(current) {
            let _ = style.set_property("overflow", value);
        }
    } else if let Some(previous) = lock.unlock() {
        if previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_restores_previous_value() {
        let mut lock = ScrollLock::new();

        assert_eq!(lock.lock("auto".to_string()), Some("hidden"));
        assert!(lock.is_locked());
        assert_eq!(lock.unlock(), Some("auto".to_string()));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_double_lock_keeps_first_saved_value() {
        let mut lock = ScrollLock::new();

        assert_eq!(lock.lock("scroll".to_string()), Some("hidden"));
        // Second overlay opening while the first is still up.
        assert_eq!(lock.lock("hidden".to_string()), None);
        assert_eq!(lock.unlock(), Some("scroll".to_string()));
    }

    #[test]
    fn test_unlock_without_lock_is_noop() {
        let mut lock = ScrollLock::new();

        assert_eq!(lock.unlock(), None);
        assert_eq!(lock.unlock(), None);
    }
}
