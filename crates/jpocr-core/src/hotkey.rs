use jpocr_config::HotkeyBinding;

/// OS service able to bind a global hotkey
pub trait HotkeyBackend {
    type Handle;

    fn register(&mut self, binding: &HotkeyBinding) -> anyhow::Result<Self::Handle>;

    fn unregister(&mut self, handle: Self::Handle) -> anyhow::Result<()>;
}

/// Holds at most one registration handle for the lifetime of the app
pub struct HotkeySlot<B: HotkeyBackend> {
    backend: B,
    handle: Option<B::Handle>,
}

impl<B: HotkeyBackend> HotkeySlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handle: None,
        }
    }

    /// Register `binding` unless a handle is already held. Failure leaves the
    /// app running without a hotkey.
    pub fn register(&mut self, binding: &HotkeyBinding) -> bool {
        if self.handle.is_some() {
            tracing::debug!("Hotkey already registered, keeping existing handle");
            return true;
        }

        match self.backend.register(binding) {
            Ok(handle) => {
                tracing::info!("Registered global hotkey {binding}");
                self.handle = Some(handle);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to register hotkey {binding}: {e:#}");
                false
            }
        }
    }

    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&B::Handle> {
        self.handle.as_ref()
    }

    /// Unregister the held handle. Returns whether an unregister was attempted.
    pub fn release(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        if let Err(e) = self.backend.unregister(handle) {
            tracing::warn!("Failed to unregister hotkey: {e:#}");
        } else {
            tracing::info!("Unregistered global hotkey");
        }
        true
    }
}

impl<B: HotkeyBackend> Drop for HotkeySlot<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Calls {
        registered: Cell<u32>,
        unregistered: Cell<u32>,
        live: Cell<i32>,
    }

    struct FakeBackend {
        calls: Rc<Calls>,
        fail: bool,
    }

    impl HotkeyBackend for FakeBackend {
        type Handle = u32;

        fn register(&mut self, _binding: &HotkeyBinding) -> anyhow::Result<u32> {
            self.calls.registered.set(self.calls.registered.get() + 1);
            if self.fail {
                anyhow::bail!("combination already taken");
            }
            self.calls.live.set(self.calls.live.get() + 1);
            Ok(1)
        }

        fn unregister(&mut self, _handle: u32) -> anyhow::Result<()> {
            self.calls.unregistered.set(self.calls.unregistered.get() + 1);
            self.calls.live.set(self.calls.live.get() - 1);
            Ok(())
        }
    }

    fn binding() -> HotkeyBinding {
        "Control+Command+M".parse().unwrap()
    }

    #[test]
    fn release_after_successful_registration_unregisters_once() {
        let calls = Rc::new(Calls::default());
        let mut slot = HotkeySlot::new(FakeBackend {
            calls: calls.clone(),
            fail: false,
        });
        assert!(slot.register(&binding()));
        assert!(slot.release());
        assert!(!slot.release());
        drop(slot);
        assert_eq!(calls.unregistered.get(), 1);
        assert_eq!(calls.live.get(), 0);
    }

    #[test]
    fn failed_registration_never_unregisters() {
        let calls = Rc::new(Calls::default());
        let mut slot = HotkeySlot::new(FakeBackend {
            calls: calls.clone(),
            fail: true,
        });
        assert!(!slot.register(&binding()));
        assert!(!slot.is_registered());
        assert!(!slot.release());
        drop(slot);
        assert_eq!(calls.unregistered.get(), 0);
    }

    #[test]
    fn release_without_registration_is_a_no_op() {
        let calls = Rc::new(Calls::default());
        let slot = HotkeySlot::new(FakeBackend {
            calls: calls.clone(),
            fail: false,
        });
        drop(slot);
        assert_eq!(calls.registered.get(), 0);
        assert_eq!(calls.unregistered.get(), 0);
    }

    #[test]
    fn repeated_registration_keeps_a_single_handle() {
        let calls = Rc::new(Calls::default());
        let mut slot = HotkeySlot::new(FakeBackend {
            calls: calls.clone(),
            fail: false,
        });
        for _ in 0..100 {
            assert!(slot.register(&binding()));
            assert_eq!(calls.live.get(), 1);
        }
        assert_eq!(calls.registered.get(), 1);
    }
}
