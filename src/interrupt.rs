use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::flag;

use crate::error::Result;

/// Set once SIGINT is delivered. Cloned into the session and the input
/// sources, which poll it and take the save-and-abort path.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag that only `raise` can set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT into a new flag. A second SIGINT arriving after the first
    /// was noticed terminates immediately with status 1.
    pub fn install() -> Result<Self> {
        let interrupt = Self::new();
        flag::register_conditional_shutdown(SIGINT, 1, Arc::clone(&interrupt.raised))?;
        flag::register(SIGINT, Arc::clone(&interrupt.raised))?;
        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
