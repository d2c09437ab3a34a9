//! Process hardening
//!
//! Mnemonics and seeds only ever live in memory. Disabling core dumps keeps
//! a crash from writing them to disk. Best-effort: containers and
//! unprivileged users may refuse, which is logged and otherwise ignored.

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Returns `true` once core dumps are off. Later calls return `true`
/// without touching the limit again.
///
/// ```
/// mnemo_core::memory::disable_core_dumps();
/// ```
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.load(Ordering::SeqCst) {
        return true;
    }

    let disabled = platform::disable_core_dumps();
    if disabled {
        CORE_DUMPS_DISABLED.store(true, Ordering::SeqCst);
    }
    disabled
}

#[cfg(unix)]
mod platform {
    use log::warn;

    pub fn disable_core_dumps() -> bool {
        let rlim = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit only reads the struct we pass by reference
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &rlim) };
        if result != 0 {
            warn!(
                "Failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        true
    }
}

#[cfg(not(unix))]
mod platform {
    pub fn disable_core_dumps() -> bool {
        log::warn!("Core dump prevention is not supported on this platform");
        false
    }
}
