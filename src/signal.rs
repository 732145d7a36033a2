//! SIGINT handling.
//!
//! The handler does nothing but store `true` into the flag of the token that
//! was installed first. The walk notices it at its next entry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use nix::libc::c_int;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

use crate::search::CancelToken;

static INTERRUPT_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

extern "C" fn on_interrupt(_signal: c_int) {
    if let Some(flag) = INTERRUPT_FLAG.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

/// Make SIGINT cancel `token` instead of killing the process.
///
/// Only the first token passed here is ever cancelled by the signal.
pub fn install_interrupt_handler(token: &CancelToken) -> nix::Result<()> {
    let _ = INTERRUPT_FLAG.set(token.flag());

    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    // SAFETY: the handler only performs an atomic load and an atomic store,
    // both async-signal-safe.
    unsafe { signal::sigaction(Signal::SIGINT, &action) }?;
    Ok(())
}
