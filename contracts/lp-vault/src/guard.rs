use crate::storage::{is_locked, set_locked};
use soroban_sdk::Env;
use vault_types::VaultError;

/// Run `f` holding the vault-wide reentrancy lock.
///
/// A state-changing entry point reached while another one is still on the
/// call stack fails with `Reentrant`. On error the host discards the whole
/// invocation, lock write included.
pub fn non_reentrant<T>(
    env: &Env,
    f: impl FnOnce() -> Result<T, VaultError>,
) -> Result<T, VaultError> {
    if is_locked(env) {
        return Err(VaultError::Reentrant);
    }
    set_locked(env, true);
    let result = f();
    set_locked(env, false);
    result
}
