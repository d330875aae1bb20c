/*!
 * Semaphore Removal
 * IPC_RMID against a System V semaphore set
 */

use crate::errors::RemoveError;
use log::info;
use std::io;

/// Remove the semaphore set identified by `id`.
///
/// Destruction is immediate: the kernel wakes every process blocked on
/// the set with an error.
pub fn remove_semaphore_set(id: i32) -> Result<(), RemoveError> {
    // semctl takes a semaphore number, which IPC_RMID ignores.
    let rc = unsafe { libc::semctl(id, 0, libc::IPC_RMID) };
    if rc == -1 {
        return Err(RemoveError::Semaphore {
            id,
            source: io::Error::last_os_error(),
        });
    }

    info!("removed semaphore set {}", id);
    Ok(())
}
