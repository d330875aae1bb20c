/*!
 * Shared Memory Removal
 * IPC_RMID against a System V shared memory segment
 */

use crate::errors::RemoveError;
use log::info;
use std::io;
use std::ptr;

/// Remove the shared memory segment identified by `id`.
///
/// The kernel marks the segment for destruction; it is reclaimed once
/// the last attached process detaches.
pub fn remove_shared_memory(id: i32) -> Result<(), RemoveError> {
    let rc = unsafe { libc::shmctl(id, libc::IPC_RMID, ptr::null_mut()) };
    if rc == -1 {
        return Err(RemoveError::SharedMemory {
            id,
            source: io::Error::last_os_error(),
        });
    }

    info!("removed shared memory segment {}", id);
    Ok(())
}
