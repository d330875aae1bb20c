/*!
 * IPC Module
 * System V semaphore set and shared memory removal
 */

pub mod sem;
pub mod shm;
pub mod types;

// Re-export for convenience
pub use sem::remove_semaphore_set;
pub use shm::remove_shared_memory;
pub use types::ResourceKind;

use crate::errors::RemoveError;

/// Remove the resource selected by `kind`, identified by `id`.
///
/// A single attempt: any failure is returned to the caller with the
/// OS-reported cause attached.
pub fn remove(kind: ResourceKind, id: i32) -> Result<(), RemoveError> {
    match kind {
        ResourceKind::Semaphore => remove_semaphore_set(id),
        ResourceKind::SharedMemory => remove_shared_memory(id),
    }
}
