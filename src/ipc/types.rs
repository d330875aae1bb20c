/*!
 * IPC Types
 * Resource selectors shared by the removal operations
 */

use std::fmt;

/// Which System V resource family a removal targets
///
/// The selector keeps the historical two-way dispatch: zero picks the
/// semaphore path and every other value picks the shared memory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Semaphore,
    SharedMemory,
}

impl ResourceKind {
    pub fn from_selector(raw: i32) -> Self {
        if raw == 0 {
            ResourceKind::Semaphore
        } else {
            ResourceKind::SharedMemory
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Semaphore => write!(f, "semaphore set"),
            ResourceKind::SharedMemory => write!(f, "shared memory segment"),
        }
    }
}
