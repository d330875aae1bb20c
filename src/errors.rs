/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Removal errors carrying the OS-reported cause
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum RemoveError {
    /// The semaphore removal call was rejected by the kernel
    #[error("failed to remove semaphore set {id}")]
    #[diagnostic(
        code(ipc::sem_remove_failed),
        help("The set may not exist, or the caller may lack permission. Check `ipcs -s`.")
    )]
    Semaphore {
        id: i32,
        #[source]
        source: io::Error,
    },

    /// The shared memory removal call was rejected by the kernel
    #[error("failed to remove shared memory segment {id}")]
    #[diagnostic(
        code(ipc::shm_remove_failed),
        help("The segment may not exist, or the caller may lack permission. Check `ipcs -m`.")
    )]
    SharedMemory {
        id: i32,
        #[source]
        source: io::Error,
    },
}

impl RemoveError {
    /// Raw errno behind this failure, when the OS reported one.
    pub fn os_error(&self) -> Option<i32> {
        match self {
            RemoveError::Semaphore { source, .. } | RemoveError::SharedMemory { source, .. } => {
                source.raw_os_error()
            }
        }
    }

    /// Identifier of the resource the failed call targeted.
    pub fn id(&self) -> i32 {
        match self {
            RemoveError::Semaphore { id, .. } | RemoveError::SharedMemory { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_operation() {
        let err = RemoveError::Semaphore {
            id: 42,
            source: io::Error::from_raw_os_error(libc::EINVAL),
        };
        assert_eq!(err.to_string(), "failed to remove semaphore set 42");

        let err = RemoveError::SharedMemory {
            id: 7,
            source: io::Error::from_raw_os_error(libc::EPERM),
        };
        assert_eq!(err.to_string(), "failed to remove shared memory segment 7");
    }

    #[test]
    fn test_os_error_exposes_errno() {
        let err = RemoveError::SharedMemory {
            id: 7,
            source: io::Error::from_raw_os_error(libc::EPERM),
        };
        assert_eq!(err.os_error(), Some(libc::EPERM));
        assert_eq!(err.id(), 7);
    }
}
