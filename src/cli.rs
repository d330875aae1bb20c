/*!
 * Command Line Interface
 * Argument surface for the removal tool
 */

use crate::ipc::ResourceKind;
use clap::Parser;

/// ipckill - remove a System V IPC resource by kernel identifier
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Resource selector: 0 targets a semaphore set, any other value a
    /// shared memory segment
    pub kind: i32,

    /// Kernel identifier of the resource, as reported by ipcs(1)
    pub id: i32,
}

impl Args {
    pub fn resource_kind(&self) -> ResourceKind {
        ResourceKind::from_selector(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_and_id() {
        let args = Args::try_parse_from(["ipckill", "0", "12345"]).unwrap();
        assert_eq!(args.kind, 0);
        assert_eq!(args.id, 12345);
        assert_eq!(args.resource_kind(), ResourceKind::Semaphore);
    }

    #[test]
    fn test_negative_values_parse_as_integers() {
        let args = Args::try_parse_from(["ipckill", "-7", "-1"]).unwrap();
        assert_eq!(args.kind, -7);
        assert_eq!(args.id, -1);
        assert_eq!(args.resource_kind(), ResourceKind::SharedMemory);
    }

    #[test]
    fn test_missing_arguments_are_a_usage_error() {
        let err = Args::try_parse_from(["ipckill", "0"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_non_numeric_arguments_are_rejected() {
        let err = Args::try_parse_from(["ipckill", "zero", "1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
