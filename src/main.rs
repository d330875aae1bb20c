/*!
 * ipckill - Main Entry Point
 * Removes a single System V IPC resource named by its kernel identifier
 */

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use ipckill::{init_tracing, ipc, Args};

fn main() -> ExitCode {
    init_tracing();

    // Wrong arity and non-numeric input exit 2 with a usage message.
    let args = Args::parse();

    let kind = args.resource_kind();
    debug!("removing {} {}", kind, args.id);

    match ipc::remove(kind, args.id) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.source() {
                Some(cause) => eprintln!("ipckill: {}: {}", err, cause),
                None => eprintln!("ipckill: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}
