use std::io;
use std::net::TcpListener;

use log::debug;
use thiserror::Error;

/// Interface the resolver probes when the caller does not pick one.
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The OS refused to hand out even an ephemeral port.
    #[error("could not allocate an ephemeral port: {0}")]
    Exhausted(#[from] io::Error),
}

/// Checks whether a TCP port can currently be bound on `host`.
///
/// The probe binds a listening socket and drops it before returning, so the
/// port is free again for the real consumer. Any bind failure (in use,
/// permission denied) counts as unavailable; the cause is not distinguished.
pub fn probe(host: &str, port: u16) -> bool {
    match TcpListener::bind(format!("{host}:{port}")) {
        Ok(_) => true,
        Err(err) => {
            debug!("port {port} unavailable: {err}");
            false
        }
    }
}

/// Returns the first bindable port from `candidates`, in list order.
///
/// When every candidate is taken, asks the OS for an ephemeral port by
/// binding to port 0 and returns the assigned number. That path only fails
/// when the OS cannot allocate any port at all, which is fatal.
///
/// Candidates equal to 0 are skipped: binding 0 always succeeds as an
/// assignment request, so a literal 0 would be reported available without
/// naming a port anyone can claim.
///
/// The probe socket is released before this returns, so another process can
/// still grab the port before the caller binds it for real. Callers must
/// tolerate that bind failing and resolve again.
pub fn resolve(host: &str, candidates: &[u16]) -> Result<u16, ResolveError> {
    for &port in candidates {
        if port == 0 {
            debug!("skipping candidate 0");
            continue;
        }
        if probe(host, port) {
            debug!("selected port {port}");
            return Ok(port);
        }
    }
    ephemeral(host)
}

/// Asks the OS for an arbitrary free port.
fn ephemeral(host: &str) -> Result<u16, ResolveError> {
    let listener = TcpListener::bind(format!("{host}:0"))?;
    let port = listener.local_addr()?.port();
    debug!("no candidate available, OS assigned {port}");
    Ok(port)
}
