//! Available TCP port discovery.
//!
//! Probes an ordered list of candidate ports and returns the first one that
//! can currently be bound; when every candidate is taken, falls back to an
//! OS-assigned ephemeral port.
//!
//! ```no_run
//! let port = freeport::resolve(freeport::DEFAULT_HOST, &[8080, 3000])?;
//! println!("binding on {port}");
//! # Ok::<(), freeport::ResolveError>(())
//! ```

mod config;
mod resolver;

pub use config::{Config, DEFAULT_PORTS};
pub use resolver::{probe, resolve, ResolveError, DEFAULT_HOST};
