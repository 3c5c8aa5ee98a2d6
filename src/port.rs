//! Resolve TCP ports, asking the OS for a free one when port 0 is requested.
//!
//! A port returned by [`find_free`] is not reserved. The listener that
//! discovered it is closed before returning, so another process can bind the
//! same port before the caller gets to it. Callers that cannot tolerate this
//! should bind port 0 themselves and keep the socket.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use super::{ProbeError, Result};

/// Parse a base-10 port number. `"0"` means any free port.
///
/// The text must fit a `u16`: negative numbers and values above 65535 are
/// reported as `ProbeError::Parse` instead of being passed through.
pub fn parse(input: &str) -> Result<u16> {
    let port: u16 = input.parse().map_err(|e| ProbeError::Parse {
        input: input.to_owned(),
        source: e,
    })?;

    if port == 0 {
        find_free()
    } else {
        Ok(port)
    }
}

/// Let the OS pick an ephemeral port on the wildcard address and return it.
pub fn find_free() -> Result<u16> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0));

    let listener = TcpListener::bind(addr).map_err(|e| {
        tracing::warn!(addr = %addr, error = %e, "failed to listen");
        ProbeError::Bind {
            addr: addr.to_string(),
            source: e,
        }
    })?;

    let local = listener.local_addr().map_err(|e| ProbeError::Bind {
        addr: addr.to_string(),
        source: e,
    })?;

    Ok(local.port())
}
