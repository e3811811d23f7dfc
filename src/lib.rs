// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing_subscriber::{fmt::format::FmtSpan, prelude::*};

/// The port the server listens on and the client connects to.
pub const DEFAULT_PORT: u16 = 50051;

/// This is the service definition. It looks a lot like a trait definition.
/// It defines one RPC, foo, which takes one arg, name, and returns a String.
#[tarpc::service]
pub trait Simple {
    /// Returns a greeting for name.
    async fn foo(name: String) -> String;
}

/// The reply message for `name`: the literal prefix `DEMO ` followed by the
/// name, unchanged.
pub fn greeting(name: &str) -> String {
    format!("DEMO {name}")
}

/// Initializes a tracing subscriber that writes to stderr. RUST_LOG overrides
/// the default `info` filter.
pub fn init_tracing(service_name: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
        )
        .try_init()?;
    tracing::debug!("tracing initialized for {service_name}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::greeting;

    #[test]
    fn greeting_prefixes_name() {
        assert_eq!(greeting("world"), "DEMO world");
        assert_eq!(greeting(""), "DEMO ");
        assert_eq!(greeting("múndo"), "DEMO múndo");
    }
}
