// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use service::{init_tracing, SimpleClient, DEFAULT_PORT};
use std::{
    net::{IpAddr, SocketAddr},
    process,
};
use tarpc::{client, context, tokio_serde::formats::Json};

#[derive(Parser)]
struct Flags {
    /// IP address of the server to greet.
    addr: IpAddr,

    /// The name to say hello to.
    #[clap(long, default_value = "world")]
    name: String,
}

async fn foo(server_addr: SocketAddr, name: String) -> anyhow::Result<String> {
    let mut transport = tarpc::serde_transport::tcp::connect(server_addr, Json::default);
    transport.config_mut().max_frame_length(usize::MAX);

    // SimpleClient is generated by the service attribute. It has a constructor new that takes a
    // config and any transport as input.
    let client = SimpleClient::new(client::Config::default(), transport.await?).spawn();

    let message = client.foo(context::current(), name).await?;
    Ok(message)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let flags = Flags::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            // Malformed arguments exit 1, not clap's default 2.
            let _ = e.print();
            process::exit(1);
        }
        // --help prints to stdout and exits 0.
        e.exit();
    });
    init_tracing("hellorpc-client")?;

    let server_addr = SocketAddr::new(flags.addr, DEFAULT_PORT);
    match foo(server_addr, flags.name.clone()).await {
        Ok(message) => println!("Foo({}): {message}", flags.name),
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("RPC failed");
            process::exit(1);
        }
    }

    Ok(())
}
