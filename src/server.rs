// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use futures::{future, prelude::*};
use service::{greeting, init_tracing, Simple, DEFAULT_PORT};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tarpc::{
    context,
    server::{self, incoming::Incoming, Channel},
    tokio_serde::formats::Json,
};

// This is the type that implements the generated Simple trait. It is the business logic
// and is used to start the server.
#[derive(Clone)]
struct SimpleServer(SocketAddr);

impl Simple for SimpleServer {
    async fn foo(self, _: context::Context, name: String) -> String {
        tracing::debug!("Foo({name}) from {}", self.0);
        greeting(&name)
    }
}

async fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(fut);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("hellorpc-server")?;

    let server_addr = (IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT);

    let mut listener = tarpc::serde_transport::tcp::listen(&server_addr, Json::default).await?;
    tracing::info!("Server listening on {}", listener.local_addr());
    listener.config_mut().max_frame_length(usize::MAX);
    listener
        // Ignore accept errors.
        .filter_map(|r| future::ready(r.ok()))
        .map(server::BaseChannel::with_defaults)
        // Limit channels to 1 per IP.
        .max_channels_per_key(1, |t| t.transport().peer_addr().unwrap().ip())
        // serve is generated by the service attribute. It takes as input any type implementing
        // the generated Simple trait.
        .map(|channel| {
            let server = SimpleServer(channel.transport().peer_addr().unwrap());
            channel.execute(server.serve()).for_each(spawn)
        })
        // Max 10 channels.
        .buffer_unordered(10)
        .for_each(|_| async {})
        .await;

    Ok(())
}
