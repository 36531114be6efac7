use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::server::App;

pub async fn run(listen_addr: &str, app: Arc<App>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let app = Arc::clone(&app);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
