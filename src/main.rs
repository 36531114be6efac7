use std::sync::Arc;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trellis::config::Config;
use trellis::context::Context;
use trellis::encoding::Body;
use trellis::http::response::StatusCode;
use trellis::server::Server;

struct Greeting {
    banner: String,
}

#[derive(Serialize)]
struct Echo<'a> {
    method: &'a str,
    path: &'a str,
    params: Vec<(&'a str, &'a [String])>,
}

fn demo(ctx: &mut Context<'_>) -> anyhow::Result<Option<Body>> {
    let path = ctx.request().path_only().to_string();

    match path.as_str() {
        "/" => {
            let banner = ctx
                .user::<Greeting>()
                .map(|g| g.banner.clone())
                .unwrap_or_default();
            ctx.content_type("txt");
            Ok(Some(Body::from(banner)))
        }
        "/echo.json" | "/echo.yaml" => {
            let ext = path.rsplit('.').next().unwrap_or("json");
            ctx.content_type(ext);
            let request = ctx.request();
            let mut params: Vec<_> = ctx.params().iter().collect();
            params.sort_by_key(|(name, _)| *name);
            let echo = Echo {
                method: request.method.as_str(),
                path: request.path_only(),
                params,
            };
            Ok(Some(Body::structured(&echo)?))
        }
        "/old" => {
            ctx.redirect(StatusCode::MOVED_PERMANENTLY, "/");
            Ok(None)
        }
        "/admin" => {
            ctx.forbidden("Forbidden");
            Ok(None)
        }
        _ => {
            ctx.not_found("Page not found");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The real subscriber depends on the config, so loading logs through a
    // temporary one.
    let bootstrap = tracing_subscriber::fmt().with_target(false).finish();
    let cfg = tracing::subscriber::with_default(bootstrap, Config::load);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let server = Server::new(cfg, demo).with_user(Arc::new(Greeting {
        banner: "Hello from Trellis\n".to_string(),
    }));

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
