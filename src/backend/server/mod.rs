use crate::{
    backend::utils::error::BackendResult,
    frontend::{
        api::ApiClient,
        app::{shell, App},
    },
};
use assets::file_and_error_handler;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Extension,
    Router,
};
use leptos::{config::get_config_from_str, prelude::*};
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::info;
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

mod assets;

pub(super) async fn start_server(
    client: ApiClient,
    addr: SocketAddr,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    let mut leptos_options = get_config_from_str(include_str!("../../../Cargo.toml"))?;
    leptos_options.site_addr = addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
        .layer(Extension(client))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    if let Some(notify_start) = notify_start {
        // the caller may have stopped waiting
        notify_start.send(()).ok();
    }
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Renders the app with the configured article source client in context
async fn leptos_routes_handler(
    Extension(client): Extension<ApiClient>,
    State(leptos_options): State<LeptosOptions>,
    request: Request<Body>,
) -> Response {
    let leptos_options_ = leptos_options.clone();
    let handler = leptos_axum::render_app_async_with_context(
        move || {
            provide_context(leptos_options_.clone());
            provide_context(client.clone());
        },
        move || shell(leptos_options.clone()),
    );

    handler(request).await.into_response()
}
