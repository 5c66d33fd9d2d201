//! Storefront backend server.
//!
//! Wires configuration, the PostgreSQL pool, adapters, and the axum
//! routers together, then serves until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storefront::adapters::auth::{Argon2PasswordHasher, JwtTokenIssuer, JwtTokenVerifier};
use storefront::adapters::http::cart::{cart_routes, CartAppState};
use storefront::adapters::http::middleware::{auth_middleware, AuthState};
use storefront::adapters::http::product::{product_routes, ProductAppState};
use storefront::adapters::http::user::{protected_user_routes, user_routes, UserAppState};
use storefront::adapters::postgres::{PostgresCartStore, PostgresProductCatalog, PostgresUserStore};
use storefront::config::AppConfig;
use storefront::ports::{CartStore, PasswordHasher, ProductCatalog, TokenIssuer, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.server.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let catalog: Arc<dyn ProductCatalog> = Arc::new(PostgresProductCatalog::new(pool.clone()));
    let store: Arc<dyn CartStore> = Arc::new(PostgresCartStore::new(pool.clone()));
    let users: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(pool));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(&config.auth));
    let verifier: AuthState = Arc::new(JwtTokenVerifier::new(&config.auth));

    let product_state = ProductAppState {
        catalog: catalog.clone(),
    };
    let cart_state = CartAppState { store, catalog };
    let user_state = UserAppState {
        store: users,
        hasher,
        issuer,
    };

    let cart_router = cart_routes().with_state(cart_state).layer(
        middleware::from_fn_with_state(verifier.clone(), auth_middleware),
    );
    let user_router = user_routes().with_state(user_state.clone()).merge(
        protected_user_routes()
            .with_state(user_state)
            .layer(middleware::from_fn_with_state(
                verifier.clone(),
                auth_middleware,
            )),
    );

    let app = Router::new()
        .nest("/api/products", product_routes().with_state(product_state))
        .nest("/api/cart", cart_router)
        .nest("/api/users", user_router)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config)?);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "storefront listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        if config.server.permissive_cors() {
            // Development default: allow everything.
            return Ok(CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any));
        }
        // Production without configured origins: no cross-origin access.
        return Ok(CorsLayer::new());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|o| o.parse())
        .collect::<Result<_, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
