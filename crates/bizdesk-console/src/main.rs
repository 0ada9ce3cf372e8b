#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use bizdesk_client::config::DEFAULT_BASE_URL;
    use bizdesk_client::ClientConfig;
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub api: ApiConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ApiConfig {
        pub base_url: String,
    }

    impl Default for ApiConfig {
        fn default() -> Self {
            Self {
                base_url: DEFAULT_BASE_URL.into(),
            }
        }
    }

    impl Config {
        /// `API_URL` / `API_BASE_URL` win over the file.
        pub fn client_config<F>(&self, lookup: F) -> ClientConfig
        where
            F: Fn(&str) -> Option<String>,
        {
            ClientConfig::from_lookup_or(lookup, &self.api.base_url)
        }
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::net::SocketAddr;

    use axum::Router;
    use bizdesk_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    let clientConfig = appConfig.client_config(|name| std::env::var(name).ok());
    tracing::info!(
        "loaded config from {configPath}: bind={}:{} api={}",
        appConfig.server.bind,
        appConfig.server.port,
        clientConfig.base_url
    );

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;

    let configuredAddr = format!("{}:{}", appConfig.server.bind, appConfig.server.port);
    match configuredAddr.parse::<SocketAddr>() {
        Ok(addr) => leptosOptions.site_addr = addr,
        Err(e) => tracing::warn!(
            "invalid server address {configuredAddr}: {e}, using {}",
            leptosOptions.site_addr
        ),
    }
    let addr = leptosOptions.site_addr;

    // Generate route list from Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let clientConfig = clientConfig.clone();
                move || {
                    leptos::prelude::provide_context(clientConfig.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
