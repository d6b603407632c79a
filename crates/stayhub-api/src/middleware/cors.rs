//! CORS layer configuration.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use stayhub_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    layer = layer.allow_headers(Any);
    layer = layer.max_age(std::time::Duration::from_secs(config.max_age_seconds));

    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_layer_from_config_reexport() {
        let config = stayhub_core::config::CorsConfig {
            allowed_origins: vec!["https://app.stayhub.example".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            max_age_seconds: 600,
        };
        let _layer = build_cors_layer(&config);

        let wildcard = CorsConfig::default();
        assert!(wildcard.allowed_origins.contains(&"*".to_string()));
        let _layer = build_cors_layer(&wildcard);
    }
}
