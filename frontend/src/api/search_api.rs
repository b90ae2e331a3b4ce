//! Archive client and timer used by the browser build.

use backend::{ArchiveClient, config::EndpointConfig};
use search_state::debounce::Timer;

/// Client for the archive serving this page; falls back to the configured
/// default when there is no window (tests, prerender).
pub fn archive_client() -> ArchiveClient {
    let config = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| EndpointConfig::with_base(&origin))
        .unwrap_or_else(EndpointConfig::from_env);
    dioxus::logger::tracing::info!("archive endpoints: {:?}", config);
    ArchiveClient::new(config)
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    async fn sleep_ms(&self, ms: u64) {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }
}
