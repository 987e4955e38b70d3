//! Backend origin configuration.

use anyhow::Context;
use breadbox_gateway::TransportSettings;
use url::Url;

pub(crate) const BACKEND_ENV: &str = "BREADBOX_BACKEND";
const DEFAULT_ORIGIN: &str = "http://localhost:5000";

pub(crate) fn transport_settings_from_env() -> anyhow::Result<TransportSettings> {
    let origin = std::env::var(BACKEND_ENV).ok();
    transport_settings(origin.as_deref())
}

fn transport_settings(origin: Option<&str>) -> anyhow::Result<TransportSettings> {
    let raw = origin.unwrap_or(DEFAULT_ORIGIN);
    let origin = Url::parse(raw).with_context(|| format!("invalid backend origin {raw:?}"))?;
    let settings = TransportSettings::for_origin(&origin)
        .with_context(|| format!("backend origin {raw:?} cannot carry the chat path"))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_points_at_local_flask_port() {
        let settings = transport_settings(None).expect("default settings");
        assert_eq!(
            settings.endpoint.as_str(),
            "http://localhost:5000/api/chat"
        );
    }

    #[test]
    fn custom_origin_is_joined_with_chat_path() {
        let settings =
            transport_settings(Some("https://bakery.example.com")).expect("custom settings");
        assert_eq!(
            settings.endpoint.as_str(),
            "https://bakery.example.com/api/chat"
        );
    }

    #[test]
    fn invalid_origin_is_a_startup_error() {
        assert!(transport_settings(Some("not a url")).is_err());
    }
}
