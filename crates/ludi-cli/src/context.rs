use anyhow::Context;
use ludi_config::{ContentApiConfig, LudiConfig};
use ludi_content::{ContentClient, ContentClientConfig};

use crate::cli::GlobalFlags;

/// Loaded configuration plus the content client built from it.
pub struct AppContext {
    pub config: LudiConfig,
    pub client: ContentClient,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config = LudiConfig::load_with_dotenv().context("failed to load configuration")?;
        if let Some(base_url) = &flags.base_url {
            config.content.base_url.clone_from(base_url);
            config.content.validate()?;
        }

        if !config.content.is_authenticated() {
            tracing::debug!(base_url = %config.content.base_url, "no API token configured, using anonymous access");
        }

        let client = ContentClient::new(client_config(&config.content))
            .context("failed to build content API client")?;
        Ok(Self { config, client })
    }
}

/// Map file/env configuration onto the client's explicit settings.
pub fn client_config(content: &ContentApiConfig) -> ContentClientConfig {
    ContentClientConfig {
        base_url: content.base_url.clone(),
        api_token: content
            .is_authenticated()
            .then(|| content.api_token.clone()),
        facilitator_source: content.facilitator_source,
        user_agent: content.user_agent.clone(),
        use_system_proxy: true,
    }
}

#[cfg(test)]
mod tests {
    use ludi_core::FacilitatorSource;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_token_maps_to_anonymous() {
        let content = ContentApiConfig {
            api_token: "  ".into(),
            ..Default::default()
        };
        assert_eq!(client_config(&content).api_token, None);
    }

    #[test]
    fn settings_are_carried_over() {
        let content = ContentApiConfig {
            base_url: "https://cms.example.com".into(),
            api_token: "tok".into(),
            facilitator_source: FacilitatorSource::RoleFilter,
            user_agent: "ludi-test".into(),
        };
        let config = client_config(&content);
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.api_token.as_deref(), Some("tok"));
        assert_eq!(config.facilitator_source, FacilitatorSource::RoleFilter);
        assert_eq!(config.user_agent, "ludi-test");
    }
}
