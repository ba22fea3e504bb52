//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use ludi_config::LudiConfig;
use ludi_core::FacilitatorSource;
use pretty_assertions::assert_eq;

#[test]
fn loads_content_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[content]
base_url = "https://cms.luditools.com"
api_token = "toml-token"
facilitator_source = "role-filter"
user_agent = "ludi-test"
"#,
        )?;

        let config: LudiConfig = Figment::from(Serialized::defaults(LudiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.content.base_url, "https://cms.luditools.com");
        assert_eq!(config.content.api_token, "toml-token");
        assert_eq!(config.content.facilitator_source, FacilitatorSource::RoleFilter);
        assert_eq!(config.content.user_agent, "ludi-test");
        assert!(config.content.is_authenticated());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
currency_symbol = "€"
"#,
        )?;

        let config: LudiConfig = Figment::from(Serialized::defaults(LudiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.currency_symbol, "€");
        assert_eq!(config.general.locale, "es");
        assert_eq!(config.content.base_url, "http://localhost:1337");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".ludi"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".ludi/config.toml",
            r#"
[content]
base_url = "http://cms.local:1337"
"#,
        )?;

        let config = LudiConfig::load().expect("config loads");
        assert_eq!(config.content.base_url, "http://cms.local:1337");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".ludi"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".ludi/config.toml",
            r#"
[content]
base_url = "cms.local"
"#,
        )?;

        assert!(LudiConfig::load().is_err());
        Ok(())
    });
}
