use crate::config::Config;
use crate::languages;
use crate::transport::TransportMode;
use clap::Args;

#[derive(Args, Clone, Default, Debug)]
pub struct CommonParams {
    /// Override the default model
    #[arg(short, long, help = "Override the default model")]
    pub model: Option<String>,

    /// Target programming language
    #[arg(
        long,
        help = "Target programming language (use 'codeforge languages' to see the known set)",
        value_parser = known_languages_parser
    )]
    pub language: Option<String>,

    /// Override the inference server base URL
    #[arg(long = "api-base", help = "Override the inference server base URL")]
    pub api_base: Option<String>,

    /// Transport mode
    #[arg(
        long,
        help = "Transport mode: auto, native, or http",
        value_parser = transport_mode_parser
    )]
    pub transport: Option<TransportMode>,
}

impl CommonParams {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.default_model.clone_from(model);
        }
        if let Some(language) = &self.language {
            config.default_language = language.to_lowercase();
        }
        if let Some(api_base) = &self.api_base {
            config.api_base.clone_from(api_base);
        }
        if let Some(transport) = self.transport {
            config.transport = transport;
        }
    }

    /// Whether any override was given on the command line
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.language.is_none()
            && self.api_base.is_none()
            && self.transport.is_none()
    }
}

/// Validates that a language name is in the known set
pub fn known_languages_parser(s: &str) -> Result<String, String> {
    if languages::is_known(s) {
        Ok(s.to_lowercase())
    } else {
        Err(format!(
            "Unknown language '{}'. Known languages: {}",
            s,
            languages::selectable_names().join(", ")
        ))
    }
}

/// Validates a transport mode name
pub fn transport_mode_parser(s: &str) -> Result<TransportMode, String> {
    s.parse::<TransportMode>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_parser_normalizes_case() {
        assert_eq!(known_languages_parser("Python").as_deref(), Ok("python"));
        assert!(known_languages_parser("cobol").is_err());
    }

    #[test]
    fn test_apply_to_config_overrides() {
        let mut config = Config::default();
        let params = CommonParams {
            model: Some("codellama".to_string()),
            language: Some("Rust".to_string()),
            api_base: None,
            transport: Some(TransportMode::Http),
        };
        params.apply_to_config(&mut config);
        assert_eq!(config.default_model, "codellama");
        assert_eq!(config.default_language, "rust");
        assert_eq!(config.transport, TransportMode::Http);
        assert_eq!(config.api_base, crate::transport::DEFAULT_API_BASE);
    }
}
