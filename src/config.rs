use std::env;

use anyhow::{Context, Result};

/// Placeholders for a hosted completion/vision provider. Nothing calls the
/// provider yet; the values are only reported at startup.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    pub deployment_name: String,
}

impl ProviderSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.endpoint.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub project_name: String,
    /// Normalized: empty, or starts with `/` and has no trailing `/`.
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
    /// Largest image body `/upload` will read.
    pub max_upload_bytes: usize,
    pub provider: ProviderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "kraislauf".to_string(),
            api_prefix: "/api".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "https://kraislauf.azurestaticwebapps.net".to_string(),
            ],
            environment: "development".to_string(),
            log_level: "info".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_bytes: 10 * 1024 * 1024,
            provider: ProviderSettings {
                api_key: String::new(),
                endpoint: String::new(),
                api_version: "2023-05-15".to_string(),
                deployment_name: "gpt-35-turbo".to_string(),
            },
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(name) = lookup("PROJECT_NAME") {
            settings.project_name = name;
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            settings.api_prefix = normalize_prefix(&prefix);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            settings.cors_origins = parse_origins(&origins)?;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            settings.environment = environment;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            settings.log_level = level.to_lowercase();
        }
        if let Some(host) = lookup("HOST") {
            settings.host = host;
        }
        if let Some(port) = lookup("PORT") {
            settings.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {port:?}"))?;
        }
        if let Some(limit) = lookup("MAX_UPLOAD_BYTES") {
            settings.max_upload_bytes = limit
                .trim()
                .parse()
                .with_context(|| format!("Invalid MAX_UPLOAD_BYTES value: {limit:?}"))?;
        }

        let provider = &mut settings.provider;
        if let Some(key) = lookup("AZURE_OPENAI_API_KEY") {
            provider.api_key = key;
        }
        if let Some(endpoint) = lookup("AZURE_OPENAI_API_ENDPOINT") {
            provider.endpoint = endpoint;
        }
        if let Some(version) = lookup("AZURE_OPENAI_API_VERSION") {
            provider.api_version = version;
        }
        if let Some(deployment) = lookup("AZURE_OPENAI_DEPLOYMENT_NAME") {
            provider.deployment_name = deployment;
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

// Accepts a JSON array (`["a","b"]`) or a comma-separated list.
fn parse_origins(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    let origins: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw)
            .with_context(|| format!("Invalid CORS_ORIGINS list: {raw}"))?
    } else {
        raw.split(',').map(str::to_string).collect()
    };

    Ok(origins
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect())
}
