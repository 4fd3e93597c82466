/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables into
 * a single `AppConfig` value that the rest of the application borrows.
 *
 * # Configuration Sources
 *
 * Every value comes from the environment, with sensible defaults for
 * local development where possible. `main` calls `dotenv::dotenv()`
 * before `AppConfig::from_env`, so a local `.env` file works too.
 *
 * # Error Handling
 *
 * Missing variables are logged and replaced with their defaults. The
 * secrets default to obviously-unsafe placeholder values so a
 * misconfigured production deployment shows up in the logs at startup.
 */

/// Application configuration loaded from the environment
///
/// # Fields
///
/// * `app_host` / `app_port` - Bind address for the HTTP listener
/// * `mongodb_uri` / `database_name` - MongoDB connection settings
/// * `access_token_secret` / `refresh_token_secret` - JWT signing keys
/// * `brevo_api_key` - Transactional email API key
/// * `admin_email_address` / `admin_email_name` - Sender identity for emails
/// * `website_domain` - Frontend origin used in verification links
/// * `cloudinary_cloud_name` / `cloudinary_upload_preset` - Media upload target
/// * `cors_whitelist` - Origins allowed to call the API with credentials
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_host: String,
    pub app_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub brevo_api_key: String,
    pub admin_email_address: String,
    pub admin_email_name: String,
    pub website_domain: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_upload_preset: String,
    pub cors_whitelist: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to local-development defaults and are
    /// logged at `warn` level so deployments can spot the gap.
    pub fn from_env() -> Self {
        let cors_whitelist = env_or("CORS_WHITELIST", "http://localhost:5173")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            app_host: env_or("APP_HOST", "localhost"),
            app_port: env_or("APP_PORT", "8017").parse().unwrap_or(8017),
            mongodb_uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            database_name: env_or("DATABASE_NAME", "taskboard"),
            access_token_secret: env_or("ACCESS_TOKEN_SECRET", "dev-access-secret"),
            refresh_token_secret: env_or("REFRESH_TOKEN_SECRET", "dev-refresh-secret"),
            brevo_api_key: env_or("BREVO_API_KEY", ""),
            admin_email_address: env_or("ADMIN_EMAIL_ADDRESS", "admin@taskboard.dev"),
            admin_email_name: env_or("ADMIN_EMAIL_NAME", "Taskboard Admin"),
            website_domain: env_or("WEBSITE_DOMAIN", "http://localhost:5173"),
            cloudinary_cloud_name: env_or("CLOUDINARY_CLOUD_NAME", ""),
            cloudinary_upload_preset: env_or("CLOUDINARY_UPLOAD_PRESET", ""),
            cors_whitelist,
        }
    }
}

/// Read an environment variable, falling back to a default
fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!("{} not set, using default", name);
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        std::env::remove_var("APP_HOST");
        std::env::remove_var("APP_PORT");
        std::env::remove_var("CORS_WHITELIST");

        let config = AppConfig::from_env();
        assert_eq!(config.app_host, "localhost");
        assert_eq!(config.app_port, 8017);
        assert_eq!(config.cors_whitelist, vec!["http://localhost:5173"]);
    }

    #[test]
    #[serial]
    fn test_cors_whitelist_splits_on_commas() {
        std::env::set_var(
            "CORS_WHITELIST",
            "https://taskboard.dev, https://staging.taskboard.dev",
        );

        let config = AppConfig::from_env();
        assert_eq!(
            config.cors_whitelist,
            vec!["https://taskboard.dev", "https://staging.taskboard.dev"]
        );

        std::env::remove_var("CORS_WHITELIST");
    }
}
