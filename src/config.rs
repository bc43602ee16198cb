//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development,
//! except the API key, which has no usable default.
use dotenv;
use std::env;

use crate::genai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct Config {
    pub genai_url: String,
    pub genai_api_key: String,
    pub genai_model: String,
    pub mail_api_url: String,
    pub brand: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            genai_url: env::var("GENAI_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            genai_api_key: env::var("GENAI_API_KEY").unwrap_or_default(),
            genai_model: env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            brand: env::var("BRAND").unwrap_or_else(|_| "tai".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),
        })
    }
    /// Print the effective environment. The API key is never echoed.
    pub fn print_env_vars() {
        println!(
            "GENAI_URL: {}",
            env::var("GENAI_URL").unwrap_or_else(|_| "<unset>".to_string())
        );
        println!(
            "GENAI_API_KEY: {}",
            match env::var("GENAI_API_KEY") {
                Ok(v) if !v.is_empty() => "<set>",
                _ => "<unset>",
            }
        );
        println!(
            "GENAI_MODEL: {}",
            env::var("GENAI_MODEL").unwrap_or_else(|_| "<unset>".to_string())
        );
        println!(
            "MAIL_API_URL: {}",
            env::var("MAIL_API_URL").unwrap_or_else(|_| "<unset>".to_string())
        );
        println!(
            "BRAND: {}",
            env::var("BRAND").unwrap_or_else(|_| "<unset>".to_string())
        );
        println!(
            "API_HOST: {}",
            env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string())
        );
        println!(
            "API_PORT: {}",
            env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string())
        );
    }
}
