use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use crate::ai::{ApiKey, GeminiClient};
use crate::booster::PromptBooster;
use crate::cli::Commands;
use crate::config::{DefaultConfig, Settings};
use crate::enhance::enhance;
use crate::server;

pub struct CommandHandler {
    settings: Settings,
    config_path: PathBuf,
}

impl CommandHandler {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Settings::default_config_path()?,
        };
        let settings = Settings::load_from(&config_path)?;
        debug!("Loaded settings from {}", config_path.display());

        Ok(Self {
            settings,
            config_path,
        })
    }

    pub async fn handle_command(&mut self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve { host, port } => self.handle_serve(host, port).await,
            Commands::Enhance { prompt } => self.handle_enhance(prompt),
            Commands::Boost { prompt } => self.handle_boost(prompt).await,
            Commands::Config => self.handle_config(),
            Commands::Init { force } => self.handle_init(force),
        }
    }

    /// Builds the Gemini-backed pipeline. The API key is read here, once.
    fn build_booster(&self) -> Result<PromptBooster> {
        let model = &self.settings.model;
        let api_key = ApiKey::from_env(&model.api_key_env)
            .context("Gemini API key is required to call the model")?;
        let client = GeminiClient::new(api_key, model)?;
        info!("Using Gemini model {}", client.model_name());

        Ok(PromptBooster::new(Arc::new(client)))
    }

    async fn handle_serve(&mut self, host: Option<String>, port: Option<u16>) -> Result<String> {
        if let Some(host) = host {
            self.settings.server.host = host;
        }
        if let Some(port) = port {
            self.settings.server.port = port;
        }

        let booster = self.build_booster()?;
        server::serve(booster, &self.settings.server).await?;
        Ok(String::new())
    }

    fn handle_enhance(&self, prompt: Option<String>) -> Result<String> {
        let raw = read_prompt(prompt)?;
        Ok(enhance(&raw).into_string())
    }

    async fn handle_boost(&self, prompt: Option<String>) -> Result<String> {
        let raw = read_prompt(prompt)?;
        let booster = self.build_booster()?;
        let polished = booster.boost(&raw).await?;
        Ok(polished.into_string())
    }

    fn handle_config(&self) -> Result<String> {
        let key_status = match ApiKey::from_env(&self.settings.model.api_key_env) {
            Ok(_) => "set",
            Err(_) => "not set",
        };

        let rendered =
            toml::to_string_pretty(&self.settings).context("Failed to render settings")?;

        Ok(format!(
            "Prompt Booster Configuration:\n\
            - Config file: {}\n\
            - API key ({}): {}\n\n{}",
            self.config_path.display(),
            self.settings.model.api_key_env,
            key_status,
            rendered.trim_end()
        ))
    }

    fn handle_init(&self, force: bool) -> Result<String> {
        if self.config_path.exists() && !force {
            return Ok(format!(
                "Config file already exists at {} (use --force to overwrite)",
                self.config_path.display()
            ));
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.config_path, DefaultConfig::create_default_config_file())
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;

        info!("Wrote default config to {}", self.config_path.display());
        Ok(format!("Created {}", self.config_path.display()))
    }
}

fn read_prompt(prompt: Option<String>) -> Result<String> {
    match prompt {
        Some(prompt) => Ok(prompt),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read prompt from stdin")?;
            Ok(input)
        }
    }
}
