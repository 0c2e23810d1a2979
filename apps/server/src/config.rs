// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use planta_render::{ExportConfig, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Labeled recommendation dataset (CSV).
    pub dataset_path: PathBuf,
    /// Pre-rendered plan images served under `/planos`.
    pub planos_dir: PathBuf,
    /// Generated plans, served under `/generados`.
    pub output_dir: PathBuf,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Raster width of generated plans (px).
    pub image_width: u32,
    /// Raster height of generated plans (px).
    pub image_height: u32,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8080),
            dataset_path: env_or("DATASET_PATH", PathBuf::from("dataset.csv")),
            planos_dir: env_or("PLANOS_DIR", PathBuf::from("planos")),
            output_dir: env_or("OUTPUT_DIR", PathBuf::from("planos_generados")),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 60),
            image_width: env_or("IMAGE_WIDTH", DEFAULT_IMAGE_WIDTH),
            image_height: env_or("IMAGE_HEIGHT", DEFAULT_IMAGE_HEIGHT),
        }
    }

    /// Exporter settings for generated plans
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            output_dir: self.output_dir.clone(),
            image_width: self.image_width,
            image_height: self.image_height,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
