//! Merchant configuration for the gateway.
//!
//! Loaded once from a JSON file and never mutated afterwards.

use crate::domain::request::{PRODUCTION_URL, TEST_URL, validate_url};
use crate::domain::seal::SecretKey;
use crate::error::{MercanetError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;

/// Overrides `secret_key` from the file when set and non-empty.
pub const SECRET_ENV_VAR: &str = "MERCANET_SECRET_KEY";

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GatewayMode {
    #[default]
    Test,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub merchant_id: String,
    pub key_version: String,
    pub secret_key: SecretKey,
    #[serde(default)]
    pub mode: GatewayMode,
    /// Smallest order total accepted, in major units. Zero means no bound.
    #[serde(default)]
    pub minimum_amount: Decimal,
    /// Largest order total accepted, in major units. Zero means no bound.
    #[serde(default)]
    pub maximum_amount: Decimal,
    /// Clients allowed to pay while in test mode.
    #[serde(default)]
    pub allowed_ips: Vec<IpAddr>,
    pub normal_return_url: String,
    pub automatic_response_url: String,
}

impl GatewayConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&raw)?;
        if let Ok(secret) = std::env::var(SECRET_ENV_VAR)
            && !secret.is_empty()
        {
            config.secret_key = SecretKey::new(secret);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.is_empty() {
            return Err(MercanetError::Config("merchant_id is empty".to_string()));
        }
        if self.key_version.is_empty() {
            return Err(MercanetError::Config("key_version is empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(MercanetError::Config("secret_key is empty".to_string()));
        }
        validate_url("normal_return_url", &self.normal_return_url)
            .map_err(|e| MercanetError::Config(e.to_string()))?;
        validate_url("automatic_response_url", &self.automatic_response_url)
            .map_err(|e| MercanetError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn gateway_url(&self) -> &'static str {
        match self.mode {
            GatewayMode::Test => TEST_URL,
            GatewayMode::Production => PRODUCTION_URL,
        }
    }

    /// Whether this payment method may be offered for an order.
    ///
    /// In test mode only clients listed in `allowed_ips` qualify.
    pub fn accepts_payment(&self, order_total: Decimal, client_ip: Option<IpAddr>) -> bool {
        let client_allowed = match self.mode {
            GatewayMode::Test => client_ip.is_some_and(|ip| self.allowed_ips.contains(&ip)),
            GatewayMode::Production => true,
        };
        client_allowed && self.amount_in_bounds(order_total)
    }

    fn amount_in_bounds(&self, total: Decimal) -> bool {
        total > Decimal::ZERO
            && (self.minimum_amount <= Decimal::ZERO || total >= self.minimum_amount)
            && (self.maximum_amount <= Decimal::ZERO || total <= self.maximum_amount)
    }
}
