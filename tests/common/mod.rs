#![allow(dead_code)]

use mercanet::config::GatewayConfig;
use mercanet::domain::parameters::ParameterSet;
use mercanet::domain::seal::{SecretKey, compose_seal};
use std::io::Write;
use tempfile::NamedTempFile;

pub const SECRET: &str = "S9i8qClCnb2CZU3y3Vn0toIOgz3z_aBi79akR30vM9o";
pub const MERCHANT_ID: &str = "211000021310001";

pub fn config_json(mode: &str) -> String {
    format!(
        r#"{{
    "merchant_id": "{MERCHANT_ID}",
    "key_version": "1",
    "secret_key": "{SECRET}",
    "mode": "{mode}",
    "minimum_amount": "1",
    "maximum_amount": "0",
    "allowed_ips": ["127.0.0.1"],
    "normal_return_url": "https://shop.example.com/mercanet/manual-response",
    "automatic_response_url": "https://shop.example.com/mercanet/callback"
}}"#
    )
}

pub fn config() -> GatewayConfig {
    GatewayConfig::from_json(&config_json("TEST")).unwrap()
}

pub fn write_config(mode: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_json(mode).as_bytes()).unwrap();
    file
}

pub fn write_orders(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "order_id,total,currency,email,language").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Seals `data` the way the gateway does for its callbacks.
pub fn gateway_seal(data: &str) -> String {
    compose_seal(&ParameterSet::parse(data), &SecretKey::new(SECRET))
}
