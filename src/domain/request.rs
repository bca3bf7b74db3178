use super::amount::Amount;
use super::brand::brand_family;
use super::currency::currency_to_code;
use super::fields::{ALLOWED_LANGUAGES, REQUIRED_FIELDS, has_dedicated_setter, is_known_field};
use super::parameters::ParameterSet;
use super::seal::{SecretKey, compose_seal};
use crate::error::{MercanetError, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use url::Url;

pub const TEST_URL: &str = "https://payment-webinit-mercanet.test.sips-atos.com/paymentInit";
pub const PRODUCTION_URL: &str = "https://payment-webinit.mercanet.bnpparibas.net/paymentInit";

pub const INTERFACE_VERSION: &str = "HP_2.20";

pub const BYPASS3DS_ALL: &str = "ALL";
pub const BYPASS3DS_MERCHANTWALLET: &str = "MERCHANTWALLET";

const MAX_EMAIL_LEN: usize = 50;
const MAX_URL_LEN: usize = 200;

static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid reference pattern"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("valid email pattern")
});

/// The three values posted to the gateway's payment page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedEnvelope {
    #[serde(rename = "Data")]
    pub data: String,
    #[serde(rename = "InterfaceVersion")]
    pub interface_version: String,
    #[serde(rename = "Seal")]
    pub seal: String,
}

/// Builds an outbound payment request.
///
/// Every setter validates its input before touching the parameter set, so a
/// failed call leaves the request unchanged. Fields are serialized in the
/// order the setters were first called.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    secret: SecretKey,
    psp_url: String,
    parameters: ParameterSet,
}

impl PaymentRequest {
    pub fn new(secret: SecretKey) -> Self {
        Self {
            secret,
            psp_url: TEST_URL.to_string(),
            parameters: ParameterSet::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.psp_url
    }

    pub fn set_url(&mut self, url: &str) -> Result<()> {
        validate_url("pspUrl", url)?;
        self.psp_url = url.to_string();
        Ok(())
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Writes a whitelisted field that has no dedicated setter, unvalidated.
    pub fn set_raw_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !is_known_field(name) {
            return Err(MercanetError::UnknownField(name.to_string()));
        }
        if has_dedicated_setter(name) {
            return Err(MercanetError::validation(
                name,
                "field must be set through its validating setter",
            ));
        }
        self.parameters.insert(name, value);
        Ok(())
    }

    pub fn get_raw_field(&self, name: &str) -> Result<&str> {
        if !is_known_field(name) {
            return Err(MercanetError::UnknownField(name.to_string()));
        }
        self.parameters
            .get(name)
            .ok_or_else(|| MercanetError::FieldNotSet(name.to_string()))
    }

    pub fn set_merchant_id(&mut self, merchant_id: &str) -> Result<()> {
        self.set_raw_field("merchantId", merchant_id)
    }

    pub fn set_key_version(&mut self, key_version: &str) -> Result<()> {
        self.set_raw_field("keyVersion", key_version)
    }

    /// Sets the amount in cents, eg `EUR 12.34` is `1234`.
    pub fn set_amount(&mut self, cents: i64) -> Result<()> {
        let amount = Amount::new(cents)?;
        self.parameters.insert("amount", amount.to_string());
        Ok(())
    }

    pub fn amount(&self) -> Result<i64> {
        let raw = self.get_raw_field("amount")?;
        raw.parse()
            .map_err(|_| MercanetError::validation("amount", format!("not an integer: {raw}")))
    }

    pub fn set_currency(&mut self, currency: &str) -> Result<()> {
        let code = currency_to_code(currency)?;
        self.parameters.insert("currencyCode", code);
        Ok(())
    }

    pub fn set_transaction_reference(&mut self, reference: &str) -> Result<()> {
        if !REFERENCE_RE.is_match(reference) {
            return Err(MercanetError::validation(
                "transactionReference",
                "only letters, digits, '_' and '-' are allowed",
            ));
        }
        self.parameters.insert("transactionReference", reference);
        Ok(())
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        if !ALLOWED_LANGUAGES.contains(&language) {
            return Err(MercanetError::validation(
                "customerLanguage",
                format!("invalid language locale {language}"),
            ));
        }
        self.parameters.insert("customerLanguage", language);
        Ok(())
    }

    pub fn set_payment_brand(&mut self, brand: &str) -> Result<()> {
        if brand_family(brand).is_none() {
            return Err(MercanetError::validation(
                "paymentMeanBrandList",
                format!("unknown brand [{brand}]"),
            ));
        }
        self.parameters
            .insert("paymentMeanBrandList", brand.to_ascii_uppercase());
        Ok(())
    }

    pub fn set_customer_contact_email(&mut self, email: &str) -> Result<()> {
        validate_email("customerContact.email", email)?;
        self.parameters.insert("customerContact.email", email);
        Ok(())
    }

    pub fn set_billing_contact_email(&mut self, email: &str) -> Result<()> {
        validate_email("billingContact.email", email)?;
        self.parameters.insert("billingContact.email", email);
        Ok(())
    }

    pub fn set_billing_address_street(&mut self, street: &str) -> Result<()> {
        self.set_normalized("billingAddress.street", street, 35)
    }

    pub fn set_billing_address_street_number(&mut self, number: &str) -> Result<()> {
        self.set_normalized("billingAddress.streetNumber", number, 10)
    }

    pub fn set_billing_address_zip_code(&mut self, zip_code: &str) -> Result<()> {
        self.set_normalized("billingAddress.zipCode", zip_code, 10)
    }

    pub fn set_billing_address_city(&mut self, city: &str) -> Result<()> {
        self.set_normalized("billingAddress.city", city, 25)
    }

    pub fn set_billing_contact_phone(&mut self, phone: &str) -> Result<()> {
        check_len("billingContact.phone", phone, 30)?;
        self.parameters.insert("billingContact.phone", phone);
        Ok(())
    }

    pub fn set_billing_contact_firstname(&mut self, firstname: &str) -> Result<()> {
        self.parameters
            .insert("billingContact.firstname", strip_quotes(&nfc(firstname)));
        Ok(())
    }

    pub fn set_billing_contact_lastname(&mut self, lastname: &str) -> Result<()> {
        self.parameters
            .insert("billingContact.lastname", strip_quotes(&nfc(lastname)));
        Ok(())
    }

    pub fn set_capture_day(&mut self, days: &str) -> Result<()> {
        if days.is_empty() || days.len() > 2 || !days.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MercanetError::validation(
                "captureDay",
                "expected a number of at most 2 digits",
            ));
        }
        self.parameters.insert("captureDay", days);
        Ok(())
    }

    pub fn set_fraud_data_bypass_3ds(&mut self, value: &str) -> Result<()> {
        check_len("fraudData.bypass3DS", value, 128)?;
        self.parameters.insert("fraudData.bypass3DS", value);
        Ok(())
    }

    pub fn set_merchant_wallet_id(&mut self, wallet: &str) -> Result<()> {
        check_len("merchantWalletId", wallet, 21)?;
        self.parameters.insert("merchantWalletId", wallet);
        Ok(())
    }

    pub fn set_instalment_data_number(&mut self, number: u32) -> Result<()> {
        if !(2..=50).contains(&number) {
            return Err(MercanetError::validation(
                "instalmentData.number",
                "value must be set between 2 and 50",
            ));
        }
        self.parameters
            .insert("instalmentData.number", number.to_string());
        Ok(())
    }

    pub fn set_instalment_dates_list(&mut self, dates: &str) -> Result<()> {
        self.set_raw_field("instalmentData.datesList", dates)
    }

    pub fn set_instalment_transaction_references_list(&mut self, references: &str) -> Result<()> {
        self.set_raw_field("instalmentData.transactionReferencesList", references)
    }

    pub fn set_instalment_amounts_list(&mut self, amounts: &str) -> Result<()> {
        self.set_raw_field("instalmentData.amountsList", amounts)
    }

    pub fn set_payment_pattern(&mut self, pattern: &str) -> Result<()> {
        self.set_raw_field("paymentPattern", pattern)
    }

    pub fn set_normal_return_url(&mut self, url: &str) -> Result<()> {
        validate_url("normalReturnUrl", url)?;
        self.parameters.insert("normalReturnUrl", url);
        Ok(())
    }

    pub fn set_automatic_response_url(&mut self, url: &str) -> Result<()> {
        validate_url("automaticResponseUrl", url)?;
        self.parameters.insert("automaticResponseUrl", url);
        Ok(())
    }

    /// Fails on the first required field that is absent or empty.
    pub fn validate(&self) -> Result<()> {
        for field in REQUIRED_FIELDS {
            if self.parameters.get(field).is_none_or(str::is_empty) {
                return Err(MercanetError::MissingRequiredField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The payload posted as `Data`. Never contains the secret.
    pub fn to_parameter_string(&self) -> String {
        self.parameters.to_parameter_string()
    }

    /// Validates, then computes the seal posted as `Seal`.
    pub fn seal(&self) -> Result<String> {
        self.validate()?;
        Ok(compose_seal(&self.parameters, &self.secret))
    }

    pub fn envelope(&self) -> Result<SignedEnvelope> {
        let seal = self.seal()?;
        Ok(SignedEnvelope {
            data: self.to_parameter_string(),
            interface_version: INTERFACE_VERSION.to_string(),
            seal,
        })
    }

    fn set_normalized(&mut self, field: &str, value: &str, max: usize) -> Result<()> {
        let normalized = nfc(value);
        check_len(field, &normalized, max)?;
        self.parameters.insert(field, normalized);
        Ok(())
    }
}

fn nfc(value: &str) -> String {
    value.nfc().collect()
}

fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(MercanetError::validation(
            field,
            format!("longer than {max} characters"),
        ));
    }
    Ok(())
}

fn validate_email(field: &str, email: &str) -> Result<()> {
    check_len(field, email, MAX_EMAIL_LEN)?;
    if !EMAIL_RE.is_match(email) {
        return Err(MercanetError::validation(field, "email is invalid"));
    }
    Ok(())
}

pub(crate) fn validate_url(field: &str, url: &str) -> Result<()> {
    let parsed =
        Url::parse(url).map_err(|e| MercanetError::validation(field, format!("invalid URL: {e}")))?;
    if !parsed.has_host() {
        return Err(MercanetError::validation(field, "URL has no host"));
    }
    check_len(field, url, MAX_URL_LEN)
}
