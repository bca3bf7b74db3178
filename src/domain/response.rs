use super::parameters::ParameterSet;
use super::response_codes::SUCCESS_CODES;
use super::seal::{SecretKey, verify_seal};
use crate::error::{MercanetError, Result};

pub const DATA_FIELD: &str = "DATA";
pub const SEAL_FIELD: &str = "SEAL";

/// Where an authenticated-or-not response ends up once parsing succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The seal does not match the data. Possibly forged.
    AuthenticationFailed,
    /// Authentic, but the gateway did not accept the payment.
    Declined { response_code: String },
    Successful,
}

/// A decoded gateway callback.
///
/// Built from the raw form fields of the redirect: `DATA` holds the
/// pipe-delimited parameters, `SEAL` the gateway's signature over them.
#[derive(Debug, Clone)]
pub struct PaymentResponse {
    secret: SecretKey,
    parameters: ParameterSet,
    seal: String,
    data: String,
}

impl PaymentResponse {
    /// Parses the callback form fields. Field names are matched ignoring case.
    pub fn from_fields<I, K, V>(secret: SecretKey, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut data = None;
        let mut seal = None;
        for (key, value) in fields {
            let key = key.as_ref();
            if key.eq_ignore_ascii_case(DATA_FIELD) {
                data = Some(value.as_ref().to_string());
            } else if key.eq_ignore_ascii_case(SEAL_FIELD) {
                seal = Some(value.as_ref().to_string());
            }
        }

        let data = data
            .filter(|d| !d.is_empty())
            .ok_or(MercanetError::MissingDataField)?;
        let parameters = ParameterSet::parse(&data);
        let seal = seal
            .filter(|s| !s.is_empty())
            .ok_or(MercanetError::MissingSealField)?;

        Ok(Self {
            secret,
            parameters,
            seal,
            data,
        })
    }

    /// True when the seal matches the decoded parameters.
    pub fn is_valid(&self) -> bool {
        verify_seal(&self.parameters, &self.secret, &self.seal)
    }

    pub fn is_successful(&self) -> bool {
        self.response_code()
            .is_some_and(|code| SUCCESS_CODES.contains(&code))
    }

    pub fn status(&self) -> ResponseStatus {
        if !self.is_valid() {
            return ResponseStatus::AuthenticationFailed;
        }
        if self.is_successful() {
            ResponseStatus::Successful
        } else {
            ResponseStatus::Declined {
                response_code: self.response_code().unwrap_or_default().to_string(),
            }
        }
    }

    pub fn response_code(&self) -> Option<&str> {
        self.parameters.get_ignore_case("RESPONSECODE")
    }

    pub fn param(&self, name: &str) -> Result<&str> {
        self.parameters
            .get_ignore_case(name)
            .ok_or_else(|| MercanetError::UnknownParameter {
                name: name.to_string(),
            })
    }

    /// The amount in cents.
    pub fn amount(&self) -> Result<i64> {
        let raw = self.param("amount")?.trim();
        raw.parse()
            .map_err(|_| MercanetError::validation("amount", format!("not an integer: {raw}")))
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn seal(&self) -> &str {
        &self.seal
    }

    /// The raw `DATA` string, kept for audit logs.
    pub fn data_string(&self) -> &str {
        &self.data
    }
}
