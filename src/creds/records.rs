use super::loader::CredentialRecord;
use crate::error::CredsError;
use secrecy::SecretString;
use serde::Deserialize;

/// Object-storage key pair, read from `ACCESS_KEY_ID` / `SECRET_ACCESS_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessKeys {
    #[serde(rename = "ACCESS_KEY_ID")]
    pub access_key_id: String,
    #[serde(rename = "SECRET_ACCESS_KEY")]
    pub secret_access_key: SecretString,
}

impl CredentialRecord for AccessKeys {
    const COLUMNS: &'static [&'static str] = &["ACCESS_KEY_ID", "SECRET_ACCESS_KEY"];
}

impl AccessKeys {
    pub fn into_parts(self) -> (String, SecretString) {
        (self.access_key_id, self.secret_access_key)
    }
}

/// Database connection parameters.
///
/// The port stays text until a connection or URL is built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct DbParams {
    #[serde(rename = "DB_USER")]
    pub user: String,
    #[serde(rename = "DB_PASSWD")]
    pub password: SecretString,
    #[serde(rename = "DB_HOST")]
    pub host: String,
    #[serde(rename = "DB_PORT")]
    pub port: String,
    #[serde(rename = "DB_SID")]
    pub sid: String,
}

impl CredentialRecord for DbParams {
    const COLUMNS: &'static [&'static str] =
        &["DB_USER", "DB_PASSWD", "DB_HOST", "DB_PORT", "DB_SID"];
}

impl DbParams {
    pub fn into_parts(self) -> (String, SecretString, String, String, String) {
        (self.user, self.password, self.host, self.port, self.sid)
    }

    pub fn port_number(&self) -> Result<u16, CredsError> {
        self.port.parse().map_err(|_| CredsError::InvalidPort {
            value: self.port.clone(),
        })
    }
}
