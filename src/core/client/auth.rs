//! Two-step Share login: credentials → account id → session id.

use super::constants::{
    DEXCOM_APPLICATION_ID, DEXCOM_AUTHENTICATE_ENDPOINT, DEXCOM_LOGIN_ID_ENDPOINT,
};
use super::is_set;
use crate::core::error::DexcomError;
use crate::core::net;
use crate::core::wire::{AuthenticateBody, LoginByIdBody};
use serde_json::Value;

impl super::DexcomClient {
    /// Resolve the account id, then the session id. Both ids are stored only after both steps
    /// succeed, and the second step is not attempted when the first fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(username = %self.username)))]
    pub(crate) fn create_session(&mut self) -> Result<(), DexcomError> {
        let account_id = self.get_account_id()?;
        let session_id = self.get_session_id(&account_id)?;

        self.account_id = account_id;
        self.session_id = session_id;
        Ok(())
    }

    fn get_account_id(&self) -> Result<String, DexcomError> {
        let url = self.endpoint(DEXCOM_AUTHENTICATE_ENDPOINT)?;
        let body = AuthenticateBody {
            account_name: &self.username,
            password: &self.password,
            application_id: DEXCOM_APPLICATION_ID,
        };

        let resp = net::post_json(self.http(), &url, &body).map_err(|e| match e {
            DexcomError::Vendor { code, message, .. } => {
                DexcomError::Authentication(format!("{code}: {message}"))
            }
            other => other,
        })?;

        identifier_from(resp, "account id").map_err(DexcomError::Authentication)
    }

    fn get_session_id(&self, account_id: &str) -> Result<String, DexcomError> {
        let url = self.endpoint(DEXCOM_LOGIN_ID_ENDPOINT)?;
        let body = LoginByIdBody {
            account_id,
            password: &self.password,
            application_id: DEXCOM_APPLICATION_ID,
        };

        let resp = net::post_json(self.http(), &url, &body).map_err(|e| match e {
            DexcomError::Vendor { code, message, .. } => {
                DexcomError::Session(format!("{code}: {message}"))
            }
            other => other,
        })?;

        identifier_from(resp, "session id").map_err(DexcomError::Session)
    }
}

/// Both login endpoints answer with a bare JSON string.
fn identifier_from(resp: Value, what: &str) -> Result<String, String> {
    match resp {
        Value::String(id) if is_set(&id) => Ok(id),
        Value::String(id) => Err(format!("service returned an unset {what} ({id:?})")),
        other => Err(format!("expected {what} as a JSON string, got {other}")),
    }
}
