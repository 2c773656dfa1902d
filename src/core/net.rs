use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::error::DexcomError;
use super::wire::VendorFault;

/// POST `body` as JSON to `url` and parse the response body as JSON.
///
/// The body is read into a buffer owned by this call. Non-2xx statuses are errors: a Dexcom
/// fault object in the body becomes [`DexcomError::Vendor`], anything else
/// [`DexcomError::Status`].
pub(crate) fn post_json<B: Serialize + ?Sized>(
    http: &Client,
    url: &Url,
    body: &B,
) -> Result<Value, DexcomError> {
    let resp = http.post(url.clone()).json(body).send()?;
    let status = resp.status();
    let text = resp.text()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, status = status.as_u16(), bytes = text.len(), "dexcom response");

    if !status.is_success() {
        return Err(status_error(status.as_u16(), url, &text));
    }

    serde_json::from_str(&text).map_err(|e| DexcomError::ResponseParse(format!("{url}: {e}")))
}

fn status_error(status: u16, url: &Url, body: &str) -> DexcomError {
    match serde_json::from_str::<VendorFault>(body) {
        Ok(fault) => DexcomError::Vendor {
            status,
            message: fault.message.unwrap_or_else(|| fault.code.clone()),
            code: fault.code,
        },
        Err(_) => DexcomError::Status {
            status,
            url: url.to_string(),
        },
    }
}
