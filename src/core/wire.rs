use serde::{Deserialize, Serialize};

/* ---------- request bodies ---------- */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateBody<'a> {
    pub(crate) account_name: &'a str,
    pub(crate) password: &'a str,
    pub(crate) application_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginByIdBody<'a> {
    pub(crate) account_id: &'a str,
    pub(crate) password: &'a str,
    pub(crate) application_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadingsBody<'a> {
    pub(crate) session_id: &'a str,
    pub(crate) minutes: u32,
    pub(crate) max_count: u32,
}

/* ---------- fault body returned with non-2xx statuses ---------- */

#[derive(Deserialize, Debug)]
pub(crate) struct VendorFault {
    #[serde(rename = "Code")]
    pub(crate) code: String,
    #[serde(rename = "Message", default)]
    pub(crate) message: Option<String>,
}
