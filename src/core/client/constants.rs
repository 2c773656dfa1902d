//! Centralized constants for Share endpoints and identifiers.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("dexcom-share/", env!("CARGO_PKG_VERSION"));

/// US Share web-services base.
pub(crate) const DEXCOM_BASE_URL: &str = "https://share2.dexcom.com/ShareWebServices/Services/";

/// Outside-US Share web-services base.
pub(crate) const DEXCOM_BASE_URL_OUS: &str =
    "https://shareous1.dexcom.com/ShareWebServices/Services/";

/// Resolves credentials to an account id.
pub(crate) const DEXCOM_AUTHENTICATE_ENDPOINT: &str = "General/AuthenticatePublisherAccount";

/// Exchanges an account id + password for a session id.
pub(crate) const DEXCOM_LOGIN_ID_ENDPOINT: &str = "General/LoginPublisherAccountById";

/// Recent glucose values for a session.
pub(crate) const DEXCOM_GLUCOSE_READINGS_ENDPOINT: &str =
    "Publisher/ReadPublisherLatestGlucoseValues";

/// Receiver serial-number check. Not called by this crate.
#[allow(dead_code)]
pub(crate) const DEXCOM_VERIFY_SERIAL_NUMBER_ENDPOINT: &str =
    "Publisher/CheckMonitoredReceiverAssignmentStatus";

/// Application id identifying this integration to Dexcom.
pub const DEXCOM_APPLICATION_ID: &str = "d89443d2-327c-4a6f-89e5-496bbb0317db";

/// Zero UUID the service uses for "no session" / "no account".
pub const DEFAULT_SESSION_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Default overall request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on the `minutes` look-back accepted by the readings endpoint.
pub const MAX_MINUTES: u32 = 1440;

/// Upper bound on `maxCount` (one day of 5-minute readings).
pub const MAX_MAX_COUNT: u32 = 288;
