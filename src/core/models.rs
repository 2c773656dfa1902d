use serde::Serialize;

use super::client::constants::{DEXCOM_BASE_URL, DEXCOM_BASE_URL_OUS};

/// Dexcom Share deployment to talk to.
///
/// Accounts are region-bound: a US account cannot log in on the OUS host and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    /// United States (`share2.dexcom.com`).
    #[default]
    Us,
    /// Outside the United States (`shareous1.dexcom.com`).
    Ous,
}

impl Region {
    /// Map the legacy `ous` flag onto a region.
    #[must_use]
    pub const fn from_ous_flag(ous: bool) -> Self {
        if ous { Self::Ous } else { Self::Us }
    }

    /// The Share web-services base URL for this region, with a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Us => DEXCOM_BASE_URL,
            Self::Ous => DEXCOM_BASE_URL_OUS,
        }
    }
}

impl From<bool> for Region {
    fn from(ous: bool) -> Self {
        Self::from_ous_flag(ous)
    }
}
