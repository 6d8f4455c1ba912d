use core::fmt::{self, Write};

use heapless::String;

pub const CHECK_ENDPOINT: &str = "/api/firmware/check";
pub const UNKNOWN_DEVICE: &str = "unknown";

pub const MAX_PATH_LEN: usize = 256;
pub type RequestPath = String<MAX_PATH_LEN>;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum PathError {
    TooLong,
}

impl From<fmt::Error> for PathError {
    // heapless only fails a write when it runs out of capacity
    fn from(_: fmt::Error) -> Self {
        PathError::TooLong
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

/// Query sent to the update server to ask for newer firmware.
#[derive(Debug, Clone, Copy)]
pub struct CheckRequest<'a> {
    pub device_type: &'a str,
    pub hw_version: &'a str,
    pub current_version: &'a str,
    pub mac: Option<MacAddress>,
}

impl<'a> CheckRequest<'a> {
    /// Request for the firmware this crate was built as.
    pub const fn new(device_type: &'a str) -> Self {
        Self {
            device_type,
            hw_version: crate::HW_VERSION,
            current_version: crate::OTA_VERSION,
            mac: None,
        }
    }
    pub const fn with_mac(mut self, mac: MacAddress) -> Self {
        self.mac = Some(mac);
        self
    }
    /// `/api/firmware/check?type=..&hw_version=..[&mac=..]&current_version=..`
    pub fn path(&self) -> Result<RequestPath, PathError> {
        let mut path = RequestPath::new();
        write!(
            path,
            "{}?type={}&hw_version={}",
            CHECK_ENDPOINT, self.device_type, self.hw_version
        )?;
        if let Some(mac) = self.mac {
            write!(path, "&mac={}", mac)?;
        }
        write!(path, "&current_version={}", self.current_version)?;
        Ok(path)
    }
}

impl Default for CheckRequest<'_> {
    fn default() -> Self {
        Self::new(UNKNOWN_DEVICE)
    }
}

/// Firmware urls handed out by the server may be absolute or relative;
/// relative ones get rooted at `/`.
pub fn asset_endpoint(url: &str) -> Result<RequestPath, PathError> {
    let mut path = RequestPath::new();
    if !(url.starts_with("http") || url.starts_with('/')) {
        path.push('/').map_err(|_| PathError::TooLong)?;
    }
    path.push_str(url).map_err(|_| PathError::TooLong)?;
    Ok(path)
}
