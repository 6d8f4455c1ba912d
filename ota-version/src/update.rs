/// What the device should do after asking the server.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCondition {
    NoUpdate,
    NewDifferent,
}

impl UpdateCondition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UpdateCondition::NoUpdate => "NO_UPDATE",
            UpdateCondition::NewDifferent => "NEW_DIFFERENT",
        }
    }
}

/// Fields of the server's answer to a check request.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct CheckResponse<'a> {
    pub version: &'a str,
    pub available: bool,
    pub url: &'a str,
}

impl CheckResponse<'_> {
    /// The server already compared versions; an offered image is always taken,
    /// even when it carries the version that is running.
    pub fn condition(&self) -> UpdateCondition {
        // without a url there is nothing to download
        if self.available && !self.url.is_empty() {
            UpdateCondition::NewDifferent
        } else {
            UpdateCondition::NoUpdate
        }
    }
}
