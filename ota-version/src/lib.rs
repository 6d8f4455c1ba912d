#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod check;
pub mod details;
pub mod update;

// OTA_VERSION, HW_VERSION and HW_REVISION, written by build.rs
include!(concat!(env!("OUT_DIR"), "/ota_version.rs"));
