#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use imgsign_core::*;

#[cfg(feature = "imgproxy")]
pub mod imgproxy {
    pub use imgsign_imgproxy::*;
}
