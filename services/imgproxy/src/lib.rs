//! Signed URL builder for imgproxy.
//!
//! ## Example
//!
//! ```
//! use imgsign_imgproxy::{Builder, Directive, Format, GravityType, ResizingType};
//!
//! # fn example() -> imgsign_core::Result<()> {
//! let builder = Builder::keyed()
//!     .with_endpoint("https://cdn.example.com")?
//!     .with_credentials("736563726574", "68656C6C6F")?
//!     .with_resize(ResizingType::Fill, 300, 400, false);
//!
//! // Extra directives only apply to this call.
//! let url = builder.build_with(
//!     "https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png",
//!     &[Directive::gravity(GravityType::Smart), Directive::format(Format::Jpg)],
//!     true,
//! )?;
//! assert!(url.ends_with(".jpg"));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{IMGPROXY_ENDPOINT, IMGPROXY_KEY, IMGPROXY_SALT, INSECURE_SIGNATURE};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod value;
pub use value::{
    Format, GravityType, ResizingAlgorithm, ResizingType, UnsharpeningMode, WatermarkPosition,
};

mod directive;
pub use directive::{Directive, DirectiveKind, Gravity, JpegOptions};

mod directive_set;
pub use directive_set::DirectiveSet;

mod dialect;
pub use dialect::Dialect;

mod signer;
pub use signer::Signer;

mod build;
pub use build::Builder;
