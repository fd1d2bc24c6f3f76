//! imgproxy URL builder
use log::debug;

use imgsign_core::{Error, Result};

use crate::{
    Config, Credential, Dialect, Directive, DirectiveSet, Format, GravityType, ResizingType,
    Signer,
};

/// Builder assembles signed imgproxy URLs.
///
/// A builder is configured once and can then build any number of URLs.
/// Building only borrows the builder, so a configured builder can be kept
/// in a `static` or shared between threads.
///
/// ```
/// use imgsign_imgproxy::{Builder, Format, ResizingType};
///
/// # fn example() -> imgsign_core::Result<()> {
/// let url = Builder::keyed()
///     .with_endpoint("https://cdn.example.com")?
///     .with_credentials("736563726574", "68656C6C6F")?
///     .with_resize(ResizingType::Fill, 300, 400, true)
///     .with_format(Format::Jpg)
///     .build("https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png", false)?;
///
/// assert_eq!(
///     url,
///     "https://cdn.example.com/G-wVPuU_0HLI9b2CMk6FCH464vhvIytv4UeINfVK1Xo/resize:fill:300:400:1:0/plain/https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png@jpg"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    dialect: Dialect,
    endpoint: Option<String>,
    signer: Signer,
    directives: DirectiveSet,
}

impl Builder {
    /// Create a builder for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    /// Create a builder for the keyed dialect (imgproxy 2.x).
    pub fn keyed() -> Self {
        Self::new(Dialect::Keyed)
    }

    /// Create a builder for the legacy dialect (imgproxy 1.x).
    pub fn legacy() -> Self {
        Self::new(Dialect::Legacy)
    }

    /// Create a keyed builder from config.
    ///
    /// The endpoint is required. Key and salt must be both set or both
    /// unset; without them the builder signs with `insecure`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::config_invalid("endpoint is not configured"))?;
        let builder = Self::keyed().with_endpoint(endpoint)?;

        match (config.key.as_deref(), config.salt.as_deref()) {
            (Some(key), Some(salt)) => builder.with_credentials(key, salt),
            (None, None) => {
                debug!("no key and salt configured, urls will be insecure");
                Ok(builder)
            }
            (Some(_), None) => Err(Error::config_invalid("key is configured without salt")),
            (None, Some(_)) => Err(Error::config_invalid("salt is configured without key")),
        }
    }

    /// Dialect used to render directives.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Directives applied to every built URL.
    pub fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    /// Set the imgproxy endpoint. Trailing `/` are removed.
    pub fn with_endpoint(mut self, host: &str) -> Result<Self> {
        let host = host.trim_end_matches('/');
        if host.is_empty() {
            return Err(Error::argument_invalid("endpoint must not be empty"));
        }

        self.endpoint = Some(host.to_string());
        Ok(self)
    }

    /// Set the hex encoded key and salt used for signing.
    pub fn with_credentials(self, key: &str, salt: &str) -> Result<Self> {
        Ok(self.with_credential(Credential::from_hex(key, salt)?))
    }

    /// Set an already decoded credential.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.signer = Signer::new(Some(credential));
        self
    }

    /// Add a directive, replacing the active one of the same kind.
    pub fn with_option(mut self, directive: Directive) -> Self {
        self.directives.insert(directive);
        self
    }

    /// Add directives in order, replacing active ones of the same kind.
    pub fn with_options(mut self, directives: impl IntoIterator<Item = Directive>) -> Self {
        self.directives.extend(directives);
        self
    }

    /// Meta-option that defines the resizing type, width, height and enlarge.
    pub fn with_resize(self, kind: ResizingType, width: u32, height: u32, enlarge: bool) -> Self {
        self.with_option(Directive::resize(kind, width, height, enlarge, false))
    }

    /// Legacy resize: type, width, height, gravity and enlarge in one token.
    ///
    /// Replaces any active resize. Building fails unless the dialect is
    /// [`Dialect::Legacy`].
    pub fn with_basic_resize(
        self,
        kind: ResizingType,
        width: u32,
        height: u32,
        gravity: GravityType,
        enlarge: bool,
    ) -> Result<Self> {
        Ok(self.with_option(Directive::basic_resize(
            kind, width, height, gravity, enlarge,
        )?))
    }

    /// Format of the resulting image.
    pub fn with_format(self, format: Format) -> Self {
        self.with_option(Directive::format(format))
    }

    /// Preset to be used for generating the image.
    pub fn with_preset(self, preset: &str) -> Result<Self> {
        Ok(self.with_option(Directive::preset([preset])?))
    }

    /// Return the source image without processing.
    pub fn with_raw(self) -> Self {
        self.with_option(Directive::raw())
    }

    /// Build the URL of `url` with the configured directives.
    ///
    /// With `encode`, the source URL is embedded as URL-safe base64 instead
    /// of plain text.
    pub fn build(&self, url: &str, encode: bool) -> Result<String> {
        self.build_with_set(url, &self.directives, encode)
    }

    /// Build the URL of `url` with `directives` applied on top of the
    /// configured ones, for this call only.
    ///
    /// A `format` directive in `directives` takes precedence over the
    /// configured format. An empty slice builds the same URL as
    /// [`Builder::build`].
    pub fn build_with(&self, url: &str, directives: &[Directive], encode: bool) -> Result<String> {
        if directives.is_empty() {
            return self.build(url, encode);
        }

        let set = self.directives.overlay(directives);
        self.build_with_set(url, &set, encode)
    }

    fn build_with_set(&self, url: &str, directives: &DirectiveSet, encode: bool) -> Result<String> {
        if url.is_empty() {
            return Err(Error::argument_invalid("source url must not be empty"));
        }
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::argument_invalid("endpoint must be set before building"))?;

        if self.dialect == Dialect::Keyed {
            if let Some(d) = directives.iter().find(|d| d.is_positional_only()) {
                return Err(Error::argument_invalid(format!(
                    "legacy resize {} requires the legacy dialect",
                    d.args()
                )));
            }
        }

        let path = self.dialect.render_path(directives, url, encode);
        debug!("canonical path: {path}");

        let signature = self.signer.sign(&path);
        Ok(format!("{endpoint}/{signature}{path}"))
    }
}
