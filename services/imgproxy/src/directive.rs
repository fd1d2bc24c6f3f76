//! Processing directives and their canonical tokens.
//!
//! Every directive is validated when it is constructed and never changes
//! afterwards. A directive renders in two shapes:
//!
//! - keyed, through [`Display`]: `keyword:arg1:arg2`
//! - positional, through [`Directive::args`]: `arg1:arg2`
//!
//! Booleans are rendered as `1` and `0`. Floats use the shortest
//! representation that round-trips (`1.0` renders as `1`, `0.25` as `0.25`).
//! Trailing empty arguments are dropped.

use std::fmt::{Display, Formatter};

use imgsign_core::hash::base64_url_encode_str;
use imgsign_core::{Error, Result};

use crate::value::*;

/// Identity of a directive inside a [`DirectiveSet`](crate::DirectiveSet).
///
/// Two directives with the same kind can't be active at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DirectiveKind {
    Resize,
    ResizingType,
    ResizingAlgorithm,
    Size,
    Width,
    Height,
    Dpr,
    Enlarge,
    Extend,
    Gravity,
    Crop,
    Padding,
    Trim,
    Rotate,
    Quality,
    MaxBytes,
    Background,
    BackgroundAlpha,
    Adjust,
    Brightness,
    Contrast,
    Saturation,
    Blur,
    Sharpen,
    Pixelate,
    Unsharpening,
    Watermark,
    WatermarkUrl,
    Style,
    JpegOptions,
    PngOptions,
    GifOptions,
    Page,
    VideoThumbnailSecond,
    Preset,
    CacheBuster,
    StripMetadata,
    StripColorProfile,
    AutoRotate,
    Filename,
    Raw,
    Format,
}

impl DirectiveKind {
    /// Keyword that starts the keyed token.
    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Resize => "resize",
            DirectiveKind::ResizingType => "resizing_type",
            DirectiveKind::ResizingAlgorithm => "resizing_algorithm",
            DirectiveKind::Size => "size",
            DirectiveKind::Width => "width",
            DirectiveKind::Height => "height",
            DirectiveKind::Dpr => "dpr",
            DirectiveKind::Enlarge => "enlarge",
            DirectiveKind::Extend => "extend",
            DirectiveKind::Gravity => "gravity",
            DirectiveKind::Crop => "crop",
            DirectiveKind::Padding => "padding",
            DirectiveKind::Trim => "trim",
            DirectiveKind::Rotate => "rotate",
            DirectiveKind::Quality => "quality",
            DirectiveKind::MaxBytes => "max_bytes",
            DirectiveKind::Background => "background",
            DirectiveKind::BackgroundAlpha => "bga",
            DirectiveKind::Adjust => "adjust",
            DirectiveKind::Brightness => "brightness",
            DirectiveKind::Contrast => "contrast",
            DirectiveKind::Saturation => "saturation",
            DirectiveKind::Blur => "blur",
            DirectiveKind::Sharpen => "sharpen",
            DirectiveKind::Pixelate => "pixelate",
            DirectiveKind::Unsharpening => "unsharpening",
            DirectiveKind::Watermark => "watermark",
            DirectiveKind::WatermarkUrl => "watermark_url",
            DirectiveKind::Style => "style",
            DirectiveKind::JpegOptions => "jpeg_options",
            DirectiveKind::PngOptions => "png_options",
            DirectiveKind::GifOptions => "gif_options",
            DirectiveKind::Page => "page",
            DirectiveKind::VideoThumbnailSecond => "video_thumbnail_second",
            DirectiveKind::Preset => "preset",
            DirectiveKind::CacheBuster => "cachebuster",
            DirectiveKind::StripMetadata => "strip_metadata",
            DirectiveKind::StripColorProfile => "strip_color_profile",
            DirectiveKind::AutoRotate => "auto_rotate",
            DirectiveKind::Filename => "filename",
            DirectiveKind::Raw => "raw",
            DirectiveKind::Format => "format",
        }
    }
}

/// Gravity guides imgproxy when some parts of the image have to be cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity(GravityInner);

#[derive(Debug, Clone, Copy, PartialEq)]
enum GravityInner {
    Anchor {
        kind: GravityType,
        offset: Option<(f32, f32)>,
    },
    FocusPoint {
        x: f32,
        y: f32,
    },
}

impl Gravity {
    /// Anchor gravity without offsets.
    pub fn new(kind: GravityType) -> Self {
        Self(GravityInner::Anchor { kind, offset: None })
    }

    /// Anchor gravity shifted by `x` and `y`.
    pub fn with_offset(kind: GravityType, x: f32, y: f32) -> Result<Self> {
        Ok(Self(GravityInner::Anchor {
            kind,
            offset: Some((finite("offset_x", x)?, finite("offset_y", y)?)),
        }))
    }

    /// Smart gravity: libvips picks the most interesting part of the image.
    pub fn smart() -> Self {
        Self::new(GravityType::Smart)
    }

    /// Focus point gravity.
    ///
    /// `x` and `y` are the coordinates of the center of the resulting image,
    /// both between 0 and 1.
    pub fn focus_point(x: f32, y: f32) -> Result<Self> {
        Ok(Self(GravityInner::FocusPoint {
            x: unit_interval("x", x)?,
            y: unit_interval("y", y)?,
        }))
    }

    /// Check if this is smart gravity.
    pub fn is_smart(&self) -> bool {
        matches!(
            self.0,
            GravityInner::Anchor {
                kind: GravityType::Smart,
                ..
            }
        )
    }
}

impl From<GravityType> for Gravity {
    fn from(kind: GravityType) -> Self {
        Gravity::new(kind)
    }
}

/// Renders the gravity arguments without the `gravity` keyword, so it can
/// be embedded into `crop` and `extend` as well.
impl Display for Gravity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            GravityInner::Anchor { kind, offset: None } => write!(f, "{kind}"),
            GravityInner::Anchor {
                kind,
                offset: Some((x, y)),
            } => write!(f, "{kind}:{x}:{y}"),
            GravityInner::FocusPoint { x, y } => write!(f, "fp:{x}:{y}"),
        }
    }
}

/// Saving options for JPEG output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JpegOptions {
    /// Use progressive encoding.
    pub progressive: bool,
    /// Disable chroma subsampling.
    pub no_subsample: bool,
    /// Enable trellis quantisation.
    pub trellis_quant: bool,
    /// Enable overshooting of samples with extreme values.
    pub overshoot_deringing: bool,
    /// Split the spectrum of DCT coefficients into separate scans.
    pub optimize_scans: bool,
    /// Quantization table, between 0 and 8.
    pub quant_table: u8,
}

/// A single image processing instruction.
///
/// Construct directives through the associated functions; the ones that
/// can receive out of domain values return a `Result` and fail with
/// [`ErrorKind::ValidationFailed`](imgsign_core::ErrorKind::ValidationFailed).
///
/// ```
/// use imgsign_imgproxy::{Directive, ResizingType};
///
/// let resize = Directive::resize(ResizingType::Fill, 300, 400, true, false);
/// assert_eq!(resize.to_string(), "resize:fill:300:400:1:0");
/// assert_eq!(resize.args(), "fill:300:400:1:0");
///
/// assert!(Directive::rotate(45).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Directive(Inner);

#[derive(Debug, Clone, PartialEq)]
enum Inner {
    Resize {
        kind: ResizingType,
        width: u32,
        height: u32,
        enlarge: bool,
        extend: bool,
    },
    ResizingType(ResizingType),
    ResizingAlgorithm(ResizingAlgorithm),
    Size {
        width: u32,
        height: u32,
        enlarge: bool,
        extend: bool,
    },
    Width(u32),
    Height(u32),
    Dpr(f32),
    Enlarge(bool),
    Extend {
        extend: bool,
        gravity: Option<Gravity>,
    },
    Gravity(Gravity),
    Crop {
        width: f32,
        height: f32,
        gravity: Option<Gravity>,
    },
    Padding {
        top: u32,
        right: u32,
        bottom: u32,
        left: u32,
    },
    Trim {
        threshold: f32,
        color: Option<String>,
        equal_horizontal: bool,
        equal_vertical: bool,
    },
    Rotate(u16),
    Quality(u8),
    MaxBytes(u64),
    BackgroundRgb(u8, u8, u8),
    BackgroundHex(String),
    BackgroundAlpha(f32),
    Adjust {
        brightness: i16,
        contrast: i16,
        saturation: i16,
    },
    Brightness(i16),
    Contrast(i16),
    Saturation(i16),
    Blur(f32),
    Sharpen(f32),
    Pixelate(u32),
    Unsharpening {
        mode: UnsharpeningMode,
        weight: f32,
        divider: f32,
    },
    Watermark {
        opacity: f32,
        position: Option<WatermarkPosition>,
        offset: Option<(f32, f32)>,
        scale: Option<f32>,
    },
    WatermarkUrl(String),
    Style(String),
    JpegOptions(JpegOptions),
    PngOptions {
        interlaced: bool,
        quantize: bool,
        colors: u8,
    },
    GifOptions {
        optimize_frames: bool,
        optimize_transparency: bool,
    },
    Page(u32),
    VideoThumbnailSecond(u32),
    Preset(Vec<String>),
    CacheBuster(String),
    StripMetadata(bool),
    StripColorProfile(bool),
    AutoRotate(bool),
    Filename(String),
    Raw,
    Format(Format),
    BasicResize {
        kind: ResizingType,
        width: u32,
        height: u32,
        gravity: GravityType,
        enlarge: bool,
    },
}

impl Directive {
    /// Meta-option that defines the resizing type, width, height, enlarge and extend.
    pub fn resize(
        kind: ResizingType,
        width: u32,
        height: u32,
        enlarge: bool,
        extend: bool,
    ) -> Self {
        Self(Inner::Resize {
            kind,
            width,
            height,
            enlarge,
            extend,
        })
    }

    /// Defines how imgproxy resizes the source image.
    pub fn resizing_type(kind: ResizingType) -> Self {
        Self(Inner::ResizingType(kind))
    }

    /// Defines the algorithm imgproxy uses for resizing.
    pub fn resizing_algorithm(algorithm: ResizingAlgorithm) -> Self {
        Self(Inner::ResizingAlgorithm(algorithm))
    }

    /// Meta-option that defines width, height, enlarge and extend.
    pub fn size(width: u32, height: u32, enlarge: bool, extend: bool) -> Self {
        Self(Inner::Size {
            width,
            height,
            enlarge,
            extend,
        })
    }

    /// Width of the resulting image, `0` keeps the source aspect ratio.
    pub fn width(width: u32) -> Self {
        Self(Inner::Width(width))
    }

    /// Height of the resulting image, `0` keeps the source aspect ratio.
    pub fn height(height: u32) -> Self {
        Self(Inner::Height(height))
    }

    /// Multiplies the image dimensions for HiDPI devices. Must be greater than 0.
    pub fn dpr(dpr: f32) -> Result<Self> {
        let dpr = finite("dpr", dpr)?;
        ensure(dpr > 0.0, "dpr", || format!("must be greater than 0, got {dpr}"))?;
        Ok(Self(Inner::Dpr(dpr)))
    }

    /// Enlarge the image if it is smaller than the given size.
    pub fn enlarge(enlarge: bool) -> Self {
        Self(Inner::Enlarge(enlarge))
    }

    /// Extend the image if it is smaller than the given size.
    ///
    /// Smart gravity is not allowed here.
    pub fn extend(extend: bool, gravity: Option<Gravity>) -> Result<Self> {
        if let Some(gravity) = gravity {
            ensure(!gravity.is_smart(), "gravity", || {
                "smart gravity can't be used with extend".to_string()
            })?;
        }
        Ok(Self(Inner::Extend { extend, gravity }))
    }

    /// Gravity used when parts of the image have to be cut.
    pub fn gravity(gravity: impl Into<Gravity>) -> Self {
        Self(Inner::Gravity(gravity.into()))
    }

    /// Area of the image to be processed, applied before resizing.
    ///
    /// Values below 1 are relative to the source size.
    pub fn crop(width: f32, height: f32, gravity: Option<Gravity>) -> Result<Self> {
        Ok(Self(Inner::Crop {
            width: non_negative("width", width)?,
            height: non_negative("height", height)?,
            gravity,
        }))
    }

    /// Padding in css order. Padded space is filled with the background.
    pub fn padding(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self(Inner::Padding {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Removes the surrounding background.
    ///
    /// `color` is a 3 or 6 digit hex color; when absent imgproxy detects it.
    pub fn trim(
        threshold: f32,
        color: Option<&str>,
        equal_horizontal: bool,
        equal_vertical: bool,
    ) -> Result<Self> {
        Ok(Self(Inner::Trim {
            threshold: non_negative("threshold", threshold)?,
            color: color.map(|c| hex_color("color", c)).transpose()?,
            equal_horizontal,
            equal_vertical,
        }))
    }

    /// Rotates the image. The angle must be a multiple of 90.
    pub fn rotate(angle: u16) -> Result<Self> {
        ensure(angle % 90 == 0, "angle", || {
            format!("must be a multiple of 90, got {angle}")
        })?;
        Ok(Self(Inner::Rotate(angle)))
    }

    /// Quality of the resulting image, percentage.
    pub fn quality(quality: u8) -> Result<Self> {
        ensure(quality <= 100, "quality", || {
            format!("must be between 0 and 100, got {quality}")
        })?;
        Ok(Self(Inner::Quality(quality)))
    }

    /// Degrade the quality until the image is under this amount of bytes.
    pub fn max_bytes(max_bytes: u64) -> Result<Self> {
        ensure(max_bytes > 0, "max_bytes", || {
            "must be greater than 0".to_string()
        })?;
        Ok(Self(Inner::MaxBytes(max_bytes)))
    }

    /// Fill the background with an RGB color.
    pub fn background_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Inner::BackgroundRgb(r, g, b))
    }

    /// Fill the background with a 3 or 6 digit hex color.
    pub fn background_hex(color: &str) -> Result<Self> {
        Ok(Self(Inner::BackgroundHex(hex_color("color", color)?)))
    }

    /// Alpha of the background, between 0 and 1.
    pub fn background_alpha(alpha: f32) -> Result<Self> {
        Ok(Self(Inner::BackgroundAlpha(unit_interval("alpha", alpha)?)))
    }

    /// Meta-option that defines brightness, contrast and saturation.
    pub fn adjust(brightness: i16, contrast: i16, saturation: i16) -> Result<Self> {
        Ok(Self(Inner::Adjust {
            brightness: level("brightness", brightness)?,
            contrast: level("contrast", contrast)?,
            saturation: level("saturation", saturation)?,
        }))
    }

    /// Brightness adjustment, between -255 and 255.
    pub fn brightness(brightness: i16) -> Result<Self> {
        Ok(Self(Inner::Brightness(level("brightness", brightness)?)))
    }

    /// Contrast adjustment, between -255 and 255.
    pub fn contrast(contrast: i16) -> Result<Self> {
        Ok(Self(Inner::Contrast(level("contrast", contrast)?)))
    }

    /// Saturation adjustment, between -255 and 255.
    pub fn saturation(saturation: i16) -> Result<Self> {
        Ok(Self(Inner::Saturation(level("saturation", saturation)?)))
    }

    /// Gaussian blur.
    pub fn blur(sigma: f32) -> Result<Self> {
        Ok(Self(Inner::Blur(non_negative("sigma", sigma)?)))
    }

    /// Sharpen filter.
    pub fn sharpen(sigma: f32) -> Result<Self> {
        Ok(Self(Inner::Sharpen(non_negative("sigma", sigma)?)))
    }

    /// Pixelate filter, `size` is the pixel size and must be at least 1.
    pub fn pixelate(size: u32) -> Result<Self> {
        ensure(size >= 1, "size", || "must be at least 1".to_string())?;
        Ok(Self(Inner::Pixelate(size)))
    }

    /// Redefines unsharpening options.
    pub fn unsharpening(mode: UnsharpeningMode, weight: f32, divider: f32) -> Result<Self> {
        Ok(Self(Inner::Unsharpening {
            mode,
            weight: non_negative("weight", weight)?,
            divider: non_negative("divider", divider)?,
        }))
    }

    /// Puts a watermark on the processed image.
    ///
    /// `opacity` is between 0 and 1. Absent parts are left to imgproxy defaults.
    pub fn watermark(
        opacity: f32,
        position: Option<WatermarkPosition>,
        offset: Option<(f32, f32)>,
        scale: Option<f32>,
    ) -> Result<Self> {
        let offset = match offset {
            Some((x, y)) => Some((finite("offset_x", x)?, finite("offset_y", y)?)),
            None => None,
        };
        Ok(Self(Inner::Watermark {
            opacity: unit_interval("opacity", opacity)?,
            position,
            offset,
            scale: scale.map(|s| non_negative("scale", s)).transpose()?,
        }))
    }

    /// Use the image at `url` as the watermark.
    pub fn watermark_url(url: &str) -> Result<Self> {
        ensure(!url.is_empty(), "url", || "must not be empty".to_string())?;
        Ok(Self(Inner::WatermarkUrl(base64_url_encode_str(url))))
    }

    /// CSS prepended to the `<svg>` node of SVG sources.
    pub fn style(style: &str) -> Result<Self> {
        ensure(!style.is_empty(), "style", || "must not be empty".to_string())?;
        Ok(Self(Inner::Style(base64_url_encode_str(style))))
    }

    /// Redefines JPEG saving options.
    pub fn jpeg_options(options: JpegOptions) -> Result<Self> {
        let table = options.quant_table;
        ensure(table <= 8, "quant_table", || {
            format!("must be between 0 and 8, got {table}")
        })?;
        Ok(Self(Inner::JpegOptions(options)))
    }

    /// Redefines PNG saving options. `colors` must be between 1 and 255.
    pub fn png_options(interlaced: bool, quantize: bool, colors: u8) -> Result<Self> {
        ensure(colors >= 1, "quantization_colors", || {
            "must be between 1 and 255, got 0".to_string()
        })?;
        Ok(Self(Inner::PngOptions {
            interlaced,
            quantize,
            colors,
        }))
    }

    /// Redefines GIF saving options.
    pub fn gif_options(optimize_frames: bool, optimize_transparency: bool) -> Self {
        Self(Inner::GifOptions {
            optimize_frames,
            optimize_transparency,
        })
    }

    /// Page (or frame) to use for paginated or animated sources.
    pub fn page(page: u32) -> Self {
        Self(Inner::Page(page))
    }

    /// Second of the video used for the thumbnail.
    pub fn video_thumbnail_second(seconds: u32) -> Self {
        Self(Inner::VideoThumbnailSecond(seconds))
    }

    /// Presets defined on the imgproxy side, applied in order.
    pub fn preset<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|name| plain_arg("preset", name.into()))
            .collect::<Result<Vec<_>>>()?;
        ensure(!names.is_empty(), "preset", || {
            "at least one preset is required".to_string()
        })?;
        Ok(Self(Inner::Preset(names)))
    }

    /// Token that only busts CDN and browser caches.
    pub fn cache_buster(token: &str) -> Result<Self> {
        Ok(Self(Inner::CacheBuster(plain_arg("cachebuster", token)?)))
    }

    /// Strip metadata (EXIF, IPTC, ...) from the output.
    pub fn strip_metadata(strip: bool) -> Self {
        Self(Inner::StripMetadata(strip))
    }

    /// Convert the embedded color profile to sRGB and remove it.
    pub fn strip_color_profile(strip: bool) -> Self {
        Self(Inner::StripColorProfile(strip))
    }

    /// Rotate the image based on the EXIF orientation.
    pub fn auto_rotate(auto_rotate: bool) -> Self {
        Self(Inner::AutoRotate(auto_rotate))
    }

    /// Filename for the `Content-Disposition` header.
    pub fn filename(filename: &str) -> Result<Self> {
        Ok(Self(Inner::Filename(plain_arg("filename", filename)?)))
    }

    /// Return the source image without processing it.
    pub fn raw() -> Self {
        Self(Inner::Raw)
    }

    /// Resulting image format.
    ///
    /// Format is never rendered as a path segment; it becomes the
    /// extension of the source URL.
    pub fn format(format: Format) -> Self {
        Self(Inner::Format(format))
    }

    /// Legacy resize meta-option: type, width, height, gravity and enlarge.
    ///
    /// Only the legacy dialect understands it. It shares the `resize` kind,
    /// so it replaces a keyed resize and the other way around. Width and
    /// height must be greater than 0.
    pub fn basic_resize(
        kind: ResizingType,
        width: u32,
        height: u32,
        gravity: GravityType,
        enlarge: bool,
    ) -> Result<Self> {
        ensure(width > 0, "width", || "must be greater than 0".to_string())?;
        ensure(height > 0, "height", || "must be greater than 0".to_string())?;
        Ok(Self(Inner::BasicResize {
            kind,
            width,
            height,
            gravity,
            enlarge,
        }))
    }

    /// Kind of this directive.
    pub fn kind(&self) -> DirectiveKind {
        match &self.0 {
            Inner::Resize { .. } => DirectiveKind::Resize,
            Inner::ResizingType(_) => DirectiveKind::ResizingType,
            Inner::ResizingAlgorithm(_) => DirectiveKind::ResizingAlgorithm,
            Inner::Size { .. } => DirectiveKind::Size,
            Inner::Width(_) => DirectiveKind::Width,
            Inner::Height(_) => DirectiveKind::Height,
            Inner::Dpr(_) => DirectiveKind::Dpr,
            Inner::Enlarge(_) => DirectiveKind::Enlarge,
            Inner::Extend { .. } => DirectiveKind::Extend,
            Inner::Gravity(_) => DirectiveKind::Gravity,
            Inner::Crop { .. } => DirectiveKind::Crop,
            Inner::Padding { .. } => DirectiveKind::Padding,
            Inner::Trim { .. } => DirectiveKind::Trim,
            Inner::Rotate(_) => DirectiveKind::Rotate,
            Inner::Quality(_) => DirectiveKind::Quality,
            Inner::MaxBytes(_) => DirectiveKind::MaxBytes,
            Inner::BackgroundRgb(..) | Inner::BackgroundHex(_) => DirectiveKind::Background,
            Inner::BackgroundAlpha(_) => DirectiveKind::BackgroundAlpha,
            Inner::Adjust { .. } => DirectiveKind::Adjust,
            Inner::Brightness(_) => DirectiveKind::Brightness,
            Inner::Contrast(_) => DirectiveKind::Contrast,
            Inner::Saturation(_) => DirectiveKind::Saturation,
            Inner::Blur(_) => DirectiveKind::Blur,
            Inner::Sharpen(_) => DirectiveKind::Sharpen,
            Inner::Pixelate(_) => DirectiveKind::Pixelate,
            Inner::Unsharpening { .. } => DirectiveKind::Unsharpening,
            Inner::Watermark { .. } => DirectiveKind::Watermark,
            Inner::WatermarkUrl(_) => DirectiveKind::WatermarkUrl,
            Inner::Style(_) => DirectiveKind::Style,
            Inner::JpegOptions(_) => DirectiveKind::JpegOptions,
            Inner::PngOptions { .. } => DirectiveKind::PngOptions,
            Inner::GifOptions { .. } => DirectiveKind::GifOptions,
            Inner::Page(_) => DirectiveKind::Page,
            Inner::VideoThumbnailSecond(_) => DirectiveKind::VideoThumbnailSecond,
            Inner::Preset(_) => DirectiveKind::Preset,
            Inner::CacheBuster(_) => DirectiveKind::CacheBuster,
            Inner::StripMetadata(_) => DirectiveKind::StripMetadata,
            Inner::StripColorProfile(_) => DirectiveKind::StripColorProfile,
            Inner::AutoRotate(_) => DirectiveKind::AutoRotate,
            Inner::Filename(_) => DirectiveKind::Filename,
            Inner::Raw => DirectiveKind::Raw,
            Inner::Format(_) => DirectiveKind::Format,
            Inner::BasicResize { .. } => DirectiveKind::Resize,
        }
    }

    /// Check if this directive only has a positional form.
    pub fn is_positional_only(&self) -> bool {
        matches!(self.0, Inner::BasicResize { .. })
    }

    /// Format carried by a `format` directive.
    pub fn as_format(&self) -> Option<Format> {
        match self.0 {
            Inner::Format(format) => Some(format),
            _ => None,
        }
    }

    /// Positional form: the arguments without the keyword.
    pub fn args(&self) -> String {
        let args = Args::default();
        let args = match &self.0 {
            Inner::Resize {
                kind,
                width,
                height,
                enlarge,
                extend,
            } => args
                .arg(kind)
                .arg(width)
                .arg(height)
                .flag(*enlarge)
                .flag(*extend),
            Inner::ResizingType(kind) => args.arg(kind),
            Inner::ResizingAlgorithm(algorithm) => args.arg(algorithm),
            Inner::Size {
                width,
                height,
                enlarge,
                extend,
            } => args.arg(width).arg(height).flag(*enlarge).flag(*extend),
            Inner::Width(v) | Inner::Height(v) | Inner::Page(v) | Inner::Pixelate(v) => {
                args.arg(v)
            }
            Inner::VideoThumbnailSecond(v) => args.arg(v),
            Inner::Dpr(v) | Inner::BackgroundAlpha(v) | Inner::Blur(v) | Inner::Sharpen(v) => {
                args.arg(v)
            }
            Inner::Enlarge(v)
            | Inner::StripMetadata(v)
            | Inner::StripColorProfile(v)
            | Inner::AutoRotate(v) => args.flag(*v),
            Inner::Extend { extend, gravity } => args.flag(*extend).opt(gravity.as_ref()),
            Inner::Gravity(gravity) => args.arg(gravity),
            Inner::Crop {
                width,
                height,
                gravity,
            } => args.arg(width).arg(height).opt(gravity.as_ref()),
            Inner::Padding {
                top,
                right,
                bottom,
                left,
            } => args.arg(top).arg(right).arg(bottom).arg(left),
            Inner::Trim {
                threshold,
                color,
                equal_horizontal,
                equal_vertical,
            } => args
                .arg(threshold)
                .opt(color.as_ref())
                .flag(*equal_horizontal)
                .flag(*equal_vertical),
            Inner::Rotate(v) => args.arg(v),
            Inner::Quality(v) => args.arg(v),
            Inner::MaxBytes(v) => args.arg(v),
            Inner::BackgroundRgb(r, g, b) => args.arg(r).arg(g).arg(b),
            Inner::BackgroundHex(v)
            | Inner::WatermarkUrl(v)
            | Inner::Style(v)
            | Inner::CacheBuster(v)
            | Inner::Filename(v) => args.arg(v),
            Inner::Adjust {
                brightness,
                contrast,
                saturation,
            } => args.arg(brightness).arg(contrast).arg(saturation),
            Inner::Brightness(v) | Inner::Contrast(v) | Inner::Saturation(v) => args.arg(v),
            Inner::Unsharpening {
                mode,
                weight,
                divider,
            } => args.arg(mode).arg(weight).arg(divider),
            Inner::Watermark {
                opacity,
                position,
                offset,
                scale,
            } => args
                .arg(opacity)
                .opt(position.as_ref())
                .opt(offset.map(|(x, _)| x))
                .opt(offset.map(|(_, y)| y))
                .opt(scale.as_ref()),
            Inner::JpegOptions(o) => args
                .flag(o.progressive)
                .flag(o.no_subsample)
                .flag(o.trellis_quant)
                .flag(o.overshoot_deringing)
                .flag(o.optimize_scans)
                .arg(o.quant_table),
            Inner::PngOptions {
                interlaced,
                quantize,
                colors,
            } => args.flag(*interlaced).flag(*quantize).arg(colors),
            Inner::GifOptions {
                optimize_frames,
                optimize_transparency,
            } => args.flag(*optimize_frames).flag(*optimize_transparency),
            Inner::Preset(names) => names.iter().fold(args, |args, name| args.arg(name)),
            Inner::Raw => args.flag(true),
            Inner::Format(format) => args.arg(format),
            Inner::BasicResize {
                kind,
                width,
                height,
                gravity,
                enlarge,
            } => args
                .arg(kind)
                .arg(width)
                .arg(height)
                .arg(gravity)
                .flag(*enlarge),
        };

        args.finish()
    }
}

/// Renders the keyed token: `keyword:args`.
impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let args = self.args();
        if args.is_empty() {
            f.write_str(self.kind().keyword())
        } else {
            write!(f, "{}:{}", self.kind().keyword(), args)
        }
    }
}

/// Colon separated argument list.
#[derive(Default)]
struct Args(Vec<String>);

impl Args {
    fn arg(mut self, v: impl Display) -> Self {
        self.0.push(v.to_string());
        self
    }

    fn flag(self, v: bool) -> Self {
        self.arg(if v { "1" } else { "0" })
    }

    /// Absent values keep their position as an empty argument.
    fn opt(mut self, v: Option<impl Display>) -> Self {
        self.0.push(v.map(|v| v.to_string()).unwrap_or_default());
        self
    }

    fn finish(mut self) -> String {
        while self.0.last().is_some_and(|v| v.is_empty()) {
            self.0.pop();
        }
        self.0.join(":")
    }
}

fn ensure(cond: bool, field: &str, message: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::validation_failed(field, message()))
    }
}

fn finite(field: &str, v: f32) -> Result<f32> {
    ensure(v.is_finite(), field, || format!("must be a finite number, got {v}"))?;
    Ok(v)
}

fn non_negative(field: &str, v: f32) -> Result<f32> {
    let v = finite(field, v)?;
    ensure(v >= 0.0, field, || format!("must not be negative, got {v}"))?;
    Ok(v)
}

fn unit_interval(field: &str, v: f32) -> Result<f32> {
    let v = finite(field, v)?;
    ensure((0.0..=1.0).contains(&v), field, || {
        format!("must be between 0 and 1, got {v}")
    })?;
    Ok(v)
}

fn level(field: &str, v: i16) -> Result<i16> {
    ensure((-255..=255).contains(&v), field, || {
        format!("must be between -255 and 255, got {v}")
    })?;
    Ok(v)
}

fn hex_color(field: &str, v: &str) -> Result<String> {
    ensure(
        matches!(v.len(), 3 | 6) && v.chars().all(|c| c.is_ascii_hexdigit()),
        field,
        || format!("must be a 3 or 6 digit hex color, got {v:?}"),
    )?;
    Ok(v.to_string())
}

/// Free-form arguments must not break the path or the argument list.
fn plain_arg(field: &str, v: impl Into<String>) -> Result<String> {
    let v = v.into();
    ensure(!v.is_empty(), field, || "must not be empty".to_string())?;
    ensure(!v.contains(&['/', ':'][..]), field, || {
        format!("must not contain '/' or ':', got {v:?}")
    })?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Directive::resize(ResizingType::Fill, 300, 400, false, false), "resize:fill:300:400:0:0" ; "resize")]
    #[test_case(Directive::size(300, 0, true, false), "size:300:0:1:0" ; "size")]
    #[test_case(Directive::width(300), "width:300" ; "width")]
    #[test_case(Directive::height(0), "height:0" ; "height")]
    #[test_case(Directive::dpr(2.0).unwrap(), "dpr:2" ; "dpr")]
    #[test_case(Directive::enlarge(true), "enlarge:1" ; "enlarge")]
    #[test_case(Directive::extend(true, Some(Gravity::new(GravityType::South))).unwrap(), "extend:1:so" ; "extend with gravity")]
    #[test_case(Directive::extend(false, None).unwrap(), "extend:0" ; "extend")]
    #[test_case(Directive::gravity(GravityType::Smart), "gravity:sm" ; "gravity")]
    #[test_case(Directive::gravity(Gravity::with_offset(GravityType::NorthEast, 10.0, 20.5).unwrap()), "gravity:noea:10:20.5" ; "gravity with offset")]
    #[test_case(Directive::gravity(Gravity::focus_point(0.5, 0.25).unwrap()), "gravity:fp:0.5:0.25" ; "gravity focus point")]
    #[test_case(Directive::crop(100.0, 0.5, Some(Gravity::smart())).unwrap(), "crop:100:0.5:sm" ; "crop")]
    #[test_case(Directive::padding(10, 0, 10, 0), "padding:10:0:10:0" ; "padding")]
    #[test_case(Directive::trim(10.0, None, true, false).unwrap(), "trim:10::1:0" ; "trim without color")]
    #[test_case(Directive::trim(0.5, Some("fff"), false, false).unwrap(), "trim:0.5:fff:0:0" ; "trim")]
    #[test_case(Directive::rotate(270).unwrap(), "rotate:270" ; "rotate")]
    #[test_case(Directive::quality(80).unwrap(), "quality:80" ; "quality")]
    #[test_case(Directive::max_bytes(10240).unwrap(), "max_bytes:10240" ; "max bytes")]
    #[test_case(Directive::background_rgb(255, 0, 128), "background:255:0:128" ; "background rgb")]
    #[test_case(Directive::background_hex("ffddee").unwrap(), "background:ffddee" ; "background hex")]
    #[test_case(Directive::background_alpha(0.4).unwrap(), "bga:0.4" ; "background alpha")]
    #[test_case(Directive::adjust(-10, 20, 0).unwrap(), "adjust:-10:20:0" ; "adjust")]
    #[test_case(Directive::blur(0.3).unwrap(), "blur:0.3" ; "blur")]
    #[test_case(Directive::sharpen(1.0).unwrap(), "sharpen:1" ; "sharpen")]
    #[test_case(Directive::pixelate(5).unwrap(), "pixelate:5" ; "pixelate")]
    #[test_case(Directive::unsharpening(UnsharpeningMode::Always, 1.5, 24.0).unwrap(), "unsharpening:always:1.5:24" ; "unsharpening")]
    #[test_case(Directive::watermark(0.5, None, None, None).unwrap(), "watermark:0.5" ; "watermark opacity only")]
    #[test_case(Directive::watermark(1.0, Some(WatermarkPosition::SouthEast), Some((10.0, 5.0)), Some(0.2)).unwrap(), "watermark:1:soea:10:5:0.2" ; "watermark")]
    #[test_case(Directive::watermark(1.0, None, None, Some(0.2)).unwrap(), "watermark:1::::0.2" ; "watermark scale only")]
    #[test_case(Directive::watermark_url("https://example.com/logo.png").unwrap(), "watermark_url:aHR0cHM6Ly9leGFtcGxlLmNvbS9sb2dvLnBuZw" ; "watermark url")]
    #[test_case(Directive::jpeg_options(JpegOptions { progressive: true, quant_table: 3, ..Default::default() }).unwrap(), "jpeg_options:1:0:0:0:0:3" ; "jpeg options")]
    #[test_case(Directive::png_options(true, true, 128).unwrap(), "png_options:1:1:128" ; "png options")]
    #[test_case(Directive::gif_options(true, false), "gif_options:1:0" ; "gif options")]
    #[test_case(Directive::page(2), "page:2" ; "page")]
    #[test_case(Directive::video_thumbnail_second(7), "video_thumbnail_second:7" ; "video thumbnail second")]
    #[test_case(Directive::preset(["sharp", "small"]).unwrap(), "preset:sharp:small" ; "preset")]
    #[test_case(Directive::cache_buster("v2").unwrap(), "cachebuster:v2" ; "cache buster")]
    #[test_case(Directive::strip_metadata(true), "strip_metadata:1" ; "strip metadata")]
    #[test_case(Directive::strip_color_profile(false), "strip_color_profile:0" ; "strip color profile")]
    #[test_case(Directive::auto_rotate(true), "auto_rotate:1" ; "auto rotate")]
    #[test_case(Directive::filename("lenna.jpg").unwrap(), "filename:lenna.jpg" ; "filename")]
    #[test_case(Directive::raw(), "raw:1" ; "raw")]
    #[test_case(Directive::format(Format::Png), "format:png" ; "format")]
    fn test_keyed_token(directive: Directive, expected: &str) {
        assert_eq!(directive.to_string(), expected);
    }

    #[test]
    fn test_positional_args() {
        let directive =
            Directive::basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)
                .unwrap();

        assert_eq!(directive.args(), "fill:300:300:no:1");
        assert_eq!(directive.kind(), DirectiveKind::Resize);
        assert!(directive.is_positional_only());
        let keyed = Directive::resize(ResizingType::Fill, 300, 300, true, false);
        assert_eq!(keyed.kind(), directive.kind());
        assert!(!keyed.is_positional_only());
        assert_eq!(
            Directive::resize(ResizingType::Fit, 10, 20, false, true).args(),
            "fit:10:20:0:1"
        );
    }

    #[test_case(Directive::rotate(45), "angle" ; "rotate not multiple of 90")]
    #[test_case(Directive::quality(101), "quality" ; "quality over 100")]
    #[test_case(Directive::max_bytes(0), "max_bytes" ; "max bytes zero")]
    #[test_case(Directive::dpr(0.0), "dpr" ; "dpr zero")]
    #[test_case(Directive::dpr(f32::NAN), "dpr" ; "dpr nan")]
    #[test_case(Directive::blur(-1.0), "sigma" ; "negative blur")]
    #[test_case(Directive::crop(-1.0, 10.0, None), "width" ; "negative crop width")]
    #[test_case(Directive::adjust(0, 256, 0), "contrast" ; "adjust out of range")]
    #[test_case(Directive::brightness(-256), "brightness" ; "brightness out of range")]
    #[test_case(Directive::png_options(false, true, 0), "quantization_colors" ; "png colors zero")]
    #[test_case(Directive::jpeg_options(JpegOptions { quant_table: 9, ..Default::default() }), "quant_table" ; "jpeg quant table")]
    #[test_case(Directive::background_alpha(1.5), "alpha" ; "background alpha over 1")]
    #[test_case(Directive::background_hex("red"), "color" ; "background not hex")]
    #[test_case(Directive::watermark(2.0, None, None, None), "opacity" ; "watermark opacity")]
    #[test_case(Directive::extend(true, Some(Gravity::smart())), "gravity" ; "extend smart gravity")]
    #[test_case(Directive::preset(Vec::<String>::new()), "preset" ; "preset empty")]
    #[test_case(Directive::preset(["a:b"]), "preset" ; "preset with colon")]
    #[test_case(Directive::filename("a/b.png"), "filename" ; "filename with slash")]
    #[test_case(Directive::pixelate(0), "size" ; "pixelate zero")]
    #[test_case(Directive::basic_resize(ResizingType::Fill, 0, 300, GravityType::North, true), "width" ; "basic resize zero width")]
    fn test_validation_failed(result: Result<Directive>, field: &str) {
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert!(
            err.to_string().starts_with(&format!("{field}: ")),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn test_focus_point_range() {
        let err = Gravity::focus_point(0.5, -0.1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert!(err.to_string().starts_with("y: "));
    }

    #[test]
    fn test_background_kinds_collide() {
        assert_eq!(
            Directive::background_rgb(0, 0, 0).kind(),
            Directive::background_hex("000").unwrap().kind()
        );
    }
}
