//! Closed value sets carried by directives.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use imgsign_core::{Error, Result};

/// Declares a fieldless enum whose variants map one to one onto the
/// identifiers imgproxy understands.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Identifier used in URLs.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(Error::validation_failed(
                        $field,
                        format!("unknown value {s:?}"),
                    )),
                }
            }
        }
    };
}

keyword_enum! {
    /// Defines how the source image is resized.
    ResizingType, "resizing_type" {
        /// Keep aspect ratio and fit the given size.
        Fit => "fit",
        /// Keep aspect ratio, fill the given size and crop projecting parts.
        Fill => "fill",
        /// Same as fill, but never enlarges over the source size.
        FillDown => "fill-down",
        /// Ignore aspect ratio and resize to exactly the given size.
        Force => "force",
        /// Use fill when source and result orientation match, fit otherwise.
        Auto => "auto",
    }
}

keyword_enum! {
    /// Algorithm used for resizing.
    ResizingAlgorithm, "resizing_algorithm" {
        /// Nearest neighbour.
        Nearest => "nearest",
        /// Bilinear.
        Linear => "linear",
        /// Bicubic.
        Cubic => "cubic",
        /// Lanczos with a = 2.
        Lanczos2 => "lanczos2",
        /// Lanczos with a = 3.
        Lanczos3 => "lanczos3",
    }
}

keyword_enum! {
    /// Anchor used when parts of the image have to be cut.
    ///
    /// Focus point gravity carries coordinates and is built with
    /// [`Gravity::focus_point`](crate::Gravity::focus_point) instead.
    GravityType, "gravity" {
        /// Top edge.
        North => "no",
        /// Bottom edge.
        South => "so",
        /// Right edge.
        East => "ea",
        /// Left edge.
        West => "we",
        /// Top-right corner.
        NorthEast => "noea",
        /// Top-left corner.
        NorthWest => "nowe",
        /// Bottom-right corner.
        SouthEast => "soea",
        /// Bottom-left corner.
        SouthWest => "sowe",
        /// Center.
        Center => "ce",
        /// Most "interesting" part of the image, detected by libvips.
        Smart => "sm",
    }
}

keyword_enum! {
    /// Where the watermark is placed.
    WatermarkPosition, "position" {
        /// Top edge.
        North => "no",
        /// Bottom edge.
        South => "so",
        /// Right edge.
        East => "ea",
        /// Left edge.
        West => "we",
        /// Top-right corner.
        NorthEast => "noea",
        /// Top-left corner.
        NorthWest => "nowe",
        /// Bottom-right corner.
        SouthEast => "soea",
        /// Bottom-left corner.
        SouthWest => "sowe",
        /// Center.
        Center => "ce",
        /// Repeat the watermark to fill the whole image.
        Replicate => "re",
    }
}

keyword_enum! {
    /// Resulting image format.
    Format, "format" {
        /// JPEG
        Jpg => "jpg",
        /// PNG
        Png => "png",
        /// GIF
        Gif => "gif",
        /// ICO
        Ico => "ico",
        /// SVG
        Svg => "svg",
        /// BMP
        Bmp => "bmp",
        /// TIFF
        Tiff => "tiff",
        /// WebP
        Webp => "webp",
        /// AVIF
        Avif => "avif",
        /// MP4
        Mp4 => "mp4",
    }
}

keyword_enum! {
    /// When unsharpening is applied.
    UnsharpeningMode, "unsharpening" {
        /// Apply only when the image was downscaled.
        Auto => "auto",
        /// Never apply.
        None => "none",
        /// Always apply.
        Always => "always",
    }
}
