use anyhow::Result;
use imgsign_imgproxy::{Directive, Format, GravityType, ResizingType};
use pretty_assertions::assert_eq;

use super::legacy_builder;
use crate::{HOST, URL};

const ENCODED_URL: &str =
    "aHR0cHM6Ly91cGxvYWQud2lraW1lZGlhLm9yZy93aWtpcGVkaWEvcnUvMi8yNC9MZW5uYS5wbmc";

#[test]
fn test_plain_url() -> Result<()> {
    let url = legacy_builder()
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)?
        .with_format(Format::Jpg)
        .build(URL, false)?;

    assert_eq!(
        url,
        format!("{HOST}/5brJRkhAX0yf2HM9qVrCvRF72VNmmDvpPcFJhLXnx5k/fill:300:300:no:1/plain/{URL}@jpg")
    );
    Ok(())
}

#[test]
fn test_encoded_url() -> Result<()> {
    let url = legacy_builder()
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)?
        .with_format(Format::Jpg)
        .build(URL, true)?;

    assert_eq!(
        url,
        format!("{HOST}/XsvPU1VVCanwDJNEtLH43CnRS1sqJ0LnARho-YltVtQ/fill:300:300:no:1/{ENCODED_URL}.jpg")
    );
    Ok(())
}

#[test]
fn test_without_format() -> Result<()> {
    let url = legacy_builder()
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)?
        .build(URL, false)?;

    assert_eq!(
        url,
        format!("{HOST}/1sOUyetVMz2K0R8aDAQW2lt8_bIrhbuUftXl2KH37bM/fill:300:300:no:1/plain/{URL}")
    );
    Ok(())
}

#[test]
fn test_format_override() -> Result<()> {
    let builder = legacy_builder()
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)?
        .with_format(Format::Jpg);

    let url = builder.build_with(URL, &[Directive::format(Format::Png)], false)?;
    assert_eq!(
        url,
        format!("{HOST}/J4ndawFguj_4cEsrdQXUK-NJ6_9__36A-NhJsAOArwU/fill:300:300:no:1/plain/{URL}@png")
    );

    // The configured format is left untouched.
    assert_eq!(builder.directives().format(), Some(Format::Jpg));
    Ok(())
}

#[test]
fn test_basic_resize_rejects_zero_dimensions() {
    for (width, height) in [(0, 300), (300, 0)] {
        let res = legacy_builder().with_basic_resize(
            ResizingType::Fit,
            width,
            height,
            GravityType::Center,
            false,
        );
        assert!(res.is_err(), "width: {width}, height: {height}");
    }
}
