use anyhow::Result;
use imgsign_core::ErrorKind;
use imgsign_imgproxy::{Directive, DirectiveKind, Format, GravityType, ResizingType};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{keyed_builder, split_url};
use crate::{HOST, URL};

const ENCODED_URL: &str =
    "aHR0cHM6Ly91cGxvYWQud2lraW1lZGlhLm9yZy93aWtpcGVkaWEvcnUvMi8yNC9MZW5uYS5wbmc";

#[test]
fn test_plain_url() -> Result<()> {
    let url = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, true)
        .with_format(Format::Jpg)
        .build(URL, false)?;

    assert_eq!(
        url,
        format!("{HOST}/G-wVPuU_0HLI9b2CMk6FCH464vhvIytv4UeINfVK1Xo/resize:fill:300:400:1:0/plain/{URL}@jpg")
    );
    Ok(())
}

#[test_case(
    &[Directive::format(Format::Jpg)],
    false,
    "KyXeinOA60fQtheg3ncXUy447c_WWcvQD7SwmgFkjBo",
    "/resize:fill:300:400:0:0/plain/https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png@jpg"
    ; "format only"
)]
#[test_case(
    &[Directive::gravity(GravityType::Smart), Directive::format(Format::Jpg)],
    false,
    "8oHkICIOkLKR1pWj6_qZFtccJSTUbb3o--MqLhHk9sw",
    "/resize:fill:300:400:0:0/gravity:sm/plain/https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png@jpg"
    ; "smart gravity plain"
)]
#[test_case(
    &[Directive::gravity(GravityType::Smart), Directive::format(Format::Png)],
    false,
    "wgeavQ09SVn1vBqE0OXQVDTjcpyVDrLgJi7Xpw0Tf8Q",
    "/resize:fill:300:400:0:0/gravity:sm/plain/https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png@png"
    ; "smart gravity png"
)]
#[test_case(
    &[Directive::format(Format::Jpg)],
    true,
    "Jr7OipYYhfUxUEe2FBSRwv3ojoudLOIlGabaSNubtw4",
    "/resize:fill:300:400:0:0/aHR0cHM6Ly91cGxvYWQud2lraW1lZGlhLm9yZy93aWtpcGVkaWEvcnUvMi8yNC9MZW5uYS5wbmc.jpg"
    ; "encoded"
)]
#[test_case(
    &[Directive::gravity(GravityType::Smart), Directive::format(Format::Jpg)],
    true,
    "H07AJg_xNzix5IB1pG9zd8WQ4_Ykld5mF0FxQaM1yrM",
    "/resize:fill:300:400:0:0/gravity:sm/aHR0cHM6Ly91cGxvYWQud2lraW1lZGlhLm9yZy93aWtpcGVkaWEvcnUvMi8yNC9MZW5uYS5wbmc.jpg"
    ; "smart gravity encoded"
)]
#[test_case(
    &[],
    false,
    "DTFFWVHb5MPEPfNNvR-1pWfYt-jNFCZRr7jEHNPsNBI",
    "/resize:fill:300:400:0:0/plain/https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png"
    ; "no format"
)]
fn test_build_with(
    directives: &[Directive],
    encode: bool,
    signature: &str,
    path: &str,
) -> Result<()> {
    let builder = keyed_builder().with_resize(ResizingType::Fill, 300, 400, false);

    let url = builder.build_with(URL, directives, encode)?;
    assert_eq!(split_url(&url), (signature, path));
    Ok(())
}

#[test]
fn test_quality_directive() -> Result<()> {
    let url = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_option(Directive::quality(80)?)
        .with_format(Format::Jpg)
        .build(URL, false)?;

    assert_eq!(
        url,
        format!("{HOST}/-lRKzr_pW4a2HiFct7w634oSSBF2aw4DumiHbhXbmGw/resize:fill:300:400:0:0/quality:80/plain/{URL}@jpg")
    );
    Ok(())
}

#[test]
fn test_non_latin_url() -> Result<()> {
    let url = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_format(Format::Jpg)
        .build(
            "https://upload.wikimedia.org/wikipedia/ru/2/24/Лена.png",
            true,
        )?;

    assert_eq!(
        url,
        format!("{HOST}/j2Itxz1q8LiVeTiOQykI061HUdOYRN3_201PuzkM2C8/resize:fill:300:400:0:0/aHR0cHM6Ly91cGxvYWQud2lraW1lZGlhLm9yZy93aWtpcGVkaWEvcnUvMi8yNC_Qm9C10L3QsC5wbmc.jpg")
    );
    Ok(())
}

#[test]
fn test_build_is_deterministic() -> Result<()> {
    let builder = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_format(Format::Jpg);

    let first = builder.build(URL, true)?;
    for _ in 0..3 {
        assert_eq!(builder.build(URL, true)?, first);
    }
    assert!(first.ends_with(&format!("/{ENCODED_URL}.jpg")));
    Ok(())
}

#[test]
fn test_same_kind_replaces() -> Result<()> {
    let builder = keyed_builder()
        .with_resize(ResizingType::Fit, 100, 100, true)
        .with_option(Directive::gravity(GravityType::Smart))
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_format(Format::Png)
        .with_format(Format::Jpg);

    assert_eq!(builder.directives().len(), 2);
    let url = builder.build(URL, false)?;
    assert_eq!(
        url,
        format!("{HOST}/8oHkICIOkLKR1pWj6_qZFtccJSTUbb3o--MqLhHk9sw/resize:fill:300:400:0:0/gravity:sm/plain/{URL}@jpg")
    );
    Ok(())
}

#[test]
fn test_build_with_does_not_mutate() -> Result<()> {
    let builder = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_format(Format::Jpg);
    let before = builder.build(URL, false)?;

    let overlaid = builder.build_with(
        URL,
        &[
            Directive::gravity(GravityType::Smart),
            Directive::quality(80)?,
            Directive::format(Format::Webp),
        ],
        false,
    )?;
    assert_eq!(
        overlaid,
        format!("{HOST}/xJdbde6OqPV4-ZNFleckwz8Rn4TIu5NQWYWy7Og-94Y/resize:fill:300:400:0:0/gravity:sm/quality:80/plain/{URL}@webp")
    );

    assert_eq!(builder.build(URL, false)?, before);
    assert!(builder.directives().get(DirectiveKind::Gravity).is_none());
    assert_eq!(builder.directives().format(), Some(Format::Jpg));
    Ok(())
}

#[test]
fn test_insecure() -> Result<()> {
    let url = imgsign_imgproxy::Builder::keyed()
        .with_endpoint(HOST)?
        .with_resize(ResizingType::Fill, 300, 400, false)
        .build(URL, false)?;

    assert_eq!(
        url,
        format!("{HOST}/insecure/resize:fill:300:400:0:0/plain/{URL}")
    );
    Ok(())
}

#[test]
fn test_no_directives() -> Result<()> {
    let url = keyed_builder().build("local:///a.png", true)?;

    let (_, path) = split_url(&url);
    assert_eq!(path, "/bG9jYWw6Ly8vYS5wbmc");
    Ok(())
}

#[test]
fn test_legacy_resize_shares_resize_slot() {
    let builder = keyed_builder()
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)
        .unwrap();

    assert_eq!(builder.directives().len(), 1);
    assert!(builder
        .directives()
        .get(DirectiveKind::Resize)
        .is_some_and(|d| d.is_positional_only()));

    let err = builder.build(URL, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    let legacy =
        Directive::basic_resize(ResizingType::Fit, 10, 10, GravityType::Center, false).unwrap();
    let err = keyed_builder().build_with(URL, &[legacy], true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
}

#[test]
fn test_keyed_resize_replaces_legacy_resize() -> Result<()> {
    let url = keyed_builder()
        .with_basic_resize(ResizingType::Fill, 300, 300, GravityType::North, true)?
        .with_resize(ResizingType::Fill, 300, 400, false)
        .with_format(Format::Jpg)
        .build(URL, false)?;

    let (_, path) = split_url(&url);
    assert_eq!(path.matches("resize:").count(), 1);
    assert_eq!(
        url,
        format!("{HOST}/KyXeinOA60fQtheg3ncXUy447c_WWcvQD7SwmgFkjBo/resize:fill:300:400:0:0/plain/{URL}@jpg")
    );
    Ok(())
}
