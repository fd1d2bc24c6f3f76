use anyhow::Result;
use imgsign::imgproxy::{Builder, Config, Directive, Format, ResizingType};
use imgsign::{Context, OsEnv};

fn main() -> Result<()> {
    env_logger::init();

    // Load IMGPROXY_ENDPOINT, IMGPROXY_KEY and IMGPROXY_SALT.
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new()
        .with_endpoint("http://localhost:8080")
        .from_env(&ctx);

    let builder = Builder::from_config(&config)?.with_resize(ResizingType::Fit, 300, 300, false);

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://upload.wikimedia.org/wikipedia/ru/2/24/Lenna.png".to_string());

    println!("{}", builder.build(&source, false)?);
    let overlay = [Directive::format(Format::Webp), Directive::quality(80)?];
    println!("{}", builder.build_with(&source, &overlay, true)?);

    Ok(())
}
