use imgsign_core::hash::base64_url_encode_str;

use crate::{Directive, DirectiveSet};

/// URL dialect spoken by the imgproxy instance.
///
/// Both dialects share the source URL embedding and the signature; they
/// only differ in how a directive is written into the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Directives carry their keyword: `resize:fill:300:400:0:0` (imgproxy 2.x).
    #[default]
    Keyed,
    /// Directives are positional, without keyword: `fill:300:300:no:1` (imgproxy 1.x).
    Legacy,
}

impl Dialect {
    /// Render a single directive token.
    pub fn token(&self, directive: &Directive) -> String {
        match self {
            Dialect::Keyed => directive.to_string(),
            Dialect::Legacy => directive.args(),
        }
    }

    /// Render the canonical path for `url`.
    ///
    /// ## Format
    ///
    /// ```text
    /// plain:   /{token}/{token}/plain/{url}[@{format}]
    /// encoded: /{token}/{token}/{base64url(url)}[.{format}]
    /// ```
    ///
    /// The returned path starts with `/` and is exactly the string that gets
    /// signed.
    pub fn render_path(&self, directives: &DirectiveSet, url: &str, encode: bool) -> String {
        let mut path = String::new();
        for directive in directives.iter() {
            path.push('/');
            path.push_str(&self.token(directive));
        }

        if encode {
            path.push('/');
            path.push_str(&base64_url_encode_str(url));
            if let Some(format) = directives.format() {
                path.push('.');
                path.push_str(format.as_str());
            }
        } else {
            path.push_str("/plain/");
            path.push_str(url);
            if let Some(format) = directives.format() {
                path.push('@');
                path.push_str(format.as_str());
            }
        }

        path
    }
}
