use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

pub const RELEASE_TEXT_TEMPLATE: &str = "release_text";

#[derive(Serialize)]
pub struct ReleaseText<'a> {
    pub tag: &'a str,
    pub url: &'a str,
    pub changelog: &'a str,
}

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    // the output is JSON-encoded later, html escaping would only mangle the notes
    hb.register_escape_fn(handlebars::no_escape);

    let release_text = include_str!("./release_text.hbs").trim_end();

    hb.register_template_string(RELEASE_TEXT_TEMPLATE, release_text)?;

    Ok(hb)
}

pub fn render(text: &ReleaseText) -> Result<String> {
    let hb = handlebars()?;
    let rendered = hb.render(RELEASE_TEXT_TEMPLATE, text)?;
    Ok(rendered)
}
