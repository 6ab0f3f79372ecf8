//! Test: a downstream crate can assemble a page from trusted pieces only.

use safevalues::{
    concat_html, escape_html, safe_script, script_to_html, script_url_to_html,
    trusted_resource_url, SafeHtml, ScriptOptions, ScriptSrcOptions,
};

fn render(title: &str) -> SafeHtml {
    concat_html([
        escape_html(title),
        script_url_to_html(
            &trusted_resource_url!("/vendor.js"),
            &ScriptSrcOptions::new().with_async(true),
        ),
        script_to_html(&safe_script!("main();"), &ScriptOptions::new().with_id("main")),
    ])
}

fn main() {
    let page = render("Q&A");
    assert!(page.as_str().starts_with("Q&amp;A<script src=\"/vendor.js\" async>"));
}
