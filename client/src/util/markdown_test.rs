use super::*;

#[test]
fn renders_headings_and_paragraphs() {
    let out = render("## Deploy first\n\nShip the skeleton.");
    assert!(out.contains("<h2>Deploy first</h2>"));
    assert!(out.contains("<p>Ship the skeleton.</p>"));
}

#[test]
fn renders_links() {
    let out = render("see the [workspace](/workspace/studio-desk)");
    assert!(out.contains(r#"<a href="/workspace/studio-desk">workspace</a>"#));
}

#[test]
fn renders_fenced_code_blocks() {
    let out = render("```text\nidea -> deployed\n```");
    assert!(out.contains("<pre><code"));
    assert!(out.contains("idea -&gt; deployed"));
}

#[test]
fn renders_strikethrough_extension() {
    let out = render("~~old plan~~");
    assert!(out.contains("<del>old plan</del>"));
}

#[test]
fn every_article_body_renders_nonempty() {
    for article in crate::content::articles::articles() {
        let out = render(article.body);
        assert!(!out.trim().is_empty(), "article {} rendered empty", article.slug);
    }
}
