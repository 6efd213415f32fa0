use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::parse_html;
use crate::html::to_html;
use crate::models::{Block, Document};

fn outline(html: &str) -> String {
    Document::from_html(html).outline()
}

#[rstest]
#[case("<h1>Nasza oferta</h1>", vec![Block::heading1("Nasza oferta")])]
#[case("<h2>Cennik</h2>", vec![Block::heading2("Cennik")])]
#[case("<p>Zwykły akapit.</p>", vec![Block::paragraph("Zwykły akapit.")])]
#[case("<p><strong>Ważne</strong></p>", vec![Block::bold_paragraph("Ważne")])]
#[case("<p><b>Bold</b> <b>twice</b></p>", vec![Block::bold_paragraph("Bold twice")])]
#[case("<p>Hello <b>world</b></p>", vec![Block::paragraph("Hello world")])]
#[case("<strong>Standalone</strong>", vec![Block::strong("Standalone")])]
#[case("<strong><p>Wrapped</p></strong>", vec![Block::bold_paragraph("Wrapped")])]
#[case("<h3>Minor</h3>", vec![Block::bold_paragraph("Minor")])]
#[case("<ul><li>A</li><li>B</li></ul>", vec![Block::unordered_list(["A", "B"])])]
#[case("<ol><li>Pierwszy</li><li>Drugi</li></ol>", vec![Block::ordered_list(["Pierwszy", "Drugi"])])]
#[case("Loose text", vec![Block::paragraph("Loose text")])]
#[case("<div>In a div</div>", vec![Block::paragraph("In a div")])]
#[case("<section><span>Inline</span> stays <em>together</em></section>", vec![Block::paragraph("Inline stays together")])]
#[case("", vec![])]
#[case("   \n\t  ", vec![])]
#[case("<p>   </p><ul><li> </li></ul>", vec![])]
fn parses_basic_blocks(#[case] html: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_html(html), expected);
}

#[test]
fn document_with_every_block_kind() {
    let html = r#"
        <h1>Strony internetowe</h1>
        <p>Tworzymy <em>nowoczesne</em> strony.</p>
        <h2>Dlaczego my?</h2>
        <ul>
            <li>Szybkość</li>
            <li>Jakość</li>
        </ul>
        <p><strong>Zadzwoń już dziś!</strong></p>
        <ol>
            <li>Kontakt</li>
            <li>Wycena</li>
            <li>Realizacja</li>
        </ol>
        <strong>Bez zobowiązań</strong>
    "#;
    assert_snapshot!(outline(html), @r"
    heading1: Strony internetowe
    paragraph: Tworzymy nowoczesne strony.
    heading2: Dlaczego my?
    unorderedList
      - Szybkość
      - Jakość
    paragraph(bold): Zadzwoń już dziś!
    orderedList
      - Kontakt
      - Wycena
      - Realizacja
    strong: Bez zobowiązań
    ");
}

#[test]
fn whitespace_only_runs_are_dropped() {
    let html = "<p>a</p>\n\n   <p>b</p>  \n";
    assert_eq!(
        parse_html(html),
        vec![Block::paragraph("a"), Block::paragraph("b")]
    );
}

#[test]
fn whitespace_inside_text_collapses() {
    let html = "<p>  Dużo \n\n   spacji   tutaj  </p>";
    assert_eq!(parse_html(html), vec![Block::paragraph("Dużo spacji tutaj")]);
}

#[test]
fn entities_are_decoded() {
    let html = "<p>Ceny &amp; terminy&nbsp;&ndash; sprawd&#378;</p>";
    assert_eq!(
        parse_html(html),
        vec![Block::paragraph("Ceny & terminy – sprawdź")]
    );
}

#[test]
fn typed_bullets_and_numbers_are_stripped_from_items() {
    let html = "<ul><li>• Pierwszy</li><li>- Drugi</li></ul><ol><li>1. Jeden</li><li>2) Dwa</li></ol>";
    assert_eq!(
        parse_html(html),
        vec![
            Block::unordered_list(["Pierwszy", "Drugi"]),
            Block::ordered_list(["Jeden", "Dwa"]),
        ]
    );
}

#[test]
fn nested_lists_are_flattened() {
    let html = r#"
        <ul>
            <li>Parent
                <ul>
                    <li>Child one</li>
                    <li>Child two</li>
                </ul>
            </li>
            <li>Sibling</li>
        </ul>
    "#;
    assert_eq!(
        parse_html(html),
        vec![Block::unordered_list([
            "Parent",
            "Child one",
            "Child two",
            "Sibling"
        ])]
    );
}

#[test]
fn nested_list_keeps_outer_list_kind() {
    let html = "<ol><li>A<ul><li>b</li></ul></li><li>C</li></ol><p>after</p>";
    assert_eq!(
        parse_html(html),
        vec![
            Block::ordered_list(["A", "b", "C"]),
            Block::paragraph("after")
        ]
    );
}

#[test]
fn paragraphs_inside_items_do_not_split_them() {
    let html = "<ul><li><p>Tytuł</p><p>opis</p></li></ul>";
    assert_eq!(parse_html(html), vec![Block::unordered_list(["Tytuł opis"])]);
}

#[test]
fn bare_list_items_form_an_implicit_list() {
    let html = "<li>x</li><li>y</li><p>after</p>";
    assert_eq!(
        parse_html(html),
        vec![Block::unordered_list(["x", "y"]), Block::paragraph("after")]
    );
}

#[test]
fn bold_state_clears_on_close() {
    let html = "<b>Lead</b> then plain text";
    assert_eq!(
        parse_html(html),
        vec![Block::strong("Lead"), Block::paragraph("then plain text")]
    );
}

#[test]
fn unbalanced_bold_close_is_harmless() {
    let html = "</b><p>plain</p>";
    assert_eq!(parse_html(html), vec![Block::paragraph("plain")]);
}

#[test]
fn line_breaks_are_kept() {
    let html = "<p>ul. Długa 5<br>00-001 Warszawa<br/></p><ul><li>a<br>b</li></ul>";
    assert_eq!(
        parse_html(html),
        vec![
            Block::paragraph("ul. Długa 5\n00-001 Warszawa"),
            Block::unordered_list(["a\nb"]),
        ]
    );
}

#[test]
fn unknown_block_elements_split_paragraphs() {
    let html = "<div>One</div><div>Two</div><article><header>Three</header></article>";
    assert_snapshot!(outline(html), @r"
    paragraph: One
    paragraph: Two
    paragraph: Three
    ");
}

#[test]
fn text_between_blocks_becomes_paragraph() {
    let html = "Intro<h1>Title</h1>Outro";
    assert_eq!(
        parse_html(html),
        vec![
            Block::paragraph("Intro"),
            Block::heading1("Title"),
            Block::paragraph("Outro")
        ]
    );
}

#[test]
fn unclosed_elements_flush_at_end() {
    let html = "<h2>Open heading<ul><li>dangling item";
    assert_eq!(
        parse_html(html),
        vec![
            Block::heading2("Open heading"),
            Block::unordered_list(["dangling item"])
        ]
    );
}

#[test]
fn full_document_skips_head_and_scripts() {
    let html = r#"<!DOCTYPE html>
<html lang="pl">
<head><title>Ignored</title><style>h1 { color: red }</style></head>
<body>
<!-- hero -->
<h1>Witamy</h1>
<script>console.log("<p>nope</p>")</script>
<p>Treść</p>
</body>
</html>"#;
    assert_eq!(
        parse_html(html),
        vec![Block::heading1("Witamy"), Block::paragraph("Treść")]
    );
}

#[test]
fn head_end_tag_may_be_omitted() {
    let html = r#"<html><head><meta charset="utf-8"><title>T</title><body><h1>Witamy</h1><p>Treść</p></body></html>"#;
    assert_eq!(
        parse_html(html),
        vec![Block::heading1("Witamy"), Block::paragraph("Treść")]
    );
}

#[test]
fn comment_opener_inside_script_hides_nothing() {
    let html = r#"<script>var marker = "<!--";</script><p>Treść</p>"#;
    assert_eq!(parse_html(html), vec![Block::paragraph("Treść")]);
}

#[rstest]
#[case(r#"<p><a href="/cennik" title="Ceny > 100 zł">Cennik</a> tutaj</p>"#, "Cennik tutaj")]
#[case(r#"<p><img alt="a<b"> Tekst</p>"#, "Tekst")]
#[case("<p><span title='1 > 0'>Jeden</span></p>", "Jeden")]
fn quoted_attribute_values_never_become_text(#[case] html: &str, #[case] expected: &str) {
    assert_eq!(parse_html(html), vec![Block::paragraph(expected)]);
}

#[test]
fn malformed_markup_is_tolerated() {
    let html = "<p>1 < 2 and <b>bold</p> text <<>> </li></ul>";
    let blocks = parse_html(html);
    assert_eq!(blocks[0], Block::paragraph("1 < 2 and bold"));
    assert!(!blocks.is_empty());
}

#[rstest]
#[case("<h1>T</h1><p>p</p>")]
#[case("<p><strong>Bold para</strong></p><strong>Run</strong>")]
#[case("<ul><li>a &amp; b</li><li>c</li></ul><ol><li>one</li></ol>")]
#[case("<h2>Adres</h2><p>Linia 1<br>Linia 2</p>")]
#[case("<ul><li>x<ul><li>y</li></ul></li></ul>")]
fn reparsing_rendered_html_is_idempotent(#[case] html: &str) {
    let first = parse_html(html);
    let second = parse_html(&to_html(&first));
    assert_eq!(second, first);
}
