/// HTML with `sections` repetitions of a heading, paragraphs and lists.
pub fn generate_html(sections: usize) -> String {
    let mut html = String::from("<html><head><title>Bench</title></head><body>\n");
    for i in 0..sections {
        html.push_str(&format!("<h2>Sekcja {i}</h2>\n"));
        html.push_str(
            "<p>Zażółć gęślą jaźń, <em>pchnąć</em> w tę łódź jeża lub ośm skrzyń fig.<br>\
             Druga linia akapitu z <strong>pogrubieniem</strong>.</p>\n",
        );
        html.push_str("<p><strong>Cena: 1 000 zł</strong></p>\n");
        html.push_str("<ul><li>• Pierwszy</li><li>Drugi<ul><li>Zagnieżdżony</li></ul></li></ul>\n");
        html.push_str("<ol><li>1. Jeden</li><li>2. Dwa</li><li>3. Trzy</li></ol>\n");
    }
    html.push_str("</body></html>\n");
    html
}
