//! Token extraction from a conjugation page.
//!
//! The page's first `<table>` is the indicative mood grid. Its text, read in
//! document order with blank strings dropped, is five column headers followed
//! by six rows of `pronoun, present, preterit, imperfect, conditional, future`.

use log::debug;
use scraper::{ElementRef, Html};

use super::source::FetchError;
use crate::core::table::{SCRAPED_TOKEN_COUNT, ShapeError};

/// Header cells preceding the first pronoun label.
const HEADER_TOKENS: usize = 5;

/// Pull the 36 row tokens out of the first table in `html`.
pub fn table_tokens(html: &str) -> Result<Vec<String>, FetchError> {
    let document = Html::parse_document(html);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .ok_or(FetchError::NoTable)?;

    let tokens: Vec<String> = table
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .skip(HEADER_TOKENS)
        .map(str::to_string)
        .collect();

    debug!("Extracted {} table tokens", tokens.len());
    if tokens.len() != SCRAPED_TOKEN_COUNT {
        return Err(FetchError::Shape(ShapeError {
            expected: SCRAPED_TOKEN_COUNT,
            found: tokens.len(),
        }));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::{Number, Person, Tense};
    use crate::core::table::ConjugationTable;

    const HABLAR: &str = include_str!("../../tests/fixtures/hablar.html");

    #[test]
    fn test_fixture_yields_row_tokens() {
        let tokens = table_tokens(HABLAR).unwrap();
        assert_eq!(tokens.len(), 36);
        assert_eq!(tokens[0], "yo");
        assert_eq!(tokens[1], "hablo");
        assert_eq!(tokens[24], "vosotros");
        assert_eq!(tokens[35], "hablarán");
    }

    #[test]
    fn test_fixture_reshapes_into_table() {
        let table = ConjugationTable::from_tokens(table_tokens(HABLAR).unwrap()).unwrap();
        assert_eq!(table.get(Number::Singular, Person::Second, Tense::Preterit), Some("hablaste"));
        assert_eq!(table.get(Number::Plural, Person::Second, Tense::Present), Some("hablan"));
        assert_eq!(table.get(Number::Plural, Person::First, Tense::Imperfect), Some("hablábamos"));
    }

    #[test]
    fn test_only_first_table_is_read() {
        let html = HABLAR.replace("</body>", "<table><tr><td>extra</td></tr></table></body>");
        assert_eq!(table_tokens(&html).unwrap().len(), 36);
    }

    #[test]
    fn test_table_tag_is_case_insensitive() {
        let html = HABLAR.replace("<table", "<TABLE").replace("</table>", "</TABLE>");
        let tokens = table_tokens(&html).unwrap();
        assert_eq!(tokens.len(), 36);
        assert_eq!(tokens[6], "tú");
    }

    #[test]
    fn test_page_without_table() {
        let err = table_tokens("<html><body><p>Not found</p></body></html>").unwrap_err();
        assert!(matches!(err, FetchError::NoTable));
    }

    #[test]
    fn test_short_table_is_shape_error() {
        let html = "<table><tr><th>a</th><th>b</th><th>c</th><th>d</th><th>e</th></tr>\
                    <tr><td>yo</td><td>soy</td></tr></table>";
        let err = table_tokens(html).unwrap_err();
        assert!(matches!(err, FetchError::Shape(ShapeError { expected: 36, found: 2 })));
    }
}
