use scraper::{ElementRef, Html, Selector};

use crate::selectors::Selectors;
use crate::types::{Entry, Image, Meaning, WordOfTheDay};

/// Extract the search-result entries from a dictionary search page.
///
/// Only the first `o_list` list is read. Items without a usable anchor are
/// skipped rather than failing the whole page.
pub fn parse_entries(document: &Html, selectors: &Selectors, origin: &str) -> Vec<Entry> {
    let Some(list) = document.select(&selectors.entry_list).next() else {
        return Vec::new();
    };

    child_elements(list, &selectors.entry_item)
        .filter_map(|item| {
            let anchor = item.select(&selectors.entry_link).next()?;
            let href = anchor.value().attr("href")?;
            let text = full_text(anchor);
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(Entry {
                text: text.to_string(),
                link: format!("{origin}{href}"),
            })
        })
        .collect()
}

/// Extract the word of the day. Returns `None` when the headword block is
/// missing or incomplete.
pub fn parse_word_of_the_day(document: &Html, selectors: &Selectors) -> Option<WordOfTheDay> {
    let headword_container = document.select(&selectors.headword_container).next()?;
    let headword = trimmed_text(headword_container, &selectors.headword_text)?;
    let part_of_speech = trimmed_text(headword_container, &selectors.part_of_speech)?;

    let image = document
        .select(&selectors.image_container)
        .next()
        .and_then(|container| container.select(&selectors.image).next())
        .map(|img| Image {
            src: img.value().attr("src").unwrap_or_default().to_string(),
            alt: img.value().attr("alt").unwrap_or_default().to_string(),
        });

    let meanings = document
        .select(&selectors.meanings_container)
        .next()
        .map(|container| parse_meanings(container, selectors))
        .unwrap_or_default();

    Some(WordOfTheDay {
        word: format!("{headword} ({part_of_speech})"),
        image,
        meanings,
    })
}

fn parse_meanings(container: ElementRef<'_>, selectors: &Selectors) -> Vec<Meaning> {
    child_elements(container, &selectors.meaning_block)
        .filter_map(|block| {
            let definition = block
                .select(&selectors.definition_container)
                .next()?
                .select(&selectors.definition_text)
                .next()
                .map(full_text)?;
            let examples = block.select(&selectors.example).map(full_text).collect();
            Some(Meaning {
                definition,
                examples,
            })
        })
        .collect()
}

/// Direct element children of `parent` matching `selector`, in document order.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    selector: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| selector.matches(child))
}

fn full_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn trimmed_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let text = full_text(scope.select(selector).next()?);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
