//! Every structural anchor the extractors rely on, in one place.
//!
//! The dictionary pages are matched purely by class tokens. When the site
//! changes its markup, the fix belongs in the constants below.

use scraper::Selector;

use crate::error::{Error, Result};

pub const ENTRY_LIST: &str = "ul.o_list";
pub const ENTRY_ITEM: &str = "li";
pub const ENTRY_LINK: &str = "a";
pub const HEADWORD_CONTAINER: &str = ".hw_d.box_sizing.ld_xs_hidden";
pub const HEADWORD_TEXT: &str = ".hw_txt";
pub const PART_OF_SPEECH: &str = ".fl";
pub const IMAGE_CONTAINER: &str = ".wod_img_act";
pub const IMAGE: &str = "img";
pub const MEANINGS_CONTAINER: &str = ".midbs";
pub const MEANING_BLOCK: &str = ".midb";
pub const DEFINITION_CONTAINER: &str = ".midbt";
pub const DEFINITION_TEXT: &str = "p";
pub const EXAMPLE: &str = "li.vi";

/// Selector table, compiled once per client.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub entry_list: Selector,
    pub entry_item: Selector,
    pub entry_link: Selector,
    pub headword_container: Selector,
    pub headword_text: Selector,
    pub part_of_speech: Selector,
    pub image_container: Selector,
    pub image: Selector,
    pub meanings_container: Selector,
    pub meaning_block: Selector,
    pub definition_container: Selector,
    pub definition_text: Selector,
    pub example: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entry_list: compile(ENTRY_LIST)?,
            entry_item: compile(ENTRY_ITEM)?,
            entry_link: compile(ENTRY_LINK)?,
            headword_container: compile(HEADWORD_CONTAINER)?,
            headword_text: compile(HEADWORD_TEXT)?,
            part_of_speech: compile(PART_OF_SPEECH)?,
            image_container: compile(IMAGE_CONTAINER)?,
            image: compile(IMAGE)?,
            meanings_container: compile(MEANINGS_CONTAINER)?,
            meaning_block: compile(MEANING_BLOCK)?,
            definition_container: compile(DEFINITION_CONTAINER)?,
            definition_text: compile(DEFINITION_TEXT)?,
            example: compile(EXAMPLE)?,
        })
    }
}

fn compile(selector: &'static str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector,
        reason: e.to_string(),
    })
}
