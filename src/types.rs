use serde::{Deserialize, Serialize};

/// One match in the dictionary's search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    /// Absolute URL, always prefixed with the site origin.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// One sense of the headword with its example sentences, text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub definition: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    /// Headword and part of speech, formatted as `"<headword> (<pos>)"`.
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_image_is_left_out_of_json() {
        let wod = WordOfTheDay {
            word: "quixotic (adjective)".to_string(),
            image: None,
            meanings: vec![],
        };
        let json = serde_json::to_value(&wod).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["meanings"], serde_json::json!([]));
    }

    #[test]
    fn deserializes_without_image_or_meanings() {
        let wod: WordOfTheDay = serde_json::from_str(r#"{"word":"gambit (noun)"}"#).unwrap();
        assert_eq!(wod.image, None);
        assert!(wod.meanings.is_empty());
    }
}
