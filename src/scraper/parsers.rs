use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use scraper::{ElementRef, Html, Selector};

// ── Markers ───────────────────────────────────────────────────────────────────

/// Compiled selectors for the four fragment groups of a results page.
#[derive(Debug, Clone)]
pub struct Markers {
    pub title: Selector,
    pub date: Selector,
    pub number: Selector,
    pub strong_number: Selector,
}

impl Markers {
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            title: compile("title", &config.title_selector)?,
            date: compile("date", &config.date_selector)?,
            number: compile("number", &config.number_selector)?,
            strong_number: compile("strong number", &config.strong_number_selector)?,
        })
    }
}

fn compile(marker: &'static str, selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        marker,
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

// ── Fragment groups ───────────────────────────────────────────────────────────

/// The four fragment groups, each in document order.
#[derive(Debug, Clone)]
pub struct FragmentGroups<F> {
    pub titles: Vec<F>,
    pub dates: Vec<F>,
    pub numbers: Vec<F>,
    pub strong_numbers: Vec<F>,
}

impl<F> Default for FragmentGroups<F> {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            dates: Vec::new(),
            numbers: Vec::new(),
            strong_numbers: Vec::new(),
        }
    }
}

/// Select every group from the document. A marker with no match gives an
/// empty group.
pub fn extract_fragments<'a>(doc: &'a Html, markers: &Markers) -> FragmentGroups<ElementRef<'a>> {
    FragmentGroups {
        titles: doc.select(&markers.title).collect(),
        dates: doc.select(&markers.date).collect(),
        numbers: doc.select(&markers.number).collect(),
        strong_numbers: doc.select(&markers.strong_number).collect(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawFragment;

    const PAGE: &str = r#"
        <div class="archive_open_title lotto">Draw 1</div>
        <div class="archive_open_dates w-clearfix">01/01/2024</div>
        <ul>
            <li class="loto_info_num"><div>3</div></li>
            <li class="loto_info_num"><div>17</div></li>
            <li class="loto_info_num strong"><div>7</div></li>
        </ul>
        <div class="archive_open_title">not lotto</div>
    "#;

    fn texts(group: &[ElementRef<'_>]) -> Vec<String> {
        group.iter().map(|e| e.text_content()).collect()
    }

    #[test]
    fn test_extract_default_markers() {
        let markers = Markers::from_config(&ExtractionConfig::default()).unwrap();
        let doc = Html::parse_document(PAGE);
        let groups = extract_fragments(&doc, &markers);

        assert_eq!(texts(&groups.titles), vec!["Draw 1"]);
        assert_eq!(texts(&groups.dates), vec!["01/01/2024"]);
        assert_eq!(texts(&groups.numbers), vec!["3", "17"]);
        assert_eq!(texts(&groups.strong_numbers), vec!["7"]);
    }

    #[test]
    fn test_no_matches_give_empty_groups() {
        let markers = Markers::from_config(&ExtractionConfig::default()).unwrap();
        let doc = Html::parse_document("<html><body><p>maintenance</p></body></html>");
        let groups = extract_fragments(&doc, &markers);

        assert!(groups.titles.is_empty());
        assert!(groups.dates.is_empty());
        assert!(groups.numbers.is_empty());
        assert!(groups.strong_numbers.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let config = ExtractionConfig {
            date_selector: "div[".to_string(),
            ..ExtractionConfig::default()
        };
        match Markers::from_config(&config) {
            Err(ExtractError::InvalidSelector { marker, selector, .. }) => {
                assert_eq!(marker, "date");
                assert_eq!(selector, "div[");
            }
            other => panic!("expected invalid selector, got {:?}", other.map(|_| ())),
        }
    }
}
