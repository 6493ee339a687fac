use lotto_results::config::ExtractionConfig;
use lotto_results::{DrawExtractor, ExtractError};

const FIXTURE: &str = include_str!("fixtures/currentlotto.html");

fn words(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn extracts_every_draw_from_results_page() {
    let extractor = DrawExtractor::new(&ExtractionConfig::default()).unwrap();
    let draws = extractor.extract_html(FIXTURE).unwrap().into_inner();

    assert_eq!(draws.len(), 2);

    assert_eq!(words(&draws[0].title), "הגרלת לוטו מס' 3650");
    assert_eq!(words(&draws[0].date), "יום שלישי 02/01/2024");
    assert_eq!(draws[0].numbers, vec!["36", "27", "21", "14", "8", "3"]);
    assert_eq!(draws[0].strong_number, "5");

    assert_eq!(words(&draws[1].title), "הגרלת לוטו מס' 3649");
    assert_eq!(words(&draws[1].date), "יום שבת 30/12/2023");
    assert_eq!(draws[1].numbers, vec!["33", "25", "19", "10", "6", "1"]);
    assert_eq!(draws[1].strong_number, "2");

    for draw in &draws {
        for field in [&draw.title, &draw.date, &draw.strong_number] {
            assert!(!field.contains('\n'), "{:?}", field);
            assert_eq!(field.as_str(), field.trim());
        }
    }
}

#[test]
fn smaller_draw_size_partitions_differently() {
    let config = ExtractionConfig {
        numbers_per_draw: 4,
        ..ExtractionConfig::default()
    };
    let extractor = DrawExtractor::new(&config).unwrap();
    let draws = extractor.extract_html(FIXTURE).unwrap().into_inner();

    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].numbers, vec!["36", "21", "14", "3"]);
    assert_eq!(draws[1].numbers, vec!["33", "27", "8", "1"]);
}

#[test]
fn page_without_results_is_empty() {
    let extractor = DrawExtractor::new(&ExtractionConfig::default()).unwrap();
    let draws = extractor
        .extract_html("<html><body><h1>שגיאה</h1></body></html>")
        .unwrap();
    assert!(draws.is_empty());
}

#[test]
fn malformed_number_fails_extraction() {
    let html = FIXTURE.replace("<div>19</div>", "<div>abc</div>");
    let extractor = DrawExtractor::new(&ExtractionConfig::default()).unwrap();

    match extractor.extract_html(&html) {
        Err(ExtractError::Format { draw, source }) => {
            assert_eq!(draw, 1);
            assert_eq!(source.token, "abc");
        }
        other => panic!("expected format error, got {:?}", other),
    }
}
