use numform::core::render::{write_report, OutputFormat};
use numform::{ClassifyEngine, NumberForm, ParseAttemptClassifier, PatternMatchClassifier};
use tempfile::TempDir;

#[test]
fn test_csv_report_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.csv");

    let engine = ClassifyEngine::new(ParseAttemptClassifier::new());
    let report = engine.run(["XLII", "42", "12X", ""]);

    let mut file = std::fs::File::create(&output_path).unwrap();
    write_report(&mut file, &report, OutputFormat::Csv).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        content,
        "input,form\nXLII,roman\n42,arabic\n12X,roman\n,roman\n"
    );
}

#[test]
fn test_text_report_one_line_per_input() {
    let engine = ClassifyEngine::new(PatternMatchClassifier::new());
    let report = engine.run(["MCMXCIV", "12X"]);

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report, OutputFormat::Text).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "MCMXCIV\troman\n12X\tarabic\n"
    );
}

#[test]
fn test_json_report_round_trips() {
    let engine = ClassifyEngine::new(PatternMatchClassifier::new());
    let report = engine.run(["XLII", "12X"]);
    assert_eq!(report.roman_count, 1);
    assert_eq!(report.arabic_count, 1);

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report, OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(parsed[0]["input"], "XLII");
    assert_eq!(parsed[0]["form"], "roman");
    assert_eq!(parsed[1]["input"], "12X");
    assert_eq!(parsed[1]["form"], "arabic");
}

#[test]
fn test_strategies_disagree_only_on_mixed_input() {
    let inputs = ["XLII", "42", "-7", "", "12X", "hello"];

    let parse_report = ClassifyEngine::new(ParseAttemptClassifier::new()).run(inputs);
    let pattern_report = ClassifyEngine::new(PatternMatchClassifier::new()).run(inputs);

    for (parse, pattern) in parse_report
        .classifications
        .iter()
        .zip(pattern_report.classifications.iter())
    {
        match parse.input.as_str() {
            // Mixed letters and digits, and non-roman words: the parse
            // side calls them roman, the pattern side arabic.
            "12X" | "hello" => {
                assert_eq!(parse.form, NumberForm::Roman);
                assert_eq!(pattern.form, NumberForm::Arabic);
            }
            _ => assert_eq!(parse.form, pattern.form, "on {:?}", parse.input),
        }
    }
}
