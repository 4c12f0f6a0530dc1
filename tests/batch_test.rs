//! Integration tests for batch handling and the JSON boundary.

use pagemark::{
    format_json, format_pages, format_pages_with_options, Error, FormatOptions, FormattedPage,
    PageInput,
};

#[test]
fn test_empty_batch_fails_validation() {
    let err = format_pages(&[]).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_single_json_object_normalizes_to_one_page() {
    let json = r##"{
        "source_path": "doc.pdf",
        "page_number": 1,
        "page_count": 1,
        "text": "# Only page",
        "tables": [],
        "images": []
    }"##;
    let pages = PageInput::batch_from_json(json).unwrap();
    assert_eq!(pages.len(), 1);

    let formatted = format_pages(&pages).unwrap();
    assert_eq!(formatted[0].elements.titles, vec!["# Only page"]);
}

#[test]
fn test_json_array_keeps_page_order() {
    let json = r##"[
        {"source_path": "doc.pdf", "page_number": 1, "page_count": 3, "text": "# One"},
        {"source_path": "doc.pdf", "page_number": 2, "page_count": 3, "text": "# Two"},
        {"source_path": "doc.pdf", "page_number": 3, "page_count": 3, "text": "# Three"}
    ]"##;
    let pages = PageInput::batch_from_json(json).unwrap();
    let formatted = format_pages(&pages).unwrap();

    let numbers: Vec<u32> = formatted.iter().map(|p| p.metadata.page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_non_page_shaped_element_fails_validation() {
    let json = r#"[
        {"source_path": "doc.pdf", "page_number": 1, "page_count": 2, "text": "ok"},
        {"unexpected": true}
    ]"#;
    let err = PageInput::batch_from_json(json).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_structural_lists_accept_extraction_engine_shapes() {
    // Bounding boxes arrive as 4-element arrays from the engine.
    let json = r#"{
        "source_path": "doc.pdf",
        "page_number": 1,
        "page_count": 1,
        "text": "| a |\n|---|\n| b |\n",
        "tables": [{"bbox": [50.0, 100.0, 550.0, 300.0], "rows": 2, "columns": 1}],
        "images": [{"number": 1, "bbox": [0.0, 0.0, 64.0, 64.0], "width": 64, "height": 64}]
    }"#;
    let pages = PageInput::batch_from_json(json).unwrap();
    let formatted = format_pages(&pages).unwrap();
    let elements = &formatted[0].elements;

    assert_eq!(elements.tables.len(), 1);
    assert!(elements.tables[0].content.is_some());
    assert_eq!(elements.images.len(), 1);
    assert!(elements.images[0].payload.is_none());
}

#[test]
fn test_parallel_and_sequential_results_agree() {
    let pages: Vec<PageInput> = (1..=8)
        .map(|n| {
            PageInput::new(
                "doc.pdf",
                n,
                8,
                format!("# Page {n}\n\n- bullet\n\n[ref](http://page{n}.test)"),
            )
        })
        .collect();

    let parallel = format_pages(&pages).unwrap();
    let sequential = format_pages_with_options(&pages, FormatOptions::new().sequential()).unwrap();

    assert_eq!(parallel.len(), sequential.len());
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.metadata.page_number, s.metadata.page_number);
        assert_eq!(p.text, s.text);
        assert_eq!(p.tokens, s.tokens);
        assert_eq!(p.elements.links, s.elements.links);
    }
}

#[test]
fn test_format_json_end_to_end() {
    let json = r##"{"source_path": "doc.pdf", "page_number": 1, "page_count": 1, "text": "# T\n\n- a"}"##;
    let out = format_json(json, FormatOptions::default()).unwrap();

    let formatted: Vec<FormattedPage> = serde_json::from_str(&out).unwrap();
    assert_eq!(formatted.len(), 1);
    assert_eq!(formatted[0].elements.titles, vec!["# T"]);
    assert_eq!(formatted[0].elements.lists.len(), 1);
}

#[test]
fn test_format_json_rejects_non_batch_input() {
    let err = format_json(r#""just a string""#, FormatOptions::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_formatted_page_serializes_optional_fields() {
    let pages = vec![PageInput::new("doc.pdf", 1, 1, "short")];
    let formatted = format_pages(&pages).unwrap();
    let json = formatted[0].to_json().unwrap();

    // Too little text for language detection; the field must still be
    // present as null for downstream consumers.
    assert!(json.contains("\"language\":null"));
}
