use super::*;

#[test]
fn template_shape_depends_only_on_type() {
    for step_type in StepType::ALL {
        let template = StepData::template(step_type);
        assert_eq!(template.step_type(), step_type);
        // A second invocation yields the identical payload.
        assert_eq!(template, StepData::template(step_type));
    }
}

#[test]
fn lesson_information_template_fields() {
    let StepData::LessonInformation(info) = StepData::template(StepType::LessonInformation) else {
        panic!("wrong variant");
    };
    assert_eq!(info.title, "New section");
    assert_eq!(info.main_text, "Main text");
    assert_eq!(info.secondary_text, "");
}

#[test]
fn matching_pairs_template_has_empty_pairs() {
    let StepData::MatchingPairs(pairs) = StepData::template(StepType::MatchingPairs) else {
        panic!("wrong variant");
    };
    assert!(pairs.pairs.is_empty());
}

#[test]
fn step_serializes_with_type_and_data_tags() {
    let step = Step {
        id: "s-1".to_owned(),
        data: StepData::LessonInformation(LessonInformation {
            title: "Greetings".to_owned(),
            main_text: "Hola".to_owned(),
            secondary_text: "Hello".to_owned(),
        }),
    };

    let json = serde_json::to_value(&step).expect("serialize");
    assert_eq!(json["id"], "s-1");
    assert_eq!(json["type"], "LessonInformation");
    assert_eq!(json["data"]["title"], "Greetings");
    assert_eq!(json["data"]["mainText"], "Hola");
    assert_eq!(json["data"]["secondaryText"], "Hello");
}

#[test]
fn step_deserializes_from_tagged_json() {
    let json = serde_json::json!({
        "id": "s-2",
        "type": "FillInTheBlanks",
        "data": {
            "question": "Yo ___ tacos",
            "options": ["como", "come"],
            "correctAnswer": "como",
        }
    });

    let step: Step = serde_json::from_value(json).expect("deserialize");
    assert_eq!(step.step_type(), StepType::FillInTheBlanks);
    let StepData::FillInTheBlanks(blanks) = step.data else {
        panic!("wrong variant");
    };
    assert_eq!(blanks.question, "Yo ___ tacos");
    assert_eq!(blanks.options, vec!["como", "come"]);
    assert_eq!(blanks.correct_answer, "como");
    // Optional media fields default to empty when absent.
    assert_eq!(blanks.image_url, "");
    assert_eq!(blanks.sound_file_name, "");
}

#[test]
fn empty_media_fields_are_omitted_on_the_wire() {
    let step = Step::new(StepType::ListenVocabulary);
    let json = serde_json::to_value(&step).expect("serialize");
    assert!(json["data"].get("imageUrl").is_none());
    assert!(json["data"].get("soundFileName").is_none());
}

#[test]
fn chapter_counters_use_camel_case() {
    let chapter = Chapter {
        id: "ch-1".to_owned(),
        title: "Basics".to_owned(),
        completed_lessons: 1,
        total_lessons: 3,
        lessons: Vec::new(),
    };
    let json = serde_json::to_value(&chapter).expect("serialize");
    assert_eq!(json["completedLessons"], 1);
    assert_eq!(json["totalLessons"], 3);
}

#[test]
fn content_item_wire_names() {
    let doc = TableDocument {
        headers: vec!["A".to_owned()],
        rows: vec![vec!["1".to_owned()]],
    };
    let item = ContentItem::table(&doc);
    let json = serde_json::to_value(&item).expect("serialize");
    assert_eq!(json["type"], "table");
    assert_eq!(json["contentType"], "table");
    assert!(json["uniqueId"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(json["translation"], "");
    assert!(json["text"].is_string());
}

#[test]
fn table_document_round_trips() {
    let doc = TableDocument {
        headers: vec!["A".to_owned(), "B".to_owned()],
        rows: vec![vec!["1".to_owned(), "2".to_owned()]],
    };
    let parsed = TableDocument::parse(&doc.to_text()).expect("parse");
    assert_eq!(parsed, doc);
}

#[test]
fn parse_rejects_invalid_json_with_parser_message() {
    let err = TableDocument::parse("not json").expect_err("must fail");
    assert!(matches!(err, TableParseError::Json(_)));
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn parse_rejects_missing_headers_or_rows() {
    let err = TableDocument::parse(r#"{"rows": []}"#).expect_err("must fail");
    assert!(matches!(err, TableParseError::InvalidFormat));

    let err = TableDocument::parse(r#"{"headers": "A", "rows": []}"#).expect_err("must fail");
    assert!(matches!(err, TableParseError::InvalidFormat));
}

#[test]
fn non_text_item_content_is_rejected() {
    let err = TableDocument::from_item_text(&serde_json::json!(42)).expect_err("must fail");
    assert!(matches!(err, TableParseError::NotText));
}

#[test]
fn parse_keeps_ragged_rows_and_non_string_cells() {
    let doc = TableDocument::parse(r#"{"headers": ["A", "B"], "rows": [["x"], ["y", 2, true]]}"#)
        .expect("parse");
    assert_eq!(doc.rows[0], vec!["x"]);
    assert_eq!(doc.rows[1], vec!["y", "2", "true"]);
}
