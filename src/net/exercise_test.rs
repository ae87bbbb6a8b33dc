use super::*;

#[test]
fn multiple_submission_serializes_to_tagged_camel_case() {
    let payload = ExerciseSubmission::Multiple { word_id: 7, correct_id: 3 };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "type": "multiple", "wordId": 7, "correctId": 3 })
    );
}

#[test]
fn fill_submission_serializes_to_tagged_camel_case() {
    let payload = ExerciseSubmission::Fill { word_id: 12, answer: "Haus".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "type": "fill", "wordId": 12, "answer": "Haus" })
    );
}

#[test]
fn match_submission_serializes_pairs() {
    let payload = ExerciseSubmission::Match {
        pairs: vec![MatchedPair {
            german: "Hund".to_owned(),
            english: "dog".to_owned(),
            word_id: 4,
        }],
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "type": "match",
            "pairs": [{ "german": "Hund", "english": "dog", "wordId": 4 }]
        })
    );
}

#[test]
fn exercise_tolerates_kind_specific_payloads() {
    let multiple: Exercise = serde_json::from_str(
        r#"{"question":{"wordId":1,"german":"Katze"},"options":[{"id":1,"text":"cat"}],"correctId":1}"#,
    )
    .unwrap();
    assert_eq!(multiple.options.len(), 1);
    assert_eq!(multiple.correct_id, Some(1));
    assert!(multiple.pairs.is_empty());

    let matching: Exercise = serde_json::from_str(
        r#"{"pairs":[{"wordId":2,"german":"Hund"}],"englishOptions":["dog","cat"]}"#,
    )
    .unwrap();
    assert_eq!(matching.pairs.len(), 1);
    assert_eq!(matching.english_options, vec!["dog", "cat"]);
    assert!(matching.question.is_none());
}
