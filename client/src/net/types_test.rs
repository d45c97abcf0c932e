use super::*;

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_parses_without_doc_id() {
    let json = r#"{"status":"success","file":"report.pdf","filetype":"pdf","chunks":12}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.status, "success");
    assert_eq!(upload.file, "report.pdf");
    assert_eq!(upload.filetype, "pdf");
    assert_eq!(upload.chunks, 12);
    assert_eq!(upload.doc_id, None);
    assert_eq!(upload.document_id(), None);
}

#[test]
fn upload_response_reads_doc_id_when_present() {
    let json = r#"{"status":"success","file":"a.txt","filetype":"txt","chunks":1,"doc_id":"doc-7"}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.document_id(), Some("doc-7"));
}

#[test]
fn upload_response_blank_doc_id_is_not_usable() {
    let json = r#"{"status":"success","file":"a.txt","filetype":"txt","chunks":1,"doc_id":"   "}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.document_id(), None);
}

#[test]
fn upload_response_keeps_doc_id_whitespace_verbatim() {
    let json = r#"{"status":"success","file":"a.txt","filetype":"txt","chunks":1,"doc_id":" abc "}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.document_id(), Some(" abc "));
}

#[test]
fn upload_response_accepts_integral_float_chunks() {
    let json = r#"{"status":"success","file":"a.txt","filetype":"txt","chunks":4.0}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.chunks, 4);
}

#[test]
fn upload_response_rejects_negative_chunks() {
    let json = r#"{"status":"success","file":"a.txt","filetype":"txt","chunks":-1}"#;
    assert!(serde_json::from_str::<UploadResponse>(json).is_err());
}

#[test]
fn upload_response_omits_absent_doc_id_when_serialized() {
    let upload = UploadResponse {
        status: "success".to_owned(),
        file: "a.txt".to_owned(),
        filetype: "txt".to_owned(),
        chunks: 2,
        doc_id: None,
    };
    let value = serde_json::to_value(&upload).unwrap();
    assert!(value.get("doc_id").is_none());
}

// =============================================================
// QueryResponse / Source
// =============================================================

#[test]
fn query_response_parses_api_echo_fields() {
    let json = r#"{
        "session": "s-1",
        "question": "What is this?",
        "answer": "A report.",
        "sources": [{"text": "chunk one", "confidence": 87.5}]
    }"#;
    let resp: QueryResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.answer, "A report.");
    assert_eq!(resp.session.as_deref(), Some("s-1"));
    assert_eq!(resp.question.as_deref(), Some("What is this?"));
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].text, "chunk one");
}

#[test]
fn query_response_defaults_missing_sources() {
    let resp: QueryResponse = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
    assert!(resp.sources.is_empty());
}

#[test]
fn source_confidence_percent_rounds_and_clamps() {
    let source = |confidence| Source { text: String::new(), confidence };
    assert_eq!(source(87.5).confidence_percent(), 88);
    assert_eq!(source(-3.0).confidence_percent(), 0);
    assert_eq!(source(250.0).confidence_percent(), 100);
    assert_eq!(source(f64::NAN).confidence_percent(), 0);
}

// =============================================================
// SummarizeResponse / StatusMessage
// =============================================================

#[test]
fn summarize_response_parses_summary() {
    let resp: SummarizeResponse = serde_json::from_str(r#"{"summary":"Short version."}"#).unwrap();
    assert_eq!(resp.summary, "Short version.");
}

#[test]
fn status_message_parses_status() {
    let resp: StatusMessage = serde_json::from_str(r#"{"status":"Memory cleared."}"#).unwrap();
    assert_eq!(resp.status, "Memory cleared.");
}
