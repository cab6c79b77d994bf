//! Upload-and-ask flows through the public API, against an in-process
//! chat-completion endpoint

use axum::{extract::State, routing::post, Json, Router};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use doc_qa::config::LlmConfig;
use doc_qa::{DocumentAssistant, Error, FileType};

#[derive(Clone, Default)]
struct Prompts(Arc<Mutex<Vec<String>>>);

/// Serve `/chat/completions`, answering every request with `answer`
async fn completion_endpoint(answer: &'static str) -> (String, Prompts) {
    let prompts = Prompts::default();
    let router = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(prompts): State<Prompts>, Json(body): Json<Value>| async move {
                    let prompt = body["messages"][0]["content"]
                        .as_str()
                        .unwrap_or_default()
                        .to_string();
                    prompts.0.lock().unwrap().push(prompt);
                    Json(json!({"choices": [{"message": {"content": answer}}]}))
                },
            ),
        )
        .with_state(prompts.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), prompts)
}

fn assistant_for(base_url: String) -> DocumentAssistant {
    DocumentAssistant::from_config(&LlmConfig {
        base_url,
        api_key: Some("sk-test".to_string()),
        timeout_secs: 5,
        ..LlmConfig::default()
    })
    .unwrap()
}

/// One text page per entry, or a page with only a filled rectangle for `None`
fn pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 11.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![
                Operation::new("re", vec![0.into(), 0.into(), 300.into(), 300.into()]),
                Operation::new("f", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            Content { operations }.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

#[tokio::test]
async fn pdf_upload_then_question() {
    let (base_url, prompts) = completion_endpoint("The report was written in 2021.").await;
    let mut assistant = assistant_for(base_url);

    let data = pdf(&[Some("Annual report"), None, Some("Written in 2021")]);
    let document = assistant
        .upload("report.pdf", Some("application/pdf"), &data)
        .unwrap();
    assert_eq!(document.file_type, FileType::Pdf);
    assert_eq!(document.page_count, Some(3));

    let exchange = assistant.ask("When was it written?").await.unwrap().clone();
    assert_eq!(exchange.answer(), "The report was written in 2021.");
    assert!(!exchange.is_failed());

    let prompts = prompts.0.lock().unwrap().clone();
    assert_eq!(prompts.len(), 1);
    let first = prompts[0].find("Annual report").unwrap();
    let third = prompts[0].find("Written in 2021").unwrap();
    assert!(first < third);
    assert!(prompts[0].contains("Question: When was it written?"));
}

#[tokio::test]
async fn history_keeps_order_across_questions() {
    let (base_url, _prompts) = completion_endpoint("yes").await;
    let mut assistant = assistant_for(base_url);
    assistant
        .upload("notes.txt", Some("text/plain"), b"Meeting notes")
        .unwrap();

    for question in ["first?", "second?", "third?"] {
        assistant.ask(question).await.unwrap();
    }

    let asked: Vec<&str> = assistant.history().iter().map(|e| e.question()).collect();
    assert_eq!(asked, vec!["first?", "second?", "third?"]);
}

#[tokio::test]
async fn scanned_pdf_is_rejected() {
    let (base_url, prompts) = completion_endpoint("unused").await;
    let mut assistant = assistant_for(base_url);

    let err = assistant
        .upload("scan.pdf", Some("application/pdf"), &pdf(&[None, None]))
        .unwrap_err();

    assert!(matches!(err, Error::Extraction { .. }));
    assert!(assistant.document().is_none());
    assert!(prompts.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_recorded_as_failed_answer() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut assistant = assistant_for(closed);
    assistant.upload("a.txt", None, b"Some text").unwrap();

    let exchange = assistant.ask("Anything?").await.unwrap().clone();
    assert!(exchange.is_failed());
    assert!(exchange.answer().starts_with("Error generating answer: "));
    assert_eq!(assistant.history().len(), 1);
}
