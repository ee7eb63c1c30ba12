use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;
use verifyx::journal::Journal;
use verifyx::modules::TodoApiModule;
use verifyx::runner::{Prompter, TestRunner};
use verifyx::{ModuleRegistry, Result, VerifyxError};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

enum Answer {
    Select(Option<usize>),
    Text(Option<&'static str>),
    Ack,
}

/// Replays a fixed list of answers and records every prompt shown
struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    selects: Vec<(String, Vec<String>)>,
    texts: Vec<String>,
    acks: usize,
}

impl ScriptedPrompter {
    fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            selects: Vec::new(),
            texts: Vec::new(),
            acks: 0,
        }
    }

    fn next(&mut self) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| VerifyxError::Prompt("script exhausted".to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>> {
        self.selects.push((title.to_string(), options.to_vec()));
        match self.next()? {
            Answer::Select(choice) => Ok(choice),
            _ => Err(VerifyxError::Prompt(format!("unexpected select: {title}"))),
        }
    }

    fn text(&mut self, message: &str) -> Result<Option<String>> {
        self.texts.push(message.to_string());
        match self.next()? {
            Answer::Text(value) => Ok(value.map(str::to_string)),
            _ => Err(VerifyxError::Prompt(format!("unexpected text: {message}"))),
        }
    }

    fn acknowledge(&mut self, _message: &str) -> Result<()> {
        self.acks += 1;
        match self.next()? {
            Answer::Ack => Ok(()),
            _ => Err(VerifyxError::Prompt("unexpected acknowledge".to_string())),
        }
    }
}

fn registry_for(server: &MockServer) -> ModuleRegistry {
    ModuleRegistry::new().with_module(TodoApiModule::new(
        format!("{}/api/todo", server.uri()),
        Duration::from_secs(5),
    ))
}

/// Contents of every journal file in `dir`
fn journal_files(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect()
}

const RUN: Answer = Answer::Select(Some(0));
const EXIT: Answer = Answer::Select(Some(1));

#[tokio::test]
async fn test_data_set_run_appends_one_journal_entry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":1}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path().join("logs");

    let prompter = ScriptedPrompter::new(vec![
        RUN,
        Answer::Select(Some(0)), // Todo API
        Answer::Select(Some(2)), // Create task
        Answer::Select(Some(0)), // Set 1
        Answer::Ack,
        EXIT,
    ]);
    let mut runner = TestRunner::new(registry_for(&mock_server), Journal::new(&logs_dir), prompter);
    runner.run().await.unwrap();

    let prompter = runner.prompter();
    assert_eq!(prompter.acks, 1);
    assert!(prompter.texts.is_empty());

    let (_, modules) = &prompter.selects[1];
    assert_eq!(modules, &vec!["1. Todo API".to_string(), "Back".to_string()]);
    let (_, methods) = &prompter.selects[2];
    assert_eq!(methods.len(), 7);
    assert_eq!(methods[2], "3. Create task - POST /api/todo");
    let (_, data_sets) = &prompter.selects[3];
    assert_eq!(data_sets, &vec!["Set 1".to_string(), "Set 2".to_string(), "Manual entry".to_string()]);

    let files = journal_files(&logs_dir);
    assert_eq!(files.len(), 1);
    let content = &files[0];
    assert_eq!(content.matches("Timestamp: ").count(), 1);
    assert!(content.contains("Module: Todo API\n"));
    assert!(content.contains("Method: Create task\n"));
    assert!(content.contains(&format!("Request Address: {}/api/todo\n", mock_server.uri())));
    assert!(content.contains("Parameters:\n  Title: Задача 1\n  Description: Описание задачи 1\n"));
    assert!(content.contains("Response:\n{\"id\":1}\n"));
    assert!(!content.contains("Error:"));
}

#[tokio::test]
async fn test_manual_entry_failure_is_journaled() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/todo/42/complete"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();

    let prompter = ScriptedPrompter::new(vec![
        RUN,
        Answer::Select(Some(0)),
        Answer::Select(Some(5)), // Mark task complete, no data sets
        Answer::Text(Some("42")),
        Answer::Ack,
        EXIT,
    ]);
    let mut runner = TestRunner::new(
        registry_for(&mock_server),
        Journal::new(temp_dir.path()),
        prompter,
    );
    runner.run().await.unwrap();

    let prompter = runner.prompter();
    assert_eq!(prompter.texts.len(), 1);
    assert!(prompter.texts[0].starts_with("Enter value for id"));
    assert!(prompter.texts[0].contains("integer"));

    let files = journal_files(temp_dir.path());
    assert_eq!(files.len(), 1);
    let content = &files[0];
    assert!(content.contains("  id: 42\n"));
    assert!(content.contains("/api/todo/42/complete\n"));
    assert!(content.contains("Response:\nnot found\n"));
    assert!(content.contains("Error:\nStatus: 404 Not Found\n"));
}

#[tokio::test]
async fn test_back_navigation_executes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path().join("logs");

    let prompter = ScriptedPrompter::new(vec![
        RUN,
        Answer::Select(Some(1)), // Back to main menu
        RUN,
        Answer::Select(Some(0)),
        Answer::Select(Some(6)), // Back to module menu
        Answer::Select(None),    // Esc on module menu
        RUN,
        Answer::Select(Some(0)),
        Answer::Select(Some(1)), // Get task by ID
        Answer::Text(None),      // cancel manual entry
        EXIT,
    ]);
    let mut runner = TestRunner::new(registry_for(&mock_server), Journal::new(&logs_dir), prompter);
    runner.run().await.unwrap();

    let titles: Vec<&str> = runner
        .prompter()
        .selects
        .iter()
        .map(|(title, _)| title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Choose an action:",
            "Choose a module to test:",
            "Choose an action:",
            "Choose a module to test:",
            "Choose a test method:",
            "Choose a module to test:",
            "Choose an action:",
            "Choose a module to test:",
            "Choose a test method:",
            "Choose an action:",
        ]
    );
    assert_eq!(runner.prompter().acks, 0);
    assert!(journal_files(&logs_dir).is_empty());
}

#[tokio::test]
async fn test_journal_failure_does_not_abort_run() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    // A regular file where the journal directory should be
    let blocked = temp_dir.path().join("not-a-dir");
    fs::write(&blocked, "x").unwrap();

    let prompter = ScriptedPrompter::new(vec![
        RUN,
        Answer::Select(Some(0)),
        Answer::Select(Some(0)), // Get all tasks
        Answer::Ack,
        RUN,
        Answer::Select(Some(0)),
        Answer::Select(Some(0)),
        Answer::Ack,
        EXIT,
    ]);
    let mut runner = TestRunner::new(registry_for(&mock_server), Journal::new(&blocked), prompter);

    runner.run().await.unwrap();
    assert_eq!(runner.prompter().acks, 2);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_prompt_error_propagates() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    let mut runner = TestRunner::new(
        registry_for(&mock_server),
        Journal::new(temp_dir.path()),
        ScriptedPrompter::new(vec![RUN]),
    );

    let err = runner.run().await.unwrap_err();
    assert!(matches!(err, VerifyxError::Prompt(_)));
}
