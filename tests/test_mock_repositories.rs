mod mocks;

use address_book_assistant::{Assistant, Config, ContactRepository, Record, Reply};
use mocks::MockContactRepository;

fn john() -> Record {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record
}

fn message(reply: Reply) -> String {
    match reply {
        Reply::Continue(message) | Reply::Exit(message) => message,
        Reply::Silent => String::new(),
    }
}

#[test]
fn test_mock_repository_get() {
    let repo = MockContactRepository::new().with_record(john());

    let result = repo.get("John").unwrap();
    assert_eq!(result.phones(), ["1234567890"]);
    assert_eq!(repo.get_call_count("get"), 1);
}

#[test]
fn test_mock_repository_get_not_found() {
    let repo = MockContactRepository::new();
    assert!(repo.get("nobody").is_err());
    assert!(!repo.contains("nobody"));
    assert_eq!(repo.get_call_count("get"), 2);
}

#[test]
fn test_mock_repository_list_is_sorted() {
    let repo = MockContactRepository::new()
        .with_record(Record::new("Zed"))
        .with_record(Record::new("Ann"))
        .with_record(Record::new("Mia"));

    let names: Vec<&str> = repo.list().into_iter().map(Record::name).collect();
    assert_eq!(names, ["Ann", "Mia", "Zed"]);
}

#[test]
fn test_assistant_add_goes_through_repository() {
    let mut assistant = Assistant::with_store(MockContactRepository::new(), Config::default());

    assert_eq!(message(assistant.handle_line("add John 1234567890")), "Contact added.");
    assert_eq!(assistant.store().get_call_count("add"), 1);

    assert_eq!(message(assistant.handle_line("add John 5555555555")), "Contact added.");
    assert_eq!(assistant.store().get_call_count("add"), 2);
    assert_eq!(assistant.store().get_call_count("get_mut"), 0);
    assert_eq!(assistant.store().get("John").unwrap().phones(), ["5555555555"]);
}

#[test]
fn test_assistant_rejected_phone_never_reaches_store() {
    let mut assistant = Assistant::with_store(MockContactRepository::new(), Config::default());

    assistant.handle_line("add John 123");
    assert_eq!(assistant.store().get_call_count("add"), 0);
    assert!(assistant.store().list().is_empty());
}

#[test]
fn test_assistant_change_and_phone_against_mock() {
    let repo = MockContactRepository::new().with_record(john());
    let mut assistant = Assistant::with_store(repo, Config::default());

    assert_eq!(
        message(assistant.handle_line("change John 1112223333")),
        "Contact changed."
    );
    assert_eq!(
        message(assistant.handle_line("phone John")),
        "The John phone number is: 1112223333"
    );

    assistant.store().reset_call_counts();
    assert_eq!(
        message(assistant.handle_line("all")),
        "John: 1112223333\nAll contacts printed"
    );
    assert_eq!(assistant.store().get_call_count("list"), 1);
}
