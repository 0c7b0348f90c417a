use super::*;

// =============================================================
// ReplCommand::parse
// =============================================================

#[test]
fn plain_line_is_a_question() {
    assert_eq!(ReplCommand::parse("what is this pdf about?"), ReplCommand::Ask("what is this pdf about?".to_owned()));
}

#[test]
fn upload_takes_the_rest_of_the_line_as_path() {
    assert_eq!(ReplCommand::parse("/upload  docs/My Report.pdf "), ReplCommand::Upload("docs/My Report.pdf".to_owned()));
}

#[test]
fn upload_without_path_is_ignored() {
    assert_eq!(ReplCommand::parse("/upload"), ReplCommand::Ignore);
    assert_eq!(ReplCommand::parse("/upload   "), ReplCommand::Ignore);
}

#[test]
fn quit_commands() {
    assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
    assert_eq!(ReplCommand::parse(" /exit\n"), ReplCommand::Quit);
}

// =============================================================
// Session
// =============================================================

#[test]
fn blank_submit_sends_nothing_and_prints_nothing() {
    let mut session = Session::default();
    assert_eq!(session.submit("   "), None);
    assert!(session.drain().is_empty());
}

#[test]
fn ask_round_trip_prints_each_line_once() {
    let mut session = Session::default();
    let question = session.submit("hi").expect("question");
    assert_eq!(question, "hi");
    assert!(session.state().pending());

    let first: Vec<String> = session.drain().iter().map(format_line).collect();
    assert_eq!(first, ["you> hi"]);

    session.settle_ask(Ok(AskReply { answer: Some("hello".to_owned()), error: None }));
    assert!(!session.state().pending());
    let second: Vec<String> = session.drain().iter().map(format_line).collect();
    assert_eq!(second, ["bot> hello"]);
    assert!(session.drain().is_empty());
}

#[test]
fn failed_ask_prints_fixed_fallback() {
    let mut session = Session::default();
    session.submit("hi");
    session.settle_ask(Err(TransportError::Request("connection refused".to_owned())));
    let lines: Vec<String> = session.drain().iter().map(format_line).collect();
    assert_eq!(lines, ["you> hi", "bot> Something went wrong."]);
}

#[test]
fn upload_outcome_is_printed() {
    let mut session = Session::default();
    session.settle_upload("report.pdf", Ok(UploadReply { message: Some("saved".to_owned()), error: None }));
    let lines: Vec<String> = session.drain().iter().map(format_line).collect();
    assert_eq!(lines, ["bot> PDF uploaded: *report.pdf*"]);
}
