extern crate rawline;

use rawline::{Color, Editor, Hint, ReadResult};

const UP_ARROW: &str = "\x1b[A";
const DOWN_ARROW: &str = "\x1b[B";
const LEFT_ARROW: &str = "\x1b[D";
const HOME: &str = "\x1b[H";
const DELETE: &str = "\x1b[3~";

fn edit(editor: &mut Editor, input: &str, cols: usize) -> (ReadResult, String) {
    let mut screen = Vec::new();
    let result = editor.edit_with(input.as_bytes(), &mut screen, "> ", cols);
    (result, String::from_utf8_lossy(&screen).into_owned())
}

fn assert_read(editor: &mut Editor, input: &str, line: &str) {
    let (result, _) = edit(editor, input, 80);
    assert_eq!(result, ReadResult::Input(line.to_string()));
}

fn hello_editor() -> Editor {
    let mut editor = Editor::new();
    editor.set_completer(|line: &str| {
        if line.starts_with('h') {
            vec!["hello".to_string(), "hello there".to_string()]
        } else {
            vec![]
        }
    });
    editor
}

#[test]
fn test_eof_and_interrupt() {
    let mut editor = Editor::new();
    assert_eq!(edit(&mut editor, "\x04", 80).0, ReadResult::Eof);
    assert_eq!(edit(&mut editor, "foo\x03", 80).0, ReadResult::Interrupted);
    assert_eq!(edit(&mut editor, "", 80).0, ReadResult::Eof);
}

#[test]
fn test_editing_keys() {
    let mut editor = Editor::new();
    assert_read(&mut editor, "foo bar\x17\r", "foo ");
    assert_read(&mut editor, "abc\x02\x14\r", "acb");
    assert_read(&mut editor, "abc\x01\x0b\r", "");
    assert_read(&mut editor, "abc\x02\x15\r", "");
    assert_read(&mut editor, &format!("abc{}x\r", HOME), "xabc");
    assert_read(&mut editor, &format!("abc{}{}{}\r", LEFT_ARROW, LEFT_ARROW, DELETE), "ac");
    assert_read(&mut editor, "abc\x7f\x08\r", "a");
    assert_read(&mut editor, "ab\x1bOHc\x1bOF\r", "cab");
}

#[test]
fn test_single_line_scrolls() {
    let mut editor = Editor::new();
    let (result, screen) = edit(&mut editor, "hello world\r", 10);
    assert_eq!(result, ReadResult::Input("hello world".to_string()));
    // echoed while the line fits, redrawn once it does not
    assert!(screen.starts_with("> hello w\r"));
    assert!(screen.ends_with("\r> o world\x1b[0K\r\x1b[9C"));
}

#[test]
fn test_completion_without_candidates() {
    let mut editor = hello_editor();
    let (result, screen) = edit(&mut editor, "x\t\r", 80);
    assert_eq!(result, ReadResult::Input("x".to_string()));
    assert_eq!(screen, "> x\x07");
}

#[test]
fn test_completion_cycles() {
    let mut editor = hello_editor();

    let (result, screen) = edit(&mut editor, "h\t\t\r", 80);
    assert_eq!(result, ReadResult::Input("hello there".to_string()));
    assert!(screen.contains("\r> hello\x1b[0K\r\x1b[7C"));
    assert!(screen.contains("\r> hello there\x1b[0K\r\x1b[13C"));

    // past the last candidate the original line comes back, with a bell
    let (result, screen) = edit(&mut editor, "h\t\t\t\r", 80);
    assert_eq!(result, ReadResult::Input("h".to_string()));
    assert!(screen.ends_with("\x07\r> h\x1b[0K\r\x1b[3C"));

    // and Tab keeps cycling from there
    assert_read(&mut editor, "h\t\t\t\t\r", "hello");
}

#[test]
fn test_completion_commit_and_cancel() {
    let mut editor = hello_editor();

    // any other key takes the candidate and is then handled as usual
    assert_read(&mut editor, "h\t!\r", "hello!");
    assert_read(&mut editor, "h\t\t\x17\r", "hello ");

    // Esc puts the original line back
    let (result, screen) = edit(&mut editor, "h\t\x1b\r", 80);
    assert_eq!(result, ReadResult::Input("h".to_string()));
    assert!(screen.ends_with("\r> h\x1b[0K\r\x1b[3C"));
}

#[test]
fn test_input_ending_while_completing() {
    let mut editor = hello_editor();
    let (result, screen) = edit(&mut editor, "h\t", 80);
    assert_eq!(result, ReadResult::Eof);
    assert!(screen.ends_with("\r> hello\x1b[0K\r\x1b[7C"));

    assert_eq!(edit(&mut editor, "h\t\t", 80).0, ReadResult::Eof);
}

#[test]
fn test_tab_inside_escape_sequence_is_not_completion() {
    let mut editor = hello_editor();
    assert_read(&mut editor, "h\x1b[\tx\r", "hx");
}

#[test]
fn test_history_navigation() {
    let mut editor = Editor::new();
    editor.add_history("first");
    editor.add_history("second");

    assert_read(&mut editor, UP_ARROW, "second");
    assert_read(&mut editor, &format!("{}{}\r", UP_ARROW, UP_ARROW), "first");
    assert_read(&mut editor, &format!("{}{}{}\r", UP_ARROW, UP_ARROW, UP_ARROW), "first");
    assert_read(&mut editor, &format!("draft{}{}\r", UP_ARROW, DOWN_ARROW), "draft");
    assert_read(&mut editor, "draft\x10\x10\x0e\x0e\r", "draft");

    // recalled lines can be edited without touching the stored entries
    assert_read(&mut editor, &format!("{}!\r", UP_ARROW), "second!");
    let entries: Vec<&str> = editor.history().iter().collect();
    assert_eq!(entries, vec!["first", "second"]);

    // Down from the line being edited does nothing
    let (result, screen) = edit(&mut editor, &format!("x{}\r", DOWN_ARROW), 80);
    assert_eq!(result, ReadResult::Input("x".to_string()));
    assert_eq!(screen, "> x");
}

#[test]
fn test_history_disabled() {
    let mut editor = Editor::new();
    editor.set_history_max_size(0);
    assert!(!editor.add_history("a"));
    assert_read(&mut editor, &format!("b{}\r", UP_ARROW), "b");
}

#[test]
fn test_hints() {
    let mut editor = Editor::new();
    editor.set_hinter(|line: &str| {
        if line == "hello" {
            Some(Hint::new(" World").color(Color::Magenta))
        } else {
            None
        }
    });

    let (result, screen) = edit(&mut editor, "hello\r", 80);
    assert_eq!(result, ReadResult::Input("hello".to_string()));
    assert!(screen.contains("\r> hello\x1b[0;35;49m World\x1b[0m\x1b[0K\r\x1b[7C"));
    // Enter leaves the line without its hint
    assert!(screen.ends_with("\r> hello\x1b[0K\r\x1b[7C"));

    // no room for the hint
    let (_, screen) = edit(&mut editor, "hello\r", 7);
    assert!(!screen.contains("World"));
}

#[test]
fn test_bold_hint_without_color() {
    let mut editor = Editor::new();
    editor.set_hinter(|_: &str| Some(Hint::new("?").bold(true)));
    let (_, screen) = edit(&mut editor, "a\r", 80);
    assert!(screen.contains("\r> a\x1b[1;37;49m?\x1b[0m\x1b[0K\r\x1b[3C"));
}

#[test]
fn test_multi_line() {
    let mut editor = Editor::new();
    editor.set_multi_line(true);

    let (result, screen) = edit(&mut editor, "abcdefghij\x01\r", 10);
    assert_eq!(result, ReadResult::Input("abcdefghij".to_string()));
    // the cursor wraps by hand on the right margin
    assert!(screen.contains("> abcdefgh\n\r"));
    // Home goes back up to the prompt row
    assert!(screen.contains("\x1b[1A\r\x1b[2C"));
}

#[test]
fn test_line_length_is_bounded() {
    let mut editor = rawline::Editor::with_config(&rawline::Config {
        max_line: 4,
        ..Default::default()
    });
    assert_read(&mut editor, "abcdef\r", "abc");
}
