//! Tests for UI implementations

use super::*;

#[test]
fn test_real_user_interface_print() {
    let ui = RealUserInterface;

    // These will print to stdout, but we're testing they don't panic
    ui.print("Hello, world!");
    ui.print("");
    ui.print_styled("Warning text", MessageStyle::Warning);
}

#[test]
fn test_render_keeps_message_text() {
    for msg_style in [
        MessageStyle::Normal,
        MessageStyle::Bold,
        MessageStyle::Cyan,
        MessageStyle::Green,
        MessageStyle::Red,
        MessageStyle::Yellow,
        MessageStyle::Warning,
        MessageStyle::Error,
        MessageStyle::Success,
    ] {
        assert!(render("bridge", msg_style).contains("bridge"));
    }
    assert_eq!(render("plain", MessageStyle::Normal), "plain");
}

#[test]
fn test_user_interface_captures_output() {
    let ui = TestUserInterface::new();

    ui.print("first");
    ui.print_styled("second", MessageStyle::Success);

    assert_eq!(ui.get_output(), vec!["first", "second"]);
    assert_eq!(
        ui.get_styled_output(),
        vec![("second".to_string(), MessageStyle::Success)]
    );
}

#[test]
fn test_print_not_configured() {
    let ui = TestUserInterface::new();

    print_not_configured(&ui);

    let output = ui.get_output();
    assert_eq!(output[0], "");
    assert!(output[1].contains("please run the 'setup' command"));
    assert_eq!(ui.get_styled_output()[0].1, MessageStyle::Error);
}
