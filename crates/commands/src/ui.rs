//! User interface implementations

use std::sync::{Arc, Mutex};

use console::style;

use openhue_runtime::deps::{MessageStyle, UserInterface};

/// Production UI implementation writing to stdout
pub struct RealUserInterface;

impl UserInterface for RealUserInterface {
    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_styled(&self, message: &str, msg_style: MessageStyle) {
        println!("{}", render(message, msg_style));
    }
}

/// Apply `msg_style` to `message` using terminal colors
pub fn render(message: &str, msg_style: MessageStyle) -> String {
    match msg_style {
        MessageStyle::Normal => message.to_string(),
        MessageStyle::Bold => style(message).bold().to_string(),
        MessageStyle::Cyan => style(message).cyan().to_string(),
        MessageStyle::Green => style(message).green().to_string(),
        MessageStyle::Red => style(message).red().to_string(),
        MessageStyle::Yellow => style(message).yellow().to_string(),
        MessageStyle::Warning => style(message).yellow().bold().to_string(),
        MessageStyle::Error => style(message).red().bold().to_string(),
        MessageStyle::Success => style(message).green().bold().to_string(),
    }
}

/// Test UI implementation that captures output
#[derive(Default)]
pub struct TestUserInterface {
    /// Every printed line, styled or not
    pub output: Arc<Mutex<Vec<String>>>,
    /// Styled lines together with their style
    pub styled_output: Arc<Mutex<Vec<(String, MessageStyle)>>>,
}

impl TestUserInterface {
    /// Create an empty capturing UI
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines printed so far
    pub fn get_output(&self) -> Vec<String> {
        self.output.lock().map(|o| o.clone()).unwrap_or_default()
    }

    /// Styled lines printed so far
    pub fn get_styled_output(&self) -> Vec<(String, MessageStyle)> {
        self.styled_output
            .lock()
            .map(|o| o.clone())
            .unwrap_or_default()
    }
}

impl UserInterface for TestUserInterface {
    fn print(&self, message: &str) {
        if let Ok(mut output) = self.output.lock() {
            output.push(message.to_string());
        }
    }

    fn print_styled(&self, message: &str, style: MessageStyle) {
        // Add to both styled output and regular output for easier testing
        if let Ok(mut styled) = self.styled_output.lock() {
            styled.push((message.to_string(), style));
        }
        self.print(message);
    }
}

/// Tell the user the CLI must be set up before this command can run
pub fn print_not_configured(ui: &dyn UserInterface) {
    ui.print("");
    ui.print_styled(openhue_runtime::NOT_CONFIGURED_MESSAGE, MessageStyle::Error);
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod tests;
