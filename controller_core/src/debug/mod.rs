use crate::runtime::{ConsoleView, StatusView};
use std::collections::VecDeque;
use std::rc::Rc;


pub const DEFAULT_CONSOLE_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Log,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub kind: LineKind,
}

/// On-screen debug output of a controller.
pub trait DebugSurface {
    fn log(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
    fn set_status(&mut self, text: &str);
}

/// Used when debug is off. Touches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl DebugSurface for NullLogger {
    fn log(&mut self, _msg: &str) {}

    fn error(&mut self, _msg: &str) {}

    fn set_status(&mut self, _text: &str) {}
}

/// Scrollback console plus status line, both rendered into the page.
pub struct HtmlLogger {
    console: Rc<dyn ConsoleView>,
    status: Rc<dyn StatusView>,
    lines: VecDeque<LogLine>,
    max_lines: usize,
}

impl HtmlLogger {
    pub fn new(console: Rc<dyn ConsoleView>, status: Rc<dyn StatusView>, max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            console,
            status,
            lines: VecDeque::with_capacity(max_lines),
            max_lines,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// Only lines the console accepted are kept, so evictions stay in step
    /// with what is on screen.
    fn add_line(&mut self, text: &str, kind: LineKind) {
        let line = LogLine {
            text: text.to_string(),
            kind,
        };
        if !self.console.push_line(&line) {
            return;
        }
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
            self.console.remove_oldest();
        }
    }
}

impl DebugSurface for HtmlLogger {
    fn log(&mut self, msg: &str) {
        self.add_line(msg, LineKind::Log);
    }

    fn error(&mut self, msg: &str) {
        self.add_line(msg, LineKind::Error);
    }

    fn set_status(&mut self, text: &str) {
        self.status.set_text(text);
    }
}
