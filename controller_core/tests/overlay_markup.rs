#[cfg(test)]
mod tests {
    use controller_core::debug::{DebugSurface, HtmlLogger, LineKind, LogLine};
    use controller_core::device::is_mobile_user_agent;
    use controller_core::orientation::Prompt;
    use controller_core::runtime::{ConsoleView, StatusView};
    use controller_core::ControllerOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        lines: RefCell<Vec<LogLine>>,
        status: RefCell<String>,
    }

    impl ConsoleView for Recorder {
        fn push_line(&self, line: &LogLine) -> bool {
            self.lines.borrow_mut().push(line.clone());
            true
        }

        fn remove_oldest(&self) {
            self.lines.borrow_mut().remove(0);
        }
    }

    impl StatusView for Recorder {
        fn set_text(&self, text: &str) {
            *self.status.borrow_mut() = text.to_string();
        }
    }

    #[test]
    fn test_prompts_use_page_classes() {
        for prompt in [Prompt::Portrait, Prompt::Landscape] {
            let html = prompt.markup();
            assert!(html.contains("hft-fullsize hft-fullcenter"));
            assert!(html.contains("hft-instruction"));
            assert!(html.contains("Turn the Screen"));
            assert!(html.contains("hft-xlarge"));
        }
        assert!(Prompt::Portrait.markup().contains("hft-landscape-rot90"));
        assert!(Prompt::Portrait.markup().contains("&#x21bb;"));
        assert!(Prompt::Landscape.markup().contains("hft-portrait-rot90"));
        assert!(Prompt::Landscape.markup().contains("&#x21ba;"));
        assert!(Prompt::Empty.markup().is_empty());
    }

    #[test]
    fn test_logger_from_page_options() {
        let options =
            ControllerOptions::from_json(r#"{"debug":true,"numConsoleLines":2}"#).unwrap();
        let recorder = Rc::new(Recorder::default());
        let mut logger = HtmlLogger::new(recorder.clone(), recorder.clone(), options.console_lines());

        logger.log("joined");
        logger.error("bad input");
        logger.log("left");
        logger.set_status("idle");

        let lines = recorder.lines.borrow();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(lines[1].text, "left");
        assert_eq!(*recorder.status.borrow(), "idle");
    }

    #[test]
    fn test_tablet_counts_as_mobile() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15"
        ));
    }
}
