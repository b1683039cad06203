//! Print-mode toggle
//!
//! The one resource-acquisition pattern in the system: printing enters a
//! print rendering mode, hands the document to the platform print facility,
//! and the prior mode is restored on every exit path, including printer
//! failure and panic.

use crate::error::Result;

/// Destination for a printable document
///
/// Injectable so tests can capture documents or simulate a dismissed or
/// failing print dialog.
pub trait PagePrinter {
    /// Print the document
    fn print(&mut self, document: &str) -> Result<()>;
}

/// Printer that writes the document to stdout
///
/// The terminal analogue of the browser print dialog: the caller pipes the
/// output wherever it should go.
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl PagePrinter for StdoutPrinter {
    fn print(&mut self, document: &str) -> Result<()> {
        use std::io::Write;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Whether the UI is currently rendering in print mode
#[derive(Debug, Default)]
pub struct PrintMode {
    active: bool,
}

impl PrintMode {
    /// Create with print mode off
    #[must_use]
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// Whether print mode is currently active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Restores the prior mode flag when dropped
struct PrintModeGuard<'a> {
    mode: &'a mut PrintMode,
    previous: bool,
}

impl<'a> PrintModeGuard<'a> {
    fn enter(mode: &'a mut PrintMode) -> Self {
        let previous = mode.active;
        mode.active = true;
        Self { mode, previous }
    }
}

impl Drop for PrintModeGuard<'_> {
    fn drop(&mut self) {
        self.mode.active = self.previous;
    }
}

/// Print the current view
///
/// Enters print mode, invokes the printer, and restores the pre-print mode
/// flag regardless of whether printing succeeded, failed, or panicked.
pub fn print_view(
    mode: &mut PrintMode,
    printer: &mut dyn PagePrinter,
    document: &str,
) -> Result<()> {
    let _guard = PrintModeGuard::enter(mode);
    printer.print(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct CapturingPrinter {
        printed: Vec<String>,
    }

    impl PagePrinter for CapturingPrinter {
        fn print(&mut self, document: &str) -> Result<()> {
            self.printed.push(document.to_string());
            Ok(())
        }
    }

    struct DismissedPrinter;

    impl PagePrinter for DismissedPrinter {
        fn print(&mut self, _document: &str) -> Result<()> {
            Err(Error::Internal("print dialog dismissed".to_string()))
        }
    }

    #[test]
    fn test_mode_restored_after_successful_print() {
        let mut mode = PrintMode::new();
        let mut printer = CapturingPrinter { printed: vec![] };

        print_view(&mut mode, &mut printer, "the form").unwrap();

        assert!(!mode.is_active());
        assert_eq!(printer.printed, vec!["the form".to_string()]);
    }

    #[test]
    fn test_mode_restored_after_dismissed_print() {
        let mut mode = PrintMode::new();
        let mut printer = DismissedPrinter;

        let result = print_view(&mut mode, &mut printer, "the form");

        assert!(result.is_err());
        assert!(!mode.is_active());
    }

    #[test]
    fn test_mode_restored_after_printer_panic() {
        struct PanickingPrinter;
        impl PagePrinter for PanickingPrinter {
            fn print(&mut self, _document: &str) -> Result<()> {
                panic!("printer crashed");
            }
        }

        let mut mode = PrintMode::new();
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            print_view(&mut mode, &mut PanickingPrinter, "the form")
        }));

        assert!(caught.is_err());
        assert!(!mode.is_active());
    }
}
