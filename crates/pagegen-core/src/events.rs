//! Progress events emitted by the pipeline
//!
//! The core never prints. Each stage reports what it is doing to an
//! injected [`EventSink`]; front-ends decide how (or whether) to show it.

use crate::components::{ComponentId, Precondition};
use crate::writer::WriteStatus;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Files planned and rendered, nothing written yet
    Planned { count: usize },

    /// Component installation was skipped as a whole
    InstallSkipped(Precondition),

    /// Presence checks are about to run for this many components
    CheckingComponents { count: usize },
    ComponentPresent(ComponentId),
    ComponentInstalling(ComponentId),
    /// One line of output from the external installer
    InstallerOutput(String),
    ComponentInstalled(ComponentId),
    ComponentFailed { id: ComponentId, reason: String },

    /// Planned targets that already exist and are about to be replaced
    ExistingFiles(Vec<PathBuf>),
    FileWritten { path: PathBuf, status: WriteStatus },
}

/// Receiver for pipeline progress
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &Event);
}

impl<F> EventSink for F
where
    F: Fn(&Event) + Send + Sync,
{
    fn emit(&self, event: &Event) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &Event) {}
}

/// Keeps every event in order, for inspection after a run
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Plain colored terminal output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        match event {
            Event::Planned { count } => {
                println!("{} Planned {} file(s)", "ℹ".blue(), count);
            }
            Event::InstallSkipped(reason) => {
                println!("{} {}", "⚠".yellow(), reason);
                println!("{} {}", "ℹ".blue(), reason.hint());
            }
            Event::CheckingComponents { count } => {
                println!("{} Checking {} shadcn components...", "ℹ".blue(), count);
            }
            Event::ComponentPresent(id) => {
                println!("{}", format!("  ✓ {} already installed", id).dimmed());
            }
            Event::ComponentInstalling(id) => {
                println!("{}", format!("  - {} missing, installing...", id).dimmed());
            }
            Event::InstallerOutput(line) => println!("    {}", line),
            Event::ComponentInstalled(id) => {
                println!("{} Installed {}", "✓".green(), id);
            }
            Event::ComponentFailed { id, reason } => {
                println!("{} Failed to install {}: {}", "✗".red(), id, reason);
            }
            Event::ExistingFiles(paths) => {
                println!(
                    "{} Found {} existing file(s):",
                    "⚠".yellow(),
                    paths.len()
                );
                for path in paths {
                    println!("{}", format!("  - {}", path.display()).dimmed());
                }
                println!("{} Overwriting existing files...", "ℹ".blue());
            }
            Event::FileWritten { path, status } => {
                println!("{}", format!("  {}: {}", status, path.display()).dimmed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&Event::Planned { count: 2 });
        sink.emit(&Event::CheckingComponents { count: 8 });

        assert_eq!(
            sink.events(),
            vec![
                Event::Planned { count: 2 },
                Event::CheckingComponents { count: 8 }
            ]
        );
    }

    #[test]
    fn test_console_sink_handles_every_event() {
        let events = [
            Event::Planned { count: 3 },
            Event::InstallSkipped(Precondition::ToolUnavailable {
                tool: "shadcn/ui",
                docs_url: "https://ui.shadcn.com/docs",
            }),
            Event::CheckingComponents { count: 8 },
            Event::ComponentPresent(ComponentId::Button),
            Event::ComponentInstalling(ComponentId::Table),
            Event::InstallerOutput("done".to_string()),
            Event::ComponentInstalled(ComponentId::Table),
            Event::ComponentFailed {
                id: ComponentId::Card,
                reason: "installer exited with code 1".to_string(),
            },
            Event::ExistingFiles(vec![PathBuf::from("page.tsx")]),
            Event::FileWritten {
                path: PathBuf::from("page.tsx"),
                status: WriteStatus::Updated,
            },
        ];
        for event in &events {
            ConsoleSink.emit(event);
        }
    }

    #[test]
    fn test_closure_sink() {
        let seen = AtomicUsize::new(0);
        let sink = |_: &Event| {
            seen.fetch_add(1, Ordering::SeqCst);
        };
        sink.emit(&Event::Planned { count: 1 });
        NullSink.emit(&Event::Planned { count: 1 });
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
