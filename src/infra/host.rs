use std::fs;
use std::io;
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::domain::models::{ListEntry, Notification, NotificationLevel, NowPlaying};

/// The media-center side of an invocation: what is playing, the result
/// listing, dialogs and the filesystem the staging directory lives on.
pub trait Host {
    fn now_playing(&self) -> NowPlaying;

    fn add_directory_item(&mut self, entry: ListEntry);

    /// Closes the listing. Called exactly once per invocation.
    fn end_of_directory(&mut self);

    /// Returns the chosen index, or `None` if the user backed out.
    fn select(&mut self, heading: &str, items: &[String]) -> Option<usize>;

    fn notify(&mut self, notification: Notification);

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// Runs the add-on from a shell: the listing goes to stdout, notifications
/// to stderr and selections are read from the terminal.
pub struct TerminalHost {
    now_playing: NowPlaying,
    item_count: usize,
}

impl TerminalHost {
    pub fn new(now_playing: NowPlaying) -> Self {
        Self {
            now_playing,
            item_count: 0,
        }
    }
}

impl Host for TerminalHost {
    fn now_playing(&self) -> NowPlaying {
        self.now_playing.clone()
    }

    fn add_directory_item(&mut self, entry: ListEntry) {
        self.item_count += 1;
        let mut flags = Vec::new();
        if entry.hearing_impaired {
            flags.push("CC");
        }
        if entry.sync {
            flags.push("SYNC");
        }

        if entry.label2.is_empty() {
            println!("{:>3}. {}", self.item_count, entry.label);
        } else {
            println!(
                "{:>3}. [{}] {} {}",
                self.item_count,
                entry.thumbnail.as_deref().unwrap_or("--"),
                entry.label,
                entry.label2
            );
        }
        if !flags.is_empty() {
            println!("     {}", flags.join(" "));
        }
        if entry.url != entry.label {
            println!("     {}", entry.url);
        }
    }

    fn end_of_directory(&mut self) {
        if self.item_count == 0 {
            println!("No items.");
        }
    }

    fn select(&mut self, heading: &str, items: &[String]) -> Option<usize> {
        println!("{heading}");
        for (i, item) in items.iter().enumerate() {
            println!("  {}: {}", i + 1, item);
        }

        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                warn!("Unable to open a prompt: {e}");
                return None;
            }
        };
        loop {
            let prompt = format!("Enter number (1-{}), empty to cancel: ", items.len());
            let input = match rl.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
                Err(e) => {
                    warn!("Prompt failed: {e}");
                    return None;
                }
            };
            let input = input.trim();
            if input.is_empty() {
                return None;
            }
            match input.parse::<usize>() {
                Ok(choice) if (1..=items.len()).contains(&choice) => return Some(choice - 1),
                _ => println!("Please enter a number between 1 and {}.", items.len()),
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        let marker = match notification.level {
            NotificationLevel::Info => "*",
            NotificationLevel::Error => "!",
        };
        eprintln!("{marker} {}: {}", notification.heading, notification.message);
    }
}
