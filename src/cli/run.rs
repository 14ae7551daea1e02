//! Dispatch for a parsed command line.
//!
//! Every failure past argument parsing is reported to the user as part of
//! the result; nothing here aborts the process.

use super::{Cli, Input, OutputFormat};
use crate::batch::process_file;
use crate::config::AppSettings;
use crate::expand::expand;
use crate::output::{self, Report};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

impl Cli {
    /// Expand `input` and print or save the result.
    pub fn execute(&self, input: &str) {
        let settings = self.load_settings();
        let format = self.format.unwrap_or(settings.output_format);
        let announce = !self.quiet && format == OutputFormat::Plain;

        let report = self.build_report(input, announce);
        let text = match output::render(&report, format) {
            Ok(text) => text,
            Err(e) => {
                warn!(%format, error = %e, "rendering failed, using plain text");
                output::print_warning(&format!("could not render {} output: {}", format, e));
                output::render(&report, OutputFormat::Plain).unwrap_or_default()
            }
        };

        if self.out {
            let path = self.output_file.clone().unwrap_or(settings.output_file);
            self.save_or_print(&path, &text, announce);
        } else {
            print_result(&text, announce);
        }
    }

    /// Resolve settings, falling back to defaults when they cannot be read.
    fn load_settings(&self) -> AppSettings {
        let loaded = match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        };

        loaded.unwrap_or_else(|e| {
            warn!(error = %e, "using default settings");
            if self.config.is_some() {
                output::print_warning(&format!("{}; using default settings", e));
            }
            AppSettings::default()
        })
    }

    fn build_report(&self, input: &str, announce: bool) -> Report {
        match Input::detect(input) {
            Input::File(path) => {
                debug!(path = %path.display(), "input is an existing file");
                if announce {
                    output::print_info(&format!(
                        "Detected file path, processing file: {}",
                        path.display()
                    ));
                }
                batch_report(path)
            }
            Input::LegacyFile(path) => {
                debug!(path = %path.display(), "input uses the file: prefix");
                if announce {
                    output::print_info(&format!("Processing file: {}", path.display()));
                }
                batch_report(path)
            }
            Input::Range(text) => {
                debug!(input = %text, "input is a range expression");
                let outcome = expand(&text);
                Report::Range {
                    input: text,
                    outcome,
                }
            }
        }
    }

    fn save_or_print(&self, path: &Path, text: &str, announce: bool) {
        match output::save(path, text) {
            Ok(()) => {
                debug!(path = %path.display(), bytes = text.len(), "result saved");
                if !self.quiet {
                    output::print_success(&format!("Result saved to {}", path.display()));
                }
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "saving result failed");
                output::print_failure(&format!(
                    "failed to save result to {}: {}",
                    path.display(),
                    e
                ));
                print_result(text, announce);
            }
        }
    }
}

fn batch_report(path: PathBuf) -> Report {
    let outcome = process_file(&path);
    Report::Batch { path, outcome }
}

fn print_result(text: &str, announce: bool) {
    if announce {
        println!("Result:");
    }
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
