//
//  yacon
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Results go to stdout as JSON; status messages go to stderr, styled with
//! `console` when the terminal supports color.
//!
//! ## Example
//!
//! ```rust,ignore
//! use yacon::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Pretty).with_selector(Some(".result".into()));
//! writer.write(&response)?;
//! writer.write_success("Department patched");
//! ```

mod json;

pub use json::*;

use std::io;

use serde_json::Value;

/// How JSON results are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// Single line, for piping into other tools.
    Compact,
}

/// Writes command results and status messages.
pub struct OutputWriter {
    format: OutputFormat,
    selector: Option<String>,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            selector: None,
            color: console::colors_enabled_stderr(),
        }
    }

    /// Restricts output to the sub-value at a dotted path (see [`select_path`]).
    pub fn with_selector(mut self, selector: Option<String>) -> Self {
        self.selector = selector;
        self
    }

    /// Writes a result to stdout.
    ///
    /// String results selected with a selector are printed bare, so
    /// `--select .result.0.email` yields a value usable in shell scripts.
    pub fn write(&self, value: &Value) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, value)
    }

    /// Writes a result to an arbitrary destination.
    pub fn write_to<W: io::Write>(&self, writer: &mut W, value: &Value) -> anyhow::Result<()> {
        let pretty = self.format == OutputFormat::Pretty;

        match &self.selector {
            Some(selector) => match select_path(value, selector)? {
                Value::String(s) => {
                    writeln!(writer, "{}", s)?;
                    Ok(())
                }
                selected => write_json_to(writer, selected, pretty),
            },
            None => write_json_to(writer, value, pretty),
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("{}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }
}
