//! Argument parsing for the reference editor's calling convention.
//!
//! The host invokes the shim exactly the way it would invoke the
//! reference editor, so the grammar here is fixed and foreign:
//!
//! - `<path>` — open a file, no cursor position
//! - `<projectDir> -g <path>[:<line>[:<column>]]` — open at a position,
//!   project directory supplied for relative resolution
//!
//! Anything else is a grammar error. The parser never guesses intent for
//! unknown shapes; a wrong guess would open the wrong file silently.

use edshim_core::prelude::*;
use edshim_core::FileLocation;
use std::path::PathBuf;

/// A classified invocation: the optional project directory plus the file
/// location extracted from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Project directory positional, present only in the `-g` form
    pub project_dir: Option<PathBuf>,
    /// The requested file location
    pub location: FileLocation,
}

/// Classify raw argv against the known grammar variants.
///
/// `args` excludes the program name (argv\[0\]).
pub fn parse(args: &[String]) -> Result<ParsedInvocation> {
    match args {
        [] => Err(Error::argument_grammar("no arguments given")),

        [single] => {
            if single.starts_with('-') {
                return Err(Error::argument_grammar(format!(
                    "unknown flag '{}'",
                    single
                )));
            }
            debug!("single positional path argument");
            Ok(ParsedInvocation {
                project_dir: None,
                location: FileLocation::new(single.clone(), None, None),
            })
        }

        [project_dir, flag, spec] if flag == "-g" => {
            if project_dir.starts_with('-') {
                return Err(Error::argument_grammar(format!(
                    "expected a project directory before -g, got flag '{}'",
                    project_dir
                )));
            }
            let location = FileLocation::parse_spec(spec);
            debug!(
                "goto form: project dir {:?}, location {}",
                project_dir,
                location.display()
            );
            Ok(ParsedInvocation {
                project_dir: Some(PathBuf::from(project_dir)),
                location,
            })
        }

        [_, flag, _] => Err(Error::argument_grammar(format!(
            "unknown flag '{}', expected -g",
            flag
        ))),

        _ => Err(Error::argument_grammar(format!(
            "unexpected argument count {}, expected <path> or <projectDir> -g <path>[:line[:col]]",
            args.len()
        ))),
    }
}
