// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad CLI entrypoint.
//!
//! Picks one document in the terminal and prints it, prints it as JSON, or opens it in the
//! user's editor.

use std::error::Error;
use std::path::PathBuf;

use naiad::config::Config;
use naiad::model::SessionKind;
use naiad::tui::{run_chooser, Choice, DocumentSet};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--buffers] [options] <path>...\n  {program} --files [<dir>] [options]\n  {program} --grep [options] <path>...\n\nOptions:\n  --query <text>    start with <text> already typed\n  --current <path>  mark <path> as the current document\n  --exec            open the choice in $VISUAL / $EDITOR (default vi)\n  --json            print the choice as JSON\n\n--buffers (default) chooses among the given paths, --files among the files below <dir>\n(default: current directory), --grep among the lines of the given paths.\nKeys: type to filter, Ctrl-N/Ctrl-P move, Enter opens, Ctrl-O/Ctrl-V/Ctrl-T open in a split,\nvertical split or tab, Ctrl-W drops a path segment, Ctrl-U clears, Ctrl-D unloads, Esc cancels."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    kind: SessionKind,
    kind_set: bool,
    root: Option<String>,
    paths: Vec<String>,
    query: Option<String>,
    current: Option<String>,
    exec: bool,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            kind: SessionKind::Buffers,
            kind_set: false,
            root: None,
            paths: Vec::new(),
            query: None,
            current: None,
            exec: false,
            json: false,
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--buffers" | "--files" | "--grep" => {
                if options.kind_set {
                    return Err(());
                }
                options.kind_set = true;
                options.kind = match arg.as_str() {
                    "--files" => SessionKind::Files,
                    "--grep" => SessionKind::Grep,
                    _ => SessionKind::Buffers,
                };
            }
            "--query" => {
                if options.query.is_some() {
                    return Err(());
                }
                options.query = Some(args.next().ok_or(())?);
            }
            "--current" => {
                if options.current.is_some() {
                    return Err(());
                }
                options.current = Some(args.next().ok_or(())?);
            }
            "--exec" => {
                if options.exec {
                    return Err(());
                }
                options.exec = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--" => options.paths.extend(args.by_ref()),
            _ if arg.starts_with('-') => return Err(()),
            _ => options.paths.push(arg),
        }
    }

    if options.exec && options.json {
        return Err(());
    }

    match options.kind {
        SessionKind::Files => {
            if options.paths.len() > 1 {
                return Err(());
            }
            options.root = options.paths.pop();
        }
        SessionKind::Buffers | SessionKind::Grep => {
            if options.paths.is_empty() {
                return Err(());
            }
        }
    }

    Ok(options)
}

fn load_documents(options: &CliOptions) -> Result<DocumentSet, Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let mut documents = match options.kind {
        SessionKind::Files => {
            let root = options.root.as_deref().map_or_else(|| cwd.clone(), PathBuf::from);
            DocumentSet::scan(&root)?
        }
        SessionKind::Buffers | SessionKind::Grep => DocumentSet::from_paths(&options.paths, &cwd),
    };
    if let Some(current) = &options.current {
        documents.mark_current(current, &cwd);
    }
    Ok(documents)
}

fn choice_line(choice: &Choice) -> String {
    match choice.line_number {
        Some(line) => format!("{}:{line}", choice.path.display()),
        None => choice.path.display().to_string(),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "naiad".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = Config::from_env()?;
        if let Err(err) = naiad::logging::init(&config) {
            eprintln!("naiad: logging disabled: {err}");
        }

        let documents = load_documents(&options)?;
        let Some(choice) =
            run_chooser(options.kind, documents, options.query.as_deref(), &config)?
        else {
            return Ok(());
        };

        if options.exec {
            naiad::editor::launch_editor(config.editor(), &choice)?;
        } else if options.json {
            println!("{}", serde_json::to_string(&choice)?);
        } else {
            println!("{}", choice_line(&choice));
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("naiad: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use naiad::model::{Placement, SessionKind};
    use naiad::tui::Choice;

    use super::{choice_line, parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn buffers_is_the_default_kind() {
        let options = parse(&["a.rs", "b.rs"]).expect("options");
        assert_eq!(options.kind, SessionKind::Buffers);
        assert_eq!(options.paths, vec!["a.rs", "b.rs"]);
        assert!(!options.exec && !options.json);
    }

    #[test]
    fn files_takes_an_optional_root() {
        let options = parse(&["--files"]).expect("options");
        assert_eq!(options.kind, SessionKind::Files);
        assert_eq!(options.root, None);

        let options = parse(&["--files", "src", "--query", "ma"]).expect("options");
        assert_eq!(options.root.as_deref(), Some("src"));
        assert_eq!(options.query.as_deref(), Some("ma"));
        assert!(options.paths.is_empty());
    }

    #[test]
    fn grep_accepts_current_and_json() {
        let options =
            parse(&["--grep", "--current", "b.rs", "--json", "a.rs", "b.rs"]).expect("options");
        assert_eq!(options.kind, SessionKind::Grep);
        assert_eq!(options.current.as_deref(), Some("b.rs"));
        assert!(options.json);
    }

    #[test]
    fn double_dash_ends_options() {
        let options = parse(&["--", "-odd.rs"]).expect("options");
        assert_eq!(options.paths, vec!["-odd.rs"]);
    }

    #[test]
    fn invalid_combinations_are_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--grep"]).is_err());
        assert!(parse(&["--files", "a", "b"]).is_err());
        assert!(parse(&["--files", "--grep", "a"]).is_err());
        assert!(parse(&["--exec", "--json", "a"]).is_err());
        assert!(parse(&["--query"]).is_err());
        assert!(parse(&["--query", "a", "--query", "b", "x"]).is_err());
        assert!(parse(&["--verbose", "a"]).is_err());
    }

    #[test]
    fn choice_line_appends_grep_line_numbers() {
        let mut choice = Choice {
            path: PathBuf::from("/p/a.rs"),
            label: "a.rs".to_owned(),
            placement: Placement::Replace,
            line_number: None,
        };
        assert_eq!(choice_line(&choice), "/p/a.rs");
        choice.line_number = Some(12);
        assert_eq!(choice_line(&choice), "/p/a.rs:12");
    }
}
