//! Minimal CLI: check values against a catalog kind, or list the catalog.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// validate text against the shape catalog (emails, IPv4, MAC addresses, UUIDs, HTTP verbs, ...)
#[derive(Parser, Debug)]
#[command(name = "shape-catalog")]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// check values against one catalog kind; exits 1 if any value is rejected
    Check(CheckArgs),
    /// print every catalog kind with its template or members
    List(ListArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Email,
    Ipv4,
    MacAddress,
    NumberString,
    Uuid,
    HttpMethod,
    TypeOf,
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    /// catalog kind to check against
    #[arg(value_enum)]
    kind: Kind,

    /// literal values to check
    values: Vec<String>,

    /// files with one value per line; literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1..)]
    input: Vec<String>,

    /// only print rejected values
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    /// print as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<Vec<&'static str>>,
}

/// Verdict for a single checked value.
#[derive(Debug)]
struct Verdict {
    value: String,
    result: crate::error::Result<()>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Email => crate::EMail::KIND,
            Kind::Ipv4 => crate::IPv4::KIND,
            Kind::MacAddress => crate::MacAddress::KIND,
            Kind::NumberString => crate::NumberString::KIND,
            Kind::Uuid => crate::UUID::KIND,
            Kind::HttpMethod => crate::HttpMethod::KIND,
            Kind::TypeOf => crate::TypeOf::KIND,
        }
    }
}

impl CheckArgs {
    fn collect_values(&self) -> Result<Vec<String>> {
        let mut values = self.values.clone();
        for source_path in resolve_file_path_patterns(&self.input)? {
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {}", source_path.display()))?;
            let before = values.len();
            values.extend(
                source
                    .lines()
                    .map(str::trim_end)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
            tracing::debug!(path = %source_path.display(), lines = values.len() - before, "loaded input");
        }
        Ok(values)
    }

    fn run(&self) -> Result<ExitCode> {
        let values = self.collect_values()?;
        if values.is_empty() {
            anyhow::bail!("nothing to check: pass values or --input");
        }

        let kind = self.kind.name();
        tracing::debug!(kind, count = values.len(), "checking values");
        let verdicts = check_all(kind, values)?;

        let mut rejected = 0usize;
        for verdict in &verdicts {
            match &verdict.result {
                Ok(()) => {
                    if !self.quiet {
                        println!("{} {}", "✅".green(), verdict.value);
                    }
                }
                Err(error) => {
                    rejected += 1;
                    println!("{} {}", "❌".red(), error.to_string().red());
                }
            }
        }
        tracing::debug!(kind, rejected, "check finished");

        Ok(if rejected == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

impl ListArgs {
    fn run(&self) -> Result<ExitCode> {
        let entries = catalog_entries();
        if self.json {
            let src = serde_json::to_string_pretty(&entries).context("failed to encode catalog")?;
            println!("{src}");
            return Ok(ExitCode::SUCCESS);
        }
        let width = entries.iter().map(|e| e.kind.len()).max().unwrap_or(0);
        for entry in &entries {
            let shape = match (&entry.template, &entry.members) {
                (Some(template), _) => template.clone(),
                (None, Some(members)) => members.join(" | "),
                (None, None) => String::new(),
            };
            println!("{}  {}", format!("{:width$}", entry.kind).bold(), shape);
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<ExitCode> {
        tracing::debug!(command = ?self.cmd, "running");
        match &self.cmd {
            Command::Check(target) => target.run(),
            Command::List(target) => target.run(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn check_all(kind: &str, values: Vec<String>) -> Result<Vec<Verdict>> {
    values
        .into_par_iter()
        .map(|value| {
            let result = crate::check(kind, &value)
                .with_context(|| format!("unknown catalog kind: {kind}"))?;
            Ok(Verdict { value, result })
        })
        .collect()
}

fn catalog_entries() -> Vec<CatalogEntry> {
    let patterns = crate::patterns::catalog().into_iter().map(|(kind, template)| CatalogEntry {
        kind,
        template: Some(template.to_string()),
        members: None,
    });
    let unions = crate::vocab::catalog().into_iter().map(|(kind, members)| CatalogEntry {
        kind,
        template: None,
        members: Some(members),
    });
    patterns.chain(unions).collect()
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // explicit glob that matched nothing is a usage error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_catalog_kinds() {
        for kind in Kind::value_variants() {
            let name = kind.name();
            assert!(crate::check(name, "").is_some(), "{name} missing from catalog");
            // clap spells the variants the same way the catalog does
            let parsed = Kind::from_str(name, false).unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn check_all_keeps_input_order() {
        let values = vec!["get".to_string(), "GET".to_string(), "post".to_string()];
        let verdicts = check_all("http-method", values).unwrap();
        let flags: Vec<bool> = verdicts.iter().map(|v| v.result.is_ok()).collect();
        assert_eq!(flags, [true, false, true]);
        assert_eq!(verdicts[1].value, "GET");
    }

    #[test]
    fn catalog_entries_cover_patterns_then_unions() {
        let entries = catalog_entries();
        assert_eq!(entries.len(), 7);
        assert!(entries[..5].iter().all(|e| e.template.is_some() && e.members.is_none()));
        assert!(entries[5..].iter().all(|e| e.template.is_none() && e.members.is_some()));

        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["kind"], "email");
        assert_eq!(json[5]["members"][0], "checkout");
        assert!(json[5].get("template").is_none());
    }

    #[test]
    fn parses_check_with_inputs() {
        let cli = CommandLineInterface::try_parse_from([
            "shape-catalog", "check", "mac-address", "aa:bb:cc:dd:ee:ff", "-i", "macs.txt", "--quiet",
        ])
        .unwrap();
        match cli.cmd {
            Command::Check(args) => {
                assert_eq!(args.kind, Kind::MacAddress);
                assert_eq!(args.values, ["aa:bb:cc:dd:ee:ff"]);
                assert_eq!(args.input, ["macs.txt"]);
                assert!(args.quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_file_path_patterns(["a.txt", "dir/b.txt"]).unwrap();
        assert_eq!(paths, [PathBuf::from("a.txt"), PathBuf::from("dir/b.txt")]);
    }

    #[test]
    fn reads_values_from_files() {
        let dir = std::env::temp_dir().join(format!("shape-catalog-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("methods.txt");
        std::fs::write(&path, "get\r\n\npost\n").unwrap();

        let args = CheckArgs {
            kind: Kind::HttpMethod,
            values: vec!["put".into()],
            input: vec![path.to_string_lossy().into_owned()],
            quiet: false,
        };
        let values = args.collect_values().unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(values, ["put", "get", "post"]);
    }
}
