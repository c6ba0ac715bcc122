//! suppression-guard - Admission gate for finding-suppression rules
//!
//! A small stdin/stdout adapter over the validation engine, intended to
//! sit in front of the rule store's write path.
//!
//! # Usage
//!
//! ```bash
//! # Validate a rule (reads JSON from stdin, writes JSON to stdout)
//! echo '{"rule":{"id":"CVE-2025-12345","resource_pattern":"arn:aws:ec2:*","product_name":"Inspector"}}' | suppression-guard
//!
//! # Check an admitted rule against a finding
//! echo '{"rule_id":"*","finding_id":"CVE-2025-12345"}' | suppression-guard
//!
//! # Dry-run mode (report rejections without failing the write)
//! suppression-guard --dry-run
//! ```

use std::env;
use std::io::{self, BufRead, Write};

use suppression_guard::{
    audit::AuditLogger, config::Config, engine::ValidationEngine, input::Request,
    output::GuardResponse,
};

/// Print version information
fn print_version() {
    println!("suppression-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"suppression-guard - Admission gate for finding-suppression rules

USAGE:
    suppression-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Dry-run mode (report rejections but admit)
    -c, --config PATH       Path to config file

ENVIRONMENT:
    SUPPRESSION_GUARD_DISABLED=1   Admit everything (still logs)
    SUPPRESSION_GUARD_WARN_ONLY=1  Report rejections but admit

INPUT (stdin, one JSON object):
    {{"rule": {{"id": "...", "resource_pattern": "...", "resource_type": "...", "product_name": "..."}}}}
    {{"rule_id": "...", "finding_id": "..."}}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    if args.dry_run {
        env::set_var("SUPPRESSION_GUARD_WARN_ONLY", "1");
    }

    let engine = ValidationEngine::new(config.clone());

    let audit_path = if config.general.audit_log {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());

    // Read JSON from stdin
    let stdin = io::stdin();
    let mut input_json = String::new();

    for line in stdin.lock().lines() {
        match line {
            Ok(line) => input_json.push_str(&line),
            Err(_) => break,
        }
    }

    if input_json.trim().is_empty() {
        // No input = nothing to decide, reject the write
        let response = GuardResponse::invalid("parse-error", "Empty input");
        println!("{}", response.to_json());
        return;
    }

    // Parse input; malformed requests fail closed
    let request = match Request::from_json(&input_json) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: Failed to parse input (rejecting): {}", e);
            let response =
                GuardResponse::invalid("parse-error", &format!("Failed to parse request: {}", e));
            println!("{}", response.to_json());
            return;
        }
    };

    let disabled = engine.is_disabled();

    let response = match &request {
        Request::Validate { rule } => {
            let verdict = engine.validate(rule);
            if let Err(e) = logger.log_verdict(&request, &verdict, disabled) {
                eprintln!("Warning: Failed to write audit log: {}", e);
            }
            GuardResponse::from_verdict(&verdict)
        }
        Request::Match {
            rule_id,
            finding_id,
        } => {
            let matched = engine.matches(rule_id, finding_id);
            if let Err(e) = logger.log_match(&request, matched) {
                eprintln!("Warning: Failed to write audit log: {}", e);
            }
            GuardResponse::matched(matched)
        }
        Request::Unknown { .. } => {
            eprintln!("Error: Unrecognized request shape (rejecting)");
            GuardResponse::invalid("parse-error", "Unrecognized request shape")
        }
    };

    // Write to stdout
    let json = response.to_json();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    let _ = handle.flush();
}
