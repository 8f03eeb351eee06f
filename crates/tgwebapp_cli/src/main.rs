//! CLI probe for the host surface description.
//!
//! # Responsibility
//! - Verify `tgwebapp_core` linkage with deterministic output.
//! - List the documented surface of a revision.
//! - Decode a raw init data string into its untrusted view, for debugging
//!   launch payloads copied from a client.

use clap::{Parser, Subcommand};
use log::info;
use std::io::Read;
use std::process::ExitCode;
use tgwebapp_core::surface::{interface_members, interfaces};
use tgwebapp_core::{
    core_version, decode_init_data, default_log_level, init_logging, HostInterface, MemberKind,
    ProtocolRevision,
};

#[derive(Parser, Debug)]
#[command(name = "tgwebapp", version, about = "Telegram Mini App host surface probe")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print crate version and the newest modeled revision
    Version,
    /// List documented host members of a revision
    Surface {
        /// Protocol revision (`6.0` or `6.1`)
        #[arg(long, default_value = "6.1")]
        revision: ProtocolRevision,
        /// Restrict output to one interface, e.g. `MainButton`
        #[arg(long)]
        interface: Option<HostInterface>,
    },
    /// Decode raw init data into its untrusted parsed view (JSON)
    Decode {
        /// Raw `Telegram.WebApp.initData`; `-` reads stdin
        raw: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, String> {
    match command {
        Command::Version => Ok(format!(
            "tgwebapp_core version={} latest_revision={}",
            core_version(),
            ProtocolRevision::latest()
        )),
        Command::Surface {
            revision,
            interface,
        } => {
            info!("event=cli_surface module=cli status=start revision={revision}");
            Ok(render_surface(revision, interface))
        }
        Command::Decode { raw } => {
            let raw = if raw == "-" {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|err| format!("cannot read stdin: {err}"))?;
                buffer.trim().to_string()
            } else {
                raw
            };
            render_decoded(&raw)
        }
    }
}

fn render_surface(revision: ProtocolRevision, only: Option<HostInterface>) -> String {
    let selected = match only {
        Some(interface) => vec![interface],
        None => interfaces(revision),
    };

    let mut lines = Vec::new();
    for interface in selected {
        lines.push(format!("{interface} ({revision})"));
        let members = interface_members(interface, revision);
        if members.is_empty() {
            lines.push("  <absent in this revision>".to_string());
        }
        for member in members {
            let kind = match member.kind {
                MemberKind::RequiredField => "field",
                MemberKind::OptionalField => "field?",
                MemberKind::Method if member.returns_control(revision) => "method -> self",
                MemberKind::Method => "method",
            };
            lines.push(format!(
                "  {:<22} {:<15} since {}",
                member.js_name, kind, member.since
            ));
        }
    }
    lines.join("\n")
}

fn render_decoded(raw: &str) -> Result<String, String> {
    let view = decode_init_data(raw).map_err(|err| err.to_string())?;
    let json = serde_json::to_string_pretty(view.peek_unverified())
        .map_err(|err| format!("cannot render init data: {err}"))?;
    Ok(format!(
        "# UNVERIFIED: check `hash` server-side before trusting any field\n{json}"
    ))
}
