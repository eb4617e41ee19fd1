use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub commands: Vec<CommandInfo>,
    pub global_flags: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<&'static str, &'static str>,
}

/// Machine-readable description of the CLI for agents.
pub fn command_metadata() -> CommandMetadata {
    CommandMetadata {
        name: "agentlog",
        version: env!("CARGO_PKG_VERSION"),
        description: "AI-native development observability CLI - error visibility for agents in any stack",
        global_flags: BTreeMap::from([
            ("--json", "Output in JSON format for programmatic use"),
            ("--ai-help", "Output this machine-readable command metadata"),
            ("--path", "Base directory containing .agentlog/ (default: current directory)"),
        ]),
        commands: vec![
            CommandInfo {
                name: "errors",
                description: "Query and display errors from .agentlog/errors.jsonl",
                usage: "agentlog errors [flags]",
                flags: BTreeMap::from([
                    ("--limit", "Maximum number of errors to show (default: 10, 0 = all)"),
                    ("--source", "Filter by source (frontend, backend, cli, worker, test)"),
                    ("--type", "Filter by error type"),
                    ("--since", "Show errors since time (e.g., '1h', '30m', '2024-01-01')"),
                ]),
            },
            CommandInfo {
                name: "tail",
                description: "Watch .agentlog/errors.jsonl for new errors in real-time",
                usage: "agentlog tail [flags]",
                flags: BTreeMap::new(),
            },
            CommandInfo {
                name: "doctor",
                description: "Check agentlog configuration and health",
                usage: "agentlog doctor",
                flags: BTreeMap::new(),
            },
            CommandInfo {
                name: "prime",
                description: "Output context summary for AI agent injection",
                usage: "agentlog prime",
                flags: BTreeMap::new(),
            },
        ],
    }
}

pub fn render_ai_help() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&command_metadata())
}
