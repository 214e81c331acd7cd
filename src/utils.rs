use tracing_subscriber::{EnvFilter, fmt};

/// Marks a notification about the stack itself rather than one of its resources.
pub const STACK_RESOURCE_MARKER: &str = "ResourceType='AWS::CloudFormation::Stack'";

/// Stands in for line breaks while the message is scanned.
pub const SCAN_DELIMITER: char = ',';

/// SNS rejects subjects longer than this.
pub const MAX_SUBJECT_LEN: usize = 100;

/// Flattens a message onto one line so field values can be scanned as substrings.
pub fn normalize_message(message: &str) -> String {
    message
        .lines()
        .collect::<Vec<_>>()
        .join(&SCAN_DELIMITER.to_string())
}

pub fn is_stack_resource_event(normalized: &str) -> bool {
    normalized.contains(STACK_RESOURCE_MARKER)
}

/// Splits a comma-separated list, keeping order and dropping blanks and repeats.
pub fn parse_accepted_kinds(raw: &str) -> Vec<String> {
    let mut kinds: Vec<String> = Vec::new();

    for kind in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !kinds.iter().any(|k| k == kind) {
            kinds.push(kind.to_string());
        }
    }

    kinds
}

/// The kind always survives; only the prefix is shortened to fit the subject limit.
pub fn format_subject(prefix: &str, kind: &str) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect()
    };

    let kind: String = clean(kind.trim()).chars().take(MAX_SUBJECT_LEN).collect();
    let room = MAX_SUBJECT_LEN.saturating_sub(kind.chars().count() + 1);
    let prefix: String = clean(prefix).chars().take(room).collect();
    let prefix = prefix.trim();

    if prefix.is_empty() {
        kind
    } else {
        format!("{} {}", prefix, kind)
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_target(false)
        .try_init();
}
