#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Setup,
    Version,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "setup" => CliVerb::Setup,
        "version" | "--version" => CliVerb::Version,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  setup      Enable monitoring and item validation for the current project".to_string(),
        "  version    Print the crawlmon version".to_string(),
        String::new(),
        "Environment:".to_string(),
        "  CRAWLMON_SETUP_SCRIPT    Semicolon-separated answers driving setup non-interactively"
            .to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_parse_exactly() {
        assert_eq!(parse_cli_verb("setup"), CliVerb::Setup);
        assert_eq!(parse_cli_verb("version"), CliVerb::Version);
        assert_eq!(parse_cli_verb("--version"), CliVerb::Version);
        assert_eq!(parse_cli_verb("Setup"), CliVerb::Unknown);
        assert_eq!(parse_cli_verb("teardown"), CliVerb::Unknown);
    }

    #[test]
    fn help_mentions_every_verb() {
        let help = help_text();
        assert!(help.contains("setup"));
        assert!(help.contains("version"));
        assert!(help.contains("CRAWLMON_SETUP_SCRIPT"));
    }
}
