use clap::Parser;

/// ExpenseWise: terminal host for the budget assistant.
#[derive(Parser, Debug)]
#[command(name = "expensewise", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. debug, expensewise_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Generative-language model override.
    #[arg(long)]
    pub model: Option<String>,

    /// Request timeout in seconds (0 waits forever).
    #[arg(long)]
    pub timeout: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "expensewise",
            "--config",
            "/tmp/ew.toml",
            "--model",
            "gemini-2.0-flash",
            "--timeout",
            "0",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/ew.toml"));
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(args.timeout, Some(0));
        assert!(args.log_level.is_none());
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Args::try_parse_from(["expensewise", "--timeout", "soon"]).is_err());
    }
}
