//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# ExpenseWise Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-3-flash-preview"
# api_key_env = "API_KEY"      # environment variable holding the Gemini key
# request_timeout_secs = 30    # 0-600, 0 = wait forever
# max_output_tokens = 2048     # 1-65536, unset = service default
# temperature = 0.7            # 0.0-2.0, unset = service default

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
