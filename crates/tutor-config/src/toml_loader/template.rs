//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!(
        r##"# Tutor Configuration
# Schema version {CONFIG_SCHEMA_VERSION}
# Only override what you want to change -- missing fields use defaults.

[paths]
# prompts_dir = "prompts"        # <agent>_prompt.txt files
# intro_dir = "content/intro"    # <scenario>.json intro files

[models]
default = "gpt-4o-mini"          # llama2, gpt-4o-mini, gpt-4o, or a custom name

# [[models.custom]]
# name = "qwen"
# provider = "ollama"            # openai, ollama
# model = "qwen2.5:7b"
# max_tokens = 4096              # 1-131072
# temperature = 0.7              # 0.0-2.0

[scenarios]
# keys = ["job_interview", "hotel_checkin", "renting", "salary_negotiation"]
# intro_selection = "first"      # first, random

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
    )
}
