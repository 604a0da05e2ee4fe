pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        r#"[server]
host = "127.0.0.1"
port = 8000
allowed_origin = "chrome-extension://jejbdolnndbgmjmjnbefbdnhnkgoafdh"

[model]
model_name = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com"
timeout_secs = 60
# The key itself is read from this environment variable (or a .env file)
api_key_env = "GEMINI_KEY"
"#
        .to_string()
    }
}
