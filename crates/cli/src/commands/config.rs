use std::process;

use petseed_core::GeneratorConfig;

use crate::{report_error, OutputFormat};

/// Print the default configuration, ready to be saved and passed back via
/// `generate --config`.
pub(crate) fn cmd_config(output: OutputFormat, quiet: bool) {
    let config = GeneratorConfig::default();
    let rendered = match output {
        OutputFormat::Text => toml::to_string(&config).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&config).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => print!("{}", text),
        Err(e) => {
            report_error(&format!("serialization error: {}", e), output, quiet);
            process::exit(1);
        }
    }
    if output == OutputFormat::Json {
        println!();
    }
}
