use std::process;

use petseed_core::{
    generate, timestamp, write_payload, BatchWritePayload, IdSource, OutputTarget, RandomIds,
    SeedError, SeededIds,
};

use crate::{report_error, settings, GenerateArgs, OutputFormat};

pub(crate) fn cmd_generate(args: &GenerateArgs, output: OutputFormat, quiet: bool) {
    let config = match settings::resolve(args) {
        Ok(c) => c,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    // One base time for the whole run.
    let base = match args.base_time.as_deref() {
        Some(s) => timestamp::parse_base_time(s),
        None => timestamp::now_utc(),
    };
    let base = match base {
        Ok(b) => b,
        Err(e) => exit_with(&e, output, quiet),
    };

    let mut ids: Box<dyn IdSource> = match args.seed {
        Some(seed) => Box::new(SeededIds::new(seed)),
        None => Box::new(RandomIds),
    };

    let payload = match generate(&config, base, &mut ids) {
        Ok(p) => p,
        Err(e) => exit_with(&e, output, quiet),
    };

    let target = OutputTarget::from_path(&config.output);
    if let Err(e) = write_payload(&payload, &target) {
        exit_with(&e, output, quiet);
    }

    // The payload itself is the output when writing to stdout.
    if !quiet && target != OutputTarget::Stdout {
        print_summary(&payload, &target, output);
    }
}

fn print_summary(payload: &BatchWritePayload, target: &OutputTarget, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!(
                "wrote {} records to {} (table {})",
                payload.len(),
                target,
                payload.table_name
            );
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "records": payload.len(),
                "table": payload.table_name,
                "path": target.to_string(),
            });
            println!("{}", json);
        }
    }
}

/// Same quiet rule as [`report_error`], with the error kind in JSON output.
fn exit_with(e: &SeedError, output: OutputFormat, quiet: bool) -> ! {
    if !quiet {
        match output {
            OutputFormat::Json => eprintln!("{}", e.to_json_value()),
            OutputFormat::Text => eprintln!("error: {}", e),
        }
    }
    process::exit(1);
}
