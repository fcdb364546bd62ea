//! hal-render
//!
//! Reads a JSON render request and prints the HAL document built from it.
//!
//! ```text
//! echo '{"embedded":[{"rel":"orders","content":{"id":1}}]}' | hal-render --pretty
//! ```

mod request;

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use helios_hateoas::HalConfiguration;
use helios_hateoas::hal::render_string;
use tracing::info;

use crate::request::RenderRequest;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "hal-render")]
#[command(about = "Render JSON render requests as HAL documents")]
struct Args {
    /// Request file to read. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// File to write the document to. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HAL_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    hal: HalConfiguration,
}

/// Initializes the tracing subscriber, logging to stderr so stdout carries
/// only the rendered document.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hal_render={level},helios_hateoas={level}",
            level = level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, document: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{}\n", document))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document).context("Failed to write stdout")
        }
    }
}

/// Reads, renders and writes one request.
fn run(args: &Args) -> anyhow::Result<()> {
    let input = read_input(args.input.as_ref())?;
    let request = RenderRequest::from_json(&input)?;

    info!(
        items = request.items.len(),
        embedded = request.embedded.len(),
        links = request.links.len(),
        "Rendering request"
    );

    let document = request.render(&args.hal)?;
    let rendered = render_string(&document, &args.hal)?;
    write_output(args.output.as_ref(), &rendered)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(errors) = args.hal.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(input: PathBuf, output: PathBuf, extra: &[&str]) -> Args {
        let mut argv = vec![
            "hal-render".to_string(),
            input.display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_renders_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("request.json");
        let output = dir.path().join("document.json");
        let mut file = std::fs::File::create(&input).unwrap();
        write!(
            file,
            r#"{{"embedded":[{{"rel":"orders","content":{{"id":1}}}},{{"rel":"orders","content":{{"id":2}}}}]}}"#
        )
        .unwrap();

        run(&args_for(input, output.clone(), &[])).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "{\"_embedded\":{\"orders\":[{\"id\":1},{\"id\":2}]}}\n"
        );
    }

    #[test]
    fn test_run_honors_hal_flags() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("request.json");
        let output = dir.path().join("document.json");
        std::fs::write(
            &input,
            r#"{"links":[{"rel":"self","href":"/x"}],"items":[{"content":{"id":1}}]}"#,
        )
        .unwrap();

        let args = args_for(
            input,
            output.clone(),
            &["--render-single-links-as-array", "--pretty"],
        );
        run(&args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert!(written["_links"]["self"].is_array());
    }

    #[test]
    fn test_run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(
            dir.path().join("missing.json"),
            dir.path().join("out.json"),
            &[],
        );
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["hal-render"]).unwrap();
        assert!(args.input.is_none());
        assert_eq!(args.hal.collection_rel, "content");
    }
}
