//! The `drape tag` command for deriving tags from detector responses.

mod batch;
pub mod types;

pub use types::OutputFormat;

use clap::Args;
use drape_core::{
    Config, FileDiscovery, OutputFormat as CoreOutputFormat, OutputWriter, ResponseReader, TagSet,
    Tagger,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use batch::tag_batch;

/// Path that selects stdin as the input.
const STDIN_PATH: &str = "-";

/// Arguments for the `tag` command.
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Detector response file, directory of responses, or `-` for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of responses tagged concurrently (defaults to input.parallel_workers)
    #[arg(short, long)]
    pub parallel: Option<usize>,

    /// Skip dominant color tags
    #[arg(long)]
    pub no_colors: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Everything a tag run needs, resolved from config and CLI flags.
pub(crate) struct TagContext {
    pub tagger: Tagger,
    pub format: CoreOutputFormat,
    pub pretty: bool,
    pub parallel: usize,
    pub config: Config,
}

impl TagContext {
    /// Resolve CLI flags against the loaded configuration.
    pub fn new(args: &TagArgs, config: Config) -> anyhow::Result<Self> {
        let format = match args.format {
            Some(format) => format.to_core(),
            None => CoreOutputFormat::parse(&config.output.format).unwrap_or_default(),
        };
        let parallel = args.parallel.unwrap_or(config.input.parallel_workers);
        if parallel == 0 {
            anyhow::bail!("--parallel must be at least 1");
        }

        let tagger = Tagger::from_config(&config)?;
        let tagger = if args.no_colors {
            tagger.with_colors(false)
        } else {
            tagger
        };

        Ok(Self {
            tagger,
            format,
            pretty: args.pretty || config.output.pretty,
            parallel,
            config,
        })
    }

    /// Open the configured destination for tag output.
    pub fn writer(&self, output: Option<&Path>) -> anyhow::Result<OutputWriter<Box<dyn Write>>> {
        let sink: Box<dyn Write> = match output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(std::io::stdout().lock()),
        };
        Ok(OutputWriter::new(sink, self.format, self.pretty))
    }
}

/// Execute the tag command.
pub async fn execute(args: TagArgs, config: Config) -> anyhow::Result<()> {
    let ctx = TagContext::new(&args, config)?;

    if args.input.as_os_str() == STDIN_PATH {
        let response = ResponseReader::read_from(std::io::stdin().lock(), Path::new("<stdin>"))?;
        return emit_single(&ctx, ctx.tagger.tag(&response), args.output.as_deref());
    }

    if !args.input.exists() {
        anyhow::bail!(
            "Input path does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.input
        );
    }

    if args.input.is_file() {
        let response = ResponseReader::read_file(&args.input)?;
        return emit_single(&ctx, ctx.tagger.tag(&response), args.output.as_deref());
    }

    let files = FileDiscovery::new(&ctx.config.input).discover(&args.input);
    if files.is_empty() {
        tracing::warn!("No detector responses found at {:?}", args.input);
        return Ok(());
    }
    tracing::info!(
        "Found {} response(s) to tag ({} bytes)",
        files.len(),
        FileDiscovery::total_size(&files)
    );

    tag_batch(&ctx, files, args.output.as_deref()).await
}

/// Write the tags for a single response.
fn emit_single(ctx: &TagContext, tags: TagSet, output: Option<&Path>) -> anyhow::Result<()> {
    let mut writer = ctx.writer(output)?;
    writer.write(&tags)?;
    writer.flush()?;
    if let Some(path) = output {
        tracing::info!("Output written to {:?}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> TagArgs {
        TagArgs {
            input: PathBuf::from(input),
            output: None,
            format: None,
            parallel: None,
            no_colors: false,
            pretty: false,
        }
    }

    #[test]
    fn context_defaults_come_from_config() {
        let ctx = TagContext::new(&args("x.json"), Config::default()).unwrap();
        assert_eq!(ctx.format, CoreOutputFormat::Json);
        assert_eq!(ctx.parallel, 4);
        assert!(!ctx.pretty);
    }

    #[test]
    fn context_cli_flags_override_config() {
        let mut a = args("x.json");
        a.format = Some(OutputFormat::Jsonl);
        a.parallel = Some(8);
        a.pretty = true;
        let ctx = TagContext::new(&a, Config::default()).unwrap();
        assert_eq!(ctx.format, CoreOutputFormat::JsonLines);
        assert_eq!(ctx.parallel, 8);
        assert!(ctx.pretty);
    }

    #[test]
    fn context_rejects_zero_parallel() {
        let mut a = args("x.json");
        a.parallel = Some(0);
        assert!(TagContext::new(&a, Config::default()).is_err());
    }

    #[test]
    fn emit_single_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let response_path = dir.path().join("response.json");
        std::fs::write(
            &response_path,
            r#"{"labels": [{"text": "Jeans", "confidence": 0.9}],
                "colors": [{"red": 10, "green": 10, "blue": 10, "pixel_fraction": 0.4}]}"#,
        )
        .unwrap();
        let out_path = dir.path().join("tags.json");

        let ctx = TagContext::new(&args("unused"), Config::default()).unwrap();
        let response = ResponseReader::read_file(&response_path).unwrap();
        emit_single(&ctx, ctx.tagger.tag(&response), Some(&out_path)).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(written, "{\"tags\":[\"black\",\"jeans\"]}\n");
    }

    #[tokio::test]
    async fn execute_missing_input_fails() {
        let err = execute(args("/no/such/response.json"), Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
