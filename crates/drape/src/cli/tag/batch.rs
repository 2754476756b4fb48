//! Batch tagging: concurrent reads with a bounded number in flight, progress, and summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use drape_core::{DiscoveredFile, InputError, ResponseReader, TagSet, Tagger, TaggingStats};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::TagContext;

/// Tag every discovered response and write all results.
///
/// Failed files are logged and counted; they never abort the batch.
/// Output order follows discovery order regardless of completion order.
pub async fn tag_batch(
    ctx: &TagContext,
    files: Vec<DiscoveredFile>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let progress = create_progress_bar(files.len() as u64);

    let results = run_concurrent(ctx.tagger.clone(), files, ctx.parallel, &progress).await?;
    progress.finish_and_clear();

    let mut stats = TaggingStats::default();
    let mut tag_sets = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(tags) => {
                stats.succeeded += 1;
                stats.tags_emitted += tags.len();
                tag_sets.push(tags);
            }
            Err(e) => {
                stats.failed += 1;
                tracing::error!("Failed: {:?} - {}", path, e);
            }
        }
    }
    stats.total_seconds = start_time.elapsed().as_secs_f64();

    let mut writer = ctx.writer(output)?;
    writer.write_all(&tag_sets)?;
    writer.flush()?;
    if let Some(path) = output {
        tracing::info!("Output written to {:?}", path);
    }

    print_summary(&stats);
    Ok(())
}

/// Tag files with at most `parallel` reads in flight.
///
/// Returns one entry per input file, in input order.
async fn run_concurrent(
    tagger: Tagger,
    files: Vec<DiscoveredFile>,
    parallel: usize,
    progress: &indicatif::ProgressBar,
) -> anyhow::Result<Vec<(PathBuf, Result<TagSet, InputError>)>> {
    let tagger = Arc::new(tagger);
    let semaphore = Arc::new(Semaphore::new(parallel));
    let mut tasks = JoinSet::new();

    for (index, file) in files.into_iter().enumerate() {
        let tagger = Arc::clone(&tagger);
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        tasks.spawn(async move {
            let result = tag_file(&tagger, &file.path).await;
            drop(permit);
            (index, file.path, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined?);
        progress.inc(1);
    }

    results.sort_by_key(|(index, _, _)| *index);
    Ok(results
        .into_iter()
        .map(|(_, path, result)| (path, result))
        .collect())
}

/// Read, parse and tag one response file.
async fn tag_file(tagger: &Tagger, path: &Path) -> Result<TagSet, InputError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InputError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let response = ResponseReader::parse(&content, path)?;
    Ok(tagger.tag(&response).with_source(path))
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary table after batch tagging.
fn print_summary(stats: &TaggingStats) {
    let total = stats.succeeded + stats.failed;
    let rate = if stats.total_seconds > 0.0 {
        total as f64 / stats.total_seconds
    } else {
        0.0
    };

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Tagged:       {:>8}", stats.succeeded);
    if stats.failed > 0 {
        eprintln!("    Failed:       {:>8}", stats.failed);
    }
    eprintln!("    Tags:         {:>8}", stats.tags_emitted);
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", total);
    eprintln!("    Duration:     {:>7.2}s", stats.total_seconds);
    eprintln!("    Rate:         {:>7.1} resp/sec", rate);
    eprintln!("  ====================================");
}
