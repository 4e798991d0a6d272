use crate::{
    cli::args::{ReportFormat, SimilarArgs, SummaryArgs, TransformArgs},
    core::{
        pipeline::{load_json_array, run_transform},
        relevance::normalize_catalog,
        similarity::{display_value, find_title, similar_titles},
        AppError, CatalogConfig, CatalogSummary, ConfigLoader, ConfigValidator, ErrorCategory,
        OutputRecord, SimilarTitle,
    },
    Result,
};
use anyhow::Context;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

/// Load the explicit config file, or the workspace one from the current directory.
fn resolve_config(config_path: Option<&Path>) -> Result<CatalogConfig> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_explicit(path)?,
        None => {
            let cwd = env::current_dir().context("failed to resolve current directory")?;
            ConfigLoader::load_from_workspace(&cwd)?
        }
    };
    Ok(config)
}

pub fn transform(args: TransformArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.paths.input = input;
    }
    if let Some(output) = args.output {
        config.paths.output = output;
    }
    ConfigValidator::validate_paths(&config.paths)?;

    tracing::debug!(
        input = %config.paths.input.display(),
        output = %config.paths.output.display(),
        "starting catalog transform"
    );
    let outcome = run_transform(&config.paths.input, &config.paths.output)?;
    tracing::info!(
        read = outcome.records_read,
        written = outcome.records_written,
        "catalog transform completed"
    );
    Ok(())
}

pub fn summary(args: SummaryArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    ConfigLoader::apply_summary_env(&mut config)?;
    if let Some(top) = args.top {
        config.summary.top = top;
    }
    ConfigValidator::validate_summary(&config.summary)?;

    let records = load_catalog(args.path, config.paths.output)?;
    let summary = CatalogSummary::from_records(&records, config.summary.top);

    let rendered = match args.format {
        ReportFormat::Text => summary.render_text(),
        ReportFormat::Json => render_json(&summary)?,
    };
    println!("{}", rendered);
    Ok(())
}

pub fn similar(args: SimilarArgs) -> Result<()> {
    if args.limit == 0 {
        return Err(
            AppError::new(ErrorCategory::Validation, "SIMILAR-002", "--limit must be at least 1")
                .into(),
        );
    }
    let config = resolve_config(args.config.as_deref())?;
    let catalog = normalize_catalog(&load_catalog(args.path, config.paths.output)?);

    let target = find_title(&catalog, &args.id).ok_or_else(|| {
        AppError::new(ErrorCategory::Validation, "SIMILAR-001", "no title has this id")
            .with_context("id", &args.id)
    })?;
    let ranked = similar_titles(&catalog, target, args.limit);
    tracing::debug!(id = %args.id, matches = ranked.len(), "ranked similar titles");

    let rendered = match args.format {
        ReportFormat::Text => render_similar_text(&catalog[target], &ranked),
        ReportFormat::Json => render_json(&ranked)?,
    };
    println!("{}", rendered);
    Ok(())
}

fn load_catalog(path: Option<PathBuf>, configured: PathBuf) -> Result<Vec<OutputRecord>> {
    let path = path.unwrap_or(configured);
    Ok(load_json_array(&path)?)
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render report")
}

fn render_similar_text(target: &OutputRecord, ranked: &[SimilarTitle]) -> String {
    let mut out = format!(
        "Titles similar to {} ({}):\n",
        display_value(&target.name),
        display_value(&target.id)
    );
    if ranked.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, title) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<40} {:>10}  {:.3}\n",
            rank + 1,
            display_value(&title.name),
            display_value(&title.id),
            title.similarity
        ));
    }
    out
}
