pub mod report;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::MailnetResult;
use crate::export;
use crate::ops::analysis_ops::{self, Analysis};
use crate::queries::{rank_queries, stats_queries};
use crate::source;

/// Runs one batch analysis: load, analyze, print the report, write exports.
pub fn run(config: &AnalysisConfig) -> MailnetResult<Analysis> {
    config.validate()?;

    let records = source::load_all(&config.input)?;
    let analysis = analysis_ops::analyze(&records, &config.rank, config.report.threshold)?;

    print_report(&analysis, config.report.top)?;

    if let Some(path) = &config.export.json {
        export::write_graph_json(&analysis.graph, path)?;
    }
    if let Some(path) = &config.export.csv {
        export::write_rankings_csv(&analysis.graph, path)?;
    }

    info!("analysis complete");
    Ok(analysis)
}

fn print_report(analysis: &Analysis, top: usize) -> MailnetResult<()> {
    println!("Email Communication Network");
    println!();

    report::print_stats("Full network", &stats_queries::stats(&analysis.graph));
    report::print_rankings(
        &format!("Top {} by importance", top),
        &rank_queries::top_n(&analysis.graph, top)?,
    );
    report::print_distribution(&stats_queries::distribution(&analysis.graph)?);

    report::print_stats(
        &format!("Filtered network (importance >= {})", analysis.threshold),
        &stats_queries::stats(&analysis.filtered),
    );
    report::print_rankings(
        "Filtered ranking",
        &rank_queries::top_n(&analysis.filtered, top)?,
    );
    Ok(())
}
