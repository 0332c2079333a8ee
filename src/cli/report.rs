use crate::queries::rank_queries::RankedIdentity;
use crate::queries::stats_queries::{BoxSummary, GraphStats, ImportanceDistribution};

pub fn print_stats(title: &str, stats: &GraphStats) {
    println!("{}:", title);
    println!("  Identities: {}", stats.node_count);
    println!("  Edges: {}", stats.edge_count);
    println!("  Messages: {}", stats.total_messages);
    println!("  Self-addressed: {}", stats.self_loops);
    if let Some((sender, receiver, weight)) = &stats.heaviest_edge {
        println!("  Busiest pair: {} -> {} ({} messages)", sender, receiver, weight);
    }
    println!();
}

pub fn print_rankings(title: &str, rows: &[RankedIdentity]) {
    if rows.is_empty() {
        println!("{}: no identities.", title);
        println!();
        return;
    }

    let width = rows
        .iter()
        .map(|r| r.identity.chars().count())
        .max()
        .unwrap_or(0);

    println!("{}:", title);
    for row in rows {
        println!(
            "  {:>3}. {:<width$}  {:.3}",
            row.rank,
            row.identity,
            row.importance,
            width = width
        );
    }
    println!();
}

pub fn print_distribution(distribution: &ImportanceDistribution) {
    println!("Importance distribution:");
    print_box("Senders", distribution.senders.as_ref());
    print_box("Receivers", distribution.receivers.as_ref());
    println!();
}

fn print_box(label: &str, summary: Option<&BoxSummary>) {
    match summary {
        None => println!("  {:<9} (none)", label),
        Some(s) => println!(
            "  {:<9} n={} min={:.4} q1={:.4} median={:.4} q3={:.4} max={:.4}",
            label, s.count, s.min, s.q1, s.median, s.q3, s.max
        ),
    }
}
