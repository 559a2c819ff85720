use std::path::PathBuf;

use anyhow::Context;
use claim_audit::{AuditConfig, Rule, export, run_audit};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir: PathBuf = std::env::args_os()
        .nth(1)
        .context("usage: claim-audit <data-dir>")?
        .into();
    let config = AuditConfig::new(data_dir);
    info!("{config}");

    let report = run_audit(&config)
        .with_context(|| format!("audit failed for {}", config.data_dir.display()))?;

    info!("Master view: {} claims", report.master.len());
    for rule in Rule::ALL {
        info!(
            "  {}: {} claims flagged",
            rule.name(),
            report.summary.claims_for(rule).len()
        );
    }

    for (label, rollup) in [
        ("hospitals", &report.summary.by_hospital),
        ("doctors", &report.summary.by_doctor),
        ("agents", &report.summary.by_agent),
    ] {
        if rollup.is_empty() {
            info!("No {label} roll-up available in this dataset");
            continue;
        }
        info!("Top {label} by total flags:");
        for row in rollup.top(config.ranking_size) {
            info!("  {}: {}", row.key, row.tally.total);
        }
    }

    export::write_rule_extracts(&report.summary, &config.output_dir)?;
    export::write_report(&report, &config.output_dir)?;

    Ok(())
}
