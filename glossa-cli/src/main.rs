mod cli;
mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use glossa_core::RunReport;
use glossa_pipeline::{
    BudgetConfig, BulkTranslator, FieldClassifier, KeyPolicy, RateBudget, RunOptions,
    TreeTranslator,
};
use glossa_remote::{GraphqlCostProbe, ShopAdminClient};
use glossa_telemetry::init_telemetry;
use tokio_util::sync::CancellationToken;

use cli::{Cli, Commands};
use config::EnvConfig;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("glossa-cli");

    let cli = Cli::parse();
    let env = EnvConfig::from_env()?;

    match cli.command {
        Commands::Run {
            source,
            target,
            locale,
            namespace,
            key,
            batch_size,
            page_size,
            limit,
            delay_ms,
            providers,
        } => {
            let chain = env.build_chain(&providers)?;
            tracing::info!(order = ?chain.provider_names(), "Translation backends ready");

            let probe = Arc::new(GraphqlCostProbe::new(env.shop_config())?);
            let budget = Arc::new(RateBudget::new(probe, BudgetConfig::default()));
            let client = Arc::new(
                ShopAdminClient::new(env.shop_config())?.with_observer(budget.clone()),
            );
            let translator = Arc::new(TreeTranslator::new(
                FieldClassifier::new(KeyPolicy::KeyAndValue),
                Arc::new(chain),
            ));

            let mut options = RunOptions::new(source, target)
                .with_record_address(namespace, key)
                .with_batch_size(batch_size)
                .with_page_size(page_size)
                .with_inter_batch_delay(Duration::from_millis(delay_ms));
            if let Some(locale) = locale {
                options = options.with_target_locale(locale);
            }
            if let Some(limit) = limit {
                options = options.with_item_limit(limit);
            }

            let cancel = CancellationToken::new();
            let signal_token = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupt received; finishing the current batch");
                    signal_token.cancel();
                }
            });

            let bulk = BulkTranslator::new(client, budget, translator);
            let report = bulk.run(&options, cancel).await;
            print_summary(&report);

            if report.errored > 0 || !report.complete_scan {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Status => {
            let probe = Arc::new(GraphqlCostProbe::new(env.shop_config())?);
            let budget = RateBudget::new(probe, BudgetConfig::default());
            let status = budget.status().await;

            println!("Shop:      {}", env.shop_domain);
            println!("Available: {} points", status.available);
            println!("Threshold: {} points", status.threshold);
            println!("State:     {}", if status.is_low { "LOW (runs will pace themselves)" } else { "ok" });
            Ok(())
        }
    }
}

fn print_summary(report: &RunReport) {
    println!();
    println!("Run summary");
    println!("  items found: {}{}", report.total_items, if report.complete_scan { "" } else { " (partial scan)" });
    println!("  processed:   {}", report.processed);
    println!("  succeeded:   {}", report.succeeded);
    println!("  skipped:     {}", report.skipped);
    println!("  errors:      {}", report.errored);
    if report.cancelled {
        println!("  cancelled before all batches ran");
    }

    for detail in report.details.iter().filter(|d| d.reason.is_some()) {
        println!(
            "  [{}] {}: {}",
            match detail.status {
                glossa_core::ItemStatus::Success => "ok",
                glossa_core::ItemStatus::Skipped => "skip",
                glossa_core::ItemStatus::Error => "err",
            },
            detail.item_id,
            detail.reason.as_deref().unwrap_or_default()
        );
    }
}
