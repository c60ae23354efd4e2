use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use shoplist::utils::{logger, validation::Validate};
use shoplist::{
    CatalogProvider, CliConfig, ComparisonEngine, ComparisonOptions, LocalStorage, PriceCatalog,
    PriceComparisonResult, ShoppingListItem, Storage,
};

#[derive(Debug, Serialize)]
struct ComparisonReport {
    generated_at: DateTime<Utc>,
    total_items: usize,
    result: PriceComparisonResult,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shoplist price comparison");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());

    // 組出購物清單：--items 加上 --list-file 的內容
    let mut items: Vec<ShoppingListItem> = config
        .items
        .iter()
        .map(|name| ShoppingListItem::new(name.clone()))
        .collect();
    if let Some(list_file) = &config.list_file {
        match storage.read_file(list_file).await {
            Ok(data) => {
                let content = String::from_utf8_lossy(&data);
                items.extend(
                    content
                        .lines()
                        .filter(|line| !line.trim().is_empty())
                        .map(|line| ShoppingListItem::new(line.trim())),
                );
            }
            Err(e) => {
                tracing::error!("❌ Could not read list file {}: {}", list_file, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }
    tracing::info!("Shopping list has {} items", items.len());

    // 載入價格目錄並建立比價引擎
    let catalog = match storage.read_file(&config.catalog).await {
        Ok(data) => PriceCatalog::from_str(&String::from_utf8_lossy(&data)),
        Err(e) => Err(e),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Could not load catalog {}: {}", config.catalog, e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let provider = CatalogProvider::new(catalog);
    let options = ComparisonOptions::from_config(&config);
    let engine = ComparisonEngine::with_options(provider, options);

    match engine.compare(&items).await {
        Ok(result) => {
            print_ranking(&result);

            if let Some(output_path) = &config.output_path {
                let report = ComparisonReport {
                    generated_at: Utc::now(),
                    total_items: result.total_items,
                    result,
                };
                let json = serde_json::to_string_pretty(&report)?;
                let report_storage = LocalStorage::new(output_path.clone());
                report_storage
                    .write_file("comparison_report.json", json.as_bytes())
                    .await?;
                tracing::info!("📁 Report saved to: {}/comparison_report.json", output_path);
                println!("📁 Report saved to: {}/comparison_report.json", output_path);
            }

            tracing::info!("✅ Price comparison completed successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Price comparison failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                shoplist::utils::error::ErrorSeverity::Low => 0,
                shoplist::utils::error::ErrorSeverity::Medium => 2,
                shoplist::utils::error::ErrorSeverity::High => 1,
                shoplist::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn print_ranking(result: &PriceComparisonResult) {
    if result.store_summaries.is_empty() {
        println!("🤷 No store has a price for any of your items");
        return;
    }

    if let Some(best) = &result.best_store {
        println!(
            "🏆 Best store: {} ({} {})",
            best, result.best_total_price, result.currency
        );
    }

    for (rank, summary) in result.store_summaries.iter().enumerate() {
        println!(
            "{}. {} - {} {} ({}/{} items available)",
            rank + 1,
            summary.store,
            summary.total_price,
            summary.currency,
            summary.available_item_count,
            result.total_items
        );
        for (product, price) in &summary.item_prices {
            let shopper = summary
                .item_shoppers
                .as_ref()
                .and_then(|shoppers| shoppers.get(product));
            match shopper {
                Some(shopper) => println!("   {}: {} (reported by {})", product, price, shopper),
                None => println!("   {}: {}", product, price),
            }
        }
    }
}
