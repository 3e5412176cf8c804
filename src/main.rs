use clap::Parser;
use parcel_rates::adapters::{batch, output};
use parcel_rates::config::cli::{BatchArgs, Command, QuoteArgs};
use parcel_rates::utils::error::{ErrorSeverity, RatingError};
use parcel_rates::utils::logger;
use parcel_rates::{CliConfig, ConfigProvider, ShippingMethod, StaticOrder, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match parcel_rates::config::load_settings(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    let result = match &cli.command {
        Command::Quote(args) => run_quote(config, args),
        Command::Batch(args) => run_batch(config, args),
        Command::Services => run_services(config),
        Command::CheckConfig => run_check_config(&config),
    };

    if let Err(e) = result {
        exit_with(e);
    }
    Ok(())
}

fn run_quote(config: TomlConfig, args: &QuoteArgs) -> parcel_rates::Result<()> {
    let method = ShippingMethod::new(config);
    let order = StaticOrder::new("", args.country.as_deref(), args.subtotal);
    let quotes = method.quote(&order)?;

    tracing::info!("✅ {} shipping option(s) for this shipment", quotes.len());

    let rows: Vec<output::QuoteRow> = quotes
        .iter()
        .map(|q| output::QuoteRow::from_quote(&order.order_id, q))
        .collect();
    print!("{}", output::render(&rows, args.format)?);
    Ok(())
}

fn run_batch(config: TomlConfig, args: &BatchArgs) -> parcel_rates::Result<()> {
    let method = ShippingMethod::new(config);
    let orders = batch::read_orders_from_file(&args.input)?;
    tracing::info!("📁 Rating {} orders from {}", orders.len(), args.input.display());

    let outcome = batch::quote_orders(&method, &orders);
    if !outcome.rejected.is_empty() {
        tracing::warn!(
            "{} of {} orders could not be rated and were skipped",
            outcome.rejected.len(),
            orders.len()
        );
    }

    print!("{}", output::render(&outcome.rows, args.format)?);
    Ok(())
}

fn run_services(config: TomlConfig) -> parcel_rates::Result<()> {
    let method = ShippingMethod::new(config);
    println!("{} ({})", method.config().label(), method.id());
    for service in method.services() {
        println!("  {:<7}  {}", service.code, service.label);
    }
    Ok(())
}

fn run_check_config(config: &TomlConfig) -> parcel_rates::Result<()> {
    // 設定已在載入時驗證
    tracing::info!("✅ Configuration loaded and validated successfully");
    println!(
        "✅ {}: {} service(s), currency {}",
        config.shipping_method_id(),
        config.services().len(),
        config.currency()
    );
    if config.api_credentials().username.is_some() {
        tracing::info!("API credentials present (not used for flat-rate quotes)");
    }
    Ok(())
}

fn exit_with(e: RatingError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
