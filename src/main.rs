use canrev_calc::config::cli::{CalculateArgs, Command, ContactArgs, ReportArgs};
use canrev_calc::contact::{ContactSubmission, HttpSubmissionGateway};
use canrev_calc::core::report::{write_report, VolumeSweep};
use canrev_calc::core::stepper::Direction;
use canrev_calc::domain::ports::{ConfigProvider, SubmissionGateway};
use canrev_calc::utils::error::ErrorSeverity;
use canrev_calc::utils::money::MoneyFormat;
use canrev_calc::utils::{logger, validation::Validate};
use canrev_calc::{AppConfig, CalcError, Calculation, CalculationInput, Calculator, CalculatorSession, CliConfig};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let outcome = match cli.command {
        Command::Plans => {
            print_plans(&config);
            Ok(())
        }
        Command::Calculate(args) => calculate(&config, args),
        Command::Report(args) => report(&config, args),
        Command::Interactive => interactive(&config).await,
        Command::Contact(args) => contact(&config, args).await,
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
    Ok(())
}

fn load_config(path: Option<&str>) -> canrev_calc::Result<AppConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    tracing::debug!("{} plans in catalog", config.catalog.len());
    Ok(config)
}

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn calculator(config: &AppConfig) -> Calculator {
    Calculator::new(config.catalog(), config.money_format().clone())
}

fn print_plans(config: &AppConfig) {
    let money = config.money_format();
    for entry in config.catalog.iter() {
        println!(
            "{:<10} {:<14} {:>6} cans included  {}/mo  +{} per extra can",
            entry.id,
            entry.display_name(),
            entry.plan.included_volume,
            money.format(entry.plan.base_fee),
            money.format(entry.plan.overage_rate)
        );
    }
}

fn calculate(config: &AppConfig, args: CalculateArgs) -> canrev_calc::Result<()> {
    let defaults = &config.session;
    let input = CalculationInput {
        selected_plan_id: args.plan.or_else(|| defaults.plan.clone()),
        markup_per_can: args.markup.unwrap_or_else(|| defaults.markup.clone()),
        monthly_volume: args.volume.unwrap_or_else(|| defaults.volume.clone()),
    };

    let calculation = calculator(config).calculate(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        print_calculation(&calculation, config.money_format());
    }
    Ok(())
}

fn print_calculation(calculation: &Calculation, money: &MoneyFormat) {
    let result = match calculation {
        Calculation::Ready(result) => result,
        Calculation::Incomplete { issue } => {
            println!("Complete all fields to see your profit calculation ({})", issue);
            return;
        }
    };

    println!("Monthly revenue:  {}", money.format(result.extra_revenue));
    println!("Monthly costs:    {}", money.format(result.total_cost));
    println!(
        "{:<17} {}",
        if result.is_positive { "Net profit:" } else { "Net loss:" },
        money.format(result.profit.abs())
    );
    println!(
        "                  {} per can • {}/year",
        money.format(result.profit_per_can),
        money.format(result.yearly_profit)
    );

    if result.recommendations.is_empty() {
        println!("✅ This is the most cost-effective plan for your volume");
    } else {
        println!("💡 We found a better plan for you");
        for recommendation in &result.recommendations {
            println!("   • {}", recommendation);
        }
    }
}

fn report(config: &AppConfig, args: ReportArgs) -> canrev_calc::Result<()> {
    let sweep = VolumeSweep {
        plan_id: args.plan,
        markup: args.markup,
        from: args.from,
        to: args.to,
        step: args.step,
    };
    let rows = sweep.run(&calculator(config))?;

    match args.output {
        Some(path) => {
            if let Some(parent) = std::path::Path::new(&path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::File::create(&path)?;
            write_report(&rows, args.format, file)?;
            tracing::info!("📁 Report with {} rows saved to: {}", rows.len(), path);
        }
        None => write_report(&rows, args.format, std::io::stdout().lock())?,
    }
    Ok(())
}

async fn interactive(config: &AppConfig) -> canrev_calc::Result<()> {
    let mut session = CalculatorSession::new(calculator(config), config.session.to_input());
    let money = config.money_format();

    println!("plan <id> | markup <text> | volume <text> | markup+ | markup- | volume+ | volume- | clear | quit");
    print_calculation(&session.calculation(), money);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let calculation = match command {
            "" => continue,
            "quit" | "exit" => break,
            "plan" => session.select_plan(argument.trim()),
            "clear" => session.clear_plan(),
            "markup" => session.set_markup(argument),
            "volume" => session.set_volume(argument),
            "markup+" => session.step_markup(Direction::Up),
            "markup-" => session.step_markup(Direction::Down),
            "volume+" => session.step_volume(Direction::Up),
            "volume-" => session.step_volume(Direction::Down),
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        };

        let input = session.input();
        println!(
            "[plan: {}, markup: {}, volume: {}]",
            input.selected_plan_id.as_deref().unwrap_or("-"),
            input.markup_per_can,
            input.monthly_volume
        );
        print_calculation(&calculation, money);
    }
    Ok(())
}

async fn contact(config: &AppConfig, args: ContactArgs) -> canrev_calc::Result<()> {
    let submission = ContactSubmission {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone.filter(|p| !p.is_empty()),
        message: args.message,
    };
    // rejected locally: nothing is sent
    submission.validate_before_send()?;

    let endpoint = args.endpoint.unwrap_or_else(|| config.contact_endpoint().to_string());
    canrev_calc::utils::validation::validate_url("endpoint", &endpoint)?;
    let gateway = HttpSubmissionGateway::new(endpoint)?;

    match gateway.submit(&submission).await {
        Ok(receipt) => tracing::info!("Form delivered (status {})", receipt.status),
        // the visitor still gets the thank-you message
        Err(e) => tracing::warn!("Form submission error: {}", e),
    }

    println!("✅ Thank you! Your message has been sent successfully.");
    println!("   We'll get back to you as soon as possible.");
    Ok(())
}
