//! Intelscope - threat-intelligence lookup client
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use intelscope_app::charts::ThreatMapView;
use intelscope_app::{
    AnalysisResult, DomainAnalysis, Engine, FetchPhase, Filter, IpAnalysis, Message, SearchPhase,
    Settings, View,
};
use intelscope_core::{detect_type, logging, ReputationLevel, SearchType};
use tracing::info;

/// Intelscope - look up domains, IPs, and file hashes against threat
/// intelligence sources
#[derive(Parser, Debug)]
#[command(name = "intelscope")]
#[command(about = "Threat-intelligence lookup client", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the reputation of a domain, IP address, or file hash
    Check {
        /// The indicator to look up
        value: String,

        /// Indicator type; detected from the value's shape when omitted
        #[arg(long = "type", value_enum)]
        search_type: Option<TypeArg>,
    },

    /// Show aggregate search statistics and the threat map
    Stats,

    /// Show the search history
    History {
        /// Only show searches of this type
        #[arg(long = "type", value_enum)]
        search_type: Option<TypeArg>,

        /// Only show searches with this reputation
        #[arg(long, value_enum)]
        reputation: Option<RepArg>,
    },

    /// Show which reputation sources are configured
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeArg {
    Domain,
    Ip,
    Hash,
}

impl From<TypeArg> for SearchType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Domain => SearchType::Domain,
            TypeArg::Ip => SearchType::Ip,
            TypeArg::Hash => SearchType::Hash,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RepArg {
    Clean,
    Suspicious,
    Malicious,
    Questionable,
    Unknown,
}

impl From<RepArg> for ReputationLevel {
    fn from(arg: RepArg) -> Self {
        match arg {
            RepArg::Clean => ReputationLevel::Clean,
            RepArg::Suspicious => ReputationLevel::Suspicious,
            RepArg::Malicious => ReputationLevel::Malicious,
            RepArg::Questionable => ReputationLevel::Questionable,
            RepArg::Unknown => ReputationLevel::Unknown,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let mut settings = Settings::load();
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }
    info!(base_url = %settings.api.base_url, "intelscope starting");
    let mut engine = Engine::new(settings)?;

    match args.command {
        Command::Check { value, search_type } => {
            let search_type = search_type
                .map(SearchType::from)
                .unwrap_or_else(|| detect_type(&value));
            run_check(&mut engine, search_type, value).await
        }
        Command::Stats => run_stats(&mut engine).await,
        Command::History {
            search_type,
            reputation,
        } => run_history(&mut engine, search_type, reputation).await,
        Command::Config => run_config(&mut engine).await,
    }
}

async fn run_check(engine: &mut Engine, search_type: SearchType, value: String) -> Result<()> {
    engine.apply(Message::ActivateView(View::for_search(search_type)));
    engine.apply(Message::InputChanged {
        search_type,
        value,
    });
    engine.apply(Message::SubmitSearch(search_type));
    engine.run_until_settled().await;

    let slot = engine.state.searches.slot(search_type);
    match slot.phase {
        SearchPhase::Success => match slot.result.as_ref() {
            Some(AnalysisResult::Domain(analysis)) | Some(AnalysisResult::Hash(analysis)) => {
                print_domain_analysis(analysis);
                Ok(())
            }
            Some(AnalysisResult::Ip(analysis)) => {
                print_ip_analysis(analysis);
                Ok(())
            }
            None => Err(eyre!("search finished without a result")),
        },
        _ => Err(eyre!(
            "{}",
            slot.error.clone().unwrap_or_else(|| "search failed".to_string())
        )),
    }
}

fn print_domain_analysis(analysis: &DomainAnalysis) {
    println!(
        "{} {}  [{}]",
        analysis.overall.emoji(),
        analysis.target,
        analysis.overall.badge_label()
    );

    if !analysis.automated.is_empty() {
        println!("\nAutomated results:");
        for card in &analysis.automated {
            let verdict = card
                .reputation
                .map(|r| format!("{} {}", r.emoji(), r.badge_label()))
                .unwrap_or_else(|| card.status.as_str().to_string());
            println!("  {} - {}", card.source, verdict);
            for row in &card.details {
                println!("      {}: {}", row.label, row.value);
            }
            if let Some(message) = &card.message {
                println!("      {message}");
            }
        }
    }

    if !analysis.manual.is_empty() {
        println!("\nManual investigation:");
        for card in &analysis.manual {
            match &card.url {
                Some(url) => println!("  {} - {url}", card.source),
                None => println!("  {}", card.source),
            }
        }
    }
}

fn print_ip_analysis(analysis: &IpAnalysis) {
    println!(
        "{} {}  [{}]",
        analysis.reputation.emoji(),
        analysis.target,
        analysis.reputation.badge_label()
    );
    for card in &analysis.cards {
        println!("\n{}:", card.title);
        for row in &card.rows {
            println!("  {}: {}", row.label, row.value);
        }
    }
}

async fn run_stats(engine: &mut Engine) -> Result<()> {
    engine.apply(Message::ActivateView(View::Statistics));
    engine.run_until_settled().await;

    let stats = &engine.state.stats;
    if let FetchPhase::Error(message) = &stats.phase {
        return Err(eyre!("{message}"));
    }

    println!("Total searches: {}", stats.summary.total);
    println!(
        "  domains: {}  ips: {}  hashes: {}",
        stats.summary.domains, stats.summary.ips, stats.summary.hashes
    );

    if let Some(chart) = &stats.reputation_chart {
        println!("\nReputation distribution:");
        for (label, value) in chart.labels.iter().zip(chart.values) {
            println!("  {label}: {value}");
        }
    }

    match &stats.threat_map {
        Some(ThreatMapView::Map { regions, .. }) => {
            println!("\nThreats by country:");
            for region in regions {
                println!(
                    "  {} - {} ({:?})",
                    region.display_name, region.count, region.tier
                );
            }
        }
        _ => {
            println!("\nNo country data yet.");
            println!("Domain and IP searches will build up geographic threat statistics here.");
        }
    }

    if !stats.recent.is_empty() {
        println!("\nRecent searches:");
        for row in &stats.recent {
            println!(
                "  {} {}  {} {}  ({})",
                row.icon,
                row.target,
                row.reputation.emoji(),
                row.reputation.badge_label(),
                row.relative_time
            );
        }
    }

    Ok(())
}

async fn run_history(
    engine: &mut Engine,
    search_type: Option<TypeArg>,
    reputation: Option<RepArg>,
) -> Result<()> {
    engine.apply(Message::ActivateView(View::History));
    engine.run_until_settled().await;

    if let FetchPhase::Error(message) = &engine.state.history.phase {
        return Err(eyre!("{message}"));
    }

    let type_filter = search_type
        .map(|t| Filter::Only(SearchType::from(t)))
        .unwrap_or(Filter::All);
    let reputation_filter = reputation
        .map(|r| Filter::Only(ReputationLevel::from(r)))
        .unwrap_or(Filter::All);
    engine.apply(Message::SetHistoryTypeFilter(type_filter));
    engine.apply(Message::SetHistoryReputationFilter(reputation_filter));

    let history = &engine.state.history;
    if history.visible.is_empty() {
        println!("No matching history entries.");
        return Ok(());
    }

    for card in &history.visible {
        println!(
            "{} {}  {} {}  {} ({})",
            card.icon,
            card.type_label,
            card.reputation.emoji(),
            card.target,
            card.timestamp,
            card.relative_time
        );
        if let Some(country) = &card.country {
            println!("    country: {country}");
        }
    }

    Ok(())
}

async fn run_config(engine: &mut Engine) -> Result<()> {
    engine.apply(Message::ActivateView(View::Config));
    engine.run_until_settled().await;

    let config = &engine.state.config;
    if let FetchPhase::Error(message) = &config.phase {
        return Err(eyre!("{message}"));
    }

    println!(
        "{} of {} sources configured",
        config.configured_count(),
        config.sources.len()
    );
    for (name, status) in &config.sources {
        if status.configured {
            let origin = status
                .source
                .map(|s| s.label())
                .unwrap_or("configured");
            println!("  ✅ {name} ({origin})");
        } else {
            println!("  ❌ {name} (not configured)");
        }
    }

    Ok(())
}
