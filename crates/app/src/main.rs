//! LinkFlow CLI

use std::{path::PathBuf, process::ExitCode, str::FromStr};

use clap::{Args, Parser, Subcommand};
use linkflow_app::{
    context::{AppConfig, AppContext},
    domain::{
        orders::join_sites,
        sites::{
            filters::{LinkTypeFilter, SiteFilters, SortKey, visible_sites},
            records::{SiteId, SiteRecord, SiteType},
        },
    },
    views::format_money,
};

#[derive(Debug, Parser)]
#[command(name = "linkflow-app", about = "LinkFlow CLI", long_about = None)]
struct Cli {
    /// Directory holding the persisted cart
    #[arg(long, env = "CART_DIR", default_value = ".linkflow", global = true)]
    cart_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the catalog
    Sites(SitesArgs),
    /// Manage the cart
    Cart(CartCommand),
    /// List placed orders
    Orders,
}

#[derive(Debug, Args)]
struct SitesArgs {
    /// Minimum domain authority
    #[arg(long)]
    da_max: Option<u8>,

    /// Minimum domain rating
    #[arg(long)]
    dr_max: Option<u8>,

    #[arg(long)]
    traffic_min: Option<u64>,

    #[arg(long)]
    spam_max: Option<u8>,

    /// Maximum price in whole dollars
    #[arg(long)]
    price_max: Option<u64>,

    /// Category to include; repeat for several
    #[arg(long = "category")]
    categories: Vec<String>,

    /// `Both`, `Dofollow` or `Nofollow`
    #[arg(long, value_parser = parse_link_type)]
    link_type: Option<LinkTypeFilter>,

    /// Site type to include; repeat for several
    #[arg(long = "site-type", value_parser = SiteType::from_str)]
    site_types: Vec<SiteType>,

    /// One of price-low, price-high, da-high, dr-high, traffic-high
    #[arg(long)]
    sort: Option<String>,

    /// Start from filters that exclude nothing instead of the browse defaults
    #[arg(long)]
    all: bool,
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show cart contents and total
    List,
    /// Add a catalog site
    Add { site_id: SiteId },
    /// Remove a site
    Remove { site_id: SiteId },
    /// Empty the cart
    Clear,
}

fn parse_link_type(value: &str) -> Result<LinkTypeFilter, String> {
    LinkTypeFilter::parse(value).ok_or_else(|| format!("unknown link type: {value}"))
}

#[tokio::main]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = AppConfig {
        cart_dir: cli.cart_dir,
        ..AppConfig::default()
    };

    let context = AppContext::from_config(&config)
        .await
        .map_err(|error| format!("failed to start: {error}"))?;

    match cli.command {
        Commands::Sites(args) => browse(&context, args).await,
        Commands::Cart(CartCommand { command }) => cart(&context, command).await,
        Commands::Orders => orders(&context).await,
    }
}

async fn browse(context: &AppContext, args: SitesArgs) -> Result<(), String> {
    let sort = match args.sort.as_deref() {
        Some(key) => Some(SortKey::parse(key).ok_or_else(|| format!("unknown sort key: {key}"))?),
        None => None,
    };

    let base = if args.all {
        SiteFilters::unrestricted()
    } else {
        SiteFilters::default()
    };

    let filters = SiteFilters {
        da_max: args.da_max.unwrap_or(base.da_max),
        dr_max: args.dr_max.unwrap_or(base.dr_max),
        traffic_min: args.traffic_min.unwrap_or(base.traffic_min),
        spam_max: args.spam_max.unwrap_or(base.spam_max),
        price_max: args
            .price_max
            .map_or(base.price_max, |dollars| dollars.saturating_mul(100)),
        categories: args.categories.into_iter().collect(),
        link_type: args.link_type.unwrap_or(base.link_type),
        site_types: args.site_types.into_iter().collect(),
    };

    let catalog = context
        .sites
        .list_sites()
        .await
        .map_err(|error| format!("failed to load sites: {error}"))?;

    let visible = visible_sites(&catalog, &filters, sort);

    if visible.is_empty() {
        println!("no sites match the current filters");

        return Ok(());
    }

    for site in &visible {
        print_site(site);
    }

    println!("{} of {} sites", visible.len(), catalog.len());

    Ok(())
}

async fn cart(context: &AppContext, command: CartSubcommand) -> Result<(), String> {
    match command {
        CartSubcommand::List => {}
        CartSubcommand::Add { site_id } => {
            let site = context
                .sites
                .get_site(site_id)
                .await
                .map_err(|error| format!("failed to load site {site_id}: {error}"))?;

            if context.carts.add_item(site).await {
                println!("added site {site_id}");
            } else {
                println!("site {site_id} is already in the cart");
            }
        }
        CartSubcommand::Remove { site_id } => {
            if context.carts.remove_item(site_id).await {
                println!("removed site {site_id}");
            } else {
                println!("site {site_id} is not in the cart");
            }
        }
        CartSubcommand::Clear => {
            context.carts.clear().await;
            println!("cart cleared");
        }
    }

    let items = context.carts.list_items().await;

    for item in &items {
        print_site(item);
    }

    let total = context
        .carts
        .total()
        .await
        .ok_or_else(|| "cart total is out of range".to_string())?;

    println!("{} item(s), total {}", items.len(), format_money(total));

    Ok(())
}

async fn orders(context: &AppContext) -> Result<(), String> {
    let (orders, sites) = tokio::join!(context.orders.list_orders(), context.sites.list_sites());

    let orders = orders.map_err(|error| format!("failed to load orders: {error}"))?;
    let sites = sites.map_err(|error| format!("failed to load sites: {error}"))?;

    if orders.is_empty() {
        println!("no orders yet");

        return Ok(());
    }

    for summary in join_sites(orders, &sites) {
        let site = summary
            .site
            .as_ref()
            .map_or("(deleted site)", |site| site.url.as_str());

        println!(
            "#{:<4} {:<10} {:>12}  {site}  {}",
            summary.order.id,
            summary.order.status.as_str(),
            format_money(summary.order.price),
            summary.order.created_at.strftime("%Y-%m-%d"),
        );
    }

    Ok(())
}

fn print_site(site: &SiteRecord) {
    println!(
        "#{:<4} {:<28} DA {:>3}  DR {:>3}  traffic {:>9}  spam {:>3}  {:>12}  {} {} {}",
        site.id,
        site.url,
        site.da,
        site.dr,
        site.monthly_traffic,
        site.spam_score,
        format_money(site.price),
        site.category,
        site.link_type,
        site.site_type,
    );
}
