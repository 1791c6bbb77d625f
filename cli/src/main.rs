mod render;
mod source;

use std::time::Duration;

use catalog::appointment::submit_booking;
use catalog::compare::ComparisonPair;
use catalog::featured::load_featured;
use catalog::{BookingForm, FilterKey, Fetched, PickupMode, SourceResolver, Vehicle, VehicleListing};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::source::ReqwestSource;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("vehicle {0} not found")]
    VehicleNotFound(i64),
    #[error("cannot compare a vehicle with itself")]
    SameVehicle,
    #[error("booking failed: {0}")]
    Booking(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "showroom", about = "VinFast showroom catalog and test-drive CLI")]
struct Cli {
    #[arg(long, env = "SHOWROOM_API_BASE", default_value = "http://127.0.0.1:3000/api")]
    base_url: String,

    #[arg(long, env = "SHOWROOM_TOKEN")]
    token: Option<String>,

    #[arg(long, env = "SHOWROOM_USER_ID", default_value_t = 0)]
    user_id: i64,

    #[arg(long, env = "SHOWROOM_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log requests and fallbacks to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List vehicles, optionally narrowed to model lines.
    Vehicles {
        #[arg(long = "model", value_parser = parse_filter_key)]
        models: Vec<FilterKey>,
    },
    /// Show the home-page featured models.
    Featured,
    /// Show one vehicle.
    Show { id: i64 },
    /// Compare two vehicles side by side.
    Compare { left: i64, right: i64 },
    /// List showrooms available for dealer pickup.
    Dealers,
    /// Book a test drive.
    Book(BookArgs),
}

#[derive(Args, Debug)]
struct BookArgs {
    vehicle_id: i64,
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    id_number: String,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    date: String,
    /// One of the bookable slots, e.g. `09:00`.
    #[arg(long)]
    time: String,
    /// Showroom id (see `dealers`).
    #[arg(long, conflicts_with = "address")]
    dealer: Option<String>,
    /// Start the test drive at this address instead of a showroom.
    #[arg(long)]
    address: Option<String>,
    #[arg(long, default_value = "")]
    notes: String,
    /// Accept the test-drive terms.
    #[arg(long)]
    agree: bool,
}

impl BookArgs {
    fn into_form(self) -> BookingForm {
        let pickup_mode = if self.address.is_some() { PickupMode::Home } else { PickupMode::Dealer };
        BookingForm {
            full_name: self.name,
            phone: self.phone,
            email: self.email,
            id_number: self.id_number,
            preferred_date: self.date,
            preferred_time: self.time,
            pickup_mode,
            dealer_id: self.dealer.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            notes: self.notes,
            agreed: self.agree,
        }
    }
}

fn parse_filter_key(raw: &str) -> Result<FilterKey, String> {
    FilterKey::parse(raw).ok_or_else(|| format!("unknown model `{raw}`; expected all, vf6, vf7, vf8 or vf9"))
}

type Resolver = SourceResolver<ReqwestSource>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let source = ReqwestSource::new(&cli.base_url, cli.token, Duration::from_secs(cli.timeout_secs))?;
    tracing::debug!(base = source.base(), "using vehicle service");
    let resolver = SourceResolver::with_bundled(source);

    match cli.command {
        Command::Vehicles { models } => run_vehicles(&resolver, &models, cli.json).await,
        Command::Featured => run_featured(&resolver, cli.json).await,
        Command::Show { id } => run_show(&resolver, id, cli.json).await,
        Command::Compare { left, right } => run_compare(&resolver, left, right, cli.json).await,
        Command::Dealers => {
            print!("{}", render::dealer_list());
            Ok(())
        }
        Command::Book(args) => run_book(&resolver, args, cli.user_id).await,
    }
}

/// Tell the user when the bundled catalog stood in for the service.
fn report_fallback<T>(fetched: &Fetched<T>) {
    tracing::debug!(origin = ?fetched.origin, "catalog resolved");
    if let Some(error) = &fetched.error {
        eprintln!("note: {error}; showing the bundled catalog");
    }
}

async fn run_vehicles(resolver: &Resolver, models: &[FilterKey], json: bool) -> Result<(), CliError> {
    let fetched = resolver.vehicles().await;
    report_fallback(&fetched);

    let mut listing = VehicleListing::new(fetched.value);
    for key in models {
        listing.apply_filter(*key);
    }

    if json {
        return print_json(&serde_json::to_value(listing.displayed())?);
    }
    print!("{}", render::vehicle_table(listing.displayed()));
    Ok(())
}

async fn run_featured(resolver: &Resolver, json: bool) -> Result<(), CliError> {
    let fetched = load_featured(resolver).await;
    report_fallback(&fetched);
    if json {
        return print_json(&serde_json::to_value(&fetched.value)?);
    }
    print!("{}", render::featured_list(&fetched.value));
    Ok(())
}

async fn find_vehicle(resolver: &Resolver, id: i64) -> Result<Vehicle, CliError> {
    let fetched = resolver.vehicle(id).await;
    report_fallback(&fetched);
    fetched.value.ok_or(CliError::VehicleNotFound(id))
}

async fn run_show(resolver: &Resolver, id: i64, json: bool) -> Result<(), CliError> {
    let vehicle = find_vehicle(resolver, id).await?;
    if json {
        return print_json(&serde_json::to_value(&vehicle)?);
    }
    print!("{}", render::vehicle_detail(&vehicle));
    Ok(())
}

async fn run_compare(resolver: &Resolver, left: i64, right: i64, json: bool) -> Result<(), CliError> {
    if left == right {
        return Err(CliError::SameVehicle);
    }
    let pair = ComparisonPair {
        left: find_vehicle(resolver, left).await?,
        right: find_vehicle(resolver, right).await?,
    };
    if json {
        let rows: Vec<Value> = pair
            .rows()
            .into_iter()
            .map(|row| serde_json::json!({ "label": row.label, "left": row.left, "right": row.right }))
            .collect();
        return print_json(&Value::Array(rows));
    }
    print!("{}", render::comparison_table(&pair));
    Ok(())
}

async fn run_book(resolver: &Resolver, args: BookArgs, user_id: i64) -> Result<(), CliError> {
    let vehicle = find_vehicle(resolver, args.vehicle_id).await?;
    let form = args.into_form();
    let now = chrono::Local::now();

    match submit_booking(resolver.primary(), &form, &vehicle, user_id, &now).await {
        Ok(receipt) => {
            print!("{}", render::receipt(&receipt));
            Ok(())
        }
        Err(e) => {
            if let Some(fields) = e.field_errors() {
                for (field, message) in fields {
                    eprintln!("  {}: {message}", field.key());
                }
            }
            Err(CliError::Booking(e.user_message()))
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
