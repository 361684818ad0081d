//! Listing Service - data-access CLI for the rental application.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{CreateUser, NewProperty, PropertyFilters, UserResponse};
use listing_service_lib::config::ListingServiceConfig;
use listing_service_lib::infra::Database;
use listing_service_lib::repository::{PropertyStore, ReservationStore, UserStore};
use listing_service_lib::service::{
    PropertyManager, PropertyService, UserManager, UserService,
};
use listing_service_lib::store::JsonStore;

#[derive(Parser)]
#[command(name = "listing-service")]
#[command(about = "Data-access layer for property listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search property listings
    Search {
        /// Case-insensitive substring match on the city
        #[arg(long)]
        city: Option<String>,
        /// Lower bound on nightly cost, in whole currency units
        #[arg(long)]
        min_price: Option<i64>,
        /// Upper bound on nightly cost, in whole currency units
        #[arg(long)]
        max_price: Option<i64>,
        /// Lower bound on the average review rating
        #[arg(long)]
        min_rating: Option<i32>,
        /// Maximum number of listings to return
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Look up or create users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// List a guest's past reservations
    Reservations {
        guest_id: i32,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Record a property submission in the JSON fallback store
    AddProperty {
        #[arg(long)]
        owner_id: i32,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        thumbnail_photo_url: String,
        #[arg(long, default_value = "")]
        cover_photo_url: String,
        /// Nightly cost in minor currency units (cents)
        #[arg(long)]
        cost_per_night: i32,
        #[arg(long, default_value_t = 0)]
        parking_spaces: i32,
        #[arg(long, default_value_t = 1)]
        number_of_bathrooms: i32,
        #[arg(long, default_value_t = 1)]
        number_of_bedrooms: i32,
        #[arg(long)]
        country: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        province: String,
        #[arg(long)]
        post_code: String,
    },
    /// Check database connectivity
    Ping,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Find a user by email address
    Email { email: String },
    /// Find a user by id
    Id { id: i32 },
    /// Create a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ListingServiceConfig::from_env();

    match cli.command {
        Commands::Search {
            city,
            min_price,
            max_price,
            min_rating,
            limit,
        } => {
            let service = property_service(&config).await?;
            let filters = PropertyFilters {
                city,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                minimum_rating: min_rating,
            };
            let listings = service.search_properties(filters, limit).await?;
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
        Commands::User { action } => {
            let db = Database::connect(&config.database_url).await?;
            let service = UserManager::new(Arc::new(UserStore::new(db.get_connection())));
            let user = match action {
                UserCommands::Email { email } => service.get_user_by_email(&email).await?,
                UserCommands::Id { id } => service.get_user(id).await?,
                UserCommands::Create {
                    name,
                    email,
                    password,
                } => {
                    service
                        .create_user(CreateUser {
                            name,
                            email,
                            password,
                        })
                        .await?
                }
            };
            println!("{}", serde_json::to_string_pretty(&UserResponse::from(user))?);
        }
        Commands::Reservations { guest_id, limit } => {
            let service = property_service(&config).await?;
            let listings = service.reservations_for_guest(guest_id, limit).await?;
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
        Commands::AddProperty {
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
            country,
            street,
            city,
            province,
            post_code,
        } => {
            // Submissions go to the fallback store; no database needed.
            let store = JsonStore::load(&config.data_dir)?;
            let property = store
                .add_property(NewProperty {
                    owner_id,
                    title,
                    description,
                    thumbnail_photo_url,
                    cover_photo_url,
                    cost_per_night,
                    parking_spaces,
                    number_of_bathrooms,
                    number_of_bedrooms,
                    country,
                    street,
                    city,
                    province,
                    post_code,
                })
                .await;
            println!("{}", serde_json::to_string_pretty(&property)?);
        }
        Commands::Ping => {
            let db = Database::connect(&config.database_url).await?;
            db.ping().await?;
            println!("ok");
        }
    }

    Ok(())
}

/// Wire the property service over a fresh connection and the JSON store.
async fn property_service(
    config: &ListingServiceConfig,
) -> Result<PropertyManager, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database_url).await?;
    let store = Arc::new(JsonStore::load(&config.data_dir)?);

    Ok(PropertyManager::new(
        Arc::new(PropertyStore::new(db.get_connection())),
        Arc::new(ReservationStore::new(db.get_connection())),
        store,
    ))
}
