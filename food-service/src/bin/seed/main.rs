//! Resets the catalog to a fixed demo data set.
//!
//! Deletes every restaurant and the admin settings, inserts three demo
//! restaurants and promotes the first two.

use chrono::Duration;
use chrono::Utc;
use food_service::config::Config;
use food_service::domain::account::models::UserId;
use food_service::domain::admin::models::AdminSettings;
use food_service::domain::admin::ports::AdminRepository;
use food_service::domain::catalog::models::Restaurant;
use food_service::domain::catalog::models::RestaurantId;
use food_service::domain::catalog::ports::CatalogRepository;
use food_service::outbound::repositories::PostgresAdminRepository;
use food_service::outbound::repositories::PostgresCatalogRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const PROMOTED_COUNT: usize = 2;

const DEMO_RESTAURANTS: [(&str, &str, &str); 3] = [
    (
        "McDonald's",
        "123 Main Street, New York",
        "https://pngimg.com/uploads/mcdonalds/mcdonalds_PNG9.png",
    ),
    (
        "Paradise Biryani",
        "Hyderabad, India",
        "https://imgmedia.lbb.in/media/2020/05/5ec76dbedb54da5c766f2bf3_1590128062246.jpg",
    ),
    (
        "Minerva Coffee Shop",
        "Banjara Hills, Hyderabad",
        "https://pix10.agoda.net/hotelImages/446/446359/446359_15080415040033619151.jpg?s=1024x768",
    ),
];

fn demo_restaurants() -> Vec<Restaurant> {
    let now = Utc::now();

    DEMO_RESTAURANTS
        .iter()
        .enumerate()
        .map(|(position, (title, address, main_img))| Restaurant {
            id: RestaurantId::new(),
            // Demo restaurants are not backed by an owner account.
            owner_id: UserId::new(),
            title: title.to_string(),
            address: Some(address.to_string()),
            main_img: Some(main_img.to_string()),
            menu: Vec::new(),
            // Distinct timestamps keep listing order equal to insertion order.
            created_at: now + Duration::milliseconds(position as i64),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,food_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    let catalog_repository = PostgresCatalogRepository::new(pg_pool.clone());
    let admin_repository = PostgresAdminRepository::new(pg_pool);

    let deleted = catalog_repository.delete_all_restaurants().await?;
    admin_repository.clear().await?;
    tracing::info!(deleted_restaurants = deleted, "Cleared catalog and admin settings");

    let restaurants = demo_restaurants();
    catalog_repository.insert_restaurants(&restaurants).await?;
    tracing::info!(count = restaurants.len(), "Inserted demo restaurants");

    let settings = AdminSettings {
        categories: Vec::new(),
        promoted_restaurants: restaurants
            .iter()
            .take(PROMOTED_COUNT)
            .map(|restaurant| restaurant.id)
            .collect(),
    };
    admin_repository.save(&settings).await?;
    tracing::info!(
        promoted = settings.promoted_restaurants.len(),
        "Saved admin settings"
    );

    Ok(())
}
