//! Seed the database with sample plants.
//!
//! Inserts a small set of recognizable plants so the list and detail pages
//! have something to show during local development.

use tracing::info;

use plant_catalog::db::PlantRepository;
use plant_catalog::models::Plant;

use super::connect_from_env;

/// How many sample plants a plain `catalog-cli seed` inserts.
pub const SAMPLE_PLANT_COUNT: usize = 5;

/// Sample plant fields: name, variety, photo URL, date planted.
const SAMPLES: [(&str, &str, &str, &str); 5] = [
    (
        "Tomato",
        "Roma",
        "https://upload.wikimedia.org/wikipedia/commons/8/89/Tomato_je.jpg",
        "2024-05-01",
    ),
    (
        "Basil",
        "Genovese",
        "https://upload.wikimedia.org/wikipedia/commons/9/96/Basil-Basilico-Ocimum_basilicum-albahaca.jpg",
        "2024-05-10",
    ),
    (
        "Pepper",
        "Jalape\u{f1}o",
        "https://upload.wikimedia.org/wikipedia/commons/f/fa/Immature_jalapeno_capsicum_annuum_var_annuum.jpeg",
        "2024-05-12",
    ),
    ("Zucchini", "Black Beauty", "", "2024-05-20"),
    ("Strawberry", "Alpine", "", "2024-04-15"),
];

/// Insert up to `count` sample plants.
///
/// # Errors
///
/// Returns an error if configuration loading, the connection, or an insert
/// fails.
pub async fn run(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let database = connect_from_env().await?;
    info!("Connected to database");

    let collection = database.collection("plants");
    let repo = PlantRepository::new(&collection);

    let mut inserted = 0usize;
    for (name, variety, photo_url, date_planted) in SAMPLES.iter().take(count) {
        let plant = repo
            .create(Plant::new(
                (*name).to_string(),
                (*variety).to_string(),
                (*photo_url).to_string(),
                (*date_planted).to_string(),
            ))
            .await?;

        let id = plant.id.map(|id| id.to_hex()).unwrap_or_default();
        info!(plant_id = %id, name = %name, "Inserted sample plant");
        inserted += 1;
    }

    info!("Seeding complete: {inserted} plants inserted");
    Ok(())
}
