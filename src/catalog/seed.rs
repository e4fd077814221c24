//! Catalog creation and sample data
//!
//! Used by `plants init` and by test fixtures. The projector itself never
//! writes.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};

use super::errors::{CatalogError, CatalogResult};
use super::query::quote_identifier;

/// A plant to insert into a new catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlant {
    pub name: String,
    pub cultivar_name: Option<String>,
    pub common_name: String,
    pub family: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl NewPlant {
    /// A plant with no cultivar, description or image
    pub fn new(
        name: impl Into<String>,
        common_name: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cultivar_name: None,
            common_name: common_name.into(),
            family: family.into(),
            description: None,
            image: None,
        }
    }

    pub fn cultivar(mut self, cultivar: impl Into<String>) -> Self {
        self.cultivar_name = Some(cultivar.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Create the catalog table in the database at `path` and insert `plants`.
///
/// The database file is created if needed. Fails if the table already
/// exists. Returns the number of rows inserted.
pub fn create_catalog(path: &Path, table: &str, plants: &[NewPlant]) -> CatalogResult<usize> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let mut conn = Connection::open_with_flags(path, flags)
        .map_err(|e| CatalogError::unavailable(path.display().to_string(), e))?;

    create_table(&conn, table)?;
    insert_plants(&mut conn, table, plants)
}

/// Create an empty catalog table
pub fn create_table(conn: &Connection, table: &str) -> CatalogResult<()> {
    let sql = format!(
        "CREATE TABLE {} (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            cultivar_name TEXT,
            common_name   TEXT NOT NULL,
            family        TEXT NOT NULL,
            description   TEXT,
            image         TEXT
        )",
        quote_identifier(table)
    );
    conn.execute(&sql, []).map_err(CatalogError::query)?;
    Ok(())
}

/// Insert plants in one transaction
pub fn insert_plants(conn: &mut Connection, table: &str, plants: &[NewPlant]) -> CatalogResult<usize> {
    let sql = format!(
        "INSERT INTO {} (name, cultivar_name, common_name, family, description, image)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        quote_identifier(table)
    );

    let tx = conn.transaction().map_err(CatalogError::query)?;
    {
        let mut stmt = tx.prepare(&sql).map_err(CatalogError::query)?;
        for plant in plants {
            stmt.execute(params![
                plant.name,
                plant.cultivar_name,
                plant.common_name,
                plant.family,
                plant.description,
                plant.image,
            ])
            .map_err(CatalogError::query)?;
        }
    }
    tx.commit().map_err(CatalogError::query)?;

    Ok(plants.len())
}

/// The sample catalog written by `plants init`
pub fn sample_plants() -> Vec<NewPlant> {
    vec![
        NewPlant::new("Acer palmatum", "Japanese maple", "Sapindaceae")
            .cultivar("Bloodgood")
            .description("Small deciduous tree with deep red, deeply lobed leaves.")
            .image("acer_palmatum.jpg"),
        NewPlant::new("Betula pendula", "Silver birch", "Betulaceae")
            .description("Slender tree with white bark and drooping branches.")
            .image("betula_pendula.jpg"),
        NewPlant::new("Betula utilis", "Himalayan birch", "Betulaceae")
            .cultivar("Jacquemontii")
            .description("Birch with brilliant white peeling bark.")
            .image("betula_utilis.jpg"),
        NewPlant::new("Cornus alba", "Red-barked dogwood", "Cornaceae")
            .cultivar("Sibirica")
            .description("Shrub grown for its bright red winter stems.")
            .image("cornus_alba.jpg"),
        NewPlant::new("Digitalis purpurea", "Foxglove", "Plantaginaceae")
            .description("Biennial with tall spikes of tubular purple flowers.")
            .image("digitalis_purpurea.jpg"),
        NewPlant::new("Fagus sylvatica", "Common beech", "Fagaceae")
            .description("Large deciduous tree, often clipped as a hedge.")
            .image("fagus_sylvatica.jpg"),
        NewPlant::new("Helleborus niger", "Christmas rose", "Ranunculaceae")
            .description("Evergreen perennial flowering in midwinter.")
            .image("helleborus_niger.jpg"),
        NewPlant::new("Lavandula angustifolia", "English lavender", "Lamiaceae")
            .cultivar("Hidcote")
            .description("Aromatic shrub with dark violet flower spikes.")
            .image("lavandula_angustifolia.jpg"),
        NewPlant::new("Quercus robur", "English oak", "Fagaceae")
            .description("Long-lived tree with lobed leaves and acorns on long stalks.")
            .image("quercus_robur.jpg"),
        NewPlant::new("Rosa rugosa", "Japanese rose", "Rosaceae")
            .description("Tough shrub rose with large red hips.")
            .image("rosa_rugosa.jpg"),
        NewPlant::new("Salvia officinalis", "Sage", "Lamiaceae")
            .cultivar("Purpurascens")
            .description("Culinary herb with purple-tinged leaves.")
            .image("salvia_officinalis.jpg"),
        NewPlant::new("Zelkova serrata", "Japanese zelkova", "Ulmaceae")
            .description("Vase-shaped tree with serrated leaves and good autumn colour.")
            .image("zelkova_serrata.jpg"),
    ]
}
