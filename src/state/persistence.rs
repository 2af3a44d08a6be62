use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::models::DiaryRow;
use crate::state::manager::NutritionStore;

/// Load the store from a JSON file.
///
/// A missing file yields an empty store.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<NutritionStore> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No store at {}, starting empty", path.display());
        return Ok(NutritionStore::new());
    }

    let content = fs::read_to_string(path)?;
    let store: NutritionStore = serde_json::from_str(&content)?;
    debug!(
        "Loaded {} foods and {} entries from {}",
        store.food_count(),
        store.entry_count(),
        path.display()
    );
    Ok(store)
}

/// Save the store to a JSON file.
pub fn save_store<P: AsRef<Path>>(path: P, store: &NutritionStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path.as_ref(), json)?;
    info!("Saved store to {}", path.as_ref().display());
    Ok(())
}

/// Export diary rows to a CSV file.
pub fn write_diary_csv<P: AsRef<Path>>(rows: &[DiaryRow], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id", "date", "name", "barcode", "grams", "calories", "proteins", "fats", "carbs",
    ])?;

    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.date.to_string(),
            row.name.clone(),
            row.barcode.clone().unwrap_or_default(),
            format!("{:.1}", row.grams),
            format!("{:.1}", row.calories),
            format!("{:.1}", row.proteins),
            format!("{:.1}", row.fats),
            format!("{:.1}", row.carbs),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewFood;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store(dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_hand_written_store() {
        let json = r#"{
            "foods": [
                {"id": 4, "name": "Apple", "calories": 52, "proteins": 0.3, "fats": 0.2, "carbs": 14},
                {"id": 9, "name": "Scanned", "barcode": "123", "calories": null}
            ],
            "consumption": [
                {"id": 1, "food_id": 4, "date": "2026-03-01", "grams": 200}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let mut store = load_store(file.path()).unwrap();
        assert_eq!(store.food_count(), 2);
        assert!(store.profile().is_none());
        assert!(store.food_by_barcode("123").unwrap().calories.is_none());

        // ids continue past the highest stored id
        let id = store
            .upsert_food(NewFood {
                name: "Pear".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(id, 10);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut store = NutritionStore::new();
        let id = store
            .upsert_food(NewFood {
                name: "Oats".to_string(),
                barcode: Some("777".to_string()),
                calories: Some(389.0),
                proteins: Some(16.9),
                fats: Some(6.9),
                carbs: Some(66.3),
            })
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        store.add_consumption(id, 80.0, day).unwrap();

        let file = NamedTempFile::new().unwrap();
        save_store(file.path(), &store).unwrap();
        let reloaded = load_store(file.path()).unwrap();

        assert_eq!(reloaded.catalog(), store.catalog());
        assert_eq!(reloaded.totals_for(day), store.totals_for(day));
    }

    #[test]
    fn test_write_diary_csv() {
        let mut store = NutritionStore::new();
        let id = store
            .upsert_food(NewFood {
                name: "Rice".to_string(),
                calories: Some(130.0),
                proteins: Some(2.6),
                fats: Some(0.4),
                carbs: Some(28.0),
                ..Default::default()
            })
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        store.add_consumption(id, 150.0, day).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_diary_csv(&store.food_diary(day, 1), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,name,barcode,grams,calories,proteins,fats,carbs")
        );
        assert_eq!(lines.next(), Some("1,2026-03-01,Rice,,150.0,195.0,3.9,0.6,42.0"));
    }
}
