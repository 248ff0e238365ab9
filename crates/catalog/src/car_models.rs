//! Direct car-model lookup — a plain file scan, not vector search.
//!
//! The car-model catalog is re-read from disk on every call so edits to the
//! file show up without a restart. Matching is case-insensitive on make and
//! model and exact on year. No match is `None`, never an error.

use carcare_core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A static car-model record from `cars_models.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarModel {
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub common_issues: Vec<String>,
    pub estimated_time: String,
}

/// Retrieve car model information from the car-model catalog file.
///
/// `mileage` is accepted for interface compatibility but is not part of the
/// matching predicate; records are keyed by make, model, and year only.
pub fn get_car_model_info(
    path: &Path,
    _mileage: u32,
    car_make: &str,
    car_model: &str,
    car_year: i32,
) -> Result<Option<CarModel>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let models: Vec<CarModel> =
        serde_json::from_str(&content).map_err(|e| CatalogError::FileParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(models.into_iter().find(|car| {
        car.car_make.eq_ignore_ascii_case(car_make)
            && car.car_model.eq_ignore_ascii_case(car_model)
            && car.car_year == car_year
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars_models.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "car_make": "Toyota",
                    "car_model": "Corolla",
                    "car_year": 2015,
                    "common_issues": ["Brake wear", "Oil leak"],
                    "estimated_time": "2 hours"
                },
                {
                    "car_make": "Honda",
                    "car_model": "Civic",
                    "car_year": 2018,
                    "common_issues": ["AC compressor failure"],
                    "estimated_time": "3 hours"
                }
            ]"#,
        )
        .unwrap();
        (dir, path)
    }

    #[test]
    fn exact_match_returns_record() {
        let (_dir, path) = fixture();
        let car = get_car_model_info(&path, 0, "Toyota", "Corolla", 2015)
            .unwrap()
            .unwrap();
        assert_eq!(car.common_issues, vec!["Brake wear", "Oil leak"]);
        assert_eq!(car.estimated_time, "2 hours");
    }

    #[test]
    fn match_is_case_insensitive() {
        let (_dir, path) = fixture();
        let car = get_car_model_info(&path, 0, "toyota", "COROLLA", 2015)
            .unwrap()
            .unwrap();
        assert_eq!(car.car_make, "Toyota");
    }

    #[test]
    fn year_must_match_exactly() {
        let (_dir, path) = fixture();
        let car = get_car_model_info(&path, 0, "Toyota", "Corolla", 2016).unwrap();
        assert!(car.is_none());
    }

    #[test]
    fn absent_model_returns_none() {
        let (_dir, path) = fixture();
        let car = get_car_model_info(&path, 0, "Ford", "Focus", 2015).unwrap();
        assert!(car.is_none());
    }

    #[test]
    fn mileage_does_not_affect_matching() {
        let (_dir, path) = fixture();
        let at_zero = get_car_model_info(&path, 0, "Honda", "Civic", 2018).unwrap();
        let at_sixty_k = get_car_model_info(&path, 60_000, "Honda", "Civic", 2018).unwrap();
        assert_eq!(at_zero, at_sixty_k);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err =
            get_car_model_info(Path::new("/nonexistent/cars.json"), 0, "Toyota", "Corolla", 2015)
                .unwrap_err();
        assert!(matches!(err, CatalogError::FileRead { .. }));
    }
}
