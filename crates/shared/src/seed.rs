//! Static dataset the record store starts from on every launch.

use std::collections::HashSet;

use crate::{domain::ShoeRecord, error::SeedError};

const SEED_JSON: &str = include_str!("../seed/shoes.json");

pub fn parse_seed(raw: &str) -> Result<Vec<ShoeRecord>, SeedError> {
    let records: Vec<ShoeRecord> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(SeedError::DuplicateId(record.id));
        }
    }
    Ok(records)
}

pub fn initial_shoes() -> Result<Vec<ShoeRecord>, SeedError> {
    parse_seed(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShoeId;

    #[test]
    fn bundled_seed_has_nike_and_adidas() {
        let shoes = initial_shoes().expect("seed");
        assert_eq!(shoes.len(), 2);
        assert_eq!(shoes[0].id, ShoeId(1));
        assert_eq!(shoes[0].shoe_brand, "Nike");
        assert_eq!(shoes[1].id, ShoeId(2));
        assert_eq!(shoes[1].shoe_name, "Ultra Boost");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[
            {"id":1,"shoeBrand":"A","shoeName":"a","shoeSize":"","feetShape":"","sourceLink":""},
            {"id":1,"shoeBrand":"B","shoeName":"b","shoeSize":"","feetShape":"","sourceLink":""}
        ]"#;
        assert!(matches!(parse_seed(raw), Err(SeedError::DuplicateId(ShoeId(1)))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_seed("[{"), Err(SeedError::Malformed(_))));
    }
}
