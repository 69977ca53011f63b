//! Template registry

pub mod disc001;
pub mod disc002;

use super::schema::SchemaTable;
use crate::error::{Error, Result};

/// Every template the engine knows, in registry order
pub static TEMPLATES: &[&SchemaTable] = &[&disc001::SCHEMA, &disc002::SCHEMA];

/// Find a template by registry name. Accepts "disc001", "DISC-001" and "disc-001".
pub fn lookup(name: &str) -> Result<&'static SchemaTable> {
    let normalized: String = name
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.name == normalized)
        .ok_or_else(|| Error::UnknownTemplate {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_form_numbers() {
        assert_eq!(lookup("disc001").unwrap().name, "disc001");
        assert_eq!(lookup("DISC-002").unwrap().name, "disc002");
        assert_eq!(lookup(" disc_002 ").unwrap().name, "disc002");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("disc003").unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { ref name } if name == "disc003"));
    }

    #[test]
    fn test_fill_ids_unique() {
        for template in TEMPLATES {
            let mut ids: Vec<&str> = template.fill.iter().map(|e| e.id).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "{} declares an id twice", template.name);
        }
    }

    #[test]
    fn test_every_fill_id_reads_back() {
        for template in TEMPLATES {
            for entry in template.fill {
                assert!(
                    template.read.iter().any(|r| r.id == entry.id),
                    "{} has no read entry for {}",
                    template.name,
                    entry.id
                );
            }
        }
    }

    #[test]
    fn test_default_set_number() {
        assert_eq!(disc001::SCHEMA.default_set_number, None);
        assert_eq!(disc002::SCHEMA.default_set_number, Some("1"));
    }
}
