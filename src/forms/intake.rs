//! Intake data supplied by the UI for a fill

use super::schema::SchemaTable;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON value that may arrive as a string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Case and attorney details plus the requested interrogatories.
///
/// Every field is optional; missing or empty fields are left unfilled.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IntakeData {
    pub attorney_name: Option<String>,
    pub bar_number: Option<Scalar>,
    pub firm_name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<Scalar>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    /// Party the attorney represents, e.g. "Plaintiff"
    pub attorney_for: Option<String>,
    pub county: Option<String>,
    pub plaintiff_name: Option<String>,
    pub defendant_name: Option<String>,
    pub case_number: Option<String>,
    pub asking_party_name: Option<String>,
    pub answering_party_name: Option<String>,
    pub set_number: Option<Scalar>,
    /// DISC-002 definitions section
    pub employee_name: Option<String>,
    pub employer_name: Option<String>,
    /// Interrogatory identifiers to check, e.g. `["1", "6.3"]` or `[200.1]`.
    ///
    /// Numbers are written in their shortest form: `2.0` selects "2" and
    /// `200.10` selects "200.1". Identifiers whose trailing zero matters
    /// ("16.10", "200.10") must be sent as strings.
    pub selected_sections: Vec<Scalar>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn text(value: &Option<String>) -> Option<String> {
    non_empty(value.clone())
}

fn scalar(value: &Option<Scalar>) -> Option<String> {
    non_empty(value.as_ref().map(Scalar::to_string))
}

impl IntakeData {
    /// Requested identifiers coerced to strings, in input order
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected_sections.iter().map(Scalar::to_string).collect()
    }

    /// "Plaintiff vs. Defendant", only when both names are present
    pub fn short_title(&self) -> Option<String> {
        let plaintiff = text(&self.plaintiff_name)?;
        let defendant = text(&self.defendant_name)?;
        Some(format!("{} vs. {}", plaintiff, defendant))
    }

    /// Multi-line attorney block for templates with a single address widget
    pub fn attorney_block(&self) -> Option<String> {
        let mut lines = Vec::new();
        if let Some(name) = text(&self.attorney_name) {
            lines.push(name);
        }
        if let Some(bar) = scalar(&self.bar_number) {
            lines.push(format!("State Bar No. {}", bar));
        }
        if let Some(firm) = text(&self.firm_name) {
            lines.push(firm);
        }
        if let Some(street) = text(&self.street_address) {
            lines.push(street);
        }

        let mut city_line = text(&self.city).unwrap_or_default();
        if let Some(state) = text(&self.state) {
            city_line.push_str(", ");
            city_line.push_str(&state);
        }
        if let Some(zip) = scalar(&self.zip) {
            city_line.push(' ');
            city_line.push_str(&zip);
        }
        if !city_line.is_empty() {
            lines.push(city_line);
        }

        non_empty(Some(lines.join("\n")))
    }

    /// Value for a template text key, after derivations. `None` when there is
    /// nothing to write.
    pub fn text_value(&self, schema: &SchemaTable, key: &str) -> Option<String> {
        match key {
            "attorney_info" => self.attorney_block(),
            "short_title" => self.short_title(),
            "county" => text(&self.county).map(|c| c.to_uppercase()),
            "set_number" => scalar(&self.set_number)
                .or_else(|| schema.default_set_number.map(str::to_string)),
            "asking_party" => text(&self.asking_party_name),
            "answering_party" => text(&self.answering_party_name),
            "attorney_name" => text(&self.attorney_name),
            "bar_number" => scalar(&self.bar_number),
            "firm_name" => text(&self.firm_name),
            "street_address" => text(&self.street_address),
            "city" => text(&self.city),
            "state" => text(&self.state),
            "zip" => scalar(&self.zip),
            "phone" => text(&self.phone),
            "fax" => text(&self.fax),
            "email" => text(&self.email),
            "attorney_for" => text(&self.attorney_for),
            "case_number" => text(&self.case_number),
            "employee_name" => text(&self.employee_name),
            "employer_name" => text(&self.employer_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::templates::{disc001, disc002};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sections_coerced_to_strings() {
        let intake: IntakeData =
            serde_json::from_str(r#"{"selected_sections": ["6.3", 17, 200.1], "extra": true}"#)
                .unwrap();
        assert_eq!(intake.selected_ids(), vec!["6.3", "17", "200.1"]);
    }

    #[test]
    fn test_float_sections_use_shortest_form() {
        let intake: IntakeData =
            serde_json::from_str(r#"{"selected_sections": [2.0, 200.10, 6.3, "16.10"]}"#)
                .unwrap();
        assert_eq!(intake.selected_ids(), vec!["2", "200.1", "6.3", "16.10"]);
        assert!(disc001::SCHEMA.is_fillable(&intake.selected_ids()[0]));
    }

    #[test]
    fn test_numeric_set_number_and_zip() {
        let intake: IntakeData =
            serde_json::from_str(r#"{"set_number": 2, "zip": 90012}"#).unwrap();
        assert_eq!(
            intake.text_value(&disc001::SCHEMA, "set_number").as_deref(),
            Some("2")
        );
        assert_eq!(intake.text_value(&disc001::SCHEMA, "zip").as_deref(), Some("90012"));
    }

    #[test]
    fn test_set_number_default_per_template() {
        let intake = IntakeData::default();
        assert_eq!(intake.text_value(&disc001::SCHEMA, "set_number"), None);
        assert_eq!(
            intake.text_value(&disc002::SCHEMA, "set_number").as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_short_title_needs_both_parties() {
        let mut intake = IntakeData {
            plaintiff_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(intake.short_title(), None);

        intake.defendant_name = Some("ABC Corporation".to_string());
        assert_eq!(intake.short_title().as_deref(), Some("Jane Doe vs. ABC Corporation"));
    }

    #[test]
    fn test_county_upper_cased() {
        let intake = IntakeData {
            county: Some("Los Angeles".to_string()),
            ..Default::default()
        };
        assert_eq!(
            intake.text_value(&disc002::SCHEMA, "county").as_deref(),
            Some("LOS ANGELES")
        );
    }

    #[test]
    fn test_attorney_block() {
        let intake: IntakeData = serde_json::from_str(
            r#"{
                "attorney_name": "John Smith",
                "bar_number": "123456",
                "firm_name": "Smith & Associates",
                "street_address": "123 Main Street, Suite 500",
                "city": "Los Angeles",
                "state": "CA",
                "zip": "90012"
            }"#,
        )
        .unwrap();

        assert_eq!(
            intake.attorney_block().unwrap(),
            "John Smith\nState Bar No. 123456\nSmith & Associates\n\
             123 Main Street, Suite 500\nLos Angeles, CA 90012"
        );
    }

    #[test]
    fn test_empty_values_are_unfilled() {
        let intake = IntakeData {
            phone: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(intake.text_value(&disc002::SCHEMA, "phone"), None);
        assert_eq!(intake.attorney_block(), None);
        assert_eq!(intake.text_value(&disc002::SCHEMA, "no_such_key"), None);
    }
}
