//! DISC-001, Form Interrogatories - General.
//!
//! The template's text areas are not exposed as widgets, so attorney and case
//! details are stamped at fixed page-1 positions. Section checkboxes are real
//! widgets. Identifiers are the UI numbering: bare numbers for sections 1, 2.x
//! and 4.1 ("17"), dotted numbers elsewhere.

use crate::forms::ordering::OrderingRule;
use crate::forms::schema::{AnchorEntry, FillEntry, ReadEntry, SchemaTable, TextStrategy};
use crate::pdf::Anchor;

const fn fill(id: &'static str, pattern: &'static str) -> FillEntry {
    FillEntry { id, pattern }
}

const fn read(pattern: &'static str, id: &'static str) -> ReadEntry {
    ReadEntry { pattern, id }
}

const fn anchor(key: &'static str, x: f32, y: f32, font_size: f32) -> AnchorEntry {
    AnchorEntry {
        key,
        anchor: Anchor::new(x, y, font_size),
    }
}

pub static FILL: &[FillEntry] = &[
    // 1.1 Identity
    fill("1", "Identity"),
    // 2.1 - 2.11 General background (individual)
    fill("2", "GenBkgrd[0]"),
    fill("3", "GenBkgrd2"),
    fill("4", "GenBkgrd3"),
    fill("5", "GenBkgrd4"),
    fill("6", "GenBkgrd5"),
    fill("7", "GenBkgrd6"),
    fill("8", "GenBkgrd7"),
    fill("9", "GenBkgrd8"),
    fill("10", "GenBkgrd9"),
    fill("11", "GenBkgrd10"),
    fill("12", "GenBkgrd11"),
    // 4.1 Insurance
    fill("17", "Insurance[0]"),
    // 6.x Physical, mental, or emotional injuries
    fill("6.1", "PMEInjuries[0]"),
    fill("6.2", "PMEInjuries2"),
    fill("6.3", "PMEInjuries3"),
    fill("6.4", "PMEInjuries4"),
    fill("6.5", "PMEInjuries5"),
    fill("6.6", "PMEInjuries6"),
    fill("6.7", "PMEInjuries7"),
    // 7.x Property damage
    fill("7.1", "PropDam[0]"),
    fill("7.2", "PropDam2"),
    fill("7.3", "PropDam3"),
    // 8.x Loss of income or earning capacity
    fill("8.1", "LostincomeEarn[0]"),
    fill("8.2", "LostincomeEarn2"),
    fill("8.3", "LostincomeEarn3"),
    fill("8.4", "LostincomeEarn4"),
    fill("8.5", "LostincomeEarn5"),
    fill("8.6", "LostincomeEarn6"),
    fill("8.7", "LostincomeEarn7"),
    fill("8.8", "LostincomeEarn8"),
    // 9.x Other damages
    fill("9.1", "OtherDam[0]"),
    fill("9.2", "OtherDam2"),
    // 10.x Medical history
    fill("10.1", "MedHist[0]"),
    fill("10.2", "MedHist2"),
    fill("10.3", "MedHist3"),
    // 11.x Other claims and previous claims
    fill("11.1", "OtherClaims[0]"),
    fill("11.2", "OtherClaims2"),
    // 12.x Investigation - general
    fill("12.1", "InvestGen[0]"),
    fill("12.2", "InvestGen2"),
    fill("12.3", "InvestGen3"),
    fill("12.4", "InvestGen4"),
    fill("12.5", "InvestGen5"),
    fill("12.6", "InvestGen6"),
    fill("12.7", "InvestGen7"),
];

// Sections 13-17 can be read back but are never requested by the UI.
// DefContent* is declared ahead of Content*: each contains the other's text.
pub static READ: &[ReadEntry] = &[
    read("Identity", "1"),
    read("GenBkgrd[0]", "2"),
    read("GenBkgrd2", "3"),
    read("GenBkgrd3", "4"),
    read("GenBkgrd4", "5"),
    read("GenBkgrd5", "6"),
    read("GenBkgrd6", "7"),
    read("GenBkgrd7", "8"),
    read("GenBkgrd8", "9"),
    read("GenBkgrd9", "10"),
    read("GenBkgrd10", "11"),
    read("GenBkgrd11", "12"),
    read("Insurance[0]", "17"),
    read("Insurance", "17"),
    read("PMEInjuries[0]", "6.1"),
    read("PMEInjuries2", "6.2"),
    read("PMEInjuries3", "6.3"),
    read("PMEInjuries4", "6.4"),
    read("PMEInjuries5", "6.5"),
    read("PMEInjuries6", "6.6"),
    read("PMEInjuries7", "6.7"),
    read("PropDam[0]", "7.1"),
    read("PropDam2", "7.2"),
    read("PropDam3", "7.3"),
    read("LostincomeEarn[0]", "8.1"),
    read("LostincomeEarn2", "8.2"),
    read("LostincomeEarn3", "8.3"),
    read("LostincomeEarn4", "8.4"),
    read("LostincomeEarn5", "8.5"),
    read("LostincomeEarn6", "8.6"),
    read("LostincomeEarn7", "8.7"),
    read("LostincomeEarn8", "8.8"),
    read("OtherDam[0]", "9.1"),
    read("OtherDam2", "9.2"),
    read("MedHist[0]", "10.1"),
    read("MedHist2", "10.2"),
    read("MedHist3", "10.3"),
    read("OtherClaims[0]", "11.1"),
    read("OtherClaims2", "11.2"),
    read("InvestGen[0]", "12.1"),
    read("InvestGen2", "12.2"),
    read("InvestGen3", "12.3"),
    read("InvestGen4", "12.4"),
    read("InvestGen5", "12.5"),
    read("InvestGen6", "12.6"),
    read("InvestGen7", "12.7"),
    read("DefContent[0]", "16.1"),
    read("DefContent2", "16.2"),
    read("DefContent3", "16.3"),
    read("DefContent4", "16.4"),
    read("DefContent5", "16.5"),
    read("DefContent6", "16.6"),
    read("DefContent7", "16.7"),
    read("DefContent8", "16.8"),
    read("DefContent9", "16.9"),
    read("DefContent10", "16.10"),
    read("Content[0]", "13.1"),
    read("Content2", "13.2"),
    read("StatApp[0]", "14.1"),
    read("StatApp2", "14.2"),
    read("Denials[0]", "15.1"),
    read("Response[0]", "17.1"),
];

/// Page 1 positions, just right of each printed label (612 x 792 page)
pub static ANCHORS: &[AnchorEntry] = &[
    anchor("attorney_name", 58.0, 70.0, 10.0),
    anchor("bar_number", 488.0, 59.0, 9.0),
    anchor("firm_name", 75.0, 82.0, 9.0),
    anchor("street_address", 95.0, 93.0, 9.0),
    anchor("city", 54.0, 105.0, 9.0),
    anchor("state", 447.0, 105.0, 9.0),
    anchor("zip", 508.0, 105.0, 9.0),
    anchor("phone", 90.0, 116.0, 9.0),
    anchor("fax", 411.0, 116.0, 9.0),
    anchor("email", 90.0, 128.0, 9.0),
    anchor("attorney_for", 122.0, 140.0, 9.0),
    anchor("county", 228.0, 156.0, 10.0),
    // Own line below the label
    anchor("short_title", 38.0, 188.0, 9.0),
    anchor("case_number", 430.0, 210.0, 10.0),
    anchor("asking_party", 118.0, 228.0, 10.0),
    anchor("answering_party", 120.0, 245.0, 10.0),
    anchor("set_number", 117.0, 261.0, 10.0),
];

pub static SCHEMA: SchemaTable = SchemaTable {
    name: "disc001",
    title: "Form Interrogatories - General (DISC-001)",
    url: "https://courts.ca.gov/sites/default/files/courts/default/2024-11/disc001.pdf",
    fill: FILL,
    read: READ,
    text: TextStrategy::Anchors(ANCHORS),
    ordering: OrderingRule::Decimal,
    default_set_number: None,
    section_fallback: false,
};
