//! DISC-002, Form Interrogatories - Employment Law.
//!
//! Both checkboxes and text inputs are real widgets. Identifiers are the
//! printed section numbers (200.1 through 217.1).

use crate::forms::ordering::OrderingRule;
use crate::forms::schema::{FillEntry, ReadEntry, SchemaTable, TextEntry, TextStrategy};

const fn fill(id: &'static str, pattern: &'static str) -> FillEntry {
    FillEntry { id, pattern }
}

const fn read(pattern: &'static str, id: &'static str) -> ReadEntry {
    ReadEntry { pattern, id }
}

const fn text(key: &'static str, pattern: &'static str) -> TextEntry {
    TextEntry { key, pattern }
}

pub static FILL: &[FillEntry] = &[
    // 200.0 Contract formation
    fill("200.1", "EmpRelAtWill"),
    fill("200.2", "EmpRelNotAtWill"),
    fill("200.3", "EmpRelAgree"),
    fill("200.4", "EmpRelDoc"),
    fill("200.5", "EmpRelCollBarg"),
    fill("200.6", "EmpRelOthrBiz"),
    // 201.0 Adverse employment action
    fill("201.1", "AdvEmpActTerm"),
    fill("201.2", "AdvEmpActPostTerm"),
    fill("201.3", "AdvEmpActAskPrty"),
    fill("201.4", "AdvEmpActPerf"),
    fill("201.5", "AdvEmpActHired"),
    fill("201.6", "AdvEmpActReplace"),
    fill("201.7", "AdvEmpActContact"),
    // "Discrim[0]" is contained in "DisDiscrim[0]", so 204.1 goes first
    fill("204.1", "DisDiscrim[0]"),
    // 202.0 Discrimination
    fill("202.1", "Discrim[0]"),
    fill("202.2", "DiscrimFacts"),
    // 203.0 Harassment
    fill("203.1", "Harassed"),
    // 204.0 Disability discrimination
    fill("204.2", "DisDiscrimInjury"),
    fill("204.3", "DisDiscrimComm[0]"),
    fill("204.4", "DisDiscrimContact"),
    fill("204.5", "DisDiscrimAccomdn"),
    // Page 5 reuses the DisDiscrimComm name
    fill("204.6", "Page5[0].List12"),
    fill("204.7", "DisDiscrimConsider"),
    // 205.0 Discharge in violation of public policy
    fill("205.1", "DischgViol"),
    // 206.0 Defamation
    fill("206.1", "Defame[0]"),
    fill("206.2", "DefameRespon"),
    fill("206.3", "DefamePub"),
    // 207.0 Internal complaints
    fill("207.1", "IntComplaints[0]"),
    fill("207.2", "IntComplaintsConduct"),
    // 208.0 Governmental complaints
    fill("208.1", "GovComplaints[0]"),
    fill("208.2", "GovComplaintsEmprRes"),
    // 209.0 Other employment claims
    fill("209.1", "OthClaimsEmplee"),
    fill("209.2", "OthClaimsEmpler"),
    // 210.0 Loss of income to employee
    fill("210.1", "LossIncomeEmpe[0]"),
    fill("210.2", "LossIncomeEmpePast"),
    fill("210.3", "LossIncomeEmpeFuture"),
    fill("210.4", "LossIncomeEmpeMinimize"),
    fill("210.5", "LossIncomeEmpePurch"),
    fill("210.6", "LossIncomeOthEmp"),
    // 211.0 Loss of income to employer
    fill("211.1", "LossIncomeEmpr[0]"),
    fill("211.2", "LossIncomeEmprMinimize"),
    fill("211.3", "LossIncomeEmprUnreason"),
    // 212.0 Physical, mental, or emotional injuries
    fill("212.1", "InjuriesEmpe[0]"),
    fill("212.2", "InjuriesEmpeCurrent"),
    fill("212.3", "InjuriesEmpeOngoing"),
    fill("212.4", "InjuriesEmpeExam"),
    fill("212.5", "InjuriesEmpeMeds"),
    fill("212.6", "InjuriesEmpeOthExp"),
    fill("212.7", "InjuriesEmpefuture"),
    // 213.0 Other damages
    fill("213.1", "OthDam[0]"),
    fill("213.2", "OthDamDocs"),
    // 214.0 Insurance
    fill("214.1", "Insurance[0]"),
    fill("214.2", "InsuranceSelf"),
    // 215.0 Investigation
    fill("215.1", "InvestigationIntw"),
    fill("215.2", "InvestigationWritn"),
    // 216.0 Denials and special or affirmative defenses
    fill("216.1", "AffirmDefenses"),
    // 217.0 Response to request for admissions
    fill("217.1", "RespReq"),
];

pub static READ: &[ReadEntry] = &[
    read("EmpRelAtWill", "200.1"),
    read("EmpRelNotAtWill", "200.2"),
    read("EmpRelAgree", "200.3"),
    read("EmpRelDoc", "200.4"),
    read("EmpRelCollBarg", "200.5"),
    read("EmpRelOthrBiz", "200.6"),
    read("AdvEmpActTerm", "201.1"),
    read("AdvEmpActPostTerm", "201.2"),
    read("AdvEmpActAskPrty", "201.3"),
    read("AdvEmpActPerf", "201.4"),
    read("AdvEmpActHired", "201.5"),
    read("AdvEmpActReplace", "201.6"),
    read("AdvEmpActContact", "201.7"),
    read("DisDiscrim[0]", "204.1"),
    read("Discrim[0]", "202.1"),
    read("DiscrimFacts", "202.2"),
    read("Harassed", "203.1"),
    read("DisDiscrimInjury", "204.2"),
    // DisDiscrimComm appears on two pages with different meanings
    read("Page4[0].Page4[0].List9[0].#area[0].DisDiscrimComm", "204.3"),
    read("DisDiscrimContact", "204.4"),
    read("DisDiscrimAccomdn", "204.5"),
    read("Page5[0].List12[0].#area[0].DisDiscrimComm", "204.6"),
    read("DisDiscrimConsider", "204.7"),
    read("DischgViol", "205.1"),
    read("Defame[0]", "206.1"),
    read("DefameRespon", "206.2"),
    read("DefamePub", "206.3"),
    read("IntComplaints[0]", "207.1"),
    read("IntComplaintsConduct", "207.2"),
    read("GovComplaints[0]", "208.1"),
    read("GovComplaintsEmprRes", "208.2"),
    read("OthClaimsEmplee", "209.1"),
    read("OthClaimsEmpler", "209.2"),
    read("LossIncomeEmpe[0]", "210.1"),
    read("LossIncomeEmpePast", "210.2"),
    read("LossIncomeEmpeFuture", "210.3"),
    read("LossIncomeEmpeMinimize", "210.4"),
    read("LossIncomeEmpePurch", "210.5"),
    read("LossIncomeOthEmp", "210.6"),
    read("LossIncomeEmpr[0]", "211.1"),
    read("LossIncomeEmprMinimize", "211.2"),
    read("LossIncomeEmprUnreason", "211.3"),
    read("InjuriesEmpe[0]", "212.1"),
    read("InjuriesEmpeCurrent", "212.2"),
    read("InjuriesEmpeOngoing", "212.3"),
    read("InjuriesEmpeExam", "212.4"),
    read("InjuriesEmpeMeds", "212.5"),
    read("InjuriesEmpeOthExp", "212.6"),
    read("InjuriesEmpefuture", "212.7"),
    read("OthDam[0]", "213.1"),
    read("OthDamDocs", "213.2"),
    read("Insurance[0]", "214.1"),
    read("InsuranceSelf", "214.2"),
    read("InvestigationIntw", "215.1"),
    read("InvestigationWritn", "215.2"),
    read("AffirmDefenses", "216.1"),
    read("RespReq", "217.1"),
];

// "TextField3" alone is the attorney-for line; the Cell3 variant must win first.
pub static TEXT: &[TextEntry] = &[
    text("attorney_info", "AttyCity_ft"),
    text("phone", "Phone_ft"),
    text("fax", "Fax_ft"),
    text("email", "Email_ft"),
    text("set_number", "Cell3[0].TextField3"),
    text("attorney_for", "TextField3"),
    text("county", "Cell2[0].TextField1"),
    text("short_title", "Subcell2[0].TextField2"),
    text("asking_party", "Cell3[0].TextField1"),
    text("answering_party", "Cell3[0].TextField2"),
    text("case_number", "Cell4[0].TextField1"),
    text("employee_name", "LI4[0].FillText1"),
    text("employer_name", "LI5[0].FillText1"),
];

pub static SCHEMA: SchemaTable = SchemaTable {
    name: "disc002",
    title: "Form Interrogatories - Employment Law (DISC-002)",
    url: "https://courts.ca.gov/sites/default/files/courts/default/2024-11/disc002.pdf",
    fill: FILL,
    read: READ,
    text: TextStrategy::Widgets(TEXT),
    ordering: OrderingRule::SectionPair,
    default_set_number: Some("1"),
    section_fallback: true,
};
