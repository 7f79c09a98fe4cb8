// SPDX-License-Identifier: MIT
//
// Core domain types for the KDV application generator.
//
// The record arrives fully populated and pre-validated from the form layer;
// every field is a plain string and `#[serde(default)]` makes missing fields
// decode as empty strings rather than failing.

use serde::{Deserialize, Serialize};

/// Complete input to one bundle generation: everything the three documents
/// (cover letter, justification statement, CV) draw their text from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    pub personal: PersonalData,
    pub service: ServiceData,
    pub conscience: ConscienceData,
    /// CV entries in the order they should appear — never re-sorted.
    pub cv: Vec<CvEntry>,
}

/// Applicant identity and contact data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
}

impl PersonalData {
    /// "First Last", trimmed; empty components collapse cleanly.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Military service status of the applicant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceData {
    /// Free-text status (e.g. "ungedient", "Reservist", "aktiver Soldat").
    pub status: String,
    /// Responsible unit or career office.
    pub unit_or_office: String,
    /// File reference (Aktenzeichen) assigned by the authority, if any.
    pub reference_number: String,
    pub pending_deadlines: String,
    pub obligations: String,
}

/// The four free-text conscience narrative fields, one per justification
/// segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConscienceData {
    pub conscience_origin: String,
    pub moral_conflict: String,
    pub actions_taken: String,
    pub refusal_scope: String,
}

/// One station of the tabular CV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvEntry {
    pub start_date: String,
    pub end_date: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

/// One generated part of the bundle.
#[derive(Debug, Clone)]
pub struct BundlePart {
    /// Download filename by convention (`01_Anschreiben.pdf`, ...).
    pub name: String,
    /// Serialized PDF.
    pub bytes: Vec<u8>,
}

/// The final output: three individual PDFs plus one combined PDF containing
/// every page of every part in part order.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub bundle_bytes: Vec<u8>,
    /// Parts in generation order: cover letter, justification, CV.
    pub parts: Vec<BundlePart>,
}
