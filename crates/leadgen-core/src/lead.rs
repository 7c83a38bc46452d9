use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A flat, untyped input row keyed by whatever header the source used
/// (`"[Company Name]"`, `"Nom de l'entreprise"`, `"zip"`, ...).
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Prospecting state of a lead. Only ever changed by an explicit user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Lost,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Lost => "lost",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "lost" => Ok(LeadStatus::Lost),
            other => Err(format!(
                "unknown lead status '{other}'; expected new, contacted, qualified or lost"
            )),
        }
    }
}

/// A business listing normalized from a heterogeneous input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// `"<source-prefix>-<row index>"`, unique within one loaded batch.
    pub id: String,
    /// Company name. Never empty: nameless rows are dropped at load time.
    #[serde(alias = "companyName")]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    /// Department code (`"75"`, `"2A"`, `"974"`) or the explicit value the
    /// source supplied. Empty when neither is available.
    #[serde(default)]
    pub department: String,
    /// Region name. Empty when the department maps to no known region.
    #[serde(default)]
    pub region: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub manager: Option<String>,
    /// Headcount bracket as written in the source (e.g. `"10-19"`).
    pub employees: Option<String>,
    /// Turnover as written in the source.
    pub revenue: Option<String>,
    pub siret: Option<String>,
    /// NAF/APE activity code.
    pub naf: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub status: LeadStatus,
    pub notes: Option<String>,
}

impl Lead {
    /// Creates a lead with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            department: String::new(),
            region: String::new(),
            phone: None,
            email: None,
            website: None,
            category: None,
            manager: None,
            employees: None,
            revenue: None,
            siret: None,
            naf: None,
            rating: None,
            status: LeadStatus::New,
            notes: None,
        }
    }

    /// Returns the textual value of `field`, or `None` when it is absent or
    /// blank. Ratings are rendered with their shortest decimal form.
    #[must_use]
    pub fn field_value(&self, field: LeadField) -> Option<Cow<'_, str>> {
        fn borrowed(s: &str) -> Option<Cow<'_, str>> {
            non_blank(s).map(Cow::Borrowed)
        }

        match field {
            LeadField::Id => borrowed(&self.id),
            LeadField::Name => borrowed(&self.name),
            LeadField::Address => borrowed(&self.address),
            LeadField::City => borrowed(&self.city),
            LeadField::PostalCode => borrowed(&self.postal_code),
            LeadField::Department => borrowed(&self.department),
            LeadField::Region => borrowed(&self.region),
            LeadField::Phone => self.phone.as_deref().and_then(borrowed),
            LeadField::Email => self.email.as_deref().and_then(borrowed),
            LeadField::Website => self.website.as_deref().and_then(borrowed),
            LeadField::Category => self.category.as_deref().and_then(borrowed),
            LeadField::Manager => self.manager.as_deref().and_then(borrowed),
            LeadField::Employees => self.employees.as_deref().and_then(borrowed),
            LeadField::Revenue => self.revenue.as_deref().and_then(borrowed),
            LeadField::Siret => self.siret.as_deref().and_then(borrowed),
            LeadField::Naf => self.naf.as_deref().and_then(borrowed),
            LeadField::Rating => self.rating.map(|r| Cow::Owned(r.to_string())),
            LeadField::Status => Some(Cow::Borrowed(self.status.as_str())),
            LeadField::Notes => self.notes.as_deref().and_then(borrowed),
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Canonical attribute names a raw column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadField {
    Id,
    Name,
    Address,
    City,
    PostalCode,
    Department,
    Region,
    Phone,
    Email,
    Website,
    Category,
    Manager,
    Employees,
    Revenue,
    Siret,
    Naf,
    Rating,
    Status,
    Notes,
}

impl LeadField {
    /// Fields that can be read from an input row. `Id` and `Status` are
    /// assigned, never resolved.
    pub const RESOLVABLE: [LeadField; 17] = [
        LeadField::Name,
        LeadField::Address,
        LeadField::City,
        LeadField::PostalCode,
        LeadField::Department,
        LeadField::Region,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Website,
        LeadField::Category,
        LeadField::Manager,
        LeadField::Employees,
        LeadField::Revenue,
        LeadField::Siret,
        LeadField::Naf,
        LeadField::Rating,
        LeadField::Notes,
    ];

    /// The camelCase key used in serialized leads and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LeadField::Id => "id",
            LeadField::Name => "name",
            LeadField::Address => "address",
            LeadField::City => "city",
            LeadField::PostalCode => "postalCode",
            LeadField::Department => "department",
            LeadField::Region => "region",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Website => "website",
            LeadField::Category => "category",
            LeadField::Manager => "manager",
            LeadField::Employees => "employees",
            LeadField::Revenue => "revenue",
            LeadField::Siret => "siret",
            LeadField::Naf => "naf",
            LeadField::Rating => "rating",
            LeadField::Status => "status",
            LeadField::Notes => "notes",
        }
    }

    /// Human-readable French column label used in exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeadField::Id => "Identifiant",
            LeadField::Name => "Nom",
            LeadField::Address => "Adresse",
            LeadField::City => "Ville",
            LeadField::PostalCode => "Code postal",
            LeadField::Department => "Département",
            LeadField::Region => "Région",
            LeadField::Phone => "Téléphone",
            LeadField::Email => "Email",
            LeadField::Website => "Site web",
            LeadField::Category => "Catégorie",
            LeadField::Manager => "Gérant",
            LeadField::Employees => "Employés",
            LeadField::Revenue => "CA",
            LeadField::Siret => "SIRET",
            LeadField::Naf => "NAF",
            LeadField::Rating => "Note",
            LeadField::Status => "Statut",
            LeadField::Notes => "Notes",
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadField {
    type Err = String;

    /// Accepts the camelCase key, case-insensitively, plus `postal_code` and
    /// `companyName` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let field = match key.as_str() {
            "id" => LeadField::Id,
            "name" | "companyname" | "company_name" => LeadField::Name,
            "address" => LeadField::Address,
            "city" => LeadField::City,
            "postalcode" | "postal_code" => LeadField::PostalCode,
            "department" => LeadField::Department,
            "region" => LeadField::Region,
            "phone" => LeadField::Phone,
            "email" => LeadField::Email,
            "website" => LeadField::Website,
            "category" => LeadField::Category,
            "manager" => LeadField::Manager,
            "employees" => LeadField::Employees,
            "revenue" => LeadField::Revenue,
            "siret" => LeadField::Siret,
            "naf" => LeadField::Naf,
            "rating" => LeadField::Rating,
            "status" => LeadField::Status,
            "notes" => LeadField::Notes,
            _ => return Err(format!("unknown lead field '{}'", s.trim())),
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_new() {
        assert_eq!(LeadStatus::default(), LeadStatus::New);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Qualified".parse::<LeadStatus>(), Ok(LeadStatus::Qualified));
        assert!("won".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn field_round_trips_through_its_key() {
        for field in LeadField::RESOLVABLE {
            assert_eq!(field.as_str().parse::<LeadField>(), Ok(field));
        }
    }

    #[test]
    fn field_value_treats_blank_as_absent() {
        let mut lead = Lead::new("json-0", "Le Bistrot");
        lead.phone = Some("   ".to_string());
        lead.city = "Paris".to_string();
        assert!(lead.field_value(LeadField::Phone).is_none());
        assert!(lead.field_value(LeadField::Address).is_none());
        assert_eq!(lead.field_value(LeadField::City).as_deref(), Some("Paris"));
    }

    #[test]
    fn field_value_renders_rating_without_trailing_zero() {
        let mut lead = Lead::new("json-0", "Le Bistrot");
        lead.rating = Some(4.0);
        assert_eq!(lead.field_value(LeadField::Rating).as_deref(), Some("4"));
        lead.rating = Some(4.5);
        assert_eq!(lead.field_value(LeadField::Rating).as_deref(), Some("4.5"));
    }

    #[test]
    fn lead_deserializes_company_name_alias() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "id": "test-0",
            "companyName": "Café de Lyon",
            "phone": null
        }))
        .unwrap();
        assert_eq!(lead.name, "Café de Lyon");
        assert_eq!(lead.status, LeadStatus::New);
        assert!(lead.city.is_empty());
    }
}
