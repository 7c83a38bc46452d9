//! Column resolution: maps whatever header a source used onto a canonical
//! [`LeadField`].
//!
//! Headers are compared case-insensitively after trimming whitespace and a
//! surrounding `[`/`]` pair, so `"[Company Name]"`, `"Company Name"` and
//! `"company name"` are the same header. Aliases are tried in table order;
//! for each alias a header *equal* to it wins over headers merely containing
//! it, which keeps `"Adresse"` from resolving to an `"Adresse email"` column
//! that happens to come first.

use std::collections::BTreeMap;

use leadgen_core::{Alias, ColumnOverrides, LeadField, MatchMode, RawRecord};
use serde_json::Value;

/// Ordered alias table for every resolvable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    table: BTreeMap<LeadField, Vec<Alias>>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColumnAliases {
    /// The built-in French and English header spellings.
    ///
    /// Short aliases that are substrings of unrelated headers (`CA` in
    /// `Catégorie`, `Note` in `Notes`, `Tel` in `Hotel`) only match exactly.
    /// `Tél` and `Mail` are distinctive enough to match by containment.
    #[must_use]
    pub fn builtin() -> Self {
        use LeadField as F;

        let c = Alias::contains;
        let e = Alias::exact;

        let mut table = BTreeMap::new();
        table.insert(
            F::Name,
            vec![
                c("Nom de l'entreprise"),
                c("Raison sociale"),
                c("Nom commercial"),
                c("Dénomination"),
                c("Company Name"),
                c("companyName"),
                e("Nom"),
                e("Société"),
                e("name"),
            ],
        );
        table.insert(
            F::Address,
            vec![c("Adresse complète"), c("Adresse"), c("Street"), e("address")],
        );
        table.insert(F::City, vec![c("Ville"), c("Commune"), c("Localité"), c("City")]);
        table.insert(
            F::PostalCode,
            vec![
                c("Code postal"),
                c("Postal Code"),
                c("postalCode"),
                e("Zip"),
                e("CP"),
            ],
        );
        table.insert(
            F::Department,
            vec![c("Département"), c("Departement"), c("Department")],
        );
        table.insert(F::Region, vec![c("Région"), c("Region")]);
        table.insert(
            F::Phone,
            vec![
                c("Téléphone"),
                c("Telephone"),
                c("Phone"),
                c("Tél"),
                e("Tel"),
            ],
        );
        table.insert(F::Email, vec![c("E-mail"), c("Email"), c("Courriel"), c("Mail")]);
        table.insert(
            F::Website,
            vec![
                c("Site web"),
                c("Site Internet"),
                c("Website"),
                e("Site"),
                e("URL"),
            ],
        );
        table.insert(
            F::Category,
            vec![
                c("Catégorie"),
                c("Categorie"),
                c("Category"),
                c("Libellé Activité"),
                c("Secteur d'activité"),
                c("Activité"),
            ],
        );
        table.insert(
            F::Manager,
            vec![c("Gérant"), c("Gerant"), c("Dirigeant"), c("Manager")],
        );
        table.insert(
            F::Employees,
            vec![c("Employés"), c("Employes"), c("Effectif"), c("Employees")],
        );
        table.insert(
            F::Revenue,
            vec![c("Chiffre d'affaires"), c("Revenue"), e("CA")],
        );
        table.insert(F::Siret, vec![c("SIRET")]);
        table.insert(
            F::Naf,
            vec![c("Code NAF"), c("Code APE"), e("NAF"), e("APE")],
        );
        table.insert(
            F::Rating,
            vec![
                c("Évaluation"),
                c("Evaluation"),
                c("Rating"),
                c("Note Google"),
                c("Note moyenne"),
                c("Note /5"),
                e("Note"),
            ],
        );
        table.insert(
            F::Notes,
            vec![c("Commentaires"), e("Notes"), e("Remarques")],
        );

        Self { table }
    }

    /// Built-in aliases followed by the configured extras.
    #[must_use]
    pub fn with_overrides(overrides: &ColumnOverrides) -> Self {
        let mut aliases = Self::builtin();
        for (field, extra) in &overrides.aliases {
            aliases
                .table
                .entry(*field)
                .or_default()
                .extend(extra.iter().cloned());
        }
        aliases
    }

    #[must_use]
    pub fn for_field(&self, field: LeadField) -> &[Alias] {
        self.table.get(&field).map_or(&[], Vec::as_slice)
    }
}

/// The headers of one record, paired with their comparison form.
#[derive(Debug)]
pub struct Headers<'a> {
    entries: Vec<(&'a str, String)>,
}

impl<'a> Headers<'a> {
    /// Collects the headers of `record` in record order.
    #[must_use]
    pub fn of(record: &'a RawRecord) -> Self {
        let entries = record
            .keys()
            .map(|key| (key.as_str(), normalize_header(key)))
            .collect();
        Self { entries }
    }

    fn matching<'h>(&'h self, alias: &'h str, mode: MatchMode) -> impl Iterator<Item = &'a str> + 'h {
        let exact = self
            .entries
            .iter()
            .filter(move |(_, norm)| norm == alias)
            .map(|(key, _)| *key);
        let contained = self
            .entries
            .iter()
            .filter(move |(_, norm)| {
                mode == MatchMode::Contains && norm != alias && norm.contains(alias)
            })
            .map(|(key, _)| *key);
        exact.chain(contained)
    }
}

/// Lower-cases a header and strips surrounding whitespace and brackets.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    let trimmed = header.trim();
    let unbracketed = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    unbracketed.trim().to_lowercase()
}

/// Renders a scalar cell as trimmed text.
///
/// `null`, `false`, blank strings, arrays and objects are empty. Numbers are
/// never empty (a `0` rating is a value).
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
            _ => n.to_string(),
        }),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the trimmed value of the first matching, non-empty column.
///
/// Aliases are tried in order; within an alias, every matching header is
/// tried before moving on, so an empty `"Téléphone 1"` falls through to a
/// filled `"Téléphone 2"`. No match is not an error.
#[must_use]
pub fn resolve_field(record: &RawRecord, headers: &Headers<'_>, aliases: &[Alias]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        let needle = normalize_header(&alias.name);
        let found = headers
            .matching(&needle, alias.mode)
            .find_map(|key| record.get(key).and_then(scalar_text));
        found
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn resolve(rec: &RawRecord, field: LeadField) -> Option<String> {
        let aliases = ColumnAliases::builtin();
        resolve_field(rec, &Headers::of(rec), aliases.for_field(field))
    }

    #[test]
    fn normalize_header_strips_brackets_and_case() {
        assert_eq!(normalize_header("  [Company Name] "), "company name");
        assert_eq!(normalize_header("Code Postal"), "code postal");
        assert_eq!(normalize_header("[Zip"), "[zip");
    }

    #[test]
    fn resolves_bracketed_english_headers() {
        let rec = record(json!({"[Company Name]": " Le Bistrot ", "[Zip]": "75001"}));
        assert_eq!(resolve(&rec, LeadField::Name).as_deref(), Some("Le Bistrot"));
        assert_eq!(resolve(&rec, LeadField::PostalCode).as_deref(), Some("75001"));
    }

    #[test]
    fn resolves_french_headers_by_containment() {
        let rec = record(json!({
            "Nom de l'entreprise": "Café de Lyon",
            "Téléphone principal": "04 72 34 56 78",
            "Code postal": 69002
        }));
        assert_eq!(resolve(&rec, LeadField::Name).as_deref(), Some("Café de Lyon"));
        assert_eq!(
            resolve(&rec, LeadField::Phone).as_deref(),
            Some("04 72 34 56 78")
        );
        assert_eq!(resolve(&rec, LeadField::PostalCode).as_deref(), Some("69002"));
    }

    #[test]
    fn earlier_alias_wins_over_later_alias() {
        let rec = record(json!({"Nom": "Short", "Raison sociale": "Legal Name SARL"}));
        assert_eq!(
            resolve(&rec, LeadField::Name).as_deref(),
            Some("Legal Name SARL")
        );
    }

    #[test]
    fn blank_match_falls_through_to_next_key() {
        let rec = record(json!({"Téléphone 1": "   ", "Téléphone 2": "0102030405"}));
        assert_eq!(resolve(&rec, LeadField::Phone).as_deref(), Some("0102030405"));
    }

    #[test]
    fn blank_match_falls_through_to_next_alias() {
        let rec = record(json!({"Company Name": "", "name": "Fallback"}));
        assert_eq!(resolve(&rec, LeadField::Name).as_deref(), Some("Fallback"));
    }

    #[test]
    fn exact_header_preferred_over_containing_header() {
        let rec = record(json!({"Adresse email": "a@b.fr", "Adresse": "1 Rue X"}));
        assert_eq!(resolve(&rec, LeadField::Address).as_deref(), Some("1 Rue X"));
    }

    #[test]
    fn short_aliases_do_not_match_inside_other_headers() {
        let rec = record(json!({"Catégorie": "Restaurant", "Notes": "rappeler"}));
        assert_eq!(resolve(&rec, LeadField::Revenue), None);
        assert_eq!(resolve(&rec, LeadField::Rating), None);
        assert_eq!(resolve(&rec, LeadField::Notes).as_deref(), Some("rappeler"));
    }

    #[test]
    fn tel_and_mail_match_inside_longer_headers() {
        let rec = record(json!({"Tél.": "0102030405", "Mail contact": "a@b.fr"}));
        assert_eq!(resolve(&rec, LeadField::Phone).as_deref(), Some("0102030405"));
        assert_eq!(resolve(&rec, LeadField::Email).as_deref(), Some("a@b.fr"));

        let hotel = record(json!({"Hotel": "Le Grand"}));
        assert_eq!(resolve(&hotel, LeadField::Phone), None);
    }

    #[test]
    fn missing_field_is_none() {
        let rec = record(json!({"Company Name": "X"}));
        assert_eq!(resolve(&rec, LeadField::Email), None);
    }

    #[test]
    fn scalar_text_rules() {
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!(false)), None);
        assert_eq!(scalar_text(&json!("  ")), None);
        assert_eq!(scalar_text(&json!(["a"])), None);
        assert_eq!(scalar_text(&json!(0)).as_deref(), Some("0"));
        assert_eq!(scalar_text(&json!(4.5)).as_deref(), Some("4.5"));
        assert_eq!(scalar_text(&json!(75001.0)).as_deref(), Some("75001"));
        assert_eq!(scalar_text(&json!(-3.0)).as_deref(), Some("-3"));
        assert_eq!(scalar_text(&json!(" x ")).as_deref(), Some("x"));
    }

    #[test]
    fn overrides_are_tried_after_builtins() {
        let overrides =
            leadgen_core::parse_column_overrides("aliases:\n  phone: [{ exact: \"GSM\" }]\n")
                .unwrap();
        let aliases = ColumnAliases::with_overrides(&overrides);
        let rec = record(json!({"GSM": "0611223344"}));
        let phone = resolve_field(&rec, &Headers::of(&rec), aliases.for_field(LeadField::Phone));
        assert_eq!(phone.as_deref(), Some("0611223344"));

        let both = record(json!({"GSM": "0611223344", "Phone": "0102030405"}));
        let phone =
            resolve_field(&both, &Headers::of(&both), aliases.for_field(LeadField::Phone));
        assert_eq!(phone.as_deref(), Some("0102030405"));
    }
}
