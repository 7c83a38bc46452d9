//! French administrative lookups: postal code → department code, department
//! code → name, department → region.
//!
//! Every function here is a pure table lookup.

/// Region returned when a department belongs to no known region.
pub const UNKNOWN_REGION: &str = "";

const DEPARTMENTS: &[(&str, &str)] = &[
    ("01", "Ain"),
    ("02", "Aisne"),
    ("03", "Allier"),
    ("04", "Alpes-de-Haute-Provence"),
    ("05", "Hautes-Alpes"),
    ("06", "Alpes-Maritimes"),
    ("07", "Ardèche"),
    ("08", "Ardennes"),
    ("09", "Ariège"),
    ("10", "Aube"),
    ("11", "Aude"),
    ("12", "Aveyron"),
    ("13", "Bouches-du-Rhône"),
    ("14", "Calvados"),
    ("15", "Cantal"),
    ("16", "Charente"),
    ("17", "Charente-Maritime"),
    ("18", "Cher"),
    ("19", "Corrèze"),
    ("2A", "Corse-du-Sud"),
    ("2B", "Haute-Corse"),
    ("21", "Côte-d'Or"),
    ("22", "Côtes-d'Armor"),
    ("23", "Creuse"),
    ("24", "Dordogne"),
    ("25", "Doubs"),
    ("26", "Drôme"),
    ("27", "Eure"),
    ("28", "Eure-et-Loir"),
    ("29", "Finistère"),
    ("30", "Gard"),
    ("31", "Haute-Garonne"),
    ("32", "Gers"),
    ("33", "Gironde"),
    ("34", "Hérault"),
    ("35", "Ille-et-Vilaine"),
    ("36", "Indre"),
    ("37", "Indre-et-Loire"),
    ("38", "Isère"),
    ("39", "Jura"),
    ("40", "Landes"),
    ("41", "Loir-et-Cher"),
    ("42", "Loire"),
    ("43", "Haute-Loire"),
    ("44", "Loire-Atlantique"),
    ("45", "Loiret"),
    ("46", "Lot"),
    ("47", "Lot-et-Garonne"),
    ("48", "Lozère"),
    ("49", "Maine-et-Loire"),
    ("50", "Manche"),
    ("51", "Marne"),
    ("52", "Haute-Marne"),
    ("53", "Mayenne"),
    ("54", "Meurthe-et-Moselle"),
    ("55", "Meuse"),
    ("56", "Morbihan"),
    ("57", "Moselle"),
    ("58", "Nièvre"),
    ("59", "Nord"),
    ("60", "Oise"),
    ("61", "Orne"),
    ("62", "Pas-de-Calais"),
    ("63", "Puy-de-Dôme"),
    ("64", "Pyrénées-Atlantiques"),
    ("65", "Hautes-Pyrénées"),
    ("66", "Pyrénées-Orientales"),
    ("67", "Bas-Rhin"),
    ("68", "Haut-Rhin"),
    ("69", "Rhône"),
    ("70", "Haute-Saône"),
    ("71", "Saône-et-Loire"),
    ("72", "Sarthe"),
    ("73", "Savoie"),
    ("74", "Haute-Savoie"),
    ("75", "Paris"),
    ("76", "Seine-Maritime"),
    ("77", "Seine-et-Marne"),
    ("78", "Yvelines"),
    ("79", "Deux-Sèvres"),
    ("80", "Somme"),
    ("81", "Tarn"),
    ("82", "Tarn-et-Garonne"),
    ("83", "Var"),
    ("84", "Vaucluse"),
    ("85", "Vendée"),
    ("86", "Vienne"),
    ("87", "Haute-Vienne"),
    ("88", "Vosges"),
    ("89", "Yonne"),
    ("90", "Territoire de Belfort"),
    ("91", "Essonne"),
    ("92", "Hauts-de-Seine"),
    ("93", "Seine-Saint-Denis"),
    ("94", "Val-de-Marne"),
    ("95", "Val-d'Oise"),
    ("971", "Guadeloupe"),
    ("972", "Martinique"),
    ("973", "Guyane"),
    ("974", "La Réunion"),
    ("976", "Mayotte"),
];

const REGIONS: &[(&str, &[&str])] = &[
    (
        "Île-de-France",
        &["75", "77", "78", "91", "92", "93", "94", "95"],
    ),
    (
        "Auvergne-Rhône-Alpes",
        &[
            "01", "03", "07", "15", "26", "38", "42", "43", "63", "69", "73", "74",
        ],
    ),
    (
        "Bourgogne-Franche-Comté",
        &["21", "25", "39", "58", "70", "71", "89", "90"],
    ),
    ("Bretagne", &["22", "29", "35", "56"]),
    ("Centre-Val de Loire", &["18", "28", "36", "37", "41", "45"]),
    ("Corse", &["2A", "2B"]),
    (
        "Grand Est",
        &["08", "10", "51", "52", "54", "55", "57", "67", "68", "88"],
    ),
    ("Hauts-de-France", &["02", "59", "60", "62", "80"]),
    ("Normandie", &["14", "27", "50", "61", "76"]),
    (
        "Nouvelle-Aquitaine",
        &[
            "16", "17", "19", "23", "24", "33", "40", "47", "64", "79", "86", "87",
        ],
    ),
    (
        "Occitanie",
        &[
            "09", "11", "12", "30", "31", "32", "34", "46", "48", "65", "66", "81", "82",
        ],
    ),
    ("Pays de la Loire", &["44", "49", "53", "72", "85"]),
    (
        "Provence-Alpes-Côte d'Azur",
        &["04", "05", "06", "13", "83", "84"],
    ),
    ("Guadeloupe", &["971"]),
    ("Martinique", &["972"]),
    ("Guyane", &["973"]),
    ("La Réunion", &["974"]),
    ("Mayotte", &["976"]),
];

/// Derives the department code from a postal code.
///
/// Overseas codes (`97x`, `98x`) keep three characters, checked before the
/// generic two-character prefix so `97400` yields `974` rather than `97`.
/// Corsica accepts both the department form (`2A004`) and the postal form
/// (`20000`–`20199` → `2A`, `20200`+ → `2B`). Returns `None` when the input
/// does not start with a recognizable prefix.
#[must_use]
pub fn department_from_postal(postal_code: &str) -> Option<String> {
    let code = postal_code.trim().to_uppercase();
    let chars: Vec<char> = code.chars().take(3).collect();

    match chars.as_slice() {
        ['2', c @ ('A' | 'B'), ..] => Some(format!("2{c}")),
        ['2', '0', third] if third.is_ascii_digit() => {
            Some(if matches!(third, '0' | '1') { "2A" } else { "2B" }.to_string())
        }
        ['9', second @ ('7' | '8'), third] if third.is_ascii_digit() => {
            Some(format!("9{second}{third}"))
        }
        [first, second, ..] if first.is_ascii_digit() && second.is_ascii_digit() => {
            Some(format!("{first}{second}"))
        }
        _ => None,
    }
}

/// Human-readable department name for a code; `""` when unknown.
#[must_use]
pub fn department_name(code: &str) -> &'static str {
    canonical_department_code(code)
        .and_then(|code| DEPARTMENTS.iter().find(|(c, _)| *c == code))
        .map_or("", |(_, name)| name)
}

/// Maps a department code or name onto a known code.
///
/// Accepts `"75"`, `"1"` (zero-padded), `"2a"`, `"974"`, `"Paris"`,
/// `"75 - Paris"` and `"Paris (75)"`.
#[must_use]
pub fn canonical_department_code(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    lookup(trimmed).or_else(|| {
        trimmed
            .split(['(', ')', ',', '/'])
            .flat_map(|part| part.split(" - "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .find_map(lookup)
    })
}

fn lookup(token: &str) -> Option<&'static str> {
    lookup_code(token).or_else(|| lookup_name(token))
}

fn lookup_code(token: &str) -> Option<&'static str> {
    let upper = token.to_uppercase();
    let padded = if upper.len() == 1 && upper.chars().all(|c| c.is_ascii_digit()) {
        format!("0{upper}")
    } else {
        upper
    };
    DEPARTMENTS
        .iter()
        .find(|(code, _)| *code == padded)
        .map(|(code, _)| *code)
}

fn lookup_name(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    DEPARTMENTS
        .iter()
        .find(|(_, name)| name.to_lowercase() == lower)
        .map(|(code, _)| *code)
}

/// Region for a department code or name; [`UNKNOWN_REGION`] when the
/// department belongs to no region in the table.
#[must_use]
pub fn region_for_department(department: &str) -> &'static str {
    canonical_department_code(department)
        .and_then(|code| {
            REGIONS
                .iter()
                .find(|(_, departments)| departments.contains(&code))
        })
        .map_or(UNKNOWN_REGION, |(region, _)| region)
}
