/// Attribute holding the state name in the boundary dataset.
pub const NAME_FIELD: &str = "st_nm";

/// Closed set of exact-match renames applied after the `&` substitution.
/// The left side is the shapefile spelling, the right side is the spelling
/// the scraped table uses.
const ALIASES: &[(&str, &str)] = &[
    ("Arunanchal Pradesh", "Arunachal Pradesh"),
    ("Telangana", "Telengana"),
    ("NCT of Delhi", "Delhi"),
];

/// Align a boundary-dataset state name with the scraped table's spelling:
/// `&` becomes `and`, then one exact-match pass over the alias list. No
/// fuzzy matching; names not covered here simply fail to join.
pub fn normalize_name(name: &str) -> String {
    let name = name.replace('&', "and");
    for (from, to) in ALIASES {
        if name == *from {
            return (*to).to_string();
        }
    }
    name
}
