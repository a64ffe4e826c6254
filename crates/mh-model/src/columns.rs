//! Column names of the monuments register export.
//!
//! Names are matched exactly as they appear in the header row. Where a value
//! may come from more than one column, the slice constants list them in
//! fallback order.

/// Identifier column as written when the export carries a UTF-8 BOM.
pub const REFERENCE_BOM: &str = "\u{feff}Reference";
pub const REFERENCE: &str = "Reference";
/// Identifier candidates, BOM-prefixed variant first.
pub const REFERENCE_COLUMNS: &[&str] = &[REFERENCE_BOM, REFERENCE];

pub const DENOMINATION: &str = "Denomination_de_l_edifice";
pub const EDITORIAL_TITLE: &str = "Titre_editorial_de_la_notice";
pub const DOMAIN: &str = "Domaine";

/// Display name candidates.
pub const NAME_COLUMNS: &[&str] = &[EDITORIAL_TITLE, DENOMINATION];
pub const COMMUNE_COLUMNS: &[&str] = &["Commune_forme_editoriale", "Commune_forme_index"];
pub const DEPARTMENT_COLUMNS: &[&str] = &["Département", "Departement_format_numerique"];
pub const REGION_COLUMNS: &[&str] = &["Région"];

pub const ABBREVIATED_CENTURY: &str = "Format_abrege_du_siecle_de_construction";
pub const PRIMARY_CAMPAIGN_CENTURY: &str = "Siecle_de_la_campagne_principale_de_construction";
pub const SECONDARY_CAMPAIGN_CENTURY: &str = "Siecle_de_campagne_secondaire_de_construction";
pub const BUILDING_DATING: &str = "Datation_de_l_edifice";

pub const HISTORY: &str = "Historique";
pub const DESCRIPTION: &str = "Description_de_l_edifice";
pub const OBSERVATIONS: &str = "Observations";
/// Summary paragraphs, in output order.
pub const SUMMARY_COLUMNS: &[&str] = &[HISTORY, DESCRIPTION, OBSERVATIONS];

pub const COORDINATES_WGS84: &str = "coordonnees_au_format_WGS84";

/// Column groups the extractor reads, one fallback list per value.
///
/// Used only to warn about exports that lack a group entirely.
pub const EXPECTED_COLUMN_GROUPS: &[&[&str]] = &[
    REFERENCE_COLUMNS,
    &[DENOMINATION],
    &[EDITORIAL_TITLE],
    &[DOMAIN],
    COMMUNE_COLUMNS,
    DEPARTMENT_COLUMNS,
    REGION_COLUMNS,
    &[ABBREVIATED_CENTURY],
    &[PRIMARY_CAMPAIGN_CENTURY],
    &[SECONDARY_CAMPAIGN_CENTURY],
    &[BUILDING_DATING],
    &[HISTORY],
    &[DESCRIPTION],
    &[OBSERVATIONS],
    &[COORDINATES_WGS84],
];
