//! Field mapping from a retained row to a [`MonumentRecord`].

use mh_model::columns::{
    BUILDING_DATING, COMMUNE_COLUMNS, COORDINATES_WGS84, DEPARTMENT_COLUMNS, NAME_COLUMNS,
    REFERENCE_COLUMNS, REGION_COLUMNS, SUMMARY_COLUMNS,
};
use mh_model::{MonumentRecord, Row, UNTITLED, generated_id};

use crate::century::century_label_or_unknown;
use crate::coordinates::parse_coordinates;

/// Separator between summary paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Joins the non-empty history, description and observation texts.
pub fn build_summary(row: &Row) -> Option<String> {
    let blocks: Vec<&str> = SUMMARY_COLUMNS
        .iter()
        .filter_map(|column| row.get(column))
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    (!blocks.is_empty()).then(|| blocks.join(PARAGRAPH_SEPARATOR))
}

fn first_or_empty(row: &Row, columns: &[&str]) -> String {
    row.first_non_empty(columns).unwrap_or_default().to_string()
}

/// Builds the output record for a retained row.
///
/// `kept` is the 1-based position of the row among retained rows and only
/// feeds the generated identifier.
pub fn build_record(row: &Row, kept: usize) -> MonumentRecord {
    let id = row
        .first_non_empty(REFERENCE_COLUMNS)
        .map_or_else(|| generated_id(kept), str::to_string);

    MonumentRecord {
        id,
        nom: row
            .first_non_empty(NAME_COLUMNS)
            .unwrap_or(UNTITLED)
            .to_string(),
        commune: first_or_empty(row, COMMUNE_COLUMNS),
        departement: first_or_empty(row, DEPARTMENT_COLUMNS),
        region: first_or_empty(row, REGION_COLUMNS),
        datation: row.raw(BUILDING_DATING).to_string(),
        siecles: century_label_or_unknown(row),
        resume_historique: build_summary(row),
        coordonnees: parse_coordinates(row.text(COORDINATES_WGS84)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mh_model::columns::{DENOMINATION, DESCRIPTION, EDITORIAL_TITLE, HISTORY, OBSERVATIONS};

    #[test]
    fn summary_skips_missing_blocks() {
        let row = Row::new()
            .with(HISTORY, "Construit en 1620.")
            .with(OBSERVATIONS, "Restauré.");
        assert_eq!(
            build_summary(&row).as_deref(),
            Some("Construit en 1620.\n\nRestauré.")
        );
    }

    #[test]
    fn summary_is_none_without_text() {
        let row = Row::new().with(DESCRIPTION, "");
        assert_eq!(build_summary(&row), None);
    }

    #[test]
    fn placeholders_for_missing_fields() {
        let record = build_record(&Row::new(), 4);
        assert_eq!(record.id, "mh-4");
        assert_eq!(record.nom, "Sans titre");
        assert_eq!(record.commune, "");
        assert_eq!(record.siecles, "Datation inconnue");
        assert_eq!(record.resume_historique, None);
        assert_eq!(record.coordonnees, None);
    }

    #[test]
    fn dating_text_is_kept_verbatim() {
        let row = Row::new()
            .with(DENOMINATION, "château")
            .with(BUILDING_DATING, " 1620 ");
        let record = build_record(&row, 1);
        assert_eq!(record.datation, " 1620 ");
        assert_eq!(record.siecles, "XVIIe");
    }

    #[test]
    fn title_preferred_over_denomination() {
        let row = Row::new()
            .with(DENOMINATION, "château")
            .with(EDITORIAL_TITLE, "Château de Cheverny");
        assert_eq!(build_record(&row, 1).nom, "Château de Cheverny");

        let row = Row::new().with(DENOMINATION, "château");
        assert_eq!(build_record(&row, 1).nom, "château");
    }

    #[test]
    fn commune_falls_back_to_index_form() {
        let row = Row::new()
            .with("Commune_forme_editoriale", "")
            .with("Commune_forme_index", "cheverny");
        assert_eq!(build_record(&row, 1).commune, "cheverny");
    }
}
