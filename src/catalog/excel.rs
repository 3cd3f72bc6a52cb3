use calamine::{open_workbook_auto, Reader};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::catalog::io::{cell_to_string, integer_text, normalize_header, split_prerequisites};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::{Course, GradeDistribution};

const REQUIRED_COLUMNS: [&str; 5] = ["id", "code", "title", "credits", "department"];
const GRADE_COLUMNS: [&str; 5] = ["a", "b", "c", "d", "f"];

/// Lee el catálogo desde la primera hoja de un workbook.
///
/// La primera fila es el encabezado; ver `courses_from_rows` para el formato.
pub fn load_catalog_excel<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let excel_err = |message: String| CatalogError::Excel {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| excel_err(e.to_string()))?;
    let sheet_names = workbook.sheet_names().to_owned();
    let primera_hoja = sheet_names
        .first()
        .ok_or_else(|| excel_err("no se encontraron hojas en el archivo".to_string()))?;
    let range = workbook
        .worksheet_range(primera_hoja)
        .map_err(|e| excel_err(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();
    debug!(path = %path.display(), sheet = %primera_hoja, rows = rows.len(), "read catalog sheet");

    Catalog::from_courses(courses_from_rows(&rows)?)
}

/// Convierte filas de texto (encabezado + datos) en cursos.
///
/// Required columns: id, code, title, credits, department. Optional:
/// prerequisites, description and one column per letter grade (A..F).
/// Rows with an empty id are skipped.
pub fn courses_from_rows(rows: &[Vec<String>]) -> Result<Vec<Course>, CatalogError> {
    let Some(header) = rows.first() else {
        return Ok(Vec::new());
    };

    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header(h), i))
        .collect();

    for col in REQUIRED_COLUMNS {
        if !columns.contains_key(col) {
            return Err(CatalogError::MissingColumn { column: col.to_string() });
        }
    }

    let cell = |row: &[String], col: &str| -> String {
        columns
            .get(col)
            .and_then(|&i| row.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut courses = Vec::new();
    for (idx, row) in rows.iter().enumerate().skip(1) {
        let row = row.as_slice();
        let row_number = idx + 1;
        let id = cell(row, "id");
        if id.is_empty() {
            continue;
        }

        let credits_raw = cell(row, "credits");
        let credits = parse_count(&credits_raw, row_number, "credits")?;

        let mut grades = GradeDistribution::new();
        for g in GRADE_COLUMNS {
            if !columns.contains_key(g) {
                continue;
            }
            let raw = cell(row, g);
            if raw.is_empty() {
                continue;
            }
            grades = grades.with(&g.to_uppercase(), parse_count(&raw, row_number, g)?);
        }

        courses.push(Course {
            id,
            title: cell(row, "title"),
            code: cell(row, "code"),
            credits,
            department: cell(row, "department"),
            prerequisites: split_prerequisites(&cell(row, "prerequisites")),
            description: cell(row, "description"),
            grade_distribution: grades,
        });
    }

    Ok(courses)
}

fn parse_count(raw: &str, row: usize, column: &str) -> Result<u32, CatalogError> {
    integer_text(raw).parse::<u32>().map_err(|_| CatalogError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_courses_from_rows_completo() {
        let rows = vec![
            row(&["ID", "Code", "Title", "Credits", "Department", "Prerequisites", "A", "B", "F"]),
            row(&["CS1428", "CS 1428", "Foundations I", "4", "Computer Science", "", "35", "30", "5"]),
            row(&["CS2308", "CS 2308", "Foundations II", "3", "Computer Science", "CS1428", "", "", ""]),
            row(&["", "", "", "", "", "", "", "", ""]),
        ];
        let courses = courses_from_rows(&rows).expect("rows parse");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].grade_distribution.total(), 70);
        assert_eq!(courses[1].prerequisites, vec!["CS1428"]);
        assert!(courses[1].grade_distribution.is_empty());
    }

    #[test]
    fn test_columna_faltante() {
        let rows = vec![row(&["id", "code", "title", "department"])];
        match courses_from_rows(&rows) {
            Err(CatalogError::MissingColumn { column }) => assert_eq!(column, "credits"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_credits_invalidos() {
        let rows = vec![
            row(&["id", "code", "title", "credits", "department"]),
            row(&["X1", "X 1", "T", "three", "D"]),
        ];
        match courses_from_rows(&rows) {
            Err(CatalogError::InvalidNumber { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "credits");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_credits_como_texto_decimal() {
        let rows = vec![
            row(&["id", "code", "title", "credits", "department", "A"]),
            row(&["X1", "X 1", "T", "4.0", "D", "12.00"]),
            row(&["X2", "X 2", "T", "3.5", "D", ""]),
        ];
        match courses_from_rows(&rows) {
            Err(CatalogError::InvalidNumber { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "3.5");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
        let courses = courses_from_rows(&rows[..2]).unwrap();
        assert_eq!(courses[0].credits, 4);
        assert_eq!(courses[0].grade_distribution.total(), 12);
    }

    #[test]
    fn test_sin_filas() {
        assert!(courses_from_rows(&[]).unwrap().is_empty());
    }
}
