//! Shared formatting helpers for the report and chart layers

/// Padding between table columns.
const COLUMN_GAP: usize = 3;

/// Format a size in bytes using binary units.
///
/// Below 1024 bytes the bare count is shown (`"1023 B"`); above, one decimal and a
/// unit letter from K through E (`"1.5 KB"`).
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, UNITS[exp])
}

/// Format a percentage with one decimal.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Lay out rows as left-aligned columns, each padded to its widest cell.
///
/// Every line starts with `indent`. Width is measured in chars.
pub fn align_columns(rows: &[Vec<String>], indent: &str) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let mut line = String::from(indent);
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(cell);
                let pad = width - cell.chars().count() + COLUMN_GAP;
                line.extend(std::iter::repeat_n(' ', pad));
            }
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(100), "100 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1500), "1.5 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.0 TB");
        assert_eq!(format_size(1024u64.pow(5)), "1.0 PB");
        assert_eq!(format_size(1024u64.pow(6)), "1.0 EB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_format_size_just_below_next_unit() {
        // Unit selection uses integer division, so this stays in KB.
        assert_eq!(format_size(1024 * 1024 - 1), "1024.0 KB");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }

    #[test]
    fn test_align_columns() {
        let rows = vec![
            vec!["Size".to_string(), "Path".to_string()],
            vec!["1.0 KB".to_string(), "a.txt".to_string()],
        ];
        let lines = align_columns(&rows, "  ");
        assert_eq!(lines[0], "  Size     Path");
        assert_eq!(lines[1], "  1.0 KB   a.txt");
    }
}
