// ==========================================
// 提前补货计划系统 - 文件解析器
// ==========================================
// 职责: 将 Excel (.xlsx/.xls) / CSV (.csv) 解析为原始行
// 输出: Vec<HashMap<列名, 单元格文本>>,空白行跳过
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行: 列名 → 单元格文本(已去首尾空白)
pub type RawRow = HashMap<String, String>;

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser
// ==========================================
// 输入工作簿携带多个工作表(Shipments / Stock / Master),
// 因此解析按工作表名进行,而非默认取第一个
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        if !workbook
            .sheet_names()
            .iter()
            .any(|s| s.as_str() == sheet_name)
        {
            return Err(ImportError::SheetNotFound(sheet_name.to_string()));
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows.next().ok_or_else(|| {
            ImportError::ExcelParseError(format!("工作表 {} 无数据行", sheet_name))
        })?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Material,Delivery quantity").unwrap();
        writeln!(temp_file, "MAT001,100").unwrap();
        writeln!(temp_file, "MAT002,50").unwrap();

        let parser = CsvParser;
        let records = parser.parse(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Material"), Some(&"MAT001".to_string()));
        assert_eq!(
            records[0].get("Delivery quantity"),
            Some(&"100".to_string())
        );
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse(Path::new("non_existent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Material,Case Qty").unwrap();
        writeln!(temp_file, "MAT001,25").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空行
        writeln!(temp_file, "MAT002,30").unwrap();

        let parser = CsvParser;
        let records = parser.parse(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_csv_parser_trims_headers_and_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, " Material , Case Qty ").unwrap();
        writeln!(temp_file, " MAT001 , 25 ").unwrap();

        let parser = CsvParser;
        let records = parser.parse(temp_file.path()).unwrap();

        assert_eq!(records[0].get("Material"), Some(&"MAT001".to_string()));
        assert_eq!(records[0].get("Case Qty"), Some(&"25".to_string()));
    }

    #[test]
    fn test_excel_parser_rejects_unknown_extension() {
        let mut temp_file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        writeln!(temp_file, "not an excel file").unwrap();

        let parser = ExcelParser;
        let result = parser.parse_sheet(temp_file.path(), "Stock");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
