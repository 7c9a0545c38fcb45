//! Status code table command

use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::AppContext;
use sift_core::ErrorKind;
use sift_search::{category, ErrorCode};

#[derive(Debug, Serialize)]
struct CodeRow {
    code: i32,
    name: &'static str,
    category: Option<ErrorKind>,
}

fn rows() -> Vec<CodeRow> {
    ErrorCode::NAMED
        .iter()
        .map(|code| CodeRow {
            code: code.code(),
            name: code.name(),
            category: category(*code),
        })
        .collect()
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = rows();

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Table => {
            println!("{:<6} {:<24} CATEGORY", "CODE", "NAME");
            for row in &rows {
                let category = row
                    .category
                    .map(|k| k.as_str())
                    .unwrap_or("unhandled");
                println!("{:<6} {:<24} {}", row.code, row.name, category);
            }
            println!("{:<6} {:<24} unhandled", "*", "OTHER");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_named_codes() {
        let rows = rows();
        assert_eq!(rows.len(), ErrorCode::NAMED.len());

        let not_found = rows.iter().find(|r| r.code == 404).unwrap();
        assert_eq!(not_found.category, Some(ErrorKind::ResourceFailure));

        let conflict = rows.iter().find(|r| r.code == 409).unwrap();
        assert_eq!(conflict.category, None);
    }
}
