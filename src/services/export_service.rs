use crate::models::asset::AssetExportRow;
use crate::utils::money;

pub const ASSET_REPORT_FILENAME: &str = "asset_report.csv";
pub const ASSET_REPORT_HEADER: [&str; 4] = ["Asset Name", "Type", "Cost", "Assigned User"];
pub const UNASSIGNED: &str = "Unassigned";

pub struct ExportService;

impl ExportService {
    /// Quotes a field when it contains a delimiter, quote or line break.
    fn csv_field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        let line = fields
            .into_iter()
            .map(Self::csv_field)
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push_str("\r\n");
    }

    /// Renders the asset report: a header row, then one row per asset.
    pub fn render_assets_csv(rows: &[AssetExportRow]) -> String {
        let mut out = String::new();
        Self::push_record(&mut out, ASSET_REPORT_HEADER);
        for row in rows {
            let cost = money::format(row.cost);
            Self::push_record(
                &mut out,
                [
                    row.name.as_str(),
                    row.asset_type.label(),
                    cost.as_str(),
                    row.assigned_username.as_deref().unwrap_or(UNASSIGNED),
                ],
            );
        }
        out
    }
}
