//! CSV export
//!
//! Writes the dashboard tables as consecutive CSV sections for spreadsheets.
//! Each section starts with a `# name` line followed by its own header row.

use std::io::Write;

use ::csv::{Writer, WriterBuilder};

use crate::error::{CostError, CostResult};
use crate::export::json::DashboardExport;
use crate::models::Money;

/// Export every dashboard table as CSV sections
pub fn export_dashboard_csv<W: Write>(export: &DashboardExport, writer: &mut W) -> CostResult<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
    let info = &export.project_info;

    section(&mut wtr, "project_info", &["Field", "Value"])?;
    let figures = [
        ("total_budget", info.total_budget),
        ("total_spent", info.total_spent),
        ("total_mpesa_fees", info.total_mpesa_fees),
        ("total_cost", info.total_cost),
        ("balance_remaining", info.balance_remaining),
        ("total_outstanding", info.total_outstanding),
        ("total_unpaid_labor", info.total_unpaid_labor),
        ("total_pending", info.total_pending),
        ("total_committed", info.total_committed),
        ("effective_balance", info.effective_balance),
        ("total_pending_purchases", info.total_pending_purchases),
        ("total_not_yet_paid", info.total_not_yet_paid),
        ("total_project_cost", info.total_project_cost),
        ("additional_funds_needed", info.additional_funds_needed),
    ];
    record(&mut wtr, ["name".to_string(), info.name.clone()])?;
    for (field, amount) in figures {
        record(&mut wtr, [field.to_string(), amount_csv(amount)])?;
    }
    record(
        &mut wtr,
        ["percentage_used".to_string(), format!("{:.2}", info.percentage_used)],
    )?;
    record(
        &mut wtr,
        [
            "percentage_used_inclusive".to_string(),
            format!("{:.2}", info.percentage_used_inclusive),
        ],
    )?;
    record(&mut wtr, ["last_updated".to_string(), export.last_updated.clone()])?;

    section(
        &mut wtr,
        "category_summary",
        &["Category", "Amount", "M-Pesa Fee", "Total Cost", "Budget %"],
    )?;
    for row in &export.category_summary {
        record(
            &mut wtr,
            [
                row.category.clone(),
                amount_csv(row.amount),
                amount_csv(row.mpesa_fee),
                amount_csv(row.total_cost),
                format!("{:.2}", row.budget_percentage),
            ],
        )?;
    }

    section(
        &mut wtr,
        "daily_expenses",
        &[
            "Date",
            "Category",
            "Subcategory",
            "Description",
            "Amount",
            "Vendor",
            "M-Pesa Fee",
            "Total Cost",
            "Status",
        ],
    )?;
    for expense in &export.daily_expenses {
        record(
            &mut wtr,
            [
                expense.date.clone(),
                expense.category.clone(),
                expense.subcategory.clone(),
                expense.description.clone(),
                amount_csv(expense.amount),
                expense.vendor.clone(),
                amount_csv(expense.mpesa_fee),
                amount_csv(expense.total_cost),
                expense.status.to_string(),
            ],
        )?;
    }

    section(
        &mut wtr,
        "outstanding_balances",
        &["Vendor", "Description", "Amount", "Due Date"],
    )?;
    for balance in &export.outstanding_balances {
        record(
            &mut wtr,
            [
                balance.vendor.clone(),
                balance.description.clone(),
                amount_csv(balance.amount),
                balance.due_date.clone(),
            ],
        )?;
    }

    section(
        &mut wtr,
        "unpaid_expenses",
        &["Date", "Category", "Description", "Amount", "Vendor"],
    )?;
    for expense in &export.unpaid_expenses {
        record(
            &mut wtr,
            [
                expense.date.clone(),
                expense.category.clone(),
                expense.description.clone(),
                amount_csv(expense.amount),
                expense.vendor.clone(),
            ],
        )?;
    }

    section(&mut wtr, "pending_purchases", &["Category", "Description", "Amount"])?;
    for item in &export.pending_purchases {
        record(
            &mut wtr,
            [
                item.category.clone(),
                item.description.clone(),
                amount_csv(item.amount),
            ],
        )?;
    }

    wtr.flush()
        .map_err(|e| CostError::Export(format!("CSV writer error: {}", e)))
}

fn section<W: Write>(wtr: &mut Writer<W>, name: &str, header: &[&str]) -> CostResult<()> {
    record(wtr, [format!("# {}", name)])?;
    record(wtr, header)
}

fn record<W, I, T>(wtr: &mut Writer<W>, fields: I) -> CostResult<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    wtr.write_record(fields)
        .map_err(|e| CostError::Export(format!("CSV writer error: {}", e)))
}

/// Plain amount without grouping, two decimals only when fractional
fn amount_csv(amount: Money) -> String {
    if amount.is_whole() {
        amount.units().to_string()
    } else {
        format!("{:.2}", amount.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{PendingPurchaseItem, RawExpense};
    use crate::reports::ProjectReport;
    use crate::storage::ProjectData;
    use chrono::NaiveDate;

    fn export() -> DashboardExport {
        let settings = Settings::default();
        let data = ProjectData {
            expenses: vec![
                RawExpense::new("18/09/2025", "Plumbing", "Pipes, elbows", Money::from_units(18_000)),
                RawExpense::new("19/09/2025", "Labor", "Fundi UNPAID", Money::from_units(5_000)),
            ],
            pending_purchases: vec![PendingPurchaseItem::new("Paint", "Silk", Money::from_units(3_000))],
            ..Default::default()
        };
        let report = ProjectReport::generate(&settings, &data).unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 9, 24)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        DashboardExport::build(&report, &settings, at)
    }

    #[test]
    fn test_csv_sections() {
        let mut output = Vec::new();
        export_dashboard_csv(&export(), &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        for name in [
            "# project_info",
            "# category_summary",
            "# daily_expenses",
            "# outstanding_balances",
            "# unpaid_expenses",
            "# pending_purchases",
        ] {
            assert!(csv.contains(name), "missing section {}", name);
        }
        assert!(csv.contains("total_mpesa_fees,171\n"));
        assert!(csv.contains("Plumbing,18000,171.50,18171.50,1.82"));
        assert!(csv.contains("\"Pipes, elbows\""));
        assert!(csv.contains("19/09/2025,Labor,,Fundi UNPAID,5000,,0,0,unpaid"));
    }

    #[test]
    fn test_sections_read_back() {
        let mut output = Vec::new();
        export_dashboard_csv(&export(), &mut output).unwrap();

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(output.as_slice());
        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        let expense = rows
            .iter()
            .find(|row| row.get(3) == Some("Pipes, elbows"))
            .unwrap();
        assert_eq!(expense.get(8), Some("paid"));
        assert!(rows.iter().any(|row| row.get(0) == Some("Miscellaneous & Contingency")));
    }
}
