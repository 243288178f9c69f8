use async_trait::async_trait;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::sync::Arc;

use crate::commissions::commissions_model::NewCommissionRecord;
use crate::commissions::commissions_traits::CommissionRepositoryTrait;
use crate::constants::RECORD_STATUS_OPEN;
use crate::errors::{Error, Result};
use crate::import::import_model::{CommissionImport, RawImportRow};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Trait for spreadsheet import operations
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    /// Parses the file into flagged rows. Only an unreadable file is an
    /// error; malformed row content never is.
    fn check_import(&self, file_path: &str) -> Result<Vec<CommissionImport>>;

    /// Inserts the valid rows; invalid ones are skipped.
    async fn import_commissions(&self, rows: Vec<CommissionImport>) -> Result<usize>;
}

pub struct ImportService {
    commission_repository: Arc<dyn CommissionRepositoryTrait>,
}

impl ImportService {
    pub fn new(commission_repository: Arc<dyn CommissionRepositoryTrait>) -> Self {
        Self {
            commission_repository,
        }
    }
}

/// Best-effort money/percent coercion: strips `$`, thousands separators,
/// `%` and whitespace before parsing.
fn parse_amount(raw: &Option<String>) -> Option<f64> {
    let cleaned: String = raw
        .as_deref()?
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn parse_date(raw: &Option<String>) -> Option<NaiveDate> {
    let trimmed = raw.as_deref()?.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn check_row(raw: RawImportRow, line_number: i32) -> CommissionImport {
    let client_name = raw
        .client_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let adjuster_name = raw
        .adjuster_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let signed_date = parse_date(&raw.signed_date);

    let mut error = None;
    if client_name.is_empty() {
        error = Some("Missing client name".to_string());
    } else if adjuster_name.is_empty() {
        error = Some("Missing adjuster name".to_string());
    } else if signed_date.is_none() {
        error = Some(format!(
            "Unparseable signed date: {:?}",
            raw.signed_date.as_deref().unwrap_or("")
        ));
    }

    CommissionImport {
        client_name,
        adjuster_name,
        office: raw
            .office
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string),
        signed_date,
        initial_estimate: parse_amount(&raw.initial_estimate).unwrap_or(0.0),
        revised_estimate: parse_amount(&raw.revised_estimate).unwrap_or(0.0),
        fee_percent: parse_amount(&raw.fee_percent).unwrap_or(0.0),
        split_percent: parse_amount(&raw.split_percent).unwrap_or(100.0),
        commission_percent: parse_amount(&raw.commission_percent).unwrap_or(0.0),
        is_valid: error.is_none(),
        error,
        line_number: Some(line_number),
    }
}

fn broken_row(message: String, line_number: i32) -> CommissionImport {
    CommissionImport {
        client_name: String::new(),
        adjuster_name: String::new(),
        office: None,
        signed_date: None,
        initial_estimate: 0.0,
        revised_estimate: 0.0,
        fee_percent: 0.0,
        split_percent: 100.0,
        commission_percent: 0.0,
        is_valid: false,
        error: Some(message),
        line_number: Some(line_number),
    }
}

#[async_trait]
impl ImportServiceTrait for ImportService {
    fn check_import(&self, file_path: &str) -> Result<Vec<CommissionImport>> {
        let file = File::open(file_path).map_err(|e| Error::Import(e.to_string()))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut rows: Vec<CommissionImport> = Vec::new();
        for (index, result) in rdr.deserialize::<RawImportRow>().enumerate() {
            let line_number = index as i32 + 1; // Adjust for human-readable line number
            match result {
                Ok(raw) => rows.push(check_row(raw, line_number)),
                Err(e) => rows.push(broken_row(e.to_string(), line_number)),
            }
        }

        Ok(rows)
    }

    async fn import_commissions(&self, rows: Vec<CommissionImport>) -> Result<usize> {
        let new_records: Vec<NewCommissionRecord> = rows
            .into_iter()
            .filter(|row| row.is_valid)
            .filter_map(|row| {
                let signed_date = row.signed_date?;
                Some(NewCommissionRecord {
                    id: None,
                    client_name: row.client_name,
                    adjuster_name: row.adjuster_name,
                    office: row.office,
                    salesperson_id: None,
                    signed_date,
                    initial_estimate: row.initial_estimate,
                    revised_estimate: row.revised_estimate,
                    fee_percent: row.fee_percent,
                    split_percent: row.split_percent,
                    commission_percent: row.commission_percent,
                    amount_paid: 0.0,
                    amount_received: 0.0,
                    status: RECORD_STATUS_OPEN.to_string(),
                })
            })
            .collect();

        if new_records.is_empty() {
            return Ok(0);
        }

        let inserted = self.commission_repository.insert_many(new_records)?;
        info!("Imported {} commission records", inserted);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commissions::commissions_model::CommissionRecord;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    struct MockCommissionRepository {
        inserted: Mutex<Vec<NewCommissionRecord>>,
    }

    impl MockCommissionRepository {
        fn new() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommissionRepositoryTrait for MockCommissionRepository {
        fn list(&self) -> Result<Vec<CommissionRecord>> {
            Ok(Vec::new())
        }
        fn list_for_year(&self, _year: i32) -> Result<Vec<CommissionRecord>> {
            Ok(Vec::new())
        }
        fn list_for_salesperson(&self, _salesperson_id: &str) -> Result<Vec<CommissionRecord>> {
            Ok(Vec::new())
        }
        fn get_by_id(&self, record_id: &str) -> Result<CommissionRecord> {
            Err(Error::Unexpected(format!("no record {}", record_id)))
        }
        fn insert(&self, _new_record: NewCommissionRecord) -> Result<CommissionRecord> {
            Err(Error::Unexpected("not used".to_string()))
        }
        fn insert_many(&self, new_records: Vec<NewCommissionRecord>) -> Result<usize> {
            let count = new_records.len();
            self.inserted.lock().unwrap().extend(new_records);
            Ok(count)
        }
        fn update(&self, _record: CommissionRecord) -> Result<CommissionRecord> {
            Err(Error::Unexpected("not used".to_string()))
        }
        fn delete(&self, _record_id: &str) -> Result<usize> {
            Ok(0)
        }
    }

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn service() -> (ImportService, Arc<MockCommissionRepository>) {
        let repo = Arc::new(MockCommissionRepository::new());
        (ImportService::new(repo.clone()), repo)
    }

    #[test]
    fn every_line_comes_back_flagged() {
        let csv = "\
Client Name,Adjuster,Signed Date,Initial Estimate,Revised Estimate
Acme Towers,Jane Doe,12/31/2025,\"$1,234,567.89\",\"$1,500,000.00\"
,Jane Doe,2025-01-15,100,200
Bayview HOA,Bob Roe,not-a-date,100,200
";
        let file = write_csv(csv);
        let (service, _) = service();

        let rows = service
            .check_import(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(rows.len(), 3);

        assert!(rows[0].is_valid);
        assert_eq!(rows[0].initial_estimate, 1_234_567.89);
        assert_eq!(
            rows[0].signed_date,
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );

        assert!(!rows[1].is_valid);
        assert_eq!(rows[1].error.as_deref(), Some("Missing client name"));

        assert!(!rows[2].is_valid);
        assert!(rows[2].error.as_deref().unwrap().contains("signed date"));
    }

    #[test]
    fn percent_columns_strip_symbols() {
        let csv = "\
client,adjuster,signed_date,fee_percent,commission_percent
Acme,Jane,2025-06-01,10%,20 %
";
        let file = write_csv(csv);
        let (service, _) = service();

        let rows = service
            .check_import(file.path().to_str().unwrap())
            .unwrap();
        assert!(rows[0].is_valid);
        assert_eq!(rows[0].fee_percent, 10.0);
        assert_eq!(rows[0].commission_percent, 20.0);
        // Split was absent and falls back to a full split.
        assert_eq!(rows[0].split_percent, 100.0);
    }

    #[test]
    fn missing_file_is_an_import_error() {
        let (service, _) = service();
        assert!(matches!(
            service.check_import("/does/not/exist.csv"),
            Err(Error::Import(_))
        ));
    }

    #[tokio::test]
    async fn only_valid_rows_are_inserted() {
        let csv = "\
client,adjuster,signed_date,initial_estimate,revised_estimate
Acme,Jane,2025-06-01,100000,150000
,Jane,2025-06-01,1,1
Beta,Bob,2025-07-01,200000,180000
";
        let file = write_csv(csv);
        let (service, repo) = service();

        let rows = service
            .check_import(file.path().to_str().unwrap())
            .unwrap();
        let imported = service.import_commissions(rows).await.unwrap();

        assert_eq!(imported, 2);
        let inserted = repo.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].client_name, "Acme");
        assert_eq!(inserted[1].revised_estimate, 180_000.0);
    }
}
