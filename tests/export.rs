#[cfg(test)]
mod tests {
    use fitdays::libs::client::{Client, ClientStatus};
    use fitdays::libs::date::parse_date;
    use fitdays::libs::export::{ExportClient, ExportFormat, Exporter};
    use fitdays::libs::pause::PauseRecord;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        clients: Vec<Client>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let anna = Client {
                id: 1,
                name: "Anna".to_string(),
                phone: Some("+100".to_string()),
                start_date: "01/01/2024".to_string(),
                package_days: 30,
                end_date: "30/01/2024".to_string(),
                status: ClientStatus::Active,
                package_number: 2,
                stopped_on: None,
                pauses: vec![PauseRecord {
                    id: 1,
                    paused_at: "05/01/2024".to_string(),
                    resumed_at: Some("10/01/2024".to_string()),
                }],
            };
            let broken = Client {
                id: 2,
                name: "Boris".to_string(),
                start_date: "not a date".to_string(),
                ..anna.clone()
            };
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                clients: vec![anna, broken],
            }
        }
    }

    impl ExportTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, None, parse_date("05/03/2024").unwrap());
        assert_eq!(exporter.output_path(), PathBuf::from("fitdays_export_20240305.json").as_path());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.path("clients.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()), parse_date("31/01/2024").unwrap());
        let count = exporter.export_clients(&ctx.clients, parse_date("31/01/2024").unwrap()).unwrap();
        assert_eq!(count, 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ExportClient> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Anna");
        assert_eq!(rows[0].package_number, 2);
        assert_eq!(rows[0].current_day, 26);
        assert_eq!(rows[0].days_remaining, 5);
        assert_eq!(rows[0].total_paused_days, 5);
        assert_eq!(rows[0].expected_end_date, "04/02/2024");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.path("clients.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()), parse_date("31/01/2024").unwrap());
        exporter.export_clients(&ctx.clients, parse_date("31/01/2024").unwrap()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["status"], "active");
        assert_eq!(rows[0]["progress_percent"], 83);
        assert_eq!(rows[0]["original_end_date"], "30/01/2024");
    }
}
