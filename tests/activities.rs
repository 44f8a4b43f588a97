#[cfg(test)]
mod tests {
    use fitdays::db::activities::Activities;
    use fitdays::db::clients::{Clients, NewClient};
    use fitdays::db::db::Db;
    use fitdays::libs::date::{parse_date, CalendarDate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ActivitiesTestContext {
        _temp_dir: TempDir,
        activities: Activities,
        client_id: i64,
    }

    impl TestContext for ActivitiesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("fitdays.db");
            let mut clients = Clients::with_db(Db::open(&db_path).unwrap());
            let client_id = clients.insert(&NewClient::new("Anna", None, parse_date("01/12/2023").unwrap(), 60)).unwrap();
            ActivitiesTestContext {
                activities: Activities::with_db(Db::open(&db_path).unwrap()),
                _temp_dir: temp_dir,
                client_id,
            }
        }
    }

    fn date(text: &str) -> CalendarDate {
        parse_date(text).unwrap()
    }

    #[test_context(ActivitiesTestContext)]
    #[test]
    fn test_log_replaces_same_day(ctx: &mut ActivitiesTestContext) {
        let first = ctx.activities.log(ctx.client_id, date("02/01/2024"), "Legs", true).unwrap();
        let second = ctx.activities.log(ctx.client_id, date("02/01/2024"), "Back", false).unwrap();
        assert_eq!(first, second);

        let all = ctx.activities.fetch_for_client(ctx.client_id).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].note, "Back");
        assert!(!all[0].completed);
    }

    #[test_context(ActivitiesTestContext)]
    #[test]
    fn test_fetch_is_in_calendar_order(ctx: &mut ActivitiesTestContext) {
        ctx.activities.log(ctx.client_id, date("02/01/2024"), "Legs", true).unwrap();
        ctx.activities.log(ctx.client_id, date("15/12/2023"), "Chest", true).unwrap();
        ctx.activities.log(ctx.client_id, date("10/01/2024"), "Cardio", true).unwrap();

        let dates: Vec<String> = ctx.activities.fetch_for_client(ctx.client_id).unwrap().into_iter().map(|a| a.date).collect();
        assert_eq!(dates, vec!["15/12/2023", "02/01/2024", "10/01/2024"]);
    }

    #[test_context(ActivitiesTestContext)]
    #[test]
    fn test_fetch_range_is_inclusive(ctx: &mut ActivitiesTestContext) {
        for day in ["31/12/2023", "01/01/2024", "15/01/2024", "31/01/2024", "01/02/2024"] {
            ctx.activities.log(ctx.client_id, date(day), "Session", true).unwrap();
        }

        let january = ctx.activities.fetch_range(ctx.client_id, date("01/01/2024"), date("31/01/2024")).unwrap();
        let dates: Vec<&str> = january.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(dates, vec!["01/01/2024", "15/01/2024", "31/01/2024"]);
    }

    #[test_context(ActivitiesTestContext)]
    #[test]
    fn test_delete(ctx: &mut ActivitiesTestContext) {
        let id = ctx.activities.log(ctx.client_id, date("02/01/2024"), "Legs", true).unwrap();
        ctx.activities.delete(id).unwrap();
        assert!(ctx.activities.fetch_for_client(ctx.client_id).unwrap().is_empty());

        let error = ctx.activities.delete(id).unwrap_err();
        assert!(error.to_string().contains(&format!("Activity with ID {} not found", id)));
    }

    #[test_context(ActivitiesTestContext)]
    #[test]
    fn test_log_requires_existing_client(ctx: &mut ActivitiesTestContext) {
        assert!(ctx.activities.log(ctx.client_id + 1, date("02/01/2024"), "Legs", true).is_err());
    }
}
