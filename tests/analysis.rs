#[cfg(test)]
mod tests {
    use fitdays::libs::analysis::{analyze, should_complete};
    use fitdays::libs::client::{ClientSnapshot, ClientStatus};
    use fitdays::libs::date::{add_days, parse_date, CalendarDate};
    use fitdays::libs::pause::PauseInterval;

    fn date(text: &str) -> CalendarDate {
        parse_date(text).unwrap()
    }

    fn snapshot(start: &str, package_days: i64, status: ClientStatus, pauses: Vec<PauseInterval>) -> ClientSnapshot {
        let start_date = date(start);
        ClientSnapshot {
            start_date,
            package_days,
            end_date: add_days(start_date, package_days - 1),
            status,
            pause_history: pauses,
            stopped_on: None,
        }
    }

    #[test]
    fn test_pause_extends_package() {
        let pauses = vec![PauseInterval::closed(date("05/01/2024"), date("10/01/2024"))];
        let client = snapshot("01/01/2024", 30, ClientStatus::Active, pauses);
        let analysis = analyze(&client, date("31/01/2024"));

        assert_eq!(analysis.days_elapsed, 30);
        assert_eq!(analysis.total_paused_days, 5);
        assert_eq!(analysis.effective_days_used, 25);
        assert_eq!(analysis.current_day, 26);
        assert_eq!(analysis.days_remaining, 5);
        assert_eq!(analysis.progress_percent, 83);
        assert!(!analysis.is_completed);
        assert!(analysis.is_active);
        assert_eq!(analysis.original_end_date, date("30/01/2024"));
        assert_eq!(analysis.expected_end_date, date("04/02/2024"));
    }

    #[test]
    fn test_completion_boundary() {
        let client = snapshot("01/01/2024", 30, ClientStatus::Active, Vec::new());

        let last_day = analyze(&client, date("30/01/2024"));
        assert_eq!(last_day.current_day, 30);
        assert_eq!(last_day.days_remaining, 1);
        assert!(!last_day.is_completed);

        let after = analyze(&client, date("31/01/2024"));
        assert_eq!(after.current_day, 30);
        assert_eq!(after.days_remaining, 0);
        assert_eq!(after.progress_percent, 100);
        assert!(after.is_completed);
    }

    #[test]
    fn test_same_day_is_day_one() {
        let client = snapshot("19/10/2026", 30, ClientStatus::Active, Vec::new());
        let analysis = analyze(&client, date("19/10/2026"));
        assert_eq!(analysis.current_day, 1);
        assert_eq!(analysis.days_elapsed, 0);
        assert_eq!(analysis.days_remaining, 30);
        assert_eq!(analysis.progress_percent, 0);
        assert_eq!(analysis.status_text(), "Day 1 of 30, 30 days left");
    }

    #[test]
    fn test_future_start() {
        let client = snapshot("10/01/2024", 30, ClientStatus::Active, Vec::new());
        let analysis = analyze(&client, date("01/01/2024"));
        assert_eq!(analysis.days_elapsed, 0);
        assert_eq!(analysis.effective_days_used, 0);
        assert_eq!(analysis.current_day, 1);
        assert_eq!(analysis.days_remaining, 30);
    }

    #[test]
    fn test_open_pause_counts_up_to_now() {
        let pauses = vec![PauseInterval::open(date("11/01/2024"))];
        let client = snapshot("01/01/2024", 30, ClientStatus::Paused, pauses);
        let analysis = analyze(&client, date("21/01/2024"));
        assert_eq!(analysis.total_paused_days, 10);
        assert_eq!(analysis.effective_days_used, 10);
        assert_eq!(analysis.current_day, 11);
        assert!(analysis.is_paused);
        assert_eq!(analysis.status_text(), "Paused on day 11 of 30");
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let pauses = vec![PauseInterval::closed(date("05/01/2024"), date("10/01/2024"))];
        let client = snapshot("01/01/2024", 30, ClientStatus::Active, pauses);
        let now = date("20/01/2024");
        assert_eq!(analyze(&client, now), analyze(&client, now));
    }

    #[test]
    fn test_zero_day_package() {
        let active = snapshot("01/01/2024", 0, ClientStatus::Active, Vec::new());
        let analysis = analyze(&active, date("05/01/2024"));
        assert_eq!(analysis.progress_percent, 0);
        assert_eq!(analysis.current_day, 1);
        assert!(analysis.is_completed);

        let stopped = snapshot("01/01/2024", 0, ClientStatus::Stopped, Vec::new());
        let analysis = analyze(&stopped, date("05/01/2024"));
        assert_eq!(analysis.current_day, 0);
        assert_eq!(analysis.progress_percent, 0);
    }

    #[test]
    fn test_status_is_reported_not_derived() {
        let client = snapshot("01/01/2024", 10, ClientStatus::Stopped, Vec::new());
        let analysis = analyze(&client, date("03/01/2024"));
        assert!(analysis.is_stopped);
        assert!(!analysis.is_active);
        assert_eq!(analysis.status, ClientStatus::Stopped);
        assert_eq!(analysis.status_text(), "Stopped on day 3 of 10");
    }

    #[test]
    fn test_should_complete() {
        let active = snapshot("01/01/2024", 10, ClientStatus::Active, Vec::new());
        assert!(!should_complete(&active, date("10/01/2024")));
        assert!(should_complete(&active, date("11/01/2024")));

        let stopped = snapshot("01/01/2024", 10, ClientStatus::Stopped, Vec::new());
        assert!(!should_complete(&stopped, date("01/02/2024")));

        let completed = snapshot("01/01/2024", 10, ClientStatus::Completed, Vec::new());
        assert!(!should_complete(&completed, date("01/02/2024")));
    }

    #[test]
    fn test_status_text() {
        let client = snapshot("01/01/2024", 10, ClientStatus::Active, Vec::new());
        assert_eq!(analyze(&client, date("05/01/2024")).status_text(), "Day 5 of 10, 6 days left");
        assert_eq!(analyze(&client, date("10/01/2024")).status_text(), "Day 10 of 10, 1 day left");
        assert_eq!(analyze(&client, date("15/01/2024")).status_text(), "Package completed (10 days)");
    }
}
