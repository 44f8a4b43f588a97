#[cfg(test)]
mod tests {
    use fitdays::libs::analysis::analyze;
    use fitdays::libs::client::ClientStatus;
    use fitdays::libs::date::{parse_date, CalendarDate};
    use fitdays::libs::lifecycle::{new_package, pause, refresh, renew, resume, stop, LifecycleError};
    use fitdays::libs::pause::PauseInterval;

    fn date(text: &str) -> CalendarDate {
        parse_date(text).unwrap()
    }

    #[test]
    fn test_new_package() {
        let snapshot = new_package(date("01/01/2024"), 30).unwrap();
        assert_eq!(snapshot.status, ClientStatus::Active);
        assert_eq!(snapshot.end_date, date("30/01/2024"));
        assert!(snapshot.pause_history.is_empty());

        assert_eq!(new_package(date("01/01/2024"), 0), Err(LifecycleError::InvalidPackageDays(0)));
        assert_eq!(new_package(date("01/01/2024"), -5), Err(LifecycleError::InvalidPackageDays(-5)));
    }

    #[test]
    fn test_pause_and_resume() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();
        assert_eq!(paused.status, ClientStatus::Paused);
        assert_eq!(paused.pause_history, vec![PauseInterval::open(date("05/01/2024"))]);

        let resumed = resume(&paused, date("10/01/2024"), date("10/01/2024")).unwrap();
        assert!(!resumed.completed);
        assert_eq!(resumed.snapshot.status, ClientStatus::Active);
        assert_eq!(resumed.snapshot.pause_history, vec![PauseInterval::closed(date("05/01/2024"), date("10/01/2024"))]);
        assert_eq!(resumed.snapshot.end_date, date("04/02/2024"));
    }

    #[test]
    fn test_invalid_transitions() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();

        assert_eq!(
            pause(&paused, date("06/01/2024")),
            Err(LifecycleError::InvalidTransition { action: "pause", status: ClientStatus::Paused })
        );
        assert!(matches!(
            resume(&active, date("06/01/2024"), date("06/01/2024")),
            Err(LifecycleError::InvalidTransition { action: "resume", .. })
        ));

        let stopped = stop(&active, date("06/01/2024")).unwrap();
        assert!(matches!(stop(&stopped, date("07/01/2024")), Err(LifecycleError::InvalidTransition { .. })));
    }

    #[test]
    fn test_resume_before_pause_is_rejected() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();
        assert_eq!(
            resume(&paused, date("04/01/2024"), date("10/01/2024")).map(|t| t.completed),
            Err(LifecycleError::ResumeBeforePause { paused: date("05/01/2024"), resumed: date("04/01/2024") })
        );
    }

    #[test]
    fn test_resume_completes_finished_package() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();
        let resumed = resume(&paused, date("10/01/2024"), date("05/02/2024")).unwrap();
        assert!(resumed.completed);
        assert_eq!(resumed.snapshot.status, ClientStatus::Completed);
    }

    #[test]
    fn test_stop_closes_open_pause() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();
        let stopped = stop(&paused, date("08/01/2024")).unwrap();
        assert_eq!(stopped.status, ClientStatus::Stopped);
        assert_eq!(stopped.pause_history, vec![PauseInterval::closed(date("05/01/2024"), date("08/01/2024"))]);
    }

    #[test]
    fn test_renew_archives_current_package() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();

        let (archived, fresh) = renew(&paused, 1, date("01/02/2024"), 20, date("20/01/2024")).unwrap();
        assert_eq!(archived.number, 1);
        assert_eq!(archived.status, ClientStatus::Stopped);
        assert_eq!(archived.stopped_on, Some(date("20/01/2024")));
        assert_eq!(archived.pause_history, paused.pause_history);
        assert_eq!(fresh.status, ClientStatus::Active);
        assert_eq!(fresh.package_days, 20);
        assert!(fresh.pause_history.is_empty());

        assert!(renew(&paused, 1, date("01/02/2024"), 0, date("20/01/2024")).is_err());
    }

    #[test]
    fn test_renew_archives_with_terminal_status() {
        let active = new_package(date("01/01/2024"), 30).unwrap();

        let (finished, _) = renew(&active, 1, date("31/01/2024"), 30, date("31/01/2024")).unwrap();
        assert_eq!(finished.status, ClientStatus::Completed);
        assert_eq!(finished.stopped_on, None);

        let (early, _) = renew(&active, 1, date("20/01/2024"), 30, date("20/01/2024")).unwrap();
        assert_eq!(early.status, ClientStatus::Stopped);
        let analysis = analyze(&early.as_client_snapshot(), date("01/03/2024"));
        assert_eq!(analysis.status_text(), "Stopped on day 20 of 30");

        let stopped = stop(&active, date("05/01/2024")).unwrap();
        let (kept, _) = renew(&stopped, 1, date("20/01/2024"), 30, date("20/01/2024")).unwrap();
        assert_eq!(kept.status, ClientStatus::Stopped);
        assert_eq!(kept.stopped_on, Some(date("05/01/2024")));
    }

    #[test]
    fn test_stopped_package_is_frozen_on_stop_day() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let stopped = stop(&active, date("05/01/2024")).unwrap();
        assert_eq!(stopped.stopped_on, Some(date("05/01/2024")));

        let on_stop = analyze(&stopped, date("05/01/2024"));
        let later = analyze(&stopped, date("20/01/2024"));
        assert_eq!(on_stop.current_day, 5);
        assert_eq!(later.current_day, 5);
        assert_eq!(later.days_remaining, on_stop.days_remaining);
        assert_eq!(later.status_text(), "Stopped on day 5 of 30");

        // an earlier `now` is still honoured
        assert_eq!(analyze(&stopped, date("03/01/2024")).current_day, 3);
    }

    #[test]
    fn test_pause_before_start_is_rejected() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        assert_eq!(
            pause(&active, date("01/12/2023")),
            Err(LifecycleError::PauseBeforeStart { start: date("01/01/2024"), paused: date("01/12/2023") })
        );
        assert!(pause(&active, date("01/01/2024")).is_ok());
    }

    #[test]
    fn test_pause_inside_earlier_pause_is_rejected() {
        let active = new_package(date("01/01/2024"), 30).unwrap();
        let paused = pause(&active, date("05/01/2024")).unwrap();
        let resumed = resume(&paused, date("10/01/2024"), date("10/01/2024")).unwrap().snapshot;

        assert_eq!(
            pause(&resumed, date("06/01/2024")),
            Err(LifecycleError::PauseOverlapsPrevious { resumed: date("10/01/2024"), paused: date("06/01/2024") })
        );
        assert_eq!(
            pause(&resumed, date("10/01/2024")).unwrap().pause_history,
            vec![
                PauseInterval::closed(date("05/01/2024"), date("10/01/2024")),
                PauseInterval::open(date("10/01/2024")),
            ]
        );
    }

    #[test]
    fn test_refresh() {
        let active = new_package(date("01/01/2024"), 10).unwrap();
        assert!(!refresh(&active, date("10/01/2024")).completed);

        let done = refresh(&active, date("11/01/2024"));
        assert!(done.completed);
        assert_eq!(done.snapshot.status, ClientStatus::Completed);

        let stopped = stop(&active, date("03/01/2024")).unwrap();
        let still_stopped = refresh(&stopped, date("01/03/2024"));
        assert!(!still_stopped.completed);
        assert_eq!(still_stopped.snapshot.status, ClientStatus::Stopped);
    }
}
