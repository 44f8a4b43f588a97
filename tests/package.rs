#[cfg(test)]
mod tests {
    use fitdays::libs::client::{ClientSnapshot, ClientStatus};
    use fitdays::libs::date::{parse_date, CalendarDate};
    use fitdays::libs::package::{day_number_for, month_marks, DayMark, PackageSnapshot};
    use fitdays::libs::pause::PauseInterval;

    fn date(text: &str) -> CalendarDate {
        parse_date(text).unwrap()
    }

    fn package(pauses: Vec<PauseInterval>) -> PackageSnapshot {
        PackageSnapshot {
            number: 1,
            start_date: date("01/03/2024"),
            package_days: 10,
            end_date: date("10/03/2024"),
            status: ClientStatus::Completed,
            pause_history: pauses,
            stopped_on: None,
        }
    }

    #[test]
    fn test_day_number_without_pauses() {
        let empty: Vec<PauseInterval> = Vec::new();
        let start = date("01/03/2024");
        assert_eq!(day_number_for(date("01/03/2024"), start, &empty), Some(1));
        assert_eq!(day_number_for(date("10/03/2024"), start, &empty), Some(10));
        assert_eq!(day_number_for(date("28/02/2024"), start, &empty), None);
    }

    #[test]
    fn test_day_number_subtracts_resolved_pauses() {
        let pkg = package(vec![PauseInterval::closed(date("05/03/2024"), date("08/03/2024"))]);
        assert_eq!(pkg.day_number_for(date("04/03/2024")), Some(4));
        // pause not resumed yet on that date
        assert_eq!(pkg.day_number_for(date("06/03/2024")), Some(6));
        assert_eq!(pkg.day_number_for(date("08/03/2024")), Some(5));
        assert_eq!(pkg.day_number_for(date("10/03/2024")), Some(7));
    }

    #[test]
    fn test_open_pause_is_not_subtracted() {
        let pkg = package(vec![PauseInterval::open(date("05/03/2024"))]);
        assert_eq!(pkg.day_number_for(date("10/03/2024")), Some(10));
    }

    #[test]
    fn test_marks() {
        let pkg = package(vec![PauseInterval::closed(date("05/03/2024"), date("08/03/2024"))]);
        assert_eq!(pkg.mark_for(date("29/02/2024")), DayMark::BeforeStart);
        assert_eq!(pkg.mark_for(date("01/03/2024")), DayMark::Day(1));
        assert_eq!(pkg.mark_for(date("05/03/2024")), DayMark::Paused);
        assert_eq!(pkg.mark_for(date("07/03/2024")), DayMark::Paused);
        assert_eq!(pkg.mark_for(date("08/03/2024")), DayMark::Day(5));
        assert_eq!(pkg.mark_for(date("13/03/2024")), DayMark::Day(10));
        assert_eq!(pkg.mark_for(date("14/03/2024")), DayMark::AfterPackage);
    }

    #[test]
    fn test_month_marks() {
        let pkg = package(Vec::new());

        let march = pkg.month_marks(2024, 3);
        assert_eq!(march.len(), 31);
        assert_eq!(march[0], (date("01/03/2024"), DayMark::Day(1)));
        assert_eq!(march[10].1, DayMark::AfterPackage);

        let february = month_marks(2024, 2, &pkg);
        assert_eq!(february.len(), 29);
        assert!(february.iter().all(|(_, mark)| *mark == DayMark::BeforeStart));

        assert!(month_marks(2024, 13, &pkg).is_empty());
    }

    #[test]
    fn test_from_client_keeps_history() {
        let client = ClientSnapshot {
            start_date: date("01/03/2024"),
            package_days: 10,
            end_date: date("13/03/2024"),
            status: ClientStatus::Active,
            pause_history: vec![PauseInterval::closed(date("05/03/2024"), date("08/03/2024"))],
            stopped_on: None,
        };
        let pkg = PackageSnapshot::from_client(3, &client);
        assert_eq!(pkg.number, 3);
        assert_eq!(pkg.pause_history.len(), 1);
        assert_eq!(pkg.as_client_snapshot(), client);
    }
}
