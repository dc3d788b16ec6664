use chrono::TimeDelta;
use iso_duration::{Duration, DurationError, DurationForm, ErrorKind};

#[test]
fn test_from_string() {
    // bad format
    let err = Duration::from_string("asdf").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadFormat);

    // month
    let err = Duration::from_string("P1M").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMonth);

    // full string
    let dur = Duration::from_string("P1Y2DT3H4M5S").unwrap();
    assert_eq!(dur.years, 1);
    assert_eq!(dur.days, 2);
    assert_eq!(dur.hours, 3);
    assert_eq!(dur.minutes, 4);
    assert_eq!(dur.seconds, 5.0);

    // week string
    let dur = Duration::from_string("P1W").unwrap();
    assert_eq!(dur.weeks, 1);
    assert_eq!(dur.form(), DurationForm::Weeks(1));
}

#[test]
fn test_string() {
    assert_eq!(Duration::default().to_string(), "P");

    let d = Duration {
        years: 1,
        days: 2,
        ..Default::default()
    };
    assert_eq!(d.to_string(), "P1Y2D");

    let d = Duration {
        hours: 1,
        minutes: 2,
        seconds: 3.0,
        ..Default::default()
    };
    assert_eq!(d.to_string(), "PT1H2M3S");

    let d = Duration {
        years: 1,
        days: 2,
        hours: 3,
        minutes: 4,
        seconds: 5.0,
        ..Default::default()
    };
    assert_eq!(d.to_string(), "P1Y2DT3H4M5S");

    let d = Duration {
        weeks: 1,
        ..Default::default()
    };
    assert_eq!(d.to_string(), "P1W");
}

#[test]
fn test_to_duration() {
    let d = Duration {
        years: 1,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::hours(24 * 365));

    let d = Duration {
        weeks: 1,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::hours(24 * 7));

    let d = Duration {
        days: 1,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::hours(24));

    let d = Duration {
        hours: 1,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::hours(1));

    let d = Duration {
        minutes: 1,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::minutes(1));

    let d = Duration {
        seconds: 1.0,
        ..Default::default()
    };
    assert_eq!(d.to_duration(), TimeDelta::seconds(1));
}

#[test]
fn test_parsed_values_round_trip() {
    let inputs = [
        "P",
        "P1W",
        "P52W",
        "P1Y",
        "P2D",
        "P1Y2D",
        "PT1H",
        "PT90M",
        "PT0.5S",
        "PT1,25S",
        "P1DT12H",
        "P1Y2DT3H4M5S",
        "P10YT0.001S",
        "P4294967295Y",
    ];

    for input in inputs {
        let parsed = Duration::from_string(input).unwrap();
        let reparsed = Duration::from_string(&parsed.to_string()).unwrap();
        assert_eq!(parsed, reparsed, "round trip failed for {}", input);
    }
}

#[test]
fn test_canonical_form_drops_zero_designators() {
    let d: Duration = "P0Y3DT0H5M".parse().unwrap();
    assert_eq!(d.to_string(), "P3DT5M");
    assert!("P0D".parse::<Duration>().unwrap().is_zero());
}

#[test]
fn test_errors_carry_input() {
    match Duration::from_string("P1Y1M") {
        Err(DurationError::NoMonth { input }) => assert_eq!(input, "P1Y1M"),
        other => panic!("expected NoMonth, got {:?}", other),
    }
}

#[test]
fn test_parse_from_many_threads() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("P{}DT{}H", i + 1, i);
                Duration::from_string(&text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let d = handle.join().unwrap();
        assert_eq!(d.days, i as u32 + 1);
        assert_eq!(d.hours, i as u32);
    }
}
