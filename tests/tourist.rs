use tourbook::{parse_days, parse_passport_code, parse_surname, RecordError, Tourist};

#[test]
fn tourist_validation() {
    assert_eq!(parse_surname("  Smith  \n"), Ok("Smith".to_string()));
    assert_eq!(parse_surname("Van Dyke"), Ok("Van".to_string()));
    assert_eq!(parse_surname(" \n"), Err(RecordError::EmptySurname));

    assert_eq!(parse_passport_code("42\n"), Ok(42));
    assert_eq!(
        parse_passport_code("0"),
        Err(RecordError::NonPositivePassport(0))
    );
    assert_eq!(
        parse_passport_code("x1"),
        Err(RecordError::not_a_number("passport code", "x1"))
    );

    assert_eq!(
        parse_passport_code("5000000000"),
        Err(RecordError::out_of_range("passport code", 5_000_000_000))
    );

    assert_eq!(parse_days("0"), Ok(0));
    assert_eq!(
        parse_days("4294967296"),
        Err(RecordError::out_of_range("days", 4_294_967_296))
    );
    assert_eq!(parse_days("-3"), Err(RecordError::NegativeDays(-3)));
    assert!(parse_days("2.5").is_err());
}

#[test]
fn tourist_new_checks_every_field() {
    let tourist = Tourist::new("Lee", 3, 10).unwrap();
    assert_eq!(tourist.surname, "Lee");
    assert_eq!(tourist.passport_code, 3);
    assert_eq!(tourist.days_f64(), 10.0);

    assert_eq!(Tourist::new("", 3, 10), Err(RecordError::EmptySurname));
    assert_eq!(
        Tourist::new("Lee", -1, 10),
        Err(RecordError::NonPositivePassport(-1))
    );
    assert_eq!(Tourist::new("Lee", 3, -1), Err(RecordError::NegativeDays(-1)));
}

#[test]
fn tourist_error_messages() {
    assert_eq!(
        RecordError::NonPositivePassport(0).to_string(),
        "passport code must be greater than 0, found 0"
    );
    assert_eq!(
        RecordError::not_a_number("days", "abc").to_string(),
        "days expects a whole number, found 'abc'"
    );
    assert_eq!(
        RecordError::out_of_range("passport code", 5_000_000_000).to_string(),
        "passport code is too large, found 5000000000"
    );
}
