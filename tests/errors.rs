use rillet::*;

#[test]
fn error_messages() {
    assert_eq!(
        StreamError::unexpected_empty("Opt::get").to_string(),
        "unexpected empty value: Opt::get"
    );
    assert_eq!(
        StreamError::duplicate_key(&1, &"x", &"y").to_string(),
        "duplicate values found for key '1' - ['\"x\"', '\"y\"']"
    );
    assert_eq!(
        StreamError::recovered("boom").to_string(),
        "recovered from panic: boom"
    );
}

#[test]
fn errors_convert_into_anyhow() {
    fn lookup() -> anyhow::Result<i32> {
        Ok(Opt::<i32>::empty().try_get()?)
    }
    let err = lookup().unwrap_err();
    assert_eq!(
        err.downcast_ref::<StreamError>(),
        Some(&StreamError::unexpected_empty("Opt::try_get"))
    );
}

#[test]
#[should_panic(expected = "unexpected empty value")]
fn opt_get_panics_with_error_message() {
    let _ = Opt::<u8>::empty().get();
}
