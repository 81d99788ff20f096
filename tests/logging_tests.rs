use pagebrief::setup_logging;

#[test]
fn test_logging_setup_is_idempotent() {
    // try_init backed, so repeated calls must not panic
    setup_logging();
    setup_logging();
}
