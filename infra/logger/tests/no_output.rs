use folio_logger::{Logger, LoggerError};

#[test]
fn refuses_to_install_without_outputs() {
    let err = Logger::builder().name("folio-silent").console(false).init().expect_err("no outputs");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");
}
