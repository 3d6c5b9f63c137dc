use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GgxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GgxError::config("x").to_string().contains("config error:"));
    assert!(GgxError::format("x").to_string().contains("format error:"));
}

#[test]
fn io_error_names_the_path() {
    let err = GgxError::io(
        "env/sky.dds",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    let msg = err.to_string();
    assert!(msg.contains("sky.dds"));
    assert!(msg.contains("missing"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GgxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
