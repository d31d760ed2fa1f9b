use super::*;

#[test]
fn process_failures_carry_full_diagnostics() {
    let err = HtmlpressError::ProcessFailed {
        code: Some(1),
        stdout: "page 1 of 1".into(),
        stderr: "boom".into(),
        command: "thebinary 'http://the.url/' '/the/path'".into(),
        timed_out: false,
    };
    let text = err.to_string();
    assert!(text.contains("status code 1"));
    assert!(text.contains("boom"));
    assert!(text.contains("page 1 of 1"));
    assert!(text.contains("thebinary 'http://the.url/' '/the/path'"));
}

#[test]
fn timed_out_failures_say_so() {
    let err = HtmlpressError::ProcessFailed {
        code: None,
        stdout: String::new(),
        stderr: String::new(),
        command: "thebinary 'in' 'out'".into(),
        timed_out: true,
    };
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn signal_deaths_have_no_status_code() {
    let err = HtmlpressError::ProcessFailed {
        code: None,
        stdout: String::new(),
        stderr: String::new(),
        command: "thebinary 'in' 'out'".into(),
        timed_out: false,
    };
    assert!(err.to_string().contains("killed by signal"));
}

#[test]
fn invalid_option_names_the_option() {
    assert_eq!(
        HtmlpressError::invalid_option("foo").to_string(),
        "the option 'foo' does not exist"
    );
}

#[test]
fn output_checks_carry_the_command() {
    let missing = HtmlpressError::OutputMissing {
        path: "/the/path".into(),
        command: "thebinary 'in' '/the/path'".into(),
    };
    assert!(missing.to_string().contains("was not created"));
    assert!(missing.to_string().contains("thebinary 'in' '/the/path'"));

    let empty = HtmlpressError::OutputEmpty {
        path: "/the/path".into(),
        command: "thebinary 'in' '/the/path'".into(),
    };
    assert!(empty.to_string().contains("is empty"));
    assert!(empty.to_string().contains("thebinary 'in' '/the/path'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = HtmlpressError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}
