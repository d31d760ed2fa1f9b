use super::*;

#[test]
fn kinds_supply_schema_extension_and_binary() {
    assert_eq!(RendererKind::Pdf.default_extension(), "pdf");
    assert_eq!(RendererKind::Image.default_extension(), "jpg");
    assert_eq!(
        RendererKind::Pdf.default_binary(),
        "/usr/local/bin/wkhtmltopdf"
    );
    assert_eq!(
        RendererKind::Image.default_binary(),
        "/usr/local/bin/wkhtmltoimage"
    );
    assert!(RendererKind::Pdf.recognized_options().contains(&"toc"));
    assert!(!RendererKind::Image.recognized_options().contains(&"toc"));
    assert!(RendererKind::Image.recognized_options().contains(&"crop-w"));
}

#[test]
fn new_generators_recognize_their_whole_schema_unset() {
    let generator = Generator::new(RendererKind::Pdf);
    assert_eq!(
        generator.options().len(),
        RendererKind::Pdf.recognized_options().len()
    );
    assert!(generator.options().iter().all(|(_, v)| v.is_unset()));
    assert_eq!(generator.timeout(), DEFAULT_TIMEOUT);
}

#[test]
fn unconfigured_generators_refuse_to_build_commands() {
    let generator = Generator::unconfigured(RendererKind::Pdf);
    let err = generator
        .get_command("http://the.url/", Path::new("/the/path"), &[])
        .unwrap_err();
    assert!(matches!(err, HtmlpressError::NotConfigured));

    let err = generator
        .generate("http://the.url/", Path::new("/the/path"), &[], false)
        .unwrap_err();
    assert!(matches!(err, HtmlpressError::NotConfigured));
}

#[test]
fn get_command_merges_overrides_in_schema_order() {
    let mut generator = Generator::unconfigured(RendererKind::Pdf);
    generator.set_binary("thebinary");
    generator.set_option("orientation", "Landscape").unwrap();

    let cmd = generator
        .get_command(
            "http://the.url/",
            Path::new("/the/path"),
            &[("grayscale", OptionValue::Flag(true))],
        )
        .unwrap();

    // Schema order, not set order: grayscale precedes orientation.
    assert_eq!(
        cmd.to_string(),
        "thebinary --grayscale --orientation 'Landscape' 'http://the.url/' '/the/path'"
    );

    // Per-call overrides never stick to the instance.
    assert_eq!(
        generator.options().get("grayscale"),
        Some(&OptionValue::Unset)
    );
}

#[test]
fn get_command_rejects_unknown_overrides() {
    let mut generator = Generator::unconfigured(RendererKind::Image);
    generator.set_binary("thebinary");
    let err = generator
        .get_command(
            "in.html",
            Path::new("out.jpg"),
            &[("toc", OptionValue::Flag(true))],
        )
        .unwrap_err();
    assert!(matches!(err, HtmlpressError::InvalidOption { ref name } if name == "toc"));
}

#[test]
fn prepare_output_rejects_directories() {
    let dir = tempfile::tempdir().unwrap();
    let err = prepare_output(dir.path(), true).unwrap_err();
    assert!(matches!(err, HtmlpressError::InvalidOutputTarget { .. }));
}

#[test]
fn prepare_output_honors_the_overwrite_policy() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");
    std::fs::write(&target, b"old").unwrap();

    let err = prepare_output(&target, false).unwrap_err();
    assert!(matches!(err, HtmlpressError::OutputExists { .. }));
    assert!(target.exists());

    prepare_output(&target, true).unwrap();
    assert!(!target.exists());
}

#[test]
fn prepare_output_creates_missing_parents() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("a").join("b").join("out.pdf");

    prepare_output(&target, false).unwrap();
    assert!(target.parent().unwrap().is_dir());
}

#[test]
fn check_output_classifies_missing_empty_and_good_files() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    let err = check_output(&target, "the command").unwrap_err();
    assert!(matches!(err, HtmlpressError::OutputMissing { ref command, .. } if command == "the command"));

    std::fs::write(&target, b"").unwrap();
    let err = check_output(&target, "the command").unwrap_err();
    assert!(matches!(err, HtmlpressError::OutputEmpty { ref command, .. } if command == "the command"));

    std::fs::write(&target, b"%PDF-1.4").unwrap();
    assert_eq!(check_output(&target, "the command").unwrap(), target);
}

#[test]
fn default_extension_is_mutable() {
    let mut generator = Generator::new(RendererKind::Image);
    assert_eq!(generator.default_extension(), "jpg");
    generator.set_default_extension("png");
    assert_eq!(generator.default_extension(), "png");
}
