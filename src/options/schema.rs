//! Recognized option names per renderer kind.
//!
//! These are the flag sets the wkhtmltopdf toolchain accepts, in declaration
//! order. Declaration order is the serialization order of the built command,
//! so entries are grouped the way the binaries document them: global options
//! first, then outline, page, header/footer and TOC options.

/// Options recognized by `wkhtmltopdf`.
pub const PDF_OPTIONS: &[&str] = &[
    // Global options
    "collate",
    "no-collate",
    "cookie-jar",
    "copies",
    "dpi",
    "extended-help",
    "grayscale",
    "image-dpi",
    "image-quality",
    "lowquality",
    "manpage",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "orientation",
    "page-height",
    "page-size",
    "page-width",
    "no-pdf-compression",
    "quiet",
    "read-args-from-stdin",
    "readme",
    "title",
    "use-xserver",
    // Outline options
    "dump-default-toc-xsl",
    "dump-outline",
    "outline",
    "no-outline",
    "outline-depth",
    // Page options
    "allow",
    "background",
    "no-background",
    "bypass-proxy-for",
    "cache-dir",
    "checkbox-checked-svg",
    "checkbox-svg",
    "cookie",
    "custom-header",
    "custom-header-propagation",
    "no-custom-header-propagation",
    "debug-javascript",
    "no-debug-javascript",
    "default-header",
    "encoding",
    "disable-external-links",
    "enable-external-links",
    "disable-forms",
    "enable-forms",
    "images",
    "no-images",
    "disable-internal-links",
    "enable-internal-links",
    "disable-javascript",
    "enable-javascript",
    "javascript-delay",
    "load-error-handling",
    "load-media-error-handling",
    "disable-local-file-access",
    "enable-local-file-access",
    "minimum-font-size",
    "exclude-from-outline",
    "include-in-outline",
    "page-offset",
    "password",
    "disable-plugins",
    "enable-plugins",
    "post",
    "post-file",
    "print-media-type",
    "no-print-media-type",
    "proxy",
    "radiobutton-checked-svg",
    "radiobutton-svg",
    "run-script",
    "disable-smart-shrinking",
    "enable-smart-shrinking",
    "stop-slow-scripts",
    "no-stop-slow-scripts",
    "user-style-sheet",
    "username",
    "viewport-size",
    "window-status",
    "zoom",
    // Header and footer options
    "footer-center",
    "footer-font-name",
    "footer-font-size",
    "footer-html",
    "footer-left",
    "footer-line",
    "no-footer-line",
    "footer-right",
    "footer-spacing",
    "header-center",
    "header-font-name",
    "header-font-size",
    "header-html",
    "header-left",
    "header-line",
    "no-header-line",
    "header-right",
    "header-spacing",
    "replace",
    // TOC and cover options
    "cover",
    "toc",
    "toc-depth",
    "toc-font-name",
    "toc-l1-font-size",
    "toc-header-text",
    "toc-header-font-name",
    "toc-header-font-size",
    "toc-level-indentation",
    "disable-toc-links",
    "toc-text-size-shrink",
    "xsl-style-sheet",
];

/// Options recognized by `wkhtmltoimage`.
pub const IMAGE_OPTIONS: &[&str] = &[
    "allow",
    "bypass-proxy-for",
    "cache-dir",
    "checkbox-checked-svg",
    "checkbox-svg",
    "cookie",
    "cookie-jar",
    "crop-h",
    "crop-w",
    "crop-x",
    "crop-y",
    "custom-header",
    "custom-header-propagation",
    "no-custom-header-propagation",
    "debug-javascript",
    "no-debug-javascript",
    "encoding",
    "format",
    "height",
    "images",
    "no-images",
    "disable-javascript",
    "enable-javascript",
    "javascript-delay",
    "load-error-handling",
    "load-media-error-handling",
    "disable-local-file-access",
    "enable-local-file-access",
    "minimum-font-size",
    "password",
    "disable-plugins",
    "enable-plugins",
    "post",
    "post-file",
    "proxy",
    "quality",
    "quiet",
    "radiobutton-checked-svg",
    "radiobutton-svg",
    "run-script",
    "disable-smart-width",
    "enable-smart-width",
    "stop-slow-scripts",
    "no-stop-slow-scripts",
    "transparent",
    "use-xserver",
    "user-style-sheet",
    "username",
    "width",
    "window-status",
    "zoom",
];
