//! DOM ids, event names and wiring constants for the web front-end.

// Element ids the page markup provides
pub const SKETCH_CANVAS_ID: &str = "sketch-canvas";
pub const TRAIL_CONTAINER_ID: &str = "cocktail-reveal";
pub const AGE_OVERLAY_ID: &str = "age-overlay";
pub const AGE_ENTER_ID: &str = "age-enter";
pub const AGE_EXIT_ID: &str = "age-exit";
pub const PRELOAD_OVERLAY_ID: &str = "preload-overlay";
pub const PRELOAD_PERCENT_ID: &str = "preload-percent";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";

// Contact form field ids, in payload order
pub const CONTACT_FIELD_IDS: [&str; 7] = [
    "contact-first-name",
    "contact-last-name",
    "contact-company",
    "contact-position",
    "contact-phone",
    "contact-email",
    "contact-message",
];

// Session collaborators
pub const AGE_STORAGE_KEY: &str = "mundus-age-verified";
pub const ENTERED_EVENT: &str = "mundus-entered";
pub const PRELOAD_COMPLETE_EVENT: &str = "mundus-preload-complete";

pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const AGE_EXIT_URL: &str = "https://www.google.com";

// The animated pipeline needs a fine pointer and a reasonably wide viewport
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

// Scroll FX easing, standing in for the tween library upstream of us
pub const SKETCH_FX_TRANSITION: &str = "transform 0.5s ease-out, filter 0.5s ease-out";
