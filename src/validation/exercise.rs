use url::Url;

use super::{check_text, FieldPath, FieldViolation, Violations};
use crate::models::exercise::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
use crate::models::{ExerciseEntry, ImageField};

const VIDEO_SCHEMES: &[&str] = &["http", "https"];

/// Validate a candidate catalog entry, returning every violation found.
pub fn validate_exercise(entry: &ExerciseEntry) -> Vec<FieldViolation> {
    let mut violations = Violations::new();
    let root = FieldPath::root();

    check_text(
        &mut violations,
        root.field("name"),
        "Name",
        entry.name.as_deref(),
        NAME_MIN_CHARS,
        NAME_MAX_CHARS,
    );
    check_text(
        &mut violations,
        root.field("description"),
        "Description",
        entry.description.as_deref(),
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    );

    if entry.difficulty_tier.is_none() {
        violations.push(
            root.field("difficultyTier"),
            "A difficulty tier must be selected",
        );
    }

    match &entry.image {
        Some(image) => check_image(&mut violations, root.field("image"), image),
        None => violations.push(root.field("image"), "Image is required"),
    }

    if let Some(video_url) = entry.demo_video_url.as_deref() {
        if !video_url.is_empty() && !is_http_url(video_url) {
            violations.push(
                root.field("demoVideoUrl"),
                "Must be a valid absolute URL (http/https)",
            );
        }
    }

    violations.into_vec()
}

fn check_image(violations: &mut Violations, path: FieldPath, image: &ImageField) {
    match &image.asset {
        Some(asset) if asset.is_well_formed() => {}
        Some(_) => violations.push(path.field("asset"), "Image asset reference is malformed"),
        None => violations.push(path.field("asset"), "Image file is required"),
    }

    if image.alt.as_deref().map_or(true, str::is_empty) {
        violations.push(
            path.field("alt"),
            "Alternative text is required for accessibility",
        );
    }
}

/// Absolute URL with an http or https scheme and a host.
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => VIDEO_SCHEMES.contains(&url.scheme()) && url.host_str().is_some(),
        Err(_) => false,
    }
}
