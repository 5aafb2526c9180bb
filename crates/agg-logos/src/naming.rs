//! Deterministic logo file names, best-effort source domains, and canonical
//! logo references.

use std::path::{Component, Path};
use std::sync::LazyLock;

use agg_core::{AGENT_CATEGORY, LOGO_PREFIX, Record};
use regex::Regex;

/// Extension given to every derived logo file name.
pub const LOGO_EXTENSION: &str = "png";

/// Ordered keyword → domain overrides for well-known AI vendors.
const DOMAIN_OVERRIDES: &[(&[&str], &str)] = &[
    (&["openai", "gpt"], "openai.com"),
    (&["anthropic", "claude"], "anthropic.com"),
    (&["azure", "microsoft"], "microsoft.com"),
    (&["aws", "amazon"], "aws.amazon.com"),
    (&["google"], "google.com"),
];

static NOISE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("inc|corp|ltd|llc|ai|tech|technologies|agent|assistant")
        .expect("noise word pattern should compile")
});

/// Lowercase, non-alphanumerics to `-`, runs collapsed, edges trimmed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// True when `id` names exactly one plain entry inside a directory.
fn is_plain_file_stem(id: &str) -> bool {
    if id.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// File name for a company's logo.
///
/// The id is used verbatim when it is a plain file stem, so distinct ids
/// give distinct names. An id that could leave the logo directory (`/`, `\`,
/// `..`) is slugified instead. Without a usable id the slugified name
/// is used, and a name with no usable characters becomes `unnamed`.
#[must_use]
pub fn logo_filename(name: &str, id: Option<&str>) -> String {
    let stem = match id.filter(|id| !id.is_empty()) {
        Some(id) if is_plain_file_stem(id) => id.to_string(),
        Some(id) => {
            let slug = slugify(id);
            if slug.is_empty() { slugify(name) } else { slug }
        }
        None => slugify(name),
    };
    let stem = if stem.is_empty() { "unnamed".to_string() } else { stem };
    format!("{stem}.{LOGO_EXTENSION}")
}

/// [`logo_filename`] for a record.
#[must_use]
pub fn record_logo_filename(record: &Record) -> String {
    logo_filename(record.name().unwrap_or_default(), record.id().as_deref())
}

/// Best-guess domain to query logo providers with.
///
/// 1. host of `url` without a leading `www.`, when it parses;
/// 2. the first keyword override matching the lowercased name;
/// 3. the name with non-alphanumerics and corporate noise words removed,
///    plus `.com`.
///
/// Returns `None` only when nothing at all can be derived.
#[must_use]
pub fn extract_domain(url: Option<&str>, name: &str) -> Option<String> {
    if let Some(url) = url.filter(|url| !url.is_empty() && !url.starts_with('/')) {
        match reqwest::Url::parse(url) {
            Ok(parsed) => {
                if let Some(host) = parsed.host_str() {
                    let host = host.strip_prefix("www.").unwrap_or(host);
                    return Some(host.to_string());
                }
            }
            Err(error) => tracing::warn!(company = name, url, %error, "invalid company url"),
        }
    }

    let lowered = name.to_lowercase();
    for (keywords, domain) in DOMAIN_OVERRIDES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some((*domain).to_string());
        }
    }

    let compact: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect();
    let stripped = NOISE_WORDS.replace_all(&compact, "");
    let stem = if stripped.is_empty() {
        compact.as_str()
    } else {
        stripped.as_ref()
    };
    if stem.is_empty() {
        None
    } else {
        Some(format!("{stem}.com"))
    }
}

/// Coerce a logo reference into `images/logos/<name>`.
///
/// An empty reference becomes `placeholder`. Idempotent.
#[must_use]
pub fn normalize_logo_path(path: &str, placeholder: &str) -> String {
    if path.is_empty() {
        return format!("{LOGO_PREFIX}{placeholder}");
    }
    let clean = path.strip_prefix('/').unwrap_or(path);
    if clean.starts_with(LOGO_PREFIX) {
        clean.to_string()
    } else {
        format!("{LOGO_PREFIX}{clean}")
    }
}

/// Reference to a file inside the logo directory.
#[must_use]
pub fn logo_reference(filename: &str) -> String {
    format!("{LOGO_PREFIX}{filename}")
}

#[must_use]
pub fn is_placeholder(reference: &str) -> bool {
    reference.contains("placeholder")
}

/// Final path component of a logo reference.
#[must_use]
pub fn logo_basename(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Agents are not real companies and never get a brand logo.
#[must_use]
pub fn is_agent(record: &Record) -> bool {
    record.category() == Some(AGENT_CATEGORY)
        || record
            .name()
            .is_some_and(|name| name.to_lowercase().contains("agent"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("OpenAI", Some("openai"), "openai.png")]
    #[case("Amazon Web Services", Some("aws"), "aws.png")]
    #[case("Microsoft Azure AI", None, "microsoft-azure-ai.png")]
    #[case("  Hello,  World!! ", None, "hello-world.png")]
    #[case("Google Cloud AI", Some("google-cloud-ai"), "google-cloud-ai.png")]
    #[case("!!!", None, "unnamed.png")]
    #[case("Acme", Some(""), "acme.png")]
    #[case("Escaped Co", Some("../../x"), "x.png")]
    #[case("Nested", Some("a/b"), "a-b.png")]
    #[case("Backslash", Some("a\\b"), "a-b.png")]
    #[case("Dots Only", Some(".."), "dots-only.png")]
    #[case("Current Dir", Some("."), "current-dir.png")]
    fn derives_filenames(#[case] name: &str, #[case] id: Option<&str>, #[case] expected: &str) {
        assert_eq!(logo_filename(name, id), expected);
    }

    #[test]
    fn distinct_ids_give_distinct_filenames() {
        let ids = ["openai", "OpenAI", "open-ai", "openai2"];
        let names: std::collections::HashSet<String> = ids
            .iter()
            .map(|id| logo_filename("Same Name", Some(id)))
            .collect();
        assert_eq!(names.len(), ids.len());
        assert_eq!(
            logo_filename("Same Name", Some("openai")),
            logo_filename("Other", Some("openai"))
        );
    }

    #[rstest]
    #[case(Some("https://openai.com"), "OpenAI", "openai.com")]
    #[case(Some("https://www.microsoft.com"), "Microsoft", "microsoft.com")]
    #[case(Some("https://www.crowdstrike.com/"), "CrowdStrike", "crowdstrike.com")]
    #[case(Some("not-a-url"), "Invalid URL", "invalidurl.com")]
    #[case(None, "DataDog Inc.", "datadog.com")]
    #[case(Some("/relative/path"), "Claude Helper", "anthropic.com")]
    #[case(None, "ChatGPT Enterprise", "openai.com")]
    #[case(None, "Amazon Bedrock", "aws.amazon.com")]
    #[case(None, "Google Gemini", "google.com")]
    fn extracts_domains(#[case] url: Option<&str>, #[case] name: &str, #[case] expected: &str) {
        assert_eq!(extract_domain(url, name).as_deref(), Some(expected));
    }

    #[test]
    fn keyword_override_order_wins() {
        // "gpt" (OpenAI) is listed before "azure" (Microsoft).
        assert_eq!(
            extract_domain(None, "Azure GPT Service").as_deref(),
            Some("openai.com")
        );
    }

    #[test]
    fn noise_only_name_keeps_compact_form() {
        assert_eq!(extract_domain(None, "AI").as_deref(), Some("ai.com"));
        assert!(extract_domain(None, "---").is_none());
    }

    #[rstest]
    #[case("/images/logos/aws-ai.png", "images/logos/aws-ai.png")]
    #[case("images/logos/aws-ai.png", "images/logos/aws-ai.png")]
    #[case("aws-ai.png", "images/logos/aws-ai.png")]
    #[case("/aws-ai.png", "images/logos/aws-ai.png")]
    #[case("", "images/logos/placeholder.svg")]
    #[case("/", "images/logos/")]
    #[case("//double.png", "images/logos//double.png")]
    fn normalizes_paths(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_logo_path(input, "placeholder.svg"), expected);
    }

    #[test]
    fn empty_reference_uses_configured_placeholder() {
        assert_eq!(
            normalize_logo_path("", "no-logo.png"),
            "images/logos/no-logo.png"
        );
    }

    #[rstest]
    #[case("")]
    #[case("/")]
    #[case("//x")]
    #[case("images/logos")]
    #[case("/images/logos/a.png")]
    #[case("static/other.svg")]
    #[case("ünïcode.png")]
    fn normalization_is_idempotent(#[case] input: &str) {
        let once = normalize_logo_path(input, "placeholder.svg");
        assert_eq!(normalize_logo_path(&once, "placeholder.svg"), once);
    }

    #[test]
    fn basename_and_placeholder_helpers() {
        assert_eq!(logo_basename("images/logos/openai.png"), "openai.png");
        assert_eq!(logo_basename("openai.png"), "openai.png");
        assert!(is_placeholder("images/logos/placeholder.svg"));
        assert!(!is_placeholder("images/logos/openai.png"));
        assert_eq!(logo_reference("openai.png"), "images/logos/openai.png");
    }

    #[test]
    fn agents_detected_by_category_or_name() {
        let by_category = Record::new().with("name", "Data Analyst").with("category", "ai-agents");
        let by_name = Record::new().with("name", "Support AGENT").with("category", "customer-experience");
        let company = Record::new().with("name", "Intercom").with("category", "customer-experience");
        assert!(is_agent(&by_category));
        assert!(is_agent(&by_name));
        assert!(!is_agent(&company));
    }
}
