//! Registrable domain label extraction ("example" in "www.example.co.uk").

use url::{Host, Url};

// Two-level public suffixes that are common enough in search results to
// matter. Anything else is treated as a single-label suffix.
const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "ac.uk", "co.uk", "gov.uk", "ltd.uk", "me.uk", "org.uk", "plc.uk",
    "com.au", "net.au", "org.au", "edu.au", "gov.au",
    "co.nz", "net.nz", "org.nz",
    "co.jp", "ne.jp", "or.jp",
    "co.in", "net.in", "org.in", "firm.in",
    "co.za", "org.za",
    "co.kr", "or.kr",
    "com.br", "net.br", "org.br",
    "com.cn", "net.cn", "org.cn",
    "com.mx", "org.mx",
    "com.sg", "com.hk", "com.tw", "com.tr", "com.ar", "com.co",
    "co.il", "org.il",
];

/// Returns the label directly left of the host's public suffix, lowercased.
/// Malformed URLs, IP hosts and single-label hosts yield an empty string.
pub fn domain_label_of(url: &str) -> String {
    let parsed = match Url::parse(url).or_else(|_| Url::parse(&format!("http://{}", url.trim())))
    {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };
    let host = match parsed.host() {
        Some(Host::Domain(domain)) => domain.trim_end_matches('.').to_lowercase(),
        _ => return String::new(),
    };

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    let n = labels.len();
    if n < 2 {
        return String::new();
    }

    let tail = format!("{}.{}", labels[n - 2], labels[n - 1]);
    if SECOND_LEVEL_SUFFIXES.contains(&tail.as_str()) {
        if n < 3 {
            return String::new();
        }
        return labels[n - 3].to_string();
    }
    labels[n - 2].to_string()
}
