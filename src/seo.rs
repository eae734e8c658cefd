use serde_json::json;

use crate::content;

/// Head metadata for the rendered page, derived from the page address at
/// render time.
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
}

pub fn landing_meta(canonical: &str) -> PageMeta {
    PageMeta {
        title: "Vaastu Acceleron | Vastu Consultant Services".to_owned(),
        description: "Expert Vastu consultant for homes, offices, factories, hospitals, \
hotels, plots and shops. Email, on-site and walk-in consultations."
            .to_owned(),
        canonical: canonical.to_owned(),
        og_title: "Vaastu Acceleron | Vastu Consultant".to_owned(),
        og_description: "Holistic Vastu guidance for residences and businesses. Email, \
on-site and walk-in consultations."
            .to_owned(),
    }
}

/// Canonical page address: the configured base URL when present, otherwise
/// derived from the request host.
pub fn canonical_url(base_url: &str, host: &str) -> String {
    if base_url.is_empty() {
        format!("http://{host}/")
    } else {
        format!("{}/", base_url.trim_end_matches('/'))
    }
}

/// schema.org ProfessionalService block with the three consultation
/// channels, serialized for an application/ld+json script tag.
pub fn professional_service_jsonld(canonical: &str) -> String {
    let channel = |name: &str| {
        json!({
            "@type": "ServiceChannel",
            "serviceUrl": format!("{canonical}#consultation"),
            "name": name,
        })
    };

    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": content::SITE_NAME,
        "url": canonical,
        "serviceType": "Vastu consultation",
        "areaServed": "Worldwide",
        "availableChannel": [
            channel("Email consultation"),
            channel("On-site consultation"),
            channel("Walk-in consultation"),
        ],
    })
    .to_string()
}
