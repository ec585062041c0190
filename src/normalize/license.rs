//! License-string normalization.
//!
//! An ordered rule engine maps the hundreds of raw license-name variants
//! found across hardware-project registries onto a small canonical
//! vocabulary. The first case-insensitive match wins, so specific variants
//! (CC BY-NC-SA) are listed before the general ones that would otherwise
//! shadow them (CC BY-SA, CC BY). Unrecognized input maps to `"Other"`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Ordered (pattern, canonical id) rules. Skip values that carry no license
/// signal sit at the top and short-circuit to "Other".
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    const TABLE: &[(&str, &str)] = &[
        // Special / skip values
        (r"^no software$", "Other"),
        (r"^other$", "Other"),
        (r"^null$", "Other"),
        (r"^various$", "Other"),
        (r"^imported", "Other"),
        (r"mendeley", "Other"),
        // CC0
        (r"cc.?0|cc zero|public.?domain|creative commons.{0,5}zero", "CC0-1.0"),
        // CC BY-NC-ND
        (r"cc.?by.?nc.?nd.?4", "CC-BY-NC-ND-4.0"),
        (r"cc.?by.?nc.?nd", "CC-BY-NC-ND-4.0"),
        // CC BY-NC-SA
        (r"cc.?by.?nc.?sa.?4|noncommercial.?sharealike.?4", "CC-BY-NC-SA-4.0"),
        (r"cc.?by.?nc.?sa|noncommercial.?sharealike", "CC-BY-NC-SA-4.0"),
        // CC BY-NC
        (r"cc.?by.?nc.?4", "CC-BY-NC-4.0"),
        (r"cc.?by.?nc.?3", "CC-BY-NC-3.0"),
        (r"cc.?by.?nc", "CC-BY-NC-4.0"),
        // CC BY-SA (after BY-NC-SA)
        (r"cc.?by.?sa.?4|attribution.?sharealike.?4|share.?alike.?4", "CC-BY-SA-4.0"),
        (r"cc.?by.?sa.?3|attribution.?sharealike.?3", "CC-BY-SA-3.0"),
        (r"cc.?by.?sa|attribution.?sharealike|share.?alike", "CC-BY-SA-4.0"),
        // CC BY (after all BY-* variants)
        (r"cc.?by.?4|attribution.?4\.0", "CC-BY-4.0"),
        (r"cc.?by.?3|attribution.?3\.0", "CC-BY-3.0"),
        (r"cc.?by.?2", "CC-BY-2.0"),
        (r"cc.?by|creative commons.{0,5}attribution", "CC-BY-4.0"),
        // CERN OHL variants (specific before generic)
        (r"cern.?ohl.?s.?2|cern.{0,30}strongly.?reciprocal", "CERN-OHL-S-2.0"),
        (r"cern.?ohl.?w.?2|cern.{0,30}weakly.?reciprocal", "CERN-OHL-W-2.0"),
        (r"cern.?ohl.?p.?2|cern.{0,30}permissive", "CERN-OHL-P-2.0"),
        (r"cern.?ohl.?s", "CERN-OHL-S-2.0"),
        (r"cern.?ohl.?w", "CERN-OHL-W-2.0"),
        (r"cern.?ohl.?p", "CERN-OHL-P-2.0"),
        (r"cern.?ohl.?1\.2|cern.?ohl.?v\.?1", "CERN-OHL-1.2"),
        (r"cern.?ohl.?v?2|cern.{0,20}version.?2", "CERN-OHL-S-2.0"),
        (r"cern", "CERN-OHL"),
        // TAPR
        (r"tapr", "TAPR-OHL"),
        // Solderpad
        (r"solderpad.{0,10}2\.1|shl.?2\.1", "Solderpad-2.1"),
        (r"solderpad|shl.?2", "Solderpad-2.0"),
        // AGPL
        (r"agpl|affero", "AGPL-3.0-or-later"),
        // LGPL
        (r"lgpl.?3|lesser.{0,10}3", "LGPL-3.0-or-later"),
        (r"lgpl|lesser general", "LGPL-3.0-or-later"),
        // GPL (after AGPL/LGPL)
        (r"gpl.?3\.0.?or.?later", "GPL-3.0-or-later"),
        (r"gpl.?3\.0.?only", "GPL-3.0-only"),
        (r"gpl.?v?3|gpl.?3|gnu.{0,30}3|general public license.{0,10}3", "GPL-3.0-or-later"),
        (r"gpl.?v?2|gpl.?2|gnu.{0,30}2|general public license.{0,10}2", "GPL-2.0-or-later"),
        (r"gpl|gnu general public", "GPL-3.0-or-later"),
        // Apache
        (r"apache.?2", "Apache-2.0"),
        (r"apache", "Apache-2.0"),
        // BSD
        (r"bsd.?3|bsd three|berkeley", "BSD-3-Clause"),
        (r"bsd.?2", "BSD-2-Clause"),
        (r"bsd", "BSD-3-Clause"),
        // MIT
        (r"mit", "MIT"),
        // Mozilla
        (r"mozilla|mpl", "MPL-2.0"),
        // Creative Commons URLs
        (r"creativecommons\.org/licen[sc]es/by-sa", "CC-BY-SA-4.0"),
        (r"creativecommons\.org/licen[sc]es/by-nc", "CC-BY-NC-4.0"),
        (r"creativecommons\.org/licen[sc]es/by", "CC-BY-4.0"),
        (r"creative.?commons", "CC-BY-4.0"),
    ];

    TABLE
        .iter()
        .map(|&(pattern, canonical)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("static regex");
            (regex, canonical)
        })
        .collect()
});

/// Compound-license separators, tried in order. Each carries a
/// case-insensitive splitter so " AND " splits like " and ".
static SEPARATORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [";", " and ", " / ", ", "]
        .into_iter()
        .map(|token| {
            let splitter = RegexBuilder::new(&regex::escape(token))
                .case_insensitive(true)
                .build()
                .expect("static regex");
            (token, splitter)
        })
        .collect()
});

fn match_rules(text: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|&(_, canonical)| canonical)
}

/// Map a raw license string to a canonical identifier.
///
/// Compound inputs ("MIT; Apache-2.0") resolve each part independently and
/// join the deduplicated ids, sorted, with `" + "`. A separator inside a
/// single license's prose does not compound: splitting must yield at least
/// two independently resolvable parts, otherwise the single resolved id (or
/// whole-string matching) applies. Anything unrecognized is `"Other"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return "Other".to_string();
    }

    let lowered = text.to_lowercase();
    for (token, splitter) in SEPARATORS.iter() {
        if !lowered.contains(token) {
            continue;
        }
        let parts: Vec<&str> = splitter
            .split(text)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() < 2 {
            continue;
        }

        let mut ids: Vec<&'static str> = Vec::new();
        for part in &parts {
            if let Some(id) = match_rules(part) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        if ids.len() > 1 {
            ids.sort_unstable();
            return ids.join(" + ");
        }
        if let Some(id) = ids.first() {
            return (*id).to_string();
        }
    }

    match_rules(text).map_or_else(|| "Other".to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_variants_win_over_general() {
        assert_eq!(normalize("CC-BY-NC-SA 4.0"), "CC-BY-NC-SA-4.0");
        assert_eq!(normalize("CC BY-NC-ND"), "CC-BY-NC-ND-4.0");
        assert_eq!(normalize("CC-BY-SA-4.0"), "CC-BY-SA-4.0");
        assert_eq!(normalize("CC BY 4.0"), "CC-BY-4.0");
        assert_eq!(normalize("CERN OHL v2 strongly reciprocal"), "CERN-OHL-S-2.0");
        assert_eq!(normalize("CERN-OHL-W-2.0"), "CERN-OHL-W-2.0");
    }

    #[test]
    fn test_gpl_family_ordering() {
        assert_eq!(normalize("AGPL"), "AGPL-3.0-or-later");
        assert_eq!(normalize("LGPL v3"), "LGPL-3.0-or-later");
        assert_eq!(normalize("GPL-3.0-only"), "GPL-3.0-only");
        assert_eq!(normalize("GNU GPL v2"), "GPL-2.0-or-later");
        assert_eq!(normalize("GPL"), "GPL-3.0-or-later");
    }

    #[test]
    fn test_common_software_licenses() {
        assert_eq!(normalize("MIT License"), "MIT");
        assert_eq!(normalize("Apache License 2.0"), "Apache-2.0");
        assert_eq!(normalize("BSD 3-clause"), "BSD-3-Clause");
        assert_eq!(normalize("Mozilla Public License"), "MPL-2.0");
        assert_eq!(normalize("TAPR OHL"), "TAPR-OHL");
        assert_eq!(normalize("Solderpad v2.1"), "Solderpad-2.1");
    }

    #[test]
    fn test_skip_values_are_other() {
        assert_eq!(normalize(""), "Other");
        assert_eq!(normalize("   "), "Other");
        assert_eq!(normalize("No Software"), "Other");
        assert_eq!(normalize("various"), "Other");
        assert_eq!(normalize("imported from registry"), "Other");
        assert_eq!(normalize("completely unknown text"), "Other");
    }

    #[test]
    fn test_compound_licenses() {
        assert_eq!(normalize("MIT; Apache-2.0"), "Apache-2.0 + MIT");
        assert_eq!(normalize("CERN-OHL-S-2.0 and MIT"), "CERN-OHL-S-2.0 + MIT");
        assert_eq!(normalize("MIT / MIT"), "MIT");
    }

    #[test]
    fn test_separator_in_prose_does_not_compound() {
        // The second part resolves to nothing, so the single id wins.
        assert_eq!(normalize("GNU GPL v3, or later"), "GPL-3.0-or-later");
    }

    #[test]
    fn test_url_forms() {
        assert_eq!(
            normalize("see https://creativecommons.org/licenses/by-sa/4.0/"),
            "CC-BY-SA-4.0"
        );
    }
}
