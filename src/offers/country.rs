//! 国家代码 → 旗帜/名称 静态表

use serde::Serialize;

use super::models::WORLDWIDE;

/// 展示用的国家信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDisplay {
    pub code: String,
    pub flag: Option<&'static str>,
    pub label: String,
}

static COUNTRIES: &[(&str, &str, &str)] = &[
    ("US", "🇺🇸", "United States"),
    ("CA", "🇨🇦", "Canada"),
    ("GB", "🇬🇧", "United Kingdom"),
    ("UK", "🇬🇧", "United Kingdom"),
    ("AU", "🇦🇺", "Australia"),
    ("NZ", "🇳🇿", "New Zealand"),
    ("IE", "🇮🇪", "Ireland"),
    ("DE", "🇩🇪", "Germany"),
    ("FR", "🇫🇷", "France"),
    ("ES", "🇪🇸", "Spain"),
    ("IT", "🇮🇹", "Italy"),
    ("NL", "🇳🇱", "Netherlands"),
    ("BE", "🇧🇪", "Belgium"),
    ("CH", "🇨🇭", "Switzerland"),
    ("AT", "🇦🇹", "Austria"),
    ("SE", "🇸🇪", "Sweden"),
    ("NO", "🇳🇴", "Norway"),
    ("DK", "🇩🇰", "Denmark"),
    ("FI", "🇫🇮", "Finland"),
    ("PL", "🇵🇱", "Poland"),
    ("PT", "🇵🇹", "Portugal"),
    ("BR", "🇧🇷", "Brazil"),
    ("MX", "🇲🇽", "Mexico"),
    ("AR", "🇦🇷", "Argentina"),
    ("CL", "🇨🇱", "Chile"),
    ("CO", "🇨🇴", "Colombia"),
    ("IN", "🇮🇳", "India"),
    ("CN", "🇨🇳", "China"),
    ("JP", "🇯🇵", "Japan"),
    ("KR", "🇰🇷", "South Korea"),
    ("SG", "🇸🇬", "Singapore"),
    ("ID", "🇮🇩", "Indonesia"),
    ("PH", "🇵🇭", "Philippines"),
    ("TH", "🇹🇭", "Thailand"),
    ("VN", "🇻🇳", "Vietnam"),
    ("MY", "🇲🇾", "Malaysia"),
    ("AE", "🇦🇪", "United Arab Emirates"),
    ("SA", "🇸🇦", "Saudi Arabia"),
    ("TR", "🇹🇷", "Turkey"),
    ("IL", "🇮🇱", "Israel"),
    ("ZA", "🇿🇦", "South Africa"),
    ("NG", "🇳🇬", "Nigeria"),
    ("EG", "🇪🇬", "Egypt"),
    ("RU", "🇷🇺", "Russia"),
    ("UA", "🇺🇦", "Ukraine"),
];

/// 查询国家展示信息
///
/// 未知代码退化为"无旗帜、原样代码作为名称"
pub fn country_info(code: &str) -> CountryDisplay {
    let trimmed = code.trim();
    if trimmed.eq_ignore_ascii_case(WORLDWIDE) {
        return CountryDisplay {
            code: WORLDWIDE.to_string(),
            flag: Some("🌍"),
            label: WORLDWIDE.to_string(),
        };
    }

    COUNTRIES
        .iter()
        .find(|(c, _, _)| c.eq_ignore_ascii_case(trimmed))
        .map(|(c, flag, label)| CountryDisplay {
            code: (*c).to_string(),
            flag: Some(*flag),
            label: (*label).to_string(),
        })
        .unwrap_or_else(|| CountryDisplay {
            code: trimmed.to_string(),
            flag: None,
            label: trimmed.to_string(),
        })
}
