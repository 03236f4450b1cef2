//! 지원 언어 목록

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 언어 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// 언어 코드 (ISO 639-1)
    pub code: &'static str,
    /// 해당 언어로 쓴 언어 이름
    pub name: &'static str,
    pub flag: &'static str,
}

/// 감지 가능한 언어 (한국어 포함)
pub static LANGUAGES: [Language; 8] = [
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "ja", name: "日本語", flag: "🇯🇵" },
    Language { code: "vi", name: "Tiếng Việt", flag: "🇻🇳" },
    Language { code: "th", name: "ภาษาไทย", flag: "🇹🇭" },
    Language { code: "es", name: "Español", flag: "🇪🇸" },
    Language { code: "fr", name: "Français", flag: "🇫🇷" },
    Language { code: "it", name: "Italiano", flag: "🇮🇹" },
    Language { code: "ko", name: "한국어", flag: "🇰🇷" },
];

/// 목록에 없는 코드의 표시용 이름
pub const UNKNOWN_NAME: &str = "Unknown";
/// 목록에 없는 코드의 표시용 깃발
pub const UNKNOWN_FLAG: &str = "🏳️";

lazy_static! {
    static ref BY_CODE: HashMap<&'static str, &'static Language> =
        LANGUAGES.iter().map(|lang| (lang.code, lang)).collect();
}

/// 코드로 언어 조회
pub fn find_language(code: &str) -> Option<&'static Language> {
    BY_CODE.get(code).copied()
}

/// 표시용 (이름, 깃발). 모르는 코드면 Unknown
pub fn display_info(code: &str) -> (&'static str, &'static str) {
    find_language(code)
        .map(|lang| (lang.name, lang.flag))
        .unwrap_or((UNKNOWN_NAME, UNKNOWN_FLAG))
}
