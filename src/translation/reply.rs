//! 번역 모델 응답 파싱
//!
//! 언어 감지/번역/한글 발음 표기는 외부 언어 모델이 수행한다.
//! 여기서는 모델의 텍스트 응답을 받아 애니메이션에 넘길 결과로 정리한다.
//!
//! # 응답 형식
//! ```json
//! {
//!   "detectedLanguage": "en",
//!   "source": { "translation": "Hello", "pronunciation": "헬로" },
//!   "ko": { "translation": "안녕하세요", "pronunciation": "안녕하세요" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::languages::display_info;

/// 응답 파싱 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 응답에 텍스트가 없음
    EmptyReply,
    /// JSON 파싱 실패
    Parse(String),
    /// 필수 필드 누락
    MissingField(&'static str),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::EmptyReply => write!(f, "빈 응답"),
            TranslationError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            TranslationError::MissingField(name) => write!(f, "필드 누락: {}", name),
        }
    }
}

impl std::error::Error for TranslationError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelReply {
    detected_language: Option<String>,
    source: Option<ReplySide>,
    ko: Option<ReplySide>,
}

#[derive(Debug, Deserialize)]
struct ReplySide {
    translation: Option<String>,
    pronunciation: Option<String>,
}

/// 번역 결과
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub source_language_code: String,
    /// 감지된 언어의 원문
    pub source_text: String,
    /// 원문의 한글 발음 표기
    pub source_pronunciation: String,
    pub korean_translation: String,
    /// 원문의 한글 발음 표기 (영어 기준)
    pub korean_pronunciation: String,
}

/// 화면에 한 줄로 보여줄 언어별 결과
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LanguageCard {
    pub code: String,
    pub name: &'static str,
    pub flag: &'static str,
    pub translation: String,
    pub pronunciation: String,
}

impl TranslationResult {
    /// 애니메이션 대상 문자열 (원문 발음, 한국어 발음)
    pub fn pronunciations(&self) -> [&str; 2] {
        [self.source_pronunciation.as_str(), self.korean_pronunciation.as_str()]
    }

    /// 감지된 언어 카드와 한국어 카드
    pub fn cards(&self) -> [LanguageCard; 2] {
        let (source_name, source_flag) = display_info(&self.source_language_code);
        let (ko_name, ko_flag) = display_info("ko");
        [
            LanguageCard {
                code: self.source_language_code.clone(),
                name: source_name,
                flag: source_flag,
                translation: self.source_text.clone(),
                pronunciation: self.source_pronunciation.clone(),
            },
            LanguageCard {
                code: "ko".to_string(),
                name: ko_name,
                flag: ko_flag,
                translation: self.korean_translation.clone(),
                pronunciation: self.korean_pronunciation.clone(),
            },
        ]
    }
}

/// 마크다운 코드 블록 표시 제거
fn strip_code_fences(reply: &str) -> String {
    reply
        .replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn required(value: Option<String>, name: &'static str) -> Result<String, TranslationError> {
    value.ok_or(TranslationError::MissingField(name))
}

/// 모델의 텍스트 응답을 번역 결과로 변환
pub fn parse_model_reply(reply: &str) -> Result<TranslationResult, TranslationError> {
    let body = strip_code_fences(reply);
    if body.is_empty() {
        return Err(TranslationError::EmptyReply);
    }

    let parsed: ModelReply =
        serde_json::from_str(&body).map_err(|e| TranslationError::Parse(e.to_string()))?;

    let source = parsed.source.ok_or(TranslationError::MissingField("source"))?;
    let ko = parsed.ko.ok_or(TranslationError::MissingField("ko"))?;

    let result = TranslationResult {
        source_language_code: required(parsed.detected_language, "detectedLanguage")?,
        source_text: required(source.translation, "source.translation")?,
        source_pronunciation: required(source.pronunciation, "source.pronunciation")?,
        korean_translation: required(ko.translation, "ko.translation")?,
        korean_pronunciation: required(ko.pronunciation, "ko.pronunciation")?,
    };
    log::debug!("감지된 언어: {}", result.source_language_code);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "detectedLanguage": "en",
        "source": { "translation": "Good morning", "pronunciation": "굿 모닝" },
        "ko": { "translation": "좋은 아침", "pronunciation": "굿 모닝" }
    }"#;

    #[test]
    fn test_parse_plain_reply() {
        let result = parse_model_reply(REPLY).unwrap();
        assert_eq!(result.source_language_code, "en");
        assert_eq!(result.source_text, "Good morning");
        assert_eq!(result.korean_translation, "좋은 아침");
        assert_eq!(result.pronunciations(), ["굿 모닝", "굿 모닝"]);
    }

    #[test]
    fn test_parse_fenced_reply() {
        let fenced = format!("```json\n{}\n```", REPLY);
        assert_eq!(parse_model_reply(&fenced), parse_model_reply(REPLY));

        let bare_fence = format!("```\n{}```", REPLY);
        assert!(parse_model_reply(&bare_fence).is_ok());
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(parse_model_reply("  "), Err(TranslationError::EmptyReply));
        assert_eq!(parse_model_reply("```json\n```"), Err(TranslationError::EmptyReply));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_model_reply("죄송합니다"),
            Err(TranslationError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_fields() {
        let no_ko = r#"{"detectedLanguage":"ja","source":{"translation":"こんにちは","pronunciation":"곤니치와"}}"#;
        assert_eq!(parse_model_reply(no_ko), Err(TranslationError::MissingField("ko")));

        let no_pron = r#"{"detectedLanguage":"ja",
            "source":{"translation":"こんにちは","pronunciation":"곤니치와"},
            "ko":{"translation":"안녕하세요"}}"#;
        assert_eq!(
            parse_model_reply(no_pron),
            Err(TranslationError::MissingField("ko.pronunciation"))
        );
    }

    #[test]
    fn test_cards() {
        let mut result = parse_model_reply(REPLY).unwrap();
        let [source, ko] = result.cards();
        assert_eq!((source.name, source.flag), ("English", "🇺🇸"));
        assert_eq!((ko.code.as_str(), ko.name), ("ko", "한국어"));
        assert_eq!(ko.translation, "좋은 아침");

        result.source_language_code = "de".into();
        let [source, _] = result.cards();
        assert_eq!(source.name, "Unknown");
    }

    #[test]
    fn test_result_serde_camel_case() {
        let result = parse_model_reply(REPLY).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"sourceLanguageCode\":\"en\""));
        let parsed: TranslationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
