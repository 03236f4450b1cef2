//! 번역 결과 (외부 언어 모델 응답)
//!
//! 두 발음 표기 문자열이 애니메이션 단계 생성기의 입력이 된다.

mod languages;
mod reply;

pub use languages::{display_info, find_language, Language, LANGUAGES};
pub use reply::{parse_model_reply, LanguageCard, TranslationError, TranslationResult};
