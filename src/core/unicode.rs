//! 유니코드 한글 음절 조합/분해 (자모 코덱)
//!
//! 완성형 음절 블록(U+AC00..=U+D7A3)과 초성/중성/종성 사이를 오가는
//! 순수 함수 모음. 자모 기호는 화면에 단독으로 보여줄 수 있는
//! 호환용 자모(U+3131..=U+3163)를 사용한다.

use std::fmt;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 호환용 자모 (초성 인덱스 순서)
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 호환용 자모: ㅏ(0x314F) ~ ㅣ(0x3163), 코드포인트가 인덱스 순서와 같음
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 호환용 자모 (종성 인덱스 1~27, 인덱스 0 = 종성 없음은 제외)
#[rustfmt::skip]
const JONGSEONG_JAMO: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 자모 코덱 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// 분해 대상이 정확히 한 글자의 완성형 음절이 아님
    InvalidInput(String),
    /// 조합에 쓰인 초성 또는 중성이 테이블에 없음
    InvalidJamo { lead: char, vowel: char },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidInput(s) => write!(f, "완성형 한글 음절이 아님: {:?}", s),
            CodecError::InvalidJamo { lead, vowel } => {
                write!(f, "조합할 수 없는 자모: 초성 {:?}, 중성 {:?}", lead, vowel)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음은 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    JONGSEONG_JAMO.get(jong as usize - 1).copied()
}

/// 호환용 자모 -> 초성 인덱스
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 -> 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 -> 종성 인덱스 (1~27)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32 + 1)
}

/// 한 음절의 자모 구성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JamoTriple {
    /// 초성
    pub lead: char,
    /// 중성
    pub vowel: char,
    /// 종성 (없으면 None)
    pub tail: Option<char>,
}

impl JamoTriple {
    pub fn has_tail(&self) -> bool {
        self.tail.is_some()
    }

    /// 종성을 뺀 초성+중성 음절
    pub fn initial_with_vowel(&self) -> Result<char, CodecError> {
        compose(self.lead, self.vowel, None)
    }

    /// 종성까지 포함한 완성 음절
    pub fn syllable(&self) -> Result<char, CodecError> {
        compose(self.lead, self.vowel, self.tail)
    }
}

/// 완성형 음절을 초성/중성/종성 자모로 분해
///
/// 완성형 음절이 아닌 문자는 그대로 돌려주지 않고 `InvalidInput`으로 거부한다.
/// 호출자는 먼저 [`is_syllable`]로 걸러야 한다.
pub fn decompose(c: char) -> Result<JamoTriple, CodecError> {
    let (cho, jung, jong) =
        decompose_syllable(c).ok_or_else(|| CodecError::InvalidInput(c.to_string()))?;

    // 범위 안의 음절이면 세 인덱스 모두 테이블 안에 있음
    let lead = choseong_to_jamo_char(cho).ok_or_else(|| CodecError::InvalidInput(c.to_string()))?;
    let vowel =
        jungseong_to_jamo_char(jung).ok_or_else(|| CodecError::InvalidInput(c.to_string()))?;

    Ok(JamoTriple {
        lead,
        vowel,
        tail: jongseong_to_jamo_char(jong),
    })
}

/// 문자열 입력 분해: 정확히 한 글자가 아니면 `InvalidInput`
pub fn decompose_str(s: &str) -> Result<JamoTriple, CodecError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => decompose(c),
        _ => Err(CodecError::InvalidInput(s.to_string())),
    }
}

/// 초성/중성/종성 자모로 완성형 음절 조합
///
/// 초성이나 중성이 테이블에 없으면 `InvalidJamo`.
/// 종성이 없거나 종성 테이블에 없는 문자면 종성 없음(0)으로 조합한다.
pub fn compose(lead: char, vowel: char, tail: Option<char>) -> Result<char, CodecError> {
    let invalid = || CodecError::InvalidJamo { lead, vowel };
    let cho = choseong_index(lead).ok_or_else(invalid)?;
    let jung = jungseong_index(vowel).ok_or_else(invalid)?;
    let jong = tail.and_then(jongseong_index).unwrap_or(0);

    compose_syllable(cho, jung, jong).ok_or_else(invalid)
}
