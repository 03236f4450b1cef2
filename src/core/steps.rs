//! 타이핑 애니메이션 단계 생성기
//!
//! 문자열을 왼쪽부터 읽으며 한 글자씩 "만들어지는" 과정을 스냅샷 문자열로 만든다.
//! 완성형 음절은 초성 → 초성+중성 → (종성이 있으면) 완성 음절 순으로 2~3단계,
//! 그 외 문자(공백, 영문, 문장부호)는 한 단계에 통째로 드러난다.
//!
//! 빈 입력은 빈 시퀀스를 만든다. 첫 단계가 빈 문자열인 경우는 없다.

use std::vec;

use crate::core::unicode::{decompose, decompose_syllable, is_syllable, CodecError};

/// 애니메이션 단계 이터레이터
///
/// 입력 문자열 외에 숨은 상태가 없으므로 `clone()`하거나 다시 만들면 처음부터 재생된다.
#[derive(Debug, Clone)]
pub struct AnimationSteps<'a> {
    chars: std::str::Chars<'a>,
    /// 확정된 앞부분
    acc: String,
    /// 현재 조합 중인 음절의 남은 중간 모양 (마지막 원소가 완성형)
    pending: vec::IntoIter<char>,
}

impl<'a> AnimationSteps<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            acc: String::with_capacity(text.len()),
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for AnimationSteps<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(partial) = self.pending.next() {
            if self.pending.as_slice().is_empty() {
                // 음절 완성: 확정 부분에 붙임
                self.acc.push(partial);
                return Some(self.acc.clone());
            }
            let mut step = self.acc.clone();
            step.push(partial);
            return Some(step);
        }

        let c = self.chars.next()?;
        if is_syllable(c) {
            match syllable_frames(c) {
                Ok(frames) => {
                    self.pending = frames.into_iter();
                    return self.next();
                }
                Err(e) => {
                    // 범위 검사를 통과한 음절에서는 발생하지 않음
                    log::error!("음절 분해 실패, 그대로 출력: {}", e);
                }
            }
        }

        self.acc.push(c);
        Some(self.acc.clone())
    }
}

/// 한 음절이 만들어지는 중간 모양: [초성, 초성+중성, (완성 음절)]
fn syllable_frames(c: char) -> Result<Vec<char>, CodecError> {
    let triple = decompose(c)?;
    let mut frames = vec![triple.lead, triple.initial_with_vowel()?];
    if triple.has_tail() {
        frames.push(triple.syllable()?);
    }
    Ok(frames)
}

/// 문자열의 애니메이션 단계 전체를 생성
pub fn generate_steps(text: &str) -> Vec<String> {
    AnimationSteps::new(text).collect()
}

/// 단계 수만 계산 (음절 2~3단계, 그 외 문자 1단계)
pub fn step_count(text: &str) -> usize {
    text.chars()
        .map(|c| match decompose_syllable(c) {
            Some((_, _, 0)) => 2,
            Some(_) => 3,
            None => 1,
        })
        .sum()
}
