//! 재생 상태 기계
//!
//! 여러 문자열의 애니메이션 단계를 공유 커서 하나로 나란히 진행한다.
//! 짧은 트랙은 끝에 도달하면 마지막 단계를 계속 보여주고,
//! 가장 긴 트랙의 마지막 단계에 도달하면 `Completed`가 된다.

use crate::core::steps::generate_steps;

/// 재생 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// 정지 (커서 0)
    Idle,
    /// 재생 중
    Playing,
    /// 일시정지
    Paused,
    /// 모든 트랙 재생 완료 (마지막 스냅샷 유지)
    Completed,
}

/// 한 틱의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 커서가 한 칸 전진
    Advanced,
    /// 이번 틱으로 재생 완료
    Completed,
    /// 재생 중이 아니어서 무시됨
    Ignored,
}

/// 나란히 재생되는 단계 트랙과 공유 커서
#[derive(Debug, Clone)]
pub struct Playback {
    tracks: Vec<Vec<String>>,
    cursor: usize,
    state: PlaybackState,
}

impl Playback {
    pub fn new(tracks: Vec<Vec<String>>) -> Self {
        Self {
            tracks,
            cursor: 0,
            state: PlaybackState::Idle,
        }
    }

    /// 문자열마다 단계를 생성해 트랙으로 사용
    pub fn from_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| generate_steps(t)).collect())
    }

    /// 새 입력: 트랙 교체 후 Idle로
    pub fn load(&mut self, tracks: Vec<Vec<String>>) {
        self.tracks = tracks;
        self.reset();
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 가장 긴 트랙의 단계 수
    pub fn len(&self) -> usize {
        self.tracks.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// 재생 시작/재개
    ///
    /// Idle, Paused에서만 전이한다. Completed는 reset/load로만 벗어난다.
    /// 반환: 상태가 바뀌었는지 여부
    pub fn start(&mut self) -> bool {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                // 단계가 하나 이하면 이미 끝에 있음
                if self.cursor >= self.last_index() {
                    self.cursor = self.last_index();
                    self.state = PlaybackState::Completed;
                }
                true
            }
            PlaybackState::Playing | PlaybackState::Completed => false,
        }
    }

    /// 일시정지 (Playing에서만)
    pub fn pause(&mut self) -> bool {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            true
        } else {
            false
        }
    }

    /// 어느 상태에서든 커서 0, Idle
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }

    /// 커서 한 칸 전진
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != PlaybackState::Playing {
            return TickOutcome::Ignored;
        }
        if self.cursor < self.last_index() {
            self.cursor += 1;
        }
        if self.cursor >= self.last_index() {
            self.state = PlaybackState::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// 트랙의 현재 스냅샷 (짧은 트랙은 마지막 단계 유지, 빈 트랙은 "")
    pub fn frame(&self, track: usize) -> Option<&str> {
        let steps = self.tracks.get(track)?;
        let shown = match steps.get(self.cursor) {
            Some(step) => step.as_str(),
            None => steps.last().map(String::as_str).unwrap_or(""),
        };
        Some(shown)
    }

    /// 모든 트랙의 현재 스냅샷
    pub fn frames(&self) -> Vec<&str> {
        (0..self.tracks.len())
            .filter_map(|i| self.frame(i))
            .collect()
    }
}
