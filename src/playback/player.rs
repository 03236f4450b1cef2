//! 타이머 기반 재생 드라이버
//!
//! 재생 상태와 타이머 핸들을 함께 소유한다. 모든 전이(start/pause/reset/load)는
//! 기존 타이머를 먼저 해제한 뒤에만 상태를 바꾸고 필요하면 다시 건다.
//! 따라서 동시에 동작하는 타이머는 최대 하나다.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::playback::state::{Playback, PlaybackState, TickOutcome};
use crate::playback::timer::{arm, TimerHandle};

/// 관찰자에게 전달되는 화면 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cursor: usize,
    pub state: PlaybackState,
    /// 트랙별 현재 스냅샷
    pub texts: Vec<String>,
}

impl Frame {
    fn capture(playback: &Playback) -> Self {
        Self {
            cursor: playback.cursor(),
            state: playback.state(),
            texts: playback.frames().into_iter().map(str::to_string).collect(),
        }
    }
}

type FrameObserver = Arc<dyn Fn(&Frame) + Send + Sync + 'static>;

fn lock(playback: &Mutex<Playback>) -> MutexGuard<'_, Playback> {
    // 관찰자 패닉으로 독이 들어도 상태 자체는 일관됨
    playback.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 재생 드라이버
pub struct Player {
    playback: Arc<Mutex<Playback>>,
    timer: Option<TimerHandle>,
    interval: Duration,
    observer: Option<FrameObserver>,
}

impl Player {
    pub fn new(interval: Duration) -> Self {
        Self {
            playback: Arc::new(Mutex::new(Playback::new(Vec::new()))),
            timer: None,
            interval,
            observer: None,
        }
    }

    /// 프레임 관찰자 설정 (start/pause/reset/load 직후와 매 틱마다 호출)
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Frame) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 새 입력: 타이머 해제, 트랙 교체, Idle
    pub fn load(&mut self, tracks: Vec<Vec<String>>) {
        self.disarm();
        lock(&self.playback).load(tracks);
        self.notify();
    }

    /// 문자열마다 단계를 생성해 로드
    pub fn load_texts(&mut self, texts: &[&str]) {
        self.disarm();
        *lock(&self.playback) = Playback::from_texts(texts);
        self.notify();
    }

    /// 재생 시작/재개
    pub fn start(&mut self) -> PlaybackState {
        self.disarm();
        let state = {
            let mut playback = lock(&self.playback);
            playback.start();
            playback.state()
        };
        self.notify();

        if state == PlaybackState::Playing {
            self.timer = Some(self.arm_ticker());
        }
        state
    }

    /// 일시정지
    pub fn pause(&mut self) -> PlaybackState {
        self.disarm();
        let state = {
            let mut playback = lock(&self.playback);
            playback.pause();
            playback.state()
        };
        self.notify();
        state
    }

    /// 커서 0, Idle (남은 타이머 없음)
    pub fn reset(&mut self) {
        self.disarm();
        lock(&self.playback).reset();
        self.notify();
    }

    /// 재생이 스스로 끝날 때까지 대기
    ///
    /// 일시정지 상태거나 재생 중이 아니면 즉시 반환한다.
    pub fn wait(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.wait();
        }
    }

    pub fn state(&self) -> PlaybackState {
        lock(&self.playback).state()
    }

    pub fn cursor(&self) -> usize {
        lock(&self.playback).cursor()
    }

    /// 현재 화면 상태
    pub fn snapshot(&self) -> Frame {
        Frame::capture(&lock(&self.playback))
    }

    /// 타이머가 동작 중인지
    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_armed)
    }

    /// 기존 타이머 해제 (락을 잡지 않은 상태에서 호출해야 함)
    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let frame = self.snapshot();
            observer(&frame);
        }
    }

    fn arm_ticker(&self) -> TimerHandle {
        let playback = Arc::clone(&self.playback);
        let observer = self.observer.clone();

        arm(self.interval, move || {
            let (outcome, frame) = {
                let mut playback = lock(&playback);
                let outcome = playback.tick();
                (outcome, Frame::capture(&playback))
            };
            if let Some(observer) = &observer {
                observer(&frame);
            }
            if outcome == TickOutcome::Completed {
                log::info!("재생 완료 (단계 {})", frame.cursor + 1);
            }
            outcome == TickOutcome::Advanced
        })
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("interval", &self.interval)
            .field("armed", &self.is_armed())
            .finish_non_exhaustive()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.disarm();
    }
}
