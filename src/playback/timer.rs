//! 반복 타이머
//!
//! 전용 스레드가 채널 명령을 기다리며 일정 간격으로 틱 콜백을 호출한다.
//! `arm()`이 돌려주는 핸들이 타이머의 유일한 소유자이며,
//! 취소는 스레드 종료까지 기다리므로 취소가 반환된 뒤에는 틱이 발생하지 않는다.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// 타이머 명령
#[derive(Debug)]
enum TimerCommand {
    /// 타이머 정지
    Stop,
}

/// 동작 중인 타이머 핸들 (drop 시 취소)
#[derive(Debug)]
pub struct TimerHandle {
    tx: Sender<TimerCommand>,
    thread: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// 타이머 취소 (타이머 스레드 종료까지 대기)
    pub fn cancel(mut self) {
        self.stop();
    }

    /// 콜백이 스스로 멈출 때까지 대기 (취소 명령은 보내지 않음)
    pub fn wait(mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("타이머 스레드 패닉");
            }
        }
    }

    /// 타이머 스레드가 아직 살아있는지
    pub fn is_armed(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn stop(&mut self) {
        // 스레드가 이미 스스로 끝났으면 수신자가 없어 실패함
        let _ = self.tx.send(TimerCommand::Stop);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("타이머 스레드 패닉");
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// 반복 타이머 시작
///
/// `on_tick`이 `false`를 반환하면 타이머가 스스로 멈춘다.
pub fn arm<F>(interval: Duration, mut on_tick: F) -> TimerHandle
where
    F: FnMut() -> bool + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<TimerCommand>();

    let thread = thread::spawn(move || loop {
        match rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                if !on_tick() {
                    log::debug!("타이머 자체 종료");
                    break;
                }
            }
            Ok(TimerCommand::Stop) | Err(RecvTimeoutError::Disconnected) => {
                log::debug!("타이머 취소");
                break;
            }
        }
    });

    TimerHandle {
        tx,
        thread: Some(thread),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_ticks_until_callback_stops() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_for_timer = Arc::clone(&count);
        let handle = arm(Duration::from_millis(1), move || {
            count_for_timer.fetch_add(1, Ordering::SeqCst) + 1 < 3
        });

        for _ in 0..500 {
            if !handle.is_armed() {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert!(!handle.is_armed());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_no_tick_after_cancel() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_for_timer = Arc::clone(&count);
        let handle = arm(Duration::from_millis(1), move || {
            count_for_timer.fetch_add(1, Ordering::SeqCst);
            true
        });
        thread::sleep(Duration::from_millis(10));
        handle.cancel();

        let after_cancel = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn test_drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_for_timer = Arc::clone(&count);
        {
            let _handle = arm(Duration::from_millis(1), move || {
                count_for_timer.fetch_add(1, Ordering::SeqCst);
                true
            });
            thread::sleep(Duration::from_millis(5));
        }
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
