//! 애니메이션 재생
//!
//! `Playback`은 타이머와 무관한 순수 상태 기계이고,
//! `Player`는 그 상태를 반복 타이머 하나로 진행시키는 드라이버다.
//!
//! ```
//! use sejong::playback::{Playback, PlaybackState, TickOutcome};
//!
//! let mut playback = Playback::from_texts(&["가", "hi"]);
//! playback.start();
//! assert_eq!(playback.tick(), TickOutcome::Completed);
//! assert_eq!(playback.state(), PlaybackState::Completed);
//! assert_eq!(playback.frames(), vec!["가", "hi"]);
//! ```

mod player;
mod state;
mod timer;

pub use player::{Frame, Player};
pub use state::{Playback, PlaybackState, TickOutcome};
pub use timer::{arm, TimerHandle};
