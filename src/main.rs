//! sejong - 한글 자모 조합 타이핑 애니메이션

use clap::Parser;
use sejong::config::{load_config, save_config, SejongConfig};
use sejong::generate_steps;
use sejong::playback::{Frame, PlaybackState, Player};
use sejong::translation::parse_model_reply;
use std::fs;
use std::io::{self, Read, Write};
use std::process;
use std::thread;

#[derive(Parser, Debug)]
#[command(name = "sejong")]
#[command(version)]
#[command(about = "한글 음절이 자모 단위로 조합되는 과정을 터미널에서 재생")]
struct Cli {
    /// 애니메이션 없이 단계 목록만 출력
    #[arg(long)]
    steps: bool,

    /// 번역 모델 응답(JSON) 파일, "-"는 표준 입력. 두 발음 표기를 나란히 재생
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    reply: Option<String>,

    /// 한 단계 간격 (ms), 설정 파일 값보다 우선
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// 현재 설정(--interval 반영)을 설정 파일에 저장
    #[arg(long)]
    save_config: bool,

    /// 재생할 텍스트
    #[arg(required_unless_present_any = ["reply", "save_config"])]
    text: Vec<String>,
}

impl Cli {
    /// 설정 파일 값에 명령줄 옵션 덮어쓰기
    fn apply_to(&self, mut config: SejongConfig) -> SejongConfig {
        if let Some(ms) = self.interval {
            config.tick_interval_ms = ms;
        }
        config
    }

    fn has_input(&self) -> bool {
        self.reply.is_some() || !self.text.is_empty()
    }
}

fn read_reply(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("표준 입력 읽기 실패: {}", e))?;
        Ok(content)
    } else {
        fs::read_to_string(path).map_err(|e| format!("응답 파일 읽기 실패 ({}): {}", path, e))
    }
}

/// 애니메이션 대상 문자열 목록
fn load_texts(cli: &Cli) -> Result<Vec<String>, String> {
    let Some(path) = &cli.reply else {
        return Ok(vec![cli.text.join(" ")]);
    };

    let result = parse_model_reply(&read_reply(path)?).map_err(|e| e.to_string())?;
    for card in result.cards() {
        println!("{} {}: {}", card.flag, card.name, card.translation);
    }
    Ok(result
        .pronunciations()
        .iter()
        .map(|s| s.to_string())
        .collect())
}

fn render(frame: &Frame) {
    let line = frame.texts.join("   │   ");
    let mut stdout = io::stdout().lock();
    // 줄을 지우고 다시 그림
    let _ = write!(stdout, "\r\x1b[2K{}", line);
    if frame.state == PlaybackState::Completed {
        let _ = writeln!(stdout);
    }
    let _ = stdout.flush();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = cli.apply_to(load_config());

    if cli.save_config {
        let path = save_config(&config)?;
        println!("설정 저장: {}", path.display());
    }
    if !cli.has_input() {
        return Ok(());
    }

    let texts = load_texts(&cli)?;

    if cli.steps {
        for (i, text) in texts.iter().enumerate() {
            if texts.len() > 1 {
                println!("[{}]", i + 1);
            }
            for step in generate_steps(text) {
                println!("{}", step);
            }
        }
        return Ok(());
    }

    log::debug!("재생 간격 {}ms", config.tick_interval_ms);
    let mut player = Player::new(config.tick_interval()).with_observer(render);
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    player.load_texts(&refs);
    player.start();
    player.wait();
    thread::sleep(config.hold());
    Ok(())
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_text_args() {
        let cli = Cli::try_parse_from(["sejong", "안녕", "세상"]).unwrap();
        assert!(!cli.steps);
        assert_eq!(cli.text, vec!["안녕", "세상"]);
        assert_eq!(load_texts(&cli).unwrap(), vec!["안녕 세상"]);
    }

    #[test]
    fn test_reply_args() {
        let cli = Cli::try_parse_from(["sejong", "--steps", "--reply", "-"]).unwrap();
        assert!(cli.steps);
        assert_eq!(cli.reply.as_deref(), Some("-"));
        assert!(cli.has_input());
    }

    #[test]
    fn test_reply_conflicts_with_text() {
        let err = Cli::try_parse_from(["sejong", "--reply", "a.json", "안녕"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_input_required() {
        let err = Cli::try_parse_from(["sejong"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(Cli::try_parse_from(["sejong", "--reply"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["sejong", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_save_config_without_text() {
        let cli = Cli::try_parse_from(["sejong", "--save-config", "--interval", "80"]).unwrap();
        assert!(cli.save_config);
        assert!(!cli.has_input());

        let config = cli.apply_to(SejongConfig::default());
        assert_eq!(config.tick_interval_ms, 80);
        assert_eq!(config.hold_ms, SejongConfig::default().hold_ms);
    }

    #[test]
    fn test_interval_defaults_to_config() {
        let cli = Cli::try_parse_from(["sejong", "가"]).unwrap();
        assert_eq!(cli.apply_to(SejongConfig::default()), SejongConfig::default());
    }
}
