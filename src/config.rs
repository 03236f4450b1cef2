//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 재생 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SejongConfig {
    /// 애니메이션 한 단계 간격 (ms)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// 재생 완료 후 마지막 화면 유지 시간 (ms)
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    120
}

fn default_hold_ms() -> u64 {
    800
}

impl Default for SejongConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            hold_ms: default_hold_ms(),
        }
    }
}

impl SejongConfig {
    pub fn tick_interval(&self) -> Duration {
        // 0ms 간격은 바쁜 루프가 되므로 최소 1ms
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

fn absolute_dir(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/sejong/config.json 또는 ~/.config/sejong/config.json
pub fn config_path() -> PathBuf {
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("sejong").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SejongConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> SejongConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            SejongConfig::default()
        }),
        Err(_) => SejongConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SejongConfig) -> Result<PathBuf, String> {
    let path = config_path();
    save_config_to(&path, config)?;
    Ok(path)
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(path: &Path, config: &SejongConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    log::info!("설정 저장: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SejongConfig::default();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.hold_ms, 800);
        assert_eq!(config.tick_interval(), Duration::from_millis(120));
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = SejongConfig {
            tick_interval_ms: 60,
            hold_ms: 0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SejongConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let json = r#"{"tick_interval_ms": 300}"#;
        let config: SejongConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tick_interval_ms, 300);
        assert_eq!(config.hold_ms, 800);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = SejongConfig {
            tick_interval_ms: 0,
            hold_ms: 0,
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("sejong-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = SejongConfig {
            tick_interval_ms: 45,
            hold_ms: 10,
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_broken_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("sejong-broken-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config_from(&path), SejongConfig::default());
        assert_eq!(
            load_config_from(&dir.join("missing.json")),
            SejongConfig::default()
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_file_name() {
        assert!(config_path().ends_with("sejong/config.json"));
    }
}
